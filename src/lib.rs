//! Cursor-based navigation and in-place editing of XML documents.
//!
//! A [`Document`] stores markup as a flat sequence of [`Token`]s in document
//! order. Tree structure is implied by the nesting of start and end element
//! tokens. All traversal and editing is performed with a [`Cursor`]: a
//! position in the sequence with a stack of saved positions. Any number of
//! cursors can share a document, and named bookmarks stay attached to their
//! tokens while content is inserted in front of them.
//!
//! ```
//! use xml_cursor::{Cursor, Document, QName};
//!
//! let document = Document::parse("<list><item>one</item></list>").unwrap();
//! let mut cursor: Cursor = Cursor::new(document);
//!
//! cursor.to_start_doc();
//! cursor.to_end_token();
//! cursor.insert_element_with_text(QName::local("item"), "two");
//!
//! cursor.to_start_doc();
//!
//! assert_eq!(
//!     cursor.to_xml_text(),
//!     "<list><item>one</item><item>two</item></list>"
//! );
//! ```

#[macro_use]
mod base;

mod cursor;
mod document;
mod parser;
mod serializer;

pub mod errors;

pub use self::cursor::Cursor;
pub use self::document::{
    Attribute, Document, EndElement, ProcessingInstruction, QName, SharedDocument, StartElement,
    Token, TokenKind,
};
pub use self::errors::ParseError;
pub use self::parser::{ParseSettings, TokenCaptureFlags};
pub use encoding_rs;
