//! Error types that can be returned when a [`Document`] is constructed.
//!
//! Navigation and editing never fail: a missed move is reported as `false`
//! and a failed structural query as [`Token::None`].
//!
//! [`Document`]: crate::Document
//! [`Token::None`]: crate::Token::None

use thiserror::Error;

/// An error that occurs while the input is converted into a token sequence.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The XML tokenizer rejected the input.
    #[error("Malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The input ended while elements were still open.
    #[error("Input ended with {count} unclosed element(s).")]
    UnclosedElements { count: usize },

    /// An end tag was met with no open element to close.
    #[error("End tag `{name}` doesn't close any open element.")]
    UnmatchedEndElement { name: String },

    /// The input bytes can't be decoded with the configured encoding.
    #[error("Input contains byte sequences that are invalid in the `{encoding}` encoding.")]
    UndecodableInput { encoding: &'static str },

    /// A name or a markup payload isn't valid UTF-8.
    #[error("Token contains invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// The input stream couldn't be read.
    #[error("Failed to read the input: {0}")]
    Io(#[from] std::io::Error),
}
