//! Token encoder: turns single tokens back into markup.

use crate::base::Bytes;
use crate::document::{Attribute, EndElement, ProcessingInstruction, StartElement, Token};
use encoding_rs::Encoding;

pub trait Serialize {
    fn to_bytes(&self, encoding: &'static Encoding, output_handler: &mut dyn FnMut(&[u8]));
}

#[inline]
fn write_raw(text: &str, encoding: &'static Encoding, output_handler: &mut dyn FnMut(&[u8])) {
    if !text.is_empty() {
        output_handler(&Bytes::from_str(text, encoding));
    }
}

// NOTE: escaping runs before encoding, so that character references
// emitted by the encoder for unmappable characters stay intact.
#[inline]
fn write_escaped(
    text: &str,
    replacements: [(u8, &[u8]); 3],
    encoding: &'static Encoding,
    output_handler: &mut dyn FnMut(&[u8]),
) {
    let [repl1, repl2, repl3] = replacements;

    Bytes::from(text.as_bytes()).replace_byte3(repl1, repl2, repl3, &mut |chunk: &[u8]| {
        // Chunks are split on ASCII bytes only and are valid UTF-8.
        output_handler(&Bytes::from_str(&String::from_utf8_lossy(chunk), encoding));
    });
}

#[inline]
fn write_text(text: &str, encoding: &'static Encoding, output_handler: &mut dyn FnMut(&[u8])) {
    write_escaped(
        text,
        [(b'<', b"&lt;"), (b'>', b"&gt;"), (b'&', b"&amp;")],
        encoding,
        output_handler,
    );
}

#[inline]
fn write_attribute_value(
    value: &str,
    encoding: &'static Encoding,
    output_handler: &mut dyn FnMut(&[u8]),
) {
    write_escaped(
        value,
        [(b'"', b"&quot;"), (b'<', b"&lt;"), (b'&', b"&amp;")],
        encoding,
        output_handler,
    );
}

impl Serialize for Attribute {
    fn to_bytes(&self, encoding: &'static Encoding, output_handler: &mut dyn FnMut(&[u8])) {
        write_raw(self.name(), encoding, output_handler);
        output_handler(b"=\"");
        write_attribute_value(self.value(), encoding, output_handler);
        output_handler(b"\"");
    }
}

/// Writes a start element, optionally with an extra default namespace
/// declaration in front of its own attributes.
pub(crate) fn write_start_element(
    start: &StartElement,
    default_namespace: Option<&str>,
    encoding: &'static Encoding,
    output_handler: &mut dyn FnMut(&[u8]),
) {
    output_handler(b"<");
    write_raw(&start.qualified_name(), encoding, output_handler);

    if let Some(namespace) = default_namespace {
        output_handler(b" xmlns=\"");
        write_attribute_value(namespace, encoding, output_handler);
        output_handler(b"\"");
    }

    for attr in start.attributes() {
        output_handler(b" ");
        attr.to_bytes(encoding, output_handler);
    }

    output_handler(b">");
}

impl Serialize for StartElement {
    #[inline]
    fn to_bytes(&self, encoding: &'static Encoding, output_handler: &mut dyn FnMut(&[u8])) {
        write_start_element(self, None, encoding, output_handler);
    }
}

/// Default namespaces in scope of the elements written so far.
///
/// Unprefixed elements take the default namespace of their written parent
/// once the markup is parsed again, which may differ from the namespace the
/// element has in the document: e.g. a new element without a namespace
/// inserted into an element with `xmlns="urn:a"`, or a subtree written
/// without its ancestors.
#[derive(Debug, Default)]
pub(crate) struct DefaultNamespaceScopes {
    stack: Vec<String>,
}

impl DefaultNamespaceScopes {
    /// Opens the scope of `start`. Returns the default namespace declaration
    /// the element needs to keep its namespace, if any.
    pub fn enter(&mut self, start: &StartElement) -> Option<String> {
        let inherited = self.stack.last().map_or("", String::as_str);
        let namespace = &start.name().namespace;

        let (in_scope, declaration) = match start.attribute("xmlns") {
            Some(declared) => (declared.to_owned(), None),
            None if start.prefix().is_none() && namespace != inherited => {
                (namespace.clone(), Some(namespace.clone()))
            }
            None => (inherited.to_owned(), None),
        };

        self.stack.push(in_scope);

        declaration
    }

    #[inline]
    pub fn leave(&mut self) {
        self.stack.pop();
    }
}

impl Serialize for EndElement {
    fn to_bytes(&self, encoding: &'static Encoding, output_handler: &mut dyn FnMut(&[u8])) {
        output_handler(b"</");
        write_raw(&self.qualified_name(), encoding, output_handler);
        output_handler(b">");
    }
}

impl Serialize for ProcessingInstruction {
    fn to_bytes(&self, encoding: &'static Encoding, output_handler: &mut dyn FnMut(&[u8])) {
        output_handler(b"<?");
        write_raw(self.target(), encoding, output_handler);

        if !self.instruction().is_empty() {
            output_handler(b" ");
            write_raw(self.instruction(), encoding, output_handler);
        }

        output_handler(b"?>");
    }
}

impl Serialize for Token {
    fn to_bytes(&self, encoding: &'static Encoding, output_handler: &mut dyn FnMut(&[u8])) {
        match self {
            Token::StartElement(start) => start.to_bytes(encoding, output_handler),
            Token::EndElement(end) => end.to_bytes(encoding, output_handler),
            Token::Text(text) => write_text(text, encoding, output_handler),
            Token::Comment(text) => {
                output_handler(b"<!--");
                write_raw(text, encoding, output_handler);
                output_handler(b"-->");
            }
            Token::ProcessingInstruction(pi) => pi.to_bytes(encoding, output_handler),
            Token::Directive(text) => {
                output_handler(b"<!");
                write_raw(text, encoding, output_handler);
                output_handler(b">");
            }
            Token::None => (),
        }
    }
}
