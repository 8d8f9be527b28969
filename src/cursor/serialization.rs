use super::Cursor;
use crate::document::{Token, TokenKind};
use crate::serializer::{write_start_element, DefaultNamespaceScopes, Serialize};
use encoding_rs::{Encoding, UTF_8};
use std::hash::Hash;
use std::rc::Rc;

impl<K: Hash + Eq> Cursor<K> {
    /// Serializes markup starting at the current token, encoded with the
    /// document's encoding, into `output_sink`.
    ///
    /// From a start element the element with all of its content is written.
    /// From any other token the output runs up to the end of the enclosing
    /// element (or of the document). An unpositioned cursor writes the whole
    /// document. The cursor is left where it was.
    ///
    /// Unprefixed elements get an `xmlns` declaration wherever the default
    /// namespace in scope of the output differs from their own namespace.
    pub fn write_xml(&mut self, output_sink: &mut dyn FnMut(&[u8])) {
        let encoding = self.document.borrow().encoding();

        self.serialize(encoding, output_sink);
    }

    /// Same as [`write_xml`](Cursor::write_xml), but returns UTF-8 text
    /// regardless of the document's encoding.
    ///
    /// Output that starts at a leaf token stops in front of the end tag of
    /// the enclosing element, which is never written, so the text is always
    /// well-formed.
    pub fn to_xml_text(&mut self) -> String {
        let mut output = Vec::new();

        self.serialize(UTF_8, &mut |chunk: &[u8]| output.extend_from_slice(chunk));

        String::from_utf8_lossy(&output).into_owned()
    }

    fn serialize(&mut self, encoding: &'static Encoding, output_handler: &mut dyn FnMut(&[u8])) {
        let shared = Rc::clone(&self.document);
        let document = shared.borrow();
        let mut scopes = DefaultNamespaceScopes::default();
        let mut write = |index: isize| match document.token(index) {
            Token::StartElement(start) => {
                let declaration = scopes.enter(start);

                write_start_element(start, declaration.as_deref(), encoding, &mut *output_handler);
            }
            token => {
                if token.is_end() {
                    scopes.leave();
                }

                token.to_bytes(encoding, &mut *output_handler);
            }
        };

        let mut scope = self.scoped();
        let first = scope.current_kind();

        match first {
            TokenKind::None => {
                for index in 0..document.len() as isize {
                    write(index);
                }

                return;
            }
            // NOTE: the element closed here was opened before the cursor.
            TokenKind::End => return,
            _ => write(scope.index),
        }

        let mut depth = usize::from(first == TokenKind::Start);

        while depth > 0 || first != TokenKind::Start {
            match scope.step_forward() {
                TokenKind::None => break,
                TokenKind::Start => depth += 1,
                TokenKind::End if depth == 0 => break,
                TokenKind::End => depth -= 1,
                _ => (),
            }

            write(scope.index);
        }
    }
}
