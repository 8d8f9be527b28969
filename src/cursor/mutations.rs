use super::Cursor;
use crate::document::{EndElement, QName, StartElement, Token};
use std::hash::Hash;

#[inline]
fn start_element(name: QName) -> Token {
    Token::StartElement(StartElement::new(name))
}

#[inline]
fn end_element(name: QName) -> Token {
    Token::EndElement(EndElement::new(name))
}

// NOTE: every insertion happens in front of the current token. Bookmarks
// at or after the insertion point are rebased by the document.
impl<K: Hash + Eq> Cursor<K> {
    /// Inserts `tokens` in front of the current token and moves the cursor to
    /// the first inserted one. Returns the insertion point.
    fn insert_tokens(&mut self, tokens: Vec<Token>) -> isize {
        // NOTE: an unpositioned cursor inserts at the start of the document.
        let position = self.index.max(0);

        self.document
            .borrow_mut()
            .insert_tokens(position as usize, tokens);

        self.index = position;

        position
    }

    /// Inserts an empty element and moves the cursor between its start and
    /// end, so that the following insertions end up inside of it.
    pub fn begin_element(&mut self, name: QName) {
        self.insert_tokens(vec![start_element(name.clone()), end_element(name)]);
        self.step_forward();

        trace!(@cursor "begin_element", self.index);
    }

    /// Inserts an empty element and moves the cursor past it, so that the
    /// following insertions become its siblings.
    pub fn insert_element(&mut self, name: QName) {
        self.begin_element(name);
        self.step_forward();
    }

    /// Inserts a text token and moves the cursor past it.
    pub fn insert_text(&mut self, text: impl Into<String>) {
        self.insert_tokens(vec![Token::Text(text.into())]);
        self.step_forward();
    }

    /// Inserts an element that contains a single text token and moves the
    /// cursor past the element.
    pub fn insert_element_with_text(&mut self, name: QName, text: impl Into<String>) {
        let position = self.insert_tokens(vec![
            start_element(name.clone()),
            Token::Text(text.into()),
            end_element(name),
        ]);

        self.index = position + 2;
        self.step_forward();
    }
}
