use super::{Cursor, UNPOSITIONED};
use crate::document::{QName, Token, TokenKind};
use std::hash::Hash;

// NOTE: only elements are navigable. Text, comments, processing
// instructions and directives between elements are skipped by child and
// sibling moves.
impl<K: Hash + Eq> Cursor<K> {
    /// Moves one token forward unless the cursor is on the last token.
    pub(super) fn step_forward(&mut self) -> TokenKind {
        let document = self.document.borrow();

        if self.index + 1 >= document.len() as isize {
            return TokenKind::None;
        }

        self.index += 1;

        document.kind_at(self.index)
    }

    /// Moves one token backward unless the cursor is on the first token.
    pub(super) fn step_backward(&mut self) -> TokenKind {
        if self.index < 1 {
            return TokenKind::None;
        }

        self.index -= 1;

        self.current_kind()
    }

    #[inline]
    pub(super) fn current_name_is(&self, name: &QName) -> bool {
        self.document.borrow().token(self.index).name() == name
    }

    /// Moves to the next token and returns it. At the last token the cursor
    /// stays in place and [`Token::None`] is returned.
    pub fn to_next_token(&mut self) -> Token {
        match self.step_forward() {
            TokenKind::None => Token::None,
            _ => self.current_token(),
        }
    }

    /// Moves to the previous token and returns it. At the first token the
    /// cursor stays in place and [`Token::None`] is returned.
    pub fn to_previous_token(&mut self) -> Token {
        match self.step_backward() {
            TokenKind::None => Token::None,
            _ => self.current_token(),
        }
    }

    /// Returns the nearest start element at or before the current position.
    ///
    /// The cursor is left where it was.
    pub fn to_start_token(&mut self) -> Token {
        let mut scope = self.scoped();

        loop {
            if scope.current_kind() == TokenKind::Start {
                return scope.current_token();
            }

            if scope.index <= 0 {
                return Token::None;
            }

            scope.index -= 1;
        }
    }

    /// Moves from a start element to its matching end element and returns it.
    ///
    /// Returns [`Token::None`] without moving if the cursor isn't on a start
    /// element. If the document ends before the element is closed,
    /// [`Token::None`] is returned and the cursor stays on the last token.
    pub fn to_end_token(&mut self) -> Token {
        if self.current_kind() != TokenKind::Start {
            return Token::None;
        }

        let mut depth = 1usize;

        loop {
            match self.step_forward() {
                TokenKind::None => return Token::None,
                TokenKind::Start => depth += 1,
                TokenKind::End => {
                    depth -= 1;

                    if depth == 0 {
                        trace!(@cursor "to_end_token", self.index);

                        return self.current_token();
                    }
                }
                _ => (),
            }
        }
    }

    /// Moves to the first child element of the current start element.
    ///
    /// An unpositioned cursor moves to the first top-level element.
    pub fn to_first_child(&mut self) -> bool {
        if self.index != UNPOSITIONED && self.current_kind() != TokenKind::Start {
            return false;
        }

        let mut scope = self.scoped();

        loop {
            match scope.step_forward() {
                TokenKind::Start => return scope.commit(),
                TokenKind::End | TokenKind::None => return false,
                _ => (),
            }
        }
    }

    /// Moves to the first child element named `name`.
    pub fn to_first_child_by_name(&mut self, name: &QName) -> bool {
        let mut scope = self.scoped();

        if !scope.to_first_child() {
            return false;
        }

        if scope.current_name_is(name) || scope.to_next_sibling_by_name(name) {
            scope.commit()
        } else {
            false
        }
    }

    /// Moves from the current start element to the start of the following
    /// sibling element.
    pub fn to_next_sibling(&mut self) -> bool {
        if self.current_kind() != TokenKind::Start {
            return false;
        }

        let mut scope = self.scoped();

        if scope.to_end_token().is_none() {
            return false;
        }

        loop {
            match scope.step_forward() {
                TokenKind::Start => {
                    trace!(@cursor "to_next_sibling", scope.index);

                    return scope.commit();
                }
                TokenKind::End | TokenKind::None => return false,
                _ => (),
            }
        }
    }

    /// Moves to the closest following sibling element named `name`.
    pub fn to_next_sibling_by_name(&mut self, name: &QName) -> bool {
        let mut scope = self.scoped();

        while scope.to_next_sibling() {
            if scope.current_name_is(name) {
                return scope.commit();
            }
        }

        false
    }
}
