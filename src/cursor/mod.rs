//! Cursors: movable positions over a [`Document`]'s token sequence.
//!
//! All traversal, editing and serialization of a document goes through a
//! cursor. Several cursors may share one document; edits made through any
//! of them are immediately visible to the others.

mod bookmarks;
mod mutations;
mod scope;
mod serialization;
mod traversal;

use self::scope::ScopedPosition;
use crate::document::{Document, SharedDocument, Token, TokenKind};
use std::cell::{Ref, RefCell};
use std::cmp::Ordering;
use std::hash::Hash;
use std::rc::Rc;

/// Position before the first token of a document.
const UNPOSITIONED: isize = -1;

/// A position in a document plus a stack of saved positions.
///
/// The position is an index into the token sequence, where `-1` means
/// "before the first token".
pub struct Cursor<K = String> {
    document: SharedDocument<K>,
    index: isize,
    stack: Vec<isize>,
}

impl<K: Hash + Eq> Cursor<K> {
    /// Creates an unpositioned cursor over `document`.
    pub fn new(document: Document<K>) -> Self {
        Cursor::from_shared(Rc::new(RefCell::new(document)))
    }

    /// Creates an unpositioned cursor over a document that may already be
    /// shared with other cursors.
    pub fn from_shared(document: SharedDocument<K>) -> Self {
        Cursor {
            document,
            index: UNPOSITIONED,
            stack: Vec::new(),
        }
    }

    /// Creates another cursor over the same document at the same position.
    ///
    /// The new cursor starts with an empty position stack.
    pub fn new_cursor(&self) -> Self {
        Cursor {
            document: Rc::clone(&self.document),
            index: self.index,
            stack: Vec::new(),
        }
    }

    #[inline]
    pub fn document(&self) -> Ref<'_, Document<K>> {
        self.document.borrow()
    }

    #[inline]
    pub fn index(&self) -> isize {
        self.index
    }

    /// Token at the current position, or [`Token::None`] if the cursor is
    /// outside of the token sequence.
    pub fn current_token(&self) -> Token {
        self.document.borrow().token(self.index).clone()
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.document.borrow().kind_at(self.index)
    }

    /// Moves to the first token of the document. Stays unpositioned if the
    /// document is empty.
    pub fn to_start_doc(&mut self) {
        self.index = if self.document.borrow().is_empty() {
            UNPOSITIONED
        } else {
            0
        };

        trace!(@cursor "to_start_doc", self.index);
    }

    /// Saves the current position on the position stack.
    #[inline]
    pub fn push(&mut self) {
        self.stack.push(self.index);
    }

    /// Discards the most recently saved position.
    ///
    /// The cursor doesn't move: restoring a saved position is up to the caller.
    #[inline]
    pub fn pop(&mut self) {
        self.stack.pop();
    }

    /// Saves the current position and returns a guard that moves the cursor
    /// back to it when dropped, unless the guard is committed.
    #[inline]
    fn scoped(&mut self) -> ScopedPosition<'_, K> {
        ScopedPosition::new(self)
    }

    #[inline]
    pub fn is_left_of(&self, other: &Cursor<K>) -> bool {
        self.compare_position(other) == Ordering::Less
    }

    #[inline]
    pub fn is_right_of(&self, other: &Cursor<K>) -> bool {
        self.compare_position(other) == Ordering::Greater
    }

    #[inline]
    pub fn is_at_same_position_as(&self, other: &Cursor<K>) -> bool {
        self.compare_position(other) == Ordering::Equal
    }

    /// Compares document positions of two cursors over the same document.
    #[inline]
    pub fn compare_position(&self, other: &Cursor<K>) -> Ordering {
        debug_assert!(Rc::ptr_eq(&self.document, &other.document));

        self.index.cmp(&other.index)
    }
}
