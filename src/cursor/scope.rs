use super::Cursor;
use std::ops::{Deref, DerefMut};

/// Temporarily repositioned cursor.
///
/// The position the cursor had when the guard was created is pushed on the
/// position stack and restored on drop, on every exit path. A committed
/// guard keeps the new position.
pub(super) struct ScopedPosition<'c, K> {
    cursor: &'c mut Cursor<K>,
    committed: bool,
}

impl<'c, K> ScopedPosition<'c, K> {
    #[inline]
    pub fn new(cursor: &'c mut Cursor<K>) -> Self {
        cursor.stack.push(cursor.index);

        ScopedPosition {
            cursor,
            committed: false,
        }
    }

    /// Keeps the current position and reports the move as successful.
    #[inline]
    pub fn commit(mut self) -> bool {
        self.committed = true;

        true
    }
}

impl<K> Deref for ScopedPosition<'_, K> {
    type Target = Cursor<K>;

    #[inline]
    fn deref(&self) -> &Cursor<K> {
        self.cursor
    }
}

impl<K> DerefMut for ScopedPosition<'_, K> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Cursor<K> {
        self.cursor
    }
}

impl<K> Drop for ScopedPosition<'_, K> {
    fn drop(&mut self) {
        let saved = self.cursor.stack.pop();

        if !self.committed {
            if let Some(index) = saved {
                self.cursor.index = index;
            }
        }
    }
}
