use super::Cursor;
use std::borrow::Borrow;
use std::cell::RefCell;
use std::hash::Hash;

impl<K: Hash + Eq> Cursor<K> {
    /// Bookmarks the current position with `key`. Bookmarking the same
    /// position twice has no effect.
    pub fn set_bookmark(&mut self, key: K) {
        RefCell::borrow_mut(&self.document)
            .bookmarks_mut()
            .insert(key, self.index);
    }

    /// Removes the `key` bookmark from the current position, if there is one.
    pub fn clear_bookmark<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        RefCell::borrow_mut(&self.document)
            .bookmarks_mut()
            .remove(key, self.index);
    }

    /// Moves to the first position bookmarked with `key`.
    pub fn to_first_bookmark<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let first = RefCell::borrow(&self.document).bookmarks().first(key);

        self.move_to(first)
    }

    /// Moves to the first position bookmarked with `key` that follows the
    /// current one.
    pub fn to_next_bookmark<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let next = RefCell::borrow(&self.document)
            .bookmarks()
            .next_after(key, self.index);

        self.move_to(next)
    }

    #[inline]
    fn move_to(&mut self, index: Option<isize>) -> bool {
        match index {
            Some(index) => {
                self.index = index;

                trace!(@cursor "to_bookmark", index);

                true
            }
            None => false,
        }
    }
}
