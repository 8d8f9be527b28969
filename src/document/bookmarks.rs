use hashbrown::HashMap;
use std::borrow::Borrow;
use std::hash::Hash;

/// Named sets of token indices.
///
/// The index list of every key is kept sorted in ascending order and free
/// of duplicates. Indices are rebased whenever tokens are inserted in front
/// of them, so a bookmark keeps referencing the same logical token.
#[derive(Debug)]
pub struct Bookmarks<K> {
    entries: HashMap<K, Vec<isize>>,
}

impl<K> Default for Bookmarks<K> {
    #[inline]
    fn default() -> Self {
        Bookmarks {
            entries: HashMap::new(),
        }
    }
}

impl<K: Hash + Eq> Bookmarks<K> {
    pub fn get<Q>(&self, key: &Q) -> &[isize]
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Adds `index` to the `key` list. Returns `false` if it is already there.
    pub fn insert(&mut self, key: K, index: isize) -> bool {
        let indices = self.entries.entry(key).or_default();

        match indices.binary_search(&index) {
            Ok(_) => false,
            Err(pos) => {
                indices.insert(pos, index);
                true
            }
        }
    }

    /// Removes `index` from the `key` list. Returns `false` if it isn't there.
    pub fn remove<Q>(&mut self, key: &Q, index: isize) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(indices) = self.entries.get_mut(key) else {
            return false;
        };

        // NOTE: the search position equals the list length when `index` is
        // greater than every stored one (or the list is empty), so only an
        // exact hit is removed.
        match indices.binary_search(&index) {
            Ok(pos) => {
                indices.remove(pos);

                if indices.is_empty() {
                    self.entries.remove(key);
                }

                true
            }
            Err(_) => false,
        }
    }

    pub fn first<Q>(&self, key: &Q) -> Option<isize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).first().copied()
    }

    /// Smallest index of the `key` list that is strictly greater than `index`.
    pub fn next_after<Q>(&self, key: &Q, index: isize) -> Option<isize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let indices = self.get(key);
        let pos = indices.partition_point(|&i| i <= index);

        indices.get(pos).copied()
    }

    /// Shifts every stored index that is `>= position` by `offset`.
    pub fn rebase(&mut self, position: isize, offset: isize) {
        trace!(@rebase position, offset);

        for indices in self.entries.values_mut() {
            let start = indices.partition_point(|&i| i < position);

            for index in &mut indices[start..] {
                *index += offset;
            }
        }
    }
}
