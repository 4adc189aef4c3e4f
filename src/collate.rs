use crate::error::{DisjointSetError, Result};
use crate::union_find::DisjointSetForest;
use alloc::vec::Vec;
use rustc_hash::FxHashMap;

impl DisjointSetForest {
    /// Distributes `inputs` (one payload per element, in index order) into one group per class.
    ///
    /// Groups are numbered by the order in which a scan over `0..len` first meets their class, and
    /// payloads keep their input order within a group. The numbering is only meaningful for the
    /// result of this call. Exactly `len` payloads are consumed; the rest of `inputs` is left
    /// untouched.
    ///
    /// Any container that can be grown one item at a time works as a group, e.g. `Vec<T>`,
    /// `VecDeque<T>`, or `String` for `char` payloads.
    pub fn collate_into<T, G: Default + Extend<T>>(
        &mut self,
        inputs: impl IntoIterator<Item = T>,
    ) -> Result<Vec<G>> {
        let len = self.len();
        // Fail before producing any group
        let payloads: Vec<T> = inputs.into_iter().take(len).collect();
        if payloads.len() < len {
            return Err(DisjointSetError::InsufficientInput {
                expected: len,
                actual: payloads.len(),
            });
        }
        Ok(self.distribute(payloads))
    }

    pub fn collate<T>(&mut self, inputs: impl IntoIterator<Item = T>) -> Result<Vec<Vec<T>>> {
        self.collate_into(inputs)
    }

    /// The element indices of each class, ascending, with classes ordered by their smallest
    /// element.
    pub fn classes(&mut self) -> Vec<Vec<usize>> {
        self.distribute((0..self.len()).collect())
    }

    fn distribute<T, G: Default + Extend<T>>(&mut self, payloads: Vec<T>) -> Vec<G> {
        let mut slots: FxHashMap<usize, usize> =
            FxHashMap::with_capacity_and_hasher(self.count(), Default::default());
        let mut groups: Vec<G> = (0..self.count()).map(|_| G::default()).collect();

        for (index, payload) in payloads.into_iter().enumerate() {
            let root = self.find_root_unchecked(index);
            let next_slot = slots.len();
            let slot = *slots.entry(root).or_insert(next_slot);
            groups[slot].extend(core::iter::once(payload));
        }

        debug_assert_eq!(slots.len(), groups.len());
        log::debug!(
            "collated {} elements into {} groups",
            self.len(),
            groups.len()
        );
        groups
    }
}
