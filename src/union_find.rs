use crate::error::{DisjointSetError, Result};
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::{self, Display};
use displaydoc::Display;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
/// {parent} (rank {rank})
pub struct Element {
    /// Roots point to themselves.
    pub parent: usize,
    /// Upper bound on the height of the subtree rooted here. Only meaningful for roots, and only
    /// used to pick the merge direction; path compression never lowers it.
    pub rank: usize,
}

/// A partition of `0..len` into classes that can only ever grow by merging.
///
/// All lookups compress paths, so even queries take `&mut self`.
#[derive(Clone, Debug, Default)]
pub struct DisjointSetForest {
    elements: Vec<Element>,
    n_sets: usize,
}

impl DisjointSetForest {
    pub fn new(len: usize) -> Self {
        Self {
            elements: (0..len).map(|parent| Element { parent, rank: 0 }).collect(),
            n_sets: len,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The raw forest, as left by the latest compressions.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// The number of distinct classes.
    pub fn count(&self) -> usize {
        self.n_sets
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.elements.len() {
            Ok(())
        } else {
            Err(DisjointSetError::OutOfRange {
                index,
                len: self.elements.len(),
            })
        }
    }

    /// Returns the representative of the class containing `index`.
    ///
    /// Only `index` itself is re-pointed at the root; the intermediate elements on the walk keep
    /// their parents.
    pub fn find_root(&mut self, index: usize) -> Result<usize> {
        self.check(index)?;
        Ok(self.find_root_unchecked(index))
    }

    pub(crate) fn find_root_unchecked(&mut self, index: usize) -> usize {
        let mut root = index;
        while self.elements[root].parent != root {
            root = self.elements[root].parent;
        }
        self.elements[index].parent = root;
        root
    }

    pub fn same_set(&mut self, a: usize, b: usize) -> Result<bool> {
        self.check(a)?;
        self.check(b)?;
        Ok(self.find_root_unchecked(a) == self.find_root_unchecked(b))
    }

    /// The rank of the root of the class containing `index`.
    pub fn rank(&mut self, index: usize) -> Result<usize> {
        let root = self.find_root(index)?;
        Ok(self.elements[root].rank)
    }

    /// Unites the classes of `a` and `b`. Returns `false` if they were already the same class.
    ///
    /// On equal ranks, `a`'s root survives as the representative.
    pub fn merge(&mut self, a: usize, b: usize) -> Result<bool> {
        // Nothing may be touched until both indices are known to be valid
        self.check(a)?;
        self.check(b)?;

        let a = self.find_root_unchecked(a);
        let b = self.find_root_unchecked(b);
        if a == b {
            return Ok(false);
        }

        let root = match self.elements[a].rank.cmp(&self.elements[b].rank) {
            Ordering::Less => {
                self.elements[a].parent = b;
                b
            }
            Ordering::Greater => {
                self.elements[b].parent = a;
                a
            }
            Ordering::Equal => {
                self.elements[a].rank += 1;
                self.elements[b].parent = a;
                a
            }
        };
        self.n_sets -= 1;

        log::trace!(
            "merged roots {a} and {b} into {root}, {} classes left",
            self.n_sets
        );
        Ok(true)
    }
}

impl Display for DisjointSetForest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, element) in self.elements.iter().enumerate() {
            write!(f, "{i}: {element}\n")?;
        }
        write!(
            f,
            "{} elements in {} classes",
            self.elements.len(),
            self.n_sets
        )
    }
}
