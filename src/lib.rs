//! A merge-only partition of the indices `0..len` into equivalence classes, backed by a
//! disjoint-set forest with union by rank and path compression.
//!
//! ```
//! use djset::DisjointSetForest;
//!
//! let mut forest = DisjointSetForest::new(5);
//! forest.merge(0, 1)?;
//! forest.merge(2, 3)?;
//! forest.merge(1, 2)?;
//! assert_eq!(forest.count(), 2);
//! assert!(forest.same_set(0, 3)?);
//! assert_eq!(
//!     forest.collate("abcde".chars())?,
//!     [vec!['a', 'b', 'c', 'd'], vec!['e']],
//! );
//! # Ok::<(), djset::DisjointSetError>(())
//! ```

extern crate alloc;

mod collate;
mod error;
mod union_find;

pub use crate::error::{DisjointSetError, Result};
pub use crate::union_find::{DisjointSetForest, Element};
