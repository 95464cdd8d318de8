//! An ordered set backed by a height-balanced binary search tree.
//!
//! An [`AvlTree`] holds a set of unique values ordered by their [`Ord`]
//! implementation. After every insert and removal the tree restores the AVL
//! invariant (the heights of any node's two subtrees differ by at most 1)
//! with at most O(log n) local rotations, keeping lookups, inserts and
//! removals at O(log n) comparisons in the worst case.
//!
//! Duplicate values are rejected, and the rejection is reported to the caller
//! rather than silently dropped:
//!
//! ```
//! use avlset::AvlTree;
//!
//! let mut t = AvlTree::default();
//!
//! t.insert(42)?;
//! t.insert(24)?;
//!
//! assert!(t.contains(&42));
//! assert_eq!(t.dump_sorted(), "24 42");
//!
//! // Inserting a duplicate is rejected and leaves the set unchanged.
//! assert!(t.insert(42).is_err());
//!
//! // Removal hands the stored element back.
//! assert_eq!(t.remove(&42), Ok(42));
//! assert!(!t.contains(&42));
//! # Ok::<(), avlset::DuplicateValue<i32>>(())
//! ```

mod dump;
mod error;
mod iter;
mod node;
mod tree;


pub use error::*;
pub use tree::*;
