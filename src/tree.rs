use std::fmt::Display;

use crate::{
    dump,
    error::{DuplicateValue, ValueNotFound},
    iter::Iter,
    node::{remove_recurse, Node, RemoveResult},
};

/// An ordered set of unique values, stored as a height-balanced binary search
/// tree.
///
/// The tree upholds the AVL invariant (the heights of any node's two subtrees
/// differ by at most 1) after every mutation, bounding a lookup, insert or
/// removal over n values to O(log n) comparisons.
///
/// Dropping an [`AvlTree`] releases every node, children before parents.
#[derive(Debug, Clone)]
pub struct AvlTree<T>(Option<Box<Node<T>>>);

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self(Default::default())
    }
}

impl<T> AvlTree<T>
where
    T: Ord,
{
    /// Add `value` to the set.
    ///
    /// A value that compares equal to one already in the set is rejected and
    /// handed back inside the returned [`DuplicateValue`], leaving the set
    /// unchanged.
    pub fn insert(&mut self, value: T) -> Result<(), DuplicateValue<T>> {
        match self.0 {
            Some(ref mut v) => v.insert(value),
            None => {
                self.0 = Some(Box::new(Node::new(value)));
                Ok(())
            }
        }
    }

    /// Remove the element equal to `value` from the set, returning it.
    ///
    /// Removing a value that is not in the set is a no-op, reported via
    /// [`ValueNotFound`].
    pub fn remove(&mut self, value: &T) -> Result<T, ValueNotFound> {
        match remove_recurse(&mut self.0, value) {
            Some(RemoveResult::Removed(v)) => Ok(v),
            Some(RemoveResult::ParentUnlink) => unreachable!(),
            None => Err(ValueNotFound),
        }
    }

    /// Return a reference to the stored element equal to `value`, if any.
    pub fn get(&self, value: &T) -> Option<&T> {
        self.0.as_ref().and_then(|v| v.get(value))
    }

    /// Return true if `value` is in the set.
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }
}

impl<T> AvlTree<T> {
    /// Iterate over the values in the set in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter().flat_map(|v| Iter::new(v)).map(|v| v.value())
    }

    /// Return true if the set holds no values.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Render the tree as a depth-indented pre-order dump.
    ///
    /// Each node appears as `[value]` on its own line, indented by one tab per
    /// tree level, with a blank line for each absent child.
    pub fn dump(&self) -> String
    where
        T: Display,
    {
        let mut buf = String::new();
        dump::write_tree(self.0.as_deref(), 0, &mut buf);
        buf
    }

    /// Render the values in the set in ascending order, separated by single
    /// spaces.
    pub fn dump_sorted(&self) -> String
    where
        T: Display,
    {
        let mut buf = String::new();
        dump::write_sorted(self.0.as_deref(), &mut buf);
        buf
    }
}
