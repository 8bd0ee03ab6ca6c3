//! Binomial Heap implementation
//!
//! A binomial heap is a forest of binomial trees with:
//! - O(log n) insert and delete_min
//! - O(log n) front (scan of the roots)
//! - O(log n) merge
//!
//! # Algorithm Overview
//!
//! The heap owns a single forest whose roots are kept in ascending degree
//! order with at most one tree per degree. This is the binary representation
//! of n: a heap of 7 elements holds trees of degree 0, 1 and 2.
//!
//! **Key Operations**:
//! - **Insert**: wrap the key in a one-node forest and merge it in (like adding 1 to a binary counter)
//! - **Front**: scan the O(log n) roots; heap order puts the minimum at a root
//! - **Delete-min**: remove the minimum root and merge its children back in
//! - **Merge**: merge two forests by degree, linking equal-degree trees
//!
//! Every operation eagerly normalizes the forest, so the invariant holds
//! whenever control returns to the caller. In debug builds the root layout is
//! re-checked after every mutation.

use crate::forest::{self, Forest, Node};
use crate::traits::{Heap, HeapError, InvariantViolation};
use log::debug;
use smallvec::smallvec;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;

/// Binomial Heap
///
/// # Example
///
/// ```rust
/// use binomial_forest::binomial::BinomialHeap;
/// use binomial_forest::Heap;
///
/// let mut heap = BinomialHeap::from([5, 3, 8, 1]);
/// assert_eq!(heap.front(), Ok(&1));
/// assert_eq!(heap.delete_min(), Ok(1));
/// assert_eq!(heap.front(), Ok(&3));
/// ```
pub struct BinomialHeap<T> {
    /// Tree roots, ascending by degree, at most one per degree
    forest: Forest<T>,
    /// Number of elements in the heap
    len: usize,
}

impl<T: Ord> Heap<T> for BinomialHeap<T> {
    fn new() -> Self {
        Self {
            forest: Forest::new(),
            len: 0,
        }
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn len(&self) -> usize {
        self.len
    }

    /// Inserts a key into the heap
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// A singleton tree is merged into the forest. If a degree-0 tree already
    /// exists the two are linked, and the result may carry into degree 1, and
    /// so on, exactly like incrementing a binary counter.
    fn insert(&mut self, key: T) {
        let singleton: Forest<T> = smallvec![Node::singleton(key)];
        self.forest = forest::merge_forests(mem::take(&mut self.forest), singleton);
        self.len += 1;
        self.debug_check();
    }

    fn front(&self) -> Result<&T, HeapError> {
        self.forest
            .iter()
            .map(|root| &root.key)
            .min()
            .ok_or(HeapError::Empty)
    }

    /// Removes and returns the minimum key
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// **Binomial Tree Property**: removing the root of a Bₖ tree leaves
    /// B_{k-1}, ..., B₀ children, which form a valid forest on their own and
    /// are merged back with the remaining roots.
    fn delete_min(&mut self) -> Result<T, HeapError> {
        let (key, rest) =
            forest::remove_min(mem::take(&mut self.forest)).ok_or(HeapError::Empty)?;
        self.forest = rest;
        self.len -= 1;
        self.debug_check();
        Ok(key)
    }

    /// Merges another heap into this heap
    ///
    /// **Time Complexity**: O(log n) worst-case
    fn merge(&mut self, mut other: Self) {
        debug!(
            "merging heap of {} elements into heap of {} elements",
            other.len, self.len
        );
        let theirs = mem::take(&mut other.forest);
        self.forest = forest::merge_forests(mem::take(&mut self.forest), theirs);
        self.len += mem::take(&mut other.len);
        self.debug_check();
    }
}

impl<T: Ord> BinomialHeap<T> {
    /// Builds a heap by inserting each key of `keys` in order
    pub fn from_keys<I: IntoIterator<Item = T>>(keys: I) -> Self {
        let mut heap = Self::new();
        heap.extend(keys);
        heap
    }

    /// Drains the heap into a vector in non-decreasing order
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Checks every structural invariant of the forest
    ///
    /// Verifies strictly ascending root degrees, the size correspondence
    /// (the sum of 2^degree over all roots equals [`len`](Heap::len)), the
    /// binomial shape of every tree, heap order, and parent back-references.
    ///
    /// **Time Complexity**: O(n)
    pub fn verify(&self) -> Result<(), InvariantViolation> {
        forest::verify(&self.forest, self.len)
    }
}

impl<T> BinomialHeap<T> {
    /// Degrees of the tree roots, in forest order
    ///
    /// For a heap of n elements these are the positions of the set bits of n.
    pub fn root_degrees(&self) -> impl Iterator<Item = usize> + '_ {
        self.forest.iter().map(|root| root.degree)
    }

    /// Number of trees in the forest
    pub fn tree_count(&self) -> usize {
        self.forest.len()
    }

    /// Releases every element, leaving the heap empty
    pub fn clear(&mut self) {
        let released = forest::release(&mut self.forest);
        debug!("cleared heap, released {} nodes", released);
        debug_assert_eq!(released, self.len);
        self.len = 0;
    }

    #[cfg(debug_assertions)]
    fn debug_check(&self) {
        if let Err(violation) = forest::verify_roots(&self.forest, self.len) {
            panic!("binomial forest invariant broken: {}", violation);
        }
    }

    #[cfg(not(debug_assertions))]
    fn debug_check(&self) {}
}

impl<T> Drop for BinomialHeap<T> {
    fn drop(&mut self) {
        forest::release(&mut self.forest);
    }
}

impl<T> Default for BinomialHeap<T> {
    fn default() -> Self {
        Self {
            forest: Forest::new(),
            len: 0,
        }
    }
}

impl<T> fmt::Debug for BinomialHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinomialHeap")
            .field("len", &self.len)
            .field("root_degrees", &self.root_degrees().collect::<Vec<_>>())
            .finish()
    }
}

impl<T: Ord> Extend<T> for BinomialHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinomialHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(keys: I) -> Self {
        Self::from_keys(keys)
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for BinomialHeap<T> {
    fn from(keys: [T; N]) -> Self {
        Self::from_keys(keys)
    }
}

/// Owning iterator yielding keys in non-decreasing order
///
/// Created by [`BinomialHeap::into_iter`]. Each step is a `delete_min`.
pub struct IntoIter<T> {
    heap: BinomialHeap<T>,
}

impl<T: Ord> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len, Some(self.heap.len))
    }
}

impl<T: Ord> ExactSizeIterator for IntoIter<T> {}

impl<T: Ord> FusedIterator for IntoIter<T> {}

impl<T> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("heap", &self.heap).finish()
    }
}

impl<T: Ord> IntoIterator for BinomialHeap<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { heap: self }
    }
}
