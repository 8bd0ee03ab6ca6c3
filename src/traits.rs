//! Common trait and error types for the binomial forest heap
//!
//! - [`Heap`]: the public contract of a min-priority queue over totally ordered keys
//! - [`HeapError`]: failures reported at the public boundary
//! - [`InvariantViolation`]: structural defects found by forest verification
//!
//! The trait mirrors the shape of `std::collections::BinaryHeap` where it can
//! (`push`, `peek`, `pop` returning `Option`), and adds fallible variants
//! (`front`, `delete_min`) that report an empty heap as an explicit error.

use thiserror::Error;

/// Error type for heap operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The operation needs at least one element but the heap is empty
    #[error("heap is empty")]
    Empty,
}

/// A broken structural invariant of a binomial forest
///
/// Returned by [`BinomialHeap::verify`](crate::binomial::BinomialHeap::verify).
/// A correct heap never produces one of these; they exist so tests and
/// debug builds can pinpoint which rule was broken.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Root degrees are not strictly increasing
    #[error("root {position} has degree {degree}, not greater than previous root degree {previous}")]
    DegreeOrder {
        position: usize,
        previous: usize,
        degree: usize,
    },
    /// A node's child chain length differs from its recorded degree
    #[error("node of degree {degree} has {children} children")]
    ChildCount { degree: usize, children: usize },
    /// A child chain is not laid out as degrees k-1, k-2, ..., 0
    #[error("expected child of degree {expected}, found degree {found}")]
    ChildDegree { expected: usize, found: usize },
    /// A child key is smaller than its parent key
    #[error("child key is smaller than its parent key")]
    HeapOrder,
    /// A back-reference does not point at the owning parent
    #[error("parent back-reference does not match tree structure")]
    ParentLink,
    /// The forest shape does not account for the element count
    #[error("forest holds {counted} nodes but heap length is {expected}")]
    SizeMismatch { counted: usize, expected: usize },
}

/// Base trait for min-priority queues over totally ordered keys
///
/// The key is its own priority: the smallest key is always served first.
///
/// # Example
///
/// ```rust
/// use binomial_forest::Heap;
/// use binomial_forest::binomial::BinomialHeap;
///
/// let mut heap = BinomialHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub trait Heap<T: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts a key
    ///
    /// # Time Complexity
    /// O(log n) worst case.
    fn insert(&mut self, key: T);

    /// Alias for [`insert`](Heap::insert)
    fn push(&mut self, key: T) {
        self.insert(key)
    }

    /// Returns the minimum key without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap holds no elements.
    fn front(&self) -> Result<&T, HeapError>;

    /// Returns the minimum key, or `None` if the heap is empty
    fn peek(&self) -> Option<&T> {
        self.front().ok()
    }

    /// Removes and returns the minimum key
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap holds no elements.
    ///
    /// # Time Complexity
    /// O(log n) worst case.
    fn delete_min(&mut self) -> Result<T, HeapError>;

    /// Removes and returns the minimum key, or `None` if the heap is empty
    fn pop(&mut self) -> Option<T> {
        self.delete_min().ok()
    }

    /// Merges another heap into this one, consuming the other heap
    fn merge(&mut self, other: Self);
}
