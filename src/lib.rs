//! Mergeable min-priority queue built as a forest of binomial trees
//!
//! The heap keeps a forest whose tree degrees are pairwise distinct, mirroring
//! the binary representation of its size. Insertion, extraction of the
//! minimum and melding two heaps all run in O(log n) worst case.
//!
//! | Operation    | Complexity |
//! |--------------|------------|
//! | `insert`     | O(log n)   |
//! | `front`      | O(log n)   |
//! | `delete_min` | O(log n)   |
//! | `merge`      | O(log n)   |
//!
//! Operations that need a non-empty heap report [`HeapError::Empty`] instead
//! of misbehaving; the `Option`-returning aliases `peek` and `pop` follow the
//! shape of `std::collections::BinaryHeap`.
//!
//! # Example
//!
//! ```rust
//! use binomial_forest::binomial::BinomialHeap;
//! use binomial_forest::{Heap, HeapError};
//!
//! let mut heap = BinomialHeap::new();
//! heap.insert(5);
//! heap.insert(3);
//! heap.insert(8);
//! heap.insert(1);
//! assert_eq!(heap.front(), Ok(&1));
//!
//! // Seven elements are held as trees of degree 0, 1 and 2 (0b111)
//! heap.extend([9, 2, 7]);
//! assert_eq!(heap.root_degrees().collect::<Vec<_>>(), vec![0, 1, 2]);
//!
//! assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 5, 7, 8, 9]);
//!
//! let mut empty: BinomialHeap<i32> = BinomialHeap::new();
//! assert_eq!(empty.delete_min(), Err(HeapError::Empty));
//! ```

pub mod binomial;
mod forest;
pub mod traits;

// Re-export the main types for convenience
pub use binomial::BinomialHeap;
pub use traits::{Heap, HeapError, InvariantViolation};
