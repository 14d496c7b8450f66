//! The index-addressed sequence contract shared by the integer containers.

use crate::error::{EmptyCollectionError, IndexError};

/// An ordered, index-addressed sequence of `i32` values.
///
/// Implemented by both the contiguous array and the linked list so that
/// drivers, benchmarks and model-based tests can run the same operation
/// script against either representation. Costs differ per implementor:
/// indexed access is O(1) for the array and O(min(i, len - i)) for the
/// list, front insertion the other way round.
pub trait Sequence {
    /// Number of live elements.
    fn len(&self) -> usize;

    /// `true` when the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read the element at `index`. Accepts `[0, len)`.
    fn get(&self, index: usize) -> Result<i32, IndexError>;

    /// Overwrite the element at `index`. Accepts `[0, len)`.
    fn set(&mut self, index: usize, value: i32) -> Result<(), IndexError>;

    /// Add `value` after the last element.
    fn append(&mut self, value: i32);

    /// Insert `value` so that it ends up at `index`. Accepts `[0, len]`.
    fn insert(&mut self, value: i32, index: usize) -> Result<(), IndexError>;

    /// Delete the element at `index`. Accepts `[0, len)`.
    fn remove(&mut self, index: usize) -> Result<(), IndexError>;

    /// Delete and return the element at `index`. Accepts `[0, len)`.
    fn pop_at(&mut self, index: usize) -> Result<i32, IndexError>;

    /// Delete and return the last element.
    fn pop(&mut self) -> Result<i32, EmptyCollectionError>;

    /// Smallest element.
    fn min(&self) -> Result<i32, EmptyCollectionError>;

    /// Largest element.
    fn max(&self) -> Result<i32, EmptyCollectionError>;

    /// Copy the elements out in order.
    fn to_vec(&self) -> Vec<i32>;
}
