//! Doubly linked list of `i32`.

use std::fmt;
use std::iter::FusedIterator;

use strand_core::{EmptyCollectionError, IndexError, Operation, Sequence};

use crate::chain::{Chain, Iter};

/// A doubly linked list of `i32` with O(1) access to both ends.
///
/// Indexed operations walk from whichever end is nearer, so they cost
/// O(min(index, len - index)). Rejected indices leave the list unchanged.
#[derive(Clone, Default)]
pub struct LinkedList {
    chain: Chain<i32>,
}

impl LinkedList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            chain: Chain::new(),
        }
    }

    /// Create a list holding `values` in order.
    pub fn from_values(values: &[i32]) -> Self {
        values.iter().copied().collect()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Alias for [`len`](Self::len).
    pub fn length(&self) -> usize {
        self.chain.len()
    }

    /// `true` when the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.chain.len() == 0
    }

    /// Add `value` after the tail.
    pub fn append(&mut self, value: i32) {
        self.chain.push_back(value);
    }

    /// Add `value` before the head.
    pub fn push_front(&mut self, value: i32) {
        self.chain.push_front(value);
    }

    /// Insert `value` so it ends up at `index`.
    ///
    /// `0` is [`push_front`](Self::push_front), `len` is
    /// [`append`](Self::append); anything else splices a node in before
    /// the current occupant of `index`.
    pub fn insert(&mut self, value: i32, index: usize) -> Result<(), IndexError> {
        IndexError::check_insert(index, self.len())?;
        self.chain.insert(index, value);
        Ok(())
    }

    /// Read the element at `index`.
    pub fn get(&self, index: usize) -> Result<i32, IndexError> {
        self.chain
            .get(index)
            .copied()
            .ok_or(IndexError::new(Operation::Get, index, self.len()))
    }

    /// Exclusive, bounds-checked handle to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut i32, IndexError> {
        let len = self.len();
        self.chain
            .get_mut(index)
            .ok_or(IndexError::new(Operation::Get, index, len))
    }

    /// Overwrite the element at `index`.
    pub fn set(&mut self, index: usize, value: i32) -> Result<(), IndexError> {
        let len = self.len();
        let slot = self
            .chain
            .get_mut(index)
            .ok_or(IndexError::new(Operation::Set, index, len))?;
        *slot = value;
        Ok(())
    }

    /// Remove the node at `index`.
    pub fn remove(&mut self, index: usize) -> Result<(), IndexError> {
        self.take(Operation::Remove, index).map(|_| ())
    }

    /// Remove the node at `index` and return its value.
    pub fn pop_at(&mut self, index: usize) -> Result<i32, IndexError> {
        self.take(Operation::Pop, index)
    }

    /// Remove the tail and return its value.
    pub fn pop(&mut self) -> Result<i32, EmptyCollectionError> {
        self.chain
            .pop_back()
            .ok_or(EmptyCollectionError::new(Operation::Pop))
    }

    /// First element, if any.
    pub fn front(&self) -> Option<i32> {
        self.chain.front().copied()
    }

    /// Last element, if any.
    pub fn back(&self) -> Option<i32> {
        self.chain.back().copied()
    }

    /// Smallest element.
    pub fn min(&self) -> Result<i32, EmptyCollectionError> {
        self.iter()
            .min()
            .ok_or(EmptyCollectionError::new(Operation::Min))
    }

    /// Largest element.
    pub fn max(&self) -> Result<i32, EmptyCollectionError> {
        self.iter()
            .max()
            .ok_or(EmptyCollectionError::new(Operation::Max))
    }

    /// Index of the first occurrence of the smallest element.
    pub fn argmin(&self) -> Result<usize, EmptyCollectionError> {
        let mut best: Option<(usize, i32)> = None;
        for (i, v) in self.iter().enumerate() {
            if best.map_or(true, |(_, b)| v < b) {
                best = Some((i, v));
            }
        }
        best.map(|(i, _)| i)
            .ok_or(EmptyCollectionError::new(Operation::ArgMin))
    }

    /// Index of the first occurrence of the largest element.
    pub fn argmax(&self) -> Result<usize, EmptyCollectionError> {
        let mut best: Option<(usize, i32)> = None;
        for (i, v) in self.iter().enumerate() {
            if best.map_or(true, |(_, b)| v > b) {
                best = Some((i, v));
            }
        }
        best.map(|(i, _)| i)
            .ok_or(EmptyCollectionError::new(Operation::ArgMax))
    }

    /// Number of elements equal to `value`.
    pub fn count(&self, value: i32) -> usize {
        self.iter().filter(|&v| v == value).count()
    }

    /// Iterate over the values, head to tail.
    pub fn iter(&self) -> Values<'_> {
        Values {
            inner: self.chain.iter(),
        }
    }

    /// Copy the values into a `Vec`, head to tail.
    pub fn to_vec(&self) -> Vec<i32> {
        self.iter().collect()
    }

    /// Drop every node.
    pub fn clear(&mut self) {
        self.chain.clear();
    }

    /// Write the list to stdout followed by a newline.
    pub fn print(&self) {
        println!("{self}");
    }

    fn take(&mut self, op: Operation, index: usize) -> Result<i32, IndexError> {
        let len = self.len();
        self.chain
            .remove(index)
            .ok_or(IndexError::new(op, index, len))
    }
}

/// Iterator over the values of a [`LinkedList`], head to tail.
#[derive(Clone, Debug)]
pub struct Values<'a> {
    inner: Iter<'a, i32>,
}

impl Iterator for Values<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Values<'_> {
    fn next_back(&mut self) -> Option<i32> {
        self.inner.next_back().copied()
    }
}

impl ExactSizeIterator for Values<'_> {}

impl FusedIterator for Values<'_> {}

impl<'a> IntoIterator for &'a LinkedList {
    type Item = i32;
    type IntoIter = Values<'a>;

    fn into_iter(self) -> Values<'a> {
        self.iter()
    }
}

impl FromIterator<i32> for LinkedList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut list = Self::new();
        for v in iter {
            list.append(v);
        }
        list
    }
}

impl From<Vec<i32>> for LinkedList {
    fn from(values: Vec<i32>) -> Self {
        values.into_iter().collect()
    }
}

impl PartialEq for LinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for LinkedList {}

impl fmt::Debug for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str("]")
    }
}

impl Sequence for LinkedList {
    fn len(&self) -> usize {
        self.chain.len()
    }

    fn get(&self, index: usize) -> Result<i32, IndexError> {
        LinkedList::get(self, index)
    }

    fn set(&mut self, index: usize, value: i32) -> Result<(), IndexError> {
        LinkedList::set(self, index, value)
    }

    fn append(&mut self, value: i32) {
        LinkedList::append(self, value);
    }

    fn insert(&mut self, value: i32, index: usize) -> Result<(), IndexError> {
        LinkedList::insert(self, value, index)
    }

    fn remove(&mut self, index: usize) -> Result<(), IndexError> {
        LinkedList::remove(self, index)
    }

    fn pop_at(&mut self, index: usize) -> Result<i32, IndexError> {
        LinkedList::pop_at(self, index)
    }

    fn pop(&mut self) -> Result<i32, EmptyCollectionError> {
        LinkedList::pop(self)
    }

    fn min(&self) -> Result<i32, EmptyCollectionError> {
        LinkedList::min(self)
    }

    fn max(&self) -> Result<i32, EmptyCollectionError> {
        LinkedList::max(self)
    }

    fn to_vec(&self) -> Vec<i32> {
        LinkedList::to_vec(self)
    }
}
