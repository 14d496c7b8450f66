//! The contiguous dynamic array.

use std::fmt;

use strand_core::{EmptyCollectionError, IndexError, Operation, Sequence};

use crate::config::{ConfigError, GrowthPolicy};
use crate::raw::RawBuffer;

/// A growable, shrink-to-fit array of `i32`.
///
/// Elements live in `[0, len)` of an exactly-sized buffer. Appends and
/// inserts grow the buffer by [`GrowthPolicy::growth_factor`] when it is
/// full; removals shrink it to the smallest fitting power of two once
/// usage falls below `1 / shrink_divisor`.
///
/// Every index-taking method is bounds-checked and returns
/// [`IndexError`] without modifying the list when the index is rejected.
#[derive(Clone)]
pub struct ArrayList {
    buf: RawBuffer,
    len: usize,
    policy: GrowthPolicy,
}

impl ArrayList {
    /// Create an empty list with capacity 1.
    pub fn new() -> Self {
        let policy = GrowthPolicy::default();
        Self {
            buf: RawBuffer::new(policy.initial_capacity),
            len: 0,
            policy,
        }
    }

    /// Create an empty list with a custom capacity policy.
    pub fn with_policy(policy: GrowthPolicy) -> Result<Self, ConfigError> {
        policy.validate()?;
        Ok(Self {
            buf: RawBuffer::new(policy.initial_capacity),
            len: 0,
            policy,
        })
    }

    /// Create a list holding `values` in order, with capacity
    /// `max(1, values.len())`.
    pub fn from_slice(values: &[i32]) -> Self {
        Self {
            buf: RawBuffer::from_slice(values),
            len: values.len(),
            policy: GrowthPolicy::default(),
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Alias for [`len`](Self::len).
    pub fn length(&self) -> usize {
        self.len
    }

    /// `true` when the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated slots.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// The capacity policy this list was built with.
    pub fn policy(&self) -> &GrowthPolicy {
        &self.policy
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[i32] {
        self.buf.slice(self.len)
    }

    /// The live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        self.buf.slice_mut(self.len)
    }

    /// Iterate over the live elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.as_slice().iter()
    }

    /// Copy the live elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<i32> {
        self.as_slice().to_vec()
    }

    /// Append `value`, growing the buffer first if it is full.
    pub fn append(&mut self, value: i32) {
        if self.len == self.capacity() {
            self.grow();
        }
        self.buf.slice_mut(self.len + 1)[self.len] = value;
        self.len += 1;
    }

    /// Insert `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index == len` is an append. Returns [`IndexError`] if
    /// `index > len`.
    pub fn insert(&mut self, value: i32, index: usize) -> Result<(), IndexError> {
        IndexError::check_insert(index, self.len)?;
        if self.len == self.capacity() {
            self.grow();
        }
        let slots = self.buf.slice_mut(self.len + 1);
        slots.copy_within(index..self.len, index + 1);
        slots[index] = value;
        self.len += 1;
        Ok(())
    }

    /// Read the element at `index`.
    pub fn get(&self, index: usize) -> Result<i32, IndexError> {
        IndexError::check_element(Operation::Get, index, self.len)?;
        Ok(self.as_slice()[index])
    }

    /// Exclusive, bounds-checked handle to the slot at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut i32, IndexError> {
        IndexError::check_element(Operation::Get, index, self.len)?;
        Ok(&mut self.as_mut_slice()[index])
    }

    /// Overwrite the element at `index`.
    pub fn set(&mut self, index: usize, value: i32) -> Result<(), IndexError> {
        IndexError::check_element(Operation::Set, index, self.len)?;
        self.as_mut_slice()[index] = value;
        Ok(())
    }

    /// Remove the element at `index`, shifting `[index + 1, len)` left.
    ///
    /// May shrink the buffer afterwards.
    pub fn remove(&mut self, index: usize) -> Result<(), IndexError> {
        self.take(Operation::Remove, index).map(|_| ())
    }

    /// Remove and return the element at `index`.
    ///
    /// Same bounds contract and shrink behaviour as [`remove`](Self::remove).
    pub fn pop_at(&mut self, index: usize) -> Result<i32, IndexError> {
        self.take(Operation::Pop, index)
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Result<i32, EmptyCollectionError> {
        if self.len == 0 {
            return Err(EmptyCollectionError::new(Operation::Pop));
        }
        let value = self.as_slice()[self.len - 1];
        self.len -= 1;
        self.maybe_shrink();
        Ok(value)
    }

    /// Index of the first occurrence of the smallest element.
    pub fn argmin(&self) -> Result<usize, EmptyCollectionError> {
        first_extreme(self.as_slice(), Operation::ArgMin, |candidate, best| {
            candidate < best
        })
    }

    /// Index of the first occurrence of the largest element.
    pub fn argmax(&self) -> Result<usize, EmptyCollectionError> {
        first_extreme(self.as_slice(), Operation::ArgMax, |candidate, best| {
            candidate > best
        })
    }

    /// Smallest element.
    pub fn min(&self) -> Result<i32, EmptyCollectionError> {
        self.argmin()
            .map(|i| self.as_slice()[i])
            .map_err(|_| EmptyCollectionError::new(Operation::Min))
    }

    /// Largest element.
    pub fn max(&self) -> Result<i32, EmptyCollectionError> {
        self.argmax()
            .map(|i| self.as_slice()[i])
            .map_err(|_| EmptyCollectionError::new(Operation::Max))
    }

    /// Number of elements equal to `value`.
    pub fn count(&self, value: i32) -> usize {
        self.iter().filter(|&&v| v == value).count()
    }

    /// Reallocate to the smallest power of two `>= max(len, 1)`.
    ///
    /// Never grows the buffer: does nothing unless that target is below
    /// the current capacity.
    pub fn shrink_to_fit(&mut self) {
        let target = self.len.max(1).next_power_of_two();
        if target >= self.capacity() {
            return;
        }
        log::trace!(
            "array_list shrink: capacity {} -> {target} (len {})",
            self.capacity(),
            self.len
        );
        self.buf.reallocate(target, self.len);
    }

    /// Drop every element and return to the policy's initial capacity.
    pub fn clear(&mut self) {
        self.buf = RawBuffer::new(self.policy.initial_capacity);
        self.len = 0;
    }

    /// Write the list to stdout followed by a newline.
    pub fn print(&self) {
        println!("{self}");
    }

    fn grow(&mut self) {
        let new_capacity = self.policy.grown(self.capacity());
        log::trace!(
            "array_list grow: capacity {} -> {new_capacity}",
            self.capacity()
        );
        self.buf.reallocate(new_capacity, self.len);
    }

    fn maybe_shrink(&mut self) {
        if self.policy.should_shrink(self.len, self.capacity()) {
            self.shrink_to_fit();
        }
    }

    /// Shared removal path for `remove` and `pop_at`.
    fn take(&mut self, op: Operation, index: usize) -> Result<i32, IndexError> {
        IndexError::check_element(op, index, self.len)?;
        let live = self.buf.slice_mut(self.len);
        let value = live[index];
        live.copy_within(index + 1.., index);
        self.len -= 1;
        self.maybe_shrink();
        Ok(value)
    }
}

/// Index of the first element that no later element beats under `better`.
fn first_extreme(
    values: &[i32],
    op: Operation,
    better: impl Fn(i32, i32) -> bool,
) -> Result<usize, EmptyCollectionError> {
    let (&first, rest) = values
        .split_first()
        .ok_or(EmptyCollectionError::new(op))?;
    let mut best_index = 0;
    let mut best = first;
    for (offset, &v) in rest.iter().enumerate() {
        if better(v, best) {
            best = v;
            best_index = offset + 1;
        }
    }
    Ok(best_index)
}

impl Default for ArrayList {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ArrayList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for ArrayList {}

impl fmt::Debug for ArrayList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayList")
            .field("items", &self.as_slice())
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl fmt::Display for ArrayList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ArrayList([")?;
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str("])")
    }
}

impl From<Vec<i32>> for ArrayList {
    fn from(values: Vec<i32>) -> Self {
        Self::from_slice(&values)
    }
}

impl From<&[i32]> for ArrayList {
    fn from(values: &[i32]) -> Self {
        Self::from_slice(values)
    }
}

impl FromIterator<i32> for ArrayList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let values: Vec<i32> = iter.into_iter().collect();
        Self::from_slice(&values)
    }
}

impl<'a> IntoIterator for &'a ArrayList {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Sequence for ArrayList {
    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Result<i32, IndexError> {
        ArrayList::get(self, index)
    }

    fn set(&mut self, index: usize, value: i32) -> Result<(), IndexError> {
        ArrayList::set(self, index, value)
    }

    fn append(&mut self, value: i32) {
        ArrayList::append(self, value);
    }

    fn insert(&mut self, value: i32, index: usize) -> Result<(), IndexError> {
        ArrayList::insert(self, value, index)
    }

    fn remove(&mut self, index: usize) -> Result<(), IndexError> {
        ArrayList::remove(self, index)
    }

    fn pop_at(&mut self, index: usize) -> Result<i32, IndexError> {
        ArrayList::pop_at(self, index)
    }

    fn pop(&mut self) -> Result<i32, EmptyCollectionError> {
        ArrayList::pop(self)
    }

    fn min(&self) -> Result<i32, EmptyCollectionError> {
        ArrayList::min(self)
    }

    fn max(&self) -> Result<i32, EmptyCollectionError> {
        ArrayList::max(self)
    }

    fn to_vec(&self) -> Vec<i32> {
        ArrayList::to_vec(self)
    }
}
