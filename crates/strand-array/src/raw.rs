//! Exactly-sized backing storage for [`ArrayList`](crate::ArrayList).
//!
//! A [`RawBuffer`] is a zero-initialised `Box<[i32]>` whose length *is*
//! the capacity. Unlike `Vec`, it never over-allocates, so the capacity
//! reported by the list is exactly the number of slots held.

/// Contiguous, fixed-capacity storage with whole-buffer reallocation.
#[derive(Clone, Debug)]
pub(crate) struct RawBuffer {
    data: Box<[i32]>,
}

impl RawBuffer {
    /// Allocate `capacity` zeroed slots.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity].into_boxed_slice(),
        }
    }

    /// Allocate exactly `values.len().max(1)` slots holding `values`.
    pub(crate) fn from_slice(values: &[i32]) -> Self {
        let mut buf = Self::new(values.len().max(1));
        buf.data[..values.len()].copy_from_slice(values);
        buf
    }

    /// Total slots.
    pub(crate) fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Move the first `live` elements into a fresh buffer of
    /// `new_capacity` slots. The old allocation is dropped before return.
    ///
    /// # Panics
    ///
    /// Panics if `live` exceeds either capacity.
    pub(crate) fn reallocate(&mut self, new_capacity: usize, live: usize) {
        let mut fresh = vec![0; new_capacity].into_boxed_slice();
        fresh[..live].copy_from_slice(&self.data[..live]);
        self.data = fresh;
    }

    /// Shared view of `[0, len)`.
    pub(crate) fn slice(&self, len: usize) -> &[i32] {
        &self.data[..len]
    }

    /// Mutable view of `[0, len)`.
    pub(crate) fn slice_mut(&mut self, len: usize) -> &mut [i32] {
        &mut self.data[..len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_zeroed() {
        let buf = RawBuffer::new(8);
        assert_eq!(buf.capacity(), 8);
        assert!(buf.slice(8).iter().all(|&v| v == 0));
    }

    #[test]
    fn empty_slice_still_allocates_one_slot() {
        let buf = RawBuffer::from_slice(&[]);
        assert_eq!(buf.capacity(), 1);
    }

    #[test]
    fn reallocate_preserves_live_prefix() {
        let mut buf = RawBuffer::from_slice(&[1, 2, 3]);
        buf.reallocate(8, 3);
        assert_eq!(buf.capacity(), 8);
        assert_eq!(buf.slice(3), &[1, 2, 3]);

        buf.reallocate(2, 2);
        assert_eq!(buf.capacity(), 2);
        assert_eq!(buf.slice(2), &[1, 2]);
    }

    #[test]
    fn slice_mut_writes_through() {
        let mut buf = RawBuffer::new(4);
        buf.slice_mut(2)[1] = 42;
        assert_eq!(buf.slice(2), &[0, 42]);
    }
}
