//! Reusable input data for container tests.
//!
//! Each fixture names the property it is built to exercise.

/// Extremes with repeated minima: first min at 1, max at 2.
pub const REPEATED_MINIMUM: [i32; 5] = [5, -2, 7, -2, 3];

/// `2` occurs four times, `5` never.
pub const COUNT_SAMPLE: [i32; 7] = [1, 2, 2, 3, 2, 4, 2];

/// The first five primes.
pub const PRIMES: [i32; 5] = [2, 3, 5, 7, 11];

/// `0..n` as `i32`, the fill used by the timing drivers.
pub fn ascending(n: usize) -> Vec<i32> {
    (0..n as i32).collect()
}
