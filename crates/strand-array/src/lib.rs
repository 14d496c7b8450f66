//! Growable, shrink-to-fit dynamic array for Strand.
//!
//! [`ArrayList`] keeps its elements in one contiguous, exactly-sized
//! buffer and manages capacity itself rather than deferring to `Vec`'s
//! growth heuristics:
//!
//! ```text
//! ArrayList
//! ├── RawBuffer (Box<[i32]>, len == capacity)
//! │   ├── [0, size)          live elements
//! │   └── [size, capacity)   spare slots (zeroed)
//! └── GrowthPolicy (growth factor, shrink divisor, initial capacity)
//! ```
//!
//! # Capacity policy
//!
//! - **Grow:** when `size == capacity` before a write, capacity is
//!   multiplied by the growth factor (default 2).
//! - **Shrink:** after a removal leaves `size < capacity / divisor`
//!   (default 4), capacity drops to the smallest power of two that
//!   holds `size` (minimum 1).
//!
//! The two thresholds are asymmetric: appending and popping
//! around a quarter-full boundary reallocates each time.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array_list;
pub mod config;
mod raw;

// Public re-exports for the primary API surface.
pub use array_list::ArrayList;
pub use config::{ConfigError, GrowthPolicy};
