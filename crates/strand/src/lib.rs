//! Strand: owned sequence containers over `i32`.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Strand sub-crates. For most users, adding `strand` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strand::prelude::*;
//!
//! // Dynamic array: doubles when full, shrinks below 25% usage.
//! let mut a = ArrayList::new();
//! for i in 0..100 {
//!     a.append(i);
//! }
//! assert_eq!(a.capacity(), 128);
//! for _ in 0..90 {
//!     a.pop().unwrap();
//! }
//! assert_eq!(a.capacity(), 32);
//!
//! // Doubly linked list.
//! let mut list = LinkedList::new();
//! list.push_front(3);
//! list.push_front(2);
//! list.push_front(1);
//! assert_eq!(list.to_string(), "[1, 2, 3]");
//! assert!(matches!(list.get(3), Err(IndexError { .. })));
//!
//! // Linked list of independently owned arrays.
//! let mut nested = LinkedArrayList::new();
//! nested.append(vec![1, 2]);
//! nested.append(vec![4, 5, 6]);
//! nested.get_mut(0).unwrap().append(3);
//! assert_eq!(nested.get(1).unwrap().len(), 3);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strand-core` | Errors, the `Sequence` trait, traversal planning |
//! | [`array`] | `strand-array` | `ArrayList` and its `GrowthPolicy` |
//! | [`list`] | `strand-list` | `LinkedList` and `LinkedArrayList` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core error types, traits, and traversal planning (`strand-core`).
pub use strand_core as types;

/// The contiguous dynamic array (`strand-array`).
pub use strand_array as array;

/// Doubly linked containers (`strand-list`).
pub use strand_list as list;

/// Common imports for typical Strand usage.
///
/// ```rust
/// use strand::prelude::*;
/// ```
pub mod prelude {
    // Containers
    pub use strand_array::{ArrayList, GrowthPolicy};
    pub use strand_list::{LinkedArrayList, LinkedList};

    // Errors and traits
    pub use strand_core::{CollectionError, EmptyCollectionError, IndexError, Sequence};
}
