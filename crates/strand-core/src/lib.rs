//! Core types and traits for the Strand containers.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the pieces shared by every container in the workspace: the error
//! types signalled by bounds-checked and aggregate operations, the
//! [`Sequence`] contract, and the nearest-end traversal planner used by
//! the linked lists.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod traversal;

pub use error::{CollectionError, EmptyCollectionError, IndexError, Operation};
pub use traits::Sequence;
pub use traversal::{plan, End, TraversalPlan};
