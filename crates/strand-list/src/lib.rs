//! Doubly linked containers for Strand.
//!
//! Both lists are built on one container-owned node slab:
//!
//! ```text
//! LinkedList / LinkedArrayList
//! └── Chain<T>
//!     ├── slots: Vec<Option<Node<T>>>   (node storage, addressed by slot)
//!     ├── free:  Vec<usize>             (vacated slots, reused first)
//!     └── head / tail / len
//!         Node<T> { value, prev, next }  (links are slot indices)
//! ```
//!
//! The container is the single owner of every node; `prev`/`next` are
//! plain indices, so there are no reference cycles and no `unsafe`.
//! Removing a node takes it out of its slot, which drops the node and
//! everything it owns (for [`LinkedArrayList`], the node's
//! [`ArrayList`](strand_array::ArrayList)) at that moment.
//!
//! # Indexed access
//!
//! Positions are located with [`strand_core::plan`]: the walk starts at
//! the head when `index <= len / 2` and at the tail otherwise, so no
//! lookup follows more than `len / 2` links.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod chain;
pub mod linked_array_list;
pub mod linked_list;

pub use chain::Iter;
pub use linked_array_list::LinkedArrayList;
pub use linked_list::{LinkedList, Values};
