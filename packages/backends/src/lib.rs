//! # bidstore-backends
//!
//! Three interchangeable [`KeyedStore`](bidstore_core::KeyedStore)
//! backends, each with different shape and cost characteristics:
//!
//! - [`TreeStore`] - unbalanced binary search tree; O(log n) average,
//!   O(n) worst case, enumerates in ascending id order
//! - [`HashStore`] - fixed-bucket chained hash table over numeric ids;
//!   O(1) average, enumerates in bucket-then-chain order
//! - [`ListStore`] - singly linked list; O(1) append/prepend, O(n)
//!   search/delete, enumerates in insertion order
//!
//! The backends do not interact; each independently owns the bids
//! handed to it.

pub mod hash;
pub mod list;
pub mod tree;

pub use hash::HashStore;
pub use list::ListStore;
pub use tree::TreeStore;
