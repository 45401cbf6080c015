//! # bidstore-core
//!
//! Core types shared by every bidstore backend:
//!
//! - [`Bid`] - the stored record (id, title, fund, amount)
//! - [`KeyedStore`] - the common store contract (insert, search,
//!   delete, enumerate), keyed by the bid id
//! - [`StoreError`] - the shared error taxonomy
//! - [`display`] - pure formatting helpers for presentation layers
//!
//! Absence is not an error: `search` returns `Ok(None)` for an unknown
//! id and `delete` returns `Ok(false)`. Errors are reserved for real
//! contract violations (empty id, non-numeric id on a numeric-keyed
//! backend).

pub mod bid;
pub mod display;
pub mod error;
pub mod store;

pub use bid::Bid;
pub use error::StoreError;
pub use store::KeyedStore;
