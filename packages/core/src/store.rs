//! The KeyedStore trait - the contract every backend implements.

use crate::{Bid, StoreError};

/// A keyed, in-memory bid store.
///
/// All backends share this contract: bids are keyed by their unique
/// `id`, insertion takes the bid by value (the store owns its copy),
/// and absence is reported through `Option`/`bool`, never as an error.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn KeyedStore>` to
/// select a backend at runtime.
pub trait KeyedStore {
    /// Insert a bid, taking ownership of it.
    ///
    /// Duplicate handling is backend-specific (the tree ignores
    /// duplicates, the hash chain appends them); every backend rejects
    /// the reserved empty id with [`StoreError::EmptyId`].
    fn insert(&mut self, bid: Bid) -> Result<(), StoreError>;

    /// Look up a bid by id.
    ///
    /// Returns `Ok(None)` when the id is not present - that is not an
    /// error condition.
    fn search(&self, id: &str) -> Result<Option<&Bid>, StoreError>;

    /// Remove the bid with the given id.
    ///
    /// Returns `Ok(true)` if a bid was removed, `Ok(false)` if the id
    /// was absent (a no-op that leaves the store untouched).
    fn delete(&mut self, id: &str) -> Result<bool, StoreError>;

    /// All stored bids, in the backend's natural order: ascending by
    /// id for the tree, bucket-then-chain order for the hash table,
    /// insertion order for the list.
    fn enumerate(&self) -> Vec<&Bid>;
}

// Blanket implementations for references and boxes

impl<T: KeyedStore + ?Sized> KeyedStore for &mut T {
    fn insert(&mut self, bid: Bid) -> Result<(), StoreError> {
        (*self).insert(bid)
    }

    fn search(&self, id: &str) -> Result<Option<&Bid>, StoreError> {
        (**self).search(id)
    }

    fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        (*self).delete(id)
    }

    fn enumerate(&self) -> Vec<&Bid> {
        (**self).enumerate()
    }
}

impl<T: KeyedStore + ?Sized> KeyedStore for Box<T> {
    fn insert(&mut self, bid: Bid) -> Result<(), StoreError> {
        self.as_mut().insert(bid)
    }

    fn search(&self, id: &str) -> Result<Option<&Bid>, StoreError> {
        self.as_ref().search(id)
    }

    fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        self.as_mut().delete(id)
    }

    fn enumerate(&self) -> Vec<&Bid> {
        self.as_ref().enumerate()
    }
}
