//! Chained hash table backend.
//!
//! A fixed array of buckets keyed by a modular reduction of the
//! numeric bid id. Each bucket embeds its head entry directly in the
//! bucket array (no nullable head pointer); an "open" head is signaled
//! by the reserved key [`OPEN_KEY`]. Collisions chain off the head
//! through owned `Box` links.
//!
//! Ids must parse as unsigned integers - a non-numeric id is a caller
//! error reported as [`StoreError::NonNumericId`], never a panic.

use bidstore_core::{Bid, KeyedStore, StoreError};

/// Reserved key marking a bucket head that has never held a live bid.
///
/// The hash is `id % bucket_count`, which is strictly less than the
/// bucket count; since the bucket count is a `usize`, no computed key
/// can ever reach `u64::MAX`. The sentinel is excluded from the valid
/// hash range by construction, not by a runtime check.
const OPEN_KEY: u64 = u64::MAX;

/// Default bucket count. A prime, to spread sequential ids across
/// buckets rather than clustering them.
pub const DEFAULT_BUCKET_COUNT: usize = 179;

struct Entry {
    key: u64,
    bid: Bid,
    next: Option<Box<Entry>>,
}

impl Entry {
    fn open() -> Self {
        Self {
            key: OPEN_KEY,
            bid: Bid::default(),
            next: None,
        }
    }

    fn occupied(key: u64, bid: Bid) -> Self {
        Self {
            key,
            bid,
            next: None,
        }
    }

    fn is_open(&self) -> bool {
        self.key == OPEN_KEY
    }
}

/// Fixed-size chained hash table of bids, keyed by numeric id.
///
/// The bucket count is fixed at construction; there is no resizing.
/// Insertion performs no duplicate check: re-inserting an id appends a
/// second chain entry, and search/delete observe the earliest-inserted
/// entry for that id. That first-match behavior is part of the
/// contract.
///
/// # Example
///
/// ```rust
/// use bidstore_backends::HashStore;
/// use bidstore_core::{Bid, KeyedStore};
///
/// let mut table = HashStore::with_buckets(5);
/// table.insert(Bid::new("3", "three", "F", 0.0)).unwrap();
/// table.insert(Bid::new("8", "eight", "F", 0.0)).unwrap(); // same bucket
/// assert_eq!(table.search("8").unwrap().unwrap().title, "eight");
/// ```
pub struct HashStore {
    buckets: Vec<Entry>,
}

impl HashStore {
    /// Create a table with [`DEFAULT_BUCKET_COUNT`] buckets.
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKET_COUNT)
    }

    /// Create a table with a fixed number of buckets, all open.
    ///
    /// # Panics
    ///
    /// Panics if `bucket_count` is zero.
    pub fn with_buckets(bucket_count: usize) -> Self {
        assert!(bucket_count > 0, "hash store needs at least one bucket");
        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, Entry::open);
        Self { buckets }
    }

    /// The fixed number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Reduce an id to its home bucket key.
    fn hash(&self, id: &str) -> Result<u64, StoreError> {
        let numeric: u64 = id.parse().map_err(|_| StoreError::NonNumericId {
            id: id.to_string(),
        })?;
        Ok(numeric % self.buckets.len() as u64)
    }

    /// Every stored bid paired with its home bucket index, in bucket
    /// order then chain order. Presentation layers use the index to
    /// show collision chains.
    pub fn bucket_entries(&self) -> Vec<(usize, &Bid)> {
        let mut out = Vec::new();
        for (index, head) in self.buckets.iter().enumerate() {
            if head.is_open() {
                continue;
            }
            out.push((index, &head.bid));
            let mut next = head.next.as_deref();
            while let Some(entry) = next {
                out.push((index, &entry.bid));
                next = entry.next.as_deref();
            }
        }
        out
    }
}

impl Default for HashStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyedStore for HashStore {
    fn insert(&mut self, bid: Bid) -> Result<(), StoreError> {
        if bid.id().is_empty() {
            return Err(StoreError::EmptyId);
        }
        let key = self.hash(bid.id())?;

        let head = &mut self.buckets[key as usize];
        if head.is_open() {
            // The head is a fixed storage slot: claim it in place.
            head.key = key;
            head.bid = bid;
            head.next = None;
            return Ok(());
        }

        // Occupied head: append at the end of the chain. No duplicate
        // check - search and delete resolve by first match.
        let mut link = &mut head.next;
        loop {
            match link {
                Some(entry) => link = &mut entry.next,
                None => {
                    *link = Some(Box::new(Entry::occupied(key, bid)));
                    return Ok(());
                }
            }
        }
    }

    fn search(&self, id: &str) -> Result<Option<&Bid>, StoreError> {
        let key = self.hash(id)?;

        let head = &self.buckets[key as usize];
        if head.is_open() {
            return Ok(None);
        }
        if head.bid.id() == id {
            return Ok(Some(&head.bid));
        }

        let mut next = head.next.as_deref();
        while let Some(entry) = next {
            if entry.bid.id() == id {
                return Ok(Some(&entry.bid));
            }
            next = entry.next.as_deref();
        }
        Ok(None)
    }

    fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        let key = self.hash(id)?;

        let head = &mut self.buckets[key as usize];
        if head.is_open() {
            return Ok(false);
        }

        if head.bid.id() == id {
            // The head slot is storage, not a pointer: removing it
            // means copying the second entry's contents into the slot,
            // or reopening the slot when the chain is empty.
            match head.next.take() {
                Some(second) => {
                    let Entry { key, bid, next } = *second;
                    head.key = key;
                    head.bid = bid;
                    head.next = next;
                }
                None => *head = Entry::open(),
            }
            return Ok(true);
        }

        // Walk the chain and splice around the first match.
        let mut link = &mut head.next;
        loop {
            let matched = match link.as_deref() {
                Some(entry) => entry.bid.id() == id,
                None => return Ok(false),
            };
            if matched {
                if let Some(mut removed) = link.take() {
                    *link = removed.next.take();
                }
                return Ok(true);
            }
            match link {
                Some(entry) => link = &mut entry.next,
                None => return Ok(false),
            }
        }
    }

    fn enumerate(&self) -> Vec<&Bid> {
        self.bucket_entries().into_iter().map(|(_, bid)| bid).collect()
    }
}

impl Drop for HashStore {
    /// Unlink each chain iteratively; a long collision chain would
    /// otherwise drop through deep `Box` recursion.
    fn drop(&mut self) {
        for head in &mut self.buckets {
            let mut next = head.next.take();
            while let Some(mut entry) = next {
                next = entry.next.take();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bid(id: &str) -> Bid {
        Bid::new(id, format!("title-{}", id), "Fund", 1.0)
    }

    #[test]
    fn insert_and_search_round_trip() {
        let mut table = HashStore::new();
        table.insert(bid("98109")).unwrap();
        assert_eq!(table.search("98109").unwrap().unwrap().title, "title-98109");
        assert!(table.search("12345").unwrap().is_none());
    }

    #[test]
    fn colliding_ids_chain_in_one_bucket() {
        // 3 % 5 == 8 % 5 == 3: both land in bucket 3.
        let mut table = HashStore::with_buckets(5);
        table.insert(bid("3")).unwrap();
        table.insert(bid("8")).unwrap();

        assert_eq!(table.search("8").unwrap().unwrap().title, "title-8");

        let entries = table.bucket_entries();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|(bucket, _)| *bucket == 3));
    }

    #[test]
    fn deleting_the_head_keeps_the_chain_reachable() {
        let mut table = HashStore::with_buckets(5);
        table.insert(bid("3")).unwrap();
        table.insert(bid("8")).unwrap();
        table.insert(bid("13")).unwrap();

        assert!(table.delete("3").unwrap());
        assert!(table.search("3").unwrap().is_none());
        assert_eq!(table.search("8").unwrap().unwrap().id(), "8");
        assert_eq!(table.search("13").unwrap().unwrap().id(), "13");
    }

    #[test]
    fn deleting_the_only_entry_reopens_the_bucket() {
        let mut table = HashStore::with_buckets(5);
        table.insert(bid("3")).unwrap();

        assert!(table.delete("3").unwrap());
        assert!(table.search("3").unwrap().is_none());
        assert!(table.enumerate().is_empty());

        // The reopened slot accepts a fresh head.
        table.insert(bid("8")).unwrap();
        assert_eq!(table.search("8").unwrap().unwrap().id(), "8");
    }

    #[test]
    fn deleting_an_interior_chain_entry_splices_around_it() {
        let mut table = HashStore::with_buckets(5);
        for id in ["3", "8", "13", "18"] {
            table.insert(bid(id)).unwrap();
        }

        assert!(table.delete("13").unwrap());
        let ids: Vec<&str> = table.enumerate().iter().map(|b| b.id()).collect();
        assert_eq!(ids, ["3", "8", "18"]);
    }

    #[test]
    fn delete_from_open_bucket_or_absent_id_is_a_noop() {
        let mut table = HashStore::with_buckets(5);
        assert!(!table.delete("3").unwrap());

        table.insert(bid("3")).unwrap();
        assert!(!table.delete("8").unwrap()); // same bucket, different id
        assert_eq!(table.enumerate().len(), 1);
    }

    #[test]
    fn duplicate_ids_resolve_to_the_first_chain_match() {
        let mut table = HashStore::with_buckets(5);
        table.insert(Bid::new("3", "first", "F", 1.0)).unwrap();
        table.insert(Bid::new("3", "second", "F", 2.0)).unwrap();

        // Both entries exist, but search sees the earliest insert.
        assert_eq!(table.enumerate().len(), 2);
        assert_eq!(table.search("3").unwrap().unwrap().title, "first");

        // Deleting resolves the first match too, exposing the second.
        assert!(table.delete("3").unwrap());
        assert_eq!(table.search("3").unwrap().unwrap().title, "second");
    }

    #[test]
    fn non_numeric_id_is_a_caller_error() {
        let mut table = HashStore::new();
        let expected = StoreError::NonNumericId {
            id: "ABC".to_string(),
        };
        assert_eq!(table.insert(bid("ABC")), Err(expected.clone()));
        assert_eq!(table.search("ABC"), Err(expected.clone()));
        assert_eq!(table.delete("ABC"), Err(expected));
    }

    #[test]
    fn empty_id_is_rejected_before_hashing() {
        let mut table = HashStore::new();
        assert_eq!(table.insert(Bid::default()), Err(StoreError::EmptyId));
    }

    #[test]
    fn enumerate_is_bucket_then_chain_order() {
        let mut table = HashStore::with_buckets(5);
        for id in ["9", "3", "8", "7"] {
            table.insert(bid(id)).unwrap();
        }
        // Buckets: 2 -> [7], 3 -> [3, 8], 4 -> [9].
        let ids: Vec<&str> = table.enumerate().iter().map(|b| b.id()).collect();
        assert_eq!(ids, ["7", "3", "8", "9"]);
    }

    #[test]
    fn default_bucket_count_is_the_prime() {
        assert_eq!(HashStore::new().bucket_count(), 179);
    }

    #[test]
    #[should_panic(expected = "at least one bucket")]
    fn zero_buckets_is_refused_at_construction() {
        HashStore::with_buckets(0);
    }

    #[test]
    fn long_chain_drops_without_recursion() {
        let mut table = HashStore::with_buckets(1);
        for i in 0..5000 {
            table.insert(bid(&i.to_string())).unwrap();
        }
        drop(table); // must not overflow the stack
    }
}
