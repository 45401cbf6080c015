//! Menu session state: the chosen backend, the flat loaded sequence
//! used by the sort commands, and the source/key configuration.

use std::path::PathBuf;

use bidstore_backends::{HashStore, ListStore, TreeStore};
use bidstore_core::{display, Bid, KeyedStore, StoreError};
use bidstore_ingest::IngestError;
use tracing::warn;

/// Backing store strategy, selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Backend {
    /// Unbalanced binary search tree; listing is ordered by id.
    Tree,
    /// Fixed-bucket chained hash table; requires numeric ids.
    Hash,
    /// Singly linked list; listing is insertion order.
    List,
}

/// Outcome of a bulk load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Bids accepted by the store.
    pub inserted: usize,
    /// Rows the store rejected (for example non-numeric ids on the
    /// hash backend).
    pub skipped: usize,
}

/// State shared across menu commands.
///
/// The store holds the keyed bids; `bids` is the independent flat
/// sequence the sort commands operate on. Sorting never touches the
/// store.
pub struct Session {
    store: Box<dyn KeyedStore>,
    bids: Vec<Bid>,
    source: PathBuf,
    default_key: String,
}

impl Session {
    /// Create a session over a freshly constructed backend.
    pub fn new(backend: Backend, buckets: usize, source: PathBuf, default_key: String) -> Self {
        let store: Box<dyn KeyedStore> = match backend {
            Backend::Tree => Box::new(TreeStore::new()),
            Backend::Hash => Box::new(HashStore::with_buckets(buckets)),
            Backend::List => Box::new(ListStore::new()),
        };
        Self {
            store,
            bids: Vec::new(),
            source,
            default_key,
        }
    }

    /// The id used when a find/remove prompt is left blank.
    pub fn default_key(&self) -> &str {
        &self.default_key
    }

    /// Load the configured CSV export into the store, keeping the flat
    /// sequence for the sort commands. Rows the store rejects are
    /// logged and counted, not fatal.
    pub fn load(&mut self) -> Result<LoadReport, IngestError> {
        let loaded = bidstore_ingest::load_bids(&self.source)?;

        let mut report = LoadReport {
            inserted: 0,
            skipped: 0,
        };
        for bid in &loaded {
            match self.store.insert(bid.clone()) {
                Ok(()) => report.inserted += 1,
                Err(e) => {
                    warn!(id = bid.id(), error = %e, "store rejected bid");
                    report.skipped += 1;
                }
            }
        }
        self.bids = loaded;
        Ok(report)
    }

    /// Insert a manually entered bid into both the store and the flat
    /// sequence.
    pub fn enter(&mut self, bid: Bid) -> Result<(), StoreError> {
        self.store.insert(bid.clone())?;
        self.bids.push(bid);
        Ok(())
    }

    /// Formatted lines for every stored bid, in the backend's natural
    /// order.
    pub fn listing(&self) -> Vec<String> {
        self.store
            .enumerate()
            .into_iter()
            .map(display::format_bid)
            .collect()
    }

    /// Look up a bid in the store.
    pub fn find(&self, id: &str) -> Result<Option<&Bid>, StoreError> {
        self.store.search(id)
    }

    /// Remove a bid from the store. Returns whether anything was
    /// removed.
    pub fn remove(&mut self, id: &str) -> Result<bool, StoreError> {
        self.store.delete(id)
    }

    /// Selection sort the flat loaded sequence by title. Returns the
    /// number of bids sorted.
    pub fn sort_selection(&mut self) -> usize {
        bidstore_sort::selection_sort(&mut self.bids);
        self.bids.len()
    }

    /// Quicksort the flat loaded sequence by title. Returns the number
    /// of bids sorted.
    pub fn sort_quick(&mut self) -> usize {
        bidstore_sort::quick_sort_by_title(&mut self.bids);
        self.bids.len()
    }

    /// The flat loaded sequence, in its current order.
    pub fn bids(&self) -> &[Bid] {
        &self.bids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(backend: Backend) -> Session {
        Session::new(
            backend,
            5,
            PathBuf::from("unused.csv"),
            "98109".to_string(),
        )
    }

    #[test]
    fn enter_reaches_both_store_and_sequence() {
        let mut s = session(Backend::Tree);
        s.enter(Bid::new("5", "five", "F", 1.0)).unwrap();

        assert_eq!(s.listing(), ["5: five | 1 | F"]);
        assert_eq!(s.bids().len(), 1);
        assert!(s.find("5").unwrap().is_some());
    }

    #[test]
    fn hash_backend_rejects_non_numeric_manual_entry() {
        let mut s = session(Backend::Hash);
        let err = s.enter(Bid::new("ABC", "nope", "F", 1.0)).unwrap_err();
        assert!(matches!(err, StoreError::NonNumericId { .. }));
        assert!(s.bids().is_empty());
    }

    #[test]
    fn sorts_reorder_the_flat_sequence_only() {
        let mut s = session(Backend::List);
        s.enter(Bid::new("1", "C", "F", 1.0)).unwrap();
        s.enter(Bid::new("2", "A", "F", 1.0)).unwrap();
        s.enter(Bid::new("3", "B", "F", 1.0)).unwrap();

        assert_eq!(s.sort_quick(), 3);
        let titles: Vec<&str> = s.bids().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["A", "B", "C"]);

        // The store keeps insertion order - sorting never touches it.
        assert_eq!(
            s.listing(),
            ["1: C | 1 | F", "2: A | 1 | F", "3: B | 1 | F"]
        );
    }

    #[test]
    fn remove_reports_whether_anything_went_away() {
        let mut s = session(Backend::Tree);
        s.enter(Bid::new("5", "five", "F", 1.0)).unwrap();
        assert!(s.remove("5").unwrap());
        assert!(!s.remove("5").unwrap());
        assert!(s.listing().is_empty());
    }
}
