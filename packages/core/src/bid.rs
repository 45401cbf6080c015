//! The Bid type - the record stored by every backend.

use serde::{Deserialize, Serialize};

/// A single auction bid record.
///
/// The `id` is the unique key every store operates on. The empty id is
/// reserved: stores reject it on insert, so a defaulted `Bid` can never
/// collide with a stored one.
///
/// # Example
///
/// ```rust
/// use bidstore_core::Bid;
///
/// let bid = Bid::new("98109", "Office Chairs", "General Fund", 74.50);
/// assert_eq!(bid.id(), "98109");
/// assert_eq!(format!("{}", bid), "98109: Office Chairs | 74.5 | General Fund");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    /// Unique identifier. Empty only on a defaulted, never-stored bid.
    pub id: String,
    /// Free-text title; the sort key used by `bidstore-sort`.
    pub title: String,
    /// Fund the bid draws on. Opaque to the stores.
    pub fund: String,
    /// Winning amount. Non-negative by convention, 0.0 when unset.
    pub amount: f64,
}

impl Bid {
    /// Create a bid with all fields populated.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        fund: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            fund: fund.into(),
            amount,
        }
    }

    /// The unique key this bid is stored under.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl std::fmt::Display for Bid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} | {} | {}",
            self.id, self.title, self.amount, self.fund
        )
    }
}
