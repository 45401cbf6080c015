//! Error types shared by the store backends.
//!
//! "Not found" is never an error here - those cases are `Ok(None)` or
//! `Ok(false)` on the [`KeyedStore`](crate::KeyedStore) contract. The
//! variants below are genuine caller errors.

/// Errors a keyed store can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The empty string is the reserved "not found" sentinel and can
    /// never be a stored id.
    #[error("bid id must not be empty")]
    EmptyId,

    /// The hash backend keys buckets by a numeric reduction of the id,
    /// so ids it stores must parse as unsigned integers.
    #[error("bid id {id:?} is not numeric; the hash store requires numeric ids")]
    NonNumericId {
        /// The offending id, verbatim.
        id: String,
    },
}
