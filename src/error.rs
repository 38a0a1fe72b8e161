//! Errors reported by the tree collections.

use thiserror::Error;

/// A `Result` whose error is the crate's [`Error`](enum.Error.html).
pub type Result<T> = ::std::result::Result<T, Error>;

/// Errors that can occur when querying or mutating a collection.
///
/// A failed operation never changes the collection it was called on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// The requested key is not present.
    #[error("key not found")]
    KeyNotFound,

    /// The operation needs at least one entry, but the collection is empty.
    #[error("collection is empty")]
    EmptyStructure,
}
