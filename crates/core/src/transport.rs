//! Transport abstraction over the remote store
//!
//! The mapper consumes exactly four remote operations. Everything about
//! the wire protocol, connections, authentication, and timeouts lives
//! behind this trait, so the store client can be swapped without touching
//! the mapping layer. Per-round-trip timeouts are the implementation's
//! responsibility; the mapper never imposes one across a whole scan.

use crate::error::TransportError;
use crate::types::{Row, RowMutation, ScanSpec};

/// Remote store operations consumed by the mapper
///
/// `table` is the store's table identifier, conventionally
/// `namespace:table` (see [`TableRef`](crate::types::TableRef)).
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the mapper issues calls from
/// whatever thread its caller runs on.
pub trait Transport: Send + Sync {
    /// Fetch a single row by key
    ///
    /// A missing row is not an error: implementations return an empty
    /// [`Row`] and let the caller interpret the absence.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the remote call fails.
    fn get(&self, table: &str, row_key: &[u8]) -> Result<Row, TransportError>;

    /// Fetch at most `batch_size` rows matching `spec`, in ascending
    /// raw-byte key order
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the remote call fails.
    fn scan(&self, table: &str, spec: &ScanSpec, batch_size: i32)
        -> Result<Vec<Row>, TransportError>;

    /// Write one row
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the remote call fails. Partial
    /// application on the store side is not rolled back by this layer.
    fn put(&self, table: &str, row: RowMutation) -> Result<(), TransportError>;

    /// Write several rows in one remote call
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the remote call fails.
    fn put_multiple(&self, table: &str, rows: Vec<RowMutation>) -> Result<(), TransportError>;
}
