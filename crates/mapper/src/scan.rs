//! Batched range-scan driver
//!
//! One logical range query becomes a sequence of bounded scan calls. The
//! driver owns the [`ScanSpec`] across those calls and advances its start
//! key past the last row each page returned, so no row is scanned twice
//! and none is skipped.
//!
//! ## Cursor advancement
//!
//! Appending a single `0x00` byte to a key produces the lexicographically
//! smallest key strictly greater than it under raw-byte comparison. That
//! makes the advancement rule independent of how row keys are encoded, as
//! long as the store orders rows by raw bytes. A store that returns rows
//! out of ascending key order breaks this rule and can cause gaps or
//! duplicates.
//!
//! ## Failure behavior
//!
//! A transport error ends the scan but keeps everything accumulated so
//! far: the outcome carries the partial pages next to the error.

use rowmap_core::error::TransportError;
use rowmap_core::transport::Transport;
use rowmap_core::types::{Row, ScanSpec};
use tracing::debug;

/// Raw rows accumulated by a scan, plus the error that ended it early
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutcome {
    /// Rows in store order; complete on success, partial on failure
    pub rows: Vec<Row>,
    /// Set when the scan stopped on a transport failure
    pub error: Option<TransportError>,
}

/// Drives one logical range query through repeated bounded scan calls
pub struct ScanDriver<'a, T: Transport + ?Sized> {
    transport: &'a T,
    table: &'a str,
    spec: ScanSpec,
    batch_cap: i32,
    limit: Option<i32>,
    rows: Vec<Row>,
}

impl<'a, T: Transport + ?Sized> ScanDriver<'a, T> {
    /// Create a driver for one range query
    ///
    /// `batch_cap` is clamped to at least one row per call. `limit`, when
    /// set, bounds the total rows accumulated across all calls.
    pub fn new(
        transport: &'a T,
        table: &'a str,
        spec: ScanSpec,
        batch_cap: i32,
        limit: Option<i32>,
    ) -> Self {
        Self {
            transport,
            table,
            spec,
            batch_cap: batch_cap.max(1),
            limit,
            rows: Vec::new(),
        }
    }

    /// Rows the next call may request, or `None` when the limit is reached
    fn next_batch_size(&self) -> Option<i32> {
        match self.limit {
            None => Some(self.batch_cap),
            Some(limit) => {
                let remaining = limit - self.rows.len() as i32;
                if remaining <= 0 {
                    None
                } else {
                    Some(self.batch_cap.min(remaining))
                }
            }
        }
    }

    /// Run the scan to completion
    ///
    /// Issues bounded scan calls until the limit is reached, a page comes
    /// back empty (range exhausted), or the transport fails.
    pub fn run(mut self) -> ScanOutcome {
        loop {
            let batch_size = match self.next_batch_size() {
                Some(size) => size,
                None => break,
            };
            let batch = match self.transport.scan(self.table, &self.spec, batch_size) {
                Ok(batch) => batch,
                Err(error) => {
                    debug!(
                        table = self.table,
                        rows = self.rows.len(),
                        "scan stopped on transport failure"
                    );
                    return ScanOutcome {
                        rows: self.rows,
                        error: Some(error),
                    };
                }
            };
            let last_key = match batch.last() {
                Some(row) => row.key.clone(),
                None => break,
            };
            self.rows.extend(batch);
            self.spec.start_row = closest_row_after(&last_key);
        }
        ScanOutcome {
            rows: self.rows,
            error: None,
        }
    }
}

/// Smallest key strictly greater than `key` under raw-byte comparison
pub fn closest_row_after(key: &[u8]) -> Vec<u8> {
    let mut next = Vec::with_capacity(key.len() + 1);
    next.extend_from_slice(key);
    next.push(0x00);
    next
}
