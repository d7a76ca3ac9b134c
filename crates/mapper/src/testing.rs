//! In-memory reference store for tests
//!
//! [`MemoryTransport`] models the remote store precisely enough to
//! exercise the mapper end to end without a network: rows live in a
//! `BTreeMap` per table, so scans come back in ascending raw-byte key
//! order exactly as the pagination cursor assumes. Every scan call's
//! start key and batch size are recorded for assertions, and calls can be
//! made to fail by index to drive the failure paths.
//!
//! The store-side filter language is not modeled; a scan's filter
//! expression is accepted and ignored.

use std::collections::{BTreeMap, HashMap};

use parking_lot::Mutex;
use rowmap_core::error::TransportError;
use rowmap_core::transport::Transport;
use rowmap_core::types::{ColumnValue, Row, RowMutation, ScanSpec};

/// One recorded scan call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanCall {
    /// Start key the call was issued with
    pub start_row: Vec<u8>,
    /// Batch size the call was issued with
    pub batch_size: i32,
}

#[derive(Default)]
struct StoreState {
    /// table -> row key -> column key -> cell
    tables: HashMap<String, BTreeMap<Vec<u8>, BTreeMap<String, ColumnValue>>>,
    scan_calls: Vec<ScanCall>,
    fail_scan_at: Option<usize>,
    fail_writes: bool,
}

/// In-memory [`Transport`] implementation for tests
///
/// # Example
///
/// ```
/// use rowmap_core::types::ColumnValue;
/// use rowmap_core::transport::Transport;
/// use rowmap_mapper::testing::MemoryTransport;
///
/// let store = MemoryTransport::new();
/// store.insert_row(
///     "account:user",
///     "u1",
///     vec![ColumnValue::new("profile", "name", b"Ann".to_vec())],
/// );
/// let row = store.get("account:user", b"u1").unwrap();
/// assert_eq!(row.key, b"u1");
/// ```
#[derive(Default)]
pub struct MemoryTransport {
    state: Mutex<StoreState>,
}

impl MemoryTransport {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a row directly, bypassing the transport interface
    pub fn insert_row(&self, table: &str, key: impl AsRef<[u8]>, cells: Vec<ColumnValue>) {
        let mut state = self.state.lock();
        let row = state
            .tables
            .entry(table.to_string())
            .or_default()
            .entry(key.as_ref().to_vec())
            .or_default();
        for cell in cells {
            row.insert(cell.key(), cell);
        }
    }

    /// Scan calls recorded so far, oldest first
    pub fn scan_calls(&self) -> Vec<ScanCall> {
        self.state.lock().scan_calls.clone()
    }

    /// Make the scan call with this zero-based index fail
    pub fn fail_scan_at(&self, call_index: usize) {
        self.state.lock().fail_scan_at = Some(call_index);
    }

    /// Make every subsequent write fail
    pub fn fail_writes(&self) {
        self.state.lock().fail_writes = true;
    }

    /// Number of rows currently stored in a table
    pub fn row_count(&self, table: &str) -> usize {
        self.state
            .lock()
            .tables
            .get(table)
            .map_or(0, |rows| rows.len())
    }

    /// Look up a stored row directly, bypassing the transport interface
    pub fn stored_row(&self, table: &str, key: &[u8]) -> Option<Row> {
        let state = self.state.lock();
        let cells = state.tables.get(table)?.get(key)?;
        Some(Row::new(key.to_vec(), cells.values().cloned().collect()))
    }

    fn apply(state: &mut StoreState, table: &str, mutation: RowMutation) {
        let row = state
            .tables
            .entry(table.to_string())
            .or_default()
            .entry(mutation.key)
            .or_default();
        for cell in mutation.columns {
            row.insert(cell.key(), cell);
        }
    }
}

impl Transport for MemoryTransport {
    fn get(&self, table: &str, row_key: &[u8]) -> Result<Row, TransportError> {
        let state = self.state.lock();
        let cells = state.tables.get(table).and_then(|rows| rows.get(row_key));
        match cells {
            Some(cells) => Ok(Row::new(
                row_key.to_vec(),
                cells.values().cloned().collect(),
            )),
            None => Ok(Row::default()),
        }
    }

    fn scan(
        &self,
        table: &str,
        spec: &ScanSpec,
        batch_size: i32,
    ) -> Result<Vec<Row>, TransportError> {
        let mut state = self.state.lock();
        let call_index = state.scan_calls.len();
        state.scan_calls.push(ScanCall {
            start_row: spec.start_row.clone(),
            batch_size,
        });
        if state.fail_scan_at == Some(call_index) {
            return Err(TransportError::new("injected scan failure"));
        }

        let rows = match state.tables.get(table) {
            Some(rows) => rows,
            None => return Ok(Vec::new()),
        };
        let selected: Vec<Row> = rows
            .range(spec.start_row.clone()..)
            .take_while(|(key, _)| {
                spec.stop_row.is_empty() || key.as_slice() < spec.stop_row.as_slice()
            })
            .take(batch_size.max(0) as usize)
            .map(|(key, cells)| {
                let columns = cells
                    .values()
                    .filter(|cell| {
                        spec.columns.is_empty()
                            || spec
                                .columns
                                .iter()
                                .any(|col| col.family == cell.family && col.qualifier == cell.qualifier)
                    })
                    .cloned()
                    .collect();
                Row::new(key.clone(), columns)
            })
            .collect();
        Ok(selected)
    }

    fn put(&self, table: &str, row: RowMutation) -> Result<(), TransportError> {
        let mut state = self.state.lock();
        if state.fail_writes {
            return Err(TransportError::new("injected write failure"));
        }
        Self::apply(&mut state, table, row);
        Ok(())
    }

    fn put_multiple(&self, table: &str, rows: Vec<RowMutation>) -> Result<(), TransportError> {
        let mut state = self.state.lock();
        if state.fail_writes {
            return Err(TransportError::new("injected write failure"));
        }
        for row in rows {
            Self::apply(&mut state, table, row);
        }
        Ok(())
    }
}
