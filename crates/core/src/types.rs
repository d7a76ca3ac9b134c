//! Wire-facing types for rowmap
//!
//! This module defines the data that crosses the transport boundary:
//! - Column: a `family:qualifier` address, used to select columns on read
//!   and label values on write
//! - ColumnValue: one cell (address + bytes + optional timestamp)
//! - Row: a read result
//! - RowMutation: a write payload
//! - ScanSpec: one logical range query
//! - Filter: caller-supplied filter expression and row limit
//! - TableRef: `namespace:table` table identifier

use serde::{Deserialize, Serialize};
use std::fmt;

/// Address of a column within a row
///
/// Columns are grouped into families; a column is addressed by the pair
/// `family:qualifier`. The pair is also the identity key under which a
/// record type's schema maps the column to a field, so it must be unique
/// within one record type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    /// Column family name
    pub family: String,
    /// Column qualifier within the family
    pub qualifier: String,
    /// Optional cell timestamp, used when selecting versions on read
    pub timestamp: Option<i64>,
}

impl Column {
    /// Create a column address without a timestamp
    pub fn new(family: impl Into<String>, qualifier: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            qualifier: qualifier.into(),
            timestamp: None,
        }
    }

    /// Create a column address selecting a specific cell timestamp
    pub fn with_timestamp(
        family: impl Into<String>,
        qualifier: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        Self {
            family: family.into(),
            qualifier: qualifier.into(),
            timestamp: Some(timestamp),
        }
    }

    /// The column identity key, `family:qualifier`
    pub fn key(&self) -> String {
        format!("{}:{}", self.family, self.qualifier)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.family, self.qualifier)
    }
}

/// One cell on the wire: column address plus encoded value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnValue {
    /// Column family name
    pub family: String,
    /// Column qualifier within the family
    pub qualifier: String,
    /// Encoded cell bytes
    pub value: Vec<u8>,
    /// Optional cell timestamp assigned by the store
    pub timestamp: Option<i64>,
}

impl ColumnValue {
    /// Create a cell without a timestamp
    pub fn new(family: impl Into<String>, qualifier: impl Into<String>, value: Vec<u8>) -> Self {
        Self {
            family: family.into(),
            qualifier: qualifier.into(),
            value,
            timestamp: None,
        }
    }

    /// The column identity key, `family:qualifier`
    pub fn key(&self) -> String {
        format!("{}:{}", self.family, self.qualifier)
    }
}

/// A row as returned by the store
///
/// The key is the store-reported row key, which wins over the
/// caller-supplied lookup key when a record is materialized. An absent row
/// is represented by an empty key and no columns rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Row key bytes
    pub key: Vec<u8>,
    /// Cells in store order
    pub columns: Vec<ColumnValue>,
}

impl Row {
    /// Create a row from its key and cells
    pub fn new(key: impl Into<Vec<u8>>, columns: Vec<ColumnValue>) -> Self {
        Self {
            key: key.into(),
            columns,
        }
    }

    /// Check whether the store returned no data for this row
    pub fn is_empty(&self) -> bool {
        self.key.is_empty() && self.columns.is_empty()
    }
}

/// A single-row write payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowMutation {
    /// Row key bytes
    pub key: Vec<u8>,
    /// Cells to write
    pub columns: Vec<ColumnValue>,
}

impl RowMutation {
    /// Create an empty mutation for the given row key
    pub fn new(key: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            columns: Vec::new(),
        }
    }
}

/// One logical range query
///
/// A scan covers `[start_row, stop_row)` in ascending raw-byte key order.
/// The spec is mutated across paginated sub-requests: `start_row` advances
/// past the last row each page returned. An empty `stop_row` means the
/// scan is unbounded above.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSpec {
    /// First row to return, inclusive
    pub start_row: Vec<u8>,
    /// First row NOT to return, exclusive; empty means unbounded
    pub stop_row: Vec<u8>,
    /// Columns to return; empty means all columns
    pub columns: Vec<Column>,
    /// Raw filter expression, passed through to the store opaquely
    pub filter: Option<String>,
}

impl ScanSpec {
    /// Create a scan over `[start_row, stop_row)` returning all columns
    pub fn new(start_row: impl Into<Vec<u8>>, stop_row: impl Into<Vec<u8>>) -> Self {
        Self {
            start_row: start_row.into(),
            stop_row: stop_row.into(),
            columns: Vec::new(),
            filter: None,
        }
    }
}

/// Caller-supplied scan constraints
///
/// `limit` bounds the total number of rows returned across all paginated
/// sub-requests of one scan, not the size of a single page. The filter
/// expression is handed to the store untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    /// Raw store filter expression
    pub filter: Option<String>,
    /// Maximum total rows to return
    pub limit: Option<i32>,
}

impl Filter {
    /// Constrain a scan to at most `limit` rows
    pub fn with_limit(limit: i32) -> Self {
        Self {
            filter: None,
            limit: Some(limit),
        }
    }

    /// Constrain a scan with a raw store filter expression
    pub fn with_expression(filter: impl Into<String>) -> Self {
        Self {
            filter: Some(filter.into()),
            limit: None,
        }
    }

    /// Set the row limit
    pub fn limit(mut self, limit: i32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Table identifier: namespace plus table name
///
/// Formats as `namespace:table`, the identifier convention the transport
/// expects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableRef {
    /// Namespace grouping related tables
    pub namespace: String,
    /// Table name within the namespace
    pub table: String,
}

impl TableRef {
    /// Create a table reference
    pub fn new(namespace: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            table: table.into(),
        }
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.table)
    }
}
