//! Core types and traits for rowmap
//!
//! This crate defines the foundational pieces shared by the codec and
//! mapper layers:
//! - Value / Kind: the closed scalar model for record fields
//! - Column, ColumnValue, Row, RowMutation, ScanSpec, Filter, TableRef:
//!   the wire-facing data model
//! - FieldBinding / Record: the compile-time capability surface a record
//!   type provides instead of runtime introspection
//! - Transport: the four-operation boundary to the remote store
//! - Error taxonomy: SchemaError (fatal), DecodeError (per-value),
//!   TransportError (external), and the Outcome carrier

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod record;
pub mod transport;
pub mod types;
pub mod value;

// Re-export commonly used types and traits
pub use error::{DecodeError, Error, Outcome, Result, SchemaError, TransportError};
pub use record::{FieldBinding, Record, NO_BINDING};
pub use transport::Transport;
pub use types::{Column, ColumnValue, Filter, Row, RowMutation, ScanSpec, TableRef};
pub use value::{Kind, Value};
