//! rowmap - typed record mapping for remote column-family stores
//!
//! rowmap maps application-defined record types onto rows of a
//! schema-less, column-family store (byte-string row keys,
//! `family:qualifier` cells, lexicographic row ordering) without
//! per-field serialization or hand-written scan pagination.
//!
//! # Quick Start
//!
//! ```
//! use rowmap::{
//!     FieldBinding, Kind, Mapper, Record, Value,
//!     testing::MemoryTransport,
//! };
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct User {
//!     id: String,
//!     name: String,
//!     age: i64,
//! }
//!
//! impl Record for User {
//!     fn namespace() -> &'static str {
//!         "account"
//!     }
//!
//!     fn table_name() -> &'static str {
//!         "user"
//!     }
//!
//!     fn bindings() -> &'static [FieldBinding] {
//!         const BINDINGS: &[FieldBinding] = &[
//!             FieldBinding::new("name", "profile,name", Kind::String),
//!             FieldBinding::new("age", "profile,age", Kind::Int),
//!         ];
//!         BINDINGS
//!     }
//!
//!     fn row_key(&self) -> &str {
//!         &self.id
//!     }
//!
//!     fn set_row_key(&mut self, key: String) {
//!         self.id = key;
//!     }
//!
//!     fn get_field(&self, index: usize) -> Option<Value> {
//!         match index {
//!             0 => Some(Value::String(self.name.clone())),
//!             1 => Some(Value::Int(self.age)),
//!             _ => None,
//!         }
//!     }
//!
//!     fn set_field(&mut self, index: usize, value: Value) {
//!         match (index, value) {
//!             (0, Value::String(s)) => self.name = s,
//!             (1, Value::Int(n)) => self.age = n,
//!             _ => {}
//!         }
//!     }
//! }
//!
//! let mapper = Mapper::new(MemoryTransport::new());
//!
//! let user = User { id: "u1".into(), name: "Ann".into(), age: 30 };
//! mapper.set(&user, &[]).unwrap();
//!
//! let found = mapper.get::<User>("u1");
//! assert!(found.is_ok());
//! assert_eq!(found.value, user);
//! ```
//!
//! # Architecture
//!
//! The workspace splits along its seams:
//!
//! - `rowmap-core`: the data model, the [`Record`] capability trait, the
//!   [`Transport`] boundary, and the error taxonomy
//! - `rowmap-codec`: pluggable scalar codecs ([`BinaryCodec`] by default)
//! - `rowmap-mapper`: schema cache, record mapper, and the paginating
//!   scan driver
//!
//! The transport itself (wire protocol, connections, auth, timeouts) is
//! an external collaborator: anything implementing [`Transport`] plugs
//! in, including the bundled in-memory [`testing::MemoryTransport`].

// Re-export the public API of the member crates
pub use rowmap_codec::{get_codec, BinaryCodec, TextCodec, ValueCodec};
pub use rowmap_core::{
    Column, ColumnValue, DecodeError, Error, FieldBinding, Filter, Kind, Outcome, Record, Result,
    Row, RowMutation, ScanSpec, SchemaError, TableRef, Transport, TransportError, Value,
    NO_BINDING,
};
pub use rowmap_mapper::{
    closest_row_after, testing, Mapper, MapperConfig, Schema, SchemaRegistry, ScanDriver,
    ScanOutcome, DEFAULT_BATCH_SIZE,
};
