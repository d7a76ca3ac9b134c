//! Record mapper: typed records over the transport
//!
//! [`Mapper`] is a stateless facade over a [`Transport`]. It holds no data
//! of its own beyond the schema cache and configuration; every operation
//! resolves the record type's schema (cached after first use), moves bytes
//! through the injected codec, and issues transport calls.
//!
//! ## Error flow
//!
//! Reads return an [`Outcome`] so partial data survives an attached error:
//! a scan that fails midway still hands back its accumulated pages, and a
//! row with one undecodable cell still materializes its other fields.
//! Schema problems are fatal and attach before any transport call. Writes
//! return a plain `Result`; there is no partial value to keep.

use rowmap_core::error::{Error, Outcome, Result, SchemaError};
use rowmap_core::record::Record;
use rowmap_core::transport::Transport;
use rowmap_core::types::{Column, ColumnValue, Filter, Row, RowMutation, ScanSpec};
use tracing::{debug, warn};

use crate::config::MapperConfig;
use crate::scan::ScanDriver;
use crate::schema::{Schema, SchemaRegistry};

/// Maps typed records onto rows of a remote column-family store
///
/// # Example
///
/// ```ignore
/// use rowmap_mapper::{Mapper, MemoryTransport};
///
/// let mapper = Mapper::new(MemoryTransport::new());
/// mapper.set(&user, &[])?;
/// let found: Outcome<User> = mapper.get("u1");
/// ```
pub struct Mapper<T: Transport> {
    transport: T,
    registry: SchemaRegistry,
    config: MapperConfig,
}

impl<T: Transport> Mapper<T> {
    /// Create a mapper with the default configuration
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, MapperConfig::default())
    }

    /// Create a mapper with an explicit configuration
    pub fn with_config(transport: T, config: MapperConfig) -> Self {
        Self {
            transport,
            registry: SchemaRegistry::new(),
            config,
        }
    }

    /// The underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The active configuration
    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Fetch a single record by row key
    ///
    /// The returned record's identity field holds the store-reported row
    /// key, which may differ from `row_key` if the store canonicalizes
    /// keys. A missing row yields a record with no decoded fields and no
    /// error. Cells whose column is not bound by the schema are ignored.
    /// The first cell that fails to decode attaches its error; remaining
    /// cells still decode.
    pub fn get<R: Record + 'static>(&self, row_key: &str) -> Outcome<R> {
        let table = R::table_ref().to_string();
        debug!(table = %table, row_key, "get row");
        let schema = match self.registry.resolve::<R>() {
            Ok(schema) => schema,
            Err(error) => return Outcome::with_error(R::default(), error),
        };
        let row = match self.transport.get(&table, row_key.as_bytes()) {
            Ok(row) => row,
            Err(error) => return Outcome::with_error(R::default(), error),
        };
        let (record, error) = self.decode_row::<R>(&schema, &row);
        Outcome {
            value: record,
            error,
        }
    }

    /// Insert or update one record
    ///
    /// With a non-empty `selects`, exactly those columns are written; a
    /// selection the schema does not bind fails with
    /// [`SchemaError::UnknownColumn`] before any transport call. With an
    /// empty `selects`, every schema-bound field is written. The row key
    /// is read from the record's identity field.
    ///
    /// # Errors
    ///
    /// Schema resolution and selection errors surface first; otherwise the
    /// transport's write error is propagated unchanged.
    pub fn set<R: Record + 'static>(&self, record: &R, selects: &[Column]) -> Result<()> {
        let table = R::table_ref().to_string();
        debug!(table = %table, row_key = record.row_key(), "set row");
        let schema = self.registry.resolve::<R>()?;
        let mutation = self.encode_record(&schema, record, selects)?;
        self.transport.put(&table, mutation)?;
        Ok(())
    }

    /// Insert or update several records of one type in a single call
    ///
    /// Each record is encoded under the same selection rule as [`set`],
    /// then all rows go out in one multi-row write. An empty slice is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Encoding errors for any record abort the whole batch before I/O;
    /// the transport's write error is propagated unchanged.
    ///
    /// [`set`]: Mapper::set
    pub fn batch_set<R: Record + 'static>(&self, records: &[R], selects: &[Column]) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }
        let table = R::table_ref().to_string();
        debug!(table = %table, rows = records.len(), "batch set rows");
        let schema = self.registry.resolve::<R>()?;
        let mutations = records
            .iter()
            .map(|record| self.encode_record(&schema, record, selects))
            .collect::<Result<Vec<_>>>()?;
        self.transport.put_multiple(&table, mutations)?;
        Ok(())
    }

    /// Range query over `[start_row, stop_row)`
    ///
    /// Pagination is handled internally: bounded scan calls are issued
    /// until the range or the filter's row limit is exhausted, advancing
    /// the cursor past the last row of each page. Rows decode through the
    /// same per-cell path as [`get`]. On a transport failure the records
    /// decoded from already-fetched pages are returned with the error
    /// attached.
    ///
    /// [`get`]: Mapper::get
    pub fn find<R: Record + 'static>(
        &self,
        start_row: &str,
        stop_row: &str,
        selects: &[Column],
        filter: Option<&Filter>,
    ) -> Outcome<Vec<R>> {
        let table = R::table_ref().to_string();
        debug!(table = %table, start_row, stop_row, "find rows");
        let schema = match self.registry.resolve::<R>() {
            Ok(schema) => schema,
            Err(error) => return Outcome::with_error(Vec::new(), error),
        };

        let mut spec = ScanSpec::new(start_row.as_bytes().to_vec(), stop_row.as_bytes().to_vec());
        spec.columns = selects.to_vec();
        if let Some(filter) = filter {
            spec.filter = filter.filter.clone();
        }
        let limit = filter.and_then(|filter| filter.limit);

        let scan = ScanDriver::new(
            &self.transport,
            &table,
            spec,
            self.config.batch_size,
            limit,
        )
        .run();

        let mut records = Vec::with_capacity(scan.rows.len());
        let mut first_error: Option<Error> = scan.error.map(Error::from);
        for row in &scan.rows {
            let (record, error) = self.decode_row::<R>(&schema, row);
            records.push(record);
            if first_error.is_none() {
                first_error = error;
            }
        }
        Outcome {
            value: records,
            error: first_error,
        }
    }

    /// Materialize one wire row into a fresh record
    fn decode_row<R: Record>(&self, schema: &Schema, row: &Row) -> (R, Option<Error>) {
        let mut record = R::default();
        record.set_row_key(String::from_utf8_lossy(&row.key).into_owned());
        let bindings = R::bindings();
        let mut first_error = None;
        for cell in &row.columns {
            let key = cell.key();
            let index = match schema.field_index(&key) {
                Some(index) => index,
                None => continue,
            };
            match self.config.codec.decode(bindings[index].kind, &cell.value) {
                Ok(value) => record.set_field(index, value),
                Err(error) => {
                    warn!(column = %key, %error, "failed to decode column value");
                    if first_error.is_none() {
                        first_error = Some(error.into());
                    }
                }
            }
        }
        (record, first_error)
    }

    /// Encode a record's selected fields into a write payload
    fn encode_record<R: Record>(
        &self,
        schema: &Schema,
        record: &R,
        selects: &[Column],
    ) -> Result<RowMutation> {
        let mut mutation = RowMutation::new(record.row_key().as_bytes().to_vec());
        if selects.is_empty() {
            for (index, key) in schema.bound_columns() {
                let (family, qualifier) = match key.split_once(':') {
                    Some(parts) => parts,
                    None => continue,
                };
                if let Some(value) = record.get_field(index) {
                    mutation.columns.push(ColumnValue::new(
                        family,
                        qualifier,
                        self.config.codec.encode(&value),
                    ));
                }
            }
        } else {
            for column in selects {
                let key = column.key();
                let index = schema.field_index(&key).ok_or(SchemaError::UnknownColumn {
                    type_name: schema.type_name(),
                    key,
                })?;
                if let Some(value) = record.get_field(index) {
                    mutation.columns.push(ColumnValue::new(
                        column.family.clone(),
                        column.qualifier.clone(),
                        self.config.codec.encode(&value),
                    ));
                }
            }
        }
        Ok(mutation)
    }
}

impl<T: Transport> std::fmt::Debug for Mapper<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mapper")
            .field("registry", &self.registry)
            .field("config", &self.config)
            .finish()
    }
}
