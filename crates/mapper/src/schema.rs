//! Schema derivation and caching
//!
//! A [`Schema`] is the bidirectional mapping between a record type's field
//! positions and its `family:qualifier` column keys, derived once from the
//! type's binding table. The [`SchemaRegistry`] memoizes schemas per
//! record type for the life of the process: a type's shape cannot change
//! at runtime, so a cached schema is never invalidated or rebuilt.
//!
//! Derivation is eager and fallible. Binding mistakes (a tag missing its
//! qualifier, two fields claiming one column) are programming errors and
//! fail resolution before any I/O is attempted, instead of surfacing
//! somewhere inside a per-row decode.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use rowmap_core::error::SchemaError;
use rowmap_core::record::Record;

/// Derived field/column mapping for one record type
///
/// Owned by the registry and shared read-only by every mapper call for the
/// type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    type_name: &'static str,
    col_to_field: HashMap<String, usize>,
    field_to_col: Vec<String>,
}

impl Schema {
    /// Derive a schema from a record type's binding table
    ///
    /// Walks the bindings in declaration order. Unbound entries are
    /// excluded from both mapping directions. A bound tag must split on
    /// `,` into at least a family and a qualifier; components past the
    /// second are ignored.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::MalformedBinding`] if a bound tag has fewer than
    ///   two components or an empty family or qualifier
    /// - [`SchemaError::DuplicateColumn`] if two fields bind the same
    ///   column key
    pub fn derive<R: Record>() -> Result<Self, SchemaError> {
        let type_name = std::any::type_name::<R>();
        let bindings = R::bindings();
        let mut col_to_field = HashMap::with_capacity(bindings.len());
        let mut field_to_col = vec![String::new(); bindings.len()];

        for (index, binding) in bindings.iter().enumerate() {
            if binding.is_unbound() {
                continue;
            }
            let mut components = binding.tag.split(',');
            let family = components.next().unwrap_or("");
            let qualifier = components.next().unwrap_or("");
            if family.is_empty() || qualifier.is_empty() {
                return Err(SchemaError::MalformedBinding {
                    type_name,
                    field: binding.name,
                });
            }
            let key = format!("{family}:{qualifier}");
            if col_to_field.insert(key.clone(), index).is_some() {
                return Err(SchemaError::DuplicateColumn { type_name, key });
            }
            field_to_col[index] = key;
        }

        Ok(Self {
            type_name,
            col_to_field,
            field_to_col,
        })
    }

    /// Name of the record type this schema was derived from
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Field position bound to a column key, if any
    pub fn field_index(&self, column_key: &str) -> Option<usize> {
        self.col_to_field.get(column_key).copied()
    }

    /// Column key bound at a field position, `None` when unbound
    pub fn column_key(&self, index: usize) -> Option<&str> {
        match self.field_to_col.get(index) {
            Some(key) if !key.is_empty() => Some(key),
            _ => None,
        }
    }

    /// `(family, qualifier)` bound at a field position, `None` when unbound
    pub fn column_parts(&self, index: usize) -> Option<(&str, &str)> {
        self.column_key(index).and_then(|key| key.split_once(':'))
    }

    /// Iterate bound positions as `(field_index, column_key)`
    pub fn bound_columns(&self) -> impl Iterator<Item = (usize, &str)> {
        self.field_to_col
            .iter()
            .enumerate()
            .filter(|(_, key)| !key.is_empty())
            .map(|(index, key)| (index, key.as_str()))
    }

    /// Number of bound columns
    pub fn column_count(&self) -> usize {
        self.col_to_field.len()
    }
}

/// Process-lifetime cache of derived schemas
///
/// Resolution takes the read lock on the hit path. On a miss the write
/// lock is taken and the cache re-checked before deriving, so concurrent
/// first-use of one type derives its schema exactly once and every reader
/// observes a fully-built entry. The first successful derivation wins and
/// is never replaced.
pub struct SchemaRegistry {
    schemas: RwLock<HashMap<TypeId, Arc<Schema>>>,
}

impl SchemaRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            schemas: RwLock::new(HashMap::new()),
        }
    }

    /// Resolve the schema for a record type, deriving it on first use
    ///
    /// # Errors
    ///
    /// Propagates the [`SchemaError`] from derivation. A failed derivation
    /// is not cached; resolving the same broken type again fails the same
    /// way.
    pub fn resolve<R: Record + 'static>(&self) -> Result<Arc<Schema>, SchemaError> {
        let type_id = TypeId::of::<R>();
        if let Some(schema) = self.schemas.read().get(&type_id) {
            return Ok(Arc::clone(schema));
        }

        let mut schemas = self.schemas.write();
        if let Some(schema) = schemas.get(&type_id) {
            return Ok(Arc::clone(schema));
        }
        let schema = Arc::new(Schema::derive::<R>()?);
        schemas.insert(type_id, Arc::clone(&schema));
        Ok(schema)
    }

    /// Number of cached schemas
    pub fn len(&self) -> usize {
        self.schemas.read().len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.schemas.read().is_empty()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SchemaRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaRegistry")
            .field("schema_count", &self.len())
            .finish()
    }
}
