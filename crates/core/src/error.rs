//! Error types for rowmap
//!
//! This module defines the error taxonomy used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! Three failure classes are kept apart on purpose:
//! - [`SchemaError`]: a programming mistake in a record type or call; fatal,
//!   raised before any I/O happens
//! - [`DecodeError`]: one cell's bytes could not be interpreted; recoverable,
//!   sibling cells still decode
//! - [`TransportError`]: the remote call failed; opaque to this layer,
//!   retry policy belongs to the caller
//!
//! Read operations return an [`Outcome`], which carries usable data next to
//! an optional attached error so partial scan results survive a failure.

use crate::value::Kind;
use thiserror::Error;

/// Result type alias for rowmap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Umbrella error for mapper operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Fatal schema construction or resolution failure
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A cell's bytes could not be decoded into the field's kind
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The remote store call failed
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Fatal schema errors
///
/// Each variant signals a mistake in a record type declaration or in a
/// caller-supplied column selection. They surface before any I/O: a
/// malformed binding aborts the whole operation, never a single row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A column binding did not name both a family and a qualifier
    #[error("column binding for field `{field}` on `{type_name}` must name a family and qualifier")]
    MalformedBinding {
        /// Record type the binding belongs to
        type_name: &'static str,
        /// Field carrying the malformed binding
        field: &'static str,
    },

    /// Two fields bound the same `family:qualifier` key
    #[error("duplicate column `{key}` on `{type_name}`")]
    DuplicateColumn {
        /// Record type the bindings belong to
        type_name: &'static str,
        /// The colliding column key
        key: String,
    },

    /// A selected column is not bound by the record type's schema
    #[error("column `{key}` is not mapped on `{type_name}`")]
    UnknownColumn {
        /// Record type the selection was resolved against
        type_name: &'static str,
        /// The unresolved column key
        key: String,
    },
}

/// Per-value decode errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Fewer bytes than the kind's fixed width
    #[error("{kind} value truncated: expected {expected} bytes, got {actual}")]
    Truncated {
        /// Kind being decoded
        kind: Kind,
        /// Fixed width the kind requires
        expected: usize,
        /// Bytes actually present
        actual: usize,
    },

    /// Boolean cell was not exactly one byte
    #[error("invalid boolean encoding: expected 1 byte, got {len}")]
    InvalidBoolean {
        /// Bytes actually present
        len: usize,
    },

    /// The bytes do not parse as the kind's text representation
    #[error("malformed {kind} value: {detail}")]
    Malformed {
        /// Kind being decoded
        kind: Kind,
        /// Parser diagnostic
        detail: String,
    },
}

/// Opaque failure from the remote store
///
/// The transport implementation maps its protocol errors into this type;
/// the mapper propagates it unchanged and never inspects the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport error: {0}")]
pub struct TransportError(String);

impl TransportError {
    /// Wrap a transport failure message
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// The underlying failure message
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Operation result carrying data next to an optional error
///
/// Read operations return an `Outcome` instead of a bare `Result` so that
/// a failed scan still hands back the pages it accumulated before the
/// failure. Callers inspect [`Outcome::error`] after the call; callers who
/// want fail-fast semantics use [`Outcome::into_result`].
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    /// The operation's data, possibly partial when `error` is set
    pub value: T,
    /// First error the operation encountered, if any
    pub error: Option<Error>,
}

impl<T> Outcome<T> {
    /// An outcome with no attached error
    pub fn ok(value: T) -> Self {
        Self { value, error: None }
    }

    /// An outcome carrying partial data and an error
    pub fn with_error(value: T, error: impl Into<Error>) -> Self {
        Self {
            value,
            error: Some(error.into()),
        }
    }

    /// Check whether the operation completed without error
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Attach an error unless one is already attached
    ///
    /// The first error wins; later ones are dropped.
    pub fn attach(&mut self, error: impl Into<Error>) {
        if self.error.is_none() {
            self.error = Some(error.into());
        }
    }

    /// Convert into a `Result`, discarding partial data on error
    pub fn into_result(self) -> Result<T> {
        match self.error {
            None => Ok(self.value),
            Some(error) => Err(error),
        }
    }
}
