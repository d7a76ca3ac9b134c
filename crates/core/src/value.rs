//! Value types for rowmap
//!
//! This module defines:
//! - Value: the closed scalar enum for every field kind the mapper supports
//! - Kind: the matching type discriminator, used for decode dispatch
//!
//! ## Scalar Model
//!
//! The Value enum has exactly 5 variants:
//! - Int, Uint, Float, Bool, String
//!
//! Every record field maps to one of these kinds; codecs encode and decode
//! them without implicit coercion. `Int(1) != Uint(1)` and
//! `Int(1) != Float(1.0)`: different kinds are never equal. Float equality
//! follows IEEE-754 semantics (`NaN != NaN`, `-0.0 == 0.0`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical scalar value for record fields
///
/// This enum represents the 5 scalar kinds a record field can hold on the
/// wire. Codecs dispatch on the variant when encoding and on [`Kind`] when
/// decoding, so the set is closed on purpose: adding a variant means
/// touching every codec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit unsigned integer
    Uint(u64),
    /// 64-bit floating point (IEEE-754)
    Float(f64),
    /// Boolean value
    Bool(bool),
    /// UTF-8 string
    String(String),
}

impl Value {
    /// Get the kind discriminator for this value
    pub fn kind(&self) -> Kind {
        match self {
            Value::Int(_) => Kind::Int,
            Value::Uint(_) => Kind::Uint,
            Value::Float(_) => Kind::Float,
            Value::Bool(_) => Kind::Bool,
            Value::String(_) => Kind::String,
        }
    }

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        self.kind().type_name()
    }

    /// Check if this is an integer value
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Check if this is an unsigned integer value
    pub fn is_uint(&self) -> bool {
        matches!(self, Value::Uint(_))
    }

    /// Check if this is a float value
    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Check if this is a boolean value
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Check if this is a string value
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Get as i64 if this is an Int value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as u64 if this is a Uint value
    pub fn as_uint(&self) -> Option<u64> {
        match self {
            Value::Uint(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as f64 if this is a Float value
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as bool if this is a Bool value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as &str if this is a String value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Uint(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

/// Scalar kind discriminator
///
/// Declared on every [`FieldBinding`](crate::record::FieldBinding) so the
/// mapper knows which decode to run for a column's bytes before the typed
/// value exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    /// 64-bit signed integer
    Int,
    /// 64-bit unsigned integer
    Uint,
    /// 64-bit floating point
    Float,
    /// Boolean
    Bool,
    /// UTF-8 string
    String,
}

impl Kind {
    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Kind::Int => "int64",
            Kind::Uint => "uint64",
            Kind::Float => "float64",
            Kind::Bool => "bool",
            Kind::String => "string",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
