//! Scalar value codecs for rowmap
//!
//! The codec seam decouples field values from their byte representation in
//! the store. All scalar conversion in the mapper goes through an injected
//! [`ValueCodec`], so deployments with pre-existing data in a different
//! encoding swap codecs instead of rewriting rows.
//!
//! Two implementations ship here:
//!
//! - [`BinaryCodec`]: fixed-width 8-byte big-endian numerics, single-byte
//!   booleans, identity strings. The default.
//! - [`TextCodec`]: decimal-ASCII numerics and `true`/`false` booleans,
//!   for tables written by text-encoding producers.
//!
//! # Usage
//!
//! ```
//! use rowmap_codec::{BinaryCodec, ValueCodec};
//! use rowmap_core::value::{Kind, Value};
//!
//! let codec = BinaryCodec;
//! let encoded = codec.encode(&Value::Int(30));
//! let decoded = codec.decode(Kind::Int, &encoded).unwrap();
//! assert_eq!(decoded, Value::Int(30));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod binary;
mod text;
mod traits;

pub use binary::{BinaryCodec, FIXED_WIDTH};
pub use text::TextCodec;
pub use traits::ValueCodec;

/// Get a codec by its identifier.
///
/// Returns `None` for an unrecognized identifier.
///
/// # Known Codecs
///
/// - `"binary-be"`: fixed-width big-endian (the default)
/// - `"text"`: decimal-ASCII
pub fn get_codec(codec_id: &str) -> Option<Box<dyn ValueCodec>> {
    match codec_id {
        "binary-be" => Some(Box::new(BinaryCodec)),
        "text" => Some(Box::new(TextCodec)),
        _ => None,
    }
}
