//! Decimal-text codec for stores populated by text-encoding producers.

use std::fmt::Display;
use std::str::FromStr;

use rowmap_core::error::DecodeError;
use rowmap_core::value::Kind;

use crate::traits::ValueCodec;

/// Decimal-ASCII codec.
///
/// Numbers are their base-10 text, booleans are `true`/`false`, strings
/// pass through. Useful against tables whose writers stored numbers as
/// text; not the default because text-encoded numbers do not sort
/// numerically under the store's raw-byte comparator.
///
/// # Example
///
/// ```
/// use rowmap_codec::{TextCodec, ValueCodec};
///
/// let codec = TextCodec;
/// assert_eq!(codec.encode_int(30), b"30".to_vec());
/// assert_eq!(codec.decode_int(b"-7").unwrap(), -7);
/// assert!(codec.decode_int(b"7.5").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCodec;

fn parse<T>(kind: Kind, data: &[u8]) -> Result<T, DecodeError>
where
    T: FromStr,
    T::Err: Display,
{
    let text = std::str::from_utf8(data).map_err(|err| DecodeError::Malformed {
        kind,
        detail: err.to_string(),
    })?;
    text.parse().map_err(|err: T::Err| DecodeError::Malformed {
        kind,
        detail: err.to_string(),
    })
}

impl ValueCodec for TextCodec {
    fn codec_id(&self) -> &'static str {
        "text"
    }

    fn encode_int(&self, value: i64) -> Vec<u8> {
        value.to_string().into_bytes()
    }

    fn decode_int(&self, data: &[u8]) -> Result<i64, DecodeError> {
        parse(Kind::Int, data)
    }

    fn encode_uint(&self, value: u64) -> Vec<u8> {
        value.to_string().into_bytes()
    }

    fn decode_uint(&self, data: &[u8]) -> Result<u64, DecodeError> {
        parse(Kind::Uint, data)
    }

    fn encode_float(&self, value: f64) -> Vec<u8> {
        value.to_string().into_bytes()
    }

    fn decode_float(&self, data: &[u8]) -> Result<f64, DecodeError> {
        parse(Kind::Float, data)
    }

    fn encode_bool(&self, value: bool) -> Vec<u8> {
        if value {
            b"true".to_vec()
        } else {
            b"false".to_vec()
        }
    }

    fn decode_bool(&self, data: &[u8]) -> Result<bool, DecodeError> {
        match data {
            b"true" => Ok(true),
            b"false" => Ok(false),
            other => Err(DecodeError::Malformed {
                kind: Kind::Bool,
                detail: format!("expected `true` or `false`, got {} bytes", other.len()),
            }),
        }
    }

    fn encode_string(&self, value: &str) -> Vec<u8> {
        value.as_bytes().to_vec()
    }

    fn decode_string(&self, data: &[u8]) -> Result<String, DecodeError> {
        Ok(String::from_utf8_lossy(data).into_owned())
    }
}
