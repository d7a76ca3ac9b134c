//! Fixed-width big-endian codec (the default).
//!
//! Numeric kinds occupy exactly 8 bytes, big-endian, so encoded values
//! sort and compare the way the store's raw-byte comparator expects.
//! Booleans are one byte, strings pass through untouched.

use byteorder::{BigEndian, ByteOrder};
use rowmap_core::error::DecodeError;
use rowmap_core::value::Kind;

use crate::traits::ValueCodec;

/// Width in bytes of every fixed-width numeric encoding
pub const FIXED_WIDTH: usize = 8;

/// Fixed-width big-endian codec.
///
/// Decoding a numeric kind reads the first [`FIXED_WIDTH`] bytes and fails
/// only when fewer are present; trailing bytes are ignored. A boolean cell
/// must be exactly one byte: `0x01` is true, anything else is false.
/// String decoding never fails; invalid UTF-8 is replaced rather than
/// rejected, since row data may predate this layer.
///
/// # Example
///
/// ```
/// use rowmap_codec::{BinaryCodec, ValueCodec};
///
/// let codec = BinaryCodec;
/// let encoded = codec.encode_int(30);
/// assert_eq!(encoded, vec![0, 0, 0, 0, 0, 0, 0, 30]);
/// assert_eq!(codec.decode_int(&encoded).unwrap(), 30);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryCodec;

fn fixed(kind: Kind, data: &[u8]) -> Result<&[u8], DecodeError> {
    if data.len() < FIXED_WIDTH {
        return Err(DecodeError::Truncated {
            kind,
            expected: FIXED_WIDTH,
            actual: data.len(),
        });
    }
    Ok(&data[..FIXED_WIDTH])
}

impl ValueCodec for BinaryCodec {
    fn codec_id(&self) -> &'static str {
        "binary-be"
    }

    fn encode_int(&self, value: i64) -> Vec<u8> {
        let mut buf = [0u8; FIXED_WIDTH];
        BigEndian::write_i64(&mut buf, value);
        buf.to_vec()
    }

    fn decode_int(&self, data: &[u8]) -> Result<i64, DecodeError> {
        Ok(BigEndian::read_i64(fixed(Kind::Int, data)?))
    }

    fn encode_uint(&self, value: u64) -> Vec<u8> {
        let mut buf = [0u8; FIXED_WIDTH];
        BigEndian::write_u64(&mut buf, value);
        buf.to_vec()
    }

    fn decode_uint(&self, data: &[u8]) -> Result<u64, DecodeError> {
        Ok(BigEndian::read_u64(fixed(Kind::Uint, data)?))
    }

    fn encode_float(&self, value: f64) -> Vec<u8> {
        let mut buf = [0u8; FIXED_WIDTH];
        BigEndian::write_f64(&mut buf, value);
        buf.to_vec()
    }

    fn decode_float(&self, data: &[u8]) -> Result<f64, DecodeError> {
        Ok(BigEndian::read_f64(fixed(Kind::Float, data)?))
    }

    fn encode_bool(&self, value: bool) -> Vec<u8> {
        vec![u8::from(value)]
    }

    fn decode_bool(&self, data: &[u8]) -> Result<bool, DecodeError> {
        if data.len() != 1 {
            return Err(DecodeError::InvalidBoolean { len: data.len() });
        }
        Ok(data[0] == 0x01)
    }

    fn encode_string(&self, value: &str) -> Vec<u8> {
        value.as_bytes().to_vec()
    }

    fn decode_string(&self, data: &[u8]) -> Result<String, DecodeError> {
        Ok(String::from_utf8_lossy(data).into_owned())
    }
}
