//! Value codec trait definitions.

use rowmap_core::error::DecodeError;
use rowmap_core::value::{Kind, Value};

/// Scalar value codec.
///
/// Every scalar passing between record fields and column bytes goes
/// through the codec. This is a seam: a deployment whose existing data
/// uses a different encoding (text-based integers, say) injects its own
/// implementation and the mapper never notices.
///
/// # Thread Safety
///
/// Codecs must be `Send + Sync` to allow concurrent encoding/decoding
/// from multiple threads.
///
/// # Codec Identity
///
/// Each codec has a unique identifier. It names the encoding in logs and
/// lets configuration refer to a codec by name via [`get_codec`](crate::get_codec).
pub trait ValueCodec: Send + Sync {
    /// Unique codec identifier.
    fn codec_id(&self) -> &'static str;

    /// Encode a signed 64-bit integer.
    fn encode_int(&self, value: i64) -> Vec<u8>;

    /// Decode a signed 64-bit integer.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the bytes do not hold a complete value.
    fn decode_int(&self, data: &[u8]) -> Result<i64, DecodeError>;

    /// Encode an unsigned 64-bit integer.
    fn encode_uint(&self, value: u64) -> Vec<u8>;

    /// Decode an unsigned 64-bit integer.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the bytes do not hold a complete value.
    fn decode_uint(&self, data: &[u8]) -> Result<u64, DecodeError>;

    /// Encode a 64-bit float.
    fn encode_float(&self, value: f64) -> Vec<u8>;

    /// Decode a 64-bit float.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the bytes do not hold a complete value.
    fn decode_float(&self, data: &[u8]) -> Result<f64, DecodeError>;

    /// Encode a boolean.
    fn encode_bool(&self, value: bool) -> Vec<u8>;

    /// Decode a boolean.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the bytes are not a valid boolean
    /// encoding.
    fn decode_bool(&self, data: &[u8]) -> Result<bool, DecodeError>;

    /// Encode a string.
    fn encode_string(&self, value: &str) -> Vec<u8>;

    /// Decode a string.
    ///
    /// # Errors
    ///
    /// Implementations may treat string decoding as total and never fail;
    /// the `Result` keeps the trait uniform across kinds.
    fn decode_string(&self, data: &[u8]) -> Result<String, DecodeError>;

    /// Encode a scalar value, dispatching on its variant.
    fn encode(&self, value: &Value) -> Vec<u8> {
        match value {
            Value::Int(n) => self.encode_int(*n),
            Value::Uint(n) => self.encode_uint(*n),
            Value::Float(n) => self.encode_float(*n),
            Value::Bool(b) => self.encode_bool(*b),
            Value::String(s) => self.encode_string(s),
        }
    }

    /// Decode bytes into the given kind, dispatching on the discriminator.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the bytes cannot be interpreted as the
    /// requested kind.
    fn decode(&self, kind: Kind, data: &[u8]) -> Result<Value, DecodeError> {
        match kind {
            Kind::Int => self.decode_int(data).map(Value::Int),
            Kind::Uint => self.decode_uint(data).map(Value::Uint),
            Kind::Float => self.decode_float(data).map(Value::Float),
            Kind::Bool => self.decode_bool(data).map(Value::Bool),
            Kind::String => self.decode_string(data).map(Value::String),
        }
    }
}
