//! Mapper configuration
//!
//! Collects the knobs a [`Mapper`](crate::Mapper) is built with: which
//! codec turns field values into cell bytes, and how many rows one scan
//! round-trip may request.

use std::fmt;
use std::sync::Arc;

use rowmap_codec::{BinaryCodec, ValueCodec};

/// Default scan batch cap, in rows per round-trip
///
/// Sized for roughly 64KB per page at ~1KB per row.
pub const DEFAULT_BATCH_SIZE: i32 = 1 << 6;

/// Configuration for a [`Mapper`](crate::Mapper)
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use rowmap_codec::TextCodec;
/// use rowmap_mapper::MapperConfig;
///
/// let config = MapperConfig::new()
///     .batch_size(128)
///     .codec(Arc::new(TextCodec));
/// ```
#[derive(Clone)]
pub struct MapperConfig {
    /// Maximum rows requested per scan round-trip; must be positive
    pub batch_size: i32,
    /// Codec every scalar encode/decode routes through
    pub codec: Arc<dyn ValueCodec>,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            codec: Arc::new(BinaryCodec),
        }
    }
}

impl MapperConfig {
    /// Create a configuration with the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scan batch cap
    pub fn batch_size(mut self, batch_size: i32) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set the value codec
    pub fn codec(mut self, codec: Arc<dyn ValueCodec>) -> Self {
        self.codec = codec;
        self
    }
}

impl fmt::Debug for MapperConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapperConfig")
            .field("batch_size", &self.batch_size)
            .field("codec", &self.codec.codec_id())
            .finish()
    }
}
