//! Codec trait and implementations for moving whole maps as bytes.
//!
//! Services that exchange maps don't care which representation is on the
//! wire, only that both ends pick the same one. [`MapCodec`] is that
//! seam: the renderer and the client hold a codec and call it, and the
//! HTTP layer uses [`MapCodec::content_type`] to label the body.
//!
//! - [`BinaryCodec`]: the compact fixed-width format. This is what the
//!   backend and the renderer speak.
//! - [`JsonCodec`]: the dictionary-shaped representation a backend builds
//!   before encoding. Handy for fixtures and for debugging a map by eye.

use crate::config::CodecConfig;
use crate::error::{CodecError, Entity};
use crate::map::{Map, decode_map_from, encode_map_into};
use crate::wire::{WireReader, WireWriter};

/// Converts a [`Map`] to bytes and back.
///
/// `Send + Sync + 'static` so one codec can be shared by every request
/// handler in a service.
pub trait MapCodec: Send + Sync + 'static {
    /// Serializes a map.
    ///
    /// # Errors
    /// [`BinaryCodec`] never fails. [`JsonCodec`] returns
    /// [`CodecError::Json`] if `serde_json` refuses the value.
    fn encode(&self, map: &Map) -> Result<Vec<u8>, CodecError>;

    /// Reconstructs a map, or fails without returning any partial state.
    ///
    /// # Errors
    /// Returns [`CodecError::TruncatedInput`] when the bytes end early and
    /// [`CodecError::MalformedGrid`] when dimensions and tiles disagree.
    fn decode(&self, data: &[u8]) -> Result<Map, CodecError>;

    /// MIME type for an HTTP body carrying this encoding.
    fn content_type(&self) -> &'static str;
}

// ---------------------------------------------------------------------------
// BinaryCodec
// ---------------------------------------------------------------------------

/// A [`MapCodec`] for the fixed-width binary format.
///
/// With the default [`CodecConfig`] the output is byte-identical to
/// [`encode_map`](crate::encode_map).
///
/// ```rust
/// use tilewire_protocol::{BinaryCodec, Map, MapCodec, Tile, TileGrid};
///
/// let grid = TileGrid::from_rows(vec![vec![Tile::with_terrain(5)]]).unwrap();
/// let map = Map::new(grid);
///
/// let codec = BinaryCodec::default();
/// let bytes = codec.encode(&map).unwrap();
/// assert_eq!(codec.decode(&bytes).unwrap(), map);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryCodec {
    config: CodecConfig,
}

impl BinaryCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }
}

impl MapCodec for BinaryCodec {
    fn encode(&self, map: &Map) -> Result<Vec<u8>, CodecError> {
        let mut w = WireWriter::new();
        if let Some(tag) = self.config.version_tag {
            w.put_u8(tag);
        }
        encode_map_into(&mut w, map);
        Ok(w.into_bytes())
    }

    fn decode(&self, data: &[u8]) -> Result<Map, CodecError> {
        let mut r = WireReader::new(data);
        if let Some(expected) = self.config.version_tag {
            let found = r.get_u8(Entity::VersionTag)?;
            if found != expected {
                return Err(CodecError::VersionMismatch { expected, found });
            }
        }
        let map = decode_map_from(&mut r)?;
        if !r.is_empty() {
            if !self.config.allow_trailing_bytes {
                return Err(CodecError::TrailingBytes {
                    remaining: r.remaining(),
                });
            }
            tracing::debug!(remaining = r.remaining(), "ignoring trailing bytes after map");
        }
        Ok(map)
    }

    fn content_type(&self) -> &'static str {
        "application/octet-stream"
    }
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`MapCodec`] for the JSON dictionary representation (via `serde_json`).
///
/// Integer fields are read leniently: out-of-range values wrap into the
/// field's width just as they would in the binary encoder. JSON has no
/// infinity or NaN, so non-finite floats are written as `0.0` (the
/// format's "not applicable") and a `null` float reads back as `0.0`.
/// Behind the `json` feature (enabled by default).
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl MapCodec for JsonCodec {
    fn encode(&self, map: &Map) -> Result<Vec<u8>, CodecError> {
        Ok(serde_json::to_vec(map)?)
    }

    fn decode(&self, data: &[u8]) -> Result<Map, CodecError> {
        Ok(serde_json::from_slice(data)?)
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }
}
