//! Error types for the map codec.
//!
//! Encoding never fails: oversized strings are truncated and oversized
//! collections are clamped. Every error below is therefore a *decode*
//! error, and every one is deterministic. Feeding the same bytes in again
//! fails the same way, so callers should report it rather than retry.

use std::fmt;

/// The kind of record being decoded when an error occurred.
///
/// Carried by [`CodecError::TruncatedInput`] so a log line tells you
/// which level of the tree ran out of bytes, not just that something did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    /// The map envelope header (`height`, `width`).
    Map,
    /// A tile header.
    Tile,
    /// A settlement header.
    Settlement,
    /// A vendor header.
    Vendor,
    /// A cargo record.
    Cargo,
    /// A vehicle record.
    Vehicle,
    /// A highlight/lowlight count or coordinate pair.
    Overlay,
    /// The optional leading format-version byte.
    VersionTag,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Map => "map",
            Self::Tile => "tile",
            Self::Settlement => "settlement",
            Self::Vendor => "vendor",
            Self::Cargo => "cargo",
            Self::Vehicle => "vehicle",
            Self::Overlay => "overlay",
            Self::VersionTag => "version tag",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while decoding a map stream.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The buffer ended before a header or a declared child count was
    /// satisfied.
    #[error("truncated input while decoding {entity}: needed {needed} bytes, {remaining} left")]
    TruncatedInput {
        entity: Entity,
        needed: usize,
        remaining: usize,
    },

    /// Declared grid dimensions disagree with the tiles actually present.
    #[error("malformed grid: expected {expected}, found {found}")]
    MalformedGrid { expected: String, found: String },

    /// Bytes remained after the lowlight list was read.
    #[error("{remaining} trailing bytes after map")]
    TrailingBytes { remaining: usize },

    /// A tagged stream started with the wrong format-version byte.
    #[error("format version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u8, found: u8 },

    /// The JSON map representation could not be read or written.
    #[cfg(feature = "json")]
    #[error("json map representation: {0}")]
    Json(#[from] serde_json::Error),
}

impl CodecError {
    /// Returns `true` for [`CodecError::TruncatedInput`].
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::TruncatedInput { .. })
    }

    /// The entity being decoded, if this is a truncation error.
    pub fn entity(&self) -> Option<Entity> {
        match self {
            Self::TruncatedInput { entity, .. } => Some(*entity),
            _ => None,
        }
    }
}
