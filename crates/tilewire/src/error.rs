//! Unified error type for the Tilewire facade.

use tilewire_protocol::CodecError;

/// Top-level error returned by the facade's helpers.
///
/// The `#[from]` attributes let `?` lift a codec error or a failed
/// blocking task straight into this type.
#[derive(Debug, thiserror::Error)]
pub enum TilewireError {
    /// The bytes could not be decoded into a map.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The blocking task running the codec panicked or was cancelled.
    #[error("codec task failed: {0}")]
    Offload(#[from] tokio::task::JoinError),
}

impl TilewireError {
    /// Returns the codec error, if that's what this is.
    pub fn as_codec(&self) -> Option<&CodecError> {
        match self {
            Self::Codec(e) => Some(e),
            Self::Offload(_) => None,
        }
    }
}
