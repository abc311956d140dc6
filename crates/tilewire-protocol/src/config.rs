//! Codec configuration.

use serde::{Deserialize, Serialize};

use crate::schema::FORMAT_VERSION;

/// Options for [`BinaryCodec`](crate::BinaryCodec).
///
/// The defaults produce exactly the untagged stream that [`encode_map`]
/// and [`decode_map`] use, which is what the renderer and the backend
/// expect today. The version tag is an extension point for a future layout
/// change: both ends have to opt in together.
///
/// [`encode_map`]: crate::encode_map
/// [`decode_map`]: crate::decode_map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Leading format-version byte. `None` means no byte is written or
    /// expected.
    pub version_tag: Option<u8>,

    /// Accept (and ignore) bytes after the lowlight list.
    pub allow_trailing_bytes: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            version_tag: None,
            allow_trailing_bytes: false,
        }
    }
}

impl CodecConfig {
    /// Default settings plus a leading [`FORMAT_VERSION`] byte.
    pub fn tagged() -> Self {
        Self {
            version_tag: Some(FORMAT_VERSION),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_untagged_and_strict() {
        let config = CodecConfig::default();
        assert_eq!(config.version_tag, None);
        assert!(!config.allow_trailing_bytes);
    }

    #[test]
    fn test_tagged_uses_current_format_version() {
        assert_eq!(CodecConfig::tagged().version_tag, Some(FORMAT_VERSION));
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_config_missing_fields_take_defaults() {
        let config: CodecConfig = serde_json::from_str(r#"{"version_tag": 2}"#).unwrap();
        assert_eq!(config.version_tag, Some(2));
        assert!(!config.allow_trailing_bytes);
    }
}
