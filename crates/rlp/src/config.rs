//! Decoder configuration.

use serde::{Deserialize, Serialize};

/// Default bound on list nesting accepted by the decoder.
///
/// Each level costs a `decode_one`/`decode_list` frame pair; 128 levels stay
/// far below a 2 MiB thread stack even in unoptimized builds.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Limits applied while decoding untrusted input.
///
/// Deserializes from a host application's config with every field optional:
///
/// ```
/// let config: rlp_tree::DecoderConfig = serde_json::from_str("{}").unwrap();
/// assert_eq!(config.max_depth, rlp_tree::DEFAULT_MAX_DEPTH);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Deepest list nesting accepted. A list nested inside `max_depth` other
    /// lists is rejected with [`crate::RlpError::DepthExceeded`].
    pub max_depth: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DecoderConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
