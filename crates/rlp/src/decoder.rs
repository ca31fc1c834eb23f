//! RLP decoder with strict canonical-form validation.

use rlp_buffers::Reader;
use tracing::{debug, trace};

use crate::length::{read_length, LIST_OFFSET, SHORT_LENGTH_LIMIT, STRING_OFFSET};
use crate::{DecoderConfig, RlpError, RlpTree};

/// Long byte-string prefixes are `0xb8..=0xbf`; subtracting this yields the
/// length-of-length.
const LONG_STRING_BASE: u8 = 0xb7;
/// Long list prefixes are `0xf8..=0xff`.
const LONG_LIST_BASE: u8 = 0xf7;

/// One parsed item and the input that follows it.
struct Decoded<'a> {
    tree: RlpTree,
    remainder: &'a [u8],
}

/// RLP decoder.
///
/// Accepts exactly one canonical item per call. Every non-minimal
/// representation (redundant prefix around a self-encoding byte, length field
/// with a leading zero, long form for a short payload) is rejected, so
/// re-encoding a decoded tree reproduces the input byte-for-byte.
#[derive(Debug, Clone, Default)]
pub struct RlpDecoder {
    config: DecoderConfig,
}

impl RlpDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Decodes a buffer holding exactly one RLP item.
    pub fn decode(&self, input: &[u8]) -> Result<RlpTree, RlpError> {
        let result = self.decode_one(input, 0).and_then(|decoded| {
            if decoded.remainder.is_empty() {
                Ok(decoded.tree)
            } else {
                Err(RlpError::TrailingBytes {
                    remaining: decoded.remainder.len(),
                })
            }
        });
        match &result {
            Ok(_) => trace!(target: "rlp", bytes = input.len(), "decoded rlp item"),
            Err(err) => debug!(target: "rlp", bytes = input.len(), %err, "rejected rlp input"),
        }
        result
    }

    /// Parses the item at the start of `input`. `depth` counts the lists
    /// enclosing it. Leftover bytes are handed back, not rejected.
    fn decode_one<'a>(&self, input: &'a [u8], depth: usize) -> Result<Decoded<'a>, RlpError> {
        let mut reader = Reader::new(input);
        let first = reader.u8().map_err(|_| RlpError::EmptyInput)?;
        let tree = match first {
            0x00..=0x7f => RlpTree::Bytes(vec![first]),
            0x80..=0xb7 => {
                let data = reader.buf((first - STRING_OFFSET) as usize)?;
                if let [b] = data {
                    if *b < 0x80 {
                        return Err(RlpError::NonCanonicalShortString);
                    }
                }
                RlpTree::Bytes(data.to_vec())
            }
            0xb8..=0xbf => {
                let field = reader.buf((first - LONG_STRING_BASE) as usize)?;
                let len = long_length(field)?;
                RlpTree::Bytes(reader.buf(len)?.to_vec())
            }
            0xc0..=0xf7 => {
                let payload = reader.buf((first - LIST_OFFSET) as usize)?;
                self.decode_list(payload, depth)?
            }
            0xf8..=0xff => {
                let field = reader.buf((first - LONG_LIST_BASE) as usize)?;
                if field.iter().all(|&b| b == 0) {
                    return Err(RlpError::EmptyListPayload);
                }
                let len = long_length(field)?;
                let payload = reader.buf(len)?;
                self.decode_list(payload, depth)?
            }
        };
        Ok(Decoded {
            tree,
            remainder: reader.rest(),
        })
    }

    fn decode_list(&self, mut payload: &[u8], depth: usize) -> Result<RlpTree, RlpError> {
        let depth = depth + 1;
        if depth > self.config.max_depth {
            return Err(RlpError::DepthExceeded {
                max_depth: self.config.max_depth,
            });
        }
        let mut children = Vec::new();
        while !payload.is_empty() {
            let decoded = self.decode_one(payload, depth)?;
            children.push(decoded.tree);
            payload = decoded.remainder;
        }
        Ok(RlpTree::List(children))
    }
}

/// Length from a long-form field; the long form is only valid for 56+ bytes.
fn long_length(field: &[u8]) -> Result<usize, RlpError> {
    let len = read_length(field)?;
    if len < SHORT_LENGTH_LIMIT {
        return Err(RlpError::NonCanonicalLength);
    }
    Ok(len)
}
