//! Recursive Length Prefix (RLP) serialization.
//!
//! RLP maps a tree whose leaves are byte strings and whose inner nodes are
//! ordered lists onto a single canonical byte sequence. Any two conforming
//! implementations agree on that sequence bit-for-bit, and the decoder here
//! rejects every alternative (non-minimal) encoding of the same value.
//!
//! # Example
//!
//! ```
//! use rlp_tree::{decode, encode, RlpTree};
//!
//! let tree = RlpTree::list([RlpTree::from("cat"), RlpTree::from("dog")]);
//! let bytes = encode(&tree);
//! assert_eq!(bytes, [0xc8, 0x83, b'c', b'a', b't', 0x83, b'd', b'o', b'g']);
//! assert_eq!(decode(&bytes).unwrap(), tree);
//! ```
//!
//! Decoding recurses once per level of list nesting. [`DecoderConfig`] bounds
//! that depth for untrusted input.

mod config;
mod decoder;
mod encoder;
mod error;
pub mod length;
mod tree;

pub use config::{DecoderConfig, DEFAULT_MAX_DEPTH};
pub use decoder::RlpDecoder;
pub use encoder::RlpEncoder;
pub use error::RlpError;
pub use length::{EMPTY_LIST_CODE, EMPTY_STRING_CODE};
pub use tree::RlpTree;

/// Encodes a tree into its canonical RLP byte sequence. Never fails.
pub fn encode(tree: &RlpTree) -> Vec<u8> {
    RlpEncoder::new().encode(tree)
}

/// Decodes a buffer that holds exactly one RLP item, with default limits.
pub fn decode(input: &[u8]) -> Result<RlpTree, RlpError> {
    RlpDecoder::new().decode(input)
}

/// Decodes a buffer that holds exactly one RLP item, with custom limits.
pub fn decode_with_config(input: &[u8], config: DecoderConfig) -> Result<RlpTree, RlpError> {
    RlpDecoder::with_config(config).decode(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_roundtrip_matrix() {
        let cases = vec![
            RlpTree::default(),
            RlpTree::empty_list(),
            RlpTree::bytes(vec![0]),
            RlpTree::bytes(vec![0x7f]),
            RlpTree::bytes(vec![0x80]),
            RlpTree::from("dog"),
            RlpTree::bytes(vec![0x42; 56]),
            RlpTree::bytes(vec![0x42; 1024]),
            RlpTree::list([RlpTree::empty_list(), RlpTree::default()]),
            RlpTree::list([
                RlpTree::empty_list(),
                RlpTree::list([RlpTree::empty_list()]),
                RlpTree::list([
                    RlpTree::empty_list(),
                    RlpTree::list([RlpTree::empty_list()]),
                ]),
            ]),
        ];
        for case in cases {
            let bin = encode(&case);
            assert_eq!(bin.len(), case.encoded_len());
            let back = decode(&bin).expect("decode rlp");
            assert_eq!(back, case);
        }
    }

    #[test]
    fn decode_with_config_applies_limits() {
        let nested = encode(&RlpTree::list([RlpTree::list([RlpTree::empty_list()])]));
        assert!(decode_with_config(&nested, DecoderConfig::default()).is_ok());
        assert_eq!(
            decode_with_config(&nested, DecoderConfig::default().with_max_depth(1)),
            Err(RlpError::DepthExceeded { max_depth: 1 })
        );
    }
}
