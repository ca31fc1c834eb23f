//! RLP encoder.

use rlp_buffers::Writer;
use tracing::trace;

use crate::length::{prefix_len, write_length_prefix, LIST_OFFSET, STRING_OFFSET};
use crate::RlpTree;

/// RLP encoder.
///
/// Encoding runs in two linear passes. A post-order walk records the payload
/// length of every list in pre-order; a second walk then emits each header
/// straight from that table, so no subtree is measured twice and no child
/// is buffered separately.
pub struct RlpEncoder {
    pub writer: Writer,
    list_lens: Vec<usize>,
}

impl Default for RlpEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl RlpEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
            list_lens: Vec::new(),
        }
    }

    /// Encodes a tree and returns the encoded bytes.
    pub fn encode(&mut self, tree: &RlpTree) -> Vec<u8> {
        self.writer.reset();
        self.write_any(tree);
        let out = self.writer.flush();
        trace!(target: "rlp", bytes = out.len(), "encoded rlp tree");
        out
    }

    /// Appends the encoding of `tree` to the writer.
    pub fn write_any(&mut self, tree: &RlpTree) {
        self.list_lens.clear();
        let total = measure(tree, &mut self.list_lens);
        self.writer.ensure_capacity(total);
        let start = self.writer.len();
        let mut next_list = 0;
        self.write_node(tree, &mut next_list);
        debug_assert_eq!(self.writer.len() - start, total);
        debug_assert_eq!(next_list, self.list_lens.len());
    }

    /// Writes a byte string. A single byte below `0x80` is its own encoding.
    pub fn write_bytes(&mut self, data: &[u8]) {
        if let [b] = data {
            if *b < 0x80 {
                self.writer.u8(*b);
                return;
            }
        }
        write_length_prefix(&mut self.writer, data.len(), STRING_OFFSET);
        self.writer.buf(data);
    }

    fn write_node(&mut self, tree: &RlpTree, next_list: &mut usize) {
        match tree {
            RlpTree::Bytes(data) => self.write_bytes(data),
            RlpTree::List(children) => {
                let payload = self.list_lens[*next_list];
                *next_list += 1;
                write_length_prefix(&mut self.writer, payload, LIST_OFFSET);
                for child in children {
                    self.write_node(child, next_list);
                }
            }
        }
    }
}

/// Returns the encoded length of `tree`, pushing each list's payload length
/// onto `list_lens` in pre-order.
fn measure(tree: &RlpTree, list_lens: &mut Vec<usize>) -> usize {
    match tree {
        RlpTree::Bytes(data) if data.len() == 1 && data[0] < 0x80 => 1,
        RlpTree::Bytes(data) => prefix_len(data.len()) + data.len(),
        RlpTree::List(children) => {
            let slot = list_lens.len();
            list_lens.push(0);
            let payload: usize = children.iter().map(|c| measure(c, list_lens)).sum();
            list_lens[slot] = payload;
            prefix_len(payload) + payload
        }
    }
}
