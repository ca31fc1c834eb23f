//! [`RlpTree`] — the value model RLP serializes.

use crate::length::prefix_len;

/// A node of an RLP tree: either a byte string or an ordered list of nodes.
///
/// Nodes own their payloads and children exclusively, so a tree is always
/// acyclic and structurally comparable with `==`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RlpTree {
    /// A byte string, possibly empty.
    Bytes(Vec<u8>),
    /// An ordered list of zero or more child nodes.
    List(Vec<RlpTree>),
}

impl Default for RlpTree {
    fn default() -> Self {
        RlpTree::Bytes(Vec::new())
    }
}

impl RlpTree {
    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        RlpTree::Bytes(data.into())
    }

    pub fn list(children: impl IntoIterator<Item = RlpTree>) -> Self {
        RlpTree::List(children.into_iter().collect())
    }

    pub fn empty_list() -> Self {
        RlpTree::List(Vec::new())
    }

    pub fn is_bytes(&self) -> bool {
        matches!(self, RlpTree::Bytes(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, RlpTree::List(_))
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            RlpTree::Bytes(data) => Some(data),
            RlpTree::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[RlpTree]> {
        match self {
            RlpTree::Bytes(_) => None,
            RlpTree::List(children) => Some(children),
        }
    }

    /// Views a byte-string node as UTF-8 text.
    ///
    /// Returns `None` for lists and for payloads that are not valid UTF-8.
    pub fn as_utf8(&self) -> Option<&str> {
        self.as_bytes().and_then(|b| std::str::from_utf8(b).ok())
    }

    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            RlpTree::Bytes(data) => Some(data),
            RlpTree::List(_) => None,
        }
    }

    pub fn into_list(self) -> Option<Vec<RlpTree>> {
        match self {
            RlpTree::Bytes(_) => None,
            RlpTree::List(children) => Some(children),
        }
    }

    /// Length of the payload this node's prefix describes.
    ///
    /// For a byte string that is its data length, for a list the sum of the
    /// children's full encoded lengths.
    pub fn payload_len(&self) -> usize {
        match self {
            RlpTree::Bytes(data) => data.len(),
            RlpTree::List(children) => children.iter().map(RlpTree::encoded_len).sum(),
        }
    }

    /// Exact number of bytes [`crate::encode`] produces for this node,
    /// computed without allocating.
    pub fn encoded_len(&self) -> usize {
        match self {
            RlpTree::Bytes(data) if data.len() == 1 && data[0] < 0x80 => 1,
            _ => {
                let payload = self.payload_len();
                prefix_len(payload) + payload
            }
        }
    }
}

impl From<Vec<u8>> for RlpTree {
    fn from(data: Vec<u8>) -> Self {
        RlpTree::Bytes(data)
    }
}

impl From<&[u8]> for RlpTree {
    fn from(data: &[u8]) -> Self {
        RlpTree::Bytes(data.to_vec())
    }
}

impl From<&str> for RlpTree {
    fn from(s: &str) -> Self {
        RlpTree::Bytes(s.as_bytes().to_vec())
    }
}

impl From<Vec<RlpTree>> for RlpTree {
    fn from(children: Vec<RlpTree>) -> Self {
        RlpTree::List(children)
    }
}
