//! Length prefix codec shared by the encoder and decoder.
//!
//! A prefix is either a single byte `offset + len` (payloads shorter than
//! 56 bytes) or `offset + 55 + n` followed by the `n`-byte minimal big-endian
//! form of `len`.

use rlp_buffers::Writer;

use crate::RlpError;

/// Prefix byte of the empty byte string.
pub const EMPTY_STRING_CODE: u8 = 0x80;

/// Prefix byte of the empty list.
pub const EMPTY_LIST_CODE: u8 = 0xC0;

/// Offset added to byte-string lengths.
pub const STRING_OFFSET: u8 = EMPTY_STRING_CODE;

/// Offset added to list payload lengths.
pub const LIST_OFFSET: u8 = EMPTY_LIST_CODE;

/// Payloads at least this long use the long (length-of-length) form.
pub const SHORT_LENGTH_LIMIT: usize = 56;

const USIZE_BYTES: usize = std::mem::size_of::<usize>();

/// Number of bytes in the minimal big-endian representation of `len`.
///
/// Zero still takes one byte.
pub fn length_of_length(len: usize) -> usize {
    let significant = USIZE_BYTES - (len.leading_zeros() as usize / 8);
    significant.max(1)
}

/// Minimal big-endian bytes of `len`: no leading zero byte, at least one byte.
pub fn minimal_be_bytes(len: usize) -> Vec<u8> {
    let bytes = len.to_be_bytes();
    bytes[USIZE_BYTES - length_of_length(len)..].to_vec()
}

/// Number of bytes the prefix for a `len`-byte payload occupies.
pub fn prefix_len(len: usize) -> usize {
    if len < SHORT_LENGTH_LIMIT {
        1
    } else {
        1 + length_of_length(len)
    }
}

/// Writes the prefix for a `len`-byte payload of the category `offset`
/// ([`STRING_OFFSET`] or [`LIST_OFFSET`]).
pub fn write_length_prefix(writer: &mut Writer, len: usize, offset: u8) {
    if len < SHORT_LENGTH_LIMIT {
        writer.u8(offset + len as u8);
    } else {
        let len_bytes = minimal_be_bytes(len);
        writer.u8(offset + 55 + len_bytes.len() as u8);
        writer.buf(&len_bytes);
    }
}

/// Returns the prefix for a `len`-byte payload of the category `offset`.
pub fn encode_length_prefix(len: usize, offset: u8) -> Vec<u8> {
    let mut writer = Writer::with_capacity(prefix_len(len));
    write_length_prefix(&mut writer, len, offset);
    writer.flush()
}

/// Parses the big-endian length field of a long-form prefix.
///
/// A leading zero byte is non-canonical. A field wider than `usize` is
/// rejected as [`RlpError::LengthOverflow`].
pub fn read_length(field: &[u8]) -> Result<usize, RlpError> {
    match field.first() {
        None | Some(0) => return Err(RlpError::NonCanonicalLength),
        Some(_) => {}
    }
    if field.len() > USIZE_BYTES {
        return Err(RlpError::LengthOverflow { width: field.len() });
    }
    Ok(field
        .iter()
        .fold(0usize, |acc, &b| (acc << 8) | b as usize))
}
