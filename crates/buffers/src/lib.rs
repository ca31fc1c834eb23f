//! Binary buffer utilities for the RLP codec.
//!
//! # Overview
//!
//! - [`Reader`] - Reads binary data from a byte slice with cursor tracking
//! - [`Writer`] - Writes binary data to an auto-growing buffer
//!
//! Every read is bounds-checked: running past the end of the input yields
//! [`BufferError::EndOfBuffer`] instead of panicking, so decoders can surface
//! malformed input as an error.
//!
//! # Example
//!
//! ```
//! use rlp_buffers::{Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.u8(0x83);
//! writer.buf(b"dog");
//! let data = writer.flush();
//!
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.u8().unwrap(), 0x83);
//! assert_eq!(reader.buf(3).unwrap(), b"dog");
//! assert_eq!(reader.size(), 0);
//! ```

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::Writer;

use thiserror::Error;

/// Error type for buffer operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    #[error("end of buffer: wanted {wanted} bytes, {available} available")]
    EndOfBuffer { wanted: usize, available: usize },
}
