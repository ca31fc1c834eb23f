//! Auto-growing binary buffer writer.

/// A binary writer that appends to an internal growable buffer.
///
/// `flush` hands the written bytes to the caller and leaves the writer empty,
/// so a single writer can be reused across many encode calls.
#[derive(Debug, Default, Clone)]
pub struct Writer {
    uint8: Vec<u8>,
}

impl Writer {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self { uint8: Vec::new() }
    }

    /// Creates an empty writer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            uint8: Vec::with_capacity(capacity),
        }
    }

    /// Discards anything written so far.
    pub fn reset(&mut self) {
        self.uint8.clear();
    }

    /// Number of bytes written since the last reset/flush.
    pub fn len(&self) -> usize {
        self.uint8.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uint8.is_empty()
    }

    /// Makes sure at least `additional` more bytes fit without reallocating.
    pub fn ensure_capacity(&mut self, additional: usize) {
        self.uint8.reserve(additional);
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.uint8.push(val);
    }

    /// Writes a raw byte slice.
    #[inline]
    pub fn buf(&mut self, data: &[u8]) {
        self.uint8.extend_from_slice(data);
    }

    /// Returns the written bytes and resets the writer.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.uint8)
    }
}
