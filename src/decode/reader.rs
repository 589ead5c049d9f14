//! Bounds-checked field reading.

use crate::error::{Result, SpliceError};
use crate::source::ByteSource;

/// Cursor over a [`ByteSource`] that reads fixed-size fields and advances.
///
/// Every read is checked against the source length up front: a field that
/// would extend past end-of-data fails with [`SpliceError::Truncated`]
/// instead of coming back short. The reader carries no format knowledge;
/// it only moves bytes.
pub struct FieldReader<'a, S: ByteSource + ?Sized> {
    source: &'a S,
    offset: u64,
}

impl<'a, S: ByteSource + ?Sized> FieldReader<'a, S> {
    /// Create a reader positioned at the start of the source.
    pub fn new(source: &'a S) -> Self {
        Self { source, offset: 0 }
    }

    /// Current offset from the start of the source.
    pub fn position(&self) -> u64 {
        self.offset
    }

    /// Number of bytes between the cursor and end-of-data.
    pub fn remaining(&self) -> u64 {
        self.source.len().saturating_sub(self.offset)
    }

    /// Read exactly `len` bytes, advancing the cursor.
    ///
    /// `context` names the field being read and is carried into the error
    /// when the source runs out.
    ///
    /// # Errors
    ///
    /// Returns [`SpliceError::Truncated`] if fewer than `len` bytes remain.
    pub fn read(&mut self, len: usize, context: &'static str) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        let copied = self.source.read_at(self.offset, &mut buf);
        if copied < len {
            return Err(SpliceError::Truncated {
                context,
                offset: self.offset,
                needed: len,
                available: copied,
            });
        }
        self.offset += len as u64;
        Ok(buf)
    }

    /// Read a fixed-size field into an array, advancing the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`SpliceError::Truncated`] if fewer than `N` bytes remain.
    pub fn read_array<const N: usize>(&mut self, context: &'static str) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        let copied = self.source.read_at(self.offset, &mut buf);
        if copied < N {
            return Err(SpliceError::Truncated {
                context,
                offset: self.offset,
                needed: N,
                available: copied,
            });
        }
        self.offset += N as u64;
        Ok(buf)
    }

    /// Read a single byte, advancing the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`SpliceError::Truncated`] at end-of-data.
    pub fn read_u8(&mut self, context: &'static str) -> Result<u8> {
        Ok(self.read_array::<1>(context)?[0])
    }
}
