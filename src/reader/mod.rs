#![doc = r#"
Contains the [`Reader`] cursor and the errors it produces

# Overview

A [`Reader`] is a bounded, seekable cursor over an in-memory byte slice.
Every read either returns exactly what was asked for, or fails with
[`ReaderErrorKind::UnexpectedEof`] and leaves the position untouched.

Readers may be narrowed to a window of a larger input with
[`Reader::window`]. Positions reported by a windowed reader, and by any
errors it produces, stay absolute offsets into the original input.
"#]

mod error;
pub use error::*;

pub mod varlen;

/// A bounded cursor over a byte slice
#[derive(Debug, Clone)]
pub struct Reader<'slc> {
    data: &'slc [u8],
    /// absolute offset of `data[0]` in the original input
    offset: usize,
    position: usize,
}

impl<'slc> Reader<'slc> {
    /// Create a reader positioned at the start of `data`
    pub const fn from_byte_slice(data: &'slc [u8]) -> Self {
        Self {
            data,
            offset: 0,
            position: 0,
        }
    }

    /// A reader over `start..end` of this reader's bytes, in absolute positions.
    ///
    /// The range is clamped to the bytes this reader can see.
    pub fn window(&self, start: usize, end: usize) -> Reader<'slc> {
        let len = self.data.len();
        let lo = start.saturating_sub(self.offset).min(len);
        let hi = end.saturating_sub(self.offset).clamp(lo, len);
        Reader {
            data: &self.data[lo..hi],
            offset: self.offset + lo,
            position: 0,
        }
    }

    /// The absolute offset of the next byte to be read.
    #[inline]
    pub const fn buffer_position(&self) -> usize {
        self.offset + self.position
    }

    /// The absolute offset one past the last readable byte.
    #[inline]
    pub const fn end_position(&self) -> usize {
        self.offset + self.data.len()
    }

    /// Move to an absolute offset.
    ///
    /// Seeking past the end is allowed; the next read fails.
    pub fn seek(&mut self, position: usize) {
        self.position = position.saturating_sub(self.offset);
    }

    /// Bytes left before the end.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// True once every byte has been consumed
    #[inline]
    pub const fn is_eof(&self) -> bool {
        self.remaining() == 0
    }

    /// The bytes between the current position and the end.
    pub fn rest(&self) -> &'slc [u8] {
        let start = self.position.min(self.data.len());
        &self.data[start..]
    }

    /// Read exactly `len` bytes.
    pub fn read_exact(&mut self, len: usize) -> ReadResult<&'slc [u8]> {
        if self.remaining() < len {
            return Err(ReaderError::eof(self.buffer_position()));
        }
        let bytes = &self.data[self.position..self.position + len];
        self.position += len;
        Ok(bytes)
    }

    /// Read exactly `N` bytes into an array.
    pub fn read_exact_size<const N: usize>(&mut self) -> ReadResult<[u8; N]> {
        let mut out = [0; N];
        out.copy_from_slice(self.read_exact(N)?);
        Ok(out)
    }

    /// Read one byte.
    pub fn read_u8(&mut self) -> ReadResult<u8> {
        let byte = self.peek_u8()?;
        self.position += 1;
        Ok(byte)
    }

    /// Look at the next byte without consuming it.
    pub fn peek_u8(&self) -> ReadResult<u8> {
        self.data
            .get(self.position)
            .copied()
            .ok_or_else(|| ReaderError::eof(self.buffer_position()))
    }

    /// Read a big-endian `u16`.
    pub fn read_u16_be(&mut self) -> ReadResult<u16> {
        self.read_exact_size().map(u16::from_be_bytes)
    }

    /// Read a big-endian `u32`.
    pub fn read_u32_be(&mut self) -> ReadResult<u32> {
        self.read_exact_size().map(u32::from_be_bytes)
    }

    /// Read a variable-length quantity. See [`varlen`].
    pub fn read_varlen(&mut self) -> ReadResult<u32> {
        varlen::read(self)
    }

    /// Build an error of `kind` at the current position.
    pub(crate) fn error(&self, kind: impl Into<ReaderErrorKind>) -> ReaderError {
        ReaderError::new(self.buffer_position(), kind.into())
    }
}
