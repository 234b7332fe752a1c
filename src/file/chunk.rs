#![doc = r#"
Chunk headers

# Overview

MIDI files are organized into chunks, each identified by a 4-character ASCII
type identifier followed by a 32-bit big-endian length and then the chunk
data. Two chunk types are understood here:

- `MThd`, the header chunk. It must come first and holds the format, the
  number of tracks and the division.
- `MTrk`, a track chunk holding a stream of delta-timed events.

```text
[Header Chunk: "MThd" 00 00 00 06 ffff nnnn dddd]
[Track Chunk 1: "MTrk" <length> <events>]
...
[Track Chunk N: "MTrk" <length> <events>]
```

The length of a track chunk is only advisory here; see
[`TrackTable`](super::TrackTable).
"#]

use core::ops::Range;

use crate::reader::{ReadResult, Reader, ReaderError, ReaderErrorKind};

/// Size of a chunk header: a 4 byte tag and a 4 byte length.
pub const CHUNK_HEADER_LEN: usize = 8;

/// The tag of the header chunk
pub const MTHD: [u8; 4] = *b"MThd";

/// The tag of a track chunk
pub const MTRK: [u8; 4] = *b"MTrk";

/// The 8 bytes that open every chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    tag: [u8; 4],
    length: u32,
}

impl ChunkHeader {
    /// Read a chunk header.
    ///
    /// Fails with [`ReaderErrorKind::TruncatedChunkHeader`] if fewer than
    /// 8 bytes remain.
    pub fn read(reader: &mut Reader<'_>) -> ReadResult<Self> {
        if reader.remaining() < CHUNK_HEADER_LEN {
            return Err(ReaderError::new(
                reader.buffer_position(),
                ReaderErrorKind::TruncatedChunkHeader,
            ));
        }
        let tag = reader.read_exact_size()?;
        let length = reader.read_u32_be()?;
        Ok(Self { tag, length })
    }

    /// The raw 4 byte tag
    pub const fn tag(&self) -> [u8; 4] {
        self.tag
    }

    /// The length the chunk declares for its payload
    pub const fn declared_length(&self) -> u32 {
        self.length
    }

    /// True for `MThd`
    pub fn is_header(&self) -> bool {
        self.tag == MTHD
    }

    /// True for `MTrk`
    pub fn is_track(&self) -> bool {
        self.tag == MTRK
    }

    /// The nominal payload range, given the position just after this header.
    pub const fn payload_range(&self, start: usize) -> Range<usize> {
        start..start + self.length as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reads_tag_and_length() {
        let bytes = [b'M', b'T', b'r', b'k', 0x00, 0x00, 0x01, 0x02, 0xFF];
        let mut reader = Reader::from_byte_slice(&bytes);
        let header = ChunkHeader::read(&mut reader).unwrap();

        assert!(header.is_track());
        assert!(!header.is_header());
        assert_eq!(header.declared_length(), 0x0102);
        assert_eq!(
            header.payload_range(reader.buffer_position()),
            8..8 + 0x0102
        );
    }

    #[test]
    fn truncated_header() {
        let bytes = [b'M', b'T', b'h', b'd', 0x00, 0x00, 0x00];
        let mut reader = Reader::from_byte_slice(&bytes);
        let err = ChunkHeader::read(&mut reader).unwrap_err();

        assert_eq!(err.error_kind(), &ReaderErrorKind::TruncatedChunkHeader);
        assert_eq!(err.position(), 0);
        assert_eq!(reader.buffer_position(), 0);
    }
}
