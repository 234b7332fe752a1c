use super::{CHUNK_HEADER_LEN, ChunkHeader, Division, FormatType, Timing};
use crate::reader::{HeaderError, ReadResult, Reader, ReaderError};

/// Minimum payload of an `MThd` chunk: format, track count and division.
const HEADER_PAYLOAD_LEN: u32 = 6;

/// Offset of the first byte past the header fields, whatever length the
/// `MThd` chunk declares.
pub(crate) const HEADER_FIELDS_END: usize = CHUNK_HEADER_LEN + HEADER_PAYLOAD_LEN as usize;

#[doc = r#"
The contents of the `MThd` chunk
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MidiFileHeader {
    format: FormatType,
    num_tracks: u16,
    division: Division,
}

impl MidiFileHeader {
    /// Read and validate the header chunk at the reader's position.
    ///
    /// A payload longer than 6 bytes is accepted; the extra bytes are skipped.
    pub fn read(reader: &mut Reader<'_>) -> ReadResult<Self> {
        let chunk_start = reader.buffer_position();
        let chunk = ChunkHeader::read(reader)?;
        if !chunk.is_header() {
            return Err(ReaderError::new(
                chunk_start,
                HeaderError::WrongTag(chunk.tag()).into(),
            ));
        }
        if chunk.declared_length() < HEADER_PAYLOAD_LEN {
            return Err(ReaderError::new(
                chunk_start + 4,
                HeaderError::Length(chunk.declared_length()).into(),
            ));
        }
        let payload = chunk.payload_range(reader.buffer_position());

        let format_at = reader.buffer_position();
        let raw_format = reader.read_u16_be()?;
        let format = FormatType::try_from(raw_format).map_err(|_| {
            ReaderError::new(format_at, HeaderError::UnknownFormat(raw_format).into())
        })?;

        let num_tracks = reader.read_u16_be()?;
        if format == FormatType::SingleMultiChannel && num_tracks != 1 {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                declared = num_tracks,
                "format 0 file declares a track count other than 1; decoding track 0 only"
            );
        }

        let division_at = reader.buffer_position();
        let division = Division::from_raw(reader.read_u16_be()?)
            .map_err(|e| ReaderError::new(division_at, HeaderError::Smpte(e).into()))?;

        reader.seek(payload.end);

        Ok(Self {
            format,
            num_tracks,
            division,
        })
    }

    /// The file format
    pub const fn format_type(&self) -> FormatType {
        self.format
    }

    /// The number of tracks the header declares
    pub const fn num_tracks(&self) -> u16 {
        self.num_tracks
    }

    /// The number of tracks to decode: always 1 for format 0, otherwise the
    /// declared count
    pub const fn track_count(&self) -> u16 {
        match self.format {
            FormatType::SingleMultiChannel => 1,
            _ => self.num_tracks,
        }
    }

    /// The raw and decoded division
    pub const fn division(&self) -> &Division {
        &self.division
    }

    /// Get the timing props
    pub const fn timing(&self) -> Timing {
        self.division.timing()
    }
}
