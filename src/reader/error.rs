use core::fmt;
use thiserror::Error;

#[doc = r#"
A set of errors that can occur while decoding bytes into the midi representation
"#]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Decoding {stage} at position {position}, {kind}")]
pub struct ReaderError {
    position: usize,
    stage: DecodeStage,
    pub(crate) kind: ReaderErrorKind,
}

/// The part of the decode that produced a [`ReaderError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeStage {
    /// Reading the `MThd` chunk
    #[default]
    Header,
    /// Finding the byte range of a track
    Locate {
        /// zero-based track index
        track: usize,
    },
    /// Walking the events of a track
    Events {
        /// zero-based track index
        track: usize,
    },
}

impl fmt::Display for DecodeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header => write!(f, "header"),
            Self::Locate { track } => write!(f, "track {track} (locating)"),
            Self::Events { track } => write!(f, "track {track} (events)"),
        }
    }
}

/// A kind of error that a reader can produce
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReaderErrorKind {
    /// Fewer bytes remain than a read requires.
    #[error("Unexpected end of input")]
    UnexpectedEof,
    /// Fewer than 8 bytes remain where a chunk header should start.
    #[error("Truncated chunk header")]
    TruncatedChunkHeader,
    /// The `MThd` chunk is missing or malformed.
    #[error("Invalid header: {0}")]
    InvalidHeader(#[from] HeaderError),
    /// The file holds fewer `MTrk` chunks than the requested index needs.
    #[error("Track {index} not found ({found} tracks present)")]
    TrackNotFound {
        /// the requested index
        index: usize,
        /// how many tracks the file actually holds
        found: usize,
    },
    /// No `FF 2F 00` follows the `MTrk` tag before the end of the input.
    #[error("Track has no end-of-track marker")]
    UnterminatedTrack,
    /// The track's byte range ran out before the end-of-track event was decoded.
    #[error("Track ended without an end-of-track event")]
    MissingEndOfTrack,
    /// A variable-length quantity did not terminate or overflowed 32 bits.
    #[error("Malformed variable-length quantity")]
    MalformedVarint,
    /// A data byte appeared where a status byte was needed and no status is running.
    #[error("Data byte without running status")]
    NoRunningStatus,
    /// A tempo meta event of zero microseconds per quarter note.
    #[error("Tempo of zero microseconds per quarter note")]
    InvalidTempo,
    /// A system common or real-time status byte, which has no meaning inside a track.
    #[error("Unexpected status byte {0:#04X}")]
    UnexpectedStatus(u8),
    /// A data byte with the leading bit set.
    #[error("Invalid data byte {0:#04X}")]
    InvalidDataByte(u8),
    /// A recognized meta event with a malformed payload.
    #[error("Meta event: {0}")]
    Meta(#[from] MetaError),
    /// A malformed SMPTE field.
    #[error("SMPTE: {0}")]
    Smpte(#[from] SmpteError),
}

/// Problems with the `MThd` chunk
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeaderError {
    /// The first chunk is not tagged `MThd`.
    #[error("Expected MThd, found {0:?}")]
    WrongTag([u8; 4]),
    /// The header payload is shorter than the 6 bytes it must hold.
    #[error("Header length {0} is shorter than 6")]
    Length(u32),
    /// The format is not 0, 1 or 2.
    #[error("Unknown format {0}")]
    UnknownFormat(u16),
    /// The division uses an SMPTE frame rate that does not exist.
    #[error("Division: {0}")]
    Smpte(#[from] SmpteError),
}

/// Problems with the payload of a recognized meta event
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetaError {
    /// The payload length does not match what the meta type requires.
    #[error("Meta type {kind:#04X} expects {expected} bytes, found {found}")]
    Length {
        /// meta sub-type
        kind: u8,
        /// required payload length
        expected: usize,
        /// declared payload length
        found: usize,
    },
}

/// Problems with SMPTE timing fields
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SmpteError {
    /// The header division names a frame rate other than -24, -25, -29 or -30.
    #[error("Invalid frame rate in header: {0}")]
    HeaderFrameTime(i8),
    /// An SMPTE offset payload must be 5 bytes.
    #[error("Offset length {0}, expected 5")]
    Length(usize),
    /// The frame type bits of an offset are out of range.
    #[error("Invalid frame type {0}")]
    TrackFrame(u8),
    /// Hours above 23
    #[error("Invalid hour {0}")]
    HourOffset(u8),
    /// Minutes above 59
    #[error("Invalid minute {0}")]
    MinuteOffset(u8),
    /// Seconds above 59
    #[error("Invalid second {0}")]
    SecondOffset(u8),
    /// Subframes above 99
    #[error("Invalid subframe {0}")]
    Subframe(u8),
}

impl ReaderError {
    /// Create a reader error from a position and kind
    pub const fn new(position: usize, kind: ReaderErrorKind) -> Self {
        Self {
            position,
            stage: DecodeStage::Header,
            kind,
        }
    }

    /// Attach the decode stage to this error.
    pub const fn in_stage(mut self, stage: DecodeStage) -> Self {
        self.stage = stage;
        self
    }

    /// Create a new unexpected end of input error
    pub const fn eof(position: usize) -> Self {
        Self::new(position, ReaderErrorKind::UnexpectedEof)
    }

    /// True if the input ended before a read could be satisfied
    pub const fn is_eof(&self) -> bool {
        matches!(
            self.kind,
            ReaderErrorKind::UnexpectedEof | ReaderErrorKind::TruncatedChunkHeader
        )
    }

    /// Returns the error kind of the reader.
    pub fn error_kind(&self) -> &ReaderErrorKind {
        &self.kind
    }

    /// Returns the absolute byte offset where the error occurred.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the stage of the decode that failed.
    pub fn stage(&self) -> DecodeStage {
        self.stage
    }
}

/// The Read Result type (see [`ReaderError`])
pub type ReadResult<T> = Result<T, ReaderError>;

/// Errors from [`MidiFile::read_from`](crate::MidiFile::read_from)
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be read
    #[error("Reading source: {0}")]
    Io(#[from] std::io::Error),
    /// The bytes could not be decoded
    #[error(transparent)]
    Decode(#[from] ReaderError),
}
