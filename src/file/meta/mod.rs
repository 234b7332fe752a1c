#![doc = r#"
Meta events (`FF type length data`)

Meta events carry information that is not sent to an instrument: names,
tempo, signatures and the end-of-track marker. Every meta event names its
own payload length, so types this crate does not know are kept as raw bytes
in [`MetaMessage::Unknown`] instead of failing the decode.

| type | event | payload |
|------|-------|---------|
| `00` | sequence number | kept raw |
| `01`-`07` | text, copyright, track name, instrument, lyric, marker, cue point | text |
| `20` | channel prefix | 1 byte |
| `2F` | end of track | empty |
| `51` | tempo | 3 byte big-endian microseconds per quarter note |
| `54` | SMPTE offset | 5 bytes |
| `58` | time signature | 4 bytes |
| `59` | key signature | 2 bytes |
| `7F` | sequencer specific | kept raw |
"#]

mod smpte_offset;
pub use smpte_offset::*;

mod signature;
pub use signature::*;

use alloc::{string::String, vec::Vec};

use crate::reader::{MetaError, ReadResult, Reader, ReaderError, ReaderErrorKind};

/// The status byte that opens every meta event
pub const META_STATUS: u8 = 0xFF;

/// Meta type of the end-of-track event
pub const END_OF_TRACK: u8 = 0x2F;

/// A decoded meta event
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetaMessage {
    /// `00`, kept as the raw payload
    SequenceNumber(Vec<u8>),
    /// `01`
    Text(Text),
    /// `02`
    Copyright(Text),
    /// `03`, the sequence or track name
    TrackName(Text),
    /// `04`
    InstrumentName(Text),
    /// `05`
    Lyric(Text),
    /// `06`
    Marker(Text),
    /// `07`
    CuePoint(Text),
    /// `20`, the channel that following meta and sysex events refer to
    ChannelPrefix(u8),
    /// `2F`
    EndOfTrack,
    /// `51`
    Tempo(Tempo),
    /// `54`
    SmpteOffset(SmpteOffset),
    /// `58`
    TimeSignature(TimeSignature),
    /// `59`
    KeySignature(KeySignature),
    /// `7F`, kept as the raw payload
    SequencerSpecific(Vec<u8>),
    /// Any other type, kept as the raw payload
    Unknown {
        /// the meta type byte
        kind: u8,
        /// the payload
        data: Vec<u8>,
    },
}

impl MetaMessage {
    /// Read a meta event whose `FF` status byte has already been consumed.
    pub fn read(reader: &mut Reader<'_>) -> ReadResult<Self> {
        let kind = reader.read_u8()?;
        let length = reader.read_varlen()? as usize;
        let payload_at = reader.buffer_position();
        let data = reader.read_exact(length)?;
        Self::decode(kind, data).map_err(|k| ReaderError::new(payload_at, k))
    }

    /// Interpret the payload of a meta event of type `kind`.
    pub fn decode(kind: u8, data: &[u8]) -> Result<Self, ReaderErrorKind> {
        let message = match kind {
            0x00 => Self::SequenceNumber(data.to_vec()),
            0x01 => Self::Text(Text::from_bytes(data)),
            0x02 => Self::Copyright(Text::from_bytes(data)),
            0x03 => Self::TrackName(Text::from_bytes(data)),
            0x04 => Self::InstrumentName(Text::from_bytes(data)),
            0x05 => Self::Lyric(Text::from_bytes(data)),
            0x06 => Self::Marker(Text::from_bytes(data)),
            0x07 => Self::CuePoint(Text::from_bytes(data)),
            0x20 => {
                let [channel] = fixed::<1>(kind, data)?;
                Self::ChannelPrefix(channel)
            }
            END_OF_TRACK => {
                fixed::<0>(kind, data)?;
                Self::EndOfTrack
            }
            0x51 => Self::Tempo(Tempo::from_bytes(fixed(kind, data)?)?),
            0x54 => Self::SmpteOffset(SmpteOffset::parse(data)?),
            0x58 => Self::TimeSignature(TimeSignature::from_bytes(fixed(kind, data)?)),
            0x59 => Self::KeySignature(KeySignature::from_bytes(fixed(kind, data)?)),
            0x7F => Self::SequencerSpecific(data.to_vec()),
            _ => {
                #[cfg(feature = "tracing")]
                tracing::trace!(kind, len = data.len(), "keeping unrecognized meta event");
                Self::Unknown {
                    kind,
                    data: data.to_vec(),
                }
            }
        };
        Ok(message)
    }

    /// The meta type byte
    pub const fn kind(&self) -> u8 {
        match self {
            Self::SequenceNumber(_) => 0x00,
            Self::Text(_) => 0x01,
            Self::Copyright(_) => 0x02,
            Self::TrackName(_) => 0x03,
            Self::InstrumentName(_) => 0x04,
            Self::Lyric(_) => 0x05,
            Self::Marker(_) => 0x06,
            Self::CuePoint(_) => 0x07,
            Self::ChannelPrefix(_) => 0x20,
            Self::EndOfTrack => END_OF_TRACK,
            Self::Tempo(_) => 0x51,
            Self::SmpteOffset(_) => 0x54,
            Self::TimeSignature(_) => 0x58,
            Self::KeySignature(_) => 0x59,
            Self::SequencerSpecific(_) => 0x7F,
            Self::Unknown { kind, .. } => *kind,
        }
    }

    /// True for the end-of-track marker
    pub const fn is_end_of_track(&self) -> bool {
        matches!(self, Self::EndOfTrack)
    }
}

fn fixed<const N: usize>(kind: u8, data: &[u8]) -> Result<[u8; N], MetaError> {
    data.try_into().map_err(|_| MetaError::Length {
        kind,
        expected: N,
        found: data.len(),
    })
}

#[doc = r#"
The payload of a text meta event

Text is decoded as UTF-8 when possible. Anything else is kept as raw bytes,
since names and lyrics in older files are frequently Latin-1 or Shift-JIS.
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Text {
    /// Valid UTF-8
    Utf8(String),
    /// Anything else
    Raw(Vec<u8>),
}

impl Text {
    /// Decode a text payload, falling back to raw bytes.
    pub fn from_bytes(data: &[u8]) -> Self {
        match core::str::from_utf8(data) {
            Ok(s) => Self::Utf8(String::from(s)),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_e, "text meta event is not UTF-8, keeping raw bytes");
                Self::Raw(data.to_vec())
            }
        }
    }

    /// The text, if it decoded as UTF-8
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Utf8(s) => Some(s),
            Self::Raw(_) => None,
        }
    }

    /// The bytes as stored in the file
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Utf8(s) => s.as_bytes(),
            Self::Raw(b) => b,
        }
    }
}

/// A tempo in microseconds per quarter note
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tempo(u32);

impl Tempo {
    /// 120 beats per minute, the tempo of a track that sets none
    pub const DEFAULT: Self = Self(500_000);

    /// Create a tempo. Zero microseconds per quarter note is not a tempo.
    pub const fn new(micros_per_quarter_note: u32) -> Option<Self> {
        if micros_per_quarter_note == 0 {
            None
        } else {
            Some(Self(micros_per_quarter_note))
        }
    }

    /// Decode the 3 byte big-endian payload of a tempo meta event.
    pub const fn from_bytes(bytes: [u8; 3]) -> Result<Self, ReaderErrorKind> {
        let micros = u32::from_be_bytes([0, bytes[0], bytes[1], bytes[2]]);
        match Self::new(micros) {
            Some(tempo) => Ok(tempo),
            None => Err(ReaderErrorKind::InvalidTempo),
        }
    }

    /// Microseconds per quarter note
    pub const fn micros_per_quarter_note(&self) -> u32 {
        self.0
    }

    /// Quarter notes per minute
    pub fn bpm(&self) -> f64 {
        60_000_000. / f64::from(self.0)
    }
}

impl Default for Tempo {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn read(bytes: &[u8]) -> ReadResult<MetaMessage> {
        MetaMessage::read(&mut Reader::from_byte_slice(bytes))
    }

    #[test]
    fn tempo_of_120_bpm() {
        let MetaMessage::Tempo(tempo) = read(&[0x51, 0x03, 0x07, 0xA1, 0x20]).unwrap() else {
            panic!("not a tempo");
        };
        assert_eq!(tempo.micros_per_quarter_note(), 500_000);
        assert_eq!(tempo.bpm(), 120.0);
    }

    #[test]
    fn zero_tempo_is_rejected() {
        let err = read(&[0x51, 0x03, 0x00, 0x00, 0x00]).unwrap_err();
        assert_eq!(err.error_kind(), &ReaderErrorKind::InvalidTempo);
        assert_eq!(err.position(), 2);
    }

    #[test]
    fn fixed_length_is_checked() {
        let err = read(&[0x51, 0x02, 0x07, 0xA1]).unwrap_err();
        assert_eq!(
            err.error_kind(),
            &ReaderErrorKind::Meta(MetaError::Length {
                kind: 0x51,
                expected: 3,
                found: 2
            })
        );

        let err = read(&[0x2F, 0x01, 0x00]).unwrap_err();
        assert!(matches!(
            err.error_kind(),
            ReaderErrorKind::Meta(MetaError::Length { kind: 0x2F, .. })
        ));
    }

    #[test]
    fn text_falls_back_to_raw() {
        assert_eq!(
            read(&[0x03, 0x05, b'P', b'i', b'a', b'n', b'o']).unwrap(),
            MetaMessage::TrackName(Text::Utf8("Piano".into()))
        );

        let latin1 = read(&[0x02, 0x02, 0xA9, 0x20]).unwrap();
        let MetaMessage::Copyright(text) = latin1 else {
            panic!("not a copyright");
        };
        assert_eq!(text.as_str(), None);
        assert_eq!(text.as_bytes(), &[0xA9, 0x20]);
    }

    #[test]
    fn unknown_meta_is_kept() {
        let message = read(&[0x60, 0x02, 0xDE, 0xAD]).unwrap();
        assert_eq!(
            message,
            MetaMessage::Unknown {
                kind: 0x60,
                data: alloc::vec![0xDE, 0xAD]
            }
        );
        assert_eq!(message.kind(), 0x60);
    }

    #[test]
    fn sequence_number_is_raw() {
        assert_eq!(
            read(&[0x00, 0x02, 0x00, 0x07]).unwrap(),
            MetaMessage::SequenceNumber(alloc::vec![0x00, 0x07])
        );
    }

    #[test]
    fn long_payload_length_is_a_varlen() {
        let mut bytes = alloc::vec![0x01, 0x81, 0x00];
        bytes.extend(core::iter::repeat_n(b'a', 128));
        let MetaMessage::Text(text) = read(&bytes).unwrap() else {
            panic!("not text");
        };
        assert_eq!(text.as_bytes().len(), 128);
    }
}
