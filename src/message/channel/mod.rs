#![doc = r#"
Contains all Channel Voice Message types

The track decoder only knows how to recognize a channel voice event: a
status byte whose high nibble is `0x8` through `0xE`, or a bare data byte
continuing the running status. Turning the data bytes that follow into a
structured message is the job of a [`ChannelEventDecoder`].

[`VoiceDecoder`] is the decoder used by [`MidiFile::parse`](crate::MidiFile::parse).
It produces a [`ChannelVoiceMessage`] for every event.

# Hierarchy
```text
|-----------------------|
| Channel Voice Message |
|-----------------------|
  |- Channel (0x0 - 0xF)
  |- Voice Event
       |- NoteOff, NoteOn, Aftertouch     (2 data bytes)
       |- ControlChange, PitchBend        (2 data bytes)
       |- ProgramChange, ChannelPressure  (1 data byte)
```
"#]

mod voice;
pub use voice::*;

mod decoder;
pub use decoder::*;

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The kind of a channel voice event, taken from the high nibble of its status byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum VoiceKind {
    /// `0x8n`
    NoteOff = 0x8,
    /// `0x9n`
    NoteOn = 0x9,
    /// `0xAn`, polyphonic key pressure
    Aftertouch = 0xA,
    /// `0xBn`
    ControlChange = 0xB,
    /// `0xCn`
    ProgramChange = 0xC,
    /// `0xDn`
    ChannelPressure = 0xD,
    /// `0xEn`
    PitchBend = 0xE,
}

impl VoiceKind {
    /// Split a status byte into its kind and channel.
    ///
    /// Returns `None` for data bytes and for `0xF0..=0xFF`.
    pub fn from_status(status: u8) -> Option<(Self, Channel)> {
        let kind = Self::try_from(status >> 4).ok()?;
        Some((kind, Channel::from_low_nibble(status)))
    }

    /// How many data bytes follow the status byte
    pub const fn data_len(&self) -> usize {
        match self {
            Self::ProgramChange | Self::ChannelPressure => 1,
            _ => 2,
        }
    }
}

/// One of the sixteen MIDI channels
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, TryFromPrimitive, IntoPrimitive,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Channel {
    One = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Eleven,
    Twelve,
    Thirteen,
    Fourteen,
    Fifteen,
    Sixteen,
}

impl Channel {
    /// The channel named by the low nibble of a status byte
    pub fn from_low_nibble(status: u8) -> Self {
        // every nibble names a channel
        Self::try_from(status & 0x0F).unwrap_or(Self::One)
    }

    /// Zero-based channel number
    pub fn number(self) -> u8 {
        self.into()
    }
}
