use alloc::vec::Vec;

use crate::{file::MetaMessage, message::channel::ChannelVoiceMessage};

/// One event of a track, with the ticks elapsed since the previous event
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackEvent<E = ChannelVoiceMessage> {
    delta_ticks: u32,
    message: TrackMessage<E>,
}

impl<E> TrackEvent<E> {
    /// Create a new event
    pub const fn new(delta_ticks: u32, message: TrackMessage<E>) -> Self {
        Self {
            delta_ticks,
            message,
        }
    }

    /// Ticks since the previous event in the track (or the track start)
    pub const fn delta_ticks(&self) -> u32 {
        self.delta_ticks
    }

    /// The event
    pub const fn message(&self) -> &TrackMessage<E> {
        &self.message
    }

    /// Take the event, dropping its timing
    pub fn into_message(self) -> TrackMessage<E> {
        self.message
    }
}

/// What a [`TrackEvent`] carries
///
/// Which variant applies is decided by the status byte alone: `FF` is
/// meta, `F0`/`F7` is system exclusive, anything else is a channel event.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackMessage<E = ChannelVoiceMessage> {
    /// A channel voice event, as produced by a
    /// [`ChannelEventDecoder`](crate::message::channel::ChannelEventDecoder)
    ChannelVoice(E),
    /// A system exclusive event
    SystemExclusive(SystemExclusiveMessage),
    /// A meta event, including the end-of-track marker
    Meta(MetaMessage),
}

impl<E> TrackMessage<E> {
    /// True for the end-of-track meta event
    pub const fn is_end_of_track(&self) -> bool {
        matches!(self, Self::Meta(MetaMessage::EndOfTrack))
    }

    /// The channel event, if this is one
    pub const fn channel_voice(&self) -> Option<&E> {
        match self {
            Self::ChannelVoice(e) => Some(e),
            _ => None,
        }
    }

    /// The meta event, if this is one
    pub const fn meta(&self) -> Option<&MetaMessage> {
        match self {
            Self::Meta(m) => Some(m),
            _ => None,
        }
    }
}

/// Which status byte opened a system exclusive event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SysExKind {
    /// `F0`, a complete message or the first packet of one
    Begin,
    /// `F7`, a continuation packet or an escaped sequence
    Escape,
}

/// A system exclusive event (`F0 length data` or `F7 length data`)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemExclusiveMessage {
    kind: SysExKind,
    data: Vec<u8>,
}

impl SystemExclusiveMessage {
    /// Create a new system exclusive message
    pub fn new(kind: SysExKind, data: &[u8]) -> Self {
        Self {
            kind,
            data: data.to_vec(),
        }
    }

    /// The opening status byte
    pub const fn kind(&self) -> SysExKind {
        self.kind
    }

    /// The payload, not including the status byte or length
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
