#![doc = r#"
Tracks and their events

A [`Track`] is the ordered list of events decoded from one `MTrk` chunk.
Its last event is always the end-of-track meta event.

Meta events that describe the whole track (name, copyright, tempo,
signatures, SMPTE offset) are also collected into [`TrackInfo`] for
convenience. When a track holds several of the same kind, the last one
wins; the full history stays available in [`Track::events`].
"#]

mod decode;
pub use decode::*;

mod event;
pub use event::*;

use alloc::vec::Vec;

use crate::{
    file::{KeySignature, MetaMessage, SmpteOffset, Tempo, Text, TimeSignature},
    message::channel::ChannelVoiceMessage,
};

/// The decoded events of one track
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track<E = ChannelVoiceMessage> {
    events: Vec<TrackEvent<E>>,
    info: TrackInfo,
}

impl<E> Track<E> {
    pub(crate) fn new(events: Vec<TrackEvent<E>>, info: TrackInfo) -> Self {
        Self { events, info }
    }

    /// Every event in file order, ending with the end-of-track event
    pub fn events(&self) -> &[TrackEvent<E>] {
        &self.events
    }

    /// Take the events out of the track
    pub fn into_events(self) -> Vec<TrackEvent<E>> {
        self.events
    }

    /// Track-wide meta information
    pub fn info(&self) -> &TrackInfo {
        &self.info
    }

    /// The track name, if it was set and is valid UTF-8
    pub fn title(&self) -> Option<&str> {
        self.info.name.as_ref().and_then(Text::as_str)
    }

    /// The copyright notice, if it was set and is valid UTF-8
    pub fn copyright(&self) -> Option<&str> {
        self.info.copyright.as_ref().and_then(Text::as_str)
    }

    /// The last tempo set in this track
    pub fn tempo(&self) -> Option<Tempo> {
        self.info.tempo
    }

    /// Quarter notes per minute of the last tempo set in this track
    pub fn bpm(&self) -> Option<f64> {
        self.info.tempo.map(|t| t.bpm())
    }

    /// Events paired with the ticks elapsed since the track started
    pub fn ticked_events(&self) -> impl Iterator<Item = Ticked<'_, E>> {
        self.events.iter().scan(0u64, |ticks, event| {
            *ticks += u64::from(event.delta_ticks());
            Some(Ticked {
                accumulated_ticks: *ticks,
                event,
            })
        })
    }

    /// Ticks from the start of the track to its end-of-track event
    pub fn duration_ticks(&self) -> u64 {
        self.events
            .iter()
            .map(|e| u64::from(e.delta_ticks()))
            .sum()
    }
}

/// Track-wide meta information, last write wins
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackInfo {
    /// `FF 03`
    pub name: Option<Text>,
    /// `FF 02`
    pub copyright: Option<Text>,
    /// `FF 51`
    pub tempo: Option<Tempo>,
    /// `FF 58`
    pub time_signature: Option<TimeSignature>,
    /// `FF 59`
    pub key_signature: Option<KeySignature>,
    /// `FF 54`
    pub smpte_offset: Option<SmpteOffset>,
}

impl TrackInfo {
    pub(crate) fn update(&mut self, meta: &MetaMessage) {
        match meta {
            MetaMessage::TrackName(t) => self.name = Some(t.clone()),
            MetaMessage::Copyright(t) => self.copyright = Some(t.clone()),
            MetaMessage::Tempo(t) => self.tempo = Some(*t),
            MetaMessage::TimeSignature(s) => self.time_signature = Some(*s),
            MetaMessage::KeySignature(s) => self.key_signature = Some(*s),
            MetaMessage::SmpteOffset(o) => self.smpte_offset = Some(*o),
            _ => {}
        }
    }
}

/// A borrowed event with its absolute position in ticks
#[derive(Debug, PartialEq)]
pub struct Ticked<'a, E = ChannelVoiceMessage> {
    accumulated_ticks: u64,
    event: &'a TrackEvent<E>,
}

impl<'a, E> Ticked<'a, E> {
    /// Ticks since the start of the track
    pub const fn accumulated_ticks(&self) -> u64 {
        self.accumulated_ticks
    }

    /// The event
    pub const fn event(&self) -> &'a TrackEvent<E> {
        self.event
    }
}
