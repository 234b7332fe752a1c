use super::{Channel, VoiceKind};

/// A decoded channel voice event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelVoiceMessage {
    channel: Channel,
    event: VoiceEvent,
}

impl ChannelVoiceMessage {
    /// Create a new channel voice message
    pub const fn new(channel: Channel, event: VoiceEvent) -> Self {
        Self { channel, event }
    }

    /// The channel the event is addressed to
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    /// The event itself
    pub const fn event(&self) -> &VoiceEvent {
        &self.event
    }

    /// True for note on with a nonzero velocity
    pub const fn is_note_on(&self) -> bool {
        matches!(self.event, VoiceEvent::NoteOn { velocity, .. } if velocity > 0)
    }

    /// True for note off, and for note on with velocity zero
    pub const fn is_note_off(&self) -> bool {
        matches!(
            self.event,
            VoiceEvent::NoteOff { .. } | VoiceEvent::NoteOn { velocity: 0, .. }
        )
    }
}

/// The payload of a [`ChannelVoiceMessage`]
///
/// Data bytes are 7-bit values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VoiceEvent {
    /// A key was released
    NoteOff {
        /// key number
        note: u8,
        /// release velocity
        velocity: u8,
    },
    /// A key was pressed. Velocity zero is commonly used as a note off.
    NoteOn {
        /// key number
        note: u8,
        /// attack velocity
        velocity: u8,
    },
    /// Polyphonic key pressure
    Aftertouch {
        /// key number
        note: u8,
        /// pressure on that key
        pressure: u8,
    },
    /// A controller changed
    ControlChange {
        /// controller number
        controller: u8,
        /// new value
        value: u8,
    },
    /// A new program (patch) was selected
    ProgramChange {
        /// program number
        program: u8,
    },
    /// Pressure applied to the whole channel
    ChannelPressure {
        /// pressure
        pressure: u8,
    },
    /// The pitch wheel moved
    PitchBend {
        /// least significant 7 bits
        lsb: u8,
        /// most significant 7 bits
        msb: u8,
    },
}

impl VoiceEvent {
    /// The kind of this event
    pub const fn kind(&self) -> VoiceKind {
        match self {
            Self::NoteOff { .. } => VoiceKind::NoteOff,
            Self::NoteOn { .. } => VoiceKind::NoteOn,
            Self::Aftertouch { .. } => VoiceKind::Aftertouch,
            Self::ControlChange { .. } => VoiceKind::ControlChange,
            Self::ProgramChange { .. } => VoiceKind::ProgramChange,
            Self::ChannelPressure { .. } => VoiceKind::ChannelPressure,
            Self::PitchBend { .. } => VoiceKind::PitchBend,
        }
    }

    /// The 14-bit pitch bend value, centered on `0x2000`
    pub const fn pitch_bend(&self) -> Option<u16> {
        match self {
            Self::PitchBend { lsb, msb } => Some(((*msb as u16) << 7) | *lsb as u16),
            _ => None,
        }
    }
}
