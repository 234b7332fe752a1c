use super::{Channel, ChannelVoiceMessage, VoiceEvent, VoiceKind};
use crate::reader::{ReadResult, Reader, ReaderErrorKind};

#[doc = r#"
Turns the data bytes of one channel voice event into a message.

The track decoder calls [`decode`](ChannelEventDecoder::decode) with the
reader positioned on the event's first data byte. This is true whether the
status byte was read from the stream or carried over by running status.
The decoder must consume exactly the data bytes of the event.

# Example
```rust
# use smf_decode::prelude::*;
/// Keeps only the kind of each event.
struct KindsOnly;

impl ChannelEventDecoder for KindsOnly {
    type Event = VoiceKind;

    fn decode(
        &mut self,
        kind: VoiceKind,
        _channel: Channel,
        reader: &mut Reader<'_>,
    ) -> ReadResult<VoiceKind> {
        reader.read_exact(kind.data_len())?;
        Ok(kind)
    }
}
```
"#]
pub trait ChannelEventDecoder {
    /// The message produced for each channel event
    type Event;

    /// Consume the data bytes of one `kind` event on `channel`.
    fn decode(
        &mut self,
        kind: VoiceKind,
        channel: Channel,
        reader: &mut Reader<'_>,
    ) -> ReadResult<Self::Event>;
}

/// The default [`ChannelEventDecoder`], producing [`ChannelVoiceMessage`]s
#[derive(Debug, Default, Clone, Copy)]
pub struct VoiceDecoder;

impl VoiceDecoder {
    fn data_byte(reader: &mut Reader<'_>) -> ReadResult<u8> {
        let byte = reader.peek_u8()?;
        if byte & 0x80 != 0 {
            return Err(reader.error(ReaderErrorKind::InvalidDataByte(byte)));
        }
        reader.read_u8()
    }
}

impl ChannelEventDecoder for VoiceDecoder {
    type Event = ChannelVoiceMessage;

    fn decode(
        &mut self,
        kind: VoiceKind,
        channel: Channel,
        reader: &mut Reader<'_>,
    ) -> ReadResult<ChannelVoiceMessage> {
        let first = Self::data_byte(reader)?;
        let event = match kind {
            VoiceKind::ProgramChange => VoiceEvent::ProgramChange { program: first },
            VoiceKind::ChannelPressure => VoiceEvent::ChannelPressure { pressure: first },
            two_bytes => {
                let second = Self::data_byte(reader)?;
                match two_bytes {
                    VoiceKind::NoteOff => VoiceEvent::NoteOff {
                        note: first,
                        velocity: second,
                    },
                    VoiceKind::NoteOn => VoiceEvent::NoteOn {
                        note: first,
                        velocity: second,
                    },
                    VoiceKind::Aftertouch => VoiceEvent::Aftertouch {
                        note: first,
                        pressure: second,
                    },
                    VoiceKind::ControlChange => VoiceEvent::ControlChange {
                        controller: first,
                        value: second,
                    },
                    _ => VoiceEvent::PitchBend {
                        lsb: first,
                        msb: second,
                    },
                }
            }
        };
        Ok(ChannelVoiceMessage::new(channel, event))
    }
}
