use alloc::vec::Vec;

use super::{SysExKind, SystemExclusiveMessage, Track, TrackEvent, TrackInfo, TrackMessage};
use crate::{
    file::{META_STATUS, MetaMessage},
    message::channel::{Channel, ChannelEventDecoder, VoiceKind},
    reader::{ReadResult, Reader, ReaderErrorKind},
};

const SYSEX_BEGIN: u8 = 0xF0;
const SYSEX_ESCAPE: u8 = 0xF7;

/// Decode the events of one track.
///
/// `reader` must be positioned on the first event (just past the `MTrk`
/// chunk header), and should end where the track ends. Decoding stops after
/// the end-of-track meta event.
///
/// # Running status
///
/// A byte below `0x80` where a status byte is expected repeats the last
/// channel status. It is not consumed; `decoder` receives it as the first
/// data byte of the repeated event. Meta and system exclusive events leave
/// the running status alone.
///
/// # Errors
/// - [`ReaderErrorKind::MissingEndOfTrack`] if the reader runs out between events
/// - [`ReaderErrorKind::NoRunningStatus`] for a data byte before any channel status
/// - [`ReaderErrorKind::UnexpectedStatus`] for system common and real-time status bytes
/// - anything `decoder` or [`MetaMessage::read`] reports
pub fn decode_track<D>(reader: &mut Reader<'_>, decoder: &mut D) -> ReadResult<Track<D::Event>>
where
    D: ChannelEventDecoder,
{
    let mut running_status: Option<(VoiceKind, Channel)> = None;
    let mut events = Vec::new();
    let mut info = TrackInfo::default();

    loop {
        if reader.is_eof() {
            return Err(reader.error(ReaderErrorKind::MissingEndOfTrack));
        }
        let delta_ticks = reader.read_varlen()?;
        let status = reader.peek_u8()?;

        let message = if let Some((kind, channel)) = VoiceKind::from_status(status) {
            reader.read_u8()?;
            running_status = Some((kind, channel));
            TrackMessage::ChannelVoice(decoder.decode(kind, channel, reader)?)
        } else if status < 0x80 {
            let (kind, channel) =
                running_status.ok_or_else(|| reader.error(ReaderErrorKind::NoRunningStatus))?;
            TrackMessage::ChannelVoice(decoder.decode(kind, channel, reader)?)
        } else {
            match status {
                META_STATUS => {
                    reader.read_u8()?;
                    let meta = MetaMessage::read(reader)?;
                    info.update(&meta);
                    TrackMessage::Meta(meta)
                }
                SYSEX_BEGIN | SYSEX_ESCAPE => {
                    reader.read_u8()?;
                    let length = reader.read_varlen()? as usize;
                    let kind = if status == SYSEX_BEGIN {
                        SysExKind::Begin
                    } else {
                        SysExKind::Escape
                    };
                    let data = reader.read_exact(length)?;
                    TrackMessage::SystemExclusive(SystemExclusiveMessage::new(kind, data))
                }
                other => return Err(reader.error(ReaderErrorKind::UnexpectedStatus(other))),
            }
        };

        let end_of_track = message.is_end_of_track();
        events.push(TrackEvent::new(delta_ticks, message));
        if end_of_track {
            break;
        }
    }

    Ok(Track::new(events, info))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        file::{Tempo, Text},
        message::channel::{ChannelVoiceMessage, VoiceDecoder, VoiceEvent},
        reader::ReaderError,
    };
    use pretty_assertions::assert_eq;

    fn decode(bytes: &[u8]) -> ReadResult<Track> {
        decode_track(&mut Reader::from_byte_slice(bytes), &mut VoiceDecoder)
    }

    fn voice(event: &TrackEvent) -> &ChannelVoiceMessage {
        event.message().channel_voice().unwrap()
    }

    #[test]
    fn running_status_repeats_last_status() {
        let track = decode(&[
            0x00, 0x90, 0x40, 0x7F, // note on
            0x60, 0x40, 0x00, // running status, velocity zero
            0x00, 0xFF, 0x2F, 0x00,
        ])
        .unwrap();

        assert_eq!(track.events().len(), 3);
        assert_eq!(
            voice(&track.events()[0]).event(),
            &VoiceEvent::NoteOn {
                note: 0x40,
                velocity: 0x7F
            }
        );
        let second = &track.events()[1];
        assert_eq!(second.delta_ticks(), 0x60);
        assert_eq!(
            voice(second).event(),
            &VoiceEvent::NoteOn {
                note: 0x40,
                velocity: 0
            }
        );
        assert!(voice(second).is_note_off());
    }

    #[test]
    fn running_status_survives_meta_events() {
        let track = decode(&[
            0x00, 0xC2, 0x05, // program change, channel 3
            0x00, 0xFF, 0x01, 0x01, b'x', // text
            0x00, 0x07, // running status program change
            0x00, 0xFF, 0x2F, 0x00,
        ])
        .unwrap();

        let last = voice(&track.events()[2]);
        assert_eq!(last.channel(), Channel::Three);
        assert_eq!(last.event(), &VoiceEvent::ProgramChange { program: 7 });
    }

    #[test]
    fn data_byte_without_running_status() {
        let err = decode(&[0x00, 0x40, 0x7F, 0x00, 0xFF, 0x2F, 0x00]).unwrap_err();
        assert_eq!(err, ReaderError::new(1, ReaderErrorKind::NoRunningStatus));
    }

    #[test]
    fn meta_events_fill_track_info() {
        let track = decode(&[
            0x00, 0xFF, 0x03, 0x03, b'O', b'n', b'e', // name
            0x00, 0xFF, 0x51, 0x03, 0x0F, 0x42, 0x40, // 60 bpm
            0x00, 0xFF, 0x03, 0x03, b'T', b'w', b'o', // renamed
            0x00, 0xFF, 0x51, 0x03, 0x07, 0xA1, 0x20, // 120 bpm
            0x00, 0xFF, 0x58, 0x04, 0x03, 0x02, 0x18, 0x08, // 3/4
            0x00, 0xFF, 0x59, 0x02, 0x02, 0x00, // D major
            0x00, 0xFF, 0x2F, 0x00,
        ])
        .unwrap();

        assert_eq!(track.events().len(), 7);
        assert_eq!(track.title(), Some("Two"));
        assert_eq!(track.info().name, Some(Text::Utf8("Two".into())));
        assert_eq!(track.tempo(), Tempo::new(500_000));
        assert_eq!(track.bpm(), Some(120.0));
        assert_eq!(track.info().time_signature.unwrap().numerator, 3);
        assert_eq!(track.info().key_signature.unwrap().sharps_flats, 2);
    }

    #[test]
    fn sysex_is_kept() {
        let track = decode(&[
            0x00, 0xF0, 0x04, 0x43, 0x12, 0x00, 0xF7, // sysex
            0x00, 0xFF, 0x2F, 0x00,
        ])
        .unwrap();
        let TrackMessage::SystemExclusive(sysex) = track.events()[0].message() else {
            panic!("not sysex");
        };
        assert_eq!(sysex.kind(), SysExKind::Begin);
        assert_eq!(sysex.data(), &[0x43, 0x12, 0x00, 0xF7]);
    }

    #[test]
    fn system_common_status_is_rejected() {
        let err = decode(&[0x00, 0xF2, 0x00, 0x00]).unwrap_err();
        assert_eq!(err.error_kind(), &ReaderErrorKind::UnexpectedStatus(0xF2));
    }

    #[test]
    fn stops_at_end_of_track() {
        let bytes = [0x00, 0xFF, 0x2F, 0x00, 0x00, 0x90, 0x40, 0x7F];
        let mut reader = Reader::from_byte_slice(&bytes);
        let track = decode_track(&mut reader, &mut VoiceDecoder).unwrap();
        assert_eq!(track.events().len(), 1);
        assert_eq!(reader.buffer_position(), 4);
    }

    #[test]
    fn exhausted_range_is_missing_end_of_track() {
        let err = decode(&[0x00, 0x90, 0x40, 0x7F]).unwrap_err();
        assert_eq!(err, ReaderError::new(4, ReaderErrorKind::MissingEndOfTrack));
    }

    #[test]
    fn event_cut_short_is_eof() {
        let err = decode(&[0x00, 0x90, 0x40]).unwrap_err();
        assert!(err.is_eof());
    }
}
