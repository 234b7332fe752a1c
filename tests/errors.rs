use pretty_assertions::assert_eq;
use smf_decode::prelude::*;

fn single_track_file(events: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"MThd");
    bytes.extend_from_slice(&[0x00, 0x00, 0x00, 0x06]);
    bytes.extend_from_slice(&[0x00, 0x00, 0x00, 0x01, 0x00, 0x60]);
    bytes.extend_from_slice(b"MTrk");
    bytes.extend_from_slice(&(events.len() as u32).to_be_bytes());
    bytes.extend_from_slice(events);
    bytes
}

#[test]
fn empty_input() {
    let err = MidiFile::parse(Vec::<u8>::new()).unwrap_err();
    assert_eq!(err.error_kind(), &ReaderErrorKind::TruncatedChunkHeader);
    assert_eq!(err.stage(), DecodeStage::Header);
}

#[test]
fn not_a_midi_file() {
    let err = MidiFile::parse(b"RIFF\0\0\0\x04RMID").unwrap_err();
    assert_eq!(
        err.error_kind(),
        &ReaderErrorKind::InvalidHeader(HeaderError::WrongTag(*b"RIFF"))
    );
}

#[test]
fn zero_tempo() {
    let bytes = single_track_file(&[
        0x00, 0xFF, 0x51, 0x03, 0x00, 0x00, 0x00, //
        0x00, 0xFF, 0x2F, 0x00,
    ]);
    let err = MidiFile::parse(&bytes).unwrap_err();
    assert_eq!(err.error_kind(), &ReaderErrorKind::InvalidTempo);
    assert_eq!(err.stage(), DecodeStage::Events { track: 0 });
    // first payload byte of the tempo event
    assert_eq!(err.position(), 26);
}

#[test]
fn data_byte_before_any_status() {
    let bytes = single_track_file(&[0x00, 0x3C, 0x64, 0x00, 0xFF, 0x2F, 0x00]);
    let err = MidiFile::parse(&bytes).unwrap_err();
    assert_eq!(err.error_kind(), &ReaderErrorKind::NoRunningStatus);
    assert_eq!(err.position(), 23);
}

#[test]
fn runaway_delta_time() {
    let bytes = single_track_file(&[
        0x81, 0x82, 0x83, 0x84, 0x85, 0x86, 0x00, 0x90, 0x3C, 0x64, //
        0x00, 0xFF, 0x2F, 0x00,
    ]);
    let err = MidiFile::parse(&bytes).unwrap_err();
    assert_eq!(err.error_kind(), &ReaderErrorKind::MalformedVarint);
    assert_eq!(err.position(), 22);
}

#[test]
fn nonzero_end_of_track_length_runs_past_range() {
    // FF 2F 01 00: the marker is found, but its length byte is not zero
    let bytes = single_track_file(&[0x00, 0xFF, 0x2F, 0x01, 0x00]);
    let err = MidiFile::parse(&bytes).unwrap_err();
    assert!(err.is_eof());
}

#[test]
fn invalid_data_byte() {
    let bytes = single_track_file(&[0x00, 0x90, 0x3C, 0xE0, 0x00, 0xFF, 0x2F, 0x00]);
    let err = MidiFile::parse(&bytes).unwrap_err();
    assert_eq!(err.error_kind(), &ReaderErrorKind::InvalidDataByte(0xE0));
}

#[test]
fn errors_name_stage_and_position() {
    let bytes = single_track_file(&[0x00, 0x3C, 0x64, 0x00, 0xFF, 0x2F, 0x00]);
    let err = MidiFile::parse(&bytes).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Decoding track 0 (events) at position 23, Data byte without running status"
    );
}
