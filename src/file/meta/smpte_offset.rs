#![doc = r#"
SMPTE Offset (`FF 54 05 hr mn se fr ff`)

Specifies the SMPTE time at which a track should start, so a sequence can
be lined up with video or film. The payload carries a frame rate, hours,
minutes, seconds, frames and hundredths of a frame.
"#]

use crate::{file::SmpteFps, reader::SmpteError};

/// A MIDI track's starting position in SMPTE time code.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmpteOffset {
    /// The frame rate for this offset.
    pub fps: SmpteFps,
    /// Hours, 0-23
    pub hour: u8,
    /// Minutes, 0-59
    pub minute: u8,
    /// Seconds, 0-59
    pub second: u8,
    /// Frame number within the second
    pub frame: u8,
    /// Hundredths of a frame, 0-99
    pub subframe: u8,
}

impl SmpteOffset {
    /// The offset in microseconds, at the offset's own frame rate.
    pub const fn as_micros(&self) -> f64 {
        ((((self.hour as u64 * 3600) + (self.minute as u64) * 60 + self.second as u64) * 1_000_000)
            as f64)
            + ((self.frame as u64) * 1_000_000) as f64 / self.fps.as_f64()
            + ((self.subframe as u32) * 10_000) as f64 / self.fps.as_f64()
    }

    /// Parse the 5 byte payload of an SMPTE offset meta event.
    ///
    /// - Byte 0: `0rrhhhhh` where `rr` is the frame rate and `hhhhh` the hours
    /// - Byte 1: minutes
    /// - Byte 2: seconds
    /// - Byte 3: frames
    /// - Byte 4: hundredths of a frame
    pub const fn parse(data: &[u8]) -> Result<Self, SmpteError> {
        if data.len() != 5 {
            return Err(SmpteError::Length(data.len()));
        }

        // 0 rr hhhhh
        let fps = match SmpteFps::from_offset_bits(data[0] >> 5) {
            Ok(fps) => fps,
            Err(e) => return Err(e),
        };
        let hour = data[0] & 0b0001_1111;
        if hour > 23 {
            return Err(SmpteError::HourOffset(hour));
        }
        let minute = data[1];
        if minute > 59 {
            return Err(SmpteError::MinuteOffset(minute));
        }
        let second = data[2];
        if second > 59 {
            return Err(SmpteError::SecondOffset(second));
        }
        let frame = data[3];
        let subframe = data[4];
        if subframe > 99 {
            return Err(SmpteError::Subframe(subframe));
        }
        Ok(Self {
            fps,
            hour,
            minute,
            second,
            frame,
            subframe,
        })
    }
}

#[test]
fn parse_smpte_offset() {
    use pretty_assertions::assert_eq;
    // the bytes after 00 FF 54 05
    let bytes = [0x41, 0x17, 0x2D, 0x0C, 0x22];
    let offset = SmpteOffset::parse(&bytes).unwrap();

    assert_eq!(offset.fps, SmpteFps::TwentyNine);
    assert_eq!(offset.hour, 1);
    assert_eq!(offset.minute, 23);
    assert_eq!(offset.second, 45);
    assert_eq!(offset.frame, 12);
    assert_eq!(offset.subframe, 34);
}

#[test]
fn smpte_offset_in_micros() {
    use pretty_assertions::assert_eq;
    // 25 fps, 00:00:01, frame 5, no subframes
    let offset = SmpteOffset::parse(&[0x20, 0x00, 0x01, 0x05, 0x00]).unwrap();
    assert_eq!(offset.as_micros(), 1_200_000.);
}
