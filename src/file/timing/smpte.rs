#![doc = r#"
SMPTE frame rates

A file may measure its delta-times in fractions of a video frame rather
than of a quarter note. In that case the high byte of the header's division
holds a negative frame rate, and the same four rates also appear in the
SMPTE offset meta event (`FF 54`).

- 24 fps: film
- 25 fps: PAL/SECAM video
- 29.97 fps: NTSC color video, "drop frame"
- 30 fps: NTSC black & white video
"#]

use crate::reader::SmpteError;

/// The possible FPS (Frames Per Second) for MIDI tracks and files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SmpteFps {
    /// 24 frames per second
    TwentyFour,
    /// 25 frames per second
    TwentyFive,
    /// 29.97 frames per second (30000/1001), drop-frame
    TwentyNine,
    /// 30 frames per second
    Thirty,
}

impl SmpteFps {
    /// Decode the signed frame rate stored in the high byte of a header division.
    pub const fn from_division_byte(byte: i8) -> Result<Self, SmpteError> {
        match byte {
            -24 => Ok(Self::TwentyFour),
            -25 => Ok(Self::TwentyFive),
            -29 => Ok(Self::TwentyNine),
            -30 => Ok(Self::Thirty),
            _ => Err(SmpteError::HeaderFrameTime(byte)),
        }
    }

    /// Decode the two frame type bits of an SMPTE offset.
    pub const fn from_offset_bits(bits: u8) -> Result<Self, SmpteError> {
        match bits {
            0 => Ok(Self::TwentyFour),
            1 => Ok(Self::TwentyFive),
            2 => Ok(Self::TwentyNine),
            3 => Ok(Self::Thirty),
            v => Err(SmpteError::TrackFrame(v)),
        }
    }

    /// The nominal integer rate used in tick arithmetic.
    ///
    /// Drop-frame 29.97 fps counts as 30 here.
    pub const fn as_division(&self) -> u8 {
        match self {
            Self::TwentyFour => 24,
            Self::TwentyFive => 25,
            Self::TwentyNine | Self::Thirty => 30,
        }
    }

    /// The actual frame rate, including the fractional drop-frame rate.
    pub const fn as_f64(&self) -> f64 {
        match self {
            Self::TwentyFour => 24.,
            Self::TwentyFive => 25.,
            Self::TwentyNine => DROP_FRAME,
            Self::Thirty => 30.,
        }
    }
}

/// NTSC drop-frame rate, 29.97002997... fps
const DROP_FRAME: f64 = 30_000. / 1001.;
