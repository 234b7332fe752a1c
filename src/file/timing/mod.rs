mod smpte;
pub use smpte::*;

use crate::reader::SmpteError;

/// The division field of the `MThd` chunk
///
/// Keeps the raw 16-bit value next to its interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Division {
    raw: u16,
    timing: Timing,
}

impl Division {
    /// Interpret a raw division.
    ///
    /// With the leading bit clear the value counts ticks per quarter note.
    /// With it set, the high byte is a negative SMPTE frame rate and the low
    /// byte the ticks per frame.
    pub const fn from_raw(raw: u16) -> Result<Self, SmpteError> {
        let [hi, lo] = raw.to_be_bytes();
        let timing = if hi >> 7 == 0 {
            Timing::TicksPerQuarterNote(raw)
        } else {
            match SmpteFps::from_division_byte(hi as i8) {
                Ok(fps) => Timing::Smpte {
                    fps,
                    ticks_per_frame: lo,
                },
                Err(e) => return Err(e),
            }
        };
        Ok(Self { raw, timing })
    }

    /// The field as stored in the file
    pub const fn raw(&self) -> u16 {
        self.raw
    }

    /// The decoded timing
    pub const fn timing(&self) -> Timing {
        self.timing
    }
}

/// The header timing type.
///
/// This is either the number of ticks per quarter note or
/// the alternative SMPTE format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Timing {
    /// Delta times count fractions of a quarter note (1-32767)
    TicksPerQuarterNote(u16),

    /// Delta times count fractions of an SMPTE frame
    Smpte {
        /// frame rate
        fps: SmpteFps,
        /// subdivisions of one frame
        ticks_per_frame: u8,
    },
}

impl Timing {
    /// Returns Some if the midi timing is defined
    /// as ticks per quarter note
    pub const fn ticks_per_quarter_note(&self) -> Option<u16> {
        match self {
            Self::TicksPerQuarterNote(t) => Some(*t),
            _ => None,
        }
    }

    /// Returns the frame rate for SMPTE timing
    pub const fn smpte_fps(&self) -> Option<SmpteFps> {
        match self {
            Self::Smpte { fps, .. } => Some(*fps),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn metrical_division() {
        let division = Division::from_raw(0x01E0).unwrap();
        assert_eq!(division.raw(), 0x01E0);
        assert_eq!(division.timing().ticks_per_quarter_note(), Some(480));
    }

    #[test]
    fn smpte_division() {
        // -25 fps, 40 ticks per frame
        let division = Division::from_raw(0xE728).unwrap();
        assert_eq!(
            division.timing(),
            Timing::Smpte {
                fps: SmpteFps::TwentyFive,
                ticks_per_frame: 40
            }
        );
        assert_eq!(division.timing().ticks_per_quarter_note(), None);
    }

    #[test]
    fn unknown_frame_rate() {
        // -26
        assert_eq!(
            Division::from_raw(0xE628),
            Err(SmpteError::HeaderFrameTime(-26))
        );
    }
}
