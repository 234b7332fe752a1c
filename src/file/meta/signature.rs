/// Time signature (`FF 58 04 nn dd cc bb`)
///
/// All four fields are stored as signed bytes, as they appear in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeSignature {
    /// Beats per bar
    pub numerator: i8,
    /// The beat unit, as a power of two (2 means a quarter note)
    pub denominator_power: i8,
    /// MIDI clocks per metronome click
    pub clocks_per_click: i8,
    /// Notated 32nd notes per MIDI quarter note (24 clocks)
    pub thirty_seconds_per_quarter: i8,
}

impl TimeSignature {
    /// Decode the 4 byte payload.
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self {
            numerator: bytes[0] as i8,
            denominator_power: bytes[1] as i8,
            clocks_per_click: bytes[2] as i8,
            thirty_seconds_per_quarter: bytes[3] as i8,
        }
    }

    /// The beat unit, `2^denominator_power`.
    ///
    /// `None` if the power is negative or too large to represent.
    pub const fn denominator(&self) -> Option<u32> {
        if self.denominator_power < 0 || self.denominator_power > 31 {
            return None;
        }
        Some(1 << self.denominator_power)
    }
}

/// Key signature (`FF 59 02 sf mi`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeySignature {
    /// Sharps when positive, flats when negative
    pub sharps_flats: i8,
    /// 0 for major, 1 for minor
    pub mode: u8,
}

impl KeySignature {
    /// Decode the 2 byte payload.
    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self {
            sharps_flats: bytes[0] as i8,
            mode: bytes[1],
        }
    }

    /// True if the mode byte says minor
    pub const fn is_minor(&self) -> bool {
        self.mode == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn six_eight_time() {
        let sig = TimeSignature::from_bytes([0x06, 0x03, 0x24, 0x08]);
        assert_eq!(sig.numerator, 6);
        assert_eq!(sig.denominator(), Some(8));
        assert_eq!(sig.clocks_per_click, 36);
        assert_eq!(sig.thirty_seconds_per_quarter, 8);
    }

    #[test]
    fn e_flat_minor() {
        let sig = KeySignature::from_bytes([0xFA, 0x01]);
        assert_eq!(sig.sharps_flats, -6);
        assert!(sig.is_minor());
    }
}
