use num_enum::{IntoPrimitive, TryFromPrimitive};

#[doc = r#"
The format of a MIDI file, from the first field of its `MThd` chunk

- Format 0 holds a single track carrying every channel.
- Format 1 holds tracks that play at the same time, as one sequence.
- Format 2 holds tracks that are independent sequences, played one after another.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum FormatType {
    /// Format 0
    SingleMultiChannel = 0,
    /// Format 1
    Simultaneous = 1,
    /// Format 2
    SequentiallyIndependent = 2,
}

impl FormatType {
    /// The number stored in the header
    pub fn number(self) -> u16 {
        self.into()
    }
}
