use alloc::vec::Vec;

/// Which tracks [`MidiFile::parse_with`](super::MidiFile::parse_with) decodes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TrackSelection {
    /// Every track the header declares
    #[default]
    All,
    /// Only these zero-based indices, in this order
    Indices(Vec<usize>),
}

impl TrackSelection {
    /// The indices to decode for a header declaring `declared` tracks.
    pub fn indices(&self, declared: u16) -> Vec<usize> {
        match self {
            Self::All => (0..usize::from(declared)).collect(),
            Self::Indices(indices) => indices.clone(),
        }
    }
}

/// Options for decoding a file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Tracks to decode
    pub tracks: TrackSelection,
}

impl DecodeOptions {
    /// Decode only the given tracks
    pub fn with_tracks(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.tracks = TrackSelection::Indices(indices.into_iter().collect());
        self
    }
}
