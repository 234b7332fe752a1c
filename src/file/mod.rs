#![doc = r#"
Rusty representation of a [`MidiFile`]

Decoding runs in three steps:

1. the `MThd` chunk is read into a [`MidiFileHeader`];
2. a [`TrackTable`] records where every track starts and where its
   end-of-track marker actually is;
3. each requested track is decoded from its own byte range with
   [`decode_track`].

Any error aborts the whole decode. No partially decoded file is returned.
"#]

mod chunk;
pub use chunk::*;

mod format;
pub use format::*;

mod header;
pub use header::*;

mod locate;
pub use locate::*;

mod meta;
pub use meta::*;

mod options;
pub use options::*;

mod timing;
pub use timing::*;

mod track;
pub use track::*;

use alloc::vec::Vec;

use crate::{
    message::channel::{ChannelEventDecoder, ChannelVoiceMessage, VoiceDecoder},
    reader::{DecodeStage, ReadResult, Reader},
};

#[doc = r#"
A decoded Standard MIDI File

Tracks appear in the order they were requested, which for the default
options is file order.
"#]
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MidiFile<E = ChannelVoiceMessage> {
    header: MidiFileHeader,
    tracks: Vec<Track<E>>,
}

impl MidiFile {
    /// Decode every track of a file held in memory
    pub fn parse<B>(bytes: B) -> ReadResult<Self>
    where
        B: AsRef<[u8]>,
    {
        Self::parse_with(bytes.as_ref(), &DecodeOptions::default(), &mut VoiceDecoder)
    }

    /// Load a whole file from `source`, then decode every track
    #[cfg(feature = "std")]
    pub fn read_from<R>(mut source: R) -> Result<Self, crate::reader::LoadError>
    where
        R: std::io::Read,
    {
        let mut bytes = Vec::new();
        source.read_to_end(&mut bytes)?;
        Ok(Self::parse(bytes)?)
    }
}

impl<E> MidiFile<E> {
    /// Decode a file, choosing the tracks and the channel event decoder
    pub fn parse_with<D>(
        bytes: &[u8],
        options: &DecodeOptions,
        decoder: &mut D,
    ) -> ReadResult<Self>
    where
        D: ChannelEventDecoder<Event = E>,
    {
        let mut reader = Reader::from_byte_slice(bytes);
        let header = MidiFileHeader::read(&mut reader)?;
        // the declared MThd length is not trusted any more than MTrk lengths
        let table = TrackTable::scan_from(bytes, header::HEADER_FIELDS_END);

        let indices = options.tracks.indices(header.track_count());
        let mut tracks = Vec::with_capacity(indices.len());
        for index in indices {
            let range = table.get(index)?;
            let mut events = reader.window(range.body_start(), range.end());
            let track = decode_track(&mut events, decoder)
                .map_err(|e| e.in_stage(DecodeStage::Events { track: index }))?;

            #[cfg(feature = "tracing")]
            tracing::debug!(
                track = index,
                events = track.events().len(),
                "decoded track"
            );
            tracks.push(track);
        }

        Ok(Self { header, tracks })
    }

    /// Returns header info
    pub fn header(&self) -> &MidiFileHeader {
        &self.header
    }

    /// Returns the format type for the file.
    pub fn format_type(&self) -> FormatType {
        self.header.format_type()
    }

    /// Returns the raw and decoded division
    pub fn division(&self) -> &Division {
        self.header.division()
    }

    /// Returns the decoded division
    pub fn timing(&self) -> Timing {
        self.header.timing()
    }

    /// Returns the decoded tracks
    pub fn tracks(&self) -> &[Track<E>] {
        &self.tracks
    }

    /// Takes the decoded tracks
    pub fn into_tracks(self) -> Vec<Track<E>> {
        self.tracks
    }
}
