#![doc = r#"
Finding the bytes of each track

The length stored in an `MTrk` header is not trusted. Files written by
some sequencers declare lengths that are a few bytes short (or long) of
the events they actually hold, and trusting them either truncates the
track or reads into the next chunk.

Instead, the input is scanned in two passes:

1. a 4 byte window slides over the whole input and records every offset
   matching `MTrk`, without assuming chunks are aligned;
2. for each recorded tag, the bytes from just after the tag and its length
   are scanned for the end-of-track marker `FF 2F`, and the track ends
   3 bytes after the `FF`, past the marker's zero length byte.

Each track's end depends only on its own start. A tag is skipped only when
it lies inside the body of the previous track as bounded by both its
declared length and its end-of-track marker, such as `MTrk` spelled out in
a text event.
"#]

use core::ops::Range;

use alloc::vec::Vec;

use super::chunk::{CHUNK_HEADER_LEN, MTRK};
use crate::reader::{DecodeStage, ReadResult, ReaderError, ReaderErrorKind};

const END_OF_TRACK_MARKER: [u8; 2] = [0xFF, 0x2F];

/// Where one track lives in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackRange {
    start: usize,
    declared_length: u32,
    end: usize,
}

impl TrackRange {
    /// Offset of the `MTrk` tag
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Offset of the first event, just past the chunk header
    pub const fn body_start(&self) -> usize {
        self.start + CHUNK_HEADER_LEN
    }

    /// One past the last byte of the end-of-track event
    pub const fn end(&self) -> usize {
        self.end
    }

    /// The whole track, header included
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The event bytes, from [`body_start`](Self::body_start) to [`end`](Self::end)
    pub const fn body(&self) -> Range<usize> {
        self.body_start()..self.end
    }

    /// The payload length the chunk header claims
    pub const fn declared_length(&self) -> u32 {
        self.declared_length
    }

    /// True if the declared length agrees with the end-of-track marker
    pub const fn length_matches(&self) -> bool {
        self.body_start() + self.declared_length as usize == self.end
    }

    /// True if `offset` is inside the body both by declared length and by
    /// end-of-track marker
    fn encloses(&self, offset: usize) -> bool {
        let declared_end = self
            .body_start()
            .saturating_add(self.declared_length as usize);
        offset >= self.body_start() && offset < declared_end.min(self.end)
    }
}

/// The byte ranges of every track in a file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackTable {
    tracks: Vec<TrackRange>,
    /// `MTrk` offsets of the trailing tracks with no end-of-track marker
    unterminated: Vec<usize>,
}

impl TrackTable {
    /// Scan `bytes`, the whole file, for tracks.
    pub fn scan(bytes: &[u8]) -> Self {
        Self::scan_from(bytes, 0)
    }

    /// Scan `bytes`, the whole file, for tracks starting at or after `from`.
    pub fn scan_from(bytes: &[u8], from: usize) -> Self {
        let tags = find_all(bytes, from, &MTRK);
        let mut table = Self::default();
        let mut previous: Option<TrackRange> = None;

        for start in tags {
            if previous.is_some_and(|track| track.encloses(start)) {
                continue;
            }
            let Some(track) = locate(bytes, start) else {
                table.unterminated.push(start);
                previous = None;
                continue;
            };
            if !track.length_matches() {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    track = table.tracks.len(),
                    declared = track.declared_length(),
                    actual = track.end() - track.body_start(),
                    "track length disagrees with its end-of-track marker; using the marker"
                );
            }
            table.tracks.push(track);
            previous = Some(track);
        }

        table
    }

    /// Number of complete tracks found
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// True if no complete track was found
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// All complete tracks, in file order
    pub fn tracks(&self) -> &[TrackRange] {
        &self.tracks
    }

    /// The range of track `index`.
    ///
    /// Fails with [`ReaderErrorKind::UnterminatedTrack`] if that track has an
    /// `MTrk` tag but no end-of-track marker, and with
    /// [`ReaderErrorKind::TrackNotFound`] if it has no `MTrk` tag at all.
    pub fn get(&self, index: usize) -> ReadResult<TrackRange> {
        let stage = DecodeStage::Locate { track: index };
        if let Some(track) = self.tracks.get(index) {
            return Ok(*track);
        }
        let err = match self.unterminated.get(index - self.tracks.len()) {
            Some(&start) => ReaderError::new(start, ReaderErrorKind::UnterminatedTrack),
            None => {
                let found = self.tracks.len() + self.unterminated.len();
                ReaderError::new(
                    self.tracks.last().map_or(0, TrackRange::end),
                    ReaderErrorKind::TrackNotFound { index, found },
                )
            }
        };
        Err(err.in_stage(stage))
    }
}

/// The track whose `MTrk` tag is at `start`, if it has an end-of-track marker.
fn locate(bytes: &[u8], start: usize) -> Option<TrackRange> {
    let body_start = start + CHUNK_HEADER_LEN;
    let marker = find(bytes, body_start, &END_OF_TRACK_MARKER)?;
    // FF 2F 00
    let end = marker + 3;
    if end > bytes.len() {
        return None;
    }
    let declared = bytes.get(start + 4..body_start)?.try_into().ok()?;
    Some(TrackRange {
        start,
        declared_length: u32::from_be_bytes(declared),
        end,
    })
}

/// Every offset at or after `from` where `needle` starts.
fn find_all(bytes: &[u8], from: usize, needle: &[u8]) -> Vec<usize> {
    bytes
        .get(from..)
        .unwrap_or_default()
        .windows(needle.len())
        .enumerate()
        .filter(|(_, window)| *window == needle)
        .map(|(at, _)| from + at)
        .collect()
}

/// First offset at or after `from` where `needle` starts.
fn find(bytes: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    bytes
        .get(from..)?
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|at| from + at)
}
