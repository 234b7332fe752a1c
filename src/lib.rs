#![doc = r#"
A decoder for Standard MIDI Files (SMF).

`smf-decode` turns the bytes of a `.mid` file into a [`MidiFile`]: the header's
format and division, plus an ordered list of [`Track`]s holding
delta-timed [`TrackEvent`]s.

Real-world files often carry `MTrk` chunk lengths that do not match the
events they contain. This crate locates each track by its `MTrk` tag and
then treats the end-of-track meta event (`FF 2F 00`) as the end of the
track, whatever the declared length says.

# Example
```rust
# use smf_decode::prelude::*;
let bytes = [
    b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 0, 0, 1, 0, 96,
    b'M', b'T', b'r', b'k', 0, 0, 0, 12,
    0x00, 0x90, 0x3C, 0x64, // note on
    0x60, 0x80, 0x3C, 0x40, // note off
    0x00, 0xFF, 0x2F, 0x00, // end of track
];
let file = MidiFile::parse(&bytes).unwrap();

assert_eq!(file.format_type(), FormatType::SingleMultiChannel);
assert_eq!(file.timing().ticks_per_quarter_note(), Some(96));
assert_eq!(file.tracks()[0].events().len(), 3);
```

# Feature flags
- `std` (default): [`std::io::Read`] input through [`MidiFile::read_from`].
- `tracing` (default): diagnostics for quirks such as mismatched chunk lengths.
- `serde`: `Serialize`/`Deserialize` for the decoded document.
"#]
#![warn(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod file;
pub mod message;
pub mod reader;

pub use file::{MidiFile, Track, TrackEvent};

#[doc = r#"
Common imports for decoding MIDI files
"#]
pub mod prelude {
    pub use crate::file::*;
    pub use crate::message::channel::*;
    pub use crate::reader::{
        DecodeStage, HeaderError, MetaError, ReadResult, Reader, ReaderError, ReaderErrorKind,
        SmpteError,
    };
    #[cfg(feature = "std")]
    pub use crate::reader::LoadError;
}
