#![doc = r#"
MIDI messages that appear inside track chunks

Only channel voice messages are decoded here. Meta and system exclusive
events are specific to files and live in [`crate::file`].
"#]

pub mod channel;
