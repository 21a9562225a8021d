//! Shared data types for the chipvoice playback engine.
//!
//! The sequencer driver, the mixer, and the per-voice channel engine all
//! exchange these types. The channel engine consumes them read-only,
//! except for the note length which it counts down tick by tick.
//!
//! Designed to be `no_std` compatible.

#![cfg_attr(not(feature = "std"), no_std)]

mod adsr;
mod note;
mod sample;
mod track;

pub use adsr::Adsr;
pub use note::Note;
pub use sample::{SampleInfo, WaveKey};
pub use track::TrackKey;
