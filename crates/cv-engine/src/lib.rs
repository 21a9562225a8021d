//! Per-voice channel engine for chipvoice.
//!
//! Owns one note's lifecycle: the amplitude envelope state machine,
//! block-interpolated stereo volume for click-free mixing, and
//! pitch/frequency derivation. The sequencer drives it once per global
//! tick; the mixer queries volume and frequency between ticks.

#![cfg_attr(not(feature = "std"), no_std)]

mod channel;
mod frequency;
mod volume;

pub use channel::{Channel, EnvPhase, NoteTick};
pub use frequency::{key_to_freq, MIDDLE_C_KEY, PITCH_UNITS_PER_OCTAVE};
pub use volume::BlockVol;

/// Interpolation sub-frames per global tick. Envelope level and gain
/// changes are blended linearly across this many finer steps.
pub const INTERFRAMES: u8 = 4;
