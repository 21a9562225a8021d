//! Note data bound to a playing channel.

/// A note event, owned exclusively by one channel for its lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Note {
    /// MIDI key number (60 = middle C).
    pub midi_key: u8,
    /// Velocity (0-127). Baked into the channel gain once per volume change.
    pub velocity: u8,
    /// Remaining duration in ticks, or [`Note::SUSTAIN`] to hold the note
    /// until an explicit release.
    pub length: i32,
}

impl Note {
    /// Length sentinel: sustain indefinitely until release.
    pub const SUSTAIN: i32 = -1;

    /// Create a note with a tick countdown.
    pub fn with_length(midi_key: u8, velocity: u8, length: i32) -> Self {
        Self { midi_key, velocity, length }
    }

    /// Create a note that holds until an explicit release.
    pub fn sustained(midi_key: u8, velocity: u8) -> Self {
        Self { midi_key, velocity, length: Self::SUSTAIN }
    }
}
