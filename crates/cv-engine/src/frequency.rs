//! Pitch-to-frequency conversion for sample playback.
//!
//! Converts a MIDI key plus a fractional pitch-bend offset into the
//! playback frequency for a sample with a known native rate.

/// The MIDI key at which a sample plays back at its native `mid_c_freq`.
pub const MIDDLE_C_KEY: u8 = 60;

/// Pitch-bend units per octave (64 units per semitone).
pub const PITCH_UNITS_PER_OCTAVE: i16 = 768;

/// Derive the playback frequency for a MIDI key with a pitch-bend offset.
///
/// `pitch` is a signed bend in 1/768-octave units. Key 60 with zero bend
/// plays the sample at `mid_c_freq` exactly; every 12 keys or 768 bend
/// units doubles the frequency.
pub fn key_to_freq(mid_c_freq: f32, midi_key: u8, pitch: i16) -> f32 {
    let octaves = (midi_key as f32 - MIDDLE_C_KEY as f32) / 12.0
        + pitch as f32 / PITCH_UNITS_PER_OCTAVE as f32;
    mid_c_freq * libm::exp2f(octaves)
}
