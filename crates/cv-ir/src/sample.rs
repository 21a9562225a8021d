//! Sample-info handle shared between channel and mixer.

slotmap::new_key_type! {
    /// Key for referencing wave data in the externally owned sample store.
    pub struct WaveKey;
}

/// Non-owning reference to a stored waveform and its playback metadata.
///
/// A channel keeps one of these for its whole lifetime. The channel itself
/// reads only `mid_c_freq` for pitch derivation; the wave handle and loop
/// fields pass through to the mixer untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleInfo {
    /// Wave data handle in the sample store.
    pub wave: WaveKey,
    /// Playback rate in Hz when the sample sounds at MIDI key 60.
    pub mid_c_freq: f32,
    /// Loop start position (in frames).
    pub loop_start: u32,
    /// End of sample data (in frames).
    pub end_pos: u32,
    /// Whether playback jumps back to `loop_start` at `end_pos`.
    pub loop_enabled: bool,
}

impl SampleInfo {
    /// Create a non-looping sample reference.
    pub fn one_shot(wave: WaveKey, mid_c_freq: f32, end_pos: u32) -> Self {
        Self { wave, mid_c_freq, loop_start: 0, end_pos, loop_enabled: false }
    }

    /// Create a looping sample reference.
    pub fn looping(wave: WaveKey, mid_c_freq: f32, loop_start: u32, end_pos: u32) -> Self {
        Self { wave, mid_c_freq, loop_start, end_pos, loop_enabled: true }
    }
}
