//! Channel state for one sounding note.

use cv_ir::{Adsr, Note, SampleInfo, TrackKey};

use crate::frequency::key_to_freq;
use crate::volume::BlockVol;
use crate::INTERFRAMES;

/// Envelope lifecycle phase.
///
/// Ordered so that "earlier than `Release`" is a plain comparison. A
/// channel only ever moves forward through these; `Dead` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum EnvPhase {
    /// Freshly constructed; the first step captures the fade origin.
    Init,
    /// Level climbing by the attack increment.
    Attack,
    /// Level scaled down toward the sustain floor.
    Decay,
    /// Holding at the sustain level until release.
    Sustain,
    /// Level scaled down toward silence.
    Release,
    /// Silent; one last interpolation window before reclaim.
    FadeOut,
    /// Terminal. The owner may recycle the channel.
    Dead,
}

/// Outcome of a note-length tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoteTick {
    /// The note keeps sounding.
    Active,
    /// The countdown hit zero on this tick and triggered the release.
    JustReleased,
    /// The channel is already at `Release` or later.
    Inactive,
}

/// One synthesized voice: a note, its envelope run, and its output gain.
#[derive(Clone, Debug)]
pub struct Channel {
    owner: TrackKey,
    info: SampleInfo,
    adsr: Adsr,
    note: Note,
    fixed: bool,
    freq: f32,

    phase: EnvPhase,
    /// Current envelope level (0-255).
    env_level: u8,
    /// Level at the start of the current interpolation window.
    from_env_level: u8,
    /// Sub-frame counter within the current tick, always < INTERFRAMES.
    inter_step: u8,

    /// Velocity-scaled target gains.
    left_vol: u8,
    right_vol: u8,
    /// Gains captured at the start of the current fade window.
    from_left_vol: u8,
    from_right_vol: u8,
}

impl Channel {
    /// Bind a new channel to `owner`, sounding `note` with the given
    /// envelope, initial stereo gain (0-255 each) and pitch bend.
    ///
    /// `fixed` marks fixed-rate playback (drum hits): the frequency is
    /// still derived once from the construction arguments, but the owner
    /// is expected not to send further pitch changes.
    pub fn new(
        owner: TrackKey,
        info: SampleInfo,
        adsr: Adsr,
        note: Note,
        left_vol: u8,
        right_vol: u8,
        pitch: i16,
        fixed: bool,
    ) -> Self {
        let mut ch = Self {
            owner,
            info,
            adsr,
            note,
            fixed,
            freq: 0.0,
            phase: EnvPhase::Init,
            env_level: 0,
            from_env_level: 0,
            inter_step: 0,
            left_vol: 0,
            right_vol: 0,
            from_left_vol: 0,
            from_right_vol: 0,
        };
        ch.set_volume(left_vol, right_vol);
        ch.set_pitch(pitch);
        ch
    }

    /// Owning track identity.
    pub fn owner(&self) -> TrackKey {
        self.owner
    }

    /// Sample handle for the mixer.
    pub fn sample_info(&self) -> &SampleInfo {
        &self.info
    }

    /// Current envelope phase.
    pub fn phase(&self) -> EnvPhase {
        self.phase
    }

    /// MIDI key of the sounding note.
    pub fn midi_key(&self) -> u8 {
        self.note.midi_key
    }

    /// Whether the channel plays at a fixed rate.
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Derived playback frequency in Hz.
    pub fn frequency(&self) -> f32 {
        self.freq
    }

    /// Recompute the playback frequency for a new pitch-bend value.
    pub fn set_pitch(&mut self, pitch: i16) {
        self.freq = key_to_freq(self.info.mid_c_freq, self.note.midi_key, pitch);
    }

    /// Update the target stereo gain from base gains in 0-255.
    ///
    /// The note velocity is baked in here, once. After release the gains
    /// are frozen so the decay shape is preserved.
    pub fn set_volume(&mut self, left_vol: u8, right_vol: u8) {
        if self.phase < EnvPhase::Release {
            self.left_vol = (self.note.velocity as u32 * left_vol as u32 / 128) as u8;
            self.right_vol = (self.note.velocity as u32 * right_vol as u32 / 128) as u8;
        }
    }

    /// Restart the gain fade window from the current targets.
    ///
    /// The mixer calls this after consuming a block so the next ramp
    /// originates from the latest gain values.
    pub fn refresh_vol_origin(&mut self) {
        self.from_left_vol = self.left_vol;
        self.from_right_vol = self.right_vol;
    }

    /// Force the envelope into `Release`.
    ///
    /// Irreversible; a no-op at `Release` or later. Resets the sub-frame
    /// counter and restarts the gain fade from the current targets.
    pub fn release(&mut self) {
        if self.phase < EnvPhase::Release {
            self.phase = EnvPhase::Release;
            self.inter_step = 0;
            self.refresh_vol_origin();
        }
    }

    /// Count down the note length by one global tick.
    ///
    /// A positive length decrements and triggers the release when it hits
    /// zero; [`Note::SUSTAIN`] passes through untouched.
    ///
    /// # Panics
    ///
    /// Panics if the remaining length is neither positive nor the sustain
    /// sentinel: that note state can only come from a caller bug, never
    /// from ticking a well-formed note.
    pub fn tick_note(&mut self) -> NoteTick {
        if self.phase >= EnvPhase::Release {
            return NoteTick::Inactive;
        }
        if self.note.length > 0 {
            self.note.length -= 1;
            if self.note.length == 0 {
                self.release();
                NoteTick::JustReleased
            } else {
                NoteTick::Active
            }
        } else if self.note.length == Note::SUSTAIN {
            NoteTick::Active
        } else {
            panic!("note length out of range: {}", self.note.length);
        }
    }

    /// Advance the envelope state machine by one global tick.
    pub fn step_envelope(&mut self) {
        match self.phase {
            EnvPhase::Init => {
                self.from_left_vol = self.left_vol;
                self.from_right_vol = self.right_vol;
                // An instant attack starts fully open so the onset does
                // not fade in from silence.
                self.from_env_level = if self.adsr.attack == 0xFF { 0xFF } else { 0x00 };
                self.env_level = self.adsr.attack;
                self.inter_step = 0;
                self.phase = EnvPhase::Attack;
            }
            EnvPhase::Attack => {
                if self.next_window() {
                    let new_level = self.env_level as u16 + self.adsr.attack as u16;
                    if new_level >= 0xFF {
                        self.env_level = 0xFF;
                        self.phase = EnvPhase::Decay;
                    } else {
                        self.env_level = new_level as u8;
                    }
                }
            }
            EnvPhase::Decay => {
                if self.next_window() {
                    let new_level = ((self.env_level as u16 * self.adsr.decay as u16) >> 8) as u8;
                    if new_level <= self.adsr.sustain {
                        self.env_level = self.adsr.sustain;
                        self.phase = EnvPhase::Sustain;
                    } else {
                        self.env_level = new_level;
                    }
                }
            }
            EnvPhase::Sustain => {
                // Hold; only an explicit release moves the phase on.
                self.next_window();
            }
            EnvPhase::Release => {
                if self.next_window() {
                    let new_level = ((self.env_level as u16 * self.adsr.release as u16) >> 8) as u8;
                    if new_level == 0 {
                        self.env_level = 0;
                        self.phase = EnvPhase::FadeOut;
                    } else {
                        self.env_level = new_level;
                    }
                }
            }
            EnvPhase::FadeOut => {
                if self.next_window() {
                    self.phase = EnvPhase::Dead;
                }
            }
            EnvPhase::Dead => {}
        }
    }

    /// Interpolated stereo gain for the current audio block.
    ///
    /// Blends the envelope linearly from the window's start level toward
    /// the current level, at fractions `s/N` (block start) and `(s+1)/N`
    /// (block end), scaled by the matching fade-origin and target gains.
    /// Pure query; never mutates state.
    pub fn volume(&self) -> BlockVol {
        let base = self.from_env_level as f32;
        let delta = (self.env_level as f32 - base) / INTERFRAMES as f32;
        let start_env = base + delta * self.inter_step as f32;
        let end_env = base + delta * (self.inter_step + 1) as f32;
        BlockVol {
            left_start: self.from_left_vol as f32 * start_env / 65536.0,
            right_start: self.from_right_vol as f32 * start_env / 65536.0,
            left_end: self.left_vol as f32 * end_env / 65536.0,
            right_end: self.right_vol as f32 * end_env / 65536.0,
        }
    }

    /// Advance the sub-frame counter; true when a new interpolation
    /// window begins. Opening a window captures the envelope start level
    /// and re-zeroes the counter.
    fn next_window(&mut self) -> bool {
        self.inter_step += 1;
        if self.inter_step >= INTERFRAMES {
            self.from_env_level = self.env_level;
            self.inter_step = 0;
            true
        } else {
            false
        }
    }
}
