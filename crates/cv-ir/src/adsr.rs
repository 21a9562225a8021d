//! Envelope configuration.

/// ADSR settings for one voice, all in 0-255.
///
/// `attack` is added to the envelope level on each attack trigger,
/// `decay` and `release` scale the level by `x/256` per trigger, and
/// `sustain` is the floor the decay settles at. An attack of `0xFF`
/// opens the envelope fully on the first step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Adsr {
    pub attack: u8,
    pub decay: u8,
    pub sustain: u8,
    pub release: u8,
}

impl Adsr {
    pub fn new(attack: u8, decay: u8, sustain: u8, release: u8) -> Self {
        Self { attack, decay, sustain, release }
    }
}
