//! Block-interpolated output gain.

/// Stereo gain ramp for one audio block.
///
/// Holds the gain at the start and at the end of the block for each side.
/// The mixer fades linearly between them across the block instead of
/// stepping the gain discontinuously.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BlockVol {
    pub left_start: f32,
    pub right_start: f32,
    pub left_end: f32,
    pub right_end: f32,
}

impl BlockVol {
    /// A fully silent ramp.
    pub const fn silence() -> Self {
        Self { left_start: 0.0, right_start: 0.0, left_end: 0.0, right_end: 0.0 }
    }
}
