//! Scroll fade and resize rescaling.

use crate::geometry::clamp;
use crate::word::Word;
use glam::Vec2;

/// Scroll progress past which the field stops shrinking.
pub const MAX_PROGRESS: f32 = 1.2;

/// Global presentation multipliers derived from the scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollResponse {
    pub scale: f32,
    pub opacity: f32,
}

impl Default for ScrollResponse {
    fn default() -> Self {
        Self {
            scale: 1.0,
            opacity: 1.0,
        }
    }
}

impl ScrollResponse {
    /// Fraction of the viewport scrolled past, clamped to `[0, 1.2]`.
    ///
    /// A non-positive viewport height counts as no progress.
    pub fn progress(offset: f32, viewport_height: f32) -> f32 {
        if viewport_height <= 0.0 {
            return 0.0;
        }
        clamp(offset / viewport_height, 0.0, MAX_PROGRESS)
    }

    pub fn from_offset(offset: f32, viewport_height: f32) -> Self {
        let progress = Self::progress(offset, viewport_height);
        Self {
            scale: clamp(1.0 - progress * 0.55, 0.25, 1.0),
            opacity: clamp(1.0 - progress * 0.7, 0.1, 1.0),
        }
    }
}

/// Stretch every word's position from `previous` to `current` field size.
///
/// Axes whose previous size is not positive are left untouched: there is no
/// meaningful ratio to apply, and the next placement will fix them up.
pub fn rescale_positions(words: &mut [Word], previous: Vec2, current: Vec2) {
    let ratio_x = (previous.x > 0.0).then(|| current.x / previous.x);
    let ratio_y = (previous.y > 0.0).then(|| current.y / previous.y);

    for word in words {
        if let Some(rx) = ratio_x {
            word.position.x *= rx;
        }
        if let Some(ry) = ratio_y {
            word.position.y *= ry;
        }
    }
}
