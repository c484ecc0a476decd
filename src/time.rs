//! Frame timing.
//!
//! The host drives the engine with the timestamps its frame callback
//! receives (milliseconds, monotonic). [`FrameClock`] turns consecutive
//! timestamps into the normalized step used by the integrator and keeps
//! frame and FPS counters.
//!
//! # Example
//!
//! ```ignore
//! use driftfield::time::FrameClock;
//!
//! let mut clock = FrameClock::new();
//!
//! // In the frame callback:
//! let dt = clock.tick(timestamp_ms);
//!
//! println!("Delta: {:.2}ms", clock.delta_ms());
//! println!("Frame: {}", clock.frame());
//! println!("FPS: {:.1}", clock.fps());
//! ```

use crate::physics::{normalized_step, BASELINE_FRAME_MS};

/// Converts frame timestamps into normalized simulation steps.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Timestamp of the previous frame.
    last_frame_ms: Option<f64>,
    /// Time since the previous frame.
    delta_ms: f64,
    /// Normalized step of the last frame.
    step: f32,
    /// Total frames ticked.
    frame_count: u64,
    /// Calculated FPS (updated periodically).
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Timestamp of last FPS calculation.
    fps_update_ms: Option<f64>,
    /// How often to update the FPS calculation.
    fps_update_interval_ms: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_frame_ms: None,
            delta_ms: 0.0,
            step: 1.0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_ms: None,
            fps_update_interval_ms: 500.0,
        }
    }

    /// Advance to the frame at `now_ms` and return its normalized step.
    ///
    /// The very first frame has no predecessor and is treated as exactly one
    /// baseline frame. Timestamps that go backwards count as zero elapsed
    /// time.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        self.delta_ms = match self.last_frame_ms {
            Some(last) => (now_ms - last).max(0.0),
            None => BASELINE_FRAME_MS,
        };
        self.last_frame_ms = Some(now_ms);
        self.step = normalized_step(self.delta_ms);
        self.frame_count += 1;

        match self.fps_update_ms {
            None => {
                self.fps_update_ms = Some(now_ms);
                self.fps_frame_count = self.frame_count;
            }
            Some(since) => {
                let elapsed = now_ms - since;
                if elapsed >= self.fps_update_interval_ms {
                    let frames = self.frame_count - self.fps_frame_count;
                    self.fps = (frames as f64 / (elapsed / 1000.0)) as f32;
                    self.fps_frame_count = self.frame_count;
                    self.fps_update_ms = Some(now_ms);
                }
            }
        }

        self.step
    }

    /// Milliseconds between the last two frames.
    #[inline]
    pub fn delta_ms(&self) -> f64 {
        self.delta_ms
    }

    /// Normalized step of the last frame.
    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Timestamp of the last frame, if any.
    #[inline]
    pub fn last_frame_ms(&self) -> Option<f64> {
        self.last_frame_ms
    }

    /// Forget the previous frame so the next tick starts fresh.
    ///
    /// Used when the host stops and later resumes its frame loop.
    pub fn reset(&mut self) {
        *self = Self {
            fps_update_interval_ms: self.fps_update_interval_ms,
            ..Self::new()
        };
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
