//! Inactivity tracking and the free/orbit mode switch.
//!
//! Instead of a scheduled callback the monitor keeps a single deadline
//! timestamp. Every activity pushes the deadline out; [`ActivityMonitor::poll`]
//! compares it against the current time and fires the orbit transition once
//! when it has passed. Because time is always passed in, tests can step
//! through hours of idle time without waiting.

use crate::config::Config;
use crate::geometry::{angle_between, distance, random_between};
use crate::word::{Motion, Word};
use glam::Vec2;
use rand::Rng;

/// Clearance kept beyond the safe zone by orbit rings.
pub const ORBIT_CLEARANCE: f32 = 60.0;
/// Radius step between staggered rings.
pub const ORBIT_RING_STEP: f32 = 16.0;
/// Number of distinct stagger rings.
pub const ORBIT_RINGS: usize = 5;
/// Upper bound of the per-word random radius jitter.
pub const ORBIT_JITTER: f32 = 18.0;

/// Collective behaviour of the word set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Free,
    Orbit,
}

/// Mode change the caller must apply to the words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Words should start orbiting ([`enter_orbit`]).
    Enter,
    /// Words should come to rest and drift again ([`leave_orbit`]).
    Leave,
}

/// Debounced inactivity detector.
#[derive(Clone, Debug)]
pub struct ActivityMonitor {
    mode: Mode,
    deadline: Option<f64>,
    hidden: bool,
    delay_ms: f64,
}

impl ActivityMonitor {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            mode: Mode::Free,
            deadline: None,
            hidden: false,
            delay_ms,
        }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Timestamp at which orbit will start, if armed.
    #[inline]
    pub fn deadline(&self) -> Option<f64> {
        self.deadline
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    #[inline]
    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }

    /// Record user activity at `now`.
    ///
    /// Leaves orbit if needed and re-arms the deadline, replacing any
    /// pending one.
    pub fn register(&mut self, now: f64) -> Option<Transition> {
        self.deadline = Some(now + self.delay_ms);
        if self.mode == Mode::Orbit {
            self.mode = Mode::Free;
            Some(Transition::Leave)
        } else {
            None
        }
    }

    /// Fire the orbit transition if the deadline has passed.
    ///
    /// Returns `Some(Transition::Enter)` at most once per armed deadline.
    pub fn poll(&mut self, now: f64) -> Option<Transition> {
        if self.hidden {
            return None;
        }
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                if self.mode == Mode::Orbit {
                    return None;
                }
                self.mode = Mode::Orbit;
                Some(Transition::Enter)
            }
            _ => None,
        }
    }

    /// Track host visibility.
    ///
    /// Hiding disarms the deadline; becoming visible again counts as
    /// activity.
    pub fn set_hidden(&mut self, hidden: bool, now: f64) -> Option<Transition> {
        self.hidden = hidden;
        if hidden {
            self.deadline = None;
            None
        } else {
            self.register(now)
        }
    }
}

/// Put every word on an orbit around `center`.
///
/// Each word keeps its current angle and at least its current distance, with
/// a ring stagger by index and random jitter so words do not share a track.
pub fn enter_orbit<R: Rng + ?Sized>(words: &mut [Word], center: Vec2, config: &Config, rng: &mut R) {
    let min_radius = config.safe_radius + ORBIT_CLEARANCE;

    for (index, word) in words.iter_mut().enumerate() {
        let baseline = min_radius.max(distance(word.position, center));
        let stagger = (index % ORBIT_RINGS) as f32 * ORBIT_RING_STEP;
        let jitter = random_between(rng, 0.0, ORBIT_JITTER);

        word.motion = Motion::Orbiting {
            angle: angle_between(center, word.position),
            radius: baseline + stagger + jitter,
            speed: random_between(rng, config.orbit_speed_min, config.orbit_speed_max),
        };
    }
}

/// Release every word from orbit, at rest.
pub fn leave_orbit(words: &mut [Word]) {
    for word in words {
        word.motion = Motion::REST;
    }
}
