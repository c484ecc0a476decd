//! Collision-avoiding random placement.
//!
//! New words are dropped at random spots inside the padded field, away from
//! the central clear zone and from every word already placed. Placement is a
//! bounded random search: after [`PlacementParams::max_attempts`] rejected
//! candidates one last unchecked candidate is accepted, so a crowded field
//! degrades into an occasional overlap instead of a failure.

use crate::config::Config;
use crate::field::Field;
use crate::geometry::{distance, Rect};
use glam::Vec2;
use rand::Rng;

/// Default number of candidates tried before falling back.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 240;

/// Constraints applied to every candidate position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementParams {
    /// Radius of the clear zone around the field center.
    pub safe_radius: f32,
    /// Margin kept clear along the field edges.
    pub padding: f32,
    /// Extra gap required between placed boxes.
    pub spacing: f32,
    pub max_attempts: u32,
}

impl PlacementParams {
    pub fn from_config(config: &Config) -> Self {
        Self {
            safe_radius: config.safe_radius,
            padding: config.padding,
            spacing: config.word_spacing,
            max_attempts: config.placement_attempts,
        }
    }
}

impl Default for PlacementParams {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Outcome of a placement search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub position: Vec2,
    /// Candidates examined, including the accepted one.
    pub attempts: u32,
    /// `true` when every checked candidate was rejected and the position
    /// was taken unchecked.
    pub fallback: bool,
}

/// Find a center position for a box of `size` among `existing` boxes.
pub fn find_position<R: Rng + ?Sized>(
    size: Vec2,
    existing: &[Rect],
    field: &Field,
    params: &PlacementParams,
    rng: &mut R,
) -> Placement {
    let half = size * 0.5;
    let bounds = field.padded_bounds(half, params.padding);
    let center = field.center();
    let clearance = params.safe_radius + half.max_element();

    for attempt in 1..=params.max_attempts {
        let candidate = bounds.random_point(rng);

        if distance(candidate, center) < clearance {
            continue;
        }

        let rect = Rect::new(candidate, size);
        if !existing.iter().any(|other| rect.intersects(other, params.spacing)) {
            return Placement {
                position: candidate,
                attempts: attempt,
                fallback: false,
            };
        }
    }

    log::trace!(
        "placement exhausted {} attempts for {:.1}x{:.1} box, accepting unchecked position",
        params.max_attempts,
        size.x,
        size.y
    );

    Placement {
        position: bounds.random_point(rng),
        attempts: params.max_attempts + 1,
        fallback: true,
    }
}
