//! Geometry helpers shared by placement and physics.
//!
//! Everything here is a pure function of its inputs (plus an RNG where noted),
//! so the placement engine and the integrator can be tested without an engine.

use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;

/// Clamp `value` into `[min, max]`.
///
/// Unlike [`f32::clamp`] this never panics: when `min > max` the result is
/// `max`, which is what the layout code expects for fields smaller than their
/// padding.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Uniform random value in `[min, max)`.
///
/// Degenerate ranges (`min == max`, or inverted) are tolerated and simply
/// interpolate between the two ends.
#[inline]
pub fn random_between<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + rng.gen::<f32>() * (max - min)
}

/// Return a shuffled copy of `items` (Fisher–Yates, via `rand`).
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    copy.shuffle(rng);
    copy
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Angle in radians of the vector pointing from `from` to `to`.
#[inline]
pub fn angle_between(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Axis-aligned rectangle described by its center and full size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// Half of the rectangle's extent on each axis.
    #[inline]
    pub fn half_extent(&self) -> Vec2 {
        self.size * 0.5
    }

    /// Whether the two rectangles overlap once each is grown by `spacing`.
    ///
    /// Both axes must overlap for the rectangles to intersect.
    pub fn intersects(&self, other: &Rect, spacing: f32) -> bool {
        let d = (other.center - self.center).abs();
        let reach = (other.size + self.size) * 0.5 + Vec2::splat(spacing);
        d.x < reach.x && d.y < reach.y
    }
}

/// Closed range of valid center positions on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Bounds for the center of a box with `half_extent` inside a field of
    /// `field_size`, keeping `padding` clear on every edge.
    pub fn inset(field_size: Vec2, half_extent: Vec2, padding: f32) -> Self {
        let margin = half_extent + Vec2::splat(padding);
        Self {
            min: margin,
            max: field_size - margin,
        }
    }

    #[inline]
    pub fn midpoint(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Whether an axis has no room (the field is smaller than the padded box).
    pub fn is_degenerate(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    /// Uniform random point inside the bounds.
    ///
    /// An axis with no room collapses to its midpoint.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        let mid = self.midpoint();
        let x = if self.min.x <= self.max.x {
            random_between(rng, self.min.x, self.max.x)
        } else {
            mid.x
        };
        let y = if self.min.y <= self.max.y {
            random_between(rng, self.min.y, self.max.y)
        } else {
            mid.y
        };
        Vec2::new(x, y)
    }
}
