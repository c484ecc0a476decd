//! Per-frame word integration.
//!
//! Every frame each word is advanced by exactly one of two contracts, chosen
//! by its [`Motion`]:
//!
//! | Motion | Update |
//! |--------|--------|
//! | `Free` | pointer repulsion, drift jitter, friction, integrate, bounce off padded edges |
//! | `Orbiting` | advance angle, place on a wobbling circle around the field center |
//!
//! Steps are expressed in normalized frames: `dt == 1.0` is one 60 fps frame.

use crate::config::Config;
use crate::field::{Field, Pointer};
use crate::geometry::{clamp, random_between, Bounds};
use crate::render::WordInstance;
use crate::scroll::ScrollResponse;
use crate::word::{Motion, Word};
use glam::Vec2;
use rand::Rng;

/// Duration of one baseline frame in milliseconds.
pub const BASELINE_FRAME_MS: f64 = 16.6667;
/// Smallest normalized step.
pub const MIN_STEP: f32 = 0.2;
/// Largest normalized step; caps catch-up after a stall or hidden tab.
pub const MAX_STEP: f32 = 3.0;

/// Velocity multiplier applied on wall contact.
pub const BOUNCE: f32 = -0.4;

/// Radial wobble of orbiting words.
pub const ORBIT_WOBBLE_AMPLITUDE: f32 = 10.0;
pub const ORBIT_WOBBLE_PERIOD_MS: f64 = 1400.0;

/// Size breathing of free words.
pub const SIZE_WOBBLE_AMPLITUDE: f32 = 0.03;
pub const SIZE_WOBBLE_PERIOD_MS: f64 = 1200.0;

pub const MIN_SCALE: f32 = 0.15;
pub const MAX_SCALE: f32 = 1.6;

/// Convert elapsed milliseconds into a normalized, clamped step.
pub fn normalized_step(delta_ms: f64) -> f32 {
    clamp((delta_ms / BASELINE_FRAME_MS) as f32, MIN_STEP, MAX_STEP)
}

/// Velocity change pushing a word at `position` away from the pointer.
///
/// Zero when the pointer is inactive, sits exactly on the word, or is
/// farther than `radius`.
pub fn repulsion(position: Vec2, pointer: &Pointer, radius: f32, force: f32, dt: f32) -> Vec2 {
    if !pointer.active {
        return Vec2::ZERO;
    }
    let offset = position - pointer.position;
    let distance = offset.length();
    if distance == 0.0 || distance > radius {
        return Vec2::ZERO;
    }
    let strength = ((radius - distance) / radius) * force;
    (offset / distance) * strength * dt
}

/// Random velocity jitter in `[-drift/2, drift/2] * dt` per axis.
pub fn drift<R: Rng + ?Sized>(rng: &mut R, drift: f32, dt: f32) -> Vec2 {
    let half = drift * 0.5;
    Vec2::new(
        random_between(rng, -half, half) * dt,
        random_between(rng, -half, half) * dt,
    )
}

/// Clamp `position` into `bounds`, bouncing the matching velocity component.
///
/// An axis with no room (field smaller than the padded box) pins the word to
/// the midpoint of that axis and stops it there.
pub fn constrain(position: &mut Vec2, velocity: &mut Vec2, bounds: &Bounds) {
    let mid = bounds.midpoint();

    if bounds.min.x > bounds.max.x {
        position.x = mid.x;
        velocity.x = 0.0;
    } else if position.x < bounds.min.x {
        position.x = bounds.min.x;
        velocity.x *= BOUNCE;
    } else if position.x > bounds.max.x {
        position.x = bounds.max.x;
        velocity.x *= BOUNCE;
    }

    if bounds.min.y > bounds.max.y {
        position.y = mid.y;
        velocity.y = 0.0;
    } else if position.y < bounds.min.y {
        position.y = bounds.min.y;
        velocity.y *= BOUNCE;
    } else if position.y > bounds.max.y {
        position.y = bounds.max.y;
        velocity.y *= BOUNCE;
    }
}

/// Point on the wobbling orbit path at wall-clock `time_ms`.
pub fn orbit_position(center: Vec2, angle: f32, radius: f32, wobble_offset: f32, time_ms: f64) -> Vec2 {
    let wobble = (time_ms / ORBIT_WOBBLE_PERIOD_MS + wobble_offset as f64).sin() as f32 * ORBIT_WOBBLE_AMPLITUDE;
    let (sin, cos) = angle.sin_cos();
    center + Vec2::new(cos, sin) * (radius + wobble)
}

/// Scale and opacity the word should be drawn with.
pub fn presentation(word: &Word, time_ms: f64, scroll: &ScrollResponse) -> WordInstance {
    let breathing = if word.is_orbiting() {
        1.0
    } else {
        1.0 + (time_ms / SIZE_WOBBLE_PERIOD_MS + word.wobble_offset as f64).sin() as f32 * SIZE_WOBBLE_AMPLITUDE
    };

    WordInstance {
        position: word.position,
        scale: clamp(word.scale * breathing * scroll.scale, MIN_SCALE, MAX_SCALE),
        opacity: scroll.opacity * word.opacity,
    }
}

/// Shared inputs for one frame.
#[derive(Clone, Copy, Debug)]
pub struct StepContext<'a> {
    pub config: &'a Config,
    pub field: &'a Field,
    pub pointer: &'a Pointer,
    /// Normalized step, see [`normalized_step`].
    pub dt: f32,
    /// Wall-clock time driving the wobble terms.
    pub time_ms: f64,
}

/// Advance one word by one frame.
pub fn step_word<R: Rng + ?Sized>(word: &mut Word, ctx: &StepContext<'_>, rng: &mut R) {
    let config = ctx.config;
    let dt = ctx.dt;

    match &mut word.motion {
        Motion::Free { velocity } => {
            *velocity += repulsion(word.position, ctx.pointer, config.repel_radius, config.repel_force, dt);
            *velocity += drift(rng, config.drift, dt);
            *velocity *= config.friction;
            word.position += *velocity * dt;

            let bounds = ctx.field.padded_bounds(word.size * 0.5, config.padding);
            constrain(&mut word.position, velocity, &bounds);
        }
        Motion::Orbiting { angle, radius, speed } => {
            *angle += *speed * dt;
            word.position = orbit_position(ctx.field.center(), *angle, *radius, word.wobble_offset, ctx.time_ms);
        }
    }
}

/// Advance every word and write its presentation into `out`.
pub fn step_all<R: Rng + ?Sized>(
    words: &mut [Word],
    ctx: &StepContext<'_>,
    scroll: &ScrollResponse,
    rng: &mut R,
    out: &mut Vec<WordInstance>,
) {
    out.clear();
    out.reserve(words.len());
    for word in words.iter_mut() {
        step_word(word, ctx, rng);
        out.push(presentation(word, ctx.time_ms, scroll));
    }
}
