//! The word entity and its motion contract.

use crate::geometry::Rect;
use glam::Vec2;

/// How a word's position is advanced each frame.
///
/// The two contracts never mix: a free word integrates velocity, an orbiting
/// word is placed on a circular path and has no velocity at all.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// Drifting under pointer repulsion, jitter and friction.
    Free { velocity: Vec2 },
    /// Circling the field center.
    Orbiting {
        /// Current polar angle in radians.
        angle: f32,
        /// Base distance from the center, before wobble.
        radius: f32,
        /// Radians advanced per normalized frame.
        speed: f32,
    },
}

impl Motion {
    pub const REST: Motion = Motion::Free { velocity: Vec2::ZERO };
}

/// One displayed label.
#[derive(Clone, Debug, PartialEq)]
pub struct Word {
    /// Display content.
    pub text: String,
    /// Center position in field coordinates.
    pub position: Vec2,
    /// Measured bounding box, fixed after creation.
    pub size: Vec2,
    /// Font size the word was measured at.
    pub base_font: f32,
    /// Reserved scale modifier, currently always 1.
    pub scale: f32,
    pub opacity: f32,
    /// Phase offset for idle wobble, constant for the word's lifetime.
    pub wobble_offset: f32,
    pub motion: Motion,
}

impl Word {
    /// Create a free-moving word.
    pub fn new(
        text: impl Into<String>,
        position: Vec2,
        size: Vec2,
        base_font: f32,
        velocity: Vec2,
        wobble_offset: f32,
    ) -> Self {
        Self {
            text: text.into(),
            position,
            size,
            base_font,
            scale: 1.0,
            opacity: 1.0,
            wobble_offset,
            motion: Motion::Free { velocity },
        }
    }

    #[inline]
    pub fn is_orbiting(&self) -> bool {
        matches!(self.motion, Motion::Orbiting { .. })
    }

    /// Current velocity, or `None` while orbiting.
    pub fn velocity(&self) -> Option<Vec2> {
        match self.motion {
            Motion::Free { velocity } => Some(velocity),
            Motion::Orbiting { .. } => None,
        }
    }

    #[inline]
    pub fn half_extent(&self) -> Vec2 {
        self.size * 0.5
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }
}
