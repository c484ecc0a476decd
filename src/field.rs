//! Viewport geometry and pointer state.
//!
//! The field is the rectangle words live in. Its origin is the top-left
//! corner, X grows to the right and Y grows downward, matching the host's
//! pixel coordinates.

use crate::geometry::Bounds;
use glam::Vec2;

/// Viewport dimensions in field units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Field {
    size: Vec2,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.size * 0.5
    }

    /// Valid center positions for a box of `half_extent` with `padding` kept
    /// clear on every edge.
    pub fn padded_bounds(&self, half_extent: Vec2, padding: f32) -> Bounds {
        Bounds::inset(self.size, half_extent, padding)
    }

    /// Replace the dimensions, returning the previous size.
    pub fn resize(&mut self, width: f32, height: f32) -> Vec2 {
        std::mem::replace(&mut self.size, Vec2::new(width, height))
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

/// Last known pointer location, in field coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    pub position: Vec2,
    /// Whether the pointer is over the field and should repel words.
    pub active: bool,
}

impl Pointer {
    /// Inactive pointer parked at the field center.
    pub fn centered(field: &Field) -> Self {
        Self {
            position: field.center(),
            active: false,
        }
    }

    pub fn move_to(&mut self, position: Vec2) {
        self.position = position;
        self.active = true;
    }

    pub fn release(&mut self) {
        self.active = false;
    }
}
