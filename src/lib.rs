//! # driftfield - drifting word-cloud engine
//!
//! Animates a bounded set of text labels inside a rectangular field. Words
//! drift, get pushed away by the pointer and bounce off the padded edges.
//! After a period without user activity they settle into slow orbits around
//! the field center; scrolling the page shrinks and fades the whole cloud.
//!
//! The crate owns the simulation only. Drawing, font metrics and event
//! plumbing belong to the host and are reached through [`TextMeasure`],
//! [`RenderAdapter`] and [`InputEvent`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use driftfield::prelude::*;
//!
//! let bank = WordBank::new(["ownership", "borrowing", "lifetimes", "traits"])?;
//!
//! let mut engine = EngineBuilder::new()
//!     .with_word_bank(bank)
//!     .with_field_size(1280.0, 800.0)
//!     .build(MonospaceMetrics::default())?;
//!
//! // Host input:
//! engine.handle_input(InputEvent::PointerMove { x: 640.0, y: 300.0 }, now_ms);
//!
//! // Host frame callback:
//! engine.frame(now_ms, &mut renderer);
//! ```
//!
//! ## Core Concepts
//!
//! ### Motion
//!
//! Each [`Word`] carries a [`Motion`]: either `Free { velocity }`, integrated
//! every frame under pointer repulsion, random drift and friction, or
//! `Orbiting { angle, radius, speed }`, placed on a wobbling circle. The
//! variant decides the update; the two never mix.
//!
//! ### Activity
//!
//! Pointer, touch, scroll, refresh and visibility events re-arm a single
//! inactivity deadline. When a frame or event sees the deadline pass, every
//! word enters orbit; the next activity releases them at rest.
//!
//! ### Layout
//!
//! [`EngineBuilder::build`] and [`Engine::refresh`] sample the word bank and
//! place each label with a bounded random search that keeps the field center
//! and existing labels clear.
//!
//! ## Tunables
//!
//! | Group | Fields |
//! |-------|--------|
//! | Layout | `word_count`, `min_font`, `max_font`, `padding`, `word_spacing`, `safe_radius`, `placement_attempts` |
//! | Motion | `repel_radius`, `repel_force`, `drift`, `friction` |
//! | Orbit | `inactivity_delay_ms`, `orbit_speed_min`, `orbit_speed_max` |

pub mod activity;
pub mod config;
mod engine;
pub mod error;
pub mod field;
pub mod geometry;
pub mod input;
pub mod physics;
pub mod placement;
mod registry;
pub mod render;
pub mod scroll;
pub mod time;
mod word;

pub use activity::{ActivityMonitor, Mode, Transition};
pub use bytemuck;
pub use config::Config;
pub use engine::{Engine, EngineBuilder};
pub use error::{ConfigError, EngineError};
pub use field::{Field, Pointer};
pub use glam::Vec2;
pub use input::{InputEvent, InputTranslator};
pub use placement::{find_position, Placement, PlacementParams};
pub use registry::{RebuildReport, WordBank, WordRegistry};
pub use render::{MonospaceMetrics, RecordingAdapter, RenderAdapter, TextMeasure, WordInstance};
pub use scroll::ScrollResponse;
pub use word::{Motion, Word};

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```ignore
/// use driftfield::prelude::*;
/// ```
///
/// This imports:
/// - [`EngineBuilder`] and [`Engine`] - build and drive a field
/// - [`WordBank`] - the validated source of labels
/// - [`InputEvent`] - everything a host can report
/// - [`RenderAdapter`], [`TextMeasure`], [`WordInstance`] - the render boundary
/// - [`Vec2`] - glam vector type
pub mod prelude {
    pub use crate::activity::Mode;
    pub use crate::config::Config;
    pub use crate::engine::{Engine, EngineBuilder};
    pub use crate::error::EngineError;
    pub use crate::input::{InputEvent, InputTranslator};
    pub use crate::registry::WordBank;
    pub use crate::render::{MonospaceMetrics, RecordingAdapter, RenderAdapter, TextMeasure, WordInstance};
    pub use crate::word::{Motion, Word};
    pub use crate::Vec2;
}
