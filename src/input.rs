//! Input events understood by the engine.
//!
//! Hosts report what happened through [`InputEvent`]; the engine decides what
//! counts as activity and how the pointer moves. Windowed hosts built on
//! winit can feed raw `WindowEvent`s through an [`InputTranslator`] instead
//! of mapping them by hand.
//!
//! # Usage
//!
//! ```ignore
//! fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
//!     if let Some(input) = self.translator.translate(&event) {
//!         self.engine.handle_input(input, self.now_ms());
//!     }
//! }
//! ```

use glam::Vec2;
use winit::event::{ElementState, MouseScrollDelta, TouchPhase, WindowEvent};

/// Something the user or host did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to field coordinates.
    PointerMove { x: f32, y: f32 },
    /// Button pressed anywhere over the field.
    PointerDown,
    /// Pointer left the field; repulsion stops.
    PointerLeave,
    /// Pointer entered or pressed a word label.
    ///
    /// Only needed from hosts that hit-test labels themselves; the engine
    /// already derives hover from `PointerMove` and `TouchMove`.
    WordHover,
    /// A touch began.
    TouchStart,
    /// A touch moved to field coordinates.
    TouchMove { x: f32, y: f32 },
    /// The last touch ended or was cancelled.
    TouchEnd,
    /// Page scroll position changed.
    Scroll { offset: f32, viewport_height: f32 },
    /// Field dimensions changed.
    Resize { width: f32, height: f32 },
    /// Host view was hidden or shown again.
    Visibility { hidden: bool },
    /// Explicit request for a fresh layout.
    Refresh,
}

impl InputEvent {
    /// Whether the event counts as user activity for the idle timer.
    ///
    /// Visibility is handled separately: only becoming visible is activity.
    pub fn is_activity(&self) -> bool {
        match self {
            InputEvent::PointerMove { .. }
            | InputEvent::PointerDown
            | InputEvent::WordHover
            | InputEvent::TouchStart
            | InputEvent::TouchMove { .. }
            | InputEvent::Scroll { .. }
            | InputEvent::Refresh => true,
            InputEvent::Visibility { hidden } => !hidden,
            InputEvent::PointerLeave | InputEvent::TouchEnd | InputEvent::Resize { .. } => false,
        }
    }
}

/// Maps winit window events onto [`InputEvent`]s.
///
/// Wheel deltas are accumulated into an absolute scroll offset, since a
/// native window has no page scroll position of its own.
#[derive(Debug, Clone)]
pub struct InputTranslator {
    /// Top-left corner of the field inside the window.
    origin: Vec2,
    /// Pixels scrolled per wheel line.
    line_height: f32,
    scroll_offset: f32,
    /// Largest reachable scroll offset.
    max_scroll: f32,
    viewport_height: f32,
}

impl InputTranslator {
    pub fn new(viewport_height: f32) -> Self {
        Self {
            origin: Vec2::ZERO,
            line_height: 40.0,
            scroll_offset: 0.0,
            max_scroll: f32::INFINITY,
            viewport_height,
        }
    }

    /// Offset of the field within the window.
    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn with_max_scroll(mut self, max_scroll: f32) -> Self {
        self.max_scroll = max_scroll.max(0.0);
        self
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Scroll by `dy` pixels (positive scrolls down the page).
    pub fn scroll_by(&mut self, dy: f32) -> InputEvent {
        self.scroll_offset = (self.scroll_offset + dy).clamp(0.0, self.max_scroll);
        InputEvent::Scroll {
            offset: self.scroll_offset,
            viewport_height: self.viewport_height,
        }
    }

    /// Record a new viewport size and produce the matching resize event.
    pub fn resize(&mut self, width: f32, height: f32) -> InputEvent {
        self.viewport_height = height;
        InputEvent::Resize { width, height }
    }

    fn to_field(&self, x: f64, y: f64) -> Vec2 {
        Vec2::new(x as f32, y as f32) - self.origin
    }

    /// Translate a window event, or `None` if the engine does not care.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let p = self.to_field(position.x, position.y);
                Some(InputEvent::PointerMove { x: p.x, y: p.y })
            }
            WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeave),
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                ..
            } => Some(InputEvent::PointerDown),
            WindowEvent::MouseWheel { delta, .. } => {
                // winit reports positive y when scrolling up.
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -*y * self.line_height,
                    MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
                };
                Some(self.scroll_by(dy))
            }
            WindowEvent::Touch(touch) => match touch.phase {
                TouchPhase::Started => Some(InputEvent::TouchStart),
                TouchPhase::Moved => {
                    let p = self.to_field(touch.location.x, touch.location.y);
                    Some(InputEvent::TouchMove { x: p.x, y: p.y })
                }
                TouchPhase::Ended | TouchPhase::Cancelled => Some(InputEvent::TouchEnd),
            },
            WindowEvent::Resized(size) => Some(self.resize(size.width as f32, size.height as f32)),
            WindowEvent::Occluded(hidden) => Some(InputEvent::Visibility { hidden: *hidden }),
            _ => None,
        }
    }
}
