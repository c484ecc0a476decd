//! The boundary between the engine and whatever draws the words.
//!
//! The engine never owns visual resources. It asks a [`TextMeasure`] how large
//! a label is, tells a [`RenderAdapter`] when the whole set of labels changes,
//! and hands it one [`WordInstance`] per word every frame.

use crate::word::Word;
use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Measures rendered text in field units.
pub trait TextMeasure {
    /// Width and height of `text` drawn at `font_size`.
    fn measure(&self, text: &str, font_size: f32) -> Vec2;
}

impl<F> TextMeasure for F
where
    F: Fn(&str, f32) -> Vec2,
{
    fn measure(&self, text: &str, font_size: f32) -> Vec2 {
        self(text, font_size)
    }
}

/// Fixed-advance text metrics.
///
/// Good enough for headless runs and tests where no font is loaded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMetrics {
    /// Horizontal advance per character, as a fraction of the font size.
    pub advance: f32,
    /// Line height as a fraction of the font size.
    pub line_height: f32,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self {
            advance: 0.6,
            line_height: 1.2,
        }
    }
}

impl TextMeasure for MonospaceMetrics {
    fn measure(&self, text: &str, font_size: f32) -> Vec2 {
        let chars = text.chars().count() as f32;
        Vec2::new(chars * self.advance * font_size, self.line_height * font_size)
    }
}

/// Per-frame presentation of one word.
///
/// `#[repr(C)]` and `Pod` so a GPU-backed adapter can upload the slice as-is.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct WordInstance {
    /// Center in field coordinates.
    pub position: Vec2,
    pub scale: f32,
    pub opacity: f32,
}

/// Receives the engine's output.
pub trait RenderAdapter {
    /// Discard every visual element and create one per word, in order.
    ///
    /// Instances passed to [`update`](Self::update) use the same ordering.
    fn rebuild(&mut self, words: &[Word]);

    /// Apply this frame's positions, scales and opacities.
    fn update(&mut self, instances: &[WordInstance]);
}

/// Adapter that keeps the latest output in memory.
///
/// Used by the headless runner; also handy in tests.
#[derive(Debug, Default)]
pub struct RecordingAdapter {
    labels: Vec<String>,
    instances: Vec<WordInstance>,
    rebuilds: usize,
    frames: u64,
}

impl RecordingAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label texts from the most recent rebuild.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Instances from the most recent frame.
    pub fn instances(&self) -> &[WordInstance] {
        &self.instances
    }

    pub fn rebuilds(&self) -> usize {
        self.rebuilds
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Raw bytes of the latest frame, as a GPU upload would see them.
    pub fn instance_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl RenderAdapter for RecordingAdapter {
    fn rebuild(&mut self, words: &[Word]) {
        self.labels = words.iter().map(|w| w.text.clone()).collect();
        self.instances.clear();
        self.rebuilds += 1;
    }

    fn update(&mut self, instances: &[WordInstance]) {
        self.instances.clear();
        self.instances.extend_from_slice(instances);
        self.frames += 1;
    }
}
