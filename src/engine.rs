//! Engine builder and frame driver.

use crate::activity::{enter_orbit, leave_orbit, ActivityMonitor, Mode, Transition};
use crate::config::Config;
use crate::error::EngineError;
use crate::field::{Field, Pointer};
use crate::input::InputEvent;
use crate::physics::{step_all, StepContext};
use crate::registry::{RebuildReport, WordBank, WordRegistry};
use crate::render::{RenderAdapter, TextMeasure, WordInstance};
use crate::scroll::{rescale_positions, ScrollResponse};
use crate::time::FrameClock;
use crate::word::Word;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Builder for an [`Engine`].
///
/// Use method chaining to configure, then call `.build()` with the text
/// measurement service.
pub struct EngineBuilder {
    config: Config,
    bank: Option<WordBank>,
    field: Field,
    seed: Option<u64>,
}

impl EngineBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            bank: None,
            field: Field::default(),
            seed: None,
        }
    }

    /// Replace all tunables.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Set the word bank to sample labels from. Required.
    pub fn with_word_bank(mut self, bank: WordBank) -> Self {
        self.bank = Some(bank);
        self
    }

    /// Set the initial field dimensions.
    pub fn with_field_size(mut self, width: f32, height: f32) -> Self {
        self.field = Field::new(width, height);
        self
    }

    /// Seed the engine's RNG for reproducible layouts and motion.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration and lay out the first set of words.
    pub fn build<M: TextMeasure>(self, measure: M) -> Result<Engine<M>, EngineError> {
        let bank = self.bank.ok_or(EngineError::MissingWordBank)?;
        self.config.validate()?;

        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let mut registry = WordRegistry::new();
        let report = registry.rebuild(&bank, self.config.word_count, &measure, &self.field, &self.config, &mut rng);

        Ok(Engine {
            activity: ActivityMonitor::new(self.config.inactivity_delay_ms),
            pointer: Pointer::centered(&self.field),
            config: self.config,
            bank,
            measure,
            field: self.field,
            registry,
            scroll: ScrollResponse::default(),
            clock: FrameClock::new(),
            rng,
            instances: Vec::new(),
            last_rebuild: report,
            hovered: None,
            pending_rebuild: true,
        })
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A running word field.
///
/// All simulation state lives here; nothing is global, so any number of
/// engines can run side by side. Time is always supplied by the caller as a
/// monotonic millisecond timestamp.
pub struct Engine<M: TextMeasure> {
    config: Config,
    bank: WordBank,
    measure: M,
    field: Field,
    pointer: Pointer,
    registry: WordRegistry,
    activity: ActivityMonitor,
    scroll: ScrollResponse,
    clock: FrameClock,
    rng: SmallRng,
    instances: Vec<WordInstance>,
    last_rebuild: RebuildReport,
    /// Word under the pointer, if any.
    hovered: Option<usize>,
    /// Set when the renderer has not seen the current word set yet.
    pending_rebuild: bool,
}

impl<M: TextMeasure> Engine<M> {
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    pub fn words(&self) -> &[Word] {
        self.registry.words()
    }

    pub fn mode(&self) -> Mode {
        self.activity.mode()
    }

    pub fn activity(&self) -> &ActivityMonitor {
        &self.activity
    }

    pub fn scroll(&self) -> &ScrollResponse {
        &self.scroll
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Outcome of the most recent layout.
    pub fn last_rebuild(&self) -> RebuildReport {
        self.last_rebuild
    }

    /// Presentation emitted by the last frame.
    pub fn instances(&self) -> &[WordInstance] {
        &self.instances
    }

    /// Index of the word currently under the pointer.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Index of the topmost word whose box contains `point`.
    pub fn word_at(&self, point: Vec2) -> Option<usize> {
        self.words().iter().rposition(|word| {
            let d = (point - word.position).abs();
            let half = word.half_extent();
            d.x <= half.x && d.y <= half.y
        })
    }

    /// Discard every word and lay out a fresh set.
    ///
    /// Counts as activity. The renderer is told on the next frame.
    pub fn refresh(&mut self, now_ms: f64) {
        self.last_rebuild = self.registry.rebuild(
            &self.bank,
            self.config.word_count,
            &self.measure,
            &self.field,
            &self.config,
            &mut self.rng,
        );
        self.pending_rebuild = true;
        self.hovered = None;
        self.register_activity(now_ms);
    }

    /// Apply one input event that happened at `now_ms`.
    pub fn handle_input(&mut self, event: InputEvent, now_ms: f64) {
        // A deadline that expired before this event fires first.
        self.poll_activity(now_ms);

        match event {
            InputEvent::PointerMove { x, y } | InputEvent::TouchMove { x, y } => {
                self.pointer.move_to(Vec2::new(x, y));
                self.update_hover();
            }
            InputEvent::PointerLeave | InputEvent::TouchEnd => {
                self.pointer.release();
                self.hovered = None;
            }
            InputEvent::PointerDown | InputEvent::WordHover | InputEvent::TouchStart => {}
            InputEvent::Scroll {
                offset,
                viewport_height,
            } => {
                self.scroll = ScrollResponse::from_offset(offset, viewport_height);
            }
            InputEvent::Resize { width, height } => self.resize(width, height),
            InputEvent::Visibility { hidden } => {
                log::debug!("field {}", if hidden { "hidden" } else { "visible" });
                let transition = self.activity.set_hidden(hidden, now_ms);
                self.apply_transition(transition);
                return;
            }
            InputEvent::Refresh => {
                self.refresh(now_ms);
                return;
            }
        }

        if event.is_activity() {
            self.register_activity(now_ms);
        }
    }

    /// Advance the simulation to the frame at `now_ms` and push the result
    /// to `renderer`.
    pub fn frame<R: RenderAdapter + ?Sized>(&mut self, now_ms: f64, renderer: &mut R) {
        if self.pending_rebuild {
            renderer.rebuild(self.registry.words());
            self.pending_rebuild = false;
            if self.activity.deadline().is_none() && !self.activity.is_hidden() {
                self.register_activity(now_ms);
            }
        }

        self.poll_activity(now_ms);

        let dt = self.clock.tick(now_ms);
        let ctx = StepContext {
            config: &self.config,
            field: &self.field,
            pointer: &self.pointer,
            dt,
            time_ms: now_ms,
        };
        step_all(
            self.registry.words_mut(),
            &ctx,
            &self.scroll,
            &mut self.rng,
            &mut self.instances,
        );

        renderer.update(&self.instances);
    }

    /// Derive word hover from the pointer position.
    fn update_hover(&mut self) {
        let hovered = self.word_at(self.pointer.position);
        if hovered != self.hovered {
            if let Some(index) = hovered {
                log::trace!("hovering {:?}", self.registry.words()[index].text);
            }
            self.hovered = hovered;
        }
    }

    fn resize(&mut self, width: f32, height: f32) {
        let previous = self.field.resize(width, height);
        rescale_positions(self.registry.words_mut(), previous, self.field.size());
        log::debug!(
            "field resized {:.0}x{:.0} -> {:.0}x{:.0}",
            previous.x,
            previous.y,
            width,
            height
        );
    }

    fn register_activity(&mut self, now_ms: f64) {
        let transition = self.activity.register(now_ms);
        self.apply_transition(transition);
    }

    fn poll_activity(&mut self, now_ms: f64) {
        let transition = self.activity.poll(now_ms);
        self.apply_transition(transition);
    }

    fn apply_transition(&mut self, transition: Option<Transition>) {
        match transition {
            Some(Transition::Enter) => {
                log::info!("idle, {} words entering orbit", self.registry.len());
                enter_orbit(self.registry.words_mut(), self.field.center(), &self.config, &mut self.rng);
            }
            Some(Transition::Leave) => {
                log::info!("activity, leaving orbit");
                leave_orbit(self.registry.words_mut());
            }
            None => {}
        }
    }
}
