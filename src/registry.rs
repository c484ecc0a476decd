//! Word bank and the live word collection.
//!
//! The collection is only ever replaced wholesale: [`WordRegistry::rebuild`]
//! samples the bank, measures and places every label, then swaps the new set
//! in. Words are never added or removed one at a time.

use crate::config::Config;
use crate::error::EngineError;
use crate::field::Field;
use crate::geometry::{random_between, shuffled, Rect};
use crate::placement::{find_position, PlacementParams};
use crate::render::TextMeasure;
use crate::word::Word;
use glam::Vec2;
use rand::Rng;
use std::collections::HashSet;
use std::f32::consts::TAU;

/// Initial velocity range per axis for freshly created words.
const INITIAL_SPEED: f32 = 0.5;

/// Non-empty list of distinct display strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordBank {
    entries: Vec<String>,
}

impl WordBank {
    /// Build a bank, dropping blank entries and repeated strings.
    ///
    /// The first occurrence of a string wins, so ordering is preserved.
    pub fn new<I, S>(entries: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let entries: Vec<String> = entries
            .into_iter()
            .map(Into::into)
            .filter(|s| !s.trim().is_empty())
            .filter(|s| seen.insert(s.clone()))
            .collect();

        if entries.is_empty() {
            return Err(EngineError::EmptyWordBank);
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Up to `count` distinct entries in uniformly random order.
    pub fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<String> {
        let mut selection = shuffled(&self.entries, rng);
        selection.truncate(count);
        selection
    }
}

/// Summary of one rebuild.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RebuildReport {
    /// Words created.
    pub placed: usize,
    /// Words whose position was accepted without a collision check.
    pub fallbacks: usize,
}

/// Owner of the live words.
#[derive(Debug, Default)]
pub struct WordRegistry {
    words: Vec<Word>,
}

impl WordRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn words_mut(&mut self) -> &mut [Word] {
        &mut self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Replace the collection with `count` freshly sampled and placed words.
    pub fn rebuild<M, R>(
        &mut self,
        bank: &WordBank,
        count: usize,
        measure: &M,
        field: &Field,
        config: &Config,
        rng: &mut R,
    ) -> RebuildReport
    where
        M: TextMeasure + ?Sized,
        R: Rng + ?Sized,
    {
        let params = PlacementParams::from_config(config);
        let selection = bank.sample(count, rng);

        let mut words = Vec::with_capacity(selection.len());
        let mut placed: Vec<Rect> = Vec::with_capacity(selection.len());
        let mut report = RebuildReport::default();

        for text in selection {
            let font = random_between(rng, config.min_font, config.max_font);
            let size = measure.measure(&text, font);
            let placement = find_position(size, &placed, field, &params, rng);
            if placement.fallback {
                report.fallbacks += 1;
            }

            let velocity = Vec2::new(
                random_between(rng, -INITIAL_SPEED, INITIAL_SPEED),
                random_between(rng, -INITIAL_SPEED, INITIAL_SPEED),
            );
            let wobble_offset = random_between(rng, 0.0, TAU);

            placed.push(Rect::new(placement.position, size));
            words.push(Word::new(text, placement.position, size, font, velocity, wobble_offset));
        }

        report.placed = words.len();
        self.words = words;

        log::debug!(
            "rebuilt {} words in {:.0}x{:.0} field ({} fallback placements)",
            report.placed,
            field.width(),
            field.height(),
            report.fallbacks
        );

        report
    }
}
