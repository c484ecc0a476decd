//! End-to-end behaviour of the engine.
//!
//! These drive a real [`Engine`] with scripted timestamps and check layout,
//! motion and mode-switching properties across many seeds.

use driftfield::prelude::*;
use driftfield::{find_position, Field, PlacementParams, Pointer};
use glam::Vec2;

// ============================================================================
// Helpers
// ============================================================================

const FRAME_MS: f64 = 1000.0 / 60.0;

fn bank(n: usize) -> WordBank {
    WordBank::new((0..n).map(|i| format!("term-{:03}", i))).unwrap()
}

fn engine_with(config: Config, seed: u64) -> Engine<MonospaceMetrics> {
    EngineBuilder::new()
        .with_config(config)
        .with_word_bank(bank(120))
        .with_field_size(1600.0, 1000.0)
        .with_seed(seed)
        .build(MonospaceMetrics::default())
        .unwrap()
}

fn engine(seed: u64) -> Engine<MonospaceMetrics> {
    engine_with(
        Config {
            word_count: 30,
            ..Default::default()
        },
        seed,
    )
}

fn assert_layout_valid(engine: &Engine<MonospaceMetrics>) {
    let config = engine.config();
    let field = engine.field();
    for word in engine.words() {
        let bounds = field.padded_bounds(word.half_extent(), config.padding);
        assert!(
            bounds.contains(word.position),
            "{} at {:?} outside {:?}",
            word.text,
            word.position,
            bounds
        );
    }

    // With no fallbacks every pair must be separated by the spacing.
    if engine.last_rebuild().fallbacks == 0 {
        let words = engine.words();
        for (i, a) in words.iter().enumerate() {
            for b in &words[i + 1..] {
                assert!(
                    !a.rect().intersects(&b.rect(), config.word_spacing),
                    "{} overlaps {}",
                    a.text,
                    b.text
                );
            }
        }
    }
}

// ============================================================================
// Startup
// ============================================================================

#[test]
fn test_empty_word_bank_is_fatal() {
    let empty: Vec<&str> = Vec::new();
    assert!(matches!(WordBank::new(empty), Err(EngineError::EmptyWordBank)));
}

#[test]
fn test_missing_word_bank_is_fatal() {
    let result = EngineBuilder::new().build(MonospaceMetrics::default());
    assert!(matches!(result, Err(EngineError::MissingWordBank)));
}

#[test]
fn test_word_count_larger_than_bank() {
    let engine = EngineBuilder::new()
        .with_word_bank(WordBank::new(["one", "two", "three"]).unwrap())
        .with_field_size(1600.0, 1000.0)
        .with_seed(1)
        .build(MonospaceMetrics::default())
        .unwrap();
    let mut texts: Vec<&str> = engine.words().iter().map(|w| w.text.as_str()).collect();
    texts.sort_unstable();
    assert_eq!(texts, vec!["one", "three", "two"]);
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_layout_valid_across_seeds() {
    for seed in 0..40 {
        let engine = engine(seed);
        assert_eq!(engine.words().len(), 30);
        assert_layout_valid(&engine);
    }
}

#[test]
fn test_rebuild_twice_gives_independent_valid_layouts() {
    let mut engine = engine(99);
    let first: Vec<Vec2> = engine.words().iter().map(|w| w.position).collect();
    assert_layout_valid(&engine);

    engine.refresh(0.0);
    let second: Vec<Vec2> = engine.words().iter().map(|w| w.position).collect();
    assert_layout_valid(&engine);

    assert_eq!(first.len(), second.len());
    assert_ne!(first, second);
}

#[test]
fn test_crowded_field_reports_fallbacks_but_stays_in_bounds() {
    let config = Config {
        word_count: 120,
        min_font: 26.0,
        max_font: 28.0,
        ..Default::default()
    };
    let engine = EngineBuilder::new()
        .with_config(config)
        .with_word_bank(bank(120))
        .with_field_size(700.0, 500.0)
        .with_seed(4)
        .build(MonospaceMetrics::default())
        .unwrap();

    assert_eq!(engine.words().len(), 120);
    assert!(engine.last_rebuild().fallbacks > 0);
    assert_layout_valid(&engine);
}

#[test]
fn test_placement_scenario_1000_by_800() {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    let field = Field::new(1000.0, 800.0);
    let params = PlacementParams {
        safe_radius: 150.0,
        padding: 60.0,
        spacing: 16.0,
        max_attempts: 240,
    };
    let mut rng = SmallRng::seed_from_u64(1000);

    for _ in 0..1000 {
        let placement = find_position(Vec2::new(100.0, 30.0), &[], &field, &params, &mut rng);
        let p = placement.position;
        assert!(p.distance(Vec2::new(500.0, 400.0)) >= 200.0);
        assert!((110.0..=890.0).contains(&p.x));
        assert!((75.0..=725.0).contains(&p.y));
    }
}

// ============================================================================
// Motion
// ============================================================================

#[test]
fn test_words_stay_inside_field_while_drifting() {
    let mut engine = engine(7);
    let mut renderer = RecordingAdapter::new();
    let mut now = 0.0;

    for frame in 0..600 {
        if frame % 3 == 0 {
            // Chase words around with the pointer.
            let target = engine.words()[frame % engine.words().len()].position;
            engine.handle_input(InputEvent::PointerMove { x: target.x + 5.0, y: target.y }, now);
        }
        engine.frame(now, &mut renderer);
        now += FRAME_MS;
    }

    assert_eq!(engine.mode(), Mode::Free);
    let config = engine.config().clone();
    for word in engine.words() {
        let bounds = engine.field().padded_bounds(word.half_extent(), config.padding);
        assert!(bounds.contains(word.position));
    }
}

#[test]
fn test_pointer_pushes_nearby_word_away() {
    let config = Config {
        word_count: 1,
        drift: 0.0,
        ..Default::default()
    };
    let mut engine = engine_with(config, 3);
    let mut renderer = RecordingAdapter::new();
    engine.frame(0.0, &mut renderer);

    let start = engine.words()[0].position;
    let field_center = engine.field().center();
    // Pointer sits on the far side of the word, so the push is toward the center.
    let toward_center = (field_center - start).normalize();
    let pointer = start - toward_center * 50.0;
    engine.handle_input(InputEvent::PointerMove { x: pointer.x, y: pointer.y }, 10.0);

    engine.frame(FRAME_MS, &mut renderer);
    let v = engine.words()[0].velocity().unwrap();
    assert!(v.dot(toward_center) > 0.0);
}

#[test]
fn test_instances_carry_scroll_response() {
    let mut engine = engine(12);
    let mut renderer = RecordingAdapter::new();
    engine.handle_input(
        InputEvent::Scroll {
            offset: 800.0,
            viewport_height: 800.0,
        },
        0.0,
    );
    engine.frame(0.0, &mut renderer);

    for instance in renderer.instances() {
        assert!((instance.opacity - 0.3).abs() < 1e-5);
        // 0.45 scroll scale with at most 3% breathing either way.
        assert!(instance.scale >= 0.45 * 0.97 - 1e-5 && instance.scale <= 0.45 * 1.03 + 1e-5);
    }
}

// ============================================================================
// Activity / orbit
// ============================================================================

#[test]
fn test_frequent_activity_never_orbits() {
    let mut engine = engine(5);
    let mut renderer = RecordingAdapter::new();
    let delay = engine.config().inactivity_delay_ms;
    let mut now = 0.0;

    engine.frame(now, &mut renderer);
    while now < delay * 6.0 {
        now += delay * 0.9;
        engine.handle_input(InputEvent::PointerDown, now);
        engine.frame(now, &mut renderer);
        assert_eq!(engine.mode(), Mode::Free);
        assert!(engine.words().iter().all(|w| !w.is_orbiting()));
    }
}

#[test]
fn test_idle_enters_orbit_exactly_once() {
    let mut engine = engine(6);
    let mut renderer = RecordingAdapter::new();
    let delay = engine.config().inactivity_delay_ms;

    let mut now = 0.0;
    let mut entries = 0;
    let mut previous = engine.mode();
    while now <= delay * 3.0 {
        engine.frame(now, &mut renderer);
        if previous == Mode::Free && engine.mode() == Mode::Orbit {
            entries += 1;
            assert!(now >= delay);
        }
        previous = engine.mode();
        now += FRAME_MS;
    }

    assert_eq!(entries, 1);
    assert!(engine.words().iter().all(|w| w.is_orbiting()));
}

#[test]
fn test_orbit_radius_clears_safe_zone() {
    let mut engine = engine(8);
    let mut renderer = RecordingAdapter::new();
    let delay = engine.config().inactivity_delay_ms;
    engine.frame(0.0, &mut renderer);
    engine.frame(delay + 1.0, &mut renderer);
    assert_eq!(engine.mode(), Mode::Orbit);

    let min_radius = engine.config().safe_radius + 60.0;
    for word in engine.words() {
        match word.motion {
            Motion::Orbiting { radius, .. } => assert!(radius >= min_radius),
            Motion::Free { .. } => panic!("{} not orbiting", word.text),
        }
    }
}

#[test]
fn test_activity_releases_orbit_at_rest() {
    let mut engine = engine(9);
    let mut renderer = RecordingAdapter::new();
    let delay = engine.config().inactivity_delay_ms;
    engine.frame(0.0, &mut renderer);
    engine.frame(delay, &mut renderer);
    assert_eq!(engine.mode(), Mode::Orbit);

    engine.handle_input(InputEvent::PointerMove { x: 1.0, y: 1.0 }, delay + 100.0);
    assert_eq!(engine.mode(), Mode::Free);
    assert!(engine.words().iter().all(|w| w.velocity() == Some(Vec2::ZERO)));
    assert_eq!(engine.activity().deadline(), Some(2.0 * delay + 100.0));
}

#[test]
fn test_scroll_exits_orbit() {
    let mut engine = engine(10);
    let mut renderer = RecordingAdapter::new();
    let delay = engine.config().inactivity_delay_ms;
    engine.frame(0.0, &mut renderer);
    engine.frame(delay, &mut renderer);
    assert_eq!(engine.mode(), Mode::Orbit);

    engine.handle_input(
        InputEvent::Scroll {
            offset: 120.0,
            viewport_height: 800.0,
        },
        delay + 10.0,
    );
    assert_eq!(engine.mode(), Mode::Free);
}

#[test]
fn test_hidden_view_never_orbits_until_visible() {
    let mut engine = engine(11);
    let mut renderer = RecordingAdapter::new();
    let delay = engine.config().inactivity_delay_ms;
    engine.frame(0.0, &mut renderer);

    engine.handle_input(InputEvent::Visibility { hidden: true }, 100.0);
    engine.frame(delay * 10.0, &mut renderer);
    assert_eq!(engine.mode(), Mode::Free);

    let shown = delay * 10.0 + 50.0;
    engine.handle_input(InputEvent::Visibility { hidden: false }, shown);
    engine.frame(shown + delay - 1.0, &mut renderer);
    assert_eq!(engine.mode(), Mode::Free);
    engine.frame(shown + delay, &mut renderer);
    assert_eq!(engine.mode(), Mode::Orbit);
}

#[test]
fn test_refresh_while_orbiting_returns_to_free() {
    let mut engine = engine(13);
    let mut renderer = RecordingAdapter::new();
    let delay = engine.config().inactivity_delay_ms;
    engine.frame(0.0, &mut renderer);
    engine.frame(delay, &mut renderer);
    assert_eq!(engine.mode(), Mode::Orbit);

    engine.handle_input(InputEvent::Refresh, delay + 5.0);
    assert_eq!(engine.mode(), Mode::Free);
    assert!(engine.words().iter().all(|w| !w.is_orbiting()));
    assert_layout_valid(&engine);
}

#[test]
fn test_mode_matches_every_word() {
    let mut engine = engine(14);
    let mut renderer = RecordingAdapter::new();
    let delay = engine.config().inactivity_delay_ms;
    let mut now = 0.0;

    for step in 0..2000 {
        if step == 1500 {
            engine.handle_input(InputEvent::TouchStart, now);
        }
        engine.frame(now, &mut renderer);
        let orbit = engine.mode() == Mode::Orbit;
        assert!(engine.words().iter().all(|w| w.is_orbiting() == orbit));
        now += delay / 500.0;
    }
}

// ============================================================================
// Resize
// ============================================================================

#[test]
fn test_resize_halves_positions() {
    let mut engine = EngineBuilder::new()
        .with_config(Config {
            word_count: 10,
            ..Default::default()
        })
        .with_word_bank(bank(20))
        .with_field_size(1000.0, 800.0)
        .with_seed(2)
        .build(MonospaceMetrics::default())
        .unwrap();
    let before: Vec<Vec2> = engine.words().iter().map(|w| w.position).collect();

    engine.handle_input(InputEvent::Resize { width: 500.0, height: 400.0 }, 0.0);

    assert_eq!(engine.field().size(), Vec2::new(500.0, 400.0));
    for (word, old) in engine.words().iter().zip(before) {
        assert!((word.position.x - old.x * 0.5).abs() < 1e-4);
        assert!((word.position.y - old.y * 0.5).abs() < 1e-4);
    }
}

#[test]
fn test_resize_from_zero_keeps_positions() {
    let mut engine = engine(15);
    engine.handle_input(InputEvent::Resize { width: 0.0, height: 0.0 }, 0.0);
    let before: Vec<Vec2> = engine.words().iter().map(|w| w.position).collect();

    engine.handle_input(InputEvent::Resize { width: 1600.0, height: 1000.0 }, 1.0);
    let after: Vec<Vec2> = engine.words().iter().map(|w| w.position).collect();
    assert_eq!(before, after);
    assert!(after.iter().all(|p| p.is_finite()));
}

#[test]
fn test_zero_sized_field_holds_words_still() {
    let mut engine = engine(21);
    let mut renderer = RecordingAdapter::new();
    engine.frame(0.0, &mut renderer);
    engine.handle_input(InputEvent::Resize { width: 0.0, height: 0.0 }, 5.0);

    let mut now = FRAME_MS;
    let mut previous: Option<Vec<Vec2>> = None;
    for _ in 0..4 {
        engine.frame(now, &mut renderer);
        now += FRAME_MS;
        let positions: Vec<Vec2> = engine.words().iter().map(|w| w.position).collect();
        assert!(positions.iter().all(|p| *p == Vec2::ZERO));
        if let Some(previous) = previous {
            assert_eq!(previous, positions);
        }
        previous = Some(positions);
    }
}

#[test]
fn test_field_smaller_than_padding_centers_words() {
    let mut engine = engine(22);
    let mut renderer = RecordingAdapter::new();
    engine.frame(0.0, &mut renderer);
    engine.handle_input(InputEvent::Resize { width: 50.0, height: 40.0 }, 5.0);

    let mut now = FRAME_MS;
    for _ in 0..4 {
        engine.frame(now, &mut renderer);
        now += FRAME_MS;
        for word in engine.words() {
            assert_eq!(word.position, Vec2::new(25.0, 20.0));
            assert_eq!(word.velocity(), Some(Vec2::ZERO));
        }
    }
}

#[test]
fn test_pointer_starts_centered_and_inactive() {
    let engine = engine(16);
    let expected = Pointer::centered(engine.field());
    assert_eq!(*engine.pointer(), expected);
}
