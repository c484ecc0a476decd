//! Headless driftfield runner.
//!
//! Drives an engine through a scripted session on a simulated 60 fps clock
//! and logs what happens. Set `RUST_LOG=debug` for per-transition detail.
//!
//! Run with: `cargo run -- [config.json]`

use driftfield::prelude::*;
use std::error::Error;

const FRAME_MS: f64 = 1000.0 / 60.0;

const DEMO_WORDS: &[&str] = &[
    "ownership", "borrowing", "lifetimes", "traits", "generics", "iterators", "closures",
    "pattern", "match", "enum", "struct", "slice", "vector", "hashmap", "option", "result",
    "async", "await", "future", "pin", "unsafe", "macro", "crate", "module", "cargo",
    "clippy", "rustfmt", "derive", "impl", "dyn", "box", "rc", "arc", "mutex", "channel",
    "thread", "atomic", "cell", "refcell", "cow", "string", "str", "bytes", "serde",
    "tokio", "rayon", "glam", "wgpu", "winit", "bevy", "egui", "nom", "clap", "log",
];

struct Session {
    engine: Engine<MonospaceMetrics>,
    renderer: RecordingAdapter,
    now: f64,
}

impl Session {
    /// Run `seconds` of frames, calling `each` before every frame.
    fn run<F>(&mut self, seconds: f64, mut each: F)
    where
        F: FnMut(&mut Engine<MonospaceMetrics>, f64, f64),
    {
        let start = self.now;
        let frames = (seconds * 1000.0 / FRAME_MS).round() as u64;
        for _ in 0..frames {
            each(&mut self.engine, self.now, self.now - start);
            self.engine.frame(self.now, &mut self.renderer);
            self.now += FRAME_MS;
        }
    }

    fn report(&self, phase: &str) {
        let instances = self.renderer.instances();
        let n = instances.len().max(1) as f32;
        let mean_scale = instances.iter().map(|i| i.scale).sum::<f32>() / n;
        let mean_opacity = instances.iter().map(|i| i.opacity).sum::<f32>() / n;
        let orbiting = self.engine.words().iter().filter(|w| w.is_orbiting()).count();

        log::info!(
            "[{:>8.0}ms] {:<12} mode={:?} orbiting={}/{} scale={:.3} opacity={:.3} fps={:.1}",
            self.now,
            phase,
            self.engine.mode(),
            orbiting,
            self.engine.words().len(),
            mean_scale,
            mean_opacity,
            self.engine.clock().fps()
        );
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading config from {}", path);
            Config::load(&path)?
        }
        None => Config::default(),
    };

    let bank = WordBank::new(DEMO_WORDS.iter().copied())?;
    let engine = EngineBuilder::new()
        .with_config(config)
        .with_word_bank(bank)
        .with_field_size(1280.0, 800.0)
        .build(MonospaceMetrics::default())?;

    let report = engine.last_rebuild();
    log::info!("placed {} words ({} fallback placements)", report.placed, report.fallbacks);

    let mut session = Session {
        engine,
        renderer: RecordingAdapter::new(),
        now: 0.0,
    };

    session.engine.handle_input(
        InputEvent::Scroll {
            offset: 0.0,
            viewport_height: 800.0,
        },
        session.now,
    );

    // Sweep the pointer across the middle of the field.
    session.run(3.0, |engine, now, elapsed| {
        let t = (elapsed / 3000.0) as f32;
        engine.handle_input(InputEvent::PointerMove { x: 100.0 + t * 1080.0, y: 400.0 }, now);
    });
    session.report("sweep");

    session.engine.handle_input(InputEvent::PointerLeave, session.now);
    let idle = session.engine.config().inactivity_delay_ms / 1000.0 + 1.5;
    session.run(idle, |_, _, _| {});
    session.report("idle");

    session.engine.handle_input(
        InputEvent::Scroll {
            offset: 480.0,
            viewport_height: 800.0,
        },
        session.now,
    );
    session.run(2.0, |_, _, _| {});
    session.report("scrolled");

    session.engine.handle_input(InputEvent::Resize { width: 960.0, height: 600.0 }, session.now);
    session.engine.handle_input(InputEvent::Refresh, session.now);
    session.run(1.0, |_, _, _| {});
    session.report("refreshed");

    log::info!(
        "done: {} frames, {} layouts, {} bytes per frame upload",
        session.renderer.frames(),
        session.renderer.rebuilds(),
        session.renderer.instance_bytes().len()
    );

    Ok(())
}
