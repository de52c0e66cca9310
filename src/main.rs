//! # Shadow Watchface Application Entry Point
//!
//! This binary wires the watchface core to the real host: the system
//! clock as the time source, a terminal character grid as the display
//! surface, and a logging stand-in for the device compositing pass.
//! It supports both a continuous mode (redraw on every minute tick) and a
//! one-shot development mode (`--stdout`).

// Test modules
#[cfg(test)]
mod tests;

use std::env;
use std::time::Duration;

use anyhow::Context;
use chrono::Timelike;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::Size;

use watchface_lib::config::Config;
use watchface_lib::ports::{EffectPass, Surface, SystemClock, TimeSource};
use watchface_lib::renderer;
use watchface_lib::watchface::Watchface;
use watchface_lib::{ClockTime, FaceGeometry, ShadowOffset};

/// Terminal face dimensions in character cells. Wider than tall because
/// character cells are roughly twice as high as they are wide.
const TERMINAL_COLS: u32 = 41;
const TERMINAL_ROWS: u32 = 21;

/// The terminal standing in for the device display surface: fixed bounds
/// plus a dirty flag the event loop polls after each tick.
struct TerminalSurface {
    geometry: FaceGeometry,
    dirty: bool,
}

impl TerminalSurface {
    fn new() -> Self {
        TerminalSurface {
            geometry: FaceGeometry::from_size(Size::new(TERMINAL_COLS, TERMINAL_ROWS)),
            dirty: false,
        }
    }

    fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl Surface for TerminalSurface {
    fn bounds(&self) -> FaceGeometry {
        self.geometry
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

/// Stand-in for the device shadow/blur pass: logs what the real pass would
/// consume, so the offset state is visible in the journal.
struct StderrEffect;

impl EffectPass for StderrEffect {
    fn composite(&mut self, offset: ShadowOffset, hand_color: Rgb888, shadow_color: Rgb888) {
        eprintln!(
            "effect pass: offset ({:+}, {:+}), hand {:?}, shadow {:?}",
            offset.dx, offset.dy, hand_color, shadow_color
        );
    }
}

/// Redraw the face onto the terminal for the given time.
fn redraw(face: &mut Watchface, time: ClockTime, geometry: &FaceGeometry) {
    println!("{:02}:{:02}", time.hour, time.minute);
    let segments = face.hands(time, geometry);
    let offset = face.offset();
    renderer::draw_ascii(&segments, geometry, offset, face.scratch_mut());
}

/// Time remaining until the next minute boundary, with a small cushion so
/// the wakeup lands inside the new minute rather than just before it.
fn until_next_minute() -> Duration {
    let now = chrono::Local::now();
    let elapsed_ms = u64::from(now.second()) * 1000 + u64::from(now.timestamp_subsec_millis());
    Duration::from_millis(60_000u64.saturating_sub(elapsed_ms) + 50)
}

/// Continuous mode: one redraw per minute tick, driven by a timer that
/// sleeps to the next minute boundary.
async fn run_tick_loop(
    mut face: Watchface,
    clock: SystemClock,
    mut surface: TerminalSurface,
    mut effect: StderrEffect,
) {
    loop {
        let now = clock.now();
        face.handle_tick(now, &mut surface);
        if surface.take_dirty() {
            let geometry = surface.bounds();
            redraw(&mut face, now, &geometry);
            face.run_effect(&mut effect);
        }
        tokio::time::sleep(until_next_minute()).await;
    }
}

/// Main application entry point.
fn main() -> anyhow::Result<()> {
    // Development mode: render one frame to stdout and exit
    let development_mode = env::args().any(|arg| arg == "--stdout");

    let config = Config::load();
    let mut face = Watchface::from_config(&config).context("watchface startup failed")?;
    let clock = SystemClock;
    let mut surface = TerminalSurface::new();
    let mut effect = StderrEffect;

    if development_mode {
        let now = clock.now();
        face.handle_tick(now, &mut surface);
        surface.take_dirty();
        let geometry = surface.bounds();
        redraw(&mut face, now, &geometry);
        face.run_effect(&mut effect);
        return Ok(());
    }

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(run_tick_loop(face, clock, surface, effect));

    Ok(())
}
