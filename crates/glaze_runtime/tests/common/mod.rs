//! Shared helpers for integration tests

#![allow(dead_code)]

use glaze_core::{Color, Point};

/// Route `tracing` output through the test harness (`RUST_LOG=glaze=debug`)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Horizontal red-to-blue gradient over a `width`-wide surface
pub fn gradient(width: f32) -> impl Fn(Point) -> Color {
    move |p: Point| {
        let t = (p.x / width).clamp(0.0, 1.0);
        Color::rgb(1.0 - t, 0.4, t)
    }
}

pub const FRAME: f32 = 1.0 / 60.0;
