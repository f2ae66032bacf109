//! Button-to-menu shape morph
//!
//! A single spring drives a `progress` value from 0 (button) to 1 (menu).
//! Everything the host draws is derived from that value:
//!
//! - width and corner radius interpolate linearly across the whole range
//! - height interpolates until [`MorphConfig::height_release`], then is
//!   released to the content's natural height so the menu never clips
//! - button content is only drawn below [`MorphConfig::button_fade_end`] and
//!   menu content only above [`MorphConfig::menu_reveal_start`], leaving a dead
//!   zone mid-morph where neither is drawn
//!
//! ```text
//!   Closed --open()--> Opening --settled at 1--> Open
//!     ^                   ^ |                      |
//!     |            open() | | close()              | close()
//!     |                   | v                      v
//!     +--at 0, not rising-- Closing <--------------+
//! ```

use glaze_core::Size;
use serde::{Deserialize, Serialize};

use crate::spring::{Spring, SpringConfig};

/// Morph lifecycle phase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MorphPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// Tunables for the morph
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MorphConfig {
    /// Progress after which height is no longer interpolated
    pub height_release: f32,
    /// Progress at which button content has fully faded out
    pub button_fade_end: f32,
    /// Progress at which menu content starts fading in
    pub menu_reveal_start: f32,
    /// Distance from 0 at which a closing morph is considered closed
    pub closed_epsilon: f32,
    pub spring: SpringConfig,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            height_release: 0.85,
            button_fade_end: 0.02,
            menu_reveal_start: 0.7,
            closed_epsilon: 0.001,
            spring: SpringConfig::morph(),
        }
    }
}

/// Snapshot of a morph's geometry endpoints and progress
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MorphState {
    pub trigger_size: Size,
    pub trigger_corner_radius: f32,
    pub target_width: f32,
    /// Natural height of the menu content
    pub target_height: f32,
    pub target_corner_radius: f32,
    /// Displayed progress, clamped to [0, 1]
    pub progress: f32,
    pub phase: MorphPhase,
}

/// Geometry the host applies to its surface for the current frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MorphGeometry {
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
    /// False once height has been released to the content's natural size
    pub height_constrained: bool,
}

/// Opacity of the two endpoint contents
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentVisibility {
    pub button_opacity: f32,
    pub menu_opacity: f32,
}

impl ContentVisibility {
    pub fn button_visible(&self) -> bool {
        self.button_opacity > 0.0
    }

    pub fn menu_visible(&self) -> bool {
        self.menu_opacity > 0.0
    }
}

/// Spring-driven morph state machine
#[derive(Clone, Debug)]
pub struct MorphEngine {
    state: MorphState,
    spring: Spring,
    config: MorphConfig,
}

impl MorphEngine {
    /// Create a closed morph between a trigger button and a menu
    ///
    /// # Panics
    ///
    /// Panics if either corner radius exceeds half of its shape's shorter side,
    /// or if any dimension is negative or not finite.
    pub fn new(
        trigger_size: Size,
        trigger_corner_radius: f32,
        target_size: Size,
        target_corner_radius: f32,
        config: MorphConfig,
    ) -> Self {
        for (name, v) in [
            ("trigger width", trigger_size.width),
            ("trigger height", trigger_size.height),
            ("target width", target_size.width),
            ("target height", target_size.height),
            ("trigger corner radius", trigger_corner_radius),
            ("target corner radius", target_corner_radius),
        ] {
            assert!(v.is_finite() && v >= 0.0, "{name} must be finite and >= 0, got {v}");
        }
        assert!(
            trigger_corner_radius <= trigger_size.min_side() * 0.5,
            "trigger corner radius {trigger_corner_radius} exceeds half of {trigger_size:?}"
        );
        assert!(
            target_corner_radius <= target_size.min_side() * 0.5,
            "target corner radius {target_corner_radius} exceeds half of {target_size:?}"
        );

        Self {
            state: MorphState {
                trigger_size,
                trigger_corner_radius,
                target_width: target_size.width,
                target_height: target_size.height,
                target_corner_radius,
                progress: 0.0,
                phase: MorphPhase::Closed,
            },
            spring: Spring::new(config.spring, 0.0),
            config,
        }
    }

    pub fn state(&self) -> &MorphState {
        &self.state
    }

    pub fn config(&self) -> &MorphConfig {
        &self.config
    }

    pub fn phase(&self) -> MorphPhase {
        self.state.phase
    }

    /// Displayed progress in [0, 1]
    pub fn progress(&self) -> f32 {
        self.state.progress
    }

    /// Unclamped spring value (may overshoot for underdamped configs)
    pub fn raw_value(&self) -> f32 {
        self.spring.value()
    }

    pub fn velocity(&self) -> f32 {
        self.spring.velocity()
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state.phase, MorphPhase::Opening | MorphPhase::Closing)
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state.phase, MorphPhase::Opening | MorphPhase::Open)
    }

    /// Start (or resume) opening from the current value and velocity
    pub fn open(&mut self) {
        if self.is_open() {
            return;
        }
        self.spring.set_target(1.0);
        self.transition(MorphPhase::Opening);
    }

    /// Start (or resume) closing from the current value and velocity
    pub fn close(&mut self) {
        if !self.is_open() {
            return;
        }
        self.spring.set_target(0.0);
        self.transition(MorphPhase::Closing);
    }

    /// Tap on the trigger: open when closed or closing, close otherwise
    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Update the menu's natural size (e.g. after its content was measured)
    ///
    /// # Panics
    ///
    /// Panics if the target corner radius no longer fits the new size.
    pub fn set_target_size(&mut self, size: Size) {
        assert!(
            self.state.target_corner_radius <= size.min_side() * 0.5,
            "target corner radius {} exceeds half of {size:?}",
            self.state.target_corner_radius
        );
        self.state.target_width = size.width;
        self.state.target_height = size.height;
    }

    /// Update only the menu's natural height
    pub fn set_target_height(&mut self, height: f32) {
        self.set_target_size(Size::new(self.state.target_width, height));
    }

    /// Integrate the spring and apply automatic phase transitions
    pub fn step(&mut self, dt: f32) -> MorphPhase {
        if self.state.phase == MorphPhase::Closed || self.state.phase == MorphPhase::Open {
            return self.state.phase;
        }

        self.spring.step(dt);
        let value = self.spring.value();

        match self.state.phase {
            MorphPhase::Opening if self.spring.is_settled() => {
                self.spring.snap_to(1.0);
                self.transition(MorphPhase::Open);
            }
            MorphPhase::Closing
                if value.abs() <= self.config.closed_epsilon && self.spring.velocity() <= 0.0 =>
            {
                self.spring.snap_to(0.0);
                self.transition(MorphPhase::Closed);
            }
            _ => {}
        }

        self.state.progress = self.spring.value().clamp(0.0, 1.0);
        tracing::trace!(
            progress = self.state.progress,
            phase = ?self.state.phase,
            "morph step"
        );
        self.state.phase
    }

    /// Size and corner radius for the current progress
    pub fn geometry(&self) -> MorphGeometry {
        let p = self.state.progress;
        let s = &self.state;
        let lerp = |a: f32, b: f32| a + (b - a) * p;

        let height_constrained = p < self.config.height_release;
        let height = if height_constrained {
            lerp(s.trigger_size.height, s.target_height)
        } else {
            s.target_height
        };

        MorphGeometry {
            width: lerp(s.trigger_size.width, s.target_width),
            height,
            corner_radius: lerp(s.trigger_corner_radius, s.target_corner_radius),
            height_constrained,
        }
    }

    /// Crossfade opacities for the current progress
    pub fn content(&self) -> ContentVisibility {
        let p = self.state.progress;
        let fade_end = self.config.button_fade_end;
        let reveal = self.config.menu_reveal_start;

        let button_opacity = if p < fade_end && fade_end > 0.0 {
            1.0 - p / fade_end
        } else {
            0.0
        };
        let menu_opacity = if p > reveal && reveal < 1.0 {
            ((p - reveal) / (1.0 - reveal)).clamp(0.0, 1.0)
        } else {
            0.0
        };

        ContentVisibility {
            button_opacity,
            menu_opacity,
        }
    }

    fn transition(&mut self, to: MorphPhase) {
        let from = self.state.phase;
        if from != to {
            tracing::debug!(?from, ?to, value = self.spring.value(), "morph phase change");
            self.state.phase = to;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn engine() -> MorphEngine {
        MorphEngine::new(
            Size::new(44.0, 44.0),
            22.0,
            Size::new(220.0, 300.0),
            24.0,
            MorphConfig::default(),
        )
    }

    fn run(engine: &mut MorphEngine, frames: usize) {
        for _ in 0..frames {
            engine.step(FRAME);
        }
    }

    #[test]
    fn test_full_open_close_cycle() {
        let mut m = engine();
        assert_eq!(m.phase(), MorphPhase::Closed);

        m.open();
        assert_eq!(m.phase(), MorphPhase::Opening);
        run(&mut m, 180);
        assert_eq!(m.phase(), MorphPhase::Open);
        assert_eq!(m.progress(), 1.0);

        m.close();
        assert_eq!(m.phase(), MorphPhase::Closing);
        run(&mut m, 180);
        assert_eq!(m.phase(), MorphPhase::Closed);
        assert_eq!(m.progress(), 0.0);
    }

    #[test]
    fn test_interrupted_close_keeps_value_and_velocity() {
        let mut m = engine();
        m.open();
        run(&mut m, 12);
        let value = m.raw_value();
        let velocity = m.velocity();
        assert!(value > 0.0 && value < 1.0);
        assert!(velocity > 0.0);

        m.close();
        assert_eq!(m.raw_value(), value);
        assert_eq!(m.velocity(), velocity);

        run(&mut m, 6);
        m.open();
        assert_eq!(m.phase(), MorphPhase::Opening);
        run(&mut m, 240);
        assert_eq!(m.phase(), MorphPhase::Open);
    }

    #[test]
    fn test_close_waits_until_no_longer_moving_open() {
        let mut m = engine();
        m.open();
        m.step(0.0005);
        assert!(m.raw_value() > 0.0 && m.raw_value() < m.config().closed_epsilon);
        assert!(m.velocity() > 0.0);

        // Near zero but still heading toward open: not closed yet
        m.close();
        m.step(1e-5);
        assert!(m.raw_value().abs() <= m.config().closed_epsilon);
        assert!(m.velocity() > 0.0);
        assert_eq!(m.phase(), MorphPhase::Closing);

        let mut frames = 0;
        while m.step(FRAME) != MorphPhase::Closed {
            frames += 1;
            assert!(frames < 120, "morph never closed");
        }
        assert_eq!(m.progress(), 0.0);
        assert_eq!(m.velocity(), 0.0);
    }

    #[test]
    fn test_geometry_interpolates_and_releases_height() {
        let mut m = engine();
        assert_eq!(
            m.geometry(),
            MorphGeometry {
                width: 44.0,
                height: 44.0,
                corner_radius: 22.0,
                height_constrained: true,
            }
        );

        m.state.progress = 0.5;
        let g = m.geometry();
        assert!((g.width - 132.0).abs() < 1e-4);
        assert!((g.height - 172.0).abs() < 1e-4);
        assert!((g.corner_radius - 23.0).abs() < 1e-4);
        assert!(g.height_constrained);

        m.state.progress = 0.9;
        let g = m.geometry();
        assert!(!g.height_constrained);
        assert_eq!(g.height, 300.0);
    }

    #[test]
    fn test_crossfade_dead_zone() {
        let mut m = engine();
        for i in 0..=100 {
            m.state.progress = i as f32 / 100.0;
            let c = m.content();
            assert!(!(c.button_visible() && c.menu_visible()));
            if (0.02..=0.7).contains(&m.state.progress) {
                assert!(!c.button_visible() && !c.menu_visible());
            }
        }

        m.state.progress = 0.0;
        assert_eq!(m.content().button_opacity, 1.0);
        m.state.progress = 1.0;
        assert_eq!(m.content().menu_opacity, 1.0);
    }

    #[test]
    fn test_toggle_and_idempotent_calls() {
        let mut m = engine();
        m.close();
        assert_eq!(m.phase(), MorphPhase::Closed);

        m.toggle();
        assert_eq!(m.phase(), MorphPhase::Opening);
        m.open();
        assert_eq!(m.phase(), MorphPhase::Opening);

        m.toggle();
        assert_eq!(m.phase(), MorphPhase::Closing);
    }

    #[test]
    #[should_panic(expected = "target corner radius")]
    fn test_oversized_corner_radius_panics() {
        MorphEngine::new(
            Size::new(44.0, 44.0),
            22.0,
            Size::new(200.0, 40.0),
            30.0,
            MorphConfig::default(),
        );
    }
}
