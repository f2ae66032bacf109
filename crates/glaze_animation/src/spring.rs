//! Spring physics
//!
//! RK4-integrated single-axis springs. Every animated quantity in Glaze
//! (indicator alignment, press intensity, morph progress) is one of these,
//! advanced explicitly by the host's `dt`.

use serde::{Deserialize, Serialize};

/// Largest step integrated in one go; longer frames are sub-stepped
const MAX_STEP: f32 = 1.0 / 60.0;

/// Frames longer than this many sub-steps (4s) jump straight to the target
const MAX_SUBSTEPS: u32 = 240;

/// Default distance-from-target below which a spring may come to rest
pub const DEFAULT_REST_EPSILON: f32 = 1e-3;

/// Default speed below which a spring may come to rest
pub const DEFAULT_REST_VELOCITY: f32 = 1e-2;

/// Configuration for a spring animation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Distance from the target below which the spring may rest
    pub rest_epsilon: f32,
    /// Speed below which the spring may rest
    pub rest_velocity: f32,
}

impl SpringConfig {
    /// Create a new spring configuration
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            rest_epsilon: DEFAULT_REST_EPSILON,
            rest_velocity: DEFAULT_REST_VELOCITY,
        }
    }

    /// Override the settle thresholds (distance to target, speed)
    pub fn with_rest_threshold(mut self, epsilon: f32, velocity: f32) -> Self {
        self.rest_epsilon = epsilon;
        self.rest_velocity = velocity;
        self
    }

    /// A gentle, slow spring (good for page transitions)
    pub fn gentle() -> Self {
        Self::new(120.0, 14.0, 1.0)
    }

    /// A wobbly spring with overshoot (good for playful UI)
    pub fn wobbly() -> Self {
        Self::new(180.0, 12.0, 1.0)
    }

    /// A stiff, snappy spring (good for buttons)
    pub fn stiff() -> Self {
        Self::new(400.0, 30.0, 1.0)
    }

    /// A very stiff spring with minimal oscillation (good for quick responses)
    pub fn snappy() -> Self {
        Self::new(600.0, 40.0, 1.0)
    }

    /// A slow spring with no overshoot
    pub fn molasses() -> Self {
        Self::new(100.0, 20.0, 1.0)
    }

    /// The button-to-menu morph spring: at (marginally above) critical damping
    pub fn morph() -> Self {
        Self::new(180.0, 27.0, 1.0)
    }

    /// Calculate critical damping for this spring's stiffness and mass
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// Damping ratio (1.0 = critically damped)
    pub fn damping_ratio(&self) -> f32 {
        let critical = self.critical_damping();
        if critical > 0.0 {
            self.damping / critical
        } else {
            0.0
        }
    }

    /// Check if the spring is underdamped (will oscillate)
    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }

    /// Check if the spring is critically damped (no oscillation, fastest settling)
    pub fn is_critically_damped(&self) -> bool {
        (self.damping - self.critical_damping()).abs() < 0.01
    }

    /// Check if the spring is overdamped (slow settling, no oscillation)
    pub fn is_overdamped(&self) -> bool {
        self.damping > self.critical_damping()
    }

    /// Replace out-of-range parameters with the stiff preset's
    pub(crate) fn sanitized(self) -> Self {
        let fallback = Self::stiff();
        let pick = |v: f32, d: f32, allow_zero: bool| {
            if v.is_finite() && (v > 0.0 || (allow_zero && v == 0.0)) {
                v
            } else {
                d
            }
        };
        let sanitized = Self {
            stiffness: pick(self.stiffness, fallback.stiffness, false),
            damping: pick(self.damping, fallback.damping, true),
            mass: pick(self.mass, fallback.mass, false),
            rest_epsilon: pick(self.rest_epsilon, fallback.rest_epsilon, true),
            rest_velocity: pick(self.rest_velocity, fallback.rest_velocity, true),
        };
        if sanitized != self {
            tracing::warn!(?self, ?sanitized, "spring config out of range, clamped");
        }
        sanitized
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::stiff()
    }
}

/// A spring-based animator
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config: config.sanitized(),
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Retarget without touching value or velocity, so interruptions stay continuous
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump to a value and rest there
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Track an externally driven value (e.g. a finger) without integrating
    pub fn follow(&mut self, value: f32, velocity: f32) {
        self.value = value;
        self.target = value;
        self.velocity = velocity;
    }

    /// Check if the spring has settled (within epsilon of target with minimal velocity)
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() <= self.config.rest_epsilon
            && self.velocity.abs() <= self.config.rest_velocity
    }

    /// Step the spring simulation using RK4 integration
    pub fn step(&mut self, dt: f32) {
        if !(dt > 0.0) || !dt.is_finite() {
            return;
        }
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let steps = (dt / MAX_STEP).ceil().max(1.0);
        if steps > MAX_SUBSTEPS as f32 {
            tracing::trace!(dt, "spring frame too long, snapping to target");
            self.snap_to(self.target);
            return;
        }
        let steps = steps as u32;
        let h = dt / steps as f32;
        for _ in 0..steps {
            self.rk4(h);
        }

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    fn rk4(&mut self, dt: f32) {
        let k1_v = self.acceleration(self.value, self.velocity);
        let k1_x = self.velocity;

        let k2_v = self.acceleration(
            self.value + k1_x * dt * 0.5,
            self.velocity + k1_v * dt * 0.5,
        );
        let k2_x = self.velocity + k1_v * dt * 0.5;

        let k3_v = self.acceleration(
            self.value + k2_x * dt * 0.5,
            self.velocity + k2_v * dt * 0.5,
        );
        let k3_x = self.velocity + k2_v * dt * 0.5;

        let k4_v = self.acceleration(self.value + k3_x * dt, self.velocity + k3_v * dt);
        let k4_x = self.velocity + k3_v * dt;

        self.velocity += (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * dt / 6.0;
        self.value += (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * dt / 6.0;
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let spring_force = -self.config.stiffness * (x - self.target);
        let damping_force = -self.config.damping * v;
        (spring_force + damping_force) / self.config.mass
    }
}
