//! Linear RGBA color

use serde::{Deserialize, Serialize};

/// Rec. 601 luma weights used for saturation adjustment
pub const LUMA_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

/// RGBA color (linear space)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "default_alpha")]
    pub a: f32,
}

fn default_alpha() -> f32 {
    1.0
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn gray(v: f32) -> Self {
        Self::rgb(v, v, v)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Weighted luminance of the RGB channels
    pub fn luminance(&self) -> f32 {
        self.r * LUMA_WEIGHTS[0] + self.g * LUMA_WEIGHTS[1] + self.b * LUMA_WEIGHTS[2]
    }

    /// Mix toward (or away from) grayscale: 0 = gray, 1 = unchanged, >1 = boosted
    pub fn saturate(self, saturation: f32) -> Self {
        let l = self.luminance();
        Self::rgba(
            l + (self.r - l) * saturation,
            l + (self.g - l) * saturation,
            l + (self.b - l) * saturation,
            self.a,
        )
    }

    /// Clamp every channel to [0, 1]
    pub fn clamped(self) -> Self {
        Self::rgba(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
            self.a.clamp(0.0, 1.0),
        )
    }

    /// Linear interpolation between two colors
    pub fn lerp(a: &Color, b: &Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: a.r + (b.r - a.r) * t,
            g: a.g + (b.g - a.g) * t,
            b: a.b + (b.b - a.b) * t,
            a: a.a + (b.a - a.a) * t,
        }
    }

    /// Source-over composite of `self` on top of `below` (straight alpha)
    pub fn over(self, below: Color) -> Color {
        let out_a = self.a + below.a * (1.0 - self.a);
        if out_a <= 0.0 {
            return Color::TRANSPARENT;
        }
        let below_weight = below.a * (1.0 - self.a);
        Color {
            r: (self.r * self.a + below.r * below_weight) / out_a,
            g: (self.g * self.a + below.g * below_weight) / out_a,
            b: (self.b * self.a + below.b * below_weight) / out_a,
            a: out_a,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}
