//! Per-frame shape geometry
//!
//! A [`ShapeFrame`] is recomputed by the host from layout every frame and is
//! never persisted. Evaluation points are expressed in the frame's own
//! coordinate space (origin at the top-left of the shape, logical units).

use crate::geometry::{Point, Rect, Size, Vec2};

/// Geometry of one glass shape for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeFrame {
    /// Shape size in logical units
    pub size: Size,
    /// Offset of the shape within the host's surface
    pub origin: Point,
    /// Device pixels per logical unit
    pub device_scale: f32,
}

impl Default for ShapeFrame {
    fn default() -> Self {
        Self {
            size: Size::ZERO,
            origin: Point::ZERO,
            device_scale: 1.0,
        }
    }
}

impl ShapeFrame {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_device_scale(mut self, scale: f32) -> Self {
        self.device_scale = scale;
        self
    }

    pub fn half_size(&self) -> Vec2 {
        self.size.half()
    }

    /// Bounds in host surface coordinates
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// One device pixel expressed in logical units (the anti-aliasing width)
    pub fn pixel_size(&self) -> f32 {
        if self.device_scale > 0.0 && self.device_scale.is_finite() {
            1.0 / self.device_scale
        } else {
            1.0
        }
    }

    /// Clamp a corner radius to `[0, min(width, height) / 2]`
    pub fn clamped_corner_radius(&self, radius: f32) -> f32 {
        let max = (self.size.min_side() * 0.5).max(0.0);
        radius.clamp(0.0, max)
    }

    /// Convert a point in frame space to a vector relative to the shape center
    pub fn to_centered(&self, point: Point) -> Vec2 {
        point.to_vec2() - self.half_size()
    }

    /// Device-pixel dimensions of the frame, rounded up
    pub fn pixel_dimensions(&self) -> (u32, u32) {
        if self.size.is_degenerate() {
            return (0, 0);
        }
        let scale = 1.0 / self.pixel_size();
        (
            (self.size.width * scale).ceil() as u32,
            (self.size.height * scale).ceil() as u32,
        )
    }
}
