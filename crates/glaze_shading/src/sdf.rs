//! Rounded-rectangle signed distance field
//!
//! All functions take points relative to the shape's centre. Distances are
//! negative inside, zero on the boundary and positive outside.

use glaze_core::{smoothstep, Point, ShapeFrame, Vec2};

/// Skeleton offsets shorter than this have no meaningful direction
pub const NORMAL_EPSILON: f32 = 1e-2;

/// Signed distance from `point` to a rounded rectangle centred at the origin
pub fn sdf_rounded_rect(point: Vec2, half_size: Vec2, corner_radius: f32) -> f32 {
    let q = point.abs() - half_size + Vec2::splat(corner_radius);
    q.max(Vec2::ZERO).length() + q.max_element().min(0.0) - corner_radius
}

/// Anti-aliased coverage for a signed distance
///
/// `smoothing` is one device pixel in the same units as `distance`.
pub fn mask(distance: f32, smoothing: f32) -> f32 {
    1.0 - smoothstep(-smoothing, smoothing, distance)
}

/// Outward surface normal of the rounded-rect "skeleton"
///
/// The point is clamped to the rectangle inset by `corner_radius`; the offset
/// from that clamp is the normal direction. Points on the flat interior (offset
/// shorter than [`NORMAL_EPSILON`]) return the zero vector.
pub fn surface_normal(point: Vec2, half_size: Vec2, corner_radius: f32) -> Vec2 {
    let inner = (half_size - Vec2::splat(corner_radius)).max(Vec2::ZERO);
    let clamped = point.clamp(-inner, inner);
    let offset = point - clamped;
    if offset.length() > NORMAL_EPSILON {
        offset.normalize()
    } else {
        Vec2::ZERO
    }
}

/// Geometry evaluated at one point of a shape
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeSample {
    pub distance: f32,
    pub mask: f32,
    pub normal: Vec2,
}

impl ShapeSample {
    /// Distance from the boundary going inward (0 outside)
    pub fn inner_distance(&self) -> f32 {
        (-self.distance).max(0.0)
    }
}

/// Evaluate the shape at a frame-space point
///
/// Returns `None` when the point contributes nothing: the mask is zero, or the
/// frame is degenerate. The corner radius is clamped to the frame.
pub fn sample_shape(frame: &ShapeFrame, corner_radius: f32, point: Point) -> Option<ShapeSample> {
    if frame.size.is_degenerate() {
        return None;
    }

    let half = frame.half_size();
    let radius = frame.clamped_corner_radius(corner_radius);
    let p = frame.to_centered(point);

    let distance = sdf_rounded_rect(p, half, radius);
    let mask = mask(distance, frame.pixel_size());
    if !(mask > 0.0) {
        return None;
    }

    Some(ShapeSample {
        distance,
        mask,
        normal: surface_normal(p, half, radius),
    })
}
