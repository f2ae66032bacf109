//! Drag physics for selection indicators
//!
//! Stateless functions that turn pointer positions and release velocities
//! into indicator alignments and snapped item indices.
//!
//! Two coordinate spaces are used throughout:
//!
//! - **fraction**: `0.0` = first item, `1.0` = last item (padded so the
//!   indicator's own width never leaves the track)
//! - **alignment**: `-1.0` = first item, `1.0` = last item
//!
//! Values outside either range mean the indicator is being overdragged.

use serde::{Deserialize, Serialize};

/// Tunables for rubber-banding and velocity snapping
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragPhysicsConfig {
    /// Fraction of overdrag distance that survives compression
    pub resistance: f32,
    /// Upper bound on compressed overdrag, in fraction units
    pub max_overdrag: f32,
    /// Release speed (fraction units/sec) above which a flick projects forward
    pub velocity_threshold: f32,
    /// Seconds of travel projected from the release velocity
    pub projection_time: f32,
}

impl Default for DragPhysicsConfig {
    fn default() -> Self {
        Self {
            resistance: 0.4,
            max_overdrag: 0.3,
            velocity_threshold: 0.5,
            projection_time: 0.3,
        }
    }
}

/// Compress values outside `[0, 1]` so overdrag feels elastic
///
/// Identity inside `[0, 1]`; continuous at both boundaries; the result always
/// lies in `[-max_overdrag, 1 + max_overdrag]`.
pub fn rubber_band(value: f32, resistance: f32, max_overdrag: f32) -> f32 {
    if value < 0.0 {
        -(-value * resistance).min(max_overdrag)
    } else if value > 1.0 {
        1.0 + ((value - 1.0) * resistance).min(max_overdrag)
    } else {
        value
    }
}

/// Map an item index to an alignment in `[-1, 1]`
///
/// `item_count <= 1` has no meaningful range and maps to the centre.
pub fn index_to_alignment(index: usize, item_count: usize) -> f32 {
    if item_count <= 1 {
        return 0.0;
    }
    2.0 * index as f32 / (item_count - 1) as f32 - 1.0
}

pub fn alignment_to_fraction(alignment: f32) -> f32 {
    (alignment + 1.0) * 0.5
}

pub fn fraction_to_alignment(fraction: f32) -> f32 {
    fraction * 2.0 - 1.0
}

/// Nearest item to an alignment, clamped to valid indices
pub fn nearest_index(alignment: f32, item_count: usize) -> usize {
    if item_count <= 1 {
        return 0;
    }
    let last = (item_count - 1) as f32;
    (alignment_to_fraction(alignment) * last)
        .round()
        .clamp(0.0, last) as usize
}

/// Convert a pointer x position (widget-local) to a rubber-banded alignment
///
/// The indicator is `1 / item_count` of the widget wide, so the draggable
/// range is the widget minus one indicator width, centred by half an indicator
/// on each side.
pub fn global_position_to_alignment(
    position: f32,
    widget_width: f32,
    item_count: usize,
    config: &DragPhysicsConfig,
) -> f32 {
    if item_count <= 1 || !(widget_width > 0.0) {
        return 0.0;
    }
    let indicator_width = 1.0 / item_count as f32;
    let draggable_range = 1.0 - indicator_width;
    let padding = indicator_width * 0.5;

    let relative = position / widget_width;
    let fraction = (relative - padding) / draggable_range;
    let banded = rubber_band(fraction, config.resistance, config.max_overdrag);
    fraction_to_alignment(banded)
}

/// Convert a pointer velocity in pixels/sec to alignment-units/sec
pub fn pixel_velocity_to_alignment(
    pixels_per_second: f32,
    widget_width: f32,
    item_count: usize,
) -> f32 {
    if item_count <= 1 || !(widget_width > 0.0) {
        return 0.0;
    }
    let draggable_pixels = widget_width * (1.0 - 1.0 / item_count as f32);
    2.0 * pixels_per_second / draggable_pixels
}

/// Decide which item a released indicator should settle on
///
/// - Overdragged (`current_fraction` outside `[0, 1]`): the nearest end.
/// - `|velocity| > velocity_threshold`: project `velocity * projection_time`
///   ahead and round; if that lands on the current item, advance one item in
///   the direction of travel unless already at that end.
/// - Otherwise: round to the nearest item.
///
/// `velocity` is in fraction units per second. `item_width` is one item's
/// share of the track (`1 / item_count`); a non-positive width disables
/// projection.
pub fn resolve_target_index(
    current_fraction: f32,
    velocity: f32,
    item_width: f32,
    item_count: usize,
    config: &DragPhysicsConfig,
) -> usize {
    if item_count <= 1 {
        return 0;
    }
    let last_index = item_count - 1;
    let last = last_index as f32;

    if current_fraction < 0.0 {
        return 0;
    }
    if current_fraction > 1.0 {
        return last_index;
    }

    let current_index = nearest_index(fraction_to_alignment(current_fraction), item_count);

    let flick = item_width > 0.0 && velocity.abs() > config.velocity_threshold;
    if !flick {
        return current_index.min(last_index);
    }

    let projected = (current_fraction + velocity * config.projection_time).clamp(0.0, 1.0);
    let mut target = (projected * last).round() as usize;

    if target == current_index {
        if velocity > 0.0 && target < last_index {
            target += 1;
        } else if velocity < 0.0 && target > 0 {
            target -= 1;
        }
    }

    tracing::trace!(
        current_fraction,
        velocity,
        projected,
        current_index,
        target,
        "resolved flick target"
    );
    target.min(last_index)
}
