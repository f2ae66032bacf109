//! Draggable selection indicator
//!
//! [`IndicatorController`] drives the pill that slides between items of a tab
//! bar, bottom bar or segmented control. Pointer events move it directly;
//! releasing it resolves a target item from position and release velocity and
//! hands the motion to a spring, which [`IndicatorController::tick`] settles.

use glaze_core::{Affine2D, Rect, ShapeFrame, Vec2};
use serde::{Deserialize, Serialize};

use crate::drag::{
    alignment_to_fraction, global_position_to_alignment, index_to_alignment,
    resolve_target_index, DragPhysicsConfig,
};
use crate::jelly::{JellyConfig, JellyTransform};
use crate::spring::{Spring, SpringConfig};

/// Weight of the newest sample in the drag velocity estimate
const VELOCITY_SMOOTHING: f32 = 0.8;

/// Tunables for an indicator
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    /// Spring that settles the indicator onto its item after release
    pub alignment_spring: SpringConfig,
    /// Spring that eases the press/drag interaction intensity in and out
    pub press_spring: SpringConfig,
    pub drag: DragPhysicsConfig,
    pub jelly: JellyConfig,
}

impl IndicatorConfig {
    pub fn with_drag(mut self, drag: DragPhysicsConfig) -> Self {
        self.drag = drag;
        self
    }

    pub fn with_jelly(mut self, jelly: JellyConfig) -> Self {
        self.jelly = jelly;
        self
    }
}

/// Pointer-driven state of one indicator
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub item_count: usize,
    /// -1 = first item, 1 = last item; exceeds that range while overdragged
    pub current_alignment: f32,
    pub is_pressed: bool,
    pub is_dragging: bool,
    /// Alignment units per second
    pub velocity: f32,
}

impl DragState {
    /// # Panics
    ///
    /// Panics if `item_count < 2`.
    pub fn new(item_count: usize, alignment: f32) -> Self {
        assert!(
            item_count >= 2,
            "an indicator needs at least 2 items, got {item_count}"
        );
        Self {
            item_count,
            current_alignment: alignment,
            is_pressed: false,
            is_dragging: false,
            velocity: 0.0,
        }
    }

    /// Current position as a fraction (0 = first item, 1 = last item)
    pub fn fraction(&self) -> f32 {
        alignment_to_fraction(self.current_alignment)
    }
}

/// Selection indicator state machine
#[derive(Clone, Debug)]
pub struct IndicatorController {
    state: DragState,
    selected: usize,
    widget_width: f32,
    alignment: Spring,
    press: Spring,
    config: IndicatorConfig,
    /// Time since the last drag update, for velocity estimation
    sample_elapsed: f32,
}

impl IndicatorController {
    /// Create an indicator resting on `selected`
    ///
    /// # Panics
    ///
    /// Panics if `item_count < 2` or `selected >= item_count`.
    pub fn new(
        item_count: usize,
        selected: usize,
        widget_width: f32,
        config: IndicatorConfig,
    ) -> Self {
        let state = DragState::new(item_count, index_to_alignment(selected, item_count));
        assert!(
            selected < item_count,
            "selected index {selected} out of range for {item_count} items"
        );

        Self {
            state,
            selected,
            widget_width,
            alignment: Spring::new(config.alignment_spring, state.current_alignment),
            press: Spring::new(config.press_spring, 0.0),
            config,
            sample_elapsed: 0.0,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    pub fn item_count(&self) -> usize {
        self.state.item_count
    }

    /// The committed item
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn alignment(&self) -> f32 {
        self.state.current_alignment
    }

    pub fn widget_width(&self) -> f32 {
        self.widget_width
    }

    /// Update the track width after a layout change
    pub fn set_widget_width(&mut self, width: f32) {
        self.widget_width = width;
    }

    /// True when no gesture is active and both springs are at rest
    pub fn is_settled(&self) -> bool {
        !self.state.is_pressed
            && !self.state.is_dragging
            && self.alignment.is_settled()
            && self.press.is_settled()
    }

    /// Press/drag interaction intensity in [0, 1]
    pub fn interaction_intensity(&self) -> f32 {
        self.press.value().clamp(0.0, 1.0)
    }

    pub fn on_drag_down(&mut self, position: f32) {
        tracing::trace!(position, "indicator drag down");
        self.state.is_pressed = true;
        self.state.is_dragging = false;
        self.sample_elapsed = 0.0;
        self.press.set_target(1.0);
    }

    /// Move the indicator under the pointer (widget-local x position)
    pub fn on_drag_update(&mut self, position: f32) {
        let n = self.state.item_count;
        let alignment =
            global_position_to_alignment(position, self.widget_width, n, &self.config.drag);

        if self.state.is_dragging && self.sample_elapsed > 0.0 {
            let instant = (alignment - self.state.current_alignment) / self.sample_elapsed;
            self.state.velocity = VELOCITY_SMOOTHING * instant
                + (1.0 - VELOCITY_SMOOTHING) * self.state.velocity;
        } else if !self.state.is_dragging {
            self.state.velocity = 0.0;
        }
        self.sample_elapsed = 0.0;

        self.state.is_pressed = true;
        self.state.is_dragging = true;
        self.state.current_alignment = alignment;
        self.alignment.follow(alignment, self.state.velocity);
        self.press.set_target(1.0);
    }

    /// Release with a velocity in alignment units/sec; returns the resolved item
    pub fn on_drag_end(&mut self, velocity: f32) -> usize {
        let velocity = if velocity.is_finite() { velocity } else { 0.0 };
        let n = self.state.item_count;
        let fraction = self.state.fraction();

        let target = resolve_target_index(
            fraction,
            velocity * 0.5,
            1.0 / n as f32,
            n,
            &self.config.drag,
        );
        tracing::debug!(
            fraction,
            velocity,
            from = self.selected,
            to = target,
            "indicator released"
        );

        self.selected = target;
        self.state.is_pressed = false;
        self.state.is_dragging = false;
        self.state.velocity = velocity;
        self.alignment.follow(self.state.current_alignment, velocity);
        self.alignment.set_target(index_to_alignment(target, n));
        self.press.set_target(0.0);
        target
    }

    /// Abort the gesture and return to the committed item without settling
    pub fn cancel(&mut self) {
        tracing::debug!(selected = self.selected, "indicator drag cancelled");
        let committed = index_to_alignment(self.selected, self.state.item_count);
        self.state.is_pressed = false;
        self.state.is_dragging = false;
        self.state.velocity = 0.0;
        self.state.current_alignment = committed;
        self.alignment.snap_to(committed);
        self.press.set_target(0.0);
    }

    /// Select an item programmatically (e.g. a tap); the indicator springs there
    ///
    /// # Panics
    ///
    /// Panics if `index >= item_count`.
    pub fn select(&mut self, index: usize) {
        let n = self.state.item_count;
        assert!(index < n, "selected index {index} out of range for {n} items");
        self.selected = index;
        if !self.state.is_dragging {
            self.alignment.set_target(index_to_alignment(index, n));
        }
    }

    /// Advance springs by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        self.press.step(dt);

        if self.state.is_dragging {
            if dt > 0.0 && dt.is_finite() {
                self.sample_elapsed += dt;
            }
            return;
        }

        self.alignment.step(dt);
        self.state.current_alignment = self.alignment.value();
        self.state.velocity = self.alignment.velocity();
    }

    /// Current horizontal velocity in pixels/sec
    pub fn pixel_velocity(&self) -> f32 {
        let n = self.state.item_count as f32;
        self.state.velocity * self.widget_width * (1.0 - 1.0 / n) * 0.5
    }

    /// Squash/stretch for the current velocity
    pub fn jelly(&self) -> JellyTransform {
        JellyTransform::from_velocity(Vec2::new(self.pixel_velocity(), 0.0), &self.config.jelly)
    }

    /// The indicator's rectangle inside `track` (host surface coordinates)
    pub fn indicator_rect(&self, track: &ShapeFrame) -> Rect {
        let bounds = track.bounds();
        let width = bounds.width() / self.state.item_count as f32;
        let travel = bounds.width() - width;
        Rect::new(
            bounds.x() + self.state.fraction() * travel,
            bounds.y(),
            width,
            bounds.height(),
        )
    }

    /// Jelly deformation about the indicator's centre
    pub fn jelly_transform(&self, track: &ShapeFrame) -> Affine2D {
        self.jelly().to_affine(self.indicator_rect(track).center())
    }
}
