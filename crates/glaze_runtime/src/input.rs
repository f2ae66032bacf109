//! Input events forwarded by the host UI layer
//!
//! Positions are widget-local x coordinates in logical units; velocities are
//! in alignment units per second (see
//! [`glaze_animation::pixel_velocity_to_alignment`] to convert from pixels).

use glaze_animation::MorphPhase;

use crate::orchestrator::{IndicatorId, MorphId};

/// A discrete input event
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    DragDown { position: f32 },
    DragUpdate { position: f32 },
    DragEnd { velocity: f32 },
    DragCancel,
    /// Direct selection of an item (tap on a tab)
    Select { index: usize },
    /// Tap on a morph trigger
    TapToggle,
    Open,
    Close,
}

/// The controller an event is addressed to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventTarget {
    Indicator(IndicatorId),
    Morph(MorphId),
}

impl From<IndicatorId> for EventTarget {
    fn from(id: IndicatorId) -> Self {
        EventTarget::Indicator(id)
    }
}

impl From<MorphId> for EventTarget {
    fn from(id: MorphId) -> Self {
        EventTarget::Morph(id)
    }
}

/// What an event did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventResponse {
    /// The event does not apply to the target (e.g. a drag sent to a morph)
    Ignored,
    Handled,
    /// A release resolved the indicator's target item
    Settling { target_index: usize },
    /// A morph changed direction
    Morphing { phase: MorphPhase },
}
