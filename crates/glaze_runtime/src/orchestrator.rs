//! Per-frame driver
//!
//! The [`FrameOrchestrator`] owns every indicator and morph by handle. The host
//! calls it in three places:
//!
//! 1. [`FrameOrchestrator::handle_event`] for each pointer/tap event
//! 2. [`FrameOrchestrator::tick`] once per frame with the frame's `dt`
//! 3. `render_*` for each surface it draws, which returns the glass field, the
//!    transform and the geometry for that frame
//!
//! Everything runs on the caller's thread; nothing is shared.

use glaze_animation::{
    ContentVisibility, IndicatorController, JellyTransform, MorphEngine, MorphGeometry, MorphPhase,
};
use glaze_core::{Affine2D, GlassMaterial, GlazeError, Point, Rect, Result, ShapeFrame, Size};
use glaze_shading::{BackdropSampler, GlassShader, GpuGlassInstance, RenderQuality};
use slotmap::{new_key_type, SlotMap};

use crate::config::GlazeConfig;
use crate::field::GlassField;
use crate::input::{EventResponse, EventTarget, InputEvent};

new_key_type! {
    /// Handle to a registered selection indicator
    pub struct IndicatorId;
    /// Handle to a registered button-to-menu morph
    pub struct MorphId;
}

struct IndicatorEntry {
    controller: IndicatorController,
    shader: GlassShader,
}

struct MorphEntry {
    engine: MorphEngine,
    shader: GlassShader,
}

/// Everything needed to draw an indicator for one frame
#[derive(Clone, Debug)]
pub struct IndicatorFrame {
    /// Indicator bounds in track (host surface) coordinates
    pub rect: Rect,
    /// Jelly deformation about the indicator's centre
    pub transform: Affine2D,
    pub jelly: JellyTransform,
    pub interaction: f32,
    pub selected_index: usize,
    pub alignment: f32,
    pub field: GlassField,
    pub instance: GpuGlassInstance,
}

/// Everything needed to draw a morphing surface for one frame
#[derive(Clone, Debug)]
pub struct MorphFrame {
    pub phase: MorphPhase,
    pub progress: f32,
    pub geometry: MorphGeometry,
    pub content: ContentVisibility,
    /// Surface bounds in host coordinates
    pub bounds: Rect,
    pub field: GlassField,
    pub instance: GpuGlassInstance,
}

/// Owns controllers, routes input, advances physics, renders glass
pub struct FrameOrchestrator {
    config: GlazeConfig,
    quality: RenderQuality,
    default_shader: GlassShader,
    indicators: SlotMap<IndicatorId, IndicatorEntry>,
    morphs: SlotMap<MorphId, MorphEntry>,
}

impl FrameOrchestrator {
    pub fn new(config: GlazeConfig) -> Result<Self> {
        let default_shader = Self::build_shader(&config, config.material)?;
        tracing::debug!(quality = ?config.quality, "frame orchestrator created");
        Ok(Self {
            quality: config.quality,
            config,
            default_shader,
            indicators: SlotMap::with_key(),
            morphs: SlotMap::with_key(),
        })
    }

    fn build_shader(config: &GlazeConfig, material: GlassMaterial) -> Result<GlassShader> {
        Ok(GlassShader::new(material)?
            .with_density(config.density)
            .with_refraction(config.refraction))
    }

    pub fn config(&self) -> &GlazeConfig {
        &self.config
    }

    pub fn quality(&self) -> RenderQuality {
        self.quality
    }

    /// Switch every surface between the standard and premium paths
    pub fn set_quality(&mut self, quality: RenderQuality) {
        if self.quality != quality {
            tracing::debug!(from = ?self.quality, to = ?quality, "render quality changed");
            self.quality = quality;
        }
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Register an indicator using the configured material
    ///
    /// # Panics
    ///
    /// Panics if `item_count < 2` or `selected >= item_count`.
    pub fn add_indicator(&mut self, item_count: usize, selected: usize, widget_width: f32) -> IndicatorId {
        let controller =
            IndicatorController::new(item_count, selected, widget_width, self.config.indicator);
        self.indicators.insert(IndicatorEntry {
            controller,
            shader: self.default_shader.clone(),
        })
    }

    /// Register an indicator with its own material
    ///
    /// # Panics
    ///
    /// Panics if `item_count < 2` or `selected >= item_count`.
    pub fn add_indicator_with_material(
        &mut self,
        item_count: usize,
        selected: usize,
        widget_width: f32,
        material: GlassMaterial,
    ) -> Result<IndicatorId> {
        let shader = Self::build_shader(&self.config, material)?;
        let controller =
            IndicatorController::new(item_count, selected, widget_width, self.config.indicator);
        Ok(self.indicators.insert(IndicatorEntry { controller, shader }))
    }

    /// Register a closed morph using the configured material
    ///
    /// # Panics
    ///
    /// Panics if a corner radius exceeds half of its shape's shorter side.
    pub fn add_morph(
        &mut self,
        trigger: Size,
        trigger_corner_radius: f32,
        target: Size,
        target_corner_radius: f32,
    ) -> MorphId {
        let engine = MorphEngine::new(
            trigger,
            trigger_corner_radius,
            target,
            target_corner_radius,
            self.config.morph,
        );
        self.morphs.insert(MorphEntry {
            engine,
            shader: self.default_shader.clone(),
        })
    }

    pub fn remove_indicator(&mut self, id: IndicatorId) -> Option<IndicatorController> {
        self.indicators.remove(id).map(|entry| entry.controller)
    }

    pub fn remove_morph(&mut self, id: MorphId) -> Option<MorphEngine> {
        self.morphs.remove(id).map(|entry| entry.engine)
    }

    pub fn indicator(&self, id: IndicatorId) -> Option<&IndicatorController> {
        self.indicators.get(id).map(|entry| &entry.controller)
    }

    pub fn morph(&self, id: MorphId) -> Option<&MorphEngine> {
        self.morphs.get(id).map(|entry| &entry.engine)
    }

    pub fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    pub fn morph_count(&self) -> usize {
        self.morphs.len()
    }

    /// Update an indicator's track width after layout
    pub fn set_indicator_width(&mut self, id: IndicatorId, width: f32) -> Result<()> {
        self.indicator_entry_mut(id)?.controller.set_widget_width(width);
        Ok(())
    }

    /// Update a morph's menu size after its content was measured
    ///
    /// # Panics
    ///
    /// Panics if the morph's target corner radius does not fit `size`.
    pub fn set_morph_target_size(&mut self, id: MorphId, size: Size) -> Result<()> {
        self.morph_entry_mut(id)?.engine.set_target_size(size);
        Ok(())
    }

    fn indicator_entry(&self, id: IndicatorId) -> Result<&IndicatorEntry> {
        self.indicators
            .get(id)
            .ok_or(GlazeError::UnknownHandle { kind: "indicator" })
    }

    fn indicator_entry_mut(&mut self, id: IndicatorId) -> Result<&mut IndicatorEntry> {
        self.indicators
            .get_mut(id)
            .ok_or(GlazeError::UnknownHandle { kind: "indicator" })
    }

    fn morph_entry(&self, id: MorphId) -> Result<&MorphEntry> {
        self.morphs
            .get(id)
            .ok_or(GlazeError::UnknownHandle { kind: "morph" })
    }

    fn morph_entry_mut(&mut self, id: MorphId) -> Result<&mut MorphEntry> {
        self.morphs
            .get_mut(id)
            .ok_or(GlazeError::UnknownHandle { kind: "morph" })
    }

    // =========================================================================
    // Input and ticking
    // =========================================================================

    /// Route an input event to its controller
    ///
    /// # Panics
    ///
    /// Panics on [`InputEvent::Select`] with an index outside the indicator's
    /// items.
    pub fn handle_event(
        &mut self,
        target: impl Into<EventTarget>,
        event: InputEvent,
    ) -> Result<EventResponse> {
        let response = match target.into() {
            EventTarget::Indicator(id) => {
                let controller = &mut self.indicator_entry_mut(id)?.controller;
                match event {
                    InputEvent::DragDown { position } => {
                        controller.on_drag_down(position);
                        EventResponse::Handled
                    }
                    InputEvent::DragUpdate { position } => {
                        controller.on_drag_update(position);
                        EventResponse::Handled
                    }
                    InputEvent::DragEnd { velocity } => EventResponse::Settling {
                        target_index: controller.on_drag_end(velocity),
                    },
                    InputEvent::DragCancel => {
                        controller.cancel();
                        EventResponse::Handled
                    }
                    InputEvent::Select { index } => {
                        controller.select(index);
                        EventResponse::Handled
                    }
                    InputEvent::TapToggle | InputEvent::Open | InputEvent::Close => {
                        EventResponse::Ignored
                    }
                }
            }
            EventTarget::Morph(id) => {
                let engine = &mut self.morph_entry_mut(id)?.engine;
                match event {
                    InputEvent::TapToggle => engine.toggle(),
                    InputEvent::Open => engine.open(),
                    InputEvent::Close => engine.close(),
                    _ => {
                        tracing::debug!(?event, "event does not apply to a morph");
                        return Ok(EventResponse::Ignored);
                    }
                }
                EventResponse::Morphing {
                    phase: engine.phase(),
                }
            }
        };

        tracing::trace!(?event, ?response, "input event handled");
        Ok(response)
    }

    /// Advance every controller by `dt` seconds
    ///
    /// Returns true while anything is still moving, so the host knows whether
    /// to keep requesting frames.
    pub fn tick(&mut self, dt: f32) -> bool {
        let mut active = 0usize;

        for entry in self.indicators.values_mut() {
            entry.controller.tick(dt);
            if !entry.controller.is_settled() {
                active += 1;
            }
        }
        for entry in self.morphs.values_mut() {
            entry.engine.step(dt);
            if entry.engine.is_animating() {
                active += 1;
            }
        }

        tracing::trace!(dt, active, "frame tick");
        active > 0
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render an indicator inside `track`
    ///
    /// The backdrop, if any, is sampled in the indicator's own frame space.
    pub fn render_indicator(
        &self,
        id: IndicatorId,
        track: &ShapeFrame,
        backdrop: Option<&dyn BackdropSampler>,
    ) -> Result<IndicatorFrame> {
        let entry = self.indicator_entry(id)?;
        let controller = &entry.controller;

        let rect = controller.indicator_rect(track);
        let glass = ShapeFrame::new(rect.size)
            .with_origin(rect.origin)
            .with_device_scale(track.device_scale);
        let shader = entry.shader.clone().with_quality(self.quality);
        let interaction = controller.interaction_intensity();

        Ok(IndicatorFrame {
            rect,
            transform: controller.jelly_transform(track),
            jelly: controller.jelly(),
            interaction,
            selected_index: controller.selected_index(),
            alignment: controller.alignment(),
            field: GlassField::rasterize(&shader, &glass, interaction, backdrop),
            instance: self.instance(&shader, &glass, interaction, backdrop.is_some()),
        })
    }

    /// Render a morph with its top-left corner at `anchor`
    pub fn render_morph(
        &self,
        id: MorphId,
        anchor: Point,
        device_scale: f32,
        backdrop: Option<&dyn BackdropSampler>,
    ) -> Result<MorphFrame> {
        let entry = self.morph_entry(id)?;
        let engine = &entry.engine;

        let geometry = engine.geometry();
        let frame = ShapeFrame::new(Size::new(geometry.width, geometry.height))
            .with_origin(anchor)
            .with_device_scale(device_scale);
        let shader = entry
            .shader
            .clone()
            .with_quality(self.quality)
            .with_corner_radius(geometry.corner_radius);

        Ok(MorphFrame {
            phase: engine.phase(),
            progress: engine.progress(),
            geometry,
            content: engine.content(),
            bounds: frame.bounds(),
            field: GlassField::rasterize(&shader, &frame, 0.0, backdrop),
            instance: self.instance(&shader, &frame, 0.0, backdrop.is_some()),
        })
    }

    fn instance(
        &self,
        shader: &GlassShader,
        frame: &ShapeFrame,
        interaction: f32,
        has_backdrop: bool,
    ) -> GpuGlassInstance {
        GpuGlassInstance::new(shader.material(), frame)
            .with_interaction(interaction)
            .with_density(shader.density())
            .with_quality(self.quality)
            .with_backdrop(has_backdrop)
    }
}
