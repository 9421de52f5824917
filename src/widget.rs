//! The orchestrating widget: one setup pass at construction, one render
//! pass per data update.

use crate::{
    control::{ControlState, NoopControl, RefineControl},
    core::{config::WidgetConfig, item::Item},
    marker::Marker,
    prelude::{MapEventSink, MapSignal, MapSurface, SearchConnector},
    sync::{framing, interaction::InteractionState, reconcile::reconcile},
    GeoSyncError, Result,
};

/// Mutable widget state, owned exclusively by one widget instance for its
/// lifetime. Only the render pass and the refinement scheduler mutate it.
#[derive(Debug, Default)]
pub struct RenderState {
    pub(crate) is_map_already_rendered: bool,
    pub(crate) interaction: InteractionState,
    pub(crate) markers: Vec<Marker>,
}

/// Keeps a live result set, the map viewport, and the refine trigger
/// mutually consistent over a [`MapSurface`].
///
/// The host forwards map gestures through [`GeoSearchWidget::notify`] and
/// calls [`GeoSearchWidget::render`] once per data update. Everything the
/// widget does to the viewport itself runs inside a programmatic scope, so
/// its own mutations are never mistaken for user gestures.
pub struct GeoSearchWidget<M: MapSurface, C: SearchConnector> {
    pub(crate) config: WidgetConfig,
    pub(crate) surface: M,
    pub(crate) connector: C,
    pub(crate) control: Box<dyn RefineControl>,
    pub(crate) state: RenderState,
}

impl<M: MapSurface, C: SearchConnector> GeoSearchWidget<M, C> {
    /// The setup pass: validates the configuration and initializes the
    /// widget state. Fails before any map work when no rendering container
    /// is configured.
    pub fn new(config: WidgetConfig, surface: M, connector: C) -> Result<Self> {
        if config.container.trim().is_empty() {
            return Err(GeoSyncError::MissingContainer.into());
        }

        Ok(Self {
            config,
            surface,
            connector,
            control: Box::new(NoopControl),
            state: RenderState::default(),
        })
    }

    /// Replaces the refine control collaborator.
    pub fn with_control(mut self, control: Box<dyn RefineControl>) -> Self {
        self.control = control;
        self
    }

    /// The data render pass: initial framing, marker reconciliation,
    /// auto-fit, control refresh.
    pub fn render(&mut self, items: &[Item]) -> Result<()> {
        let has_results = !items.is_empty();

        // Snap to the configured view only while there is nothing to frame,
        // so the map does not blink when the first results land.
        if framing::should_snap_to_initial(has_results, self.state.is_map_already_rendered) {
            let center = self.config.initial_center();
            let zoom = self.config.initial_zoom;
            if center.is_some() || zoom.is_some() {
                self.run_programmatic(|surface| {
                    if let Some(center) = center {
                        surface.set_center(center);
                    }
                    if let Some(zoom) = zoom {
                        surface.set_zoom(zoom);
                    }
                });
            }
        }

        let diff = reconcile(std::mem::take(&mut self.state.markers), items);
        log::debug!(
            "render pass: {} items, {} retained, {} created, {} removed",
            items.len(),
            diff.retained.len(),
            diff.additions.len(),
            diff.removed.len()
        );

        for marker in &diff.removed {
            self.surface.remove_marker(marker.handle());
        }

        let mut markers = diff.retained;
        for item in &diff.additions {
            let options = (self.config.marker_options)(item);
            let info_window = (self.config.info_window_options)(item);
            let handle =
                self.surface
                    .add_marker(&item.identity, item.geolocation, &options, &info_window)?;
            markers.push(Marker::new(item.identity.clone(), item.geolocation, handle));
        }
        self.state.markers = markers;

        if framing::should_fit_to_markers(
            self.state.markers.len(),
            self.connector.has_map_moved_since_last_refine(),
            self.connector.is_refined_by_map(),
        ) {
            if let Some(bounds) = framing::markers_bounds(&self.state.markers) {
                self.run_programmatic(|surface| surface.fit_bounds(&bounds));
            }
        }

        // The view is now framed by the initial position or by fitBounds;
        // the initial snap must never fire again, even on a later
        // empty-result pass.
        self.state.is_map_already_rendered = true;

        let control_state = self.control_state();
        self.control.render(&control_state);

        Ok(())
    }

    /// Routes a surface signal to the refinement scheduler hooks.
    pub fn notify(&mut self, signal: MapSignal) {
        match signal {
            MapSignal::CenterChanged => self.on_center_changed(),
            MapSignal::ZoomChanged => self.on_zoom_changed(),
            MapSignal::DragStart => self.on_drag_start(),
            MapSignal::Idle => self.on_idle(),
        }
    }

    /// Passes a "clear the map refinement" action through to the search
    /// layer, on behalf of the refine control.
    pub fn clear_map_refinement(&mut self) {
        self.connector.clear_map_refinement();
    }

    /// Passes a "refine on map move" toggle through to the search layer.
    pub fn toggle_refine_on_map_move(&mut self) {
        self.connector.toggle_refine_on_map_move();
    }

    pub fn markers(&self) -> &[Marker] {
        &self.state.markers
    }

    pub fn is_pending_refine(&self) -> bool {
        self.state.interaction.is_pending_refine()
    }

    pub fn surface(&self) -> &M {
        &self.surface
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    pub fn connector_mut(&mut self) -> &mut C {
        &mut self.connector
    }

    /// Runs a viewport-mutating action inside the programmatic scope and
    /// drains any feedback the surface raised inline, so synchronous
    /// center/zoom notifications are classified as programmatic too.
    pub(crate) fn run_programmatic(&mut self, action: impl FnOnce(&mut M)) {
        let _scope = self.state.interaction.programmatic();
        action(&mut self.surface);
        let feedback = self.surface.poll_signals();
        for signal in feedback {
            self.notify(signal);
        }
    }

    fn control_state(&self) -> ControlState {
        ControlState {
            enable_refine_control: self.config.enable_refine_control,
            enable_clear_map_refinement: self.config.enable_clear_map_refinement,
            is_refine_on_map_move: self.connector.is_refine_on_map_move(),
            is_refined_by_map: self.connector.is_refined_by_map(),
            has_map_moved_since_last_refine: self.connector.has_map_moved_since_last_refine(),
        }
    }
}
