//! The refinement scheduler: turns a burst of viewport signals into at most
//! one refine action per user gesture, and never acts on programmatic
//! changes.

use crate::{
    connector::SearchConnector,
    provider::{events::MapEventSink, MapSurface},
    sync::projector::refinement_box,
    widget::GeoSearchWidget,
};

impl<M: MapSurface, C: SearchConnector> MapEventSink for GeoSearchWidget<M, C> {
    fn on_center_changed(&mut self) {
        if self.state.interaction.is_user_interaction() {
            self.connector.set_map_moved_since_last_refine();
        }
    }

    fn on_zoom_changed(&mut self) {
        if self.state.interaction.is_user_interaction() {
            self.state.interaction.set_pending_refine(true);
            self.connector.set_map_moved_since_last_refine();
        }
    }

    fn on_drag_start(&mut self) {
        if self.state.interaction.is_user_interaction() {
            self.state.interaction.set_pending_refine(true);
        }
    }

    fn on_idle(&mut self) {
        if self.state.interaction.is_user_interaction()
            && self.state.interaction.is_pending_refine()
            && self.connector.is_refine_on_map_move()
        {
            // The box is computed now, not at gesture start, so it reflects
            // the settled viewport.
            log::debug!("map settled with a pending refine, refining to current bounds");
            self.refine_with_current_bounds();
        }
    }
}

impl<M: MapSurface, C: SearchConnector> GeoSearchWidget<M, C> {
    /// Refines the search to the current viewport, minus the configured
    /// padding. This is both the idle-triggered deferred refine and the
    /// explicit "search this area" action; either way any pending refine
    /// is considered served.
    ///
    /// Fire-and-forget: a refine rejected downstream is not re-armed.
    pub fn refine_with_current_bounds(&mut self) {
        self.state.interaction.set_pending_refine(false);

        let viewport = self.surface.bounds();
        let scale = self.surface.scale();
        let area = refinement_box(&self.surface, &viewport, &self.config.padding, scale);
        self.connector.refine(area);
    }
}
