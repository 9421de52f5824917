use serde::{Deserialize, Serialize};

/// Viewport signals emitted by the live map surface.
///
/// The host routes these to [`crate::GeoSearchWidget::notify`]; providers
/// that raise feedback synchronously surface them through
/// [`crate::MapSurface::poll_signals`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MapSignal {
    /// The viewport center moved.
    CenterChanged,
    /// The zoom level changed.
    ZoomChanged,
    /// A drag gesture started.
    DragStart,
    /// The map finished animating/settling after a gesture.
    Idle,
}

impl MapSignal {
    /// Signals that arm a deferred refine when user-initiated.
    pub fn arms_refine(&self) -> bool {
        matches!(self, MapSignal::ZoomChanged | MapSignal::DragStart)
    }
}

/// The four-hook subscription contract between a map surface and the
/// refinement scheduler. Alternate providers satisfy it uniformly by
/// translating their own event vocabulary into these hooks.
pub trait MapEventSink {
    fn on_center_changed(&mut self);
    fn on_zoom_changed(&mut self);
    fn on_drag_start(&mut self);
    fn on_idle(&mut self);
}
