//! The map provider adapter seam.
//!
//! Any SDK exposing viewport get/set, fit-to-bounds, marker create/destroy
//! and the four gesture signals can drive the widget through [`MapSurface`].
//! Tile-based and vector-based providers plug in uniformly; only the
//! projection and scale differ per provider.

pub mod events;

use crate::{
    core::geo::{LatLng, LatLngBounds, Point},
    marker::MarkerHandle,
    provider::events::MapSignal,
    Result,
};

/// Conversion between geographic coordinates and the provider's
/// screen-projected coordinate space.
pub trait Projection {
    fn project(&self, position: LatLng) -> Point;
    fn unproject(&self, point: Point) -> LatLng;
}

/// The live map instance as seen by the widget.
///
/// Viewport state is always read on demand and never cached by the widget.
/// Setters are treated as synchronous even when the underlying animation
/// continues; feedback signals they raise inline must be surfaced through
/// [`MapSurface::poll_signals`] so the widget can classify them while its
/// programmatic scope is still held.
pub trait MapSurface: Projection {
    fn center(&self) -> LatLng;
    fn zoom(&self) -> f64;
    fn bounds(&self) -> LatLngBounds;

    fn set_center(&mut self, center: LatLng);
    fn set_zoom(&mut self, zoom: f64);
    fn fit_bounds(&mut self, bounds: &LatLngBounds);

    /// Places a marker on the surface. `options` and `info_window` are
    /// provider option bags produced by the widget's configuration
    /// callbacks; their interpretation is entirely provider-specific.
    fn add_marker(
        &mut self,
        identity: &str,
        position: LatLng,
        options: &serde_json::Value,
        info_window: &serde_json::Value,
    ) -> Result<MarkerHandle>;

    /// Detaches a marker from the surface.
    fn remove_marker(&mut self, handle: MarkerHandle);

    /// Zoom-dependent scale factor of the projected coordinate space.
    /// Providers with a power-of-two tile pyramid keep the default.
    fn scale(&self) -> f64 {
        2_f64.powf(self.zoom())
    }

    /// Drains signals the surface raised synchronously during the last
    /// viewport mutation. Providers that only deliver signals on later
    /// event-loop turns keep the default.
    fn poll_signals(&mut self) -> Vec<MapSignal> {
        Vec::new()
    }
}
