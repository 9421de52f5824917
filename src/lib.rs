//! # geosync
//!
//! A map-widget synchronization engine for live geo search results.
//!
//! `geosync` keeps three things mutually consistent: the viewport of an
//! interactive map surface, a set of markers rendered from a result list,
//! and the "refine this area" trigger of a surrounding search layer. Its
//! central concern is telling viewport changes the *user* made apart from
//! changes the widget made on its own behalf, so that programmatic updates
//! never masquerade as gestures and spawn feedback loops
//! (map move -> refine -> new results -> map move -> ...).
//!
//! The map SDK, the search-state layer, and the refine control are all
//! external collaborators behind traits ([`MapSurface`], [`SearchConnector`],
//! [`RefineControl`]); any provider satisfying those contracts is pluggable.

pub mod connector;
pub mod control;
pub mod core;
pub mod marker;
pub mod prelude;
pub mod provider;
pub mod sync;
pub mod widget;

// Re-export public API
pub use crate::core::{
    config::{Padding, WidgetConfig},
    geo::{LatLng, LatLngBounds, Point},
    item::Item,
};

pub use connector::SearchConnector;

pub use control::{ControlState, NoopControl, RefineControl};

pub use marker::{Marker, MarkerHandle};

pub use provider::{
    events::{MapEventSink, MapSignal},
    MapSurface, Projection,
};

pub use sync::{
    interaction::{InteractionState, ProgrammaticScope},
    projector::refinement_box,
    reconcile::{reconcile, MarkerDiff},
};

pub use widget::{GeoSearchWidget, RenderState};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum GeoSyncError {
    #[error("a rendering container must be provided")]
    MissingContainer,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("map surface error: {0}")]
    Surface(String),
}

/// Error type alias for convenience
pub type Error = GeoSyncError;
