//! Prelude module for common geosync types and traits
//!
//! Re-exports the most commonly used types and traits for easy importing
//! with `use geosync::prelude::*;`

pub use crate::core::{
    config::{Padding, WidgetConfig},
    geo::{LatLng, LatLngBounds, Point},
    item::Item,
};

pub use crate::connector::SearchConnector;

pub use crate::control::{ControlState, NoopControl, RefineControl};

pub use crate::marker::{Marker, MarkerHandle};

pub use crate::provider::{
    events::{MapEventSink, MapSignal},
    MapSurface, Projection,
};

pub use crate::sync::{
    framing,
    interaction::InteractionState,
    projector::refinement_box,
    reconcile::{reconcile, MarkerDiff},
};

pub use crate::widget::GeoSearchWidget;

pub use crate::{Error as GeoSyncError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
