use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// A read-only result record supplied to the widget once per render pass.
///
/// `identity` is the stable unique key used to correlate markers across
/// render passes. `payload` carries the remaining per-hit fields untouched,
/// so marker and info-window option callbacks can read them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub identity: String,
    pub geolocation: LatLng,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl Item {
    pub fn new(identity: impl Into<String>, geolocation: LatLng) -> Self {
        Self {
            identity: identity.into(),
            geolocation,
            payload: serde_json::Value::Null,
        }
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}
