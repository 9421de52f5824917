use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// Provider-specific handle for a marker placed on the map surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkerHandle(pub u64);

/// One rendered point on the map, correlated to a result item by identity.
///
/// A marker is created when its identity first appears in the result list
/// and detached from the surface when the identity disappears from a
/// subsequent list. At most one marker exists per identity at any time.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    identity: String,
    position: LatLng,
    handle: MarkerHandle,
}

impl Marker {
    pub fn new(identity: impl Into<String>, position: LatLng, handle: MarkerHandle) -> Self {
        Self {
            identity: identity.into(),
            position,
            handle,
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn handle(&self) -> MarkerHandle {
        self.handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_accessors() {
        let marker = Marker::new("123", LatLng::new(10.0, 12.0), MarkerHandle(7));

        assert_eq!(marker.identity(), "123");
        assert_eq!(marker.position(), LatLng::new(10.0, 12.0));
        assert_eq!(marker.handle(), MarkerHandle(7));
    }
}
