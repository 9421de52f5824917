//! Per-widget configuration: viewport defaults, refinement padding, control
//! flags, and the marker/info-window construction callbacks.

use crate::core::{geo::LatLng, item::Item};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Callback producing a provider option bag for one result item.
pub type OptionsFn = Box<dyn Fn(&Item) -> serde_json::Value>;

/// Pixel inset carved out of the refinement bounding box, typically the
/// screen region reserved for on-screen controls.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn uniform(inset: f64) -> Self {
        Self::new(inset, inset, inset, inset)
    }
}

/// Immutable per-widget configuration.
///
/// `position` takes precedence over `initial_position` for the initial
/// viewport snap. When neither is supplied the provider's default view
/// stands.
pub struct WidgetConfig {
    pub container: String,
    pub initial_position: Option<LatLng>,
    pub position: Option<LatLng>,
    pub initial_zoom: Option<f64>,
    pub padding: Padding,
    pub enable_refine_control: bool,
    pub enable_clear_map_refinement: bool,
    pub marker_options: OptionsFn,
    pub info_window_options: OptionsFn,
}

impl WidgetConfig {
    pub fn new(container: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            initial_position: None,
            position: None,
            initial_zoom: None,
            padding: Padding::default(),
            enable_refine_control: true,
            enable_clear_map_refinement: true,
            marker_options: Box::new(|_| serde_json::Value::Null),
            info_window_options: Box::new(|_| serde_json::Value::Null),
        }
    }

    pub fn with_initial_view(mut self, position: LatLng, zoom: f64) -> Self {
        self.initial_position = Some(position);
        self.initial_zoom = Some(zoom);
        self
    }

    pub fn with_position(mut self, position: LatLng) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_refine_control(mut self, enabled: bool) -> Self {
        self.enable_refine_control = enabled;
        self
    }

    pub fn with_clear_map_refinement(mut self, enabled: bool) -> Self {
        self.enable_clear_map_refinement = enabled;
        self
    }

    pub fn with_marker_options(mut self, options: impl Fn(&Item) -> serde_json::Value + 'static) -> Self {
        self.marker_options = Box::new(options);
        self
    }

    pub fn with_info_window_options(
        mut self,
        options: impl Fn(&Item) -> serde_json::Value + 'static,
    ) -> Self {
        self.info_window_options = Box::new(options);
        self
    }

    /// The position used for the initial viewport snap, if any.
    pub fn initial_center(&self) -> Option<LatLng> {
        self.position.or(self.initial_position)
    }
}

impl fmt::Debug for WidgetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetConfig")
            .field("container", &self.container)
            .field("initial_position", &self.initial_position)
            .field("position", &self.position)
            .field("initial_zoom", &self.initial_zoom)
            .field("padding", &self.padding)
            .field("enable_refine_control", &self.enable_refine_control)
            .field(
                "enable_clear_map_refinement",
                &self.enable_clear_map_refinement,
            )
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WidgetConfig::new("map");

        assert_eq!(config.container, "map");
        assert_eq!(config.padding, Padding::default());
        assert!(config.enable_refine_control);
        assert!(config.enable_clear_map_refinement);
        assert!(config.initial_center().is_none());
        assert!((config.marker_options)(&Item::new("1", LatLng::default())).is_null());
    }

    #[test]
    fn test_position_overrides_initial_position() {
        let config = WidgetConfig::new("map")
            .with_initial_view(LatLng::new(10.0, 12.0), 8.0)
            .with_position(LatLng::new(12.0, 14.0));

        assert_eq!(config.initial_center(), Some(LatLng::new(12.0, 14.0)));
        assert_eq!(config.initial_zoom, Some(8.0));
    }

    #[test]
    fn test_marker_options_callback() {
        let config = WidgetConfig::new("map")
            .with_marker_options(|item| serde_json::json!({ "title": item.identity }));

        let options = (config.marker_options)(&Item::new("123", LatLng::default()));
        assert_eq!(options["title"], "123");
    }

    #[test]
    fn test_uniform_padding() {
        let padding = Padding::uniform(16.0);
        assert_eq!(padding, Padding::new(16.0, 16.0, 16.0, 16.0));
    }
}
