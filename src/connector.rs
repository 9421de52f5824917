use crate::core::geo::LatLngBounds;

/// The surrounding search-state layer, owner of the refinement action and
/// of the cross-render-pass predicates the widget consults.
///
/// The widget invokes these hooks but implements none of them. The refine
/// action is fire-and-forget: the widget does not await or interpret a
/// result, and a rejected request is the connector's concern.
pub trait SearchConnector {
    /// Issues a new search request constrained to the given area.
    fn refine(&mut self, area: LatLngBounds);

    /// Drops the current map-area refinement.
    fn clear_map_refinement(&mut self);

    /// Flips the "refine on map move" setting.
    fn toggle_refine_on_map_move(&mut self);

    /// Whether a settled user gesture should trigger a refinement.
    fn is_refine_on_map_move(&self) -> bool;

    /// Records that the user moved the map since the last refinement;
    /// suppresses auto-fit until the next refine.
    fn set_map_moved_since_last_refine(&mut self);

    fn has_map_moved_since_last_refine(&self) -> bool;

    /// Whether the current result set originated from a map-area
    /// refinement.
    fn is_refined_by_map(&self) -> bool;
}
