//! Decides, per render pass, whether to snap to the initial view, auto-fit
//! to the current markers, or leave the viewport untouched.

use crate::{core::geo::LatLngBounds, marker::Marker};

/// The one-shot initial framing: only before any pass has rendered the map
/// and only while there are no results to frame instead.
pub fn should_snap_to_initial(has_results: bool, is_map_already_rendered: bool) -> bool {
    !has_results && !is_map_already_rendered
}

/// Auto-fit applies when there is something to frame and neither the user
/// nor a map-driven refinement currently owns the viewport. Fitting in
/// either of those cases would fight the view the user just asked for.
pub fn should_fit_to_markers(
    marker_count: usize,
    has_map_moved_since_last_refine: bool,
    is_refined_by_map: bool,
) -> bool {
    marker_count > 0 && !has_map_moved_since_last_refine && !is_refined_by_map
}

/// The union of all current marker positions, or `None` without markers.
pub fn markers_bounds(markers: &[Marker]) -> Option<LatLngBounds> {
    let mut positions = markers.iter().map(|marker| marker.position());
    let first = positions.next()?;

    let mut bounds = LatLngBounds::from_position(first);
    for position in positions {
        bounds.extend(&position);
    }
    Some(bounds)
}
