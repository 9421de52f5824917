//! Computes the geographic bounding box used as a refinement parameter.

use crate::{
    core::{config::Padding, geo::LatLngBounds},
    provider::Projection,
};

/// Shrinks the raw viewport bounds by a fixed screen-pixel inset and
/// returns the result as geographic coordinates.
///
/// The adjustment happens in the provider's projected coordinate space so
/// the carved-out region stays constant in screen pixels regardless of
/// zoom: the north-east corner moves inward by `padding.right / scale`
/// horizontally and outward by `padding.top / scale` vertically, the
/// south-west corner symmetrically with `padding.right` and
/// `padding.bottom`. `scale` is `2^zoom` for power-of-two tile pyramids
/// ([`crate::MapSurface::scale`]).
pub fn refinement_box<P: Projection + ?Sized>(
    projection: &P,
    viewport: &LatLngBounds,
    padding: &Padding,
    scale: f64,
) -> LatLngBounds {
    let mut north_east = projection.project(viewport.north_east);
    north_east.x -= padding.right / scale;
    north_east.y += padding.top / scale;

    let mut south_west = projection.project(viewport.south_west);
    south_west.x += padding.right / scale;
    south_west.y -= padding.bottom / scale;

    LatLngBounds::new(
        projection.unproject(south_west),
        projection.unproject(north_east),
    )
}
