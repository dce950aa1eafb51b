//! Shape builders: turn raw pointer coordinates into stored geometries.

use super::measure::destination;
use super::types::{LatLng, LatLngBounds, Position, ShapeGeometry};

/// Default number of sides used to approximate a circle.
pub const DEFAULT_CIRCLE_STEPS: usize = 64;

/// Builds a closed polygon from clicked vertices.
///
/// Coordinates are reordered to `[lng, lat]` and the first vertex is appended
/// to close the ring. Fewer than three points yield a polygon with a single
/// empty ring, which must not be passed on to overlap resolution.
pub fn polygon_from_points(points: &[LatLng]) -> ShapeGeometry {
    if points.len() < 3 {
        return ShapeGeometry::Polygon(vec![Vec::new()]);
    }

    let mut ring: Vec<Position> = points.iter().map(LatLng::position).collect();
    ring.push(points[0].position());
    ShapeGeometry::Polygon(vec![ring])
}

/// Builds the five-position ring of a rectangle, starting and ending at the
/// north-west corner.
///
/// Bounds are not validated; inverted or flat bounds produce a degenerate ring.
pub fn rectangle_from_bounds(north: f64, south: f64, east: f64, west: f64) -> ShapeGeometry {
    ShapeGeometry::Polygon(vec![vec![
        [west, north],
        [east, north],
        [east, south],
        [west, south],
        [west, north],
    ]])
}

/// Builds a rectangle covering normalized bounds.
pub fn rectangle(bounds: &LatLngBounds) -> ShapeGeometry {
    rectangle_from_bounds(bounds.north, bounds.south, bounds.east, bounds.west)
}

/// Approximates a circle of `radius_km` around `center` with a `steps`-sided
/// polygon.
///
/// Vertices are placed at equal bearings going counter-clockwise from north;
/// the ring holds `steps + 1` positions because it is closed.
pub fn circle(center: LatLng, radius_km: f64, steps: usize) -> ShapeGeometry {
    let steps = steps.max(3);
    let mut ring: Vec<Position> = (0..steps)
        .map(|i| {
            let bearing = -360.0 * i as f64 / steps as f64;
            destination(center, bearing, radius_km).position()
        })
        .collect();
    ring.push(ring[0]);
    ShapeGeometry::Polygon(vec![ring])
}

/// Builds an open line through the clicked points in `[lng, lat]` order.
pub fn line_string(points: &[LatLng]) -> ShapeGeometry {
    ShapeGeometry::LineString(points.iter().map(LatLng::position).collect())
}
