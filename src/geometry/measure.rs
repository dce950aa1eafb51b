//! Great-circle measurements on a spherical earth.

use super::types::{LatLng, ShapeGeometry};
use geo::{ChamberlainDuquetteArea, Destination, Distance, Haversine, MultiPolygon, Polygon};

/// Great-circle distance in kilometers between two points.
pub fn distance_km(a: LatLng, b: LatLng) -> f64 {
    Haversine::distance(a.to_point(), b.to_point()) / 1000.0
}

/// Point reached by travelling `distance_km` from `origin` along `bearing_deg`
/// (degrees clockwise from north).
pub fn destination(origin: LatLng, bearing_deg: f64, distance_km: f64) -> LatLng {
    LatLng::from_point(Haversine::destination(
        origin.to_point(),
        bearing_deg,
        distance_km * 1000.0,
    ))
}

/// Geodesic area in square meters; line strings and empty rings measure zero.
pub fn area_m2(geometry: &ShapeGeometry) -> f64 {
    geometry
        .to_geo_polygon()
        .map(|polygon| polygon_area_m2(&polygon))
        .unwrap_or(0.0)
}

pub(crate) fn polygon_area_m2(polygon: &Polygon<f64>) -> f64 {
    polygon.chamberlain_duquette_unsigned_area()
}

pub(crate) fn multi_polygon_area_m2(polygons: &MultiPolygon<f64>) -> f64 {
    polygons.chamberlain_duquette_unsigned_area()
}
