//! Coordinate and geometry value types.

use geo::{Coord, LineString, Point, Polygon};
use serde::{Deserialize, Serialize};

/// Stored coordinate pair in `[lng, lat]` order (GeoJSON convention).
pub type Position = [f64; 2];

/// Closed sequence of positions; first and last are equal once built.
pub type Ring = Vec<Position>;

/// A geographic point as recorded from pointer input, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns the storage-order position `[lng, lat]`.
    pub fn position(&self) -> Position {
        [self.lng, self.lat]
    }

    pub(crate) fn to_point(self) -> Point<f64> {
        Point::new(self.lng, self.lat)
    }

    pub(crate) fn from_point(point: Point<f64>) -> Self {
        Self {
            lat: point.y(),
            lng: point.x(),
        }
    }
}

/// Axis-aligned geographic bounds spanned by two corner points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLngBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl LatLngBounds {
    /// Builds normalized bounds from two arbitrary corners.
    pub fn from_corners(a: LatLng, b: LatLng) -> Self {
        Self {
            north: a.lat.max(b.lat),
            south: a.lat.min(b.lat),
            east: a.lng.max(b.lng),
            west: a.lng.min(b.lng),
        }
    }

    /// True when the bounds cover no area (a line or a single point).
    pub fn is_degenerate(&self) -> bool {
        self.north <= self.south || self.east <= self.west
    }
}

/// Geometry of a drawn shape.
///
/// Circles and rectangles are stored as polygons after construction.
/// Serializes as a GeoJSON geometry object (`{"type": ..., "coordinates": ...}`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum ShapeGeometry {
    /// Rings in `[lng, lat]` order; the first ring is the exterior.
    Polygon(Vec<Ring>),
    /// Open vertex sequence in `[lng, lat]` order.
    LineString(Vec<Position>),
}

impl ShapeGeometry {
    /// True for polygon geometries, which take part in overlap resolution.
    pub fn is_area(&self) -> bool {
        matches!(self, ShapeGeometry::Polygon(_))
    }

    /// Returns the exterior ring of a polygon.
    pub fn exterior(&self) -> Option<&Ring> {
        match self {
            ShapeGeometry::Polygon(rings) => rings.first(),
            ShapeGeometry::LineString(_) => None,
        }
    }

    /// Number of stored positions across all rings or the line.
    pub fn vertex_count(&self) -> usize {
        match self {
            ShapeGeometry::Polygon(rings) => rings.iter().map(Vec::len).sum(),
            ShapeGeometry::LineString(points) => points.len(),
        }
    }

    /// Converts a polygon into a `geo` polygon.
    ///
    /// Returns `None` for line strings and for polygons whose exterior ring is
    /// too short to enclose anything (fewer than four positions).
    pub fn to_geo_polygon(&self) -> Option<Polygon<f64>> {
        let ShapeGeometry::Polygon(rings) = self else {
            return None;
        };
        let exterior = rings.first()?;
        if exterior.len() < 4 {
            return None;
        }

        let interiors = rings[1..]
            .iter()
            .filter(|ring| ring.len() >= 4)
            .map(|ring| ring_to_line_string(ring))
            .collect();

        Some(Polygon::new(ring_to_line_string(exterior), interiors))
    }

    /// Builds a polygon geometry from a `geo` polygon.
    pub fn from_geo_polygon(polygon: &Polygon<f64>) -> Self {
        let mut rings = Vec::with_capacity(1 + polygon.interiors().len());
        rings.push(line_string_to_ring(polygon.exterior()));
        rings.extend(polygon.interiors().iter().map(line_string_to_ring));
        ShapeGeometry::Polygon(rings)
    }
}

fn ring_to_line_string(ring: &[Position]) -> LineString<f64> {
    ring.iter()
        .map(|&[x, y]| Coord { x, y })
        .collect::<Vec<_>>()
        .into()
}

fn line_string_to_ring(line: &LineString<f64>) -> Ring {
    line.coords().map(|c| [c.x, c.y]).collect()
}
