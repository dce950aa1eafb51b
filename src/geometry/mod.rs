//! Geometry kernel for drawn map shapes.
//!
//! Pure functions only:
//! - builders turning clicked points into stored [`ShapeGeometry`] values
//! - great-circle distance and geodesic area
//! - overlap classification and trimming against committed polygons

mod build;
mod measure;
mod overlap;
mod types;

pub use build::{
    DEFAULT_CIRCLE_STEPS, circle, line_string, polygon_from_points, rectangle,
    rectangle_from_bounds,
};
pub use measure::{area_m2, destination, distance_km};
pub use overlap::{
    DEFAULT_AREA_TOLERANCE, DEFAULT_RELATIVE_AREA_TOLERANCE, OverlapOptions, OverlapResult,
    classify_overlap, trim_overlap,
};
pub use types::{LatLng, LatLngBounds, Position, Ring, ShapeGeometry};
