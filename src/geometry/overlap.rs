//! Overlap classification and trimming between a candidate shape and the
//! shapes already committed.
//!
//! Both operations only consider polygon geometries; line strings never
//! overlap anything. Existing shapes are visited in their stored order.

use super::measure::{multi_polygon_area_m2, polygon_area_m2};
use super::types::ShapeGeometry;
use crate::config::ClassificationScan;
use geo::{BooleanOps, MultiPolygon, Polygon};
use log::debug;

/// Default absolute tolerance (square meters) when comparing intersection areas.
pub const DEFAULT_AREA_TOLERANCE: f64 = 1e-4;

/// Default tolerance relative to the larger compared area.
///
/// Boolean operations snap coordinates to an integer grid, so results for
/// large shapes drift by more than the absolute tolerance.
pub const DEFAULT_RELATIVE_AREA_TOLERANCE: f64 = 1e-6;

/// Tuning for overlap classification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlapOptions {
    /// Two areas closer than this (square meters) count as equal.
    pub tolerance: f64,
    /// Additional tolerance as a fraction of the larger area.
    pub relative_tolerance: f64,
    /// Whether classification stops at the first intersecting shape.
    pub scan: ClassificationScan,
}

impl OverlapOptions {
    /// True when two areas are equal within tolerance.
    pub fn areas_match(&self, a: f64, b: f64) -> bool {
        let allowed = self.tolerance.max(self.relative_tolerance * a.max(b));
        (a - b).abs() < allowed
    }
}

impl Default for OverlapOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_AREA_TOLERANCE,
            relative_tolerance: DEFAULT_RELATIVE_AREA_TOLERANCE,
            scan: ClassificationScan::FirstMatch,
        }
    }
}

/// Outcome of [`classify_overlap`].
///
/// `fully_enclosed` implies `overlaps`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverlapResult {
    pub overlaps: bool,
    pub fully_enclosed: bool,
}

impl OverlapResult {
    pub const NONE: Self = Self {
        overlaps: false,
        fully_enclosed: false,
    };
    pub const PARTIAL: Self = Self {
        overlaps: true,
        fully_enclosed: false,
    };
    pub const ENCLOSED: Self = Self {
        overlaps: true,
        fully_enclosed: true,
    };
}

/// Classifies how `candidate` overlaps the existing polygons.
///
/// For an intersecting shape, the candidate is fully enclosed when the
/// intersection area matches either the candidate's area or the existing
/// shape's area (see [`OverlapOptions::areas_match`]); any other
/// intersection is a partial overlap. With [`ClassificationScan::FirstMatch`] the first
/// intersecting shape decides the result.
///
/// A candidate without a usable exterior ring never overlaps.
pub fn classify_overlap<'a, I>(
    candidate: &ShapeGeometry,
    existing: I,
    options: &OverlapOptions,
) -> OverlapResult
where
    I: IntoIterator<Item = &'a ShapeGeometry>,
{
    let Some(candidate) = candidate.to_geo_polygon() else {
        return OverlapResult::NONE;
    };
    let candidate_area = polygon_area_m2(&candidate);
    let mut result = OverlapResult::NONE;

    for (index, other) in existing
        .into_iter()
        .filter_map(ShapeGeometry::to_geo_polygon)
        .enumerate()
    {
        let intersection = candidate.intersection(&other);
        if intersection.0.is_empty() {
            continue;
        }

        let intersection_area = multi_polygon_area_m2(&intersection);
        let existing_area = polygon_area_m2(&other);
        debug!(
            "Candidate intersects existing shape #{index}: intersection {intersection_area:.3} m², candidate {candidate_area:.3} m², existing {existing_area:.3} m²"
        );

        if options.areas_match(intersection_area, candidate_area)
            || options.areas_match(intersection_area, existing_area)
        {
            return OverlapResult::ENCLOSED;
        }

        result = OverlapResult::PARTIAL;
        if options.scan == ClassificationScan::FirstMatch {
            break;
        }
    }

    result
}

/// Subtracts every existing polygon from `candidate`, in order.
///
/// Returns `None` as soon as a subtraction consumes the candidate entirely or
/// splits it into several parts; the candidate is then dropped rather than
/// partially trimmed. Otherwise returns the single remaining polygon.
pub fn trim_overlap<'a, I>(candidate: &ShapeGeometry, existing: I) -> Option<ShapeGeometry>
where
    I: IntoIterator<Item = &'a ShapeGeometry>,
{
    let mut remainder = candidate.to_geo_polygon()?;

    for (index, other) in existing
        .into_iter()
        .filter_map(ShapeGeometry::to_geo_polygon)
        .enumerate()
    {
        let difference = remainder.difference(&other);
        match single_polygon(difference) {
            Some(polygon) => remainder = polygon,
            None => {
                debug!("Trimming against existing shape #{index} left no single polygon");
                return None;
            }
        }
    }

    Some(ShapeGeometry::from_geo_polygon(&remainder))
}

fn single_polygon(polygons: MultiPolygon<f64>) -> Option<Polygon<f64>> {
    let mut parts = polygons.0.into_iter();
    match (parts.next(), parts.next()) {
        (Some(polygon), None) => Some(polygon),
        _ => None,
    }
}
