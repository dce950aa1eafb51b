//! Configuration type definitions.

use super::enums::{ClassificationScan, ColorSpec, TrimFailurePolicy};
use crate::draw::ShapeType;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Maximum number of committed shapes per shape type.
///
/// The toolbar refuses to select a tool whose limit is reached, and the
/// drawing state machine refuses to commit past it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ShapeLimits {
    /// Maximum polygons (valid range: 1 - 1000)
    #[serde(default = "default_max_polygons")]
    pub polygon: usize,

    /// Maximum circles (valid range: 1 - 1000)
    #[serde(default = "default_max_circles")]
    pub circle: usize,

    /// Maximum rectangles (valid range: 1 - 1000)
    #[serde(default = "default_max_rectangles")]
    pub rectangle: usize,

    /// Maximum line strings (valid range: 1 - 1000)
    #[serde(default = "default_max_line_strings")]
    pub line_string: usize,
}

impl ShapeLimits {
    /// Returns the configured maximum for a shape type.
    pub fn max_for(&self, shape_type: ShapeType) -> usize {
        match shape_type {
            ShapeType::Polygon => self.polygon,
            ShapeType::Circle => self.circle,
            ShapeType::Rectangle => self.rectangle,
            ShapeType::LineString => self.line_string,
        }
    }

    pub(crate) fn max_for_mut(&mut self, shape_type: ShapeType) -> &mut usize {
        match shape_type {
            ShapeType::Polygon => &mut self.polygon,
            ShapeType::Circle => &mut self.circle,
            ShapeType::Rectangle => &mut self.rectangle,
            ShapeType::LineString => &mut self.line_string,
        }
    }
}

impl Default for ShapeLimits {
    fn default() -> Self {
        Self {
            polygon: default_max_polygons(),
            circle: default_max_circles(),
            rectangle: default_max_rectangles(),
            line_string: default_max_line_strings(),
        }
    }
}

/// Circle approximation settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CircleConfig {
    /// Number of polygon sides used for a circle (valid range: 8 - 1024)
    /// Higher values give smoother circles at the cost of larger geometries
    #[serde(default = "default_circle_steps")]
    pub steps: usize,
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            steps: default_circle_steps(),
        }
    }
}

/// Overlap resolution settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OverlapConfig {
    /// Absolute area tolerance in square meters (valid range: >0 - 1e6)
    #[serde(default = "default_area_tolerance")]
    pub area_tolerance: f64,

    /// Area tolerance relative to the compared areas (valid range: 0.0 - 0.01)
    #[serde(default = "default_relative_area_tolerance")]
    pub relative_area_tolerance: f64,

    /// Whether classification stops at the first intersecting shape
    /// ("first-match") or inspects all of them ("exhaustive")
    #[serde(default = "default_classification")]
    pub classification: ClassificationScan,

    /// What to do when trimming leaves no single polygon ("silent" or "notify")
    #[serde(default = "default_trim_failure")]
    pub trim_failure: TrimFailurePolicy,

    /// Reject circles and rectangles that cover no area
    #[serde(default = "default_reject_degenerate")]
    pub reject_degenerate: bool,
}

impl Default for OverlapConfig {
    fn default() -> Self {
        Self {
            area_tolerance: default_area_tolerance(),
            relative_area_tolerance: default_relative_area_tolerance(),
            classification: default_classification(),
            trim_failure: default_trim_failure(),
            reject_degenerate: default_reject_degenerate(),
        }
    }
}

/// Layer styling handed to the rendering collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StyleConfig {
    /// Stroke and fill color for area shapes
    #[serde(default = "default_shape_color")]
    pub area_color: ColorSpec,

    /// Fill opacity for area shapes (valid range: 0.0 - 1.0)
    #[serde(default = "default_area_fill_opacity")]
    pub area_fill_opacity: f64,

    /// Stroke weight for area shapes in pixels (valid range: 0.5 - 20.0)
    #[serde(default = "default_area_weight")]
    pub area_weight: f64,

    /// Stroke color for line strings
    #[serde(default = "default_shape_color")]
    pub line_color: ColorSpec,

    /// Stroke weight for line strings in pixels (valid range: 0.5 - 20.0)
    #[serde(default = "default_line_weight")]
    pub line_weight: f64,

    /// Stroke opacity of committed shapes (valid range: 0.0 - 1.0)
    #[serde(default = "default_committed_opacity")]
    pub committed_opacity: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            area_color: default_shape_color(),
            area_fill_opacity: default_area_fill_opacity(),
            area_weight: default_area_weight(),
            line_color: default_shape_color(),
            line_weight: default_line_weight(),
            committed_opacity: default_committed_opacity(),
        }
    }
}

/// GeoJSON export settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory exported files are written to (supports `~/`)
    #[serde(default = "default_export_directory")]
    pub directory: String,

    /// Filename prefix; the unix timestamp in milliseconds and `.geojson` are appended
    #[serde(default = "default_filename_prefix")]
    pub filename_prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            filename_prefix: default_filename_prefix(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_max_polygons() -> usize {
    10
}

fn default_max_circles() -> usize {
    5
}

fn default_max_rectangles() -> usize {
    5
}

fn default_max_line_strings() -> usize {
    20
}

fn default_circle_steps() -> usize {
    crate::geometry::DEFAULT_CIRCLE_STEPS
}

fn default_area_tolerance() -> f64 {
    crate::geometry::DEFAULT_AREA_TOLERANCE
}

fn default_relative_area_tolerance() -> f64 {
    crate::geometry::DEFAULT_RELATIVE_AREA_TOLERANCE
}

fn default_classification() -> ClassificationScan {
    ClassificationScan::FirstMatch
}

fn default_trim_failure() -> TrimFailurePolicy {
    TrimFailurePolicy::Silent
}

fn default_reject_degenerate() -> bool {
    true
}

fn default_shape_color() -> ColorSpec {
    ColorSpec::Hex("#3388ff".to_string())
}

fn default_area_fill_opacity() -> f64 {
    0.2
}

fn default_area_weight() -> f64 {
    2.0
}

fn default_line_weight() -> f64 {
    3.0
}

fn default_committed_opacity() -> f64 {
    0.8
}

fn default_export_directory() -> String {
    ".".to_string()
}

fn default_filename_prefix() -> String {
    "map-features".to_string()
}
