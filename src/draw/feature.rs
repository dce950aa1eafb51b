//! Committed feature definitions.

use crate::geometry::ShapeGeometry;
use crate::util;
use serde::{Deserialize, Serialize};

/// Kind of shape a feature was drawn as.
///
/// Serialized names (`polygon`, `circle`, `rectangle`, `lineString`) are the
/// ones written to exported feature properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeType {
    Polygon,
    Circle,
    Rectangle,
    LineString,
}

impl ShapeType {
    /// All shape types in toolbar order.
    pub const ALL: [ShapeType; 4] = [
        ShapeType::Polygon,
        ShapeType::Circle,
        ShapeType::Rectangle,
        ShapeType::LineString,
    ];

    /// True for shapes that cover an area and take part in overlap checks.
    pub fn is_area(self) -> bool {
        !matches!(self, ShapeType::LineString)
    }

    /// Stable identifier, matching the serialized name.
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeType::Polygon => "polygon",
            ShapeType::Circle => "circle",
            ShapeType::Rectangle => "rectangle",
            ShapeType::LineString => "lineString",
        }
    }

    /// Human-readable toolbar label.
    pub fn label(self) -> &'static str {
        match self {
            ShapeType::Polygon => "Polygon",
            ShapeType::Circle => "Circle",
            ShapeType::Rectangle => "Rectangle",
            ShapeType::LineString => "Line",
        }
    }
}

/// A finalized, stored shape.
///
/// Created only when the drawing state machine completes a shape and never
/// mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    /// Unique id (`<unix millis>-<random suffix>`)
    pub id: String,
    /// Stored geometry in `[lng, lat]` order
    pub geometry: ShapeGeometry,
    /// Tool the shape was drawn with
    pub shape_type: ShapeType,
    /// Creation time in unix milliseconds
    pub created_at: i64,
}

impl Feature {
    /// Creates a feature with a fresh id stamped with the current time.
    pub fn new(geometry: ShapeGeometry, shape_type: ShapeType) -> Self {
        Self {
            id: util::generate_id(),
            geometry,
            shape_type,
            created_at: util::now_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_names_match_identifiers() {
        for shape_type in ShapeType::ALL {
            let json = serde_json::to_string(&shape_type).unwrap();
            assert_eq!(json, format!("\"{}\"", shape_type.as_str()));
        }
    }

    #[test]
    fn only_line_strings_are_not_areas() {
        assert!(ShapeType::Polygon.is_area());
        assert!(ShapeType::Circle.is_area());
        assert!(ShapeType::Rectangle.is_area());
        assert!(!ShapeType::LineString.is_area());
    }

    #[test]
    fn new_features_get_distinct_ids() {
        let geometry = ShapeGeometry::LineString(vec![[0.0, 0.0], [1.0, 1.0]]);
        let a = Feature::new(geometry.clone(), ShapeType::LineString);
        let b = Feature::new(geometry, ShapeType::LineString);
        assert_ne!(a.id, b.id);
        assert!(a.created_at > 0);
    }
}
