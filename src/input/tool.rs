//! Drawing mode selection.

use crate::draw::ShapeType;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Drawing mode selection.
///
/// The active mode determines what shape pointer clicks build. Exactly one
/// mode is active at a time; `None` means clicks are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DrawingMode {
    /// No tool selected
    #[default]
    None,
    /// Open vertex accumulation, finished by double-click (three points minimum)
    Polygon,
    /// Click the center, then click the edge
    Circle,
    /// Click two opposite corners
    Rectangle,
    /// Open vertex accumulation, finished by double-click (two points minimum)
    LineString,
}

impl DrawingMode {
    /// The shape type this mode produces, if any.
    pub fn shape_type(self) -> Option<ShapeType> {
        match self {
            DrawingMode::None => None,
            DrawingMode::Polygon => Some(ShapeType::Polygon),
            DrawingMode::Circle => Some(ShapeType::Circle),
            DrawingMode::Rectangle => Some(ShapeType::Rectangle),
            DrawingMode::LineString => Some(ShapeType::LineString),
        }
    }

    /// True for modes built from a start click and an end click.
    pub fn is_two_click(self) -> bool {
        matches!(self, DrawingMode::Circle | DrawingMode::Rectangle)
    }
}

impl From<ShapeType> for DrawingMode {
    fn from(shape_type: ShapeType) -> Self {
        match shape_type {
            ShapeType::Polygon => DrawingMode::Polygon,
            ShapeType::Circle => DrawingMode::Circle,
            ShapeType::Rectangle => DrawingMode::Rectangle,
            ShapeType::LineString => DrawingMode::LineString,
        }
    }
}

impl fmt::Display for DrawingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shape_type() {
            Some(shape_type) => f.write_str(shape_type.as_str()),
            None => f.write_str("none"),
        }
    }
}

/// Error returned when a mode name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown drawing mode '{0}' (expected polygon, circle, rectangle, line or none)")]
pub struct ParseModeError(pub String);

impl FromStr for DrawingMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(DrawingMode::None),
            "polygon" => Ok(DrawingMode::Polygon),
            "circle" => Ok(DrawingMode::Circle),
            "rectangle" | "rect" => Ok(DrawingMode::Rectangle),
            "line" | "linestring" | "line-string" => Ok(DrawingMode::LineString),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}
