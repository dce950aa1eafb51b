//! Configuration enum types.

use crate::draw::{Color, color::LEAFLET_BLUE};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How many committed shapes overlap classification inspects.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ClassificationScan {
    /// Stop at the first committed shape that intersects the candidate
    FirstMatch,
    /// Inspect every committed shape; any enclosure rejects the candidate
    Exhaustive,
}

/// What happens when trimming leaves no single polygon.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TrimFailurePolicy {
    /// Drop the shape and only log it
    Silent,
    /// Drop the shape and show a notice
    Notify,
}

/// Color specification - either a hex string or RGB values.
///
/// # Examples
/// ```toml
/// # Hex color
/// area_color = "#3388ff"
///
/// # Custom RGB color (0-255 per component)
/// line_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Hex color such as `#3388ff`
    Hex(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`].
    ///
    /// Unparseable hex strings fall back to the default map blue with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Hex(hex) => Color::from_hex(hex).unwrap_or_else(|| {
                warn!("Unknown color '{}', using {}", hex, LEAFLET_BLUE.to_hex());
                LEAFLET_BLUE
            }),
            ColorSpec::Rgb([r, g, b]) => Color::new(*r, *g, *b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_spec_parses() {
        let spec = ColorSpec::Hex("#ff8000".to_string());
        assert_eq!(spec.to_color(), Color::new(255, 128, 0));
    }

    #[test]
    fn bad_hex_falls_back_to_blue() {
        let spec = ColorSpec::Hex("not-a-color".to_string());
        assert_eq!(spec.to_color(), LEAFLET_BLUE);
    }

    #[test]
    fn rgb_spec_converts() {
        let spec = ColorSpec::Rgb([1, 2, 3]);
        assert_eq!(spec.to_color(), Color::new(1, 2, 3));
    }
}
