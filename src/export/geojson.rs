//! GeoJSON FeatureCollection encoding.

use super::types::ExportError;
use crate::draw::{Feature, ShapeType};
use crate::geometry::ShapeGeometry;
use serde::{Deserialize, Serialize};

/// Properties written for every exported feature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureProperties {
    #[serde(rename = "type")]
    pub shape_type: ShapeType,
    /// Creation time in epoch milliseconds
    pub created_at: i64,
}

/// A GeoJSON `Feature` object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct GeoJsonFeature {
    pub geometry: ShapeGeometry,
    pub properties: FeatureProperties,
}

impl From<&Feature> for GeoJsonFeature {
    fn from(feature: &Feature) -> Self {
        Self {
            geometry: feature.geometry.clone(),
            properties: FeatureProperties {
                shape_type: feature.shape_type,
                created_at: feature.created_at,
            },
        }
    }
}

/// A GeoJSON `FeatureCollection` object.
///
/// Features keep the order they were committed in.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub features: Vec<GeoJsonFeature>,
}

impl FeatureCollection {
    pub fn from_features(features: &[Feature]) -> Self {
        Self {
            features: features.iter().map(GeoJsonFeature::from).collect(),
        }
    }

    /// Encodes the collection with two-space indentation.
    pub fn to_json_string(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::rectangle_from_bounds;
    use serde_json::{Value, json};

    fn sample() -> Vec<Feature> {
        let mut rect = Feature::new(rectangle_from_bounds(1.0, 0.0, 1.0, 0.0), ShapeType::Rectangle);
        rect.created_at = 1_700_000_000_000;
        let mut line = Feature::new(
            ShapeGeometry::LineString(vec![[0.5, -1.0], [0.5, 2.0]]),
            ShapeType::LineString,
        );
        line.created_at = 1_700_000_000_500;
        vec![rect, line]
    }

    #[test]
    fn collection_has_geojson_shape() {
        let json = FeatureCollection::from_features(&sample())
            .to_json_string()
            .unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"][0]["type"], "Feature");
        assert_eq!(value["features"][0]["geometry"]["type"], "Polygon");
        assert_eq!(
            value["features"][0]["geometry"]["coordinates"][0][0],
            json!([0.0, 1.0])
        );
        assert_eq!(
            value["features"][0]["properties"],
            json!({ "type": "rectangle", "createdAt": 1_700_000_000_000_i64 })
        );
        assert_eq!(value["features"][1]["geometry"]["type"], "LineString");
        assert_eq!(value["features"][1]["properties"]["type"], "lineString");
    }

    #[test]
    fn output_is_indented_with_two_spaces() {
        let json = FeatureCollection::from_features(&sample())
            .to_json_string()
            .unwrap();
        assert!(json.starts_with("{\n  \"type\": \"FeatureCollection\",\n  \"features\": ["));
    }

    #[test]
    fn empty_collection_encodes() {
        let json = FeatureCollection::default().to_json_string().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, json!({ "type": "FeatureCollection", "features": [] }));
    }

    #[test]
    fn decoding_and_reencoding_is_byte_identical() {
        let json = FeatureCollection::from_features(&sample())
            .to_json_string()
            .unwrap();
        let decoded = FeatureCollection::from_json_str(&json).unwrap();
        assert_eq!(decoded.to_json_string().unwrap(), json);
    }
}
