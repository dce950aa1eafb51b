//! GeoJSON export of committed features.
//!
//! Features are written as a single FeatureCollection, in draw order, to a
//! timestamped file in the configured export directory.

pub mod file;
pub mod geojson;
pub mod types;

pub use file::{expand_tilde, generate_filename, save_geojson};
pub use geojson::{FeatureCollection, FeatureProperties, GeoJsonFeature};
pub use types::ExportError;

use crate::config::ExportConfig;
use crate::draw::Feature;
use crate::util;
use std::path::PathBuf;

/// Encodes features as an indented GeoJSON FeatureCollection.
pub fn to_geojson_string(features: &[Feature]) -> Result<String, ExportError> {
    FeatureCollection::from_features(features).to_json_string()
}

/// Writes features to `<directory>/<prefix>-<millis>.geojson`.
///
/// Refuses to write an empty collection.
pub fn export_features(features: &[Feature], config: &ExportConfig) -> Result<PathBuf, ExportError> {
    if features.is_empty() {
        return Err(ExportError::NothingToExport);
    }

    let json = to_geojson_string(features)?;
    let directory = expand_tilde(&config.directory);
    let path = save_geojson(&json, &directory, &config.filename_prefix, util::now_millis())?;
    log::info!("Exported {} features to {}", features.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::ShapeType;
    use crate::geometry::rectangle_from_bounds;

    #[test]
    fn empty_export_is_refused() {
        let result = export_features(&[], &ExportConfig::default());
        assert!(matches!(result, Err(ExportError::NothingToExport)));
    }

    #[test]
    fn export_writes_collection_file() {
        let temp = tempfile::tempdir().unwrap();
        let config = ExportConfig {
            directory: temp.path().to_string_lossy().into_owned(),
            ..ExportConfig::default()
        };
        let features = vec![Feature::new(
            rectangle_from_bounds(1.0, 0.0, 1.0, 0.0),
            ShapeType::Rectangle,
        )];

        let path = export_features(&features, &config).unwrap();

        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("map-features-"));
        assert!(name.ends_with(".geojson"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_geojson_string(&features).unwrap());
    }
}
