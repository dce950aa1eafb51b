//! File saving functionality for exported features.

use super::types::ExportError;
use std::fs;
use std::path::{Path, PathBuf};

/// Generate an export filename from a prefix and a timestamp.
///
/// # Arguments
/// * `prefix` - Filename prefix (e.g., "map-features")
/// * `millis` - Export time in epoch milliseconds
pub fn generate_filename(prefix: &str, millis: i64) -> String {
    format!("{}-{}.geojson", prefix, millis)
}

/// Ensure the export directory exists, creating it if necessary.
///
/// # Returns
/// The canonicalized path to the directory
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Write encoded GeoJSON into `directory`.
///
/// # Returns
/// Path to the saved file
pub fn save_geojson(
    contents: &str,
    directory: &Path,
    prefix: &str,
    millis: i64,
) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(directory)?;
    let file_path = directory.join(generate_filename(prefix, millis));

    log::info!(
        "Saving features to: {} ({} bytes)",
        file_path.display(),
        contents.len()
    );
    fs::write(&file_path, contents)?;

    Ok(file_path)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_filename() {
        assert_eq!(
            generate_filename("map-features", 1_700_000_000_000),
            "map-features-1700000000000.geojson"
        );
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde("~/maps");
        assert!(!expanded.to_string_lossy().starts_with("~"));

        let no_tilde = expand_tilde("/absolute/path");
        assert_eq!(no_tilde, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn test_save_creates_directory() {
        let temp = tempfile::tempdir().unwrap();
        let target = temp.path().join("nested").join("out");

        let path = save_geojson("{}", &target, "shapes", 42).unwrap();

        assert!(path.ends_with("shapes-42.geojson"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }
}
