//! Configuration file support for geoscriber.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/geoscriber/config.toml`. Settings include per-type shape limits,
//! circle smoothness, overlap resolution policy, layer styles, and export options.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ClassificationScan, ColorSpec, TrimFailurePolicy};
pub use types::{CircleConfig, ExportConfig, OverlapConfig, ShapeLimits, StyleConfig};

use crate::draw::ShapeType;
use crate::geometry::OverlapOptions;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [limits]
/// polygon = 10
/// circle = 5
///
/// [circle]
/// steps = 64
///
/// [overlap]
/// classification = "first-match"
/// trim_failure = "notify"
///
/// [export]
/// directory = "~/maps"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Maximum committed shapes per type
    #[serde(default)]
    pub limits: ShapeLimits,

    /// Circle approximation settings
    #[serde(default)]
    pub circle: CircleConfig,

    /// Overlap resolution policy
    #[serde(default)]
    pub overlap: OverlapConfig,

    /// Preview and committed layer styles
    #[serde(default)]
    pub style: StyleConfig,

    /// GeoJSON export options
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `limits.*`: 1 - 1000
    /// - `circle.steps`: 8 - 1024
    /// - `overlap.area_tolerance`: 1e-9 - 1e6
    /// - `overlap.relative_area_tolerance`: 0.0 - 0.01
    /// - `style.*_opacity`: 0.0 - 1.0
    /// - `style.*_weight`: 0.5 - 20.0
    fn validate_and_clamp(&mut self) {
        for shape_type in ShapeType::ALL {
            let max = self.limits.max_for_mut(shape_type);
            if !(1..=1000).contains(&*max) {
                log::warn!(
                    "Invalid {} limit {}, clamping to 1-1000 range",
                    shape_type.as_str(),
                    max
                );
                *max = (*max).clamp(1, 1000);
            }
        }

        // Circle steps: 8 - 1024
        if !(8..=1024).contains(&self.circle.steps) {
            log::warn!(
                "Invalid circle steps {}, clamping to 8-1024 range",
                self.circle.steps
            );
            self.circle.steps = self.circle.steps.clamp(8, 1024);
        }

        // Absolute area tolerance: 1e-9 - 1e6 square meters
        if !(1e-9..=1e6).contains(&self.overlap.area_tolerance) {
            log::warn!(
                "Invalid area_tolerance {}, clamping to 1e-9-1e6 range",
                self.overlap.area_tolerance
            );
            self.overlap.area_tolerance = if self.overlap.area_tolerance.is_nan() {
                crate::geometry::DEFAULT_AREA_TOLERANCE
            } else {
                self.overlap.area_tolerance.clamp(1e-9, 1e6)
            };
        }

        // Relative area tolerance: 0.0 - 0.01
        if !(0.0..=0.01).contains(&self.overlap.relative_area_tolerance) {
            log::warn!(
                "Invalid relative_area_tolerance {}, clamping to 0.0-0.01 range",
                self.overlap.relative_area_tolerance
            );
            self.overlap.relative_area_tolerance = if self.overlap.relative_area_tolerance.is_nan()
            {
                crate::geometry::DEFAULT_RELATIVE_AREA_TOLERANCE
            } else {
                self.overlap.relative_area_tolerance.clamp(0.0, 0.01)
            };
        }

        for (name, value) in [
            ("area_fill_opacity", &mut self.style.area_fill_opacity),
            ("committed_opacity", &mut self.style.committed_opacity),
        ] {
            if !(0.0..=1.0).contains(&*value) {
                log::warn!("Invalid {} {:.2}, clamping to 0.0-1.0 range", name, value);
                *value = value.clamp(0.0, 1.0);
            }
        }

        for (name, value) in [
            ("area_weight", &mut self.style.area_weight),
            ("line_weight", &mut self.style.line_weight),
        ] {
            if !(0.5..=20.0).contains(&*value) {
                log::warn!("Invalid {} {:.1}, clamping to 0.5-20.0 range", name, value);
                *value = value.clamp(0.5, 20.0);
            }
        }

        if self.export.filename_prefix.trim().is_empty() {
            log::warn!("Empty export filename_prefix, falling back to 'map-features'");
            self.export.filename_prefix = "map-features".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/geoscriber/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("geoscriber");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or if the
    /// file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML syntax.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to `config_path`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file(config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        // Create directory
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }

    /// Writes this configuration as TOML to `config_path`.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, the config cannot
    /// be serialized, or the file cannot be written.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Overlap classification options derived from the `[overlap]` section.
    pub fn overlap_options(&self) -> OverlapOptions {
        OverlapOptions {
            tolerance: self.overlap.area_tolerance,
            relative_tolerance: self.overlap.relative_area_tolerance,
            scan: self.overlap.classification,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_toolbar_limits() {
        let config = Config::default();
        assert_eq!(config.limits.polygon, 10);
        assert_eq!(config.limits.circle, 5);
        assert_eq!(config.limits.rectangle, 5);
        assert_eq!(config.limits.line_string, 20);
        assert_eq!(config.circle.steps, 64);
        assert_eq!(config.overlap.classification, ClassificationScan::FirstMatch);
        assert_eq!(config.overlap.trim_failure, TrimFailurePolicy::Silent);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [limits]
            circle = 2

            [overlap]
            classification = "exhaustive"
            trim_failure = "notify"
            "#,
        )
        .unwrap();

        assert_eq!(config.limits.circle, 2);
        assert_eq!(config.limits.polygon, 10);
        assert_eq!(config.overlap.classification, ClassificationScan::Exhaustive);
        assert_eq!(config.overlap.trim_failure, TrimFailurePolicy::Notify);
        assert_eq!(config.circle.steps, 64);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config: Config = toml::from_str(
            r#"
            [limits]
            polygon = 0

            [circle]
            steps = 3

            [style]
            area_fill_opacity = 4.0
            line_weight = 100.0
            "#,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.limits.polygon, 1);
        assert_eq!(config.circle.steps, 8);
        assert_eq!(config.style.area_fill_opacity, 1.0);
        assert_eq!(config.style.line_weight, 20.0);
    }

    #[test]
    fn load_from_reads_and_validates_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[circle]\nsteps = 5000\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.circle.steps, 1024);
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[circle\nsteps = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn example_file_round_trips() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        Config::create_default_file(&path).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.limits.line_string, 20);

        assert!(Config::create_default_file(&path).is_err());
    }

    #[test]
    fn saved_config_loads_back() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("saved.toml");
        let mut config = Config::default();
        config.limits.circle = 3;
        config.overlap.trim_failure = TrimFailurePolicy::Notify;
        config.style.area_color = ColorSpec::Rgb([10, 20, 30]);

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();

        assert_eq!(loaded.limits.circle, 3);
        assert_eq!(loaded.overlap.trim_failure, TrimFailurePolicy::Notify);
        assert_eq!(loaded.style.area_color, ColorSpec::Rgb([10, 20, 30]));
    }

    #[test]
    fn schema_lists_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = &schema["properties"];
        for section in ["limits", "circle", "overlap", "style", "export"] {
            assert!(properties.get(section).is_some(), "missing {section}");
        }
    }
}
