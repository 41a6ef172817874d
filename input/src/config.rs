use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Thresholds and behavior of a [`crate::SwipeRecognizer`].
///
/// Deserializes from TOML, all keys are optional:
///
/// ```toml
/// distance_threshold = 50.0
/// velocity_threshold = 0.3
/// suppress_default_scroll = true
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwipeConfig {
    /// The minimum absolute horizontal displacement that qualifies as a swipe.
    pub distance_threshold: f64,
    /// The minimum average speed in units per millisecond that qualifies as a swipe even when the
    /// distance threshold is not reached.
    pub velocity_threshold: f64,
    /// Suppress native scrolling while a horizontal drag is in progress.
    pub suppress_default_scroll: bool,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            distance_threshold: Self::DEFAULT_DISTANCE_THRESHOLD,
            velocity_threshold: Self::DEFAULT_VELOCITY_THRESHOLD,
            suppress_default_scroll: true,
        }
    }
}

impl SwipeConfig {
    pub const DEFAULT_DISTANCE_THRESHOLD: f64 = 50.0;
    pub const DEFAULT_VELOCITY_THRESHOLD: f64 = 0.3;

    /// Horizontal displacement from the start a horizontal drag must exceed before native
    /// scrolling gets suppressed.
    pub const SUPPRESS_SCROLL_DISTANCE: f64 = 15.0;

    pub fn with_distance_threshold(mut self, distance_threshold: f64) -> Self {
        self.distance_threshold = distance_threshold;
        self
    }

    pub fn with_velocity_threshold(mut self, velocity_threshold: f64) -> Self {
        self.velocity_threshold = velocity_threshold;
        self
    }

    pub fn with_suppress_default_scroll(mut self, suppress: bool) -> Self {
        self.suppress_default_scroll = suppress;
        self
    }

    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml).context("Failed to parse swipe configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let toml = fs::read_to_string(path)
            .with_context(|| format!("Failed to read swipe configuration {}", path.display()))?;
        Self::from_toml_str(&toml)
            .with_context(|| format!("Invalid swipe configuration {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("distance_threshold", self.distance_threshold),
            ("velocity_threshold", self.velocity_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                bail!("`{name}` must be a finite, non-negative number, was {value}");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SwipeConfig::default();
        assert_eq!(config.distance_threshold, 50.0);
        assert_eq!(config.velocity_threshold, 0.3);
        assert!(config.suppress_default_scroll);
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config = SwipeConfig::from_toml_str("").unwrap();
        assert_eq!(config, SwipeConfig::default());
    }

    #[test]
    fn parse_partial_toml() {
        let toml = r#"
distance_threshold = 80
suppress_default_scroll = false
        "#;

        let config = SwipeConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.distance_threshold, 80.0);
        assert_eq!(config.velocity_threshold, 0.3);
        assert!(!config.suppress_default_scroll);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(SwipeConfig::from_toml_str("threshold = 50.0").is_err());
    }

    #[test]
    fn negative_thresholds_are_rejected() {
        let err = SwipeConfig::from_toml_str("velocity_threshold = -0.5").unwrap_err();
        assert!(format!("{err:#}").contains("velocity_threshold"));
        assert!(
            SwipeConfig::default()
                .with_distance_threshold(f64::NAN)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn load_reports_missing_file() {
        let err = SwipeConfig::load("/nonexistent/swipe.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/swipe.toml"));
    }
}
