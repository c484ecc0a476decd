//! Engine tunables.
//!
//! A [`Config`] is a flat set of named numbers fixed at engine construction.
//! It can be built in code, or loaded from JSON; missing keys fall back to the
//! defaults so a file only needs to name what it changes:
//!
//! ```ignore
//! let config = Config::from_json_str(r#"{ "word_count": 40, "drift": 0.2 }"#)?;
//! ```

use crate::error::{ConfigError, EngineError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Simulation and layout tunables.
///
/// Distances are in field units (pixels for a DOM host), times in
/// milliseconds, speeds per normalized 60 fps frame.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Number of words sampled from the bank on each rebuild.
    pub word_count: usize,
    /// Smallest font size a word can be given.
    pub min_font: f32,
    /// Largest font size a word can be given.
    pub max_font: f32,
    /// Clear margin kept between words and the field edges.
    pub padding: f32,
    /// Pointer influence radius.
    pub repel_radius: f32,
    /// Peak repulsion impulse, reached at zero distance.
    pub repel_force: f32,
    /// Width of the per-frame random velocity jitter.
    pub drift: f32,
    /// Per-frame velocity damping factor.
    pub friction: f32,
    /// Radius of the clear zone around the field center.
    pub safe_radius: f32,
    /// Idle time before words settle into orbit.
    pub inactivity_delay_ms: f64,
    pub orbit_speed_min: f32,
    pub orbit_speed_max: f32,
    /// Minimum gap between placed word boxes.
    pub word_spacing: f32,
    /// Random candidates tried per word before accepting an unchecked one.
    pub placement_attempts: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_count: 70,
            min_font: 14.0,
            max_font: 28.0,
            padding: 60.0,
            repel_radius: 170.0,
            repel_force: 0.9,
            drift: 0.12,
            friction: 0.92,
            safe_radius: 150.0,
            inactivity_delay_ms: 6500.0,
            orbit_speed_min: 0.0007,
            orbit_speed_max: 0.0016,
            word_spacing: 16.0,
            placement_attempts: 240,
        }
    }
}

impl Config {
    /// Parse a JSON document and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would make the simulation meaningless or unstable.
    pub fn validate(&self) -> Result<(), EngineError> {
        fn invalid(msg: String) -> Result<(), EngineError> {
            Err(EngineError::InvalidConfig(msg))
        }

        if !(self.min_font > 0.0) {
            return invalid(format!("min_font must be positive, got {}", self.min_font));
        }
        if !(self.max_font >= self.min_font) {
            return invalid(format!(
                "max_font ({}) must not be smaller than min_font ({})",
                self.max_font, self.min_font
            ));
        }
        if !(self.repel_radius > 0.0) {
            return invalid(format!("repel_radius must be positive, got {}", self.repel_radius));
        }
        if !(0.0..=1.0).contains(&self.friction) {
            return invalid(format!("friction must be within [0, 1], got {}", self.friction));
        }
        if !(self.orbit_speed_min >= 0.0) {
            return invalid(format!(
                "orbit_speed_min must be non-negative, got {}",
                self.orbit_speed_min
            ));
        }
        if !(self.orbit_speed_max >= self.orbit_speed_min) {
            return invalid(format!(
                "orbit_speed_max ({}) must not be smaller than orbit_speed_min ({})",
                self.orbit_speed_max, self.orbit_speed_min
            ));
        }
        for (name, value) in [
            ("padding", self.padding),
            ("drift", self.drift),
            ("safe_radius", self.safe_radius),
            ("word_spacing", self.word_spacing),
        ] {
            if !(value >= 0.0) {
                return invalid(format!("{} must be non-negative, got {}", name, value));
            }
        }
        if !(self.inactivity_delay_ms >= 0.0) {
            return invalid(format!(
                "inactivity_delay_ms must be non-negative, got {}",
                self.inactivity_delay_ms
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = Config::from_json_str(r#"{ "word_count": 12, "drift": 0.3 }"#).unwrap();
        assert_eq!(config.word_count, 12);
        assert_eq!(config.drift, 0.3);
        assert_eq!(config.padding, 60.0);
        assert_eq!(config.placement_attempts, 240);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = Config {
            word_count: 5,
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(Config::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_inverted_font_range() {
        let err = Config::from_json_str(r#"{ "min_font": 30, "max_font": 10 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_zero_repel_radius() {
        let config = Config {
            repel_radius: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_nan_and_negative_ranges() {
        let nan_font = Config {
            max_font: f32::NAN,
            ..Default::default()
        };
        assert!(nan_font.validate().is_err());

        let nan_speed = Config {
            orbit_speed_max: f32::NAN,
            ..Default::default()
        };
        assert!(nan_speed.validate().is_err());

        let backwards = Config {
            orbit_speed_min: -0.001,
            ..Default::default()
        };
        assert!(backwards.validate().is_err());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Config::from_json_str("{ word_count: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Config::load("/definitely/not/here/driftfield.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
