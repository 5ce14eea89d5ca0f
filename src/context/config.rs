//! Sketch settings that live outside the drawing code, loaded from RON.
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Unit suffix used on the root `width` and `height` when exporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Units {
    #[default]
    Pixels,
    Millimetres,
}

/// Output size, seed and units of a sketch.
///
/// Every field is optional in the RON source:
///
/// ```rust
/// use sketchpath::context::config::{SketchConfig, Units};
///
/// let config = SketchConfig::from_ron("(width: 297.0, height: 210.0, units: Millimetres)").unwrap();
/// assert_eq!(config.seed, None);
/// assert_eq!(config.units, Units::Millimetres);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    pub width: f64,
    pub height: f64,
    /// `None` draws from entropy, so every run differs.
    pub seed: Option<u64>,
    pub units: Units,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 1000.0,
            seed: None,
            units: Units::Pixels,
        }
    }
}

impl SketchConfig {
    pub fn from_ron(source: &str) -> Result<SketchConfig, ConfigError> {
        let config: SketchConfig = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Both dimensions must be positive and finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(())
        } else {
            Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })
        }
    }
}
