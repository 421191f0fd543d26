//! Startup Settings
//!
//! Process-level configuration for the math core: the angle unit assumed for
//! ambiguous authored values and the trig table resolution. Loaded from JSON
//! by the host's startup hook and applied before any ambiguous angle data is
//! parsed.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::angle::{AngleUnit, set_angle_unit};
use crate::trig_table::TrigTable;

/// Math-core startup settings.
///
/// Every field has a default, so a partial (or empty) JSON document is valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MathSettings {
    /// Unit assumed when parsing ambiguous angle values.
    pub angle_unit: AngleUnit,
    /// Sample count for table-mode trigonometry.
    pub trig_table_size: usize,
}

impl Default for MathSettings {
    fn default() -> Self {
        Self {
            angle_unit: AngleUnit::Degrees,
            trig_table_size: TrigTable::DEFAULT_SIZE,
        }
    }
}

impl MathSettings {
    /// Parses settings from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Installs the angle unit into the process-wide policy.
    ///
    /// Call before parsing any ambiguous angle data; the policy is read at
    /// conversion time, so later changes affect only subsequent parses.
    pub fn apply(&self) {
        set_angle_unit(self.angle_unit);
    }

    /// Builds a trig table of the configured resolution.
    pub fn build_trig_table(&self) -> TrigTable {
        TrigTable::with_size(self.trig_table_size)
    }
}

/// Errors from loading settings.
#[derive(Debug)]
pub enum SettingsError {
    /// Could not read the settings file.
    Io(std::io::Error),
    /// The document is not valid settings JSON.
    Json(serde_json::Error),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {e}"),
            SettingsError::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = MathSettings::default();
        assert_eq!(settings.angle_unit, AngleUnit::Degrees);
        assert_eq!(settings.trig_table_size, TrigTable::DEFAULT_SIZE);
    }

    #[test]
    fn test_from_json_partial_document() {
        let settings = MathSettings::from_json(r#"{ "angle_unit": "radians" }"#).unwrap();
        assert_eq!(settings.angle_unit, AngleUnit::Radians);
        assert_eq!(settings.trig_table_size, TrigTable::DEFAULT_SIZE);

        let settings = MathSettings::from_json("{}").unwrap();
        assert_eq!(settings, MathSettings::default());
    }

    #[test]
    fn test_from_json_full_document() {
        let settings = MathSettings::from_json(
            r#"{ "angle_unit": "degrees", "trig_table_size": 512 }"#,
        )
        .unwrap();
        assert_eq!(settings.angle_unit, AngleUnit::Degrees);
        assert_eq!(settings.trig_table_size, 512);
        assert_eq!(settings.build_trig_table().len(), 512);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = MathSettings::from_json("not json").unwrap_err();
        assert!(matches!(err, SettingsError::Json(_)));
        assert!(err.to_string().contains("JSON"));
    }

    #[test]
    fn test_round_trip() {
        let settings = MathSettings {
            angle_unit: AngleUnit::Radians,
            trig_table_size: 1024,
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(MathSettings::from_json(&json).unwrap(), settings);
    }
}
