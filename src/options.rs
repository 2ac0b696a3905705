//! Camera tunables with TOML preset support.
//!
//! Everything an options panel edits live (field of view, clip planes,
//! orthographic extent, control speeds) is consolidated here. Options
//! serialize to/from TOML for presets; the schema feeds a UI overlay.
//! Angles are stored in degrees for human-editable files and converted at
//! apply time.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SightlineError;

/// Camera projection and control parameters. Uses `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `fovy`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(title = "Far Plane", range(min = 10.0, max = 1000.0), extend("step" = 10.0))]
    pub zfar: f32,
    /// Orthographic vertical half-extent in world units.
    #[schemars(title = "Ortho Extent", range(min = 1.0, max = 100.0), extend("step" = 1.0))]
    pub ortho_half_height: f32,
    /// Movement speed in world units per second.
    #[schemars(title = "Move Speed", range(min = 0.5, max = 50.0), extend("step" = 0.5))]
    pub move_speed: f32,
    /// Look sensitivity in degrees per pixel of cursor travel.
    #[schemars(title = "Look Sensitivity", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub rotate_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 80.0,
            znear: 0.1,
            zfar: 100.0,
            ortho_half_height: 10.0,
            move_speed: 5.0,
            rotate_speed: 0.1,
        }
    }
}

impl CameraOptions {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(CameraOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, SightlineError> {
        let content =
            std::fs::read_to_string(path).map_err(SightlineError::Io)?;
        toml::from_str(&content)
            .map_err(|e| SightlineError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), SightlineError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SightlineError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SightlineError::Io)?;
        }
        std::fs::write(path, content).map_err(SightlineError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = CameraOptions::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: CameraOptions = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let parsed: CameraOptions =
            toml::from_str("fovy = 60.0\nzfar = 250.0\n").unwrap();
        assert_eq!(parsed.fovy, 60.0);
        assert_eq!(parsed.zfar, 250.0);
        assert_eq!(parsed.znear, CameraOptions::default().znear);
        assert_eq!(
            parsed.move_speed,
            CameraOptions::default().move_speed
        );
    }

    #[test]
    fn malformed_toml_reports_parse_error() {
        let result: Result<CameraOptions, _> = toml::from_str("fovy = ");
        assert!(result.is_err());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = std::env::temp_dir().join("sightline-options-test");
        let path = dir.join("preset.toml");
        let opts = CameraOptions {
            fovy: 65.0,
            ..CameraOptions::default()
        };
        opts.save(&path).unwrap();
        assert_eq!(CameraOptions::load(&path).unwrap(), opts);
        assert!(CameraOptions::list_presets(&dir)
            .contains(&"preset".to_owned()));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
