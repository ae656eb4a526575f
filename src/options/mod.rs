//! Rig options with TOML preset support.
//!
//! Every tunable of the rig (projection, orbit limits, gesture
//! sensitivities, idle turntable, focus glide, billboards) lives here.
//! Options serialize to/from TOML so presets can be stored next to a scene.

mod billboard;
mod camera;
mod input;
mod motion;
mod orbit;

use std::path::Path;

pub use billboard::{BillboardMode, BillboardOptions};
pub use camera::CameraOptions;
pub use input::{MouseOptions, TouchOptions};
pub use motion::{AutoMoveOptions, SmoothMoveOptions};
pub use orbit::OrbitOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RigError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[orbit]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection parameters.
    pub camera: CameraOptions,
    /// Orbit limits, inertia and framing.
    pub orbit: OrbitOptions,
    /// Mouse gesture sensitivities.
    pub mouse: MouseOptions,
    /// Touch gesture sensitivities and tap timing.
    pub touch: TouchOptions,
    /// Idle turntable.
    pub auto_move: AutoMoveOptions,
    /// Focus glide.
    pub smooth_move: SmoothMoveOptions,
    /// Billboard orientation.
    pub billboard: BillboardOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, RigError> {
        let content = std::fs::read_to_string(path).map_err(RigError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| RigError::OptionsParse(e.to_string()))?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), RigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RigError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(RigError::Io)?;
        }
        std::fs::write(path, content).map_err(RigError::Io)
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
