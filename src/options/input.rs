use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Mouse", inline)]
#[serde(default)]
/// Mouse gesture sensitivities.
pub struct MouseOptions {
    /// Degrees of orbit per pixel dragged.
    #[schemars(title = "Orbit Sensitivity", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub orbit_sensitivity: f32,
    /// How fast the wheel moves the camera in and out.
    #[schemars(title = "Distance Sensitivity", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub distance_sensitivity: f32,
}

impl Default for MouseOptions {
    fn default() -> Self {
        Self {
            orbit_sensitivity: 0.3,
            distance_sensitivity: 0.25,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Touch", inline)]
#[serde(default)]
/// Touch gesture sensitivities and tap timing.
pub struct TouchOptions {
    /// Whether the host delivers touch events at all. When off, touch input
    /// is ignored.
    #[schemars(skip)]
    pub enabled: bool,
    /// Degrees of orbit per pixel dragged.
    #[schemars(title = "Orbit Sensitivity", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub orbit_sensitivity: f32,
    /// How fast pinching moves the camera in and out.
    #[schemars(title = "Distance Sensitivity", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub distance_sensitivity: f32,
    /// Longest gap in seconds between two taps that still counts as a
    /// double tap.
    #[schemars(title = "Double Tap Speed", range(min = 0.1, max = 1.0), extend("step" = 0.05))]
    pub double_tap_speed: f32,
}

impl Default for TouchOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            orbit_sensitivity: 0.4,
            distance_sensitivity: 0.2,
            double_tap_speed: 0.4,
        }
    }
}
