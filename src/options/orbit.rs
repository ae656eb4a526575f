use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::OrbitLimits;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit", inline)]
#[serde(default)]
/// Orbit limits, inertia and framing behavior.
pub struct OrbitOptions {
    /// Upper zoom limit. 0 leaves the distance unbounded.
    #[schemars(title = "Distance Max", range(min = 0.0))]
    pub distance_max: f32,
    /// Lower zoom limit.
    #[schemars(title = "Distance Min", range(min = 0.0))]
    pub distance_min: f32,
    /// Highest pitch angle in degrees.
    #[schemars(title = "Pitch Angle Max", range(min = -90.0, max = 90.0))]
    pub pitch_angle_max: f32,
    /// Lowest pitch angle in degrees.
    #[schemars(title = "Pitch Angle Min", range(min = -90.0, max = 90.0))]
    pub pitch_angle_min: f32,
    /// Seconds-scale time constant for easing toward targets. 0 is fully
    /// responsive; higher values keep the camera coasting after input stops.
    #[schemars(title = "Inertia Factor", range(min = 0.0, max = 10.0), extend("step" = 0.05))]
    pub inertia_factor: f32,
    /// Frame the focus entity (or the whole scene) when the rig starts.
    #[schemars(title = "Frame on Start")]
    pub frame_on_start: bool,
    /// Allow modifier-clicks to glide the camera to the clicked entity.
    #[schemars(title = "Focus Change")]
    pub enable_focus_change: bool,
    /// Multiplier on the bounding radius when fitting an entity in view.
    #[schemars(skip)]
    pub frame_padding: f32,
    /// Entities carrying this tag never take camera focus.
    #[schemars(skip)]
    pub button_tag: String,
}

impl Default for OrbitOptions {
    fn default() -> Self {
        Self {
            distance_max: 0.0,
            distance_min: 0.0,
            pitch_angle_max: 90.0,
            pitch_angle_min: -90.0,
            inertia_factor: 0.0,
            frame_on_start: true,
            enable_focus_change: true,
            frame_padding: 1.5,
            button_tag: "button".to_owned(),
        }
    }
}

impl OrbitOptions {
    /// Distance and pitch limits as used by the orbit state.
    #[must_use]
    pub fn limits(&self) -> OrbitLimits {
        OrbitLimits {
            distance_min: self.distance_min,
            distance_max: self.distance_max,
            pitch_angle_min: self.pitch_angle_min,
            pitch_angle_max: self.pitch_angle_max,
        }
    }
}
