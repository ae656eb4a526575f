use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Auto Move", inline)]
#[serde(default)]
/// Idle turntable behavior.
pub struct AutoMoveOptions {
    /// Start turning the camera after a period without input.
    #[schemars(title = "Enabled")]
    pub enabled: bool,
    /// Idle seconds before the camera starts turning.
    #[schemars(title = "Idle Time", range(min = 1.0, max = 600.0), extend("step" = 1.0))]
    pub time_to_move: f32,
    /// Degrees of yaw added per tick while turning.
    #[schemars(title = "Turn Speed", range(min = 0.01, max = 2.0), extend("step" = 0.01))]
    pub yaw_step: f32,
    /// Inertia factor while turning.
    #[schemars(skip)]
    pub coast_inertia: f32,
    /// Inertia factor restored when the user takes over again.
    #[schemars(skip)]
    pub resume_inertia: f32,
}

impl Default for AutoMoveOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            time_to_move: 30.0,
            yaw_step: 0.1,
            coast_inertia: 6.0,
            resume_inertia: 0.3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Smooth Move", inline)]
#[serde(default)]
/// Glide used when focusing another entity.
pub struct SmoothMoveOptions {
    /// Length of the glide in seconds.
    #[schemars(title = "Duration", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub duration: f32,
    /// Closest the glide may end to the focused entity.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Entities with this tag are framed closer.
    #[schemars(skip)]
    pub ground_tag: String,
    /// Distance multiplier for `ground_tag` entities.
    #[schemars(skip)]
    pub ground_distance_scale: f32,
    /// Easing curve of the glide.
    #[schemars(title = "Easing")]
    pub easing: EasingFunction,
}

impl Default for SmoothMoveOptions {
    fn default() -> Self {
        Self {
            duration: 0.8,
            min_distance: 2.8,
            ground_tag: "ground".to_owned(),
            ground_distance_scale: 0.5,
            easing: EasingFunction::DEFAULT,
        }
    }
}
