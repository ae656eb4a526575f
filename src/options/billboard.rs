use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How a billboard turns toward the camera.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum BillboardMode {
    /// Face the camera position.
    #[default]
    LookAt,
    /// Copy the camera heading only; stays upright.
    MatchYaw,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[schemars(title = "Billboard", inline)]
#[serde(default)]
/// Billboard orientation options.
pub struct BillboardOptions {
    /// Orientation mode.
    #[schemars(title = "Mode")]
    pub mode: BillboardMode,
}
