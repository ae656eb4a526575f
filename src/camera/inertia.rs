//! Exponential-style easing of the live orbit values toward their targets.

use super::OrbitState;
use crate::util::angles::lerp;

/// Fraction of the remaining gap to close this tick.
///
/// An inertia factor of 0 (or less) snaps straight to the targets; otherwise
/// the blend grows with the tick length and saturates at 1.
#[must_use]
pub fn blend_factor(dt: f32, inertia_factor: f32) -> f32 {
    if inertia_factor <= 0.0 {
        1.0
    } else {
        (dt / inertia_factor).clamp(0.0, 1.0)
    }
}

impl OrbitState {
    /// Move the current distance, yaw and pitch toward their targets.
    pub fn advance(&mut self, dt: f32, inertia_factor: f32) {
        let t = blend_factor(dt, inertia_factor);
        self.distance = lerp(self.distance, self.target_distance, t);
        self.yaw = lerp(self.yaw, self.target_yaw, t);
        self.pitch = lerp(self.pitch, self.target_pitch, t);
    }
}
