use glam::{Quat, Vec3};

use super::OrbitState;
use crate::util::angles::{forward, look_rotation, orbit_rotation};

/// World-space camera placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Eye position.
    pub position: Vec3,
    /// Orientation; the camera looks down its local −Z.
    pub rotation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Pose {
    /// Pose produced by the current (eased) orbit values.
    ///
    /// The eye sits `distance` behind the pivot along the view direction, so
    /// `position + forward * distance == pivot`.
    #[must_use]
    pub fn from_orbit(state: &OrbitState) -> Self {
        let rotation =
            orbit_rotation(state.current_pitch(), state.current_yaw());
        let position =
            state.pivot() - forward(rotation) * state.current_distance();
        Self { position, rotation }
    }

    /// Pose at `eye` looking at `target` with +Y up.
    #[must_use]
    pub fn looking_at(eye: Vec3, target: Vec3) -> Self {
        Self {
            position: eye,
            rotation: look_rotation(eye, target, Vec3::Y),
        }
    }

    /// View direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        forward(self.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::OrbitLimits;

    fn orbit(yaw: f32, pitch: f32, distance: f32, pivot: Vec3) -> OrbitState {
        let mut s = OrbitState::new(OrbitLimits::default());
        s.snap_yaw(yaw);
        s.snap_pitch(pitch);
        s.snap_distance(distance);
        s.set_pivot(pivot);
        s
    }

    #[test]
    fn neutral_orbit_sits_on_positive_z() {
        let pose = Pose::from_orbit(&orbit(0.0, 0.0, 5.0, Vec3::ZERO));
        assert!(pose.position.abs_diff_eq(Vec3::new(0.0, 0.0, 5.0), 1e-5));
        assert!(pose.forward().abs_diff_eq(Vec3::NEG_Z, 1e-5));
    }

    #[test]
    fn yaw_turns_about_world_up() {
        let pose = Pose::from_orbit(&orbit(90.0, 0.0, 4.0, Vec3::ZERO));
        assert!(pose.position.abs_diff_eq(Vec3::new(4.0, 0.0, 0.0), 1e-5));
    }

    #[test]
    fn negative_pitch_looks_down_from_above() {
        let pose = Pose::from_orbit(&orbit(0.0, -45.0, 2.0, Vec3::ZERO));
        assert!(pose.position.y > 0.0);
        assert!(pose.forward().y < 0.0);
    }

    #[test]
    fn eye_plus_forward_reaches_pivot() {
        let pivot = Vec3::new(3.0, -1.0, 7.0);
        let s = orbit(-123.0, 37.0, 9.5, pivot);
        let pose = Pose::from_orbit(&s);
        let reached = pose.position + pose.forward() * s.current_distance();
        assert!(reached.abs_diff_eq(pivot, 1e-4));
        assert!((pose.position.distance(pivot) - 9.5).abs() < 1e-4);
    }

    #[test]
    fn looking_at_faces_the_target() {
        let eye = Vec3::new(1.0, 2.0, 3.0);
        let pose = Pose::looking_at(eye, Vec3::ZERO);
        assert!(pose.forward().abs_diff_eq(-eye.normalize(), 1e-5));
    }
}
