//! Orbit-angle helpers: shortest-path yaw, orbit orientation and its
//! decomposition back into yaw/pitch.
//!
//! Angles are in degrees. The camera looks down its local −Z axis with +Y up;
//! yaw turns about world +Y and pitch about the camera's local +X.

use glam::{Mat3, Quat, Vec3};

/// Linear interpolation between two scalars.
#[inline]
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Target yaw that reaches `requested` from `current` along the shorter arc.
///
/// The truncated remainder of the difference is folded into [−180, 180] so
/// the interpolation never spins the long way round when crossing 0/360.
#[must_use]
pub fn shortest_yaw_target(current: f32, requested: f32) -> f32 {
    let remainder = (requested - current) % 360.0;
    if remainder > 180.0 {
        current - (360.0 - remainder)
    } else if remainder < -180.0 {
        current + (360.0 + remainder)
    } else {
        current + remainder
    }
}

/// Orientation for an orbit camera at the given pitch and yaw.
#[must_use]
pub fn orbit_rotation(pitch: f32, yaw: f32) -> Quat {
    Quat::from_rotation_y(yaw.to_radians())
        * Quat::from_rotation_x(pitch.to_radians())
}

/// Forward (local −Z) direction of an orientation.
#[inline]
#[must_use]
pub fn forward(rotation: Quat) -> Vec3 {
    rotation * Vec3::NEG_Z
}

/// Yaw (degrees) of an orientation's forward vector.
#[must_use]
pub fn orientation_to_yaw(rotation: Quat) -> f32 {
    let f = forward(rotation);
    (-f.x).atan2(-f.z).to_degrees()
}

/// Pitch (degrees) of an orientation once `yaw` has been removed from it.
#[must_use]
pub fn orientation_to_pitch(rotation: Quat, yaw: f32) -> f32 {
    let without_yaw = Quat::from_rotation_y(-yaw.to_radians()) * rotation;
    let f = forward(without_yaw);
    f.y.atan2(-f.z).to_degrees()
}

/// Orientation whose forward axis points from `eye` toward `target`.
///
/// Falls back to any perpendicular axis when the view direction is parallel
/// to `up`, and to identity when `eye == target`.
#[must_use]
pub fn look_rotation(eye: Vec3, target: Vec3, up: Vec3) -> Quat {
    let forward = (target - eye).normalize_or_zero();
    if forward == Vec3::ZERO {
        return Quat::IDENTITY;
    }

    let mut right = forward.cross(up);
    if right.length_squared() < 1e-12 {
        right = forward.any_orthonormal_vector();
    }
    let right = right.normalize();
    let true_up = right.cross(forward);

    Quat::from_mat3(&Mat3::from_cols(right, true_up, -forward))
}
