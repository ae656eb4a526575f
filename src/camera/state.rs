use glam::Vec3;

use crate::util::angles::shortest_yaw_target;

/// Distance and pitch limits of the orbit.
///
/// `distance_max` of 0 leaves the distance unbounded above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitLimits {
    /// Lower zoom limit.
    pub distance_min: f32,
    /// Upper zoom limit, 0 for none.
    pub distance_max: f32,
    /// Lowest pitch in degrees.
    pub pitch_angle_min: f32,
    /// Highest pitch in degrees.
    pub pitch_angle_max: f32,
}

impl Default for OrbitLimits {
    fn default() -> Self {
        Self {
            distance_min: 0.0,
            distance_max: 0.0,
            pitch_angle_min: -90.0,
            pitch_angle_max: 90.0,
        }
    }
}

/// Clamp without panicking on inverted bounds; the upper bound wins.
fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value >= max {
        max
    } else if value <= min {
        min
    } else {
        value
    }
}

impl OrbitLimits {
    /// Clamp a requested orbit distance.
    #[must_use]
    pub fn clamp_distance(&self, distance: f32) -> f32 {
        if self.distance_max > 0.0 {
            clamp(distance, self.distance_min, self.distance_max)
        } else {
            distance.max(self.distance_min)
        }
    }

    /// Clamp a requested pitch.
    ///
    /// The limits are authored with positive values looking down, so the
    /// stored range is their negation.
    #[must_use]
    pub fn clamp_pitch(&self, pitch: f32) -> f32 {
        clamp(pitch, -self.pitch_angle_max, -self.pitch_angle_min)
    }
}

/// Orbit parameters around a pivot point.
///
/// Setters write the *target* values, clamped to the limits; [`advance`]
/// eases the *current* values toward them each tick. Yaw targets are
/// re-expressed so the current yaw always turns the short way round.
///
/// [`advance`]: OrbitState::advance
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitState {
    pub(super) yaw: f32,
    pub(super) pitch: f32,
    pub(super) distance: f32,
    pub(super) target_yaw: f32,
    pub(super) target_pitch: f32,
    pub(super) target_distance: f32,
    pivot: Vec3,
    limits: OrbitLimits,
}

impl OrbitState {
    /// Zeroed orbit around the origin.
    #[must_use]
    pub fn new(limits: OrbitLimits) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: 0.0,
            target_yaw: 0.0,
            target_pitch: 0.0,
            target_distance: 0.0,
            pivot: Vec3::ZERO,
            limits,
        }
    }

    /// Target yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.target_yaw
    }

    /// Target pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.target_pitch
    }

    /// Target distance from the pivot.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.target_distance
    }

    /// Yaw currently shown.
    #[must_use]
    pub fn current_yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch currently shown.
    #[must_use]
    pub fn current_pitch(&self) -> f32 {
        self.pitch
    }

    /// Distance currently shown.
    #[must_use]
    pub fn current_distance(&self) -> f32 {
        self.distance
    }

    /// Point the camera orbits around.
    #[must_use]
    pub fn pivot(&self) -> Vec3 {
        self.pivot
    }

    /// Active limits.
    #[must_use]
    pub fn limits(&self) -> OrbitLimits {
        self.limits
    }

    /// Request a new yaw; the stored target takes the shorter arc from the
    /// current yaw. Returns the stored target.
    pub fn set_yaw(&mut self, yaw: f32) -> f32 {
        self.target_yaw = shortest_yaw_target(self.yaw, yaw);
        self.target_yaw
    }

    /// Request a new pitch. Returns the clamped target.
    pub fn set_pitch(&mut self, pitch: f32) -> f32 {
        self.target_pitch = self.limits.clamp_pitch(pitch);
        self.target_pitch
    }

    /// Request a new distance. Returns the clamped target.
    pub fn set_distance(&mut self, distance: f32) -> f32 {
        self.target_distance = self.limits.clamp_distance(distance);
        self.target_distance
    }

    /// Move the pivot. Takes effect immediately.
    pub fn set_pivot(&mut self, pivot: Vec3) {
        self.pivot = pivot;
    }

    /// Shift the pivot by a world-space offset.
    pub fn translate_pivot(&mut self, offset: Vec3) {
        self.pivot += offset;
    }

    /// Set current and target yaw together.
    pub fn snap_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
        self.target_yaw = yaw;
    }

    /// Set current and target pitch together, clamped.
    pub fn snap_pitch(&mut self, pitch: f32) {
        self.pitch = self.limits.clamp_pitch(pitch);
        self.target_pitch = self.pitch;
    }

    /// Set current and target distance together, clamped.
    pub fn snap_distance(&mut self, distance: f32) {
        self.distance = self.limits.clamp_distance(distance);
        self.target_distance = self.distance;
    }

    /// Jump the current values to their targets.
    pub fn remove_inertia(&mut self) {
        self.yaw = self.target_yaw;
        self.pitch = self.target_pitch;
        self.distance = self.target_distance;
    }

    /// Replace the limits and re-clamp both current and target values.
    pub fn set_limits(&mut self, limits: OrbitLimits) {
        self.limits = limits;
        self.distance = limits.clamp_distance(self.distance);
        self.target_distance = limits.clamp_distance(self.target_distance);
        self.pitch = limits.clamp_pitch(self.pitch);
        self.target_pitch = limits.clamp_pitch(self.target_pitch);
    }
}
