use glam::Vec3;

use crate::util::easing::EasingFunction;

/// One step of a [`SmoothMove`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothMoveFrame {
    /// Eye position for this tick.
    pub position: Vec3,
    /// Point to look at for this tick.
    pub pivot: Vec3,
    /// Eased progress in [0, 1].
    pub t: f32,
}

/// Timed glide of the eye and pivot from one placement to another.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothMove {
    from_position: Vec3,
    to_position: Vec3,
    from_pivot: Vec3,
    to_pivot: Vec3,
    elapsed: f32,
    duration: f32,
    easing: EasingFunction,
    finished: bool,
}

impl SmoothMove {
    /// Start a glide. A non-positive duration finishes on the first step.
    #[must_use]
    pub fn new(
        (from_position, to_position): (Vec3, Vec3),
        (from_pivot, to_pivot): (Vec3, Vec3),
        duration: f32,
        easing: EasingFunction,
    ) -> Self {
        Self {
            from_position,
            to_position,
            from_pivot,
            to_pivot,
            elapsed: 0.0,
            duration,
            easing,
            finished: false,
        }
    }

    /// Eye position `distance` away from `target`, on the side the camera
    /// currently views it from.
    #[must_use]
    pub fn framing_position(camera: Vec3, target: Vec3, distance: f32) -> Vec3 {
        target + (camera - target).normalize_or(Vec3::Z) * distance
    }

    /// Where the eye ends up.
    #[must_use]
    pub fn destination(&self) -> Vec3 {
        self.to_position
    }

    /// Where the pivot ends up.
    #[must_use]
    pub fn destination_pivot(&self) -> Vec3 {
        self.to_pivot
    }

    /// Whether the final frame has been produced.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance by `dt` seconds.
    ///
    /// The step that crosses the duration yields the exact destination;
    /// later steps yield nothing.
    pub fn step(&mut self, dt: f32) -> Option<SmoothMoveFrame> {
        if self.finished {
            return None;
        }
        self.elapsed += dt.max(0.0);
        let raw = if self.elapsed >= self.duration {
            self.finished = true;
            1.0
        } else {
            self.elapsed / self.duration
        };
        let t = if self.finished {
            1.0
        } else {
            self.easing.evaluate(raw)
        };
        Some(SmoothMoveFrame {
            position: self.from_position.lerp(self.to_position, t),
            pivot: self.from_pivot.lerp(self.to_pivot, t),
            t,
        })
    }
}
