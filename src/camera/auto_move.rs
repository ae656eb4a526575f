use crate::options::AutoMoveOptions;

/// What the idle turntable wants this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AutoMoveStep {
    /// Still waiting for the idle timeout, or disabled.
    Idle,
    /// The timeout just elapsed; switch to the coasting inertia.
    Started {
        /// Inertia factor to use while turning.
        inertia: f32,
    },
    /// Already turning; add this much yaw.
    Turn {
        /// Yaw increment in degrees.
        yaw_step: f32,
    },
}

/// Idle turntable: after a period with no input, slowly orbit the pivot.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoMove {
    options: AutoMoveOptions,
    idle: f32,
    active: bool,
}

impl AutoMove {
    /// Controller with a fresh idle timer.
    #[must_use]
    pub fn new(options: AutoMoveOptions) -> Self {
        Self {
            options,
            idle: 0.0,
            active: false,
        }
    }

    /// Whether the turntable is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Seconds since the last user action.
    #[must_use]
    pub fn idle_time(&self) -> f32 {
        self.idle
    }

    /// Count `dt` seconds of idleness and decide what to do.
    pub fn tick(&mut self, dt: f32) -> AutoMoveStep {
        self.idle += dt.max(0.0);
        if !self.options.enabled || self.idle <= self.options.time_to_move {
            return AutoMoveStep::Idle;
        }
        if self.active {
            AutoMoveStep::Turn {
                yaw_step: self.options.yaw_step,
            }
        } else {
            self.active = true;
            AutoMoveStep::Started {
                inertia: self.options.coast_inertia,
            }
        }
    }

    /// Reset the idle timer. If the turntable was running, stop it and
    /// return the inertia factor to restore.
    pub fn user_action(&mut self) -> Option<f32> {
        self.idle = 0.0;
        if self.active {
            self.active = false;
            Some(self.options.resume_inertia)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auto() -> AutoMove {
        AutoMove::new(AutoMoveOptions {
            time_to_move: 1.0,
            ..AutoMoveOptions::default()
        })
    }

    #[test]
    fn waits_for_timeout_then_turns() {
        let mut a = auto();
        assert_eq!(a.tick(0.5), AutoMoveStep::Idle);
        assert_eq!(a.tick(0.5), AutoMoveStep::Idle);
        assert_eq!(a.tick(0.1), AutoMoveStep::Started { inertia: 6.0 });
        assert!(a.is_active());
        assert_eq!(a.tick(0.1), AutoMoveStep::Turn { yaw_step: 0.1 });
    }

    #[test]
    fn user_action_stops_and_restores_inertia() {
        let mut a = auto();
        let _ = a.tick(2.0);
        assert_eq!(a.user_action(), Some(0.3));
        assert!(!a.is_active());
        assert_eq!(a.idle_time(), 0.0);
        assert_eq!(a.user_action(), None);
        assert_eq!(a.tick(0.5), AutoMoveStep::Idle);
    }

    #[test]
    fn disabled_never_starts() {
        let mut a = AutoMove::new(AutoMoveOptions {
            enabled: false,
            ..AutoMoveOptions::default()
        });
        assert_eq!(a.tick(1000.0), AutoMoveStep::Idle);
        assert!(!a.is_active());
    }
}
