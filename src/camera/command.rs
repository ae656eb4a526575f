use glam::Vec2;

use crate::picking::RaycastHit;

/// Camera operation produced by an input adapter and executed by
/// [`OrbitCamera::execute`](super::OrbitCamera::execute).
///
/// Screen positions are viewport pixels with the origin at the top left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrbitCommand {
    /// The user touched an input; resets the idle timer.
    UserActivity,
    /// Add to the yaw and pitch targets (degrees).
    Orbit {
        /// Yaw change.
        yaw_delta: f32,
        /// Pitch change.
        pitch_delta: f32,
    },
    /// Drag the pivot so the world point under `from` moves to `to`'s ray,
    /// measured at the orbit distance.
    Pan {
        /// Current pointer position.
        from: Vec2,
        /// Previous pointer position.
        to: Vec2,
    },
    /// Move toward the pivot by this fraction of the orbit distance
    /// (negative moves away).
    Zoom {
        /// Fraction of the distance.
        amount: f32,
    },
    /// Raycast under the pointer and remember what was hit.
    Preselect {
        /// Pointer position.
        screen: Vec2,
    },
    /// Forget the preselection.
    ClearPreselection,
    /// Click: announce the hit and toggle focus on the preselected entity.
    Select {
        /// Pointer position.
        screen: Vec2,
        /// Modifier held; glide to the focused entity.
        focus: bool,
    },
    /// Secondary click: activate the preselected entity if it is under the
    /// pointer.
    Activate {
        /// Pointer position.
        screen: Vec2,
    },
    /// Completed touch tap on the preselection.
    Tap {
        /// Followed the previous tap within the double-tap window.
        double: bool,
    },
}

/// Notification emitted by the rig and drained by the application with
/// [`OrbitCamera::drain_events`](super::OrbitCamera::drain_events).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RigEvent<E> {
    /// A camera is ready; components that track it (billboards) can pick it
    /// up.
    CameraAdded {
        /// Camera entity.
        camera: E,
    },
    /// An entity was clicked or tapped.
    EntitySelected {
        /// Raycast result for the entity.
        hit: RaycastHit<E>,
    },
    /// The preselected entity was activated (secondary click or double tap).
    EntityActivated {
        /// Raycast result for the entity.
        hit: RaycastHit<E>,
    },
    /// The camera started gliding toward an entity.
    FocusChanged {
        /// Entity being framed.
        entity: E,
    },
    /// The idle turntable started.
    AutoMoveStarted,
    /// User input stopped the idle turntable.
    AutoMoveStopped,
}
