//! Orbit camera rig.
//!
//! [`OrbitState`] holds yaw, pitch, distance and pivot as eased current
//! values chasing clamped targets. Each tick the rig advances the easing,
//! steps any [`SmoothMove`] glide or [`AutoMove`] turntable, and solves a
//! [`Pose`] that it writes to the camera entity. Input arrives as
//! [`OrbitCommand`]s; notifications leave as [`RigEvent`]s.

mod auto_move;
mod command;
mod controller;
mod inertia;
mod lens;
mod pose;
mod smooth_move;
mod state;

pub use auto_move::{AutoMove, AutoMoveStep};
pub use command::{OrbitCommand, RigEvent};
pub use controller::OrbitCamera;
pub use inertia::blend_factor;
pub use lens::Lens;
pub use pose::Pose;
pub use smooth_move::{SmoothMove, SmoothMoveFrame};
pub use state::{OrbitLimits, OrbitState};
