// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Orbit camera rig for interactive 3D scene viewers.
//!
//! The rig turns mouse and touch gestures into yaw, pitch, zoom and pan
//! around a pivot, eases toward its targets with a configurable inertia, and
//! writes the resulting pose to a camera entity owned by the host engine.
//! Clicks and taps raycast into the scene to preselect, select and activate
//! entities; a modifier-click glides the camera to frame the chosen entity,
//! and after a stretch of inactivity the camera slowly turns on its own.
//!
//! # Key entry points
//!
//! - [`camera::OrbitCamera`] - the rig, driven once per frame
//! - [`input::MouseInput`] / [`input::TouchInput`] - gesture adapters that
//!   produce [`camera::OrbitCommand`]s
//! - [`scene::SceneGraph`] / [`scene::Raycast`] - what the host provides
//! - [`options::Options`] - runtime configuration with TOML presets
//! - [`billboard::Billboard`] - entities that keep facing the camera
//!
//! # Frame order
//!
//! Input events are turned into commands and executed first, then
//! [`camera::OrbitCamera::update`] advances easing, glides and the idle
//! turntable and writes the pose, then the application drains
//! [`camera::RigEvent`]s and forwards them to interested components.

pub mod billboard;
pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod picking;
pub mod scene;
pub mod util;
