//! Shared math utilities: easing curves and orbit-angle helpers.

pub mod angles;
pub mod easing;
