//! Entity picking: screen rays, raycast hits, and the preselect → select →
//! activate state the rig keeps between pointer events.

mod ray;
mod selection;

pub use ray::{Ray, RayBoxHit, RaycastHit};
pub use selection::{ClickOutcome, SelectionState, TapOutcome};
