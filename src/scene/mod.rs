//! Host scene access: the entity graph and raycast queries the rig drives,
//! bounding-box accumulation over entity subtrees, and [`SceneTree`], an
//! in-memory host implementation.
//!
//! The rig never owns entities. It reads and writes transforms through
//! [`SceneGraph`] and asks [`Raycast`] for the nearest hit under a screen
//! point; everything else about the scene belongs to the embedding engine.

mod bounds;
mod tree;

use std::fmt;

pub use bounds::{scene_bounds, Aabb, MAX_BOUNDS_DEPTH};
use glam::{Quat, Vec3};
pub use tree::{EntityId, SceneTree};

use crate::picking::RaycastHit;

/// Entity graph supplied by the host engine.
///
/// Transforms are world-space unless a method says otherwise. Handles that
/// do not belong to the graph read as empty/identity and ignore writes.
pub trait SceneGraph {
    /// Cheap, copyable entity handle.
    type Entity: Copy + Eq + fmt::Debug;

    /// Root of the scene.
    fn root(&self) -> Self::Entity;

    /// Direct children of `entity`.
    fn children(&self, entity: Self::Entity) -> &[Self::Entity];

    /// World-space bounds of the renderable mesh instances on `entity`
    /// (not its children).
    fn mesh_bounds(&self, entity: Self::Entity) -> &[Aabb];

    /// World-space position.
    fn position(&self, entity: Self::Entity) -> Vec3;

    /// World-space rotation.
    fn rotation(&self, entity: Self::Entity) -> Quat;

    /// Move `entity` to a world-space position.
    fn set_position(&mut self, entity: Self::Entity, position: Vec3);

    /// Set the world-space rotation of `entity`.
    fn set_rotation(&mut self, entity: Self::Entity, rotation: Quat);

    /// Set the rotation of `entity` relative to its parent.
    fn set_local_rotation(&mut self, entity: Self::Entity, rotation: Quat);

    /// Display name, used in log output.
    fn name(&self, entity: Self::Entity) -> &str;

    /// Whether `entity` carries `tag`.
    fn has_tag(&self, entity: Self::Entity, tag: &str) -> bool;
}

/// Physics raycast supplied by the host engine.
pub trait Raycast<E> {
    /// Nearest entity hit along the segment `from` → `to`, if any.
    fn raycast_first(&self, from: Vec3, to: Vec3) -> Option<RaycastHit<E>>;
}
