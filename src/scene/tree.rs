use glam::{Quat, Vec3};
use rustc_hash::FxHashSet;

use super::{Aabb, Raycast, SceneGraph};
use crate::picking::{Ray, RaycastHit};

/// Handle to a node in a [`SceneTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u32);

impl EntityId {
    /// Index of the node in its tree.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
struct Node {
    name: String,
    parent: Option<EntityId>,
    children: Vec<EntityId>,
    local_position: Vec3,
    local_rotation: Quat,
    meshes: Vec<Aabb>,
    tags: FxHashSet<String>,
    pickable: bool,
}

impl Node {
    fn new(name: &str, parent: Option<EntityId>) -> Self {
        Self {
            name: name.to_owned(),
            parent,
            children: Vec::new(),
            local_position: Vec3::ZERO,
            local_rotation: Quat::IDENTITY,
            meshes: Vec::new(),
            tags: FxHashSet::default(),
            pickable: true,
        }
    }
}

/// In-memory scene graph.
///
/// Nodes carry a parent-relative position and rotation (no scale); world
/// transforms are resolved through the parent chain. Mesh bounds are given
/// in world space and do not follow their node. Every node with meshes is
/// hit-testable by [`Raycast`] unless marked unpickable.
#[derive(Debug, Clone)]
pub struct SceneTree {
    nodes: Vec<Node>,
}

impl Default for SceneTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneTree {
    /// Create a tree holding only the root node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new("root", None)],
        }
    }

    /// Handle of the root node.
    #[must_use]
    pub fn root_id(&self) -> EntityId {
        EntityId(0)
    }

    /// Number of nodes, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds only its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Add a child node under `parent` at the parent's origin.
    ///
    /// An unknown parent attaches the node to the root.
    pub fn spawn(&mut self, parent: EntityId, name: &str) -> EntityId {
        let parent = if self.node(parent).is_some() {
            parent
        } else {
            self.root_id()
        };
        let id = EntityId(self.nodes.len() as u32);
        self.nodes.push(Node::new(name, Some(parent)));
        if let Some(p) = self.node_mut(parent) {
            p.children.push(id);
        }
        id
    }

    /// Attach a world-space mesh bound to `entity`.
    pub fn add_mesh(&mut self, entity: EntityId, bounds: Aabb) {
        if let Some(node) = self.node_mut(entity) {
            node.meshes.push(bounds);
        }
    }

    /// Tag `entity`.
    pub fn add_tag(&mut self, entity: EntityId, tag: &str) {
        if let Some(node) = self.node_mut(entity) {
            let _ = node.tags.insert(tag.to_owned());
        }
    }

    /// Include or exclude `entity` from raycasts.
    pub fn set_pickable(&mut self, entity: EntityId, pickable: bool) {
        if let Some(node) = self.node_mut(entity) {
            node.pickable = pickable;
        }
    }

    /// Set the parent-relative position of `entity`.
    pub fn set_local_position(&mut self, entity: EntityId, position: Vec3) {
        if let Some(node) = self.node_mut(entity) {
            node.local_position = position;
        }
    }

    /// Parent-relative rotation of `entity`.
    #[must_use]
    pub fn local_rotation(&self, entity: EntityId) -> Quat {
        self.node(entity).map_or(Quat::IDENTITY, |n| n.local_rotation)
    }

    /// First node named `name`, in creation order.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<EntityId> {
        self.nodes
            .iter()
            .position(|n| n.name == name)
            .map(|i| EntityId(i as u32))
    }

    fn node(&self, entity: EntityId) -> Option<&Node> {
        self.nodes.get(entity.index())
    }

    fn node_mut(&mut self, entity: EntityId) -> Option<&mut Node> {
        self.nodes.get_mut(entity.index())
    }

    /// World position and rotation of `entity`, composed in one walk up the
    /// parent chain.
    fn world_transform(&self, entity: EntityId) -> (Vec3, Quat) {
        let Some(node) = self.node(entity) else {
            return (Vec3::ZERO, Quat::IDENTITY);
        };
        let mut position = node.local_position;
        let mut rotation = node.local_rotation;
        let mut parent = node.parent;
        while let Some(p) = parent.and_then(|id| self.node(id)) {
            position = p.local_position + p.local_rotation * position;
            rotation = p.local_rotation * rotation;
            parent = p.parent;
        }
        (position, rotation.normalize())
    }

    /// World position and rotation of the parent of `entity`.
    fn parent_world(&self, entity: EntityId) -> (Vec3, Quat) {
        match self.node(entity).and_then(|n| n.parent) {
            Some(parent) => self.world_transform(parent),
            None => (Vec3::ZERO, Quat::IDENTITY),
        }
    }
}

impl SceneGraph for SceneTree {
    type Entity = EntityId;

    fn root(&self) -> EntityId {
        self.root_id()
    }

    fn children(&self, entity: EntityId) -> &[EntityId] {
        self.node(entity)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
    }

    fn mesh_bounds(&self, entity: EntityId) -> &[Aabb] {
        self.node(entity)
            .map(|n| n.meshes.as_slice())
            .unwrap_or_default()
    }

    fn position(&self, entity: EntityId) -> Vec3 {
        self.world_transform(entity).0
    }

    fn rotation(&self, entity: EntityId) -> Quat {
        self.world_transform(entity).1
    }

    fn set_position(&mut self, entity: EntityId, position: Vec3) {
        let (parent_pos, parent_rot) = self.parent_world(entity);
        let local = parent_rot.inverse() * (position - parent_pos);
        self.set_local_position(entity, local);
    }

    fn set_rotation(&mut self, entity: EntityId, rotation: Quat) {
        let (_, parent_rot) = self.parent_world(entity);
        self.set_local_rotation(entity, parent_rot.inverse() * rotation);
    }

    fn set_local_rotation(&mut self, entity: EntityId, rotation: Quat) {
        if let Some(node) = self.node_mut(entity) {
            node.local_rotation = rotation.normalize();
        }
    }

    fn name(&self, entity: EntityId) -> &str {
        self.node(entity).map_or("", |n| n.name.as_str())
    }

    fn has_tag(&self, entity: EntityId, tag: &str) -> bool {
        self.node(entity).is_some_and(|n| n.tags.contains(tag))
    }
}

impl Raycast<EntityId> for SceneTree {
    fn raycast_first(&self, from: Vec3, to: Vec3) -> Option<RaycastHit<EntityId>> {
        let length = from.distance(to);
        let ray = Ray::between(from, to);
        if ray.direction == Vec3::ZERO {
            return None;
        }

        let mut best: Option<RaycastHit<EntityId>> = None;
        for (i, node) in self.nodes.iter().enumerate() {
            if !node.pickable {
                continue;
            }
            for mesh in &node.meshes {
                let Some(hit) = ray.intersect_aabb(mesh) else {
                    continue;
                };
                if hit.distance > length {
                    continue;
                }
                if best.is_some_and(|b| b.distance <= hit.distance) {
                    continue;
                }
                best = Some(RaycastHit {
                    entity: EntityId(i as u32),
                    point: ray.point_at(hit.distance),
                    normal: hit.normal,
                    distance: hit.distance,
                });
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_links_parent_and_child() {
        let mut tree = SceneTree::new();
        let root = tree.root_id();
        let a = tree.spawn(root, "a");
        let b = tree.spawn(a, "b");
        assert_eq!(tree.children(root), &[a]);
        assert_eq!(tree.children(a), &[b]);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.find_by_name("b"), Some(b));
        assert_eq!(tree.name(a), "a");
    }

    #[test]
    fn world_transforms_follow_parent_chain() {
        let mut tree = SceneTree::new();
        let root = tree.root_id();
        let parent = tree.spawn(root, "parent");
        let child = tree.spawn(parent, "child");
        tree.set_local_position(parent, Vec3::new(10.0, 0.0, 0.0));
        tree.set_local_rotation(parent, Quat::from_rotation_y(90_f32.to_radians()));
        tree.set_local_position(child, Vec3::new(0.0, 0.0, -1.0));

        let p = tree.position(child);
        assert!(p.abs_diff_eq(Vec3::new(9.0, 0.0, 0.0), 1e-5), "{p:?}");

        tree.set_position(child, Vec3::new(10.0, 2.0, 0.0));
        assert!(tree.position(child).abs_diff_eq(Vec3::new(10.0, 2.0, 0.0), 1e-5));

        let world = Quat::from_rotation_x(0.3);
        tree.set_rotation(child, world);
        assert!(tree.rotation(child).abs_diff_eq(world, 1e-5));
    }

    #[test]
    fn deep_chains_resolve_in_one_walk() {
        let mut tree = SceneTree::new();
        let mut leaf = tree.root_id();
        for i in 0..60 {
            leaf = tree.spawn(leaf, &format!("link-{i}"));
            tree.set_local_position(leaf, Vec3::X);
        }
        assert!(tree.position(leaf).abs_diff_eq(Vec3::new(60.0, 0.0, 0.0), 1e-3));
        assert!(tree.rotation(leaf).abs_diff_eq(Quat::IDENTITY, 1e-6));

        tree.set_position(leaf, Vec3::new(61.0, 1.0, 0.0));
        assert!(tree.position(leaf).abs_diff_eq(Vec3::new(61.0, 1.0, 0.0), 1e-3));

        let aabb = Aabb::from_center_half_extents(Vec3::new(61.0, 1.0, 0.0), Vec3::ONE);
        tree.add_mesh(leaf, aabb);
        let bounds = crate::scene::scene_bounds(&tree, tree.root_id());
        assert_eq!(bounds, Some(aabb));
    }

    #[test]
    fn unknown_handles_are_inert() {
        let mut tree = SceneTree::new();
        let ghost = EntityId(42);
        tree.set_position(ghost, Vec3::ONE);
        tree.add_tag(ghost, "x");
        assert_eq!(tree.position(ghost), Vec3::ZERO);
        assert!(tree.children(ghost).is_empty());
        assert!(!tree.has_tag(ghost, "x"));
        assert!(tree.is_empty());
    }

    #[test]
    fn raycast_returns_nearest_pickable_hit() {
        let mut tree = SceneTree::new();
        let root = tree.root_id();
        let near = tree.spawn(root, "near");
        let far = tree.spawn(root, "far");
        let hidden = tree.spawn(root, "hidden");
        tree.add_mesh(far, Aabb::from_center_half_extents(Vec3::new(0.0, 0.0, -20.0), Vec3::ONE));
        tree.add_mesh(near, Aabb::from_center_half_extents(Vec3::new(0.0, 0.0, -10.0), Vec3::ONE));
        tree.add_mesh(hidden, Aabb::from_center_half_extents(Vec3::new(0.0, 0.0, -5.0), Vec3::ONE));
        tree.set_pickable(hidden, false);

        let hit = tree
            .raycast_first(Vec3::ZERO, Vec3::new(0.0, 0.0, -100.0))
            .unwrap();
        assert_eq!(hit.entity, near);
        assert!((hit.distance - 9.0).abs() < 1e-4);
        assert_eq!(hit.normal, Vec3::Z);
    }

    #[test]
    fn raycast_respects_segment_length() {
        let mut tree = SceneTree::new();
        let root = tree.root_id();
        let e = tree.spawn(root, "box");
        tree.add_mesh(e, Aabb::from_center_half_extents(Vec3::new(0.0, 0.0, -10.0), Vec3::ONE));
        assert!(tree.raycast_first(Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0)).is_none());
        assert!(tree.raycast_first(Vec3::ZERO, Vec3::ZERO).is_none());
    }

    #[test]
    fn tags_are_queryable() {
        let mut tree = SceneTree::new();
        let root = tree.root_id();
        let ground = tree.spawn(root, "floor");
        tree.add_tag(ground, "ground");
        assert!(tree.has_tag(ground, "ground"));
        assert!(!tree.has_tag(ground, "button"));
    }
}
