use glam::Vec3;

use super::SceneGraph;

/// Deepest subtree level visited by [`scene_bounds`].
pub const MAX_BOUNDS_DEPTH: usize = 64;

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Box spanning two corners given in any order.
    #[must_use]
    pub fn from_corners(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Box from a centre and per-axis half extents.
    #[must_use]
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Zero-size box at a point.
    #[must_use]
    pub fn point(p: Vec3) -> Self {
        Self { min: p, max: p }
    }

    /// Centre of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Half the size of the box along each axis.
    #[must_use]
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Largest half extent; the framing radius used when fitting the camera.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.half_extents().max_element()
    }

    /// Smallest box containing both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Whether `p` lies inside or on the box.
    #[must_use]
    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }
}

/// Bounding box of every mesh instance under `entity`, the entity included.
///
/// The first mesh found initialises the box and every later one is unioned
/// in, so the result does not depend on traversal order. Returns `None` when
/// the subtree holds no meshes.
pub fn scene_bounds<S>(scene: &S, entity: S::Entity) -> Option<Aabb>
where
    S: SceneGraph + ?Sized,
{
    let mut bounds = None;
    accumulate(scene, entity, 0, &mut bounds);
    bounds
}

fn accumulate<S>(
    scene: &S,
    entity: S::Entity,
    depth: usize,
    bounds: &mut Option<Aabb>,
) where
    S: SceneGraph + ?Sized,
{
    if depth > MAX_BOUNDS_DEPTH {
        log::warn!(
            "scene_bounds: skipping subtree below {:?}, deeper than {MAX_BOUNDS_DEPTH}",
            entity
        );
        return;
    }

    for mesh in scene.mesh_bounds(entity) {
        *bounds = Some(bounds.map_or(*mesh, |b| b.union(mesh)));
    }

    for &child in scene.children(entity) {
        accumulate(scene, child, depth + 1, bounds);
    }
}
