use glam::Vec3;

use crate::scene::Aabb;

/// A ray in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

/// Where a ray enters a box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayBoxHit {
    /// Distance along the ray to the entry point.
    pub distance: f32,
    /// Outward face normal at the entry point.
    pub normal: Vec3,
}

impl Ray {
    /// Ray from `origin` along `direction`; a zero direction stays zero.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Ray from `from` toward `to`.
    #[must_use]
    pub fn between(from: Vec3, to: Vec3) -> Self {
        Self::new(from, to - from)
    }

    /// Point `t` units from the origin.
    #[must_use]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Slab test against a box.
    ///
    /// Returns the nearest entry in front of the origin. A ray starting
    /// inside the box hits at distance 0 with a zero normal.
    #[must_use]
    pub fn intersect_aabb(&self, aabb: &Aabb) -> Option<RayBoxHit> {
        let mut t_enter = f32::NEG_INFINITY;
        let mut t_exit = f32::INFINITY;
        let mut normal = Vec3::ZERO;

        for axis in 0..3 {
            let origin = self.origin[axis];
            let dir = self.direction[axis];
            let (lo, hi) = (aabb.min[axis], aabb.max[axis]);

            if dir.abs() < f32::EPSILON {
                // Parallel to this slab: must already be inside it.
                if origin < lo || origin > hi {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / dir;
            let (t0, t1, face) = if inv >= 0.0 {
                ((lo - origin) * inv, (hi - origin) * inv, -1.0)
            } else {
                ((hi - origin) * inv, (lo - origin) * inv, 1.0)
            };

            if t0 > t_enter {
                t_enter = t0;
                normal = Vec3::ZERO;
                normal[axis] = face;
            }
            t_exit = t_exit.min(t1);
            if t_enter > t_exit {
                return None;
            }
        }

        if t_exit < 0.0 {
            return None;
        }
        if t_enter < 0.0 {
            return Some(RayBoxHit {
                distance: 0.0,
                normal: Vec3::ZERO,
            });
        }
        Some(RayBoxHit {
            distance: t_enter,
            normal,
        })
    }
}

/// Nearest entity hit by a raycast query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit<E> {
    /// Entity that was hit.
    pub entity: E,
    /// World-space hit point.
    pub point: Vec3,
    /// Surface normal at the hit point.
    pub normal: Vec3,
    /// Distance from the query start to the hit point.
    pub distance: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Aabb {
        Aabb::from_corners(-Vec3::ONE, Vec3::ONE)
    }

    #[test]
    fn ray_hits_box_front_face() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
        let hit = ray.intersect_aabb(&unit_box()).unwrap();
        assert!((hit.distance - 4.0).abs() < 1e-5);
        assert_eq!(hit.normal, Vec3::NEG_Z);
        assert!((ray.point_at(hit.distance).z + 1.0).abs() < 1e-5);
    }

    #[test]
    fn ray_misses_box_to_the_side() {
        let ray = Ray::new(Vec3::new(0.0, 5.0, -5.0), Vec3::Z);
        assert!(ray.intersect_aabb(&unit_box()).is_none());
    }

    #[test]
    fn box_behind_origin_is_missed() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert!(ray.intersect_aabb(&unit_box()).is_none());
    }

    #[test]
    fn origin_inside_box_hits_at_zero() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let hit = ray.intersect_aabb(&unit_box()).unwrap();
        assert_eq!(hit.distance, 0.0);
    }

    #[test]
    fn side_entry_reports_entry_face_normal() {
        let ray = Ray::between(Vec3::new(-4.0, 0.5, 0.0), Vec3::new(4.0, 0.5, 0.0));
        let hit = ray.intersect_aabb(&unit_box()).unwrap();
        assert_eq!(hit.normal, Vec3::NEG_X);
        assert!((hit.distance - 3.0).abs() < 1e-5);
    }
}
