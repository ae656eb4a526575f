//! Entities that keep facing the active camera, such as name plates.

use std::f32::consts::PI;
use std::fmt;

use glam::{Quat, Vec3};

use crate::camera::RigEvent;
use crate::options::{BillboardMode, BillboardOptions};
use crate::scene::SceneGraph;
use crate::util::angles::{look_rotation, orientation_to_yaw};

/// Turns an entity toward the camera announced by the rig.
///
/// The billboard learns its camera from [`RigEvent::CameraAdded`]; until
/// then [`update`](Self::update) does nothing. The entity's second child is
/// treated as its title and kept flipped so the text reads upright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Billboard<E> {
    mode: BillboardMode,
    camera: Option<E>,
}

impl<E: Copy + Eq + fmt::Debug> Billboard<E> {
    /// Billboard with no camera yet.
    #[must_use]
    pub fn new(options: &BillboardOptions) -> Self {
        Self {
            mode: options.mode,
            camera: None,
        }
    }

    /// Camera being faced.
    #[must_use]
    pub fn camera(&self) -> Option<E> {
        self.camera
    }

    /// Orientation mode.
    #[must_use]
    pub fn mode(&self) -> BillboardMode {
        self.mode
    }

    /// Pick up the camera from a rig notification.
    pub fn on_event(&mut self, event: &RigEvent<E>) {
        if let RigEvent::CameraAdded { camera } = event {
            log::debug!("billboard tracking camera {camera:?}");
            self.camera = Some(*camera);
        }
    }

    /// Take over another billboard's camera, e.g. when swapping the
    /// component on a hot reload.
    pub fn inherit_camera(&mut self, other: &Self) {
        self.camera = other.camera;
    }

    /// Orient `entity` toward the camera.
    pub fn update<S>(&self, entity: E, scene: &mut S)
    where
        S: SceneGraph<Entity = E> + ?Sized,
    {
        let Some(camera) = self.camera else {
            return;
        };

        let title = scene.children(entity).get(1).copied();
        if let Some(title) = title {
            scene.set_local_rotation(title, Quat::from_rotation_x(PI));
        }

        let rotation = match self.mode {
            BillboardMode::LookAt => look_rotation(
                scene.position(entity),
                scene.position(camera),
                Vec3::NEG_Y,
            ),
            BillboardMode::MatchYaw => {
                let yaw = orientation_to_yaw(scene.rotation(camera));
                Quat::from_rotation_y(yaw.to_radians())
            }
        };
        scene.set_rotation(entity, rotation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{EntityId, SceneTree};
    use crate::util::angles::{forward, orbit_rotation};

    struct Fixture {
        scene: SceneTree,
        camera: EntityId,
        plate: EntityId,
        title: EntityId,
    }

    fn fixture() -> Fixture {
        let mut scene = SceneTree::new();
        let root = scene.root_id();
        let camera = scene.spawn(root, "camera");
        scene.set_position(camera, Vec3::new(0.0, 0.0, 10.0));
        let plate = scene.spawn(root, "plate");
        let _icon = scene.spawn(plate, "icon");
        let title = scene.spawn(plate, "title");
        Fixture {
            scene,
            camera,
            plate,
            title,
        }
    }

    #[test]
    fn waits_for_a_camera() {
        let mut f = fixture();
        let b = Billboard::new(&BillboardOptions::default());
        b.update(f.plate, &mut f.scene);
        assert_eq!(f.scene.rotation(f.plate), Quat::IDENTITY);
        assert_eq!(f.scene.local_rotation(f.title), Quat::IDENTITY);
    }

    #[test]
    fn camera_comes_from_rig_events() {
        let mut b = Billboard::new(&BillboardOptions::default());
        b.on_event(&RigEvent::AutoMoveStarted);
        assert_eq!(b.camera(), None);
        b.on_event(&RigEvent::CameraAdded { camera: 3_u32 });
        assert_eq!(b.camera(), Some(3));

        let mut swapped = Billboard::new(&BillboardOptions::default());
        swapped.inherit_camera(&b);
        assert_eq!(swapped.camera(), Some(3));
    }

    #[test]
    fn look_at_faces_camera_upside_down() {
        let mut f = fixture();
        let mut b = Billboard::new(&BillboardOptions::default());
        b.on_event(&RigEvent::CameraAdded { camera: f.camera });
        b.update(f.plate, &mut f.scene);

        let rotation = f.scene.rotation(f.plate);
        assert!(forward(rotation).abs_diff_eq(Vec3::Z, 1e-5));
        assert!((rotation * Vec3::Y).abs_diff_eq(Vec3::NEG_Y, 1e-5));
        assert!(f
            .scene
            .local_rotation(f.title)
            .abs_diff_eq(Quat::from_rotation_x(PI), 1e-5));
    }

    #[test]
    fn match_yaw_copies_heading_only() {
        let mut f = fixture();
        f.scene.set_rotation(f.camera, orbit_rotation(-20.0, 30.0));
        let mut b = Billboard::new(&BillboardOptions {
            mode: BillboardMode::MatchYaw,
        });
        b.on_event(&RigEvent::CameraAdded { camera: f.camera });
        b.update(f.plate, &mut f.scene);

        let rotation = f.scene.rotation(f.plate);
        assert!(rotation.abs_diff_eq(Quat::from_rotation_y(30_f32.to_radians()), 1e-5));
        assert!((rotation * Vec3::Y).abs_diff_eq(Vec3::Y, 1e-5));
    }
}
