use glam::{Vec2, Vec3};

use super::Pose;
use crate::options::CameraOptions;

/// Perspective projection of the rig's camera and the viewport it renders
/// into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lens {
    /// Field of view in degrees. Vertical unless `horizontal_fov` is set.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Viewport width in pixels.
    pub width: f32,
    /// Viewport height in pixels.
    pub height: f32,
    /// Whether `fovy` spans the viewport width instead of its height.
    pub horizontal_fov: bool,
}

impl Lens {
    /// Lens from options, sized to the given viewport.
    #[must_use]
    pub fn new(options: &CameraOptions, width: f32, height: f32) -> Self {
        let mut lens = Self {
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
            width: 1.0,
            height: 1.0,
            horizontal_fov: false,
        };
        lens.resize(width, height);
        lens
    }

    /// Track a viewport resize. Portrait viewports switch the field of view
    /// to the horizontal axis so the subject keeps its framing.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
        self.horizontal_fov = self.height > self.width;
    }

    /// Viewport aspect ratio (width / height).
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Distance at which a sphere of `radius` fills the view, scaled by
    /// `padding`.
    #[must_use]
    pub fn fit_distance(&self, radius: f32, padding: f32) -> f32 {
        let half = (self.fovy * 0.5).to_radians().sin();
        if half <= f32::EPSILON {
            return radius * padding;
        }
        radius * padding / half
    }

    /// Half extents of the view at unit depth.
    fn half_extents(&self) -> Vec2 {
        let tan_half = (self.fovy * 0.5).to_radians().tan();
        if self.horizontal_fov {
            Vec2::new(tan_half, tan_half / self.aspect())
        } else {
            Vec2::new(tan_half * self.aspect(), tan_half)
        }
    }

    /// World point `depth` units from the eye along the ray through a pixel.
    ///
    /// Screen coordinates are pixels with the origin at the top left.
    #[must_use]
    pub fn screen_to_world(&self, pose: &Pose, screen: Vec2, depth: f32) -> Vec3 {
        let ndc = Vec2::new(
            screen.x / self.width * 2.0 - 1.0,
            1.0 - screen.y / self.height * 2.0,
        );
        let half = self.half_extents();
        let local = Vec3::new(ndc.x * half.x, ndc.y * half.y, -1.0);
        let dir = (pose.rotation * local).normalize_or_zero();
        pose.position + dir * depth
    }

    /// Near and far points of the pick ray through a pixel.
    #[must_use]
    pub fn screen_segment(&self, pose: &Pose, screen: Vec2) -> (Vec3, Vec3) {
        (
            self.screen_to_world(pose, screen, self.znear),
            self.screen_to_world(pose, screen, self.zfar),
        )
    }

    /// Pixel position of a world point, or `None` if it is behind the eye.
    #[must_use]
    pub fn world_to_screen(&self, pose: &Pose, point: Vec3) -> Option<Vec2> {
        let local = pose.rotation.inverse() * (point - pose.position);
        if local.z >= 0.0 {
            return None;
        }
        let half = self.half_extents();
        let ndc = Vec2::new(
            local.x / -local.z / half.x,
            local.y / -local.z / half.y,
        );
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.width,
            (1.0 - ndc.y) * 0.5 * self.height,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lens(width: f32, height: f32) -> Lens {
        Lens::new(&CameraOptions::default(), width, height)
    }

    #[test]
    fn portrait_switches_to_horizontal_fov() {
        let mut l = lens(800.0, 600.0);
        assert!(!l.horizontal_fov);
        l.resize(600.0, 800.0);
        assert!(l.horizontal_fov);
    }

    #[test]
    fn centre_pixel_is_straight_ahead() {
        let l = lens(800.0, 600.0);
        let pose = Pose::default();
        let p = l.screen_to_world(&pose, Vec2::new(400.0, 300.0), 10.0);
        assert!(p.abs_diff_eq(Vec3::new(0.0, 0.0, -10.0), 1e-4));
    }

    #[test]
    fn world_to_screen_inverts_screen_to_world() {
        for (w, h) in [(800.0, 600.0), (600.0, 800.0)] {
            let l = lens(w, h);
            let pose = Pose::looking_at(Vec3::new(3.0, 4.0, 5.0), Vec3::ZERO);
            let pixel = Vec2::new(123.0, 456.0);
            let world = l.screen_to_world(&pose, pixel, 7.5);
            let back = l.world_to_screen(&pose, world).unwrap();
            assert!(back.abs_diff_eq(pixel, 1e-2), "{back:?}");
        }
    }

    #[test]
    fn points_behind_the_eye_do_not_project() {
        let l = lens(640.0, 480.0);
        assert!(l.world_to_screen(&Pose::default(), Vec3::Z).is_none());
    }

    #[test]
    fn fit_distance_uses_half_fov_sine() {
        let mut l = lens(100.0, 100.0);
        l.fovy = 60.0;
        assert!((l.fit_distance(2.0, 1.5) - 6.0).abs() < 1e-4);
    }
}
