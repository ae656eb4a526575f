use std::fmt;

use glam::{Vec2, Vec3};

use super::{
    AutoMove, AutoMoveStep, Lens, OrbitCommand, OrbitLimits, OrbitState, Pose,
    RigEvent, SmoothMove,
};
use crate::options::{OrbitOptions, Options, SmoothMoveOptions};
use crate::picking::{ClickOutcome, RaycastHit, SelectionState, TapOutcome};
use crate::scene::{scene_bounds, Aabb, Raycast, SceneGraph};
use crate::util::angles::{orientation_to_pitch, orientation_to_yaw};

/// Orbit camera rig bound to one camera entity.
///
/// Owns the orbit parameters, the projection, selection bookkeeping and the
/// idle/glide controllers. The host keeps the entities: every method that
/// touches the scene borrows it for the duration of the call.
///
/// Per frame, execute the commands produced by the input adapters, then call
/// [`update`](Self::update) once, then [`drain_events`](Self::drain_events).
#[derive(Debug, Clone)]
pub struct OrbitCamera<E> {
    camera: E,
    state: OrbitState,
    lens: Lens,
    pose: Pose,
    orbit: OrbitOptions,
    smooth: SmoothMoveOptions,
    inertia_factor: f32,
    smooth_move: Option<SmoothMove>,
    auto_move: AutoMove,
    selection: SelectionState<E>,
    focus_entity: Option<E>,
    default_entity: Option<E>,
    enabled: bool,
    events: Vec<RigEvent<E>>,
}

/// Bounds of an entity subtree, or a point at the entity when it has no
/// meshes.
fn entity_bounds<S>(scene: &S, entity: S::Entity) -> Aabb
where
    S: SceneGraph + ?Sized,
{
    scene_bounds(scene, entity)
        .unwrap_or_else(|| Aabb::point(scene.position(entity)))
}

impl<E: Copy + Eq + fmt::Debug> OrbitCamera<E> {
    /// Attach a rig to `camera` and frame `focus_entity` (the scene root when
    /// `None`).
    ///
    /// The camera keeps its position and turns toward the centre of the
    /// focus bounds. With `frame_on_start` the distance is then refitted so
    /// the whole subtree is in view.
    pub fn new<S>(
        camera: E,
        focus_entity: Option<E>,
        options: &Options,
        lens: Lens,
        scene: &mut S,
    ) -> Self
    where
        S: SceneGraph<Entity = E> + ?Sized,
    {
        let mut rig = Self {
            camera,
            state: OrbitState::new(options.orbit.limits()),
            lens,
            pose: Pose {
                position: scene.position(camera),
                rotation: scene.rotation(camera),
            },
            orbit: options.orbit.clone(),
            smooth: options.smooth_move.clone(),
            inertia_factor: options.orbit.inertia_factor,
            smooth_move: None,
            auto_move: AutoMove::new(options.auto_move.clone()),
            selection: SelectionState::new(),
            focus_entity,
            default_entity: None,
            enabled: true,
            events: Vec::new(),
        };
        rig.initialize(scene);
        rig.events.push(RigEvent::CameraAdded { camera });
        rig
    }

    fn initialize<S>(&mut self, scene: &mut S)
    where
        S: SceneGraph<Entity = E> + ?Sized,
    {
        let focus = self.focus_target(scene);
        let center = entity_bounds(scene, focus).center();
        let eye = scene.position(self.camera);
        let rotation = Pose::looking_at(eye, center).rotation;
        scene.set_rotation(self.camera, rotation);

        self.state.set_pivot(center);
        let yaw = orientation_to_yaw(rotation);
        self.state.snap_yaw(yaw);
        self.state.snap_pitch(orientation_to_pitch(rotation, yaw));

        if self.orbit.frame_on_start {
            self.state.snap_distance(0.0);
            self.focus(focus, scene);
        } else {
            self.state.snap_distance(eye.distance(center));
        }
        self.apply_pose(scene);

        log::info!(
            "orbit camera {:?} framing {:?} ({}), distance {:.3}",
            self.camera,
            focus,
            scene.name(focus),
            self.state.distance()
        );
    }

    fn focus_target<S>(&self, scene: &S) -> E
    where
        S: SceneGraph<Entity = E> + ?Sized,
    {
        self.focus_entity.unwrap_or_else(|| scene.root())
    }

    // -- Accessors --

    /// Camera entity driven by this rig.
    #[must_use]
    pub fn camera(&self) -> E {
        self.camera
    }

    /// Orbit parameters.
    #[must_use]
    pub fn state(&self) -> &OrbitState {
        &self.state
    }

    /// Pose applied on the last update.
    #[must_use]
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// Projection.
    #[must_use]
    pub fn lens(&self) -> &Lens {
        &self.lens
    }

    /// Selection bookkeeping.
    #[must_use]
    pub fn selection(&self) -> &SelectionState<E> {
        &self.selection
    }

    /// Target yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.state.yaw()
    }

    /// Target pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.state.pitch()
    }

    /// Target distance.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.state.distance()
    }

    /// Point the camera orbits around.
    #[must_use]
    pub fn pivot_point(&self) -> Vec3 {
        self.state.pivot()
    }

    /// Current inertia factor.
    #[must_use]
    pub fn inertia_factor(&self) -> f32 {
        self.inertia_factor
    }

    /// Whether the rig reacts to updates and commands.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a focus glide is in progress.
    #[must_use]
    pub fn is_smooth_moving(&self) -> bool {
        self.smooth_move.is_some()
    }

    /// Whether the idle turntable is running.
    #[must_use]
    pub fn is_auto_moving(&self) -> bool {
        self.auto_move.is_active()
    }

    /// Take the notifications emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<RigEvent<E>> {
        std::mem::take(&mut self.events)
    }

    // -- Setters --

    /// Request a yaw; turns the short way round.
    pub fn set_yaw(&mut self, yaw: f32) {
        let _ = self.state.set_yaw(yaw);
    }

    /// Request a pitch, clamped to the limits.
    pub fn set_pitch(&mut self, pitch: f32) {
        let _ = self.state.set_pitch(pitch);
    }

    /// Request a distance, clamped to the limits.
    pub fn set_distance(&mut self, distance: f32) {
        let _ = self.state.set_distance(distance);
    }

    /// Move the pivot.
    pub fn set_pivot_point(&mut self, pivot: Vec3) {
        self.state.set_pivot(pivot);
    }

    /// Replace the orbit limits; current values are re-clamped.
    pub fn set_limits(&mut self, limits: OrbitLimits) {
        self.orbit.distance_min = limits.distance_min;
        self.orbit.distance_max = limits.distance_max;
        self.orbit.pitch_angle_min = limits.pitch_angle_min;
        self.orbit.pitch_angle_max = limits.pitch_angle_max;
        self.state.set_limits(limits);
    }

    /// Set the inertia factor (0 disables easing).
    pub fn set_inertia_factor(&mut self, inertia_factor: f32) {
        self.inertia_factor = inertia_factor.max(0.0);
    }

    /// Turn the rig on or off. A disabled rig ignores updates and commands.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Entity that focus returns to when the focused entity is clicked
    /// again. `None` falls back to the scene root.
    pub fn set_default_entity(&mut self, entity: Option<E>) {
        self.default_entity = entity;
    }

    /// Change the focus entity and re-frame it.
    pub fn set_focus_entity<S>(&mut self, entity: Option<E>, scene: &mut S)
    where
        S: SceneGraph<Entity = E> + ?Sized,
    {
        self.focus_entity = entity;
        if self.orbit.frame_on_start {
            let target = self.focus_target(scene);
            self.focus(target, scene);
        } else {
            let eye = scene.position(self.camera);
            let target = self.focus_target(scene);
            self.reset_and_look_at_entity(eye, target, scene);
        }
    }

    /// Toggle framing on start; turning it on frames the focus entity now.
    pub fn set_frame_on_start<S>(&mut self, frame_on_start: bool, scene: &S)
    where
        S: SceneGraph<Entity = E> + ?Sized,
    {
        self.orbit.frame_on_start = frame_on_start;
        if frame_on_start {
            let target = self.focus_target(scene);
            self.focus(target, scene);
        }
    }

    /// Track a viewport resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.lens.resize(width, height);
    }

    // -- Camera cuts --

    /// Frame `entity`: pivot on the centre of its bounds and pull back until
    /// its bounding radius fits the field of view. Takes effect on the next
    /// update.
    pub fn focus<S>(&mut self, entity: E, scene: &S)
    where
        S: SceneGraph<Entity = E> + ?Sized,
    {
        self.user_action();
        let bounds = entity_bounds(scene, entity);
        let distance = self
            .lens
            .fit_distance(bounds.radius(), self.orbit.frame_padding);
        let _ = self.state.set_distance(distance);
        self.state.remove_inertia();
        self.state.set_pivot(bounds.center());
        log::debug!(
            "focus {:?} ({}): pivot {:?}, distance {:.3}",
            entity,
            scene.name(entity),
            bounds.center(),
            self.state.distance()
        );
    }

    /// Cut to `reset_point` looking at `look_at`, with no easing.
    pub fn reset_and_look_at_point<S>(
        &mut self,
        reset_point: Vec3,
        look_at: Vec3,
        scene: &mut S,
    ) where
        S: SceneGraph<Entity = E> + ?Sized,
    {
        self.user_action();
        self.state.set_pivot(look_at);
        let rotation = Pose::looking_at(reset_point, look_at).rotation;
        let _ = self.state.set_distance(reset_point.distance(look_at));
        let yaw = self.state.set_yaw(orientation_to_yaw(rotation));
        let _ = self.state.set_pitch(orientation_to_pitch(rotation, yaw));
        self.state.remove_inertia();
        self.apply_pose(scene);
    }

    /// Cut to `reset_point` looking at the centre of `entity`'s bounds.
    pub fn reset_and_look_at_entity<S>(
        &mut self,
        reset_point: Vec3,
        entity: E,
        scene: &mut S,
    ) where
        S: SceneGraph<Entity = E> + ?Sized,
    {
        let center = entity_bounds(scene, entity).center();
        self.reset_and_look_at_point(reset_point, center, scene);
    }

    /// Jump straight to the given orbit parameters.
    pub fn reset(&mut self, yaw: f32, pitch: f32, distance: f32) {
        let _ = self.state.set_pitch(pitch);
        let _ = self.state.set_yaw(yaw);
        let _ = self.state.set_distance(distance);
        self.state.remove_inertia();
    }

    /// Glide toward `entity`, keeping the side it is currently seen from.
    ///
    /// The end distance fits the entity's bounds, scaled down for ground
    /// entities and never closer than the configured minimum.
    pub fn smooth_reset_and_look_at_entity<S>(&mut self, entity: E, scene: &S)
    where
        S: SceneGraph<Entity = E> + ?Sized,
    {
        let bounds = entity_bounds(scene, entity);
        let mut distance = self
            .lens
            .fit_distance(bounds.radius(), self.orbit.frame_padding);
        if scene.has_tag(entity, &self.smooth.ground_tag) {
            distance *= self.smooth.ground_distance_scale;
        }
        let distance = distance.max(self.smooth.min_distance);

        let from = scene.position(self.camera);
        let to =
            SmoothMove::framing_position(from, scene.position(entity), distance);
        self.smooth_move = Some(SmoothMove::new(
            (from, to),
            (self.state.pivot(), bounds.center()),
            self.smooth.duration,
            self.smooth.easing,
        ));
        self.events.push(RigEvent::FocusChanged { entity });
        log::info!(
            "gliding to {:?} ({}) over {:.2}s, distance {distance:.3}",
            entity,
            scene.name(entity),
            self.smooth.duration
        );
    }

    /// Reset the idle timer; stops the turntable if it was running.
    pub fn user_action(&mut self) {
        if let Some(inertia) = self.auto_move.user_action() {
            self.inertia_factor = inertia;
            self.events.push(RigEvent::AutoMoveStopped);
            log::debug!("auto-move stopped, inertia {inertia}");
        }
    }

    // -- Per-frame --

    /// Advance the rig by `dt` seconds and write the camera pose.
    pub fn update<S>(&mut self, dt: f32, scene: &mut S)
    where
        S: SceneGraph<Entity = E> + ?Sized,
    {
        if !self.enabled {
            return;
        }

        match self.auto_move.tick(dt) {
            AutoMoveStep::Idle => {}
            AutoMoveStep::Started { inertia } => {
                self.inertia_factor = inertia;
                self.events.push(RigEvent::AutoMoveStarted);
                log::info!(
                    "auto-move started after {:.1}s idle",
                    self.auto_move.idle_time()
                );
            }
            AutoMoveStep::Turn { yaw_step } => {
                let _ = self.state.set_yaw(self.state.yaw() + yaw_step);
            }
        }

        self.step_smooth_move(dt, scene);
        self.state.advance(dt, self.inertia_factor);
        self.apply_pose(scene);
    }

    fn step_smooth_move<S>(&mut self, dt: f32, scene: &mut S)
    where
        S: SceneGraph<Entity = E> + ?Sized,
    {
        let Some(mut glide) = self.smooth_move.take() else {
            return;
        };
        let frame = glide.step(dt);
        if !glide.is_finished() {
            self.smooth_move = Some(glide);
        }
        if let Some(frame) = frame {
            self.reset_and_look_at_point(frame.position, frame.pivot, scene);
        }
    }

    fn apply_pose<S>(&mut self, scene: &mut S)
    where
        S: SceneGraph<Entity = E> + ?Sized,
    {
        self.pose = Pose::from_orbit(&self.state);
        scene.set_local_rotation(self.camera, self.pose.rotation);
        scene.set_position(self.camera, self.pose.position);
    }

    // -- Commands --

    /// Execute one input command. Pose changes show on the next
    /// [`update`](Self::update).
    pub fn execute<S>(&mut self, command: OrbitCommand, scene: &S)
    where
        S: SceneGraph<Entity = E> + Raycast<E> + ?Sized,
    {
        if !self.enabled {
            return;
        }
        match command {
            OrbitCommand::UserActivity => self.user_action(),
            OrbitCommand::Orbit {
                yaw_delta,
                pitch_delta,
            } => self.orbit_by(yaw_delta, pitch_delta),
            OrbitCommand::Pan { from, to } => self.pan(from, to),
            OrbitCommand::Zoom { amount } => self.zoom(amount),
            OrbitCommand::Preselect { screen } => self.preselect_at(screen, scene),
            OrbitCommand::ClearPreselection => {
                self.selection.clear_preselection();
            }
            OrbitCommand::Select { screen, focus } => {
                self.select_at(screen, focus, scene);
            }
            OrbitCommand::Activate { screen } => self.activate_at(screen, scene),
            OrbitCommand::Tap { double } => self.resolve_tap(double),
        }
    }

    fn cancel_smooth_move(&mut self) {
        if self.smooth_move.take().is_some() {
            log::debug!("glide cancelled by manual input");
        }
    }

    /// Add to the yaw and pitch targets.
    pub fn orbit_by(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.cancel_smooth_move();
        let _ = self.state.set_pitch(self.state.pitch() + pitch_delta);
        let _ = self.state.set_yaw(self.state.yaw() + yaw_delta);
    }

    /// Move the pivot by the world-space offset between two pixels, measured
    /// at the orbit distance so pan speed does not depend on zoom.
    pub fn pan(&mut self, from: Vec2, to: Vec2) {
        self.cancel_smooth_move();
        let depth = self.state.distance();
        let a = self.lens.screen_to_world(&self.pose, from, depth);
        let b = self.lens.screen_to_world(&self.pose, to, depth);
        self.state.translate_pivot(b - a);
    }

    /// Move toward the pivot by `amount` times the current distance.
    pub fn zoom(&mut self, amount: f32) {
        self.cancel_smooth_move();
        let distance = self.state.distance();
        let _ = self.state.set_distance(distance - amount * distance);
    }

    // -- Selection --

    fn pick<S>(&self, screen: Vec2, scene: &S) -> Option<RaycastHit<E>>
    where
        S: Raycast<E> + ?Sized,
    {
        let (from, to) = self.lens.screen_segment(&self.pose, screen);
        scene.raycast_first(from, to)
    }

    /// Raycast under `screen` and remember the hit (a miss clears it).
    pub fn preselect_at<S>(&mut self, screen: Vec2, scene: &S)
    where
        S: SceneGraph<Entity = E> + Raycast<E> + ?Sized,
    {
        let hit = self.pick(screen, scene);
        match &hit {
            Some(h) => {
                log::debug!("preselect {:?} ({})", h.entity, scene.name(h.entity));
            }
            None => log::debug!("preselect: nothing under {screen:?}"),
        }
        self.selection.preselect(hit);
    }

    /// Announce the preselected entity as selected.
    pub fn select_preselected(&mut self) {
        if let Some(hit) = self.selection.preselected_hit() {
            self.events.push(RigEvent::EntitySelected { hit: *hit });
        }
    }

    /// Forget the preselection.
    pub fn clear_preselection(&mut self) {
        self.selection.clear_preselection();
    }

    /// Click at `screen`.
    ///
    /// Any hit is announced. A hit on the preselected entity toggles focus
    /// (clicking the focused entity again hands focus back to the default
    /// entity); with `focus` held the camera glides to the new focus.
    pub fn select_at<S>(&mut self, screen: Vec2, focus: bool, scene: &S)
    where
        S: SceneGraph<Entity = E> + Raycast<E> + ?Sized,
    {
        let hit = self.pick(screen, scene);
        if let Some(hit) = hit {
            self.events.push(RigEvent::EntitySelected { hit });
        }

        let clicked = hit.map(|h| h.entity);
        let is_button =
            clicked.is_some_and(|e| scene.has_tag(e, &self.orbit.button_tag));
        let target = match self.selection.confirm_click(
            clicked,
            is_button,
            self.default_entity,
        ) {
            ClickOutcome::Ignored => return,
            ClickOutcome::Focus(entity) => entity,
            ClickOutcome::Unfocus(default) => {
                default.unwrap_or_else(|| scene.root())
            }
        };

        if focus && self.orbit.enable_focus_change {
            self.smooth_reset_and_look_at_entity(target, scene);
        }
    }

    /// Secondary click at `screen`: activates the preselected entity if it
    /// is the one under the pointer.
    pub fn activate_at<S>(&mut self, screen: Vec2, scene: &S)
    where
        S: SceneGraph<Entity = E> + Raycast<E> + ?Sized,
    {
        let Some(hit) = self.pick(screen, scene) else {
            return;
        };
        if self.selection.is_preselected(Some(hit.entity)) {
            log::debug!("activate {:?} ({})", hit.entity, scene.name(hit.entity));
            self.events.push(RigEvent::EntityActivated { hit });
        }
    }

    /// Resolve a completed touch tap against the preselection.
    pub fn resolve_tap(&mut self, double: bool) {
        match self.selection.resolve_tap(double) {
            TapOutcome::Nothing => {}
            TapOutcome::Select(hit) => {
                self.events.push(RigEvent::EntitySelected { hit });
            }
            TapOutcome::Activate(hit) => {
                self.events.push(RigEvent::EntityActivated { hit });
            }
        }
    }
}
