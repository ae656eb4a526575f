//! Headless demo: drives an orbit rig through a scripted session against an
//! in-memory scene and logs what the camera does.
//!
//! Usage: `orbit-rig [options.toml]`. Set `RUST_LOG=debug` for selection and
//! glide details.

use std::path::Path;

use glam::Vec3;
use orbit_rig::billboard::Billboard;
use orbit_rig::camera::{Lens, OrbitCamera, RigEvent};
use orbit_rig::input::{
    InputEvent, MouseButton, MouseInput, TouchInput, TouchPhase,
};
use orbit_rig::options::Options;
use orbit_rig::scene::{Aabb, EntityId, SceneGraph, SceneTree};

const FRAME: f32 = 1.0 / 60.0;
const VIEWPORT: (f32, f32) = (1280.0, 720.0);

struct Demo {
    scene: SceneTree,
    rig: OrbitCamera<EntityId>,
    mouse: MouseInput,
    touch: TouchInput,
    plate: EntityId,
    billboard: Billboard<EntityId>,
}

fn build_scene() -> (SceneTree, EntityId, EntityId, EntityId) {
    let mut scene = SceneTree::new();
    let root = scene.root_id();

    let camera = scene.spawn(root, "camera");
    scene.set_position(camera, Vec3::new(0.0, 6.0, 24.0));
    scene.set_pickable(camera, false);

    let ground = scene.spawn(root, "ground");
    scene.add_tag(ground, "ground");
    scene.add_mesh(
        ground,
        Aabb::from_center_half_extents(
            Vec3::new(0.0, -0.05, 0.0),
            Vec3::new(12.0, 0.05, 12.0),
        ),
    );

    let exhibits = scene.spawn(root, "exhibits");
    for (i, x) in [-5.0_f32, 0.0, 5.0].into_iter().enumerate() {
        let exhibit = scene.spawn(exhibits, &format!("exhibit-{i}"));
        let center = Vec3::new(x, 1.0, 0.0);
        scene.set_position(exhibit, center);
        scene.add_mesh(exhibit, Aabb::from_center_half_extents(center, Vec3::ONE));
    }

    let plate = scene.spawn(root, "plate");
    scene.set_position(plate, Vec3::new(0.0, 3.0, 0.0));
    scene.set_pickable(plate, false);
    let _icon = scene.spawn(plate, "icon");
    let _title = scene.spawn(plate, "title");

    (scene, camera, exhibits, plate)
}

impl Demo {
    fn new(options: &Options) -> Self {
        let (mut scene, camera, exhibits, plate) = build_scene();
        let lens = Lens::new(&options.camera, VIEWPORT.0, VIEWPORT.1);
        let mut rig =
            OrbitCamera::new(camera, Some(exhibits), options, lens, &mut scene);
        rig.set_default_entity(Some(exhibits));
        Self {
            scene,
            rig,
            mouse: MouseInput::new(options.mouse.clone()),
            touch: TouchInput::new(options.touch.clone()),
            plate,
            billboard: Billboard::new(&options.billboard),
        }
    }

    fn input(&mut self, event: InputEvent) {
        let mut commands = self.mouse.handle_event(event);
        commands.extend(self.touch.handle_event(event));
        for command in commands {
            self.rig.execute(command, &self.scene);
        }
    }

    fn tick(&mut self, frames: u32) {
        for _ in 0..frames {
            self.rig.update(FRAME, &mut self.scene);
            for event in self.rig.drain_events() {
                self.billboard.on_event(&event);
                log_event(&self.scene, &event);
            }
            self.billboard.update(self.plate, &mut self.scene);
        }
        let state = self.rig.state();
        log::info!(
            "yaw {:7.2}  pitch {:6.2}  distance {:6.2}  eye {:?}",
            state.current_yaw(),
            state.current_pitch(),
            state.current_distance(),
            self.rig.pose().position
        );
    }

    fn drag(&mut self, button: MouseButton, from: (f32, f32), to: (f32, f32)) {
        self.input(InputEvent::CursorMoved { x: from.0, y: from.1 });
        self.input(InputEvent::MouseButton {
            button,
            pressed: true,
        });
        for step in 1..=20 {
            let t = step as f32 / 20.0;
            self.input(InputEvent::CursorMoved {
                x: from.0 + (to.0 - from.0) * t,
                y: from.1 + (to.1 - from.1) * t,
            });
            self.tick(1);
        }
        self.input(InputEvent::MouseButton {
            button,
            pressed: false,
        });
    }

    fn click(&mut self, button: MouseButton, at: (f32, f32)) {
        self.input(InputEvent::CursorMoved { x: at.0, y: at.1 });
        self.input(InputEvent::MouseButton {
            button,
            pressed: true,
        });
        self.input(InputEvent::MouseButton {
            button,
            pressed: false,
        });
    }

    fn pinch(&mut self, center: (f32, f32), from: f32, to: f32) {
        let (cx, cy) = center;
        let finger = |id: u64, phase: TouchPhase, half: f32| InputEvent::Touch {
            id,
            phase,
            x: cx + if id == 0 { -half } else { half },
            y: cy,
        };
        self.input(finger(0, TouchPhase::Started, from * 0.5));
        self.input(finger(1, TouchPhase::Started, from * 0.5));
        for step in 1..=10 {
            let half = (from + (to - from) * step as f32 / 10.0) * 0.5;
            self.input(finger(1, TouchPhase::Moved, half));
            self.input(finger(0, TouchPhase::Moved, half));
            self.tick(1);
        }
        self.input(finger(1, TouchPhase::Ended, to * 0.5));
        self.input(finger(0, TouchPhase::Ended, to * 0.5));
    }
}

fn log_event(scene: &SceneTree, event: &RigEvent<EntityId>) {
    match event {
        RigEvent::CameraAdded { camera } => {
            log::info!("camera ready: {}", scene.name(*camera));
        }
        RigEvent::EntitySelected { hit } => {
            log::info!("selected {} at {:?}", scene.name(hit.entity), hit.point);
        }
        RigEvent::EntityActivated { hit } => {
            log::info!("activated {}", scene.name(hit.entity));
        }
        RigEvent::FocusChanged { entity } => {
            log::info!("focusing {}", scene.name(*entity));
        }
        RigEvent::AutoMoveStarted => log::info!("idle: turntable on"),
        RigEvent::AutoMoveStopped => log::info!("input: turntable off"),
    }
}

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let mut demo = Demo::new(&options);
    let center = (VIEWPORT.0 * 0.5, VIEWPORT.1 * 0.5);

    log::info!("-- framing");
    demo.tick(30);

    log::info!("-- orbit left drag");
    demo.drag(MouseButton::Left, center, (center.0 + 200.0, center.1 + 60.0));
    demo.tick(30);

    log::info!("-- wheel zoom");
    for _ in 0..5 {
        demo.input(InputEvent::Scroll { delta: 1.0 });
        demo.tick(2);
    }

    log::info!("-- pan right drag");
    demo.drag(MouseButton::Right, center, (center.0 - 120.0, center.1));
    demo.tick(30);

    log::info!("-- alt-click to focus, then click again to unfocus");
    demo.input(InputEvent::ModifiersChanged { alt: true });
    demo.click(MouseButton::Left, center);
    demo.tick(60);
    demo.click(MouseButton::Left, center);
    demo.tick(60);
    demo.input(InputEvent::ModifiersChanged { alt: false });

    log::info!("-- right-click to activate");
    demo.click(MouseButton::Right, center);
    demo.tick(1);

    log::info!("-- pinch zoom");
    demo.pinch(center, 200.0, 320.0);
    demo.tick(30);

    log::info!("-- idle");
    let idle_frames = ((options.auto_move.time_to_move + 2.0) / FRAME) as u32;
    demo.tick(idle_frames);
    demo.input(InputEvent::CursorMoved {
        x: center.0,
        y: center.1,
    });
    demo.tick(1);
}
