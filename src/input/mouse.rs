use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use crate::camera::OrbitCommand;
use crate::options::MouseOptions;

/// Fewer pointer moves than this between press and release count as a
/// click rather than a drag.
pub const CLICK_DRAG_LIMIT: u32 = 4;

/// Mouse gesture adapter.
///
/// Left drag orbits, middle or right drag pans, the wheel zooms. A left
/// click selects (Alt held also glides to the entity); a middle or right
/// click activates the preselected entity.
#[derive(Debug, Clone)]
pub struct MouseInput {
    options: MouseOptions,
    look_button_down: bool,
    pan_button_down: bool,
    drag_count: u32,
    last_point: Vec2,
    alt_held: bool,
}

impl MouseInput {
    /// Idle adapter.
    #[must_use]
    pub fn new(options: MouseOptions) -> Self {
        Self {
            options,
            look_button_down: false,
            pan_button_down: false,
            drag_count: 0,
            last_point: Vec2::ZERO,
            alt_held: false,
        }
    }

    /// Whether a drag (either button) is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.look_button_down || self.pan_button_down
    }

    /// Process one event. Touch events are ignored.
    pub fn handle_event(&mut self, event: InputEvent) -> Vec<OrbitCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.handle_cursor_moved(Vec2::new(x, y))
            }
            InputEvent::MouseButton { button, pressed } => {
                if pressed {
                    self.handle_button_down(button)
                } else {
                    self.handle_button_up(button)
                }
            }
            InputEvent::Scroll { delta } => vec![
                OrbitCommand::UserActivity,
                OrbitCommand::Zoom {
                    amount: delta * self.options.distance_sensitivity * 0.1,
                },
            ],
            InputEvent::ModifiersChanged { alt } => {
                self.alt_held = alt;
                Vec::new()
            }
            InputEvent::CursorLeft => {
                self.look_button_down = false;
                self.pan_button_down = false;
                Vec::new()
            }
            InputEvent::Touch { .. } => Vec::new(),
        }
    }

    fn handle_cursor_moved(&mut self, point: Vec2) -> Vec<OrbitCommand> {
        let mut commands = vec![OrbitCommand::UserActivity];
        self.drag_count = self.drag_count.saturating_add(1);

        if self.look_button_down {
            let delta = (point - self.last_point) * self.options.orbit_sensitivity;
            commands.push(OrbitCommand::Orbit {
                yaw_delta: -delta.x,
                pitch_delta: -delta.y,
            });
        } else if self.pan_button_down {
            commands.push(OrbitCommand::Pan {
                from: point,
                to: self.last_point,
            });
        }

        self.last_point = point;
        commands
    }

    fn handle_button_down(&mut self, button: MouseButton) -> Vec<OrbitCommand> {
        match button {
            MouseButton::Left => self.look_button_down = true,
            MouseButton::Middle | MouseButton::Right => {
                self.pan_button_down = true;
            }
            MouseButton::Other => return Vec::new(),
        }
        self.drag_count = 0;
        vec![
            OrbitCommand::UserActivity,
            OrbitCommand::Preselect {
                screen: self.last_point,
            },
        ]
    }

    fn handle_button_up(&mut self, button: MouseButton) -> Vec<OrbitCommand> {
        let is_click = self.drag_count < CLICK_DRAG_LIMIT;
        let screen = self.last_point;
        match button {
            MouseButton::Left if self.look_button_down => {
                self.look_button_down = false;
                if is_click {
                    return vec![OrbitCommand::Select {
                        screen,
                        focus: self.alt_held,
                    }];
                }
            }
            MouseButton::Middle | MouseButton::Right if self.pan_button_down => {
                self.pan_button_down = false;
                if is_click {
                    return vec![OrbitCommand::Activate { screen }];
                }
            }
            _ => {}
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::TouchPhase;

    fn mouse() -> MouseInput {
        MouseInput::new(MouseOptions::default())
    }

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::CursorMoved { x, y }
    }

    fn button(button: MouseButton, pressed: bool) -> InputEvent {
        InputEvent::MouseButton { button, pressed }
    }

    /// Press, move `moves` times, release; returns the release commands.
    fn click_with_moves(m: &mut MouseInput, b: MouseButton, moves: u32) -> Vec<OrbitCommand> {
        let _ = m.handle_event(moved(100.0, 100.0));
        let _ = m.handle_event(button(b, true));
        for i in 0..moves {
            let _ = m.handle_event(moved(100.0 + i as f32, 100.0));
        }
        m.handle_event(button(b, false))
    }

    #[test]
    fn fewer_than_four_moves_is_a_click() {
        let mut m = mouse();
        let cmds = click_with_moves(&mut m, MouseButton::Left, 3);
        assert!(matches!(cmds.as_slice(), [OrbitCommand::Select { focus: false, .. }]));
    }

    #[test]
    fn four_moves_is_a_drag() {
        let mut m = mouse();
        assert!(click_with_moves(&mut m, MouseButton::Left, 4).is_empty());
        assert!(click_with_moves(&mut m, MouseButton::Right, 4).is_empty());
    }

    #[test]
    fn secondary_click_activates() {
        let mut m = mouse();
        for b in [MouseButton::Right, MouseButton::Middle] {
            let cmds = click_with_moves(&mut m, b, 0);
            assert_eq!(
                cmds,
                vec![OrbitCommand::Activate {
                    screen: Vec2::new(100.0, 100.0)
                }]
            );
        }
    }

    #[test]
    fn alt_click_requests_focus() {
        let mut m = mouse();
        let _ = m.handle_event(InputEvent::ModifiersChanged { alt: true });
        let cmds = click_with_moves(&mut m, MouseButton::Left, 0);
        assert!(matches!(cmds.as_slice(), [OrbitCommand::Select { focus: true, .. }]));
    }

    #[test]
    fn press_preselects_under_cursor() {
        let mut m = mouse();
        let _ = m.handle_event(moved(12.0, 34.0));
        let cmds = m.handle_event(button(MouseButton::Left, true));
        assert_eq!(
            cmds,
            vec![
                OrbitCommand::UserActivity,
                OrbitCommand::Preselect {
                    screen: Vec2::new(12.0, 34.0)
                }
            ]
        );
    }

    #[test]
    fn left_drag_orbits_against_motion() {
        let mut m = mouse();
        let _ = m.handle_event(moved(0.0, 0.0));
        let _ = m.handle_event(button(MouseButton::Left, true));
        let cmds = m.handle_event(moved(10.0, -20.0));
        assert!(matches!(
            cmds[1],
            OrbitCommand::Orbit { yaw_delta, pitch_delta }
                if (yaw_delta + 3.0).abs() < 1e-5 && (pitch_delta - 6.0).abs() < 1e-5
        ));
    }

    #[test]
    fn right_drag_pans_from_current_to_last() {
        let mut m = mouse();
        let _ = m.handle_event(moved(5.0, 5.0));
        let _ = m.handle_event(button(MouseButton::Right, true));
        let cmds = m.handle_event(moved(8.0, 9.0));
        assert_eq!(
            cmds[1],
            OrbitCommand::Pan {
                from: Vec2::new(8.0, 9.0),
                to: Vec2::new(5.0, 5.0)
            }
        );
    }

    #[test]
    fn hover_only_reports_activity() {
        let mut m = mouse();
        assert_eq!(m.handle_event(moved(1.0, 1.0)), vec![OrbitCommand::UserActivity]);
    }

    #[test]
    fn wheel_zooms_proportionally() {
        let mut m = mouse();
        let cmds = m.handle_event(InputEvent::Scroll { delta: 2.0 });
        assert!(matches!(
            cmds[1],
            OrbitCommand::Zoom { amount } if (amount - 0.05).abs() < 1e-6
        ));
    }

    #[test]
    fn other_buttons_and_touches_are_ignored() {
        let mut m = mouse();
        assert!(m.handle_event(button(MouseButton::Other, true)).is_empty());
        assert!(m.handle_event(button(MouseButton::Other, false)).is_empty());
        assert!(m.handle_event(button(MouseButton::Left, false)).is_empty());
        let touch = InputEvent::Touch {
            id: 0,
            phase: TouchPhase::Started,
            x: 0.0,
            y: 0.0,
        };
        assert!(m.handle_event(touch).is_empty());
    }

    #[test]
    fn leaving_the_window_ends_drags() {
        let mut m = mouse();
        let _ = m.handle_event(button(MouseButton::Left, true));
        assert!(m.is_dragging());
        let _ = m.handle_event(InputEvent::CursorLeft);
        assert!(!m.is_dragging());
        assert!(m.handle_event(button(MouseButton::Left, false)).is_empty());
    }
}
