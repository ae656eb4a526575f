use glam::Vec2;
use web_time::Instant;

use super::event::{InputEvent, TouchPhase};
use super::mouse::CLICK_DRAG_LIMIT;
use crate::camera::OrbitCommand;
use crate::options::TouchOptions;

/// Touch gesture adapter.
///
/// One finger orbits; two fingers pinch to zoom and drag to pan. A short
/// single-finger tap selects the preselected entity, and a second tap on the
/// same entity within the double-tap window activates it.
#[derive(Debug, Clone)]
pub struct TouchInput {
    options: TouchOptions,
    /// Active contacts in the order they went down.
    touches: Vec<(u64, Vec2)>,
    drag_count: u32,
    /// The current gesture has had two fingers down at some point.
    multi_finger: bool,
    last_touch_point: Vec2,
    last_pinch_distance: f32,
    last_pinch_midpoint: Vec2,
    last_tap: Option<Instant>,
}

impl TouchInput {
    /// Idle adapter.
    #[must_use]
    pub fn new(options: TouchOptions) -> Self {
        if !options.enabled {
            log::debug!("touch input disabled; touch events will be ignored");
        }
        Self {
            options,
            touches: Vec::new(),
            drag_count: 0,
            multi_finger: false,
            last_touch_point: Vec2::ZERO,
            last_pinch_distance: 0.0,
            last_pinch_midpoint: Vec2::ZERO,
            last_tap: None,
        }
    }

    /// Number of fingers currently down.
    #[must_use]
    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }

    /// Process one event. Mouse events are ignored.
    pub fn handle_event(&mut self, event: InputEvent) -> Vec<OrbitCommand> {
        self.handle_event_at(event, Instant::now())
    }

    /// Process one event that happened at `now`.
    pub fn handle_event_at(
        &mut self,
        event: InputEvent,
        now: Instant,
    ) -> Vec<OrbitCommand> {
        if !self.options.enabled {
            return Vec::new();
        }
        let InputEvent::Touch { id, phase, x, y } = event else {
            return Vec::new();
        };
        let point = Vec2::new(x, y);

        match phase {
            TouchPhase::Started => {
                match self.touches.iter_mut().find(|(t, _)| *t == id) {
                    Some(touch) => touch.1 = point,
                    None => self.touches.push((id, point)),
                }
                self.handle_count_change(now)
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                let before = self.touches.len();
                self.touches.retain(|(t, _)| *t != id);
                if self.touches.len() == before {
                    return Vec::new();
                }
                self.handle_count_change(now)
            }
            TouchPhase::Moved => {
                let Some(touch) = self.touches.iter_mut().find(|(t, _)| *t == id)
                else {
                    return Vec::new();
                };
                touch.1 = point;
                self.handle_move()
            }
        }
    }

    fn handle_count_change(&mut self, now: Instant) -> Vec<OrbitCommand> {
        match self.touches.as_slice() {
            [] => self.finish_gesture(now),
            [(_, point)] => {
                let point = *point;
                self.drag_count = self.drag_count.saturating_add(1);
                self.last_touch_point = point;
                if self.drag_count == 1 {
                    vec![
                        OrbitCommand::UserActivity,
                        OrbitCommand::Preselect { screen: point },
                    ]
                } else {
                    Vec::new()
                }
            }
            [(_, a), (_, b)] => {
                let (a, b) = (*a, *b);
                self.drag_count = self.drag_count.saturating_add(1);
                self.multi_finger = true;
                self.last_pinch_distance = a.distance(b);
                self.last_pinch_midpoint = (a + b) * 0.5;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn finish_gesture(&mut self, now: Instant) -> Vec<OrbitCommand> {
        let mut commands = Vec::new();
        let is_tap = !self.multi_finger
            && self.drag_count > 0
            && self.drag_count < CLICK_DRAG_LIMIT;

        if is_tap {
            let window = self.options.double_tap_speed;
            let double = self.last_tap.is_some_and(|t| {
                now.saturating_duration_since(t).as_secs_f32() < window
            });
            commands.push(OrbitCommand::Tap { double });
            self.last_tap = Some(now);
        } else {
            self.last_tap = None;
        }

        commands.push(OrbitCommand::ClearPreselection);
        self.drag_count = 0;
        self.multi_finger = false;
        commands
    }

    fn handle_move(&mut self) -> Vec<OrbitCommand> {
        let mut commands = vec![OrbitCommand::UserActivity];
        self.drag_count = self.drag_count.saturating_add(1);

        match self.touches.as_slice() {
            [(_, point)] => {
                let point = *point;
                let delta =
                    (point - self.last_touch_point) * self.options.orbit_sensitivity;
                commands.push(OrbitCommand::Orbit {
                    yaw_delta: -delta.x,
                    pitch_delta: -delta.y,
                });
                self.last_touch_point = point;
            }
            [(_, a), (_, b)] => {
                let (a, b) = (*a, *b);
                let distance = a.distance(b);
                let pinch = distance - self.last_pinch_distance;
                self.last_pinch_distance = distance;
                commands.push(OrbitCommand::Zoom {
                    amount: pinch * self.options.distance_sensitivity * 0.01,
                });

                let midpoint = (a + b) * 0.5;
                commands.push(OrbitCommand::Pan {
                    from: midpoint,
                    to: self.last_pinch_midpoint,
                });
                self.last_pinch_midpoint = midpoint;
            }
            _ => {}
        }
        commands
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn touch(id: u64, phase: TouchPhase, x: f32, y: f32) -> InputEvent {
        InputEvent::Touch { id, phase, x, y }
    }

    fn tap(t: &mut TouchInput, at: Instant) -> Vec<OrbitCommand> {
        let _ = t.handle_event_at(touch(1, TouchPhase::Started, 50.0, 60.0), at);
        t.handle_event_at(touch(1, TouchPhase::Ended, 50.0, 60.0), at)
    }

    #[test]
    fn first_contact_preselects() {
        let mut t = TouchInput::new(TouchOptions::default());
        let cmds = t.handle_event(touch(1, TouchPhase::Started, 50.0, 60.0));
        assert_eq!(
            cmds,
            vec![
                OrbitCommand::UserActivity,
                OrbitCommand::Preselect {
                    screen: Vec2::new(50.0, 60.0)
                }
            ]
        );
        assert_eq!(t.touch_count(), 1);
    }

    #[test]
    fn quick_taps_become_a_double_tap() {
        let mut t = TouchInput::new(TouchOptions::default());
        let start = Instant::now();
        let first = tap(&mut t, start);
        assert_eq!(
            first,
            vec![
                OrbitCommand::Tap { double: false },
                OrbitCommand::ClearPreselection
            ]
        );
        let second = tap(&mut t, start + Duration::from_millis(200));
        assert_eq!(second[0], OrbitCommand::Tap { double: true });
    }

    #[test]
    fn slow_taps_stay_single() {
        let mut t = TouchInput::new(TouchOptions::default());
        let start = Instant::now();
        let _ = tap(&mut t, start);
        let second = tap(&mut t, start + Duration::from_millis(600));
        assert_eq!(second[0], OrbitCommand::Tap { double: false });
    }

    #[test]
    fn drag_is_not_a_tap() {
        let mut t = TouchInput::new(TouchOptions::default());
        let _ = t.handle_event(touch(1, TouchPhase::Started, 0.0, 0.0));
        for i in 1..=3 {
            let cmds = t.handle_event(touch(1, TouchPhase::Moved, i as f32 * 10.0, 0.0));
            assert!(matches!(cmds[1], OrbitCommand::Orbit { .. }));
        }
        let cmds = t.handle_event(touch(1, TouchPhase::Ended, 30.0, 0.0));
        assert_eq!(cmds, vec![OrbitCommand::ClearPreselection]);
    }

    #[test]
    fn one_finger_drag_orbits() {
        let mut t = TouchInput::new(TouchOptions::default());
        let _ = t.handle_event(touch(1, TouchPhase::Started, 0.0, 0.0));
        let cmds = t.handle_event(touch(1, TouchPhase::Moved, 10.0, 5.0));
        assert!(matches!(
            cmds[1],
            OrbitCommand::Orbit { yaw_delta, pitch_delta }
                if (yaw_delta + 4.0).abs() < 1e-5 && (pitch_delta + 2.0).abs() < 1e-5
        ));
    }

    #[test]
    fn pinch_out_zooms_in_by_distance_fraction() {
        let mut t = TouchInput::new(TouchOptions::default());
        let _ = t.handle_event(touch(1, TouchPhase::Started, 0.0, 0.0));
        let _ = t.handle_event(touch(2, TouchPhase::Started, 100.0, 0.0));
        let cmds = t.handle_event(touch(2, TouchPhase::Moved, 150.0, 0.0));

        // 50 px wider with sensitivity 0.2: the rig removes 0.1 of the
        // distance, i.e. 50 * 0.2 * 0.1 * (distance * 0.1).
        assert!(matches!(
            cmds[1],
            OrbitCommand::Zoom { amount } if (amount - 0.1).abs() < 1e-6
        ));
        assert_eq!(
            cmds[2],
            OrbitCommand::Pan {
                from: Vec2::new(75.0, 0.0),
                to: Vec2::new(50.0, 0.0)
            }
        );
    }

    #[test]
    fn two_finger_gesture_never_taps() {
        let mut t = TouchInput::new(TouchOptions::default());
        let _ = t.handle_event(touch(1, TouchPhase::Started, 0.0, 0.0));
        let _ = t.handle_event(touch(2, TouchPhase::Started, 10.0, 0.0));
        let lifted = t.handle_event(touch(2, TouchPhase::Ended, 10.0, 0.0));
        assert!(lifted.is_empty());
        let cmds = t.handle_event(touch(1, TouchPhase::Cancelled, 0.0, 0.0));
        assert_eq!(cmds, vec![OrbitCommand::ClearPreselection]);
        assert_eq!(t.touch_count(), 0);
    }

    #[test]
    fn lifting_one_of_two_fingers_does_not_jump() {
        let mut t = TouchInput::new(TouchOptions::default());
        let _ = t.handle_event(touch(1, TouchPhase::Started, 0.0, 0.0));
        let _ = t.handle_event(touch(2, TouchPhase::Started, 100.0, 100.0));
        let _ = t.handle_event(touch(1, TouchPhase::Ended, 0.0, 0.0));
        let cmds = t.handle_event(touch(2, TouchPhase::Moved, 100.0, 100.0));
        assert!(matches!(
            cmds[1],
            OrbitCommand::Orbit { yaw_delta, pitch_delta }
                if yaw_delta == 0.0 && pitch_delta == 0.0
        ));
    }

    #[test]
    fn unknown_fingers_and_mouse_events_are_ignored() {
        let mut t = TouchInput::new(TouchOptions::default());
        assert!(t.handle_event(touch(9, TouchPhase::Moved, 1.0, 1.0)).is_empty());
        assert!(t.handle_event(touch(9, TouchPhase::Ended, 1.0, 1.0)).is_empty());
        assert!(t
            .handle_event(InputEvent::CursorMoved { x: 1.0, y: 1.0 })
            .is_empty());
    }

    #[test]
    fn disabled_touch_ignores_everything() {
        let mut t = TouchInput::new(TouchOptions {
            enabled: false,
            ..TouchOptions::default()
        });
        assert!(t.handle_event(touch(1, TouchPhase::Started, 0.0, 0.0)).is_empty());
        assert_eq!(t.touch_count(), 0);
    }
}
