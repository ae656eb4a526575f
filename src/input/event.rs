/// Platform-agnostic input events.
///
/// These are fed into a [`MouseInput`](super::MouseInput) or
/// [`TouchInput`](super::TouchInput) adapter, which converts them into
/// [`OrbitCommand`](crate::camera::OrbitCommand) values for the rig.
///
/// # Example
///
/// ```ignore
/// for cmd in mouse.handle_event(InputEvent::CursorMoved { x: 100.0, y: 200.0 }) {
///     rig.execute(cmd, &scene);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel, in notches (positive = zoom in).
    Scroll {
        /// Scroll amount (positive = zoom in, negative = zoom out).
        delta: f32,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether the alt key is held.
        alt: bool,
    },
    /// The cursor left the window.
    CursorLeft,
    /// A finger touched, moved on, or left the screen.
    Touch {
        /// Identifier of the finger, stable for the life of the contact.
        id: u64,
        /// Contact phase.
        phase: TouchPhase,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
    /// Any other button; ignored by the adapters.
    Other,
}

/// Phase of a touch contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// Finger went down.
    Started,
    /// Finger moved.
    Moved,
    /// Finger lifted.
    Ended,
    /// The system took the contact away.
    Cancelled,
}

#[cfg(feature = "winit")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Other,
        }
    }
}

#[cfg(feature = "winit")]
impl From<winit::event::TouchPhase> for TouchPhase {
    fn from(phase: winit::event::TouchPhase) -> Self {
        match phase {
            winit::event::TouchPhase::Started => Self::Started,
            winit::event::TouchPhase::Moved => Self::Moved,
            winit::event::TouchPhase::Ended => Self::Ended,
            winit::event::TouchPhase::Cancelled => Self::Cancelled,
        }
    }
}

#[cfg(feature = "winit")]
impl InputEvent {
    /// Translate a winit window event. Events the rig does not consume map
    /// to `None`.
    #[must_use]
    pub fn from_window_event(event: &winit::event::WindowEvent) -> Option<Self> {
        use winit::event::{ElementState, MouseScrollDelta, WindowEvent};

        match event {
            WindowEvent::CursorMoved { position, .. } => Some(Self::CursorMoved {
                x: position.x as f32,
                y: position.y as f32,
            }),
            WindowEvent::MouseInput { state, button, .. } => {
                Some(Self::MouseButton {
                    button: (*button).into(),
                    pressed: *state == ElementState::Pressed,
                })
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                Some(Self::Scroll { delta })
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                Some(Self::ModifiersChanged {
                    alt: modifiers.state().alt_key(),
                })
            }
            WindowEvent::CursorLeft { .. } => Some(Self::CursorLeft),
            WindowEvent::Touch(touch) => Some(Self::Touch {
                id: touch.id,
                phase: touch.phase.into(),
                x: touch.location.x as f32,
                y: touch.location.y as f32,
            }),
            _ => None,
        }
    }
}
