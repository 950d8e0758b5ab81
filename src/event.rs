//! A uniform event type over the platform's window messages.
//!
//! [`translate`] is the only place raw platform events are interpreted;
//! everything downstream works with [`Event`]. Unmapped platform messages
//! translate to `None`.

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::PhysicalKey;

pub use winit::keyboard::KeyCode;

use crate::units::Vec2i;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Unknown,
}

impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Unknown,
        }
    }
}

/// An input or window event, with per-variant payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// The window was asked to close or was destroyed.
    Quit,
    KeyDown { key: KeyCode },
    KeyUp { key: KeyCode },
    MouseMove { position: Vec2i },
    MouseDown { position: Vec2i, button: MouseButton },
    MouseUp { position: Vec2i, button: MouseButton },
    /// The client area changed to the given size in pixels.
    Resize { size: Vec2i },
}

impl Event {
    pub fn is_mouse(&self) -> bool {
        matches!(
            self,
            Self::MouseMove { .. } | Self::MouseDown { .. } | Self::MouseUp { .. }
        )
    }

    pub fn is_key(&self) -> bool {
        matches!(self, Self::KeyDown { .. } | Self::KeyUp { .. })
    }

    /// The cursor position carried by a mouse event, `None` for any other
    /// variant.
    pub fn mouse_position(&self) -> Option<Vec2i> {
        match self {
            Self::MouseMove { position }
            | Self::MouseDown { position, .. }
            | Self::MouseUp { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// The button carried by a mouse button event. Mouse moves and non-mouse
    /// events report [`MouseButton::Unknown`].
    pub fn mouse_button(&self) -> MouseButton {
        match self {
            Self::MouseDown { button, .. } | Self::MouseUp { button, .. } => *button,
            _ => MouseButton::Unknown,
        }
    }

    pub fn key(&self) -> Option<KeyCode> {
        match self {
            Self::KeyDown { key } | Self::KeyUp { key } => Some(*key),
            _ => None,
        }
    }

    pub fn resize_size(&self) -> Option<Vec2i> {
        match self {
            Self::Resize { size } => Some(*size),
            _ => None,
        }
    }

    pub fn matches_button(&self, button: MouseButton) -> bool {
        match self {
            Self::MouseDown { button: b, .. } | Self::MouseUp { button: b, .. } => *b == button,
            _ => false,
        }
    }

    pub fn matches_key(&self, code: KeyCode) -> bool {
        match self {
            Self::KeyDown { key } | Self::KeyUp { key } => *key == code,
            _ => false,
        }
    }
}

/// Translates one platform message into an [`Event`].
///
/// Pure: reads only the message payload. The platform does not attach a
/// position to button messages, so the caller passes the last cursor position
/// it observed.
pub fn translate(event: &WindowEvent, cursor: Vec2i) -> Option<Event> {
    match event {
        WindowEvent::CloseRequested | WindowEvent::Destroyed => Some(Event::Quit),

        WindowEvent::KeyboardInput { event, .. } => key_event(event.physical_key, event.state),

        WindowEvent::CursorMoved { position, .. } => Some(Event::MouseMove {
            position: Vec2i::new(position.x as i32, position.y as i32),
        }),

        WindowEvent::MouseInput { state, button, .. } => {
            let button = MouseButton::from(*button);
            Some(match state {
                ElementState::Pressed => Event::MouseDown {
                    position: cursor,
                    button,
                },
                ElementState::Released => Event::MouseUp {
                    position: cursor,
                    button,
                },
            })
        }

        WindowEvent::Resized(size) => Some(Event::Resize {
            size: Vec2i::new(size.width as i32, size.height as i32),
        }),

        _ => None,
    }
}

fn key_event(key: PhysicalKey, state: ElementState) -> Option<Event> {
    let PhysicalKey::Code(key) = key else {
        return None;
    };
    Some(match state {
        ElementState::Pressed => Event::KeyDown { key },
        ElementState::Released => Event::KeyUp { key },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::{PhysicalPosition, PhysicalSize};
    use winit::event::DeviceId;

    #[test]
    fn mouse_move_translates_with_unknown_button() {
        let event = WindowEvent::CursorMoved {
            device_id: DeviceId::dummy(),
            position: PhysicalPosition::new(120.0, 80.0),
        };
        let translated = translate(&event, Vec2i::ZERO).unwrap();
        assert_eq!(
            translated,
            Event::MouseMove {
                position: Vec2i::new(120, 80)
            }
        );
        assert_eq!(translated.mouse_button(), MouseButton::Unknown);
    }

    #[test]
    fn left_button_down_translates_at_cursor() {
        let event = WindowEvent::MouseInput {
            device_id: DeviceId::dummy(),
            state: ElementState::Pressed,
            button: winit::event::MouseButton::Left,
        };
        let translated = translate(&event, Vec2i::new(10, 10)).unwrap();
        assert_eq!(
            translated,
            Event::MouseDown {
                position: Vec2i::new(10, 10),
                button: MouseButton::Left,
            }
        );
        assert!(translated.matches_button(MouseButton::Left));
        assert!(!translated.matches_button(MouseButton::Right));
    }

    #[test]
    fn close_and_resize_translate() {
        assert_eq!(
            translate(&WindowEvent::CloseRequested, Vec2i::ZERO),
            Some(Event::Quit)
        );
        assert_eq!(
            translate(&WindowEvent::Resized(PhysicalSize::new(640, 480)), Vec2i::ZERO),
            Some(Event::Resize {
                size: Vec2i::new(640, 480)
            })
        );
    }

    #[test]
    fn unmapped_messages_translate_to_none() {
        let event = WindowEvent::Focused(true);
        assert_eq!(translate(&event, Vec2i::ZERO), None);
    }

    #[test]
    fn key_events_carry_the_key_code() {
        let down = key_event(PhysicalKey::Code(KeyCode::Escape), ElementState::Pressed).unwrap();
        assert_eq!(down, Event::KeyDown { key: KeyCode::Escape });
        assert!(down.is_key());
        assert!(down.matches_key(KeyCode::Escape));
        assert!(!down.matches_key(KeyCode::Enter));

        let up = key_event(PhysicalKey::Code(KeyCode::KeyW), ElementState::Released).unwrap();
        assert_eq!(up, Event::KeyUp { key: KeyCode::KeyW });
    }

    #[test]
    fn payload_accessors_are_tag_checked() {
        let resize = Event::Resize {
            size: Vec2i::new(800, 600),
        };
        assert_eq!(resize.mouse_position(), None);
        assert_eq!(resize.mouse_button(), MouseButton::Unknown);
        assert_eq!(resize.key(), None);
        assert_eq!(resize.resize_size(), Some(Vec2i::new(800, 600)));
        assert!(!resize.is_mouse());
        assert!(!resize.is_key());
    }
}
