//! Translation of raw windowing-backend notifications into events.
//!
//! A backend reports what the OS told it in its own terms: integer key codes,
//! action codes, modifier bitmasks. [`translate`] turns one such notification
//! into at most one catalog event.

use eventide_core::{
    Event, KeyCode, Modifiers, MouseButton,
    catalog::{
        KeyChar, KeyPressed, KeyReleased, MouseButtonPressed, MouseButtonReleased, MouseMoved,
        MouseScrolled, WindowClosed, WindowMoved, WindowResized,
    },
};
use thiserror::Error;

/// Key and button action codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The key or button went up.
    Release,
    /// The key or button went down.
    Press,
    /// The key is held and auto-repeating.
    Repeat,
}

impl TryFrom<i32> for Action {
    type Error = TranslateError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Action::Release),
            1 => Ok(Action::Press),
            2 => Ok(Action::Repeat),
            other => Err(TranslateError::UnknownAction(other)),
        }
    }
}

/// A notification as reported by a windowing backend.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    /// Window size changed.
    Resized {
        #[allow(missing_docs)]
        width: i32,
        #[allow(missing_docs)]
        height: i32,
    },
    /// Close requested.
    Closed,
    /// Window position changed.
    Moved {
        #[allow(missing_docs)]
        x: i32,
        #[allow(missing_docs)]
        y: i32,
    },
    /// Key action.
    Key {
        /// Backend key code.
        key: i32,
        /// Platform scancode; not forwarded.
        scancode: i32,
        /// Raw action code.
        action: i32,
        /// Raw modifier bitmask.
        mods: i32,
    },
    /// Mouse button action.
    MouseButton {
        /// Backend button index.
        button: i32,
        /// Raw action code.
        action: i32,
        /// Raw modifier bitmask.
        mods: i32,
    },
    /// Cursor position in window coordinates.
    CursorPos {
        #[allow(missing_docs)]
        x: f64,
        #[allow(missing_docs)]
        y: f64,
    },
    /// Scroll offsets.
    Scroll {
        #[allow(missing_docs)]
        x_offset: f64,
        #[allow(missing_docs)]
        y_offset: f64,
    },
    /// Unicode character input.
    Char {
        #[allow(missing_docs)]
        code_point: u32,
    },
    /// Focus gained or lost. Produces no event.
    Focus {
        #[allow(missing_docs)]
        focused: bool,
    },
}

/// A raw notification could not be turned into an event.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslateError {
    /// The action code is not release, press or repeat.
    #[error("unknown action code: {0}")]
    UnknownAction(i32),

    /// Mouse buttons do not auto-repeat.
    #[error("repeat action reported for mouse button {0}")]
    MouseButtonRepeat(i32),
}

/// Translate one raw notification.
///
/// Returns `Ok(None)` for notifications that have no event counterpart.
pub fn translate(input: &RawInput) -> Result<Option<Event>, TranslateError> {
    let event = match *input {
        RawInput::Resized { width, height } => Event::new(WindowResized { width, height }),
        RawInput::Closed => Event::new(WindowClosed),
        RawInput::Moved { x, y } => Event::new(WindowMoved { x, y }),

        RawInput::Key {
            key, action, mods, ..
        } => {
            let key = KeyCode(key);
            let action = Action::try_from(action)?;
            match action {
                Action::Press | Action::Repeat => Event::new(KeyPressed {
                    key,
                    repeat: action == Action::Repeat,
                    modifiers: Modifiers::from_raw(mods),
                }),
                Action::Release => Event::new(KeyReleased { key }),
            }
        }

        RawInput::MouseButton {
            button,
            action,
            mods,
        } => match Action::try_from(action)? {
            Action::Press => Event::new(MouseButtonPressed {
                button: MouseButton(button),
                modifiers: Modifiers::from_raw(mods),
            }),
            Action::Release => Event::new(MouseButtonReleased {
                button: MouseButton(button),
            }),
            Action::Repeat => return Err(TranslateError::MouseButtonRepeat(button)),
        },

        RawInput::CursorPos { x, y } => Event::new(MouseMoved { x, y }),
        RawInput::Scroll { x_offset, y_offset } => Event::new(MouseScrolled { x_offset, y_offset }),
        RawInput::Char { code_point } => Event::new(KeyChar { code_point }),
        RawInput::Focus { .. } => return Ok(None),
    };

    Ok(Some(event))
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventide_core::EventKind;

    fn key(action: i32, mods: i32) -> RawInput {
        RawInput::Key {
            key: 65,
            scancode: 38,
            action,
            mods,
        }
    }

    #[test]
    fn test_key_actions() {
        let pressed = translate(&key(1, 0x1)).unwrap().unwrap();
        assert_eq!(
            pressed.payload::<KeyPressed>(),
            Some(&KeyPressed {
                key: KeyCode::A,
                repeat: false,
                modifiers: Modifiers::SHIFT,
            })
        );

        let repeated = translate(&key(2, 0)).unwrap().unwrap();
        assert!(repeated.payload::<KeyPressed>().unwrap().repeat);

        let released = translate(&key(0, 0)).unwrap().unwrap();
        assert_eq!(released.kind(), EventKind::KeyReleased);
    }

    #[test]
    fn test_unknown_action() {
        assert_eq!(
            translate(&key(7, 0)).unwrap_err(),
            TranslateError::UnknownAction(7)
        );
    }

    #[test]
    fn test_mouse_buttons() {
        let pressed = translate(&RawInput::MouseButton {
            button: 1,
            action: 1,
            mods: 0x2,
        })
        .unwrap()
        .unwrap();
        assert_eq!(
            pressed.payload::<MouseButtonPressed>().unwrap().modifiers,
            Modifiers::CONTROL
        );

        let err = translate(&RawInput::MouseButton {
            button: 1,
            action: 2,
            mods: 0,
        })
        .unwrap_err();
        assert_eq!(err, TranslateError::MouseButtonRepeat(1));
    }

    #[test]
    fn test_window_and_motion() {
        let cases = [
            (
                RawInput::Resized {
                    width: 800,
                    height: 600,
                },
                EventKind::WindowResize,
            ),
            (RawInput::Closed, EventKind::WindowClose),
            (RawInput::Moved { x: 5, y: 6 }, EventKind::WindowMoved),
            (RawInput::CursorPos { x: 1.5, y: 2.5 }, EventKind::MouseMoved),
            (
                RawInput::Scroll {
                    x_offset: 0.0,
                    y_offset: 1.0,
                },
                EventKind::MouseScrolled,
            ),
            (RawInput::Char { code_point: 97 }, EventKind::KeyChar),
        ];

        for (input, kind) in cases {
            assert_eq!(translate(&input).unwrap().unwrap().kind(), kind);
        }
    }

    #[test]
    fn test_focus_produces_nothing() {
        assert!(translate(&RawInput::Focus { focused: true }).unwrap().is_none());
    }
}
