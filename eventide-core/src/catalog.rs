//! The event catalog.
//!
//! One struct per [`EventKind`], each bound to its kind with
//! `#[derive(Payload)]`, and [`EventData`], the closed sum of all of them.

use crate::{kind::EventKind, payload::Payload};
use bitflags::bitflags;
use eventide_macros::Payload;
use std::fmt;

bitflags! {
    /// Modifier keys held while a key or button event happened.
    ///
    /// Bit values follow the common windowing-library layout; unknown bits
    /// are dropped by [`Modifiers::from_raw`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u32 {
        /// Either shift key.
        const SHIFT = 0x01;
        /// Either control key.
        const CONTROL = 0x02;
        /// Either alt key.
        const ALT = 0x04;
        /// Either super/logo key.
        const SUPER = 0x08;
        /// Caps lock is active.
        const CAPS_LOCK = 0x10;
        /// Num lock is active.
        const NUM_LOCK = 0x20;
    }
}

impl Modifiers {
    /// Build from the raw bitmask reported by a backend.
    pub const fn from_raw(raw: i32) -> Self {
        Self::from_bits_truncate(raw as u32)
    }
}

/// Backend key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyCode(pub i32);

impl KeyCode {
    #[allow(missing_docs)]
    pub const SPACE: KeyCode = KeyCode(32);
    #[allow(missing_docs)]
    pub const A: KeyCode = KeyCode(65);
    #[allow(missing_docs)]
    pub const ESCAPE: KeyCode = KeyCode(256);
    #[allow(missing_docs)]
    pub const ENTER: KeyCode = KeyCode(257);
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Backend mouse button index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MouseButton(pub i32);

impl MouseButton {
    #[allow(missing_docs)]
    pub const LEFT: MouseButton = MouseButton(0);
    #[allow(missing_docs)]
    pub const RIGHT: MouseButton = MouseButton(1);
    #[allow(missing_docs)]
    pub const MIDDLE: MouseButton = MouseButton(2);
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Window events
// ============================================================================

/// Payload of [`EventKind::Empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Payload)]
#[payload(kind = Empty)]
pub struct Empty;

/// The window now has the given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Payload)]
#[payload(kind = WindowResize)]
pub struct WindowResized {
    /// New width.
    pub width: i32,
    /// New height.
    pub height: i32,
}

/// The user asked to close the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Payload)]
#[payload(kind = WindowClose)]
pub struct WindowClosed;

/// The window now sits at the given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Payload)]
#[payload(kind = WindowMoved)]
pub struct WindowMoved {
    /// New x position.
    pub x: i32,
    /// New y position.
    pub y: i32,
}

// ============================================================================
// Application lifecycle
// ============================================================================

/// Render the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Payload)]
#[payload(kind = AppRender)]
pub struct AppRender;

/// Advance application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Payload)]
#[payload(kind = AppUpdate)]
pub struct AppUpdate;

/// A host loop iteration started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Payload)]
#[payload(kind = AppTick)]
pub struct AppTick;

// ============================================================================
// Keyboard
// ============================================================================

/// A key went down, or is auto-repeating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Payload)]
#[payload(kind = KeyPressed)]
pub struct KeyPressed {
    /// The key.
    pub key: KeyCode,
    /// `true` when generated by key repeat.
    pub repeat: bool,
    /// Modifiers held at the time.
    pub modifiers: Modifiers,
}

impl KeyPressed {
    /// A fresh (non-repeat) press without modifiers.
    pub const fn new(key: KeyCode) -> Self {
        Self {
            key,
            repeat: false,
            modifiers: Modifiers::empty(),
        }
    }
}

/// A key went up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Payload)]
#[payload(kind = KeyReleased)]
pub struct KeyReleased {
    /// The key.
    pub key: KeyCode,
}

/// Text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Payload)]
#[payload(kind = KeyChar)]
pub struct KeyChar {
    /// Unicode code point as reported by the backend.
    pub code_point: u32,
}

impl KeyChar {
    /// The typed character, if the code point is a valid scalar value.
    pub fn as_char(&self) -> Option<char> {
        char::from_u32(self.code_point)
    }
}

// ============================================================================
// Mouse
// ============================================================================

/// A mouse button went down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Payload)]
#[payload(kind = MouseButtonPressed)]
pub struct MouseButtonPressed {
    /// The button.
    pub button: MouseButton,
    /// Modifiers held at the time.
    pub modifiers: Modifiers,
}

/// A mouse button went up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Payload)]
#[payload(kind = MouseButtonReleased)]
pub struct MouseButtonReleased {
    /// The button.
    pub button: MouseButton,
}

/// The cursor moved, in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Payload)]
#[payload(kind = MouseMoved)]
pub struct MouseMoved {
    #[allow(missing_docs)]
    pub x: f64,
    #[allow(missing_docs)]
    pub y: f64,
}

/// The scroll wheel or touchpad scrolled.
#[derive(Debug, Clone, Copy, PartialEq, Payload)]
#[payload(kind = MouseScrolled)]
pub struct MouseScrolled {
    /// Horizontal offset.
    pub x_offset: f64,
    /// Vertical offset.
    pub y_offset: f64,
}

// ============================================================================
// Debug strings
// ============================================================================

macro_rules! display_name_only {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(<$ty as Payload>::KIND.name())
                }
            }
        )+
    };
}

display_name_only!(Empty, WindowClosed, AppRender, AppUpdate, AppTick);

impl fmt::Display for WindowResized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} NEW DIMENSIONS: [{}, {}]",
            Self::KIND,
            self.width,
            self.height
        )
    }
}

impl fmt::Display for WindowMoved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} NEW POSITION: [{}, {}]", Self::KIND, self.x, self.y)
    }
}

impl fmt::Display for KeyPressed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} KEY: {} REPEAT: {} MODS: {:#x}",
            Self::KIND,
            self.key,
            self.repeat,
            self.modifiers.bits()
        )
    }
}

impl fmt::Display for KeyReleased {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} KEY: {}", Self::KIND, self.key)
    }
}

impl fmt::Display for KeyChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_char() {
            Some(c) => write!(f, "{} CHAR: {:?} ({})", Self::KIND, c, self.code_point),
            None => write!(f, "{} CHAR: <invalid> ({})", Self::KIND, self.code_point),
        }
    }
}

impl fmt::Display for MouseButtonPressed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} BUTTON: {} MODS: {:#x}",
            Self::KIND,
            self.button,
            self.modifiers.bits()
        )
    }
}

impl fmt::Display for MouseButtonReleased {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} BUTTON: {}", Self::KIND, self.button)
    }
}

impl fmt::Display for MouseMoved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} POSITION: [{}, {}]", Self::KIND, self.x, self.y)
    }
}

impl fmt::Display for MouseScrolled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} OFFSET: [{}, {}]",
            Self::KIND,
            self.x_offset,
            self.y_offset
        )
    }
}

// ============================================================================
// EventData
// ============================================================================

/// The payload of an event: one variant per catalog struct.
///
/// Variants share their struct's name.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum EventData {
    Empty(Empty),
    WindowResized(WindowResized),
    WindowClosed(WindowClosed),
    WindowMoved(WindowMoved),
    AppRender(AppRender),
    AppUpdate(AppUpdate),
    AppTick(AppTick),
    KeyPressed(KeyPressed),
    KeyReleased(KeyReleased),
    KeyChar(KeyChar),
    MouseButtonPressed(MouseButtonPressed),
    MouseButtonReleased(MouseButtonReleased),
    MouseMoved(MouseMoved),
    MouseScrolled(MouseScrolled),
}

impl EventData {
    /// The kind matching this variant.
    pub const fn kind(&self) -> EventKind {
        match self {
            EventData::Empty(_) => Empty::KIND,
            EventData::WindowResized(_) => WindowResized::KIND,
            EventData::WindowClosed(_) => WindowClosed::KIND,
            EventData::WindowMoved(_) => WindowMoved::KIND,
            EventData::AppRender(_) => AppRender::KIND,
            EventData::AppUpdate(_) => AppUpdate::KIND,
            EventData::AppTick(_) => AppTick::KIND,
            EventData::KeyPressed(_) => KeyPressed::KIND,
            EventData::KeyReleased(_) => KeyReleased::KIND,
            EventData::KeyChar(_) => KeyChar::KIND,
            EventData::MouseButtonPressed(_) => MouseButtonPressed::KIND,
            EventData::MouseButtonReleased(_) => MouseButtonReleased::KIND,
            EventData::MouseMoved(_) => MouseMoved::KIND,
            EventData::MouseScrolled(_) => MouseScrolled::KIND,
        }
    }
}

impl fmt::Display for EventData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventData::Empty(p) => fmt::Display::fmt(p, f),
            EventData::WindowResized(p) => fmt::Display::fmt(p, f),
            EventData::WindowClosed(p) => fmt::Display::fmt(p, f),
            EventData::WindowMoved(p) => fmt::Display::fmt(p, f),
            EventData::AppRender(p) => fmt::Display::fmt(p, f),
            EventData::AppUpdate(p) => fmt::Display::fmt(p, f),
            EventData::AppTick(p) => fmt::Display::fmt(p, f),
            EventData::KeyPressed(p) => fmt::Display::fmt(p, f),
            EventData::KeyReleased(p) => fmt::Display::fmt(p, f),
            EventData::KeyChar(p) => fmt::Display::fmt(p, f),
            EventData::MouseButtonPressed(p) => fmt::Display::fmt(p, f),
            EventData::MouseButtonReleased(p) => fmt::Display::fmt(p, f),
            EventData::MouseMoved(p) => fmt::Display::fmt(p, f),
            EventData::MouseScrolled(p) => fmt::Display::fmt(p, f),
        }
    }
}
