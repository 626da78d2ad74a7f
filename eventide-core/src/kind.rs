//! Event kinds.

use crate::{category::Category, error::ParseKindError};
use std::{fmt, str::FromStr};

/// The kind of an event.
///
/// Every event carries exactly one kind, fixed when the event is built and
/// always matching its payload variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    /// Placeholder kind with no payload.
    Empty,

    // Window events.
    /// The window was resized.
    WindowResize,
    /// The window was asked to close.
    WindowClose,
    /// The window was moved.
    WindowMoved,

    // Application lifecycle.
    /// A frame should be rendered.
    AppRender,
    /// Application state should be updated.
    AppUpdate,
    /// A host loop iteration started.
    AppTick,

    // Keyboard.
    /// A key was pressed or auto-repeated.
    KeyPressed,
    /// A key was released.
    KeyReleased,
    /// A character was typed.
    KeyChar,

    // Mouse buttons.
    /// A mouse button was pressed.
    MouseButtonPressed,
    /// A mouse button was released.
    MouseButtonReleased,

    // Mouse motion.
    /// The cursor moved.
    MouseMoved,
    /// The scroll wheel moved.
    MouseScrolled,
}

impl EventKind {
    /// Number of event kinds.
    pub const COUNT: usize = 14;

    /// Every event kind, in declaration order.
    pub const ALL: [EventKind; Self::COUNT] = [
        EventKind::Empty,
        EventKind::WindowResize,
        EventKind::WindowClose,
        EventKind::WindowMoved,
        EventKind::AppRender,
        EventKind::AppUpdate,
        EventKind::AppTick,
        EventKind::KeyPressed,
        EventKind::KeyReleased,
        EventKind::KeyChar,
        EventKind::MouseButtonPressed,
        EventKind::MouseButtonReleased,
        EventKind::MouseMoved,
        EventKind::MouseScrolled,
    ];

    /// Categories every event of this kind belongs to.
    ///
    /// This is a fixed table; the same kind always yields the same mask.
    pub const fn categories(self) -> Category {
        match self {
            EventKind::Empty => Category::EMPTY,

            EventKind::WindowResize | EventKind::WindowClose | EventKind::WindowMoved => {
                Category::WINDOW
            }

            EventKind::AppRender | EventKind::AppUpdate | EventKind::AppTick => Category::APP,

            EventKind::KeyPressed | EventKind::KeyReleased | EventKind::KeyChar => {
                Category::KEY.union(Category::INPUT)
            }

            EventKind::MouseButtonPressed | EventKind::MouseButtonReleased => Category::INPUT
                .union(Category::MOUSE)
                .union(Category::MOUSE_BUTTON),

            // Motion events sit in the mouse-button group, not the mouse group.
            EventKind::MouseMoved | EventKind::MouseScrolled => {
                Category::INPUT.union(Category::MOUSE_BUTTON)
            }
        }
    }

    /// Returns `true` if this kind belongs to any of the given categories.
    pub const fn is_in_category(self, category: Category) -> bool {
        self.categories().intersects(category)
    }

    /// Iterate over every kind whose categories intersect `category`.
    pub fn in_category(category: Category) -> impl Iterator<Item = EventKind> {
        Self::ALL
            .into_iter()
            .filter(move |kind| kind.is_in_category(category))
    }

    /// Canonical upper-case name of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            EventKind::Empty => "EMPTY_EVENT",
            EventKind::WindowResize => "WINDOW_RESIZE_EVENT",
            EventKind::WindowClose => "WINDOW_CLOSE_EVENT",
            EventKind::WindowMoved => "WINDOW_MOVED_EVENT",
            EventKind::AppRender => "APP_RENDER_EVENT",
            EventKind::AppUpdate => "APP_UPDATE_EVENT",
            EventKind::AppTick => "APP_TICK_EVENT",
            EventKind::KeyPressed => "KEY_PRESSED_EVENT",
            EventKind::KeyReleased => "KEY_RELEASED_EVENT",
            EventKind::KeyChar => "KEY_CHAR_EVENT",
            EventKind::MouseButtonPressed => "MOUSE_BUTTON_PRESSED_EVENT",
            EventKind::MouseButtonReleased => "MOUSE_BUTTON_RELEASED_EVENT",
            EventKind::MouseMoved => "MOUSE_MOVED_EVENT",
            EventKind::MouseScrolled => "MOUSE_SCROLLED_EVENT",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EventKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ParseKindError(s.to_owned()))
    }
}
