//! The event record delivered to handlers.

use crate::{catalog::EventData, category::Category, kind::EventKind, payload::Payload};
use std::fmt;

/// An event: shared header plus one catalog payload.
///
/// The header is fixed at construction: `kind` always matches the payload
/// variant and `categories` is always `kind.categories()`. Only the `handled`
/// flag and payload fields can change afterwards.
///
/// # Example
///
/// ```rust,ignore
/// let mut event = Event::new(WindowResized { width: 800, height: 600 });
/// assert_eq!(event.kind(), EventKind::WindowResize);
/// assert!(event.is_in_category(Category::WINDOW));
/// assert!(!event.is_handled());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    kind: EventKind,
    categories: Category,
    handled: bool,
    data: EventData,
}

impl Event {
    /// Build an unhandled event around a payload.
    pub fn new(data: impl Into<EventData>) -> Self {
        let data = data.into();
        let kind = data.kind();
        Self {
            kind,
            categories: kind.categories(),
            handled: false,
            data,
        }
    }

    /// The kind of this event.
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// The categories of this event.
    pub fn categories(&self) -> Category {
        self.categories
    }

    /// Returns `true` if this event belongs to any of the given categories.
    pub fn is_in_category(&self, category: Category) -> bool {
        self.categories.intersects(category)
    }

    /// Whether a handler marked this event as handled.
    pub fn is_handled(&self) -> bool {
        self.handled
    }

    /// Mark this event as handled (or not).
    pub fn set_handled(&mut self, handled: bool) {
        self.handled = handled;
    }

    /// The payload.
    pub fn data(&self) -> &EventData {
        &self.data
    }

    /// Consume the event and return its payload.
    pub fn into_data(self) -> EventData {
        self.data
    }

    /// Borrow the payload as `P` if this event carries one.
    pub fn payload<P: Payload>(&self) -> Option<&P> {
        P::from_data(&self.data)
    }

    /// Mutably borrow the payload as `P` if this event carries one.
    ///
    /// Only fields can be changed this way; the variant, and with it the
    /// kind, stays fixed.
    pub fn payload_mut<P: Payload>(&mut self) -> Option<&mut P> {
        P::from_data_mut(&mut self.data)
    }

    /// Name of this event's kind.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

impl<P: Payload> From<P> for Event {
    fn from(payload: P) -> Self {
        Event::new(payload)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.data, f)
    }
}
