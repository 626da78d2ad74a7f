//! Payload trait binding catalog structs to their kind.

use crate::{catalog::EventData, event::Event, kind::EventKind};
use std::fmt::{Debug, Display};

/// A concrete event payload from the catalog.
///
/// Implemented by `#[derive(Payload)]` on every catalog struct; the catalog is
/// closed, so this trait is not meant to be implemented outside this crate.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an event payload",
    label = "not part of the event catalog",
    note = "Only the structs in `eventide_core::catalog` can be triggered."
)]
pub trait Payload: Into<EventData> + Debug + Display + Sized + 'static {
    /// The kind of every event carrying this payload.
    const KIND: EventKind;

    /// Borrow this payload out of `data` if the variant matches.
    fn from_data(data: &EventData) -> Option<&Self>;

    /// Mutably borrow this payload out of `data` if the variant matches.
    fn from_data_mut(data: &mut EventData) -> Option<&mut Self>;

    /// Wrap this payload in a fresh, unhandled event.
    fn into_event(self) -> Event {
        Event::new(self)
    }
}
