//! Event queue and the publisher handle producers use to fill it.

use crate::registry::Interest;
use eventide_core::{Event, Payload, SubscriberId};
use std::{cell::RefCell, rc::Rc};

/// A subscription removal requested through a [`Publisher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Removal {
    Interest(SubscriberId, Interest),
    All(SubscriberId),
}

/// FIFO buffer of events waiting for the next dispatch pass.
///
/// Storage is allocated on the first push, with the configured capacity, and
/// is kept across passes through [`swap_batch`](Self::swap_batch).
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<Event>,
    capacity: usize,
    removals: Vec<Removal>,
}

impl EventQueue {
    /// Create an empty queue that reserves `capacity` slots on first use.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Vec::new(),
            capacity,
            removals: Vec::new(),
        }
    }

    /// Append an event at the tail.
    ///
    /// The event enters the queue unhandled, whatever its flag said before.
    pub fn push(&mut self, mut event: Event) {
        if self.events.capacity() == 0 {
            self.events.reserve(self.capacity);
        }
        event.set_handled(false);
        self.events.push(event);
    }

    /// Exchange the queued events with `batch`.
    ///
    /// `batch` is cleared first and its storage becomes the queue's, so two
    /// buffers alternate between passes. Afterwards `batch` holds every
    /// queued event in FIFO order and the queue is empty.
    pub fn swap_batch(&mut self, batch: &mut Vec<Event>) {
        batch.clear();
        std::mem::swap(&mut self.events, batch);
    }

    /// Number of queued events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Queued events in FIFO order.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Drop every queued event and pending removal, and release the storage.
    pub fn clear(&mut self) {
        self.events = Vec::new();
        self.removals = Vec::new();
    }

    pub(crate) fn request_removal(&mut self, removal: Removal) {
        self.removals.push(removal);
    }

    pub(crate) fn take_removals(&mut self) -> Vec<Removal> {
        std::mem::take(&mut self.removals)
    }
}

/// Cloneable handle for putting events on a bus queue.
///
/// Handed to producers (backends, event sources) and safe to move into
/// handlers: events triggered while a dispatch pass is running are picked up
/// by the next pass.
///
/// # Example
///
/// ```rust,ignore
/// let publisher = bus.publisher();
/// bus.subscribe(id, EventKind::KeyPressed, move |_: &mut Event| {
///     publisher.trigger(AppRender);
///     false
/// });
/// ```
#[derive(Debug, Clone)]
pub struct Publisher {
    queue: Rc<RefCell<EventQueue>>,
}

impl Publisher {
    pub(crate) fn new(queue: Rc<RefCell<EventQueue>>) -> Self {
        Self { queue }
    }

    /// Build an event from `payload` and append it to the queue.
    pub fn trigger<P: Payload>(&self, payload: P) {
        self.queue_event(payload.into_event());
    }

    /// Append an already-built event to the queue.
    ///
    /// Its `handled` flag is reset, so handlers of the next pass see it as
    /// fresh.
    pub fn queue_event(&self, event: Event) {
        #[cfg(feature = "tracing")]
        tracing::trace!(kind = %event.kind(), "event queued");

        self.queue.borrow_mut().push(event);
    }

    /// Number of events waiting for the next pass.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Request removal of the subscriptions of `subscriber` selected by a
    /// kind or a category.
    ///
    /// Usable from inside a handler. The removal is applied when the running
    /// dispatch pass ends, or at the start of the next one.
    ///
    /// ```rust,ignore
    /// let publisher = bus.publisher();
    /// bus.subscribe(id, EventKind::WindowResize, move |_: &mut Event| {
    ///     publisher.unsubscribe(id, EventKind::WindowResize);
    ///     true
    /// });
    /// ```
    pub fn unsubscribe(&self, subscriber: SubscriberId, interest: impl Into<Interest>) {
        self.queue
            .borrow_mut()
            .request_removal(Removal::Interest(subscriber, interest.into()));
    }

    /// Request removal of `subscriber` and every subscription it holds.
    ///
    /// Applied like [`unsubscribe`](Self::unsubscribe).
    pub fn unsubscribe_all(&self, subscriber: SubscriberId) {
        self.queue
            .borrow_mut()
            .request_removal(Removal::All(subscriber));
    }
}
