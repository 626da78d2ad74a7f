//! Testing utilities for Eventide.
//!
//! Handlers that make it easy to observe what a bus delivered.
//!
//! # Features
//!
//! - [`RecordingHandler`]: records every event it receives
//! - [`CountingHandler`]: counts invocations
//! - [`FlagHandler`]: sets the `handled` flag
//! - [`FailingHandler`]: always returns an error
//!
//! All of them share their state between clones, so keep one clone for
//! assertions and hand the other to the bus.

use eventide_core::{BoxError, Event, EventKind, Handler};
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that records every event it receives.
///
/// Events are cloned as they look when the handler is invoked, so the
/// `handled` flag reflects what earlier subscribers did.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingHandler::new();
/// bus.subscribe(SubscriberId(1), EventKind::AppTick, recorder.clone());
///
/// bus.trigger(AppTick);
/// bus.process_events();
///
/// assert_eq!(recorder.count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingHandler {
    events: Rc<RefCell<Vec<Event>>>,
    result: bool,
}

impl RecordingHandler {
    /// Create a recording handler that reports events as not handled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recording handler that returns `result` from every call.
    pub fn with_result(result: bool) -> Self {
        Self {
            events: Rc::default(),
            result,
        }
    }

    /// Get a clone of the recorded events.
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    /// Kinds of the recorded events, in delivery order.
    pub fn kinds(&self) -> Vec<EventKind> {
        self.events.borrow().iter().map(Event::kind).collect()
    }

    /// Get the number of recorded events.
    pub fn count(&self) -> usize {
        self.events.borrow().len()
    }

    /// Clear all recorded events.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl Handler for RecordingHandler {
    fn handle(&mut self, event: &mut Event) -> Result<bool, BoxError> {
        self.events.borrow_mut().push(event.clone());
        Ok(self.result)
    }
}

// ============================================================================
// Counting Handler
// ============================================================================

/// A handler that counts invocations.
#[derive(Debug, Clone, Default)]
pub struct CountingHandler {
    count: Rc<Cell<usize>>,
}

impl CountingHandler {
    /// Create a new counting handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.get()
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.set(0);
    }
}

impl Handler for CountingHandler {
    fn handle(&mut self, _event: &mut Event) -> Result<bool, BoxError> {
        self.count.set(self.count.get() + 1);
        Ok(false)
    }
}

// ============================================================================
// Flag Handler
// ============================================================================

/// A handler that marks every event it receives as handled.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlagHandler;

impl Handler for FlagHandler {
    fn handle(&mut self, event: &mut Event) -> Result<bool, BoxError> {
        event.set_handled(true);
        Ok(true)
    }
}

// ============================================================================
// Failing Handler
// ============================================================================

/// A handler that fails every call with a fixed message.
#[derive(Debug, Clone)]
pub struct FailingHandler {
    message: String,
    calls: Rc<Cell<usize>>,
}

impl FailingHandler {
    /// Create a failing handler.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            calls: Rc::default(),
        }
    }

    /// Get the number of times the handler was called.
    pub fn call_count(&self) -> usize {
        self.calls.get()
    }
}

impl Handler for FailingHandler {
    fn handle(&mut self, _event: &mut Event) -> Result<bool, BoxError> {
        self.calls.set(self.calls.get() + 1);
        Err(self.message.clone().into())
    }
}
