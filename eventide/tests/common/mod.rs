#![allow(dead_code)]

use eventide::{BoxError, Event, EventKind, Handler, SubscriberId};
use std::{cell::RefCell, rc::Rc};

// ============================================================================
// Subscribers
// ============================================================================

pub const RENDERER: SubscriberId = SubscriberId(1);
pub const INPUT: SubscriberId = SubscriberId(2);
pub const APP: SubscriberId = SubscriberId(54);

// ============================================================================
// Test Handlers
// ============================================================================

/// Shared delivery log: (subscriber tag, kind) in invocation order.
pub type Log = Rc<RefCell<Vec<(&'static str, EventKind)>>>;

pub fn log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

pub struct TaggedHandler {
    pub tag: &'static str,
    pub log: Log,
    pub result: bool,
}

impl TaggedHandler {
    pub fn new(tag: &'static str, log: &Log) -> Self {
        Self {
            tag,
            log: log.clone(),
            result: false,
        }
    }
}

impl Handler for TaggedHandler {
    fn handle(&mut self, event: &mut Event) -> Result<bool, BoxError> {
        self.log.borrow_mut().push((self.tag, event.kind()));
        Ok(self.result)
    }
}

pub fn tags(log: &Log) -> Vec<&'static str> {
    log.borrow().iter().map(|(tag, _)| *tag).collect()
}
