//! Logging handler for event observation.

use eventide_core::{BoxError, Event, Handler};
use std::borrow::Cow;

/// A handler that logs every event it receives and never marks it handled.
///
/// Subscribe it to a whole category with
/// [`EventBus::subscribe_category`](crate::EventBus::subscribe_category) to
/// trace traffic without interfering with other subscribers.
#[derive(Debug, Clone)]
pub struct LoggingHandler {
    name: Cow<'static, str>,
}

impl Default for LoggingHandler {
    fn default() -> Self {
        Self::new("events")
    }
}

impl LoggingHandler {
    /// Create a logging handler that tags its records with `name`.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into() }
    }

    /// The tag attached to every record.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Handler for LoggingHandler {
    fn handle(&mut self, event: &mut Event) -> Result<bool, BoxError> {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                logger = %self.name,
                kind = %event.kind(),
                categories = ?event.categories(),
                handled = event.is_handled(),
                "{event}"
            );
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = event;
        }
        Ok(false)
    }
}
