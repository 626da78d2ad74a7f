//! Bus configuration.

/// How far a single event travels through the subscriber list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Propagation {
    /// Every matching subscriber receives the event, whatever handlers return
    /// or set.
    #[default]
    Broadcast,
    /// Delivery of an event stops at the first handler that sets its
    /// `handled` flag.
    StopWhenHandled,
}

/// Configuration of an [`EventBus`](crate::EventBus).
///
/// # Example
///
/// ```rust,ignore
/// let config = BusConfig::new()
///     .with_queue_capacity(256)
///     .with_propagation(Propagation::StopWhenHandled);
/// let bus = EventBus::with_config(config);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusConfig {
    /// Capacity reserved for the queue the first time an event is queued.
    pub queue_capacity: usize,
    /// Propagation policy used by dispatch passes.
    pub propagation: Propagation,
    /// Drop a subscriber entry once its last subscription is removed.
    ///
    /// A pruned subscriber that subscribes again moves to the end of the
    /// delivery order.
    pub prune_empty_subscribers: bool,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl BusConfig {
    /// Default configuration: broadcast delivery, 64 queued events reserved
    /// lazily, empty subscribers kept.
    pub fn new() -> Self {
        Self {
            queue_capacity: 64,
            propagation: Propagation::Broadcast,
            prune_empty_subscribers: false,
        }
    }

    /// Set the queue capacity reserved on first use.
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    /// Set the propagation policy.
    pub fn with_propagation(mut self, propagation: Propagation) -> Self {
        self.propagation = propagation;
        self
    }

    /// Set whether empty subscriber entries are dropped.
    pub fn with_prune_empty_subscribers(mut self, prune: bool) -> Self {
        self.prune_empty_subscribers = prune;
        self
    }
}
