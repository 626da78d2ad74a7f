//! The event bus: one queue, one registry, one dispatch entry point.

use crate::{
    config::BusConfig,
    dispatch::{self, DispatchReport},
    queue::{EventQueue, Publisher, Removal},
    registry::{Interest, SubscriptionRegistry},
};
use eventide_core::{Category, Event, EventKind, Handler, Payload, SubscriberId};
use std::{cell::RefCell, rc::Rc};

/// Context object owning the pending-event queue and the subscription
/// registry.
///
/// Producers call [`trigger`](Self::trigger) (or go through a [`Publisher`]);
/// the host loop calls [`process_events`](Self::process_events) once per
/// iteration. Everything runs on the calling thread and the bus is not
/// `Send`.
///
/// # Example
///
/// ```rust,ignore
/// let mut bus = EventBus::new();
/// bus.subscribe(SubscriberId(54), EventKind::WindowResize, |event: &mut Event| {
///     let resized = event.payload::<WindowResized>().unwrap();
///     println!("{}x{}", resized.width, resized.height);
///     true
/// });
///
/// bus.trigger(WindowResized { width: 800, height: 600 });
/// bus.process_events();
/// ```
#[derive(Debug)]
pub struct EventBus {
    config: BusConfig,
    registry: SubscriptionRegistry,
    queue: Rc<RefCell<EventQueue>>,
    batch: Vec<Event>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Create a bus with the default configuration.
    pub fn new() -> Self {
        Self::with_config(BusConfig::default())
    }

    /// Create a bus with the given configuration.
    ///
    /// Nothing is allocated until the first subscription or event.
    pub fn with_config(config: BusConfig) -> Self {
        Self {
            registry: SubscriptionRegistry::new().with_pruning(config.prune_empty_subscribers),
            queue: Rc::new(RefCell::new(EventQueue::with_capacity(config.queue_capacity))),
            batch: Vec::new(),
            config,
        }
    }

    /// The configuration this bus was built with.
    pub fn config(&self) -> &BusConfig {
        &self.config
    }

    // ------------------------------------------------------------------------
    // Subscriptions
    // ------------------------------------------------------------------------

    /// Register `handler` for events of `kind` on behalf of `subscriber`.
    ///
    /// Subscribing twice to the same kind stores both handlers, but only the
    /// first one registered is ever invoked for that subscriber.
    pub fn subscribe<H: Handler>(
        &mut self,
        subscriber: SubscriberId,
        kind: EventKind,
        handler: H,
    ) {
        #[cfg(feature = "tracing")]
        tracing::trace!(%subscriber, %kind, "subscribed");

        self.registry.subscribe(subscriber, kind, handler);
    }

    /// Register a clone of `handler` for every kind in `category`.
    pub fn subscribe_category<H: Handler + Clone>(
        &mut self,
        subscriber: SubscriberId,
        category: Category,
        handler: H,
    ) {
        for kind in EventKind::in_category(category) {
            self.subscribe(subscriber, kind, handler.clone());
        }
    }

    /// Remove the subscriptions of `subscriber` selected by a kind or a
    /// category.
    ///
    /// A kind removes subscriptions for exactly that kind; a category removes
    /// every subscription whose mask intersects it. Nothing happens if
    /// nothing matches.
    ///
    /// Handlers cannot reach the bus during a pass; they go through
    /// [`Publisher::unsubscribe`] instead.
    pub fn unsubscribe(&mut self, subscriber: SubscriberId, interest: impl Into<Interest>) {
        let interest = interest.into();
        let removed = self.registry.unsubscribe(subscriber, interest);

        #[cfg(feature = "tracing")]
        tracing::debug!(%subscriber, ?interest, removed, "unsubscribed");

        #[cfg(not(feature = "tracing"))]
        let _ = removed;
    }

    /// Remove `subscriber` and every subscription it holds.
    pub fn unsubscribe_all(&mut self, subscriber: SubscriberId) {
        let removed = self.registry.unsubscribe_all(subscriber);

        #[cfg(feature = "tracing")]
        tracing::debug!(%subscriber, removed, "subscriber removed");

        #[cfg(not(feature = "tracing"))]
        let _ = removed;
    }

    /// The subscription registry.
    pub fn registry(&self) -> &SubscriptionRegistry {
        &self.registry
    }

    // ------------------------------------------------------------------------
    // Publishing
    // ------------------------------------------------------------------------

    /// Build an event from `payload` and append it to the queue.
    pub fn trigger<P: Payload>(&self, payload: P) {
        self.publisher().trigger(payload);
    }

    /// Append an already-built event to the queue.
    pub fn queue_event(&self, event: Event) {
        self.publisher().queue_event(event);
    }

    /// A handle that appends to this bus's queue.
    pub fn publisher(&self) -> Publisher {
        Publisher::new(self.queue.clone())
    }

    /// Number of events waiting for the next pass.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    // ------------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------------

    /// Deliver every queued event, then discard them.
    ///
    /// The batch is captured when the pass starts. Events triggered by
    /// handlers during the pass stay queued for the next call. Removals
    /// requested through a [`Publisher`] are applied before the batch is
    /// captured and again once it has been delivered.
    pub fn process_events(&mut self) -> DispatchReport {
        self.apply_removals();

        self.queue.borrow_mut().swap_batch(&mut self.batch);
        if self.batch.is_empty() {
            return DispatchReport::default();
        }

        let report =
            dispatch::dispatch_batch(&mut self.registry, &mut self.batch, self.config.propagation);
        self.apply_removals();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            events = report.stats.events,
            deliveries = report.stats.deliveries,
            dropped = report.stats.dropped,
            failures = report.failures.len(),
            "events processed"
        );

        report
    }

    /// Release all subscriptions and queued events.
    ///
    /// Calling this again is harmless, and the bus can still be used
    /// afterwards.
    pub fn shutdown(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::info!(
            subscribers = self.registry.subscriber_count(),
            pending = self.pending(),
            "event bus shutting down"
        );

        self.registry.clear();
        self.queue.borrow_mut().clear();
        self.batch = Vec::new();
    }

    fn apply_removals(&mut self) {
        let removals = self.queue.borrow_mut().take_removals();
        for removal in removals {
            match removal {
                Removal::Interest(subscriber, interest) => self.unsubscribe(subscriber, interest),
                Removal::All(subscriber) => self.unsubscribe_all(subscriber),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Propagation;
    use eventide_core::catalog::{AppRender, AppTick, KeyPressed, WindowResized};
    use eventide_core::KeyCode;
    use std::cell::Cell;

    #[test]
    fn test_trigger_then_process_without_subscribers() {
        let mut bus = EventBus::new();
        bus.trigger(AppTick);
        bus.trigger(AppRender);
        assert_eq!(bus.pending(), 2);

        let report = bus.process_events();
        assert_eq!(report.stats.events, 2);
        assert_eq!(report.stats.dropped, 2);
        assert_eq!(bus.pending(), 0);
    }

    #[test]
    fn test_resize_delivery() {
        let mut bus = EventBus::new();
        let seen = Rc::new(Cell::new(None));
        let seen_in_handler = seen.clone();

        bus.subscribe(SubscriberId(54), EventKind::WindowResize, move |event: &mut Event| {
            let resized = event.payload::<WindowResized>().copied();
            seen_in_handler.set(resized.map(|r| (r.width, r.height, event.is_handled())));
            true
        });

        bus.trigger(WindowResized {
            width: 800,
            height: 600,
        });
        bus.process_events();

        assert_eq!(seen.get(), Some((800, 600, false)));
    }

    #[test]
    fn test_reentrant_trigger_is_deferred() {
        let mut bus = EventBus::new();
        let publisher = bus.publisher();
        let renders = Rc::new(Cell::new(0));
        let renders_in_handler = renders.clone();

        bus.subscribe(SubscriberId(1), EventKind::AppTick, move |_: &mut Event| {
            publisher.trigger(AppRender);
            false
        });
        bus.subscribe(SubscriberId(1), EventKind::AppRender, move |_: &mut Event| {
            renders_in_handler.set(renders_in_handler.get() + 1);
            false
        });

        bus.trigger(AppTick);
        let report = bus.process_events();
        assert_eq!(report.stats.events, 1);
        assert_eq!(renders.get(), 0);
        assert_eq!(bus.pending(), 1);

        bus.process_events();
        assert_eq!(renders.get(), 1);
        assert_eq!(bus.pending(), 0);
    }

    #[test]
    fn test_subscribe_category() {
        let mut bus = EventBus::new();
        let count = Rc::new(Cell::new(0));
        let counter = {
            let count = count.clone();
            move |_: &mut Event| {
                count.set(count.get() + 1);
                false
            }
        };

        bus.subscribe_category(SubscriberId(9), Category::KEY, counter);
        assert_eq!(bus.registry().len(), 3);

        bus.trigger(KeyPressed::new(KeyCode::A));
        bus.trigger(AppTick);
        bus.process_events();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_stop_when_handled_config() {
        let mut bus =
            EventBus::with_config(BusConfig::new().with_propagation(Propagation::StopWhenHandled));
        let second = Rc::new(Cell::new(false));
        let second_in_handler = second.clone();

        bus.subscribe(SubscriberId(1), EventKind::AppTick, |event: &mut Event| event.set_handled(true));
        bus.subscribe(SubscriberId(2), EventKind::AppTick, move |_: &mut Event| {
            second_in_handler.set(true);
        });

        bus.trigger(AppTick);
        bus.process_events();
        assert!(!second.get());
    }

    #[test]
    fn test_handler_unsubscribes_itself() {
        let mut bus = EventBus::new();
        let publisher = bus.publisher();
        let calls = Rc::new(Cell::new(0));
        let calls_in_handler = calls.clone();

        bus.subscribe(SubscriberId(3), EventKind::AppTick, move |_: &mut Event| {
            calls_in_handler.set(calls_in_handler.get() + 1);
            publisher.unsubscribe(SubscriberId(3), EventKind::AppTick);
        });

        bus.trigger(AppTick);
        bus.process_events();
        assert!(bus.registry().subscriptions_of(SubscriberId(3)).is_empty());

        bus.trigger(AppTick);
        let report = bus.process_events();
        assert_eq!(calls.get(), 1);
        assert_eq!(report.stats.dropped, 1);
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let mut bus = EventBus::new();
        bus.subscribe(SubscriberId(1), EventKind::AppTick, |_: &mut Event| true);
        bus.trigger(AppTick);

        bus.shutdown();
        bus.shutdown();
        assert!(bus.registry().is_empty());
        assert_eq!(bus.pending(), 0);

        // Still usable afterwards.
        bus.trigger(AppTick);
        assert_eq!(bus.pending(), 1);
    }
}
