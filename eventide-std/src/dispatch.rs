//! Dispatch engine.
//!
//! Delivers a batch of events to a registry, one event at a time in FIFO
//! order. For each event, every subscriber (in registry order) gets at most
//! one call: its first subscription whose kind equals the event's kind and
//! whose category mask intersects the event's categories.

use crate::{config::Propagation, registry::SubscriptionRegistry};
use eventide_core::{Event, HandlerError};
use std::ops::AddAssign;

/// Counters for one or more dispatch passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    /// Events taken from the queue.
    pub events: usize,
    /// Handler invocations.
    pub deliveries: usize,
    /// Invocations whose handler reported the event as handled.
    pub acknowledged: usize,
    /// Events whose `handled` flag was set once delivery finished.
    pub handled: usize,
    /// Events that matched no subscriber.
    pub dropped: usize,
}

impl AddAssign for DispatchStats {
    fn add_assign(&mut self, other: Self) {
        self.events += other.events;
        self.deliveries += other.deliveries;
        self.acknowledged += other.acknowledged;
        self.handled += other.handled;
        self.dropped += other.dropped;
    }
}

/// Outcome of a dispatch pass.
///
/// Failures never interrupt a pass; they are collected here in the order
/// they happened.
#[derive(Debug, Default)]
pub struct DispatchReport {
    /// Counters for the pass.
    pub stats: DispatchStats,
    /// Handlers that returned an error.
    pub failures: Vec<HandlerError>,
}

impl DispatchReport {
    /// Whether every handler succeeded.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Deliver `batch` to the subscribers in `registry`.
///
/// The batch is drained; events are dropped once delivered, whether or not
/// anybody received them. Its storage is left for reuse.
pub fn dispatch_batch(
    registry: &mut SubscriptionRegistry,
    batch: &mut Vec<Event>,
    propagation: Propagation,
) -> DispatchReport {
    let mut report = DispatchReport::default();

    for mut event in batch.drain(..) {
        report.stats.events += 1;
        let mut delivered = 0;

        for entry in registry.entries_mut() {
            let subscriber = entry.id();
            let Some(subscription) = entry.first_match_mut(&event) else {
                continue;
            };

            delivered += 1;

            #[cfg(feature = "tracing")]
            tracing::trace!(%subscriber, kind = %event.kind(), "delivering event");

            match subscription.handle(&mut event) {
                Ok(true) => report.stats.acknowledged += 1,
                Ok(false) => {}
                Err(source) => {
                    #[cfg(feature = "tracing")]
                    tracing::error!(%subscriber, kind = %event.kind(), error = %source, "handler failed");

                    report.failures.push(HandlerError {
                        subscriber,
                        kind: event.kind(),
                        source,
                    });
                }
            }

            if propagation == Propagation::StopWhenHandled && event.is_handled() {
                break;
            }
        }

        report.stats.deliveries += delivered;
        if delivered == 0 {
            report.stats.dropped += 1;

            #[cfg(feature = "tracing")]
            tracing::trace!(event = %event, "no subscriber, event dropped");
        }
        if event.is_handled() {
            report.stats.handled += 1;
        }
    }

    report
}
