//! Host application loop.
//!
//! Each iteration polls the event source, optionally queues the application
//! lifecycle events, then runs exactly one dispatch pass.

use crate::{
    bus::EventBus,
    dispatch::{DispatchReport, DispatchStats},
    source::EventSource,
};
use eventide_core::{
    HandlerError,
    catalog::{AppRender, AppTick, AppUpdate},
};
use std::{cell::Cell, rc::Rc};

/// Whether a host loop keeps iterating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    #[allow(missing_docs)]
    Running,
    #[allow(missing_docs)]
    Stopped,
}

/// Cloneable switch for stopping a [`HostLoop`], typically from a handler.
///
/// ```rust,ignore
/// let control = host.control();
/// host.bus_mut().subscribe(APP, EventKind::WindowClose, move |_: &mut Event| {
///     control.stop();
///     true
/// });
/// ```
#[derive(Debug, Clone)]
pub struct LoopControl(Rc<Cell<LoopState>>);

impl LoopControl {
    fn new() -> Self {
        Self(Rc::new(Cell::new(LoopState::Running)))
    }

    /// Ask the loop to stop after the current iteration.
    pub fn stop(&self) {
        self.0.set(LoopState::Stopped);
    }

    /// Current state.
    pub fn state(&self) -> LoopState {
        self.0.get()
    }

    /// Whether the loop is still running.
    pub fn is_running(&self) -> bool {
        self.state() == LoopState::Running
    }
}

/// Host loop configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopConfig {
    /// Queue `AppTick`, `AppUpdate` and `AppRender` after polling each
    /// iteration.
    pub emit_lifecycle: bool,
    /// Stop after this many iterations.
    pub max_ticks: Option<u64>,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            emit_lifecycle: true,
            max_ticks: None,
        }
    }
}

impl LoopConfig {
    /// Set whether lifecycle events are queued.
    pub fn with_lifecycle(mut self, emit: bool) -> Self {
        self.emit_lifecycle = emit;
        self
    }

    /// Limit the number of iterations.
    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }
}

/// Accumulated outcome of [`HostLoop::run`].
#[derive(Debug, Default)]
pub struct LoopSummary {
    /// Iterations executed.
    pub ticks: u64,
    /// Dispatch counters summed over every iteration.
    pub stats: DispatchStats,
    /// Handler failures from every iteration, in order.
    pub failures: Vec<HandlerError>,
}

/// Poll-then-dispatch loop driving an [`EventBus`].
pub struct HostLoop<S> {
    bus: EventBus,
    source: S,
    control: LoopControl,
    config: LoopConfig,
    ticks: u64,
}

impl<S: EventSource> HostLoop<S> {
    /// Create a loop with the default configuration.
    pub fn new(bus: EventBus, source: S) -> Self {
        Self::with_config(bus, source, LoopConfig::default())
    }

    /// Create a loop with the given configuration.
    pub fn with_config(bus: EventBus, source: S, config: LoopConfig) -> Self {
        Self {
            bus,
            source,
            control: LoopControl::new(),
            config,
            ticks: 0,
        }
    }

    /// A handle that stops this loop.
    pub fn control(&self) -> LoopControl {
        self.control.clone()
    }

    /// The bus driven by this loop.
    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Mutable access to the bus, for subscribing.
    pub fn bus_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    /// Iterations executed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run a single iteration: poll, queue lifecycle events, dispatch.
    pub fn tick(&mut self) -> DispatchReport {
        let publisher = self.bus.publisher();
        let polled = self.source.poll(&publisher);

        if self.config.emit_lifecycle {
            publisher.trigger(AppTick);
            publisher.trigger(AppUpdate);
            publisher.trigger(AppRender);
        }

        self.ticks += 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(tick = self.ticks, polled, "host loop iteration");

        #[cfg(not(feature = "tracing"))]
        let _ = polled;

        self.bus.process_events()
    }

    /// Iterate until stopped through a [`LoopControl`] or until
    /// `max_ticks` is reached.
    pub fn run(&mut self) -> LoopSummary {
        let mut summary = LoopSummary::default();

        while self.control.is_running() {
            if self.config.max_ticks.is_some_and(|max| self.ticks >= max) {
                break;
            }

            let report = self.tick();
            summary.ticks += 1;
            summary.stats += report.stats;
            summary.failures.extend(report.failures);
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            ticks = summary.ticks,
            events = summary.stats.events,
            failures = summary.failures.len(),
            "host loop finished"
        );

        summary
    }

    /// Stop the loop and release the bus storage.
    pub fn shutdown(&mut self) {
        self.control.stop();
        self.bus.shutdown();
    }
}
