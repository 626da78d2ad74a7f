//! # eventide - In-Process Event Notification Bus
//!
//! `eventide` decouples the producers of application events (a windowing
//! backend, the host loop) from the subsystems that react to them. Producers
//! queue events; once per host-loop iteration the bus delivers everything
//! queued, in order, to the subscribers interested in each event's kind.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use eventide::prelude::*;
//! use eventide::catalog::WindowResized;
//!
//! let mut bus = EventBus::new();
//! bus.subscribe(SubscriberId(54), EventKind::WindowResize, |event: &mut Event| {
//!     let resized = event.payload::<WindowResized>().unwrap();
//!     println!("{resized}");
//!     true
//! });
//!
//! bus.trigger(WindowResized { width: 800, height: 600 });
//! let report = bus.process_events();
//! assert_eq!(report.stats.deliveries, 1);
//! ```
//!
//! ## Delivery Rules
//!
//! - Events are delivered in the order they were queued.
//! - Subscribers are visited in the order they first subscribed.
//! - A subscriber gets at most one call per event: its first subscription
//!   for that kind.
//! - Events queued by handlers during a pass wait for the next pass.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use eventide_core::{
    // Errors
    BoxError,
    // Classification
    Category,
    // Event model
    Event,
    EventData,
    EventKind,
    // Handler
    Handler,
    HandlerError,
    IntoHandled,
    KeyCode,
    Modifiers,
    MouseButton,
    ParseKindError,
    Payload,
    SubscriberId,
};

// Bus
pub use eventide_std::{
    BusConfig, DispatchReport, DispatchStats, EventBus, EventQueue, Interest, Propagation,
    Publisher, SubscriberEntry, Subscription, SubscriptionRegistry, dispatch_batch,
};

// Host loop
pub use eventide_std::{
    EventSource, HostLoop, LoopConfig, LoopControl, LoopState, LoopSummary, NoSource,
    ScriptedSource,
};

/// Event payload types.
pub mod catalog {
    #![allow(clippy::wildcard_imports)]
    pub use eventide_core::catalog::*;
}

/// Windowing-backend translation.
pub mod backend {
    pub use eventide_std::backend::{Action, RawInput, TranslateError, translate};
}

/// Standard handler implementations.
pub mod handlers {
    pub use eventide_std::handlers::LoggingHandler;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use eventide_std::testing::*;
}

/// Prelude module - common imports for eventide.
///
/// # Usage
///
/// ```rust,ignore
/// use eventide::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Errors
        BoxError,
        // Bus
        BusConfig,
        Category,
        // Event model
        Event,
        EventBus,
        EventKind,
        // Core traits
        EventSource,
        Handler,
        HostLoop,
        Payload,
        Propagation,
        Publisher,
        SubscriberId,
    };
}
