//! # eventide-std
//!
//! Standard runtime for the eventide notification bus.
//!
//! This crate provides:
//! - **Bus**: [`EventBus`], the context object owning queue and registry
//! - **Registry**: [`SubscriptionRegistry`], insertion-ordered subscribers
//! - **Dispatch**: [`dispatch_batch`] and its [`DispatchReport`]
//! - **Producers**: [`Publisher`], [`EventSource`], backend translation
//! - **Host loop**: [`HostLoop`], poll-then-dispatch once per iteration
//! - **Standard handlers**: Logging
//! - **Testing**: recording and counting handlers

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use eventide_core;

// Modules
pub mod backend;
pub mod bus;
pub mod config;
pub mod dispatch;
pub mod handlers;
pub mod host;
pub mod queue;
pub mod registry;
pub mod source;
pub mod testing;

pub use bus::EventBus;
pub use config::{BusConfig, Propagation};
pub use dispatch::{DispatchReport, DispatchStats, dispatch_batch};
pub use host::{HostLoop, LoopConfig, LoopControl, LoopState, LoopSummary};
pub use queue::{EventQueue, Publisher};
pub use registry::{Interest, SubscriberEntry, Subscription, SubscriptionRegistry};
pub use source::{EventSource, NoSource, ScriptedSource};
