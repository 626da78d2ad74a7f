//! # eventide-core
//!
//! Event model for the eventide notification bus.
//!
//! This crate has no dispatch logic; it defines what flows through the bus
//! and what receives it:
//!
//! - [`EventKind`] - closed set of event kinds
//! - [`Category`] - bitmask grouping kinds for coarse filtering, derived from
//!   the kind through a fixed table
//! - [`Event`] - shared header (kind, categories, handled flag) plus an
//!   [`EventData`] payload from the [`catalog`]
//! - [`Handler`] - the callback a subscriber registers
//!
//! # Error Types
//!
//! - [`HandlerError`] - a handler failed during delivery
//! - [`ParseKindError`] - an unknown kind name

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Lets `#[derive(Payload)]` refer to `::eventide_core` from inside this crate.
extern crate self as eventide_core;

pub mod catalog;
mod category;
mod error;
mod event;
mod handler;
mod kind;
mod payload;
mod subscriber;

// Re-exports
pub use catalog::{EventData, KeyCode, Modifiers, MouseButton};
pub use category::Category;
pub use error::{BoxError, HandlerError, ParseKindError};
pub use event::Event;
pub use handler::{Handler, IntoHandled};
pub use kind::EventKind;
pub use payload::Payload;
pub use subscriber::SubscriberId;
