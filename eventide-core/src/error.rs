//! Error types for eventide.
//!
//! Publishing and dispatching never fail; errors only describe what went
//! wrong inside a single handler or while parsing names.
//!
//! - [`BoxError`] - failure returned by a handler
//! - [`HandlerError`] - a handler failure tagged with where it happened
//! - [`ParseKindError`] - an unknown event kind name

use crate::{kind::EventKind, subscriber::SubscriberId};
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A handler failed while an event was being delivered to it.
///
/// Dispatch keeps going after a failure; the error is reported back to the
/// caller of the dispatch pass.
#[derive(Error, Debug)]
#[error("handler of subscriber {subscriber} failed on {kind}")]
pub struct HandlerError {
    /// Subscriber owning the failing handler.
    pub subscriber: SubscriberId,
    /// Kind of the event being delivered.
    pub kind: EventKind,
    /// The error returned by the handler.
    #[source]
    pub source: BoxError,
}

/// The given string is not the name of any [`EventKind`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown event kind: {0}")]
pub struct ParseKindError(pub String);
