//! Standard handler implementations.

mod logging;

pub use logging::LoggingHandler;
