//! Error types for the understudy extension.
//!
//! - [`ConfigError`] - a route's stand-in configuration fails validation
//! - [`RouteError`] - route table errors
//!
//! Request-time failures of a predicate or delegate handler are deliberately
//! absent: they propagate untouched to the host's per-request error handling.

use thiserror::Error;

/// Per-route stand-in configuration does not match the recognized schema.
///
/// Surfaced at install time, before any traffic is served; never recovered.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The options block supplies a handler but no predicate.
    #[error("route {route}: stand-in options are missing the `should_apply` predicate")]
    MissingPredicate {
        /// Path of the offending route.
        route: String,
    },

    /// The options block supplies a predicate but no stand-in handler.
    #[error("route {route}: stand-in options are missing the stand-in handler")]
    MissingHandler {
        /// Path of the offending route.
        route: String,
    },
}

/// Errors from the route table.
#[derive(Error, Debug)]
pub enum RouteError {
    /// No route was registered for the given path.
    #[error("no route registered for path: {0}")]
    NotFound(String),

    /// A route already exists for the given path.
    #[error("route already registered for path: {0}")]
    AlreadyExists(String),
}
