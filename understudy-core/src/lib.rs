//! # understudy-core
//!
//! Core traits and the host route model for the understudy extension.
//!
//! This crate has minimal dependencies and holds everything both sides of
//! the boundary agree on:
//!
//! - [`Request`] - marker bound for request-context types
//! - [`Handler`] / [`DynHandler`] - the calling contract of a route handler,
//!   in static and object-safe form
//! - [`Predicate`] - the per-request decision function
//! - [`Route`] / [`RouteTable`] - the host's route registry, injected into
//!   the extension rather than reached for as ambient state
//! - [`StandInOptions`] - the raw per-route configuration block, validated
//!   by the `understudy` crate before use
//!
//! # Error Types
//!
//! - [`ConfigError`] - stand-in configuration failed validation (fatal at
//!   install time)
//! - [`RouteError`] - route table errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod handler;
mod predicate;
mod request;
mod route;

// Re-exports
pub use error::{ConfigError, RouteError};
pub use handler::{BoxHandler, DynHandler, Handler, HandlerResponse, box_handler};
pub use predicate::{BoxPredicate, Predicate};
pub use request::Request;
pub use route::{Route, RouteTable, StandInOptions};
