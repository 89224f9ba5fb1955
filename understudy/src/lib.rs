//! # understudy - Conditional Stand-In Handlers for Routes
//!
//! `understudy` lets individual routes declare an alternate handler that
//! goes on instead of the regular one whenever a per-request predicate
//! matches - a stand-in that takes the stage on cue.
//!
//! The extension has exactly two moving parts:
//!
//! - **Validation**: a route's raw [`StandInOptions`] block is checked once,
//!   at install time, and becomes an immutable [`RouteOverride`] - or a
//!   [`ConfigError`] naming the route and the missing field. Nothing is
//!   deferred to request time.
//! - **Wrapping**: [`wrap_handler`] turns a validated override into a single
//!   [`StandIn`] handler that evaluates the predicate per request and
//!   delegates the whole call to either the stand-in or the previous
//!   handler, returning exactly the delegate's response.
//!
//! [`install`] ties them together: one walk over the host's [`RouteTable`],
//! after registration and before traffic, replacing the handler of every
//! route that opted in and leaving all others untouched.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use understudy::{Route, RouteTable, StandInOptions, box_handler, install};
//!
//! let mut table = RouteTable::new();
//! table.add(
//!     Route::new("/test", box_handler(regular_handler)).stand_in(
//!         StandInOptions::new()
//!             .should_apply(|request: &MyRequest| request.query.contains_key("demo"))
//!             .handler(demo_handler),
//!     ),
//! )?;
//!
//! install(&mut table)?;
//! // every request to /test now picks a handler via the predicate
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod config;
mod install;
mod wrap;

pub mod testing;

pub use config::RouteOverride;
pub use install::install;
pub use wrap::{StandIn, wrap_handler};

// Re-export the boundary types so hosts only need one dependency.
pub use understudy_core::{
    BoxHandler, BoxPredicate, ConfigError, DynHandler, Handler, HandlerResponse, Predicate,
    Request, Route, RouteError, RouteTable, StandInOptions, box_handler,
};
