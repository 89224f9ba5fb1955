//! # Host Route Model
//!
//! The boundary with the host framework, modeled as data the extension is
//! handed rather than ambient state it reaches into: a [`RouteTable`] of
//! [`Route`] descriptors, each carrying its active handler and an optional
//! [`StandInOptions`] block (the per-route extension configuration
//! namespace).
//!
//! The table is built while the host is single-owner, before traffic is
//! accepted; [`Route::replace_handler`] is the one mutation point the install
//! walk uses.

use crate::{
    error::RouteError,
    handler::{BoxHandler, Handler, box_handler},
    predicate::{BoxPredicate, Predicate},
    request::Request,
};
use std::sync::Arc;

/// Raw, unvalidated stand-in configuration attached to a route.
///
/// Both fields are optional at this stage; a half-filled block is exactly
/// what validation exists to reject. A route without any options block has
/// simply opted out.
///
/// # Example
///
/// ```rust,ignore
/// let options = StandInOptions::new()
///     .should_apply(|request: &MyRequest| request.query.contains_key("demo"))
///     .handler(demo_handler);
/// ```
pub struct StandInOptions<R: Request, O> {
    should_apply: Option<BoxPredicate<R>>,
    handler: Option<BoxHandler<R, O>>,
}

impl<R: Request, O> Default for StandInOptions<R, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Request, O> StandInOptions<R, O> {
    /// Create an empty options block.
    pub fn new() -> Self {
        Self {
            should_apply: None,
            handler: None,
        }
    }

    /// Set the predicate deciding when the stand-in serves a request.
    pub fn should_apply<P: Predicate<R>>(mut self, predicate: P) -> Self {
        self.should_apply = Some(Arc::new(predicate));
        self
    }

    /// Set the stand-in handler invoked when the predicate matches.
    pub fn handler<H>(mut self, handler: H) -> Self
    where
        H: Handler<R, Response = O>,
    {
        self.handler = Some(box_handler(handler));
        self
    }

    /// Split the block into its raw fields for validation.
    pub fn into_parts(self) -> (Option<BoxPredicate<R>>, Option<BoxHandler<R, O>>) {
        (self.should_apply, self.handler)
    }
}

/// A host route: a path pattern mapped to its active handler.
pub struct Route<R: Request, O> {
    path: String,
    handler: BoxHandler<R, O>,
    stand_in: Option<StandInOptions<R, O>>,
}

impl<R: Request, O> Route<R, O> {
    /// Register a route with its handler.
    pub fn new(path: impl Into<String>, handler: BoxHandler<R, O>) -> Self {
        Self {
            path: path.into(),
            handler,
            stand_in: None,
        }
    }

    /// Attach a stand-in options block to this route.
    pub fn stand_in(mut self, options: StandInOptions<R, O>) -> Self {
        self.stand_in = Some(options);
        self
    }

    /// The path pattern this route serves.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The currently installed handler.
    pub fn handler(&self) -> &BoxHandler<R, O> {
        &self.handler
    }

    /// Remove and return the stand-in options block, if any.
    ///
    /// Used by the install walk; options are consumed exactly once.
    pub fn take_stand_in(&mut self) -> Option<StandInOptions<R, O>> {
        self.stand_in.take()
    }

    /// Replace the installed handler.
    ///
    /// The single mutation point of a route; called once per route by the
    /// install walk, strictly before the host serves traffic.
    pub fn replace_handler(&mut self, handler: BoxHandler<R, O>) {
        self.handler = handler;
    }
}

/// An ordered collection of routes keyed by path.
pub struct RouteTable<R: Request, O> {
    routes: Vec<Route<R, O>>,
}

impl<R: Request, O: 'static> Default for RouteTable<R, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Request, O: 'static> RouteTable<R, O> {
    /// Create an empty route table.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Register a route.
    ///
    /// Paths are unique within a table.
    pub fn add(&mut self, route: Route<R, O>) -> Result<(), RouteError> {
        if self.routes.iter().any(|r| r.path == route.path) {
            return Err(RouteError::AlreadyExists(route.path));
        }
        self.routes.push(route);
        Ok(())
    }

    /// All registered routes, in registration order.
    pub fn routes(&self) -> &[Route<R, O>] {
        &self.routes
    }

    /// Mutable iteration over all routes, for the one-time install walk.
    pub fn routes_mut(&mut self) -> impl Iterator<Item = &mut Route<R, O>> {
        self.routes.iter_mut()
    }

    /// Look up a route by exact path.
    pub fn find(&self, path: &str) -> Option<&Route<R, O>> {
        self.routes.iter().find(|r| r.path == path)
    }

    /// Dispatch a request to the route matching `path`.
    pub async fn dispatch(&self, path: &str, request: R) -> Result<O, RouteError> {
        let route = self
            .find(path)
            .ok_or_else(|| RouteError::NotFound(path.to_string()))?;
        Ok((*route.handler).call_dyn(request).await)
    }
}
