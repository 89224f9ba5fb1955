//! Validated stand-in configuration.

use understudy_core::{BoxHandler, BoxPredicate, ConfigError, Request, StandInOptions};

/// A route's validated stand-in configuration.
///
/// Produced only by [`RouteOverride::validate`] and immutable afterwards:
/// one is built per configured route at install time and lives as long as
/// the route itself. It holds shared references to the predicate, the
/// stand-in handler, and the fallback (the handler the route had before
/// wrapping); it owns none of their behavior.
pub struct RouteOverride<R: Request, O> {
    predicate: BoxPredicate<R>,
    handler: BoxHandler<R, O>,
    fallback: BoxHandler<R, O>,
}

impl<R: Request, O> RouteOverride<R, O> {
    /// Check a route's raw options block against the recognized schema.
    ///
    /// Succeeds iff the block supplies both the `should_apply` predicate and
    /// the stand-in handler; `fallback` is whatever handler the route had
    /// installed before. This is purely a shape check: it has no side
    /// effects and makes no judgment about what the predicate or handler do.
    ///
    /// # Errors
    ///
    /// A [`ConfigError`] naming the route and the missing field. Fatal at
    /// install time; never deferred to request time.
    pub fn validate(
        route: &str,
        options: StandInOptions<R, O>,
        fallback: BoxHandler<R, O>,
    ) -> Result<Self, ConfigError> {
        let (should_apply, handler) = options.into_parts();

        let predicate = should_apply.ok_or_else(|| ConfigError::MissingPredicate {
            route: route.to_string(),
        })?;
        let handler = handler.ok_or_else(|| ConfigError::MissingHandler {
            route: route.to_string(),
        })?;

        Ok(Self {
            predicate,
            handler,
            fallback,
        })
    }

    /// Split into predicate, stand-in handler, and fallback handler.
    pub(crate) fn into_parts(self) -> (BoxPredicate<R>, BoxHandler<R, O>, BoxHandler<R, O>) {
        (self.predicate, self.handler, self.fallback)
    }
}
