//! The one-time install walk over the host's route table.

use crate::{config::RouteOverride, wrap::wrap_handler};
use understudy_core::{ConfigError, HandlerResponse, Request, RouteTable};

/// Walk every route once and install stand-in dispatch where configured.
///
/// Routes without a stand-in options block are left untouched; their handler
/// stays reference-identical to whatever was registered. For each route that
/// carries a block, the options are validated and the route's handler is
/// replaced by a wrapper dispatching between the stand-in and the previous
/// handler - including handlers other extensions installed earlier.
///
/// Must run exactly once, after all routes are registered and strictly
/// before the host accepts traffic; the table is under single-owner access
/// at that point.
///
/// # Errors
///
/// Fails fast with the first [`ConfigError`]: a malformed options block
/// aborts installation rather than being deferred to request time. Routes
/// walked before the failure keep their already-installed wrappers.
pub fn install<R, O>(table: &mut RouteTable<R, O>) -> Result<(), ConfigError>
where
    R: Request,
    O: HandlerResponse,
{
    for route in table.routes_mut() {
        let Some(options) = route.take_stand_in() else {
            continue;
        };

        let overrides = RouteOverride::validate(route.path(), options, route.handler().clone())?;
        route.replace_handler(wrap_handler(overrides));
        tracing::debug!(route = %route.path(), "installed stand-in handler");
    }

    Ok(())
}
