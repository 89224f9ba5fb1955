//! Predicate trait for per-request dispatch decisions.

use crate::request::Request;
use std::sync::Arc;

/// A synchronous per-request decision function.
///
/// Predicates inspect a request by reference and decide whether the stand-in
/// handler should serve it. They are expected to be cheap, side-effect free,
/// and must not mutate the request. A panicking predicate propagates to the
/// host's own error path; nothing here catches it.
///
/// Any `Fn(&R) -> bool + Send + Sync + 'static` closure is a predicate via
/// the blanket impl.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot decide on requests of type `{R}`",
    label = "missing `Predicate<{R}>` implementation",
    note = "Predicates must implement `check` for the request type `{R}`."
)]
pub trait Predicate<R: Request>: Send + Sync + 'static {
    /// Returns `true` when the stand-in handler should serve this request.
    fn check(&self, request: &R) -> bool;
}

impl<R, F> Predicate<R> for F
where
    R: Request,
    F: Fn(&R) -> bool + Send + Sync + 'static,
{
    fn check(&self, request: &R) -> bool {
        (self)(request)
    }
}

/// A shared, type-erased predicate as stored in route configuration.
pub type BoxPredicate<R> = Arc<dyn Predicate<R>>;

// Allow BoxPredicate to be used where Predicate is expected.
impl<R: Request> Predicate<R> for BoxPredicate<R> {
    fn check(&self, request: &R) -> bool {
        (**self).check(request)
    }
}
