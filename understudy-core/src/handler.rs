//! # Handler Layer
//!
//! The calling contract every route handler satisfies: take an owned request
//! context, perform async work, produce a response.
//!
//! # Static vs Dynamic Dispatch
//!
//! [`Handler`] uses native `async fn` for zero-cost static dispatch. Route
//! tables need runtime polymorphism, so [`DynHandler`] provides the
//! object-safe twin; every `Handler` implements it automatically. The stored
//! form is [`BoxHandler`], an `Arc` so a route's installed handler can be
//! compared by identity after wrapping.

use crate::request::Request;
use std::{future::Future, pin::Pin, sync::Arc};

/// A marker trait for the response produced by a handler.
pub trait HandlerResponse: Send + Sync + 'static {}
impl<T: Send + Sync + 'static> HandlerResponse for T {}

/// The calling contract of a route handler.
///
/// A handler receives a fully owned request context and asynchronously
/// produces its response. Plain `async fn`s and closures implement this
/// automatically via the blanket impl.
///
/// # Example
///
/// ```rust,ignore
/// async fn hello(_request: MyRequest) -> String {
///     "hello".to_string()
/// }
///
/// // `hello` is a Handler<MyRequest, Response = String>
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle requests of type `{R}`",
    label = "missing `Handler<{R}>` implementation",
    note = "Handlers must implement the `call` method for the request type `{R}`."
)]
pub trait Handler<R: Request>: Send + Sync + 'static {
    /// The response type produced by this handler.
    type Response: HandlerResponse;

    /// Executes the handler for one request.
    fn call(&self, request: R) -> impl Future<Output = Self::Response> + Send;
}

impl<F, R, O, Fut> Handler<R> for F
where
    R: Request,
    O: HandlerResponse,
    F: Fn(R) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = O> + Send,
{
    type Response = O;

    fn call(&self, request: R) -> impl Future<Output = Self::Response> + Send {
        (self)(request)
    }
}

/// Dynamic object-safe version of [`Handler`].
///
/// Use this trait when you need runtime polymorphism (e.g., in a route table).
pub trait DynHandler<R: Request, O>: Send + Sync + 'static {
    /// Executes the handler for one request (dynamic dispatch version).
    fn call_dyn<'a>(&'a self, request: R) -> Pin<Box<dyn Future<Output = O> + Send + 'a>>;
}

// Blanket implementation: any type implementing Handler implements DynHandler
// automatically.
impl<R: Request, T: Handler<R>> DynHandler<R, T::Response> for T {
    fn call_dyn<'a>(
        &'a self,
        request: R,
    ) -> Pin<Box<dyn Future<Output = T::Response> + Send + 'a>> {
        Box::pin(self.call(request))
    }
}

/// A shared, type-erased handler as stored in a route descriptor.
///
/// Cloning is O(1); `Arc::ptr_eq` distinguishes an original handler from a
/// wrapped replacement.
pub type BoxHandler<R, O> = Arc<dyn DynHandler<R, O>>;

// Allow BoxHandler to be used where Handler is expected.
impl<R: Request, O: HandlerResponse> Handler<R> for BoxHandler<R, O> {
    type Response = O;

    async fn call(&self, request: R) -> Self::Response {
        (**self).call_dyn(request).await
    }
}

/// Box a concrete handler into the shared form stored by route tables.
pub fn box_handler<R, H>(handler: H) -> BoxHandler<R, H::Response>
where
    R: Request,
    H: Handler<R>,
{
    Arc::new(handler)
}
