//! Request trait for request-context types.

/// A marker trait for request contexts flowing through handlers.
///
/// Requests must be `Send + Sync + 'static` to be safe for async use.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone)]
/// struct MyRequest { path: String }
///
/// impl Request for MyRequest {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Request",
    label = "must be `Send + Sync + 'static`",
    note = "All request contexts must be thread-safe and static."
)]
pub trait Request: Send + Sync + 'static {}

// Common Request implementations
impl Request for () {}
impl Request for String {}
impl Request for &'static str {}
impl<T: Request> Request for Box<T> {}
impl<T: Request> Request for std::sync::Arc<T> {}
