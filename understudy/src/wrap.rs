//! Handler wrapping - the dispatch decision at the heart of the extension.

use crate::config::RouteOverride;
use std::sync::Arc;
use understudy_core::{BoxHandler, Handler, HandlerResponse, Predicate, Request};

/// A handler that dispatches each request to one of two inner handlers.
///
/// The predicate is evaluated once per invocation; `true` delegates the whole
/// call to the stand-in, `false` delegates identically to the fallback. The
/// return value is exactly the delegate's return value. Nothing is cached,
/// logged, or modified on the way through, and a panicking predicate or
/// delegate propagates untouched.
///
/// Stateless apart from the two handlers and the predicate it closes over,
/// so a single instance may serve any number of concurrent requests.
///
/// # Example
///
/// ```rust,ignore
/// let handler = StandIn::new(
///     |request: &MyRequest| request.query.contains_key("demo"),
///     demo_handler,
///     regular_handler,
/// );
/// ```
pub struct StandIn<P, D, F> {
    predicate: P,
    understudy: D,
    fallback: F,
}

impl<P, D, F> StandIn<P, D, F> {
    /// Create a new `StandIn`.
    ///
    /// `understudy` serves requests the predicate matches; `fallback` serves
    /// everything else.
    pub fn new(predicate: P, understudy: D, fallback: F) -> Self {
        Self {
            predicate,
            understudy,
            fallback,
        }
    }
}

impl<R, P, D, F> Handler<R> for StandIn<P, D, F>
where
    R: Request,
    P: Predicate<R>,
    D: Handler<R>,
    F: Handler<R, Response = D::Response>,
{
    type Response = D::Response;

    async fn call(&self, request: R) -> Self::Response {
        if self.predicate.check(&request) {
            self.understudy.call(request).await
        } else {
            self.fallback.call(request).await
        }
    }
}

/// Box a validated [`RouteOverride`] into the handler a route installs.
///
/// The result is always a fresh allocation, reference-distinct from the
/// fallback it wraps.
pub fn wrap_handler<R, O>(overrides: RouteOverride<R, O>) -> BoxHandler<R, O>
where
    R: Request,
    O: HandlerResponse,
{
    let (predicate, understudy, fallback) = overrides.into_parts();
    Arc::new(StandIn::new(predicate, understudy, fallback))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use understudy_core::{StandInOptions, box_handler};

    #[derive(Clone)]
    struct TestRequest {
        value: i32,
    }

    impl Request for TestRequest {}

    struct CountingHandler {
        count: Arc<AtomicUsize>,
        response: &'static str,
    }

    impl Handler<TestRequest> for CountingHandler {
        type Response = String;

        async fn call(&self, _request: TestRequest) -> String {
            self.count.fetch_add(1, Ordering::SeqCst);
            self.response.to_string()
        }
    }

    fn counting(count: &Arc<AtomicUsize>, response: &'static str) -> CountingHandler {
        CountingHandler {
            count: Arc::clone(count),
            response,
        }
    }

    #[tokio::test]
    async fn test_predicate_true_calls_understudy() {
        let understudy_count = Arc::new(AtomicUsize::new(0));
        let fallback_count = Arc::new(AtomicUsize::new(0));

        let handler = StandIn::new(
            |request: &TestRequest| request.value > 5,
            counting(&understudy_count, "understudy"),
            counting(&fallback_count, "fallback"),
        );

        let response = handler.call(TestRequest { value: 10 }).await;

        assert_eq!(response, "understudy");
        assert_eq!(understudy_count.load(Ordering::SeqCst), 1);
        assert_eq!(fallback_count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_predicate_false_calls_fallback() {
        let understudy_count = Arc::new(AtomicUsize::new(0));
        let fallback_count = Arc::new(AtomicUsize::new(0));

        let handler = StandIn::new(
            |request: &TestRequest| request.value > 5,
            counting(&understudy_count, "understudy"),
            counting(&fallback_count, "fallback"),
        );

        let response = handler.call(TestRequest { value: 3 }).await;

        assert_eq!(response, "fallback");
        assert_eq!(understudy_count.load(Ordering::SeqCst), 0);
        assert_eq!(fallback_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_predicate_evaluated_per_request() {
        let understudy_count = Arc::new(AtomicUsize::new(0));
        let fallback_count = Arc::new(AtomicUsize::new(0));

        let handler = StandIn::new(
            |request: &TestRequest| request.value > 5,
            counting(&understudy_count, "understudy"),
            counting(&fallback_count, "fallback"),
        );

        handler.call(TestRequest { value: 10 }).await;
        handler.call(TestRequest { value: 3 }).await;
        handler.call(TestRequest { value: 10 }).await;

        assert_eq!(understudy_count.load(Ordering::SeqCst), 2);
        assert_eq!(fallback_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_wrap_handler_is_reference_distinct() {
        async fn original(_request: TestRequest) -> String {
            "original".to_string()
        }

        let fallback = box_handler(original);
        let options = StandInOptions::new()
            .should_apply(|_request: &TestRequest| false)
            .handler(original);

        let overrides =
            crate::config::RouteOverride::validate("/test", options, fallback.clone()).unwrap();
        let wrapped = wrap_handler(overrides);

        assert!(!Arc::ptr_eq(&wrapped, &fallback));

        // Still delegates to the original when the predicate says no.
        let response = wrapped.call(TestRequest { value: 1 }).await;
        assert_eq!(response, "original");
    }
}
