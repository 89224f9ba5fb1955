//! Testing utilities for the understudy extension.
//!
//! - [`RecordingHandler`]: a handler that records every request it serves
//! - [`static_handler`]: a handler that always returns a canned response

use std::sync::{Arc, Mutex};
use understudy_core::{Handler, HandlerResponse, Request};

/// A handler that records each request and returns a fixed response.
///
/// Clones share the same request log, so a test can keep one clone and
/// register the other.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingHandler::new("served".to_string());
/// let probe = recorder.clone();
///
/// table.add(Route::new("/probed", box_handler(recorder)))?;
/// // ... dispatch some requests ...
/// assert_eq!(probe.count(), 2);
/// ```
pub struct RecordingHandler<R, O> {
    requests: Arc<Mutex<Vec<R>>>,
    response: O,
}

impl<R, O: Clone> RecordingHandler<R, O> {
    /// Create a recording handler that always returns `response`.
    pub fn new(response: O) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            response,
        }
    }

    /// Get a clone of the recorded requests.
    pub fn requests(&self) -> Vec<R>
    where
        R: Clone,
    {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests served so far.
    pub fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl<R, O: Clone> Clone for RecordingHandler<R, O> {
    fn clone(&self) -> Self {
        Self {
            requests: Arc::clone(&self.requests),
            response: self.response.clone(),
        }
    }
}

impl<R, O> Handler<R> for RecordingHandler<R, O>
where
    R: Request,
    O: HandlerResponse + Clone,
{
    type Response = O;

    async fn call(&self, request: R) -> O {
        self.requests.lock().unwrap().push(request);
        self.response.clone()
    }
}

/// A handler that always returns a clone of `response`.
pub fn static_handler<R, O>(response: O) -> impl Handler<R, Response = O>
where
    R: Request,
    O: HandlerResponse + Clone,
{
    move |_request: R| {
        let response = response.clone();
        async move { response }
    }
}
