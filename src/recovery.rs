//! Turning handler panics into responses.
//!
//! Recovery is opt-in: unless a [`RecoveryFn`] is configured, a panicking
//! handler unwinds through the router like any other code.
use crate::handler::{status_response, Handler, HandlerFuture};
use crate::monitor::Monitor;
use crate::router::{ResponseFut, ResponseFutKind};

use std::any::Any;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::future::CatchUnwind;
use futures_util::{ready, FutureExt};
use hyper::{Body, Request, Response, StatusCode};

/// Builds the response for a request whose handler panicked.
///
/// It is given the head of the request (the body was handed to the handler)
/// and the panic payload.
pub type RecoveryFn =
    Arc<dyn Fn(&Request<()>, &(dyn Any + Send)) -> Response<Body> + Send + Sync>;

/// The stock recovery callback: `500 Internal Server Error` as plain text.
pub fn recovery_handler(_: &Request<()>, _: &(dyn Any + Send)) -> Response<Body> {
    status_response(StatusCode::INTERNAL_SERVER_ERROR)
}

/// The message of a panic payload, if it was raised with a string.
/// ```rust
/// use treerouter::panic_message;
///
/// let payload = std::panic::catch_unwind(|| panic!("boom {}", 42)).unwrap_err();
/// assert_eq!(panic_message(&*payload), Some("boom 42"));
/// ```
pub fn panic_message(payload: &(dyn Any + Send)) -> Option<&str> {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
}

#[derive(Clone)]
pub(crate) struct Recovery {
    callback: RecoveryFn,
    monitor: Arc<dyn Monitor>,
}

impl Recovery {
    pub(crate) fn new(callback: RecoveryFn, monitor: Arc<dyn Monitor>) -> Self {
        Self { callback, monitor }
    }

    /// Invokes `handler`, catching panics raised while creating the handler
    /// future as well as while polling it.
    pub(crate) fn invoke(&self, handler: &dyn Handler, req: Request<Body>) -> ResponseFut {
        let head = head(&req);

        match panic::catch_unwind(AssertUnwindSafe(|| handler.handle(req))) {
            Ok(fut) => ResponseFutKind::Guarded(Guarded {
                inner: AssertUnwindSafe(fut).catch_unwind(),
                head,
                recovery: self.clone(),
            })
            .into(),
            Err(payload) => ResponseFutKind::Ready(Some(self.recover(&head, payload))).into(),
        }
    }

    fn recover(&self, head: &Request<()>, payload: Box<dyn Any + Send>) -> Response<Body> {
        tracing::error!(
            method = %head.method(),
            path = %head.uri().path(),
            panic = panic_message(&*payload).unwrap_or("<non-string payload>"),
            "Recovered from handler panic"
        );

        let res = (self.callback)(head, &*payload);
        self.monitor.recovered(head, &*payload);
        res
    }
}

/// A handler future that recovers if polling it panics.
pub(crate) struct Guarded {
    inner: CatchUnwind<AssertUnwindSafe<HandlerFuture>>,
    head: Request<()>,
    recovery: Recovery,
}

impl Future for Guarded {
    type Output = hyper::Result<Response<Body>>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match ready!(self.inner.poll_unpin(cx)) {
            Ok(res) => Poll::Ready(res),
            Err(payload) => Poll::Ready(Ok(self.recovery.recover(&self.head, payload))),
        }
    }
}

// The request body belongs to the handler, so recovery only sees the head.
fn head(req: &Request<Body>) -> Request<()> {
    let mut head = Request::new(());
    *head.method_mut() = req.method().clone();
    *head.uri_mut() = req.uri().clone();
    *head.version_mut() = req.version();
    *head.headers_mut() = req.headers().clone();
    head
}
