use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use futures_util::future;
use hyper::header::{self, HeaderValue};
use hyper::{Body, Request, Response, StatusCode};

/// The future returned by a [`Handler`].
pub type HandlerFuture = Pin<Box<dyn Future<Output = hyper::Result<Response<Body>>> + Send + Sync>>;

/// A handler as stored in the router.
pub type BoxedHandler = Arc<dyn Handler>;

/// Represents a HTTP handler function.
/// This trait is implemented for asynchronous functions that take a `Request` and return a
/// `Result<Response<Body>, hyper::Error>`
/// ```rust
/// # use treerouter::Handler;
/// # use hyper::{Request, Response, Body};
/// async fn hello(_: Request<Body>) -> Result<Response<Body>, hyper::Error> {
///     Ok(Response::new(Body::empty()))
/// }
///
/// let handler: Box<dyn Handler> = Box::new(hello);
/// ```
pub trait Handler: Send + Sync + 'static {
    fn handle(&self, req: Request<Body>) -> HandlerFuture;
}

impl<F, R> Handler for F
where
    F: Fn(Request<Body>) -> R + Send + Sync + 'static,
    R: Future<Output = Result<Response<Body>, hyper::Error>> + Send + Sync + 'static,
{
    fn handle(&self, req: Request<Body>) -> HandlerFuture {
        Box::pin(self(req))
    }
}

/// Answers every request with a status code and its reason phrase as a
/// plain-text body, e.g. `404` and `"Not Found\n"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusHandler(pub StatusCode);

impl StatusHandler {
    pub(crate) fn response(self) -> Response<Body> {
        status_response(self.0)
    }
}

impl Handler for StatusHandler {
    fn handle(&self, _: Request<Body>) -> HandlerFuture {
        Box::pin(future::ok::<_, hyper::Error>(self.response()))
    }
}

pub(crate) fn status_response(status: StatusCode) -> Response<Body> {
    let reason = status.canonical_reason().unwrap_or_default();
    let mut res = Response::new(Body::from(format!("{}\n", reason)));
    *res.status_mut() = status;

    let headers = res.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    res
}
