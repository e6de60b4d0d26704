//! Observers notified of routing outcomes.
use crate::recovery::panic_message;

use std::any::Any;

use hyper::{Body, Request};

/// Receives a notification for every request the router dispatches.
///
/// Notifications are fire-and-forget; a monitor cannot change where a request
/// is routed. Every method defaults to doing nothing.
pub trait Monitor: Send + Sync + 'static {
    /// A handler was found for the request.
    fn routed(&self, _req: &Request<Body>) {}

    /// No registered path matched the request.
    fn not_found(&self, _req: &Request<Body>) {}

    /// The path matched, but not for the request's method.
    fn method_not_allowed(&self, _req: &Request<Body>) {}

    /// A handler panicked and the recovery callback produced the response.
    fn recovered(&self, _req: &Request<()>, _recovered: &(dyn Any + Send)) {}
}

/// A [`Monitor`] that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NopMonitor;

impl Monitor for NopMonitor {}

/// A [`Monitor`] that reports outcomes as `tracing` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingMonitor;

impl Monitor for TracingMonitor {
    fn routed(&self, req: &Request<Body>) {
        tracing::debug!(method = %req.method(), path = %req.uri().path(), "Request routed");
    }

    fn not_found(&self, req: &Request<Body>) {
        tracing::debug!(method = %req.method(), path = %req.uri().path(), "No route matched");
    }

    fn method_not_allowed(&self, req: &Request<Body>) {
        tracing::debug!(method = %req.method(), path = %req.uri().path(), "Method not allowed");
    }

    fn recovered(&self, req: &Request<()>, recovered: &(dyn Any + Send)) {
        tracing::debug!(
            method = %req.method(),
            path = %req.uri().path(),
            panic = panic_message(recovered).unwrap_or("<non-string payload>"),
            "Request recovered"
        );
    }
}
