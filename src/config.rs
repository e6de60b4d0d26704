//! Everything a [`Router`] is built from.
use crate::error::RouteError;
use crate::handler::{BoxedHandler, Handler, StatusHandler};
use crate::monitor::{Monitor, NopMonitor};
use crate::recovery::RecoveryFn;
use crate::route::{parse_route, parse_routes, Route};
use crate::router::Router;

use std::any::Any;
use std::sync::Arc;

use hyper::{Body, Request, Response, StatusCode};

/// The configuration of a [`Router`].
///
/// Every field has a default, so callers only set what they need, either
/// directly or through the chainable helpers:
/// ```rust
/// use treerouter::{recovery_handler, Config, TracingMonitor};
/// use hyper::{Request, Response, Body};
///
/// async fn users(_: Request<Body>) -> hyper::Result<Response<Body>> {
///     Ok(Response::new(Body::empty()))
/// }
///
/// let config = Config::default()
///     .add_routes("PUT", "/users|/old/path/to/users", users)
///     .add_route("GET|DELETE", "/users/:id", users)
///     .recovery(recovery_handler)
///     .monitor(TracingMonitor);
///
/// assert_eq!(config.routes.len(), 3);
/// let router = config.build().unwrap();
/// ```
pub struct Config {
    /// Routes to register, in order. Defaults to none.
    pub routes: Vec<Route<BoxedHandler>>,
    /// Called when no route matches the request path. Defaults to a plain-text
    /// `404 Not Found`.
    pub not_found: BoxedHandler,
    /// Called when the path matches but not for the request method. Defaults to
    /// a plain-text `405 Method Not Allowed`.
    pub method_not_allowed: BoxedHandler,
    /// Handles panics raised by handlers. Defaults to `None`, which lets
    /// panics propagate.
    pub recovery: Option<RecoveryFn>,
    /// Notified of every routing outcome. Defaults to [`NopMonitor`].
    pub monitor: Arc<dyn Monitor>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            routes: Vec::new(),
            not_found: Arc::new(StatusHandler(StatusCode::NOT_FOUND)),
            method_not_allowed: Arc::new(StatusHandler(StatusCode::METHOD_NOT_ALLOWED)),
            recovery: None,
            monitor: Arc::new(NopMonitor),
        }
    }
}

impl Config {
    pub fn route(mut self, route: Route<BoxedHandler>) -> Self {
        self.routes.push(route);
        self
    }

    pub fn routes(mut self, routes: impl IntoIterator<Item = Route<BoxedHandler>>) -> Self {
        self.routes.extend(routes);
        self
    }

    /// Adds a route from a `|` delimited method list, e.g. `"GET|HEAD"`.
    pub fn add_route(self, methods: &str, path: &str, handler: impl Handler) -> Self {
        let handler: BoxedHandler = Arc::new(handler);
        self.route(parse_route(methods, path, handler))
    }

    /// Adds one route per path of a `|` delimited path list, all bound to the
    /// same handler.
    pub fn add_routes(self, methods: &str, paths: &str, handler: impl Handler) -> Self {
        let handler: BoxedHandler = Arc::new(handler);
        self.routes(parse_routes(methods, paths, handler))
    }

    pub fn not_found(mut self, handler: impl Handler) -> Self {
        self.not_found = Arc::new(handler);
        self
    }

    pub fn method_not_allowed(mut self, handler: impl Handler) -> Self {
        self.method_not_allowed = Arc::new(handler);
        self
    }

    /// Enables panic recovery, see [`recovery_handler`](crate::recovery_handler)
    /// for the stock callback.
    pub fn recovery<F>(mut self, recovery: F) -> Self
    where
        F: Fn(&Request<()>, &(dyn Any + Send)) -> Response<Body> + Send + Sync + 'static,
    {
        self.recovery = Some(Arc::new(recovery));
        self
    }

    pub fn monitor(mut self, monitor: impl Monitor) -> Self {
        self.monitor = Arc::new(monitor);
        self
    }

    pub fn build(self) -> Result<Router, RouteError> {
        Router::new(self)
    }
}
