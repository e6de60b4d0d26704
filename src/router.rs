//! [`Router`](crate::Router) dispatches requests to the handler registered for
//! their method and path.
//!
//! Routes are registered once, through a [`Config`](crate::Config), and the
//! routing tree is read-only from then on, so a `Router` can be shared by any
//! number of connections without locking.
//!
//! ```rust,no_run
//! use treerouter::{Config, Router};
//! use hyper::{Request, Response, Body, Error};
//!
//! async fn index(_: Request<Body>) -> Result<Response<Body>, Error> {
//!     Ok(Response::new("Hello, World!".into()))
//! }
//!
//! async fn user(req: Request<Body>) -> Result<Response<Body>, Error> {
//!     Ok(Response::new(format!("Hello, {}", req.uri().path()).into()))
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let router = Router::require(
//!         Config::default()
//!             .add_route("GET", "/", index)
//!             .add_route("GET|HEAD", "/users/:id", user),
//!     );
//!
//!     hyper::Server::bind(&([127, 0, 0, 1], 3000).into())
//!         .serve(router.into_service())
//!         .await;
//! }
//! ```
//!
//! A request is answered by exactly one of:
//! ```ignore
//!  the matched handler           a route exists for the path and method
//!  Config::method_not_allowed    the path exists, but not for the method
//!  Config::not_found             nothing matches the path
//! ```
use crate::config::Config;
use crate::error::RouteError;
use crate::handler::{BoxedHandler, HandlerFuture};
use crate::method::Method;
use crate::monitor::Monitor;
use crate::recovery::{Guarded, Recovery};
use crate::tree::Node;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::{future, ready};
use hyper::service::Service;
use hyper::{Body, Request, Response};

/// Router dispatches requests to different handlers via configurable routes.
pub struct Router {
    tree: Node<BoxedHandler>,
    not_found: BoxedHandler,
    method_not_allowed: BoxedHandler,
    recovery: Option<Recovery>,
    monitor: Arc<dyn Monitor>,
}

impl Router {
    /// Builds a router, registering the configured routes in order.
    ///
    /// The first route that cannot be added aborts the build.
    /// ```rust
    /// use treerouter::{Config, Router, InsertError};
    /// use hyper::{Request, Response, Body};
    ///
    /// async fn teapot(_: Request<Body>) -> hyper::Result<Response<Body>> {
    ///     Ok(Response::new(Body::from("I am a teapot!")))
    /// }
    ///
    /// let config = Config::default()
    ///     .add_route("GET", "/teapot", teapot)
    ///     .add_route("GET|POST", "/teapot", teapot);
    ///
    /// let err = Router::new(config).err().unwrap();
    /// assert_eq!(err.kind(), InsertError::RouteExists);
    /// assert_eq!(err.route(), "GET|POST /teapot");
    /// ```
    pub fn new(config: Config) -> Result<Self, RouteError> {
        let Config {
            routes,
            not_found,
            method_not_allowed,
            recovery,
            monitor,
        } = config;

        let mut tree = Node::default();
        for route in routes {
            let rendered = route.to_string();
            if let Err(kind) = tree.add(route) {
                tracing::warn!(route = %rendered, error = %kind, "Route registration failed");
                return Err(RouteError::new(rendered, kind));
            }
            tracing::debug!(route = %rendered, "Route registered");
        }

        let recovery = recovery.map(|callback| Recovery::new(callback, monitor.clone()));

        Ok(Self {
            tree,
            not_found,
            method_not_allowed,
            recovery,
            monitor,
        })
    }

    /// Like [`Router::new`], but panics if a route cannot be registered.
    pub fn require(config: Config) -> Self {
        match Self::new(config) {
            Ok(router) => router,
            Err(err) => panic!("{}", err),
        }
    }

    /// Lookup allows the manual lookup of handler for a specific method and path.
    ///
    /// The flag tells whether the path itself is known; see
    /// [`Node::resolve`](crate::tree::Node::resolve).
    /// ```rust
    /// use treerouter::{Config, Router};
    /// use hyper::{Request, Response, Body, Method};
    ///
    /// async fn home(_: Request<Body>) -> hyper::Result<Response<Body>> {
    ///     Ok(Response::new(Body::from("Welcome!")))
    /// }
    ///
    /// let router = Router::require(Config::default().add_route("GET", "/home", home));
    ///
    /// assert!(router.lookup(&Method::GET, "/home").0.is_some());
    /// assert!(matches!(router.lookup(&Method::POST, "/home"), (None, true)));
    /// assert!(matches!(router.lookup(&Method::GET, "/away"), (None, false)));
    /// ```
    pub fn lookup(&self, method: &hyper::Method, path: &str) -> (Option<&BoxedHandler>, bool) {
        self.tree.find(Method::from_http(method), path)
    }
}

#[doc(hidden)]
pub struct MakeRouterService(RouterService);

impl<T> Service<T> for MakeRouterService {
    type Response = RouterService;
    type Error = hyper::Error;
    type Future = future::Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, _: T) -> Self::Future {
        let service = self.0.clone();
        future::ok(service)
    }
}

#[doc(hidden)]
#[derive(Clone)]
pub struct RouterService(Arc<Router>);

impl RouterService {
    fn new(router: Router) -> Self {
        RouterService(Arc::new(router))
    }
}

impl Service<Request<Body>> for RouterService {
    type Response = Response<Body>;
    type Error = hyper::Error;
    type Future = ResponseFut;

    fn poll_ready(&mut self, _: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        self.0.serve(req)
    }
}

impl Router {
    /// Converts the `Router` into a `Service` which you can serve directly with `Hyper`.
    /// If you have an existing `Service` that you want to incorporate a `Router` into, see
    /// [`Router::serve`](crate::Router::serve).
    pub fn into_service(self) -> MakeRouterService {
        MakeRouterService(RouterService::new(self))
    }

    /// An asynchronous function from a `Request` to a `Response`. You will generally not need to use
    /// this function directly, and instead use
    /// [`Router::into_service`](crate::Router::into_service). However, it may be useful when
    /// incorporating the router into a larger service.
    ///
    /// Only the path of the request URI takes part in matching; the query
    /// string is ignored. The monitor is told about the outcome before the
    /// chosen handler runs.
    pub fn serve(&self, req: Request<Body>) -> ResponseFut {
        let method = Method::from_http(req.method());

        let handler = match self.tree.find(method, req.uri().path()) {
            (Some(handler), _) => {
                self.monitor.routed(&req);
                handler
            }
            (None, true) => {
                self.monitor.method_not_allowed(&req);
                &self.method_not_allowed
            }
            (None, false) => {
                self.monitor.not_found(&req);
                &self.not_found
            }
        };

        match self.recovery {
            Some(ref recovery) => recovery.invoke(&**handler, req),
            None => ResponseFutKind::Boxed(handler.handle(req)).into(),
        }
    }
}

pub struct ResponseFut {
    kind: ResponseFutKind,
}

impl From<ResponseFutKind> for ResponseFut {
    fn from(kind: ResponseFutKind) -> Self {
        Self { kind }
    }
}

pub(crate) enum ResponseFutKind {
    Boxed(HandlerFuture),
    Guarded(Guarded),
    Ready(Option<Response<Body>>),
}

impl Future for ResponseFut {
    type Output = hyper::Result<Response<Body>>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let ready = match self.kind {
            ResponseFutKind::Boxed(ref mut fut) => ready!(fut.as_mut().poll(cx)),
            ResponseFutKind::Guarded(ref mut fut) => ready!(Pin::new(fut).poll(cx)),
            ResponseFutKind::Ready(ref mut res) => Ok(res.take().unwrap_or_default()),
        };

        Poll::Ready(ready)
    }
}
