//! # TreeRouter
//!
//! TreeRouter is a lightweight HTTP request router built on a segment trie.
//!
//! Routes bind one or more methods and a path pattern to a handler. A pattern is made of
//! `/` delimited segments, each of which is one of:
//!
//! ```ignore
//!  Syntax    Type
//!  name      static segment, matches exactly "name"
//!  :name     variable, matches any single non-empty segment
//!  *         wildcard, matches the rest of the path; must come last
//! ```
//!
//! ## Features
//!
//! **Structural precedence:** When several patterns could match a request, the most specific one
//! wins, segment by segment: static before variable before wildcard. Registration order never
//! matters, and `/users/new` can live next to `/users/:id` and `/users/*`.
//!
//! **404 or 405:** The router knows whether a path exists for *some* method, so a request for a
//! known resource with an unsupported method gets `405 Method Not Allowed` instead of `404 Not Found`.
//!
//! **Checked registration:** Malformed patterns, unknown methods and duplicate routes are reported
//! when the router is built, never at request time.
//!
//! **Panic recovery:** Opt in to a recovery callback and a panicking handler turns into a `500`
//! response and a [`Monitor`] notification.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use treerouter::{recovery_handler, Config, Router, TracingMonitor};
//! use hyper::{Request, Response, Body, Error};
//!
//! async fn create_user(_: Request<Body>) -> Result<Response<Body>, Error> {
//!     Ok(Response::new("created".into()))
//! }
//!
//! async fn user(req: Request<Body>) -> Result<Response<Body>, Error> {
//!     Ok(Response::new(format!("user at {}", req.uri().path()).into()))
//! }
//!
//! async fn profile(_: Request<Body>) -> Result<Response<Body>, Error> {
//!     Ok(Response::new("profile".into()))
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let router = Router::require(
//!         Config::default()
//!             .add_routes("PUT", "/users|/old/path/to/users", create_user)
//!             .add_route("GET|DELETE", "/users/:id", user)
//!             .add_route("POST", "/users/*", profile)
//!             .recovery(recovery_handler)
//!             .monitor(TracingMonitor),
//!     );
//!
//!     hyper::Server::bind(&([127, 0, 0, 1], 8080).into())
//!         .serve(router.into_service())
//!         .await;
//! }
//! ```
//!
//! ### Not Found Handler
//!
//! Requests that match no path are passed to [`Config::not_found()`], requests whose path exists
//! for other methods only to [`Config::method_not_allowed()`]. Both default to a plain-text status
//! response:
//!
//! ```rust
//! use treerouter::{Config, StatusHandler};
//! use hyper::StatusCode;
//!
//! let config = Config::default().not_found(StatusHandler(StatusCode::GONE));
//! ```

#![forbid(unsafe_code)]

mod config;
mod error;
mod handler;
mod method;
mod monitor;
mod recovery;
mod route;

#[doc(hidden)]
pub mod router;

pub mod tree;

#[doc(inline)]
pub use router::Router;

pub use config::Config;
pub use error::{InsertError, RouteError};
pub use handler::{BoxedHandler, Handler, HandlerFuture, StatusHandler};
pub use method::{parse_method, parse_methods, Method, Methods};
pub use monitor::{Monitor, NopMonitor, TracingMonitor};
pub use recovery::{panic_message, recovery_handler, RecoveryFn};
pub use route::{parse_route, parse_routes, Route};
