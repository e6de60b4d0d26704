//! Route descriptors and their textual form.
use crate::method::{parse_methods, Methods, DELIMITER};

use std::fmt;

/// A set of methods and a path pattern bound to a handler.
///
/// Routes are plain values; whether the pattern is well formed is only
/// checked when the route is added to a [`Node`](crate::tree::Node).
#[derive(Clone, PartialEq, Eq)]
pub struct Route<T> {
    methods: Methods,
    path: String,
    handler: T,
}

impl<T> Route<T> {
    pub fn new(methods: impl Into<Methods>, path: impl Into<String>, handler: T) -> Self {
        Self {
            methods: methods.into(),
            path: path.into(),
            handler,
        }
    }

    pub fn methods(&self) -> Methods {
        self.methods
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn handler(&self) -> &T {
        &self.handler
    }

    pub(crate) fn into_parts(self) -> (Methods, String, T) {
        (self.methods, self.path, self.handler)
    }
}

impl<T> fmt::Display for Route<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.methods, self.path)
    }
}

impl<T> fmt::Debug for Route<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Builds a route from a `|` delimited method list and a path.
/// ```rust
/// use treerouter::parse_route;
///
/// let route = parse_route("get|HEAD", " /document ", ());
/// assert_eq!(route.to_string(), "GET|HEAD /document");
/// ```
pub fn parse_route<T>(methods: &str, path: &str, handler: T) -> Route<T> {
    Route::new(parse_methods(methods), path.trim(), handler)
}

/// Builds one route per path in a `|` delimited path list, all sharing the
/// same methods and handler.
pub fn parse_routes<T: Clone>(methods: &str, paths: &str, handler: T) -> Vec<Route<T>> {
    let methods = parse_methods(methods);
    paths
        .trim()
        .split(DELIMITER)
        .map(|path| Route::new(methods, path.trim(), handler.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::Method;

    #[test]
    fn expands_paths() {
        let routes = parse_routes("GET|PUT", "/resource|/another/resource", ());
        assert_eq!(
            routes,
            vec![
                Route::new(Method::Get | Method::Put, "/resource", ()),
                Route::new(Method::Get | Method::Put, "/another/resource", ()),
            ]
        );
    }

    #[test]
    fn trims_paths() {
        let routes = parse_routes(
            "HEAD|OPTIONS",
            " \n\t  /Path/To/Document | \n\t /Document/* \t\n",
            7,
        );
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].path(), "/Path/To/Document");
        assert_eq!(routes[1].path(), "/Document/*");
        assert_eq!(routes[1].methods(), Method::Head | Method::Options);
        assert_eq!(*routes[1].handler(), 7);
    }

    #[test]
    fn unknown_methods_parse_to_nothing() {
        let route = parse_route("BAD-METHOD", "/", ());
        assert!(route.methods().is_empty());
        assert_eq!(route.to_string(), " /");
    }

    #[test]
    fn renders_methods_and_path() {
        let route = parse_route("GET|HEAD", "/document", ());
        assert_eq!(route.to_string(), "GET|HEAD /document");
        assert_eq!(format!("{:?}", route), route.to_string());
    }
}
