use thiserror::Error;

/// Why a route could not be added to the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InsertError {
    /// The route does not name a single recognised method.
    #[error("the method specified for this route is not recognized")]
    UnknownMethod,
    /// The path is empty, lacks its leading slash or contains an empty segment.
    #[error("the path specified for this route is malformed")]
    MalformedPath,
    /// A segment contains something other than letters, digits, `.`, `-` or `_`.
    #[error("the path specified for this route contains invalid characters")]
    InvalidCharacters,
    /// A wildcard segment is not a lone `*` at the end of the path.
    #[error("the wildcard path specified must only contain a single asterisk '*'")]
    InvalidWildcard,
    /// One of the route's methods is already bound to the same path.
    #[error("the method and path specified for this route already exists")]
    RouteExists,
}

/// A route from a [`Config`](crate::Config) was rejected while building the router.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("cannot register route `{route}`: {kind}")]
pub struct RouteError {
    route: String,
    #[source]
    kind: InsertError,
}

impl RouteError {
    pub(crate) fn new(route: String, kind: InsertError) -> Self {
        Self { route, kind }
    }

    /// The offending route, rendered as `METHODS /path`.
    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn kind(&self) -> InsertError {
        self.kind
    }
}
