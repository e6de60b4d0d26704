//! The segment trie behind [`Router`](crate::Router).
//!
//! Every node stands for one `/` delimited segment of a path pattern. A node
//! has three kinds of children:
//! ```ignore
//!  Syntax    Child       Matches
//!  users     static      exactly the segment "users"
//!  :id       variable    any single non-empty segment
//!  *         wildcard    everything that is left, slashes included
//! ```
//!
//! Lookups try the children of a node in that order, so a static segment
//! always beats a variable one, which beats a wildcard:
//! ```ignore
//!  Routes:   GET /users/:id     GET /users/new     GET /users/*
//!
//!  /users/new             GET /users/new
//!  /users/42              GET /users/:id
//!  /users/42/friends      GET /users/*
//! ```
//!
//! A pattern ending in `/` is its own resource: `/docs` and `/docs/` are two
//! different routes.
use crate::error::InsertError;
use crate::method::{Method, Methods};
use crate::route::Route;

/// One handler per [`Method`], for the node a route terminates at.
#[derive(Clone, Debug)]
pub struct HandlerTable<T> {
    slots: [Option<T>; 9],
}

impl<T> Default for HandlerTable<T> {
    fn default() -> Self {
        Self {
            slots: Default::default(),
        }
    }
}

impl<T> HandlerTable<T> {
    pub fn get(&self, method: Method) -> Option<&T> {
        self.slots[method.index()].as_ref()
    }

    /// The methods that have a handler.
    pub fn allowed(&self) -> Methods {
        Method::ALL
            .iter()
            .copied()
            .filter(|method| self.slots[method.index()].is_some())
            .fold(Methods::NONE, |set, method| set | method)
    }

    /// Binds `handler` to every method in `methods`, or to none of them if
    /// any is already bound.
    pub fn insert(&mut self, methods: Methods, handler: T) -> Result<(), InsertError>
    where
        T: Clone,
    {
        if methods.iter().any(|method| self.slots[method.index()].is_some()) {
            return Err(InsertError::RouteExists);
        }

        for method in methods.iter() {
            self.slots[method.index()] = Some(handler.clone());
        }

        Ok(())
    }
}

/// A node of the routing tree. The root is a `Node` with an empty segment.
#[derive(Clone, Debug)]
pub struct Node<T> {
    segment: String,
    statics: Vec<Node<T>>,
    variable: Option<Box<Node<T>>>,
    wildcard: Option<Box<Node<T>>>,
    handlers: Option<HandlerTable<T>>,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self::new("")
    }
}

impl<T> Node<T> {
    fn new(segment: &str) -> Self {
        Self {
            segment: segment.to_owned(),
            statics: Vec::new(),
            variable: None,
            wildcard: None,
            handlers: None,
        }
    }

    /// Adds a route to the tree.
    ///
    /// Nothing is changed if an error is returned: nodes created for the
    /// route are only attached once everything below them was inserted.
    /// ```rust
    /// use treerouter::{parse_route, InsertError, Method};
    /// use treerouter::tree::Node;
    ///
    /// let mut tree = Node::default();
    /// tree.add(parse_route("GET", "/users/:id", "user")).unwrap();
    ///
    /// let err = tree.add(parse_route("GET", "/users/:name", "other"));
    /// assert_eq!(err, Err(InsertError::RouteExists));
    /// assert_eq!(tree.resolve(Method::Get, "/users/42"), (Some(&"user"), true));
    /// ```
    pub fn add(&mut self, route: Route<T>) -> Result<(), InsertError>
    where
        T: Clone,
    {
        let (methods, path, handler) = route.into_parts();

        if methods.is_empty() {
            return Err(InsertError::UnknownMethod);
        }

        // an empty remainder means "bind here", so the root has to be
        // guarded against an empty pattern up front
        if !path.starts_with('/') {
            return Err(InsertError::MalformedPath);
        }

        self.insert(&path, methods, handler)
    }

    fn insert(&mut self, pattern: &str, methods: Methods, handler: T) -> Result<(), InsertError>
    where
        T: Clone,
    {
        if pattern.is_empty() {
            return self
                .handlers
                .get_or_insert_with(HandlerTable::default)
                .insert(methods, handler);
        }

        let (segment, rest) = match pattern.strip_prefix('/') {
            Some(pattern) => split_segment(pattern),
            None => return Err(InsertError::MalformedPath),
        };

        // only the final segment may be empty: that is a trailing slash
        if segment.is_empty() && !rest.is_empty() {
            return Err(InsertError::MalformedPath);
        }

        if !is_valid_segment(segment) {
            return Err(InsertError::InvalidCharacters);
        }

        if segment.starts_with('*') {
            if segment.len() != 1 || !rest.is_empty() {
                return Err(InsertError::InvalidWildcard);
            }
            return insert_into_slot(&mut self.wildcard, segment, rest, methods, handler);
        }

        if segment.starts_with(':') {
            return insert_into_slot(&mut self.variable, segment, rest, methods, handler);
        }

        if let Some(child) = self.statics.iter_mut().find(|child| child.segment == segment) {
            return child.insert(rest, methods, handler);
        }

        let mut child = Node::new(segment);
        child.insert(rest, methods, handler)?;
        self.statics.push(child);
        Ok(())
    }

    /// Finds the handler bound to `method` for a request path.
    ///
    /// The flag is `true` when the path matched a registered resource, even if
    /// the method did not: `(None, true)` calls for a 405, `(None, false)` for
    /// a 404.
    pub fn resolve(&self, method: Method, path: &str) -> (Option<&T>, bool) {
        self.find(Some(method), path)
    }

    /// Like [`Node::resolve`], but for a method the router may not know.
    pub(crate) fn find(&self, method: Option<Method>, path: &str) -> (Option<&T>, bool) {
        if path.is_empty() {
            return match self.handlers {
                Some(ref table) => (method.and_then(|method| table.get(method)), true),
                None => (None, false),
            };
        }

        let (segment, rest) = match path.strip_prefix('/') {
            Some(path) => split_segment(path),
            None => return (None, false),
        };

        let mut exists = false;

        if let Some(child) = self.statics.iter().find(|child| child.segment == segment) {
            match child.find(method, rest) {
                (Some(handler), _) => return (Some(handler), true),
                (None, found) => exists |= found,
            }
        }

        if !segment.is_empty() {
            if let Some(ref child) = self.variable {
                match child.find(method, rest) {
                    (Some(handler), _) => return (Some(handler), true),
                    (None, found) => exists |= found,
                }
            }
        }

        match self.wildcard {
            Some(ref wildcard) => {
                let (handler, found) = wildcard.find(method, "");
                (handler, exists || found)
            }
            None => (None, exists),
        }
    }
}

fn insert_into_slot<T: Clone>(
    slot: &mut Option<Box<Node<T>>>,
    segment: &str,
    rest: &str,
    methods: Methods,
    handler: T,
) -> Result<(), InsertError> {
    match slot {
        Some(child) => child.insert(rest, methods, handler),
        None => {
            let mut child = Node::new(segment);
            child.insert(rest, methods, handler)?;
            *slot = Some(Box::new(child));
            Ok(())
        }
    }
}

// Splits `a/b/c` into `a` and `/b/c`.
fn split_segment(path: &str) -> (&str, &str) {
    match path.find('/') {
        Some(i) => path.split_at(i),
        None => (path, ""),
    }
}

fn is_valid_segment(segment: &str) -> bool {
    let body = segment
        .strip_prefix(&[':', '*'][..])
        .unwrap_or(segment);

    body.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
}
