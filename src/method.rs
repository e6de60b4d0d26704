//! HTTP methods and sets of methods.
//!
//! A route binds one or more methods at once, so the router works with
//! [`Methods`], a bit set over the nine [`Method`]s it understands. Sets are
//! rendered in a fixed canonical order joined by `|`:
//!
//! ```rust
//! use treerouter::{parse_methods, Method};
//!
//! let methods = parse_methods("patch | head|options");
//! assert!(methods.contains(Method::Head));
//! assert_eq!(methods.to_string(), "HEAD|OPTIONS|PATCH");
//! ```
use std::convert::Infallible;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

pub(crate) const DELIMITER: char = '|';

/// An HTTP method the router can bind a handler to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Connect,
    Options,
    Trace,
    Patch,
}

impl Method {
    /// Every method, in canonical order.
    pub const ALL: [Method; 9] = [
        Method::Get,
        Method::Head,
        Method::Post,
        Method::Put,
        Method::Delete,
        Method::Connect,
        Method::Options,
        Method::Trace,
        Method::Patch,
    ];

    /// The upper-case wire name of the method.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Connect => "CONNECT",
            Method::Options => "OPTIONS",
            Method::Trace => "TRACE",
            Method::Patch => "PATCH",
        }
    }

    /// Parses a single method name, ignoring surrounding whitespace and case.
    pub fn parse(token: &str) -> Option<Method> {
        let token = token.trim();
        Method::ALL
            .iter()
            .copied()
            .find(|method| method.as_str().eq_ignore_ascii_case(token))
    }

    /// Maps a request method. Extension methods have no counterpart.
    pub fn from_http(method: &hyper::Method) -> Option<Method> {
        match *method {
            hyper::Method::GET => Some(Method::Get),
            hyper::Method::HEAD => Some(Method::Head),
            hyper::Method::POST => Some(Method::Post),
            hyper::Method::PUT => Some(Method::Put),
            hyper::Method::DELETE => Some(Method::Delete),
            hyper::Method::CONNECT => Some(Method::Connect),
            hyper::Method::OPTIONS => Some(Method::Options),
            hyper::Method::TRACE => Some(Method::Trace),
            hyper::Method::PATCH => Some(Method::Patch),
            _ => None,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    fn bit(self) -> u16 {
        1 << self.index()
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of [`Method`]s.
///
/// The empty set is what an unrecognised method token parses to; it is
/// rejected when a route is added to the tree, not when it is parsed.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Methods(u16);

impl Methods {
    /// The empty set.
    pub const NONE: Methods = Methods(0);

    /// All nine methods.
    pub const ALL: Methods = Methods((1 << Method::ALL.len()) - 1);

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, method: Method) -> bool {
        self.0 & method.bit() != 0
    }

    /// Returns the union of both sets.
    pub fn union(self, other: Methods) -> Methods {
        Methods(self.0 | other.0)
    }

    pub fn insert(&mut self, method: Method) {
        self.0 |= method.bit();
    }

    /// Iterates over the members in canonical order.
    pub fn iter(self) -> impl Iterator<Item = Method> {
        Method::ALL
            .iter()
            .copied()
            .filter(move |method| self.contains(*method))
    }
}

impl From<Method> for Methods {
    fn from(method: Method) -> Self {
        Methods(method.bit())
    }
}

impl BitOr for Methods {
    type Output = Methods;

    fn bitor(self, rhs: Methods) -> Methods {
        self.union(rhs)
    }
}

impl BitOr<Method> for Methods {
    type Output = Methods;

    fn bitor(self, rhs: Method) -> Methods {
        self.union(rhs.into())
    }
}

impl BitOr for Method {
    type Output = Methods;

    fn bitor(self, rhs: Method) -> Methods {
        Methods::from(self).union(rhs.into())
    }
}

impl BitOrAssign<Method> for Methods {
    fn bitor_assign(&mut self, rhs: Method) {
        self.insert(rhs);
    }
}

impl FromStr for Methods {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_methods(s))
    }
}

impl fmt::Display for Methods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, method) in self.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", DELIMITER)?;
            }
            f.write_str(method.as_str())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Methods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Parses one method token. Unknown or empty tokens yield the empty set.
pub fn parse_method(token: &str) -> Methods {
    Method::parse(token).map_or(Methods::NONE, Methods::from)
}

/// Parses a `|` delimited list of method tokens into their union.
///
/// Unknown tokens contribute nothing.
pub fn parse_methods(value: &str) -> Methods {
    value
        .split(DELIMITER)
        .map(parse_method)
        .fold(Methods::NONE, Methods::union)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_method_lists() {
        assert_eq!(
            parse_methods("GET|PUT|OPTIONS"),
            Method::Get | Method::Put | Method::Options
        );
        assert_eq!(
            parse_methods("head | post  | trace"),
            Method::Head | Method::Post | Method::Trace
        );
        assert_eq!(
            parse_methods("\tconnect\n | \n\tunknown \n|\n delete"),
            Method::Connect | Method::Delete
        );
    }

    #[test]
    fn unknown_tokens_are_empty() {
        assert!(parse_method("BAD-METHOD").is_empty());
        assert!(parse_method("").is_empty());
        assert!(parse_methods("|  |nope").is_empty());
        assert_eq!(Methods::NONE.to_string(), "");
    }

    #[test]
    fn formats_in_canonical_order() {
        let methods = Method::Patch | Method::Head | Method::Options;
        assert_eq!(methods.to_string(), "HEAD|OPTIONS|PATCH");
        assert_eq!(format!("{:?}", methods), methods.to_string());
        assert_eq!(
            Methods::ALL.to_string(),
            "GET|HEAD|POST|PUT|DELETE|CONNECT|OPTIONS|TRACE|PATCH"
        );
    }

    #[test]
    fn every_subset_round_trips() {
        for bits in 1..(1u16 << Method::ALL.len()) {
            let subset = Methods(bits);
            let formatted = subset.to_string();
            assert_eq!(parse_methods(&formatted), subset);
            assert_eq!(parse_methods(&formatted).to_string(), formatted);
        }
    }

    #[test]
    fn maps_request_methods() {
        assert_eq!(Method::from_http(&hyper::Method::PATCH), Some(Method::Patch));
        let propfind = hyper::Method::from_bytes(b"PROPFIND").unwrap();
        assert_eq!(Method::from_http(&propfind), None);
    }

    #[test]
    fn set_operations() {
        let mut methods = Methods::NONE;
        assert!(methods.is_empty());
        methods |= Method::Trace;
        methods.insert(Method::Get);
        assert!(methods.contains(Method::Trace));
        assert!(!methods.contains(Method::Post));
        assert_eq!(methods.iter().collect::<Vec<_>>(), [Method::Get, Method::Trace]);
        assert_eq!("get|trace".parse::<Methods>(), Ok(methods));
    }
}
