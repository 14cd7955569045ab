//! Route parameters attached to a menu link target.
//!
//! A menu link points at a named route plus the parameters needed to build
//! its URL, e.g. route `entity.node.canonical` with `node = 42`. Parameters
//! are kept in key order so two references to the same route compare equal
//! regardless of how they were assembled.
//!
//! # Example
//!
//! ```
//! use menu_breadcrumb::RouteParams;
//!
//! let params = RouteParams::new().with("node", "42");
//! assert_eq!(params.get("node"), Some("42"));
//! assert_eq!(params.len(), 1);
//! ```

use std::collections::BTreeMap;

/// Named parameters of a route, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RouteParams {
    params: BTreeMap<String, String>,
}

impl RouteParams {
    /// Create empty route parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get a parameter value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Insert or overwrite a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    /// Iterate over all `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Return `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Return the number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }
}
