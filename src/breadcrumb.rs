//! Breadcrumb output types.

use crate::RouteReference;
use std::collections::BTreeSet;

/// Cache context that varies a result by the current URL path.
pub const URL_PATH_CONTEXT: &str = "url.path";

/// One labeled segment of a breadcrumb.
///
/// A `None` target renders as plain text instead of a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub label: String,
    pub target: Option<RouteReference>,
}

impl LinkEntry {
    /// A clickable segment.
    pub fn new(label: impl Into<String>, target: RouteReference) -> Self {
        Self {
            label: label.into(),
            target: Some(target),
        }
    }

    /// A plain-text segment.
    pub fn plain(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: None,
        }
    }

    pub fn is_linked(&self) -> bool {
        self.target.is_some()
    }

    /// Drop the target, leaving a plain-text segment.
    pub fn unlink(&mut self) {
        self.target = None;
    }
}

/// An ordered list of links plus the cache contexts it depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breadcrumb {
    links: Vec<LinkEntry>,
    cache_contexts: BTreeSet<String>,
}

impl Breadcrumb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge cache contexts into the set. Duplicates are ignored.
    pub fn add_cache_contexts<I, S>(&mut self, contexts: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cache_contexts
            .extend(contexts.into_iter().map(Into::into));
        self
    }

    /// Replace the links.
    pub fn set_links(&mut self, links: Vec<LinkEntry>) -> &mut Self {
        self.links = links;
        self
    }

    pub fn links(&self) -> &[LinkEntry] {
        &self.links
    }

    /// Cache contexts in sorted order.
    pub fn cache_contexts(&self) -> impl Iterator<Item = &str> {
        self.cache_contexts.iter().map(String::as_str)
    }

    pub fn has_cache_context(&self, context: &str) -> bool {
        self.cache_contexts.contains(context)
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Labels in order, mostly useful in logs and assertions.
    pub fn labels(&self) -> Vec<&str> {
        self.links.iter().map(|l| l.label.as_str()).collect()
    }
}
