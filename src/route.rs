//! Route references and the current route.
//!
//! Menu links never hold raw URLs. They point at a named route plus its
//! [`RouteParams`], and the host turns that into a URL when rendering.
//!
//! [`FRONT_ROUTE`] (`<front>`) is reserved for the site's front page. It is
//! left out of extracted trails and used as the target of the home link.
//! A segment that links nowhere is a [`LinkEntry`](crate::LinkEntry)
//! without a target.

use crate::RouteParams;
use std::fmt;

/// Route name of the site front page.
pub const FRONT_ROUTE: &str = "<front>";

/// Target of a menu link: a route name plus parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteReference {
    /// Route name, e.g. `entity.node.canonical` or `<front>`.
    pub name: String,
    /// Parameters used to build the route's URL.
    pub params: RouteParams,
}

impl RouteReference {
    /// Reference a route with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: RouteParams::new(),
        }
    }

    /// Reference a route with parameters.
    pub fn with_params(name: impl Into<String>, params: RouteParams) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// The front page marker.
    pub fn front() -> Self {
        Self::new(FRONT_ROUTE)
    }

    /// Whether this reference is the front page marker.
    pub fn is_front(&self) -> bool {
        self.name == FRONT_ROUTE
    }
}

impl fmt::Display for RouteReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.is_empty() {
            return write!(f, "{}", self.name);
        }
        let params = self
            .params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}{{{}}}", self.name, params)
    }
}

/// The route the host is currently rendering.
///
/// Handed to [`applies`](crate::MenuBasedBreadcrumbBuilder::applies) and
/// [`build`](crate::MenuBasedBreadcrumbBuilder::build), and passed through to
/// the [`MenuTreeProvider`](crate::MenuTreeProvider) so it can work out the
/// active trail of each menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentRoute {
    /// Route name, e.g. `entity.node.canonical`.
    pub name: String,
    /// Path pattern of the route, e.g. `/node/{node}` or `/admin/structure`.
    pub path: String,
    /// Parameters the route was matched with.
    pub params: RouteParams,
}

impl CurrentRoute {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            params: RouteParams::new(),
        }
    }

    pub fn with_params(mut self, params: RouteParams) -> Self {
        self.params = params;
        self
    }
}
