//! Menu trees and the provider that supplies them.
//!
//! Menus are owned by the host. This crate only reads them through
//! [`MenuTreeProvider`], which answers three questions per menu:
//!
//! 1. What is the active trail of the current route in this menu?
//!    ([`current_route_tree_parameters`](MenuTreeProvider::current_route_tree_parameters))
//! 2. What does the tree look like for those parameters?
//!    ([`load`](MenuTreeProvider::load))
//! 3. What is left after access filtering and sibling ordering?
//!    ([`transform`](MenuTreeProvider::transform))
//!
//! # Example
//!
//! ```
//! use menu_breadcrumb::{MenuTreeNode, RouteReference};
//!
//! let tree = vec![MenuTreeNode::new("products", "Products", RouteReference::new("products"))
//!     .active()
//!     .children(vec![
//!         MenuTreeNode::new("widgets", "Widgets", RouteReference::new("widgets")).active(),
//!         MenuTreeNode::new("gadgets", "Gadgets", RouteReference::new("gadgets")),
//!     ])];
//!
//! assert!(tree[0].has_children);
//! assert_eq!(tree[0].children.len(), 2);
//! ```

use crate::access;
use crate::{CurrentRoute, RouteReference};

/// One item of a menu tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTreeNode {
    /// Identifier of the menu link, unique within its menu.
    pub id: String,
    pub title: String,
    pub target: RouteReference,
    /// Ordering weight among siblings. Lower sorts first.
    pub weight: i32,
    pub in_active_trail: bool,
    /// Whether the link has children. The subtree itself may be empty when
    /// the provider did not load that deep.
    pub has_children: bool,
    pub children: Vec<MenuTreeNode>,
}

impl MenuTreeNode {
    pub fn new(id: impl Into<String>, title: impl Into<String>, target: RouteReference) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            target,
            weight: 0,
            in_active_trail: false,
            has_children: false,
            children: Vec::new(),
        }
    }

    pub fn weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    /// Mark the node as lying on the active trail.
    pub fn active(mut self) -> Self {
        self.in_active_trail = true;
        self
    }

    /// Set the subtree. `has_children` follows whether it is non-empty.
    pub fn children(mut self, children: Vec<MenuTreeNode>) -> Self {
        self.has_children = !children.is_empty();
        self.children = children;
        self
    }

    /// Override `has_children` independently of the loaded subtree.
    pub fn has_children(mut self, has_children: bool) -> Self {
        self.has_children = has_children;
        self
    }
}

/// Parameters describing how a menu relates to the current route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeParameters {
    /// Link ids from the menu root down to the current page's link. The
    /// first entry is the menu root placeholder, so a trail of length one
    /// means the menu has no link to the current page.
    pub active_trail: Vec<String>,
}

impl TreeParameters {
    /// Parameters with the root placeholder followed by `ids`.
    pub fn with_active_trail<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut active_trail = vec![String::new()];
        active_trail.extend(ids.into_iter().map(Into::into));
        Self { active_trail }
    }

    /// Number of entries in the active trail, root placeholder included.
    pub fn active_trail_len(&self) -> usize {
        self.active_trail.len()
    }

    /// Whether the menu actually leads to the current page.
    pub fn reaches_current_page(&self) -> bool {
        self.active_trail_len() > 1
    }
}

/// A transformation step applied to a loaded tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeManipulator {
    /// Drop links the current viewer may not access, with their subtrees.
    CheckAccess,
    /// Order siblings by weight, then title, then id, at every level.
    GenerateIndexAndSort,
}

/// The manipulators the breadcrumb builder asks for, in order.
pub const DEFAULT_MANIPULATORS: [TreeManipulator; 2] = [
    TreeManipulator::CheckAccess,
    TreeManipulator::GenerateIndexAndSort,
];

/// Source of menu trees.
///
/// Implementations are expected to be cheap to query repeatedly; the
/// builder asks for the parameters of every enabled menu in weight order
/// until one yields a trail.
pub trait MenuTreeProvider {
    /// Active-trail parameters for `menu_name` given the current route.
    ///
    /// `None` means the provider knows nothing about the menu; the menu is
    /// skipped.
    fn current_route_tree_parameters(
        &self,
        menu_name: &str,
        route: &CurrentRoute,
    ) -> Option<TreeParameters>;

    /// Load the raw tree of `menu_name`.
    fn load(&self, menu_name: &str, parameters: &TreeParameters) -> Vec<MenuTreeNode>;

    /// Apply `manipulators` in order.
    ///
    /// The default implementation allows every link through
    /// [`TreeManipulator::CheckAccess`]. Providers that know the viewer
    /// should override this, typically by calling
    /// [`apply_manipulators`](crate::apply_manipulators) with their own
    /// [`AccessCheck`](crate::AccessCheck).
    fn transform(
        &self,
        tree: Vec<MenuTreeNode>,
        manipulators: &[TreeManipulator],
    ) -> Vec<MenuTreeNode> {
        access::apply_manipulators(tree, manipulators, &access::AllowAll)
    }
}

impl<P: MenuTreeProvider + ?Sized> MenuTreeProvider for &P {
    fn current_route_tree_parameters(
        &self,
        menu_name: &str,
        route: &CurrentRoute,
    ) -> Option<TreeParameters> {
        (**self).current_route_tree_parameters(menu_name, route)
    }

    fn load(&self, menu_name: &str, parameters: &TreeParameters) -> Vec<MenuTreeNode> {
        (**self).load(menu_name, parameters)
    }

    fn transform(
        &self,
        tree: Vec<MenuTreeNode>,
        manipulators: &[TreeManipulator],
    ) -> Vec<MenuTreeNode> {
        (**self).transform(tree, manipulators)
    }
}
