//! Access filtering and sibling ordering for menu trees.
//!
//! These are the two [`TreeManipulator`] steps a provider applies before
//! the trail is extracted. Whether a viewer may see a link is decided by an
//! [`AccessCheck`]; this module only prunes the tree according to it.
//!
//! | Check | Result |
//! |-------|--------|
//! | [`AllowAll`] | every link is kept |
//! | [`access_fn`] | closure decides per link |
//!
//! # Example
//!
//! ```
//! use menu_breadcrumb::{access_fn, check_access, MenuTreeNode, RouteReference};
//!
//! let tree = vec![
//!     MenuTreeNode::new("public", "Public", RouteReference::new("public")),
//!     MenuTreeNode::new("staff", "Staff", RouteReference::new("staff.dashboard")),
//! ];
//!
//! let visible = check_access(tree, &access_fn(|node| !node.target.name.starts_with("staff")));
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].id, "public");
//! ```

use crate::tree::{MenuTreeNode, TreeManipulator};

/// Decides whether the current viewer may see a menu link.
pub trait AccessCheck {
    fn is_allowed(&self, node: &MenuTreeNode) -> bool;
}

/// Access check that allows every link.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl AccessCheck for AllowAll {
    fn is_allowed(&self, _node: &MenuTreeNode) -> bool {
        true
    }
}

/// Create an access check from a closure.
pub const fn access_fn<F>(f: F) -> FnAccessCheck<F>
where
    F: Fn(&MenuTreeNode) -> bool,
{
    FnAccessCheck { f }
}

/// Access check created from a closure.
pub struct FnAccessCheck<F> {
    f: F,
}

impl<F> AccessCheck for FnAccessCheck<F>
where
    F: Fn(&MenuTreeNode) -> bool,
{
    fn is_allowed(&self, node: &MenuTreeNode) -> bool {
        (self.f)(node)
    }
}

/// Remove every node `access` rejects, together with its subtree.
pub fn check_access(tree: Vec<MenuTreeNode>, access: &dyn AccessCheck) -> Vec<MenuTreeNode> {
    tree.into_iter()
        .filter(|node| access.is_allowed(node))
        .map(|mut node| {
            node.children = check_access(std::mem::take(&mut node.children), access);
            node
        })
        .collect()
}

/// Sort siblings by `(weight, title, id)` at every level.
pub fn generate_index_and_sort(mut tree: Vec<MenuTreeNode>) -> Vec<MenuTreeNode> {
    tree.sort_by(|a, b| {
        a.weight
            .cmp(&b.weight)
            .then_with(|| a.title.cmp(&b.title))
            .then_with(|| a.id.cmp(&b.id))
    });
    for node in &mut tree {
        node.children = generate_index_and_sort(std::mem::take(&mut node.children));
    }
    tree
}

/// Run `manipulators` over `tree` in order.
pub fn apply_manipulators(
    tree: Vec<MenuTreeNode>,
    manipulators: &[TreeManipulator],
    access: &dyn AccessCheck,
) -> Vec<MenuTreeNode> {
    manipulators
        .iter()
        .fold(tree, |tree, manipulator| match manipulator {
            TreeManipulator::CheckAccess => check_access(tree, access),
            TreeManipulator::GenerateIndexAndSort => generate_index_and_sort(tree),
        })
}
