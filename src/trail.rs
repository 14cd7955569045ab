//! Active trail extraction.
//!
//! Walks a transformed menu tree and collects the nodes marked as lying on
//! the active trail, root to leaf, as [`LinkEntry`] values:
//!
//! ```text
//! Products        (active)   -> "Products"
//!   Widgets       (active)   -> "Widgets"
//!     Blue widget (active)   -> "Blue widget"
//!   Gadgets                  (skipped with its subtree)
//! ```
//!
//! The front page link is never emitted, even when it sits on the trail.
//! Whether a home link appears is up to the assembler.

use crate::{LinkEntry, MenuTreeNode};

/// Collect the active trail of `tree` as links, root first.
pub fn extract_active_trail(tree: &[MenuTreeNode]) -> Vec<LinkEntry> {
    let mut trail = Vec::new();
    collect(tree, &mut trail);
    trail
}

fn collect(tree: &[MenuTreeNode], trail: &mut Vec<LinkEntry>) {
    for node in tree.iter().filter(|node| node.in_active_trail) {
        if !node.target.is_front() {
            trail.push(LinkEntry::new(node.title.clone(), node.target.clone()));
        }
        if node.has_children {
            collect(&node.children, trail);
        }
    }
}
