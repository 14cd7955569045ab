//! Test fixtures for breadcrumb building.
//!
//! [`FixtureMenuTree`] is an in-memory [`MenuTreeProvider`] that records
//! every query so tests can assert which menus were consulted.

#![allow(dead_code)]

use menu_breadcrumb::*;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// In-memory menus keyed by name.
#[derive(Default)]
pub struct FixtureMenuTree {
    menus: HashMap<String, (TreeParameters, Vec<MenuTreeNode>)>,
    denied: HashSet<String>,
    pub queried: RefCell<Vec<String>>,
    pub loaded: RefCell<Vec<String>>,
}

impl FixtureMenuTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a menu whose active trail is `trail` (root placeholder added).
    pub fn menu(mut self, name: &str, trail: &[&str], tree: Vec<MenuTreeNode>) -> Self {
        self.menus.insert(
            name.to_string(),
            (TreeParameters::with_active_trail(trail.iter().copied()), tree),
        );
        self
    }

    /// Hide the link with this id from the viewer.
    pub fn deny(mut self, id: &str) -> Self {
        self.denied.insert(id.to_string());
        self
    }
}

impl MenuTreeProvider for FixtureMenuTree {
    fn current_route_tree_parameters(
        &self,
        menu_name: &str,
        _route: &CurrentRoute,
    ) -> Option<TreeParameters> {
        self.queried.borrow_mut().push(menu_name.to_string());
        self.menus.get(menu_name).map(|(params, _)| params.clone())
    }

    fn load(&self, menu_name: &str, _parameters: &TreeParameters) -> Vec<MenuTreeNode> {
        self.loaded.borrow_mut().push(menu_name.to_string());
        self.menus
            .get(menu_name)
            .map(|(_, tree)| tree.clone())
            .unwrap_or_default()
    }

    fn transform(
        &self,
        tree: Vec<MenuTreeNode>,
        manipulators: &[TreeManipulator],
    ) -> Vec<MenuTreeNode> {
        apply_manipulators(
            tree,
            manipulators,
            &access_fn(|node| !self.denied.contains(&node.id)),
        )
    }
}

/// A link whose id, title and route name are all `name`.
pub fn link(name: &str) -> MenuTreeNode {
    MenuTreeNode::new(name, name, RouteReference::new(name))
}

/// The front page link.
pub fn front(title: &str) -> MenuTreeNode {
    MenuTreeNode::new("front", title, RouteReference::front())
}

/// Site settings for a site named "Acme Corp".
pub fn site() -> StaticSite {
    StaticSite::new("Acme Corp")
}

pub fn route(name: &str) -> CurrentRoute {
    CurrentRoute::new(name, format!("/{}", name))
}

/// `Products > Widgets` with `Widgets` as the current page.
pub fn footer_tree() -> Vec<MenuTreeNode> {
    vec![
        link("About"),
        link("Products").active().children(vec![
            link("Gadgets"),
            link("Widgets").active(),
        ]),
    ]
}

pub fn labels(breadcrumb: &Breadcrumb) -> Vec<&str> {
    breadcrumb.labels()
}
