//! The menu-based breadcrumb builder.
//!
//! The host asks every registered [`BreadcrumbBuilder`] whether it
//! [`applies`](BreadcrumbBuilder::applies) to the current route and calls
//! [`build`](BreadcrumbBuilder::build) on the first that does.
//!
//! # Example
//!
//! ```
//! use menu_breadcrumb::*;
//!
//! struct Footer;
//!
//! impl MenuTreeProvider for Footer {
//!     fn current_route_tree_parameters(&self, menu: &str, _route: &CurrentRoute) -> Option<TreeParameters> {
//!         (menu == "footer").then(|| TreeParameters::with_active_trail(["products", "widgets"]))
//!     }
//!
//!     fn load(&self, _menu: &str, _parameters: &TreeParameters) -> Vec<MenuTreeNode> {
//!         vec![MenuTreeNode::new("products", "Products", RouteReference::new("products"))
//!             .active()
//!             .children(vec![
//!                 MenuTreeNode::new("widgets", "Widgets", RouteReference::new("widgets")).active(),
//!             ])]
//!     }
//! }
//!
//! let settings = Settings::new().with_menu("main", true, 0).with_menu("footer", true, 1);
//! let builder = MenuBasedBreadcrumbBuilder::new(settings, Footer, StaticSite::new("Acme"));
//! let route = CurrentRoute::new("widgets", "/widgets");
//!
//! assert!(builder.applies(&route));
//! let breadcrumb = builder.build(&route);
//! assert_eq!(breadcrumb.labels(), vec!["Home", "Products", "Widgets"]);
//! assert!(!breadcrumb.links()[2].is_linked());
//! ```

use crate::site::{SiteSettings, Translator, Untranslated};
use crate::trace_log;
use crate::{select_active_trail, Breadcrumb, BreadcrumbAssembler, CurrentRoute, MenuTreeProvider, Settings};

/// Path prefix of administrative pages.
pub const ADMIN_PATH_PREFIX: &str = "/admin";

/// A strategy for producing the breadcrumb of a route.
pub trait BreadcrumbBuilder {
    /// Whether this builder should produce the breadcrumb for `route`.
    fn applies(&self, route: &CurrentRoute) -> bool;

    /// Produce the breadcrumb for `route`.
    fn build(&self, route: &CurrentRoute) -> Breadcrumb;
}

/// Builds breadcrumbs from the active trail of configured menus.
///
/// Holds a settings snapshot taken at construction; it is never modified
/// afterwards, so [`build`](Self::build) is a pure function of the route
/// and what the provider returns.
pub struct MenuBasedBreadcrumbBuilder<P, S, T = Untranslated> {
    settings: Settings,
    provider: P,
    site: S,
    translator: T,
}

impl<P: MenuTreeProvider, S: SiteSettings> MenuBasedBreadcrumbBuilder<P, S> {
    /// Builder reading menus from `provider` and the site name from `site`.
    ///
    /// The "Home" label is left untranslated until
    /// [`with_translator`](Self::with_translator) is called.
    pub fn new(settings: Settings, provider: P, site: S) -> Self {
        Self {
            settings,
            provider,
            site,
            translator: Untranslated,
        }
    }
}

impl<P, S, T> MenuBasedBreadcrumbBuilder<P, S, T>
where
    P: MenuTreeProvider,
    S: SiteSettings,
    T: Translator,
{
    /// Use `translator` for the "Home" label.
    pub fn with_translator<T2: Translator>(self, translator: T2) -> MenuBasedBreadcrumbBuilder<P, S, T2> {
        MenuBasedBreadcrumbBuilder {
            settings: self.settings,
            provider: self.provider,
            site: self.site,
            translator,
        }
    }

    /// The settings snapshot this builder was created with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Whether the builder applies to a raw route path.
    ///
    /// False when `determine_menu` is off, or when `disable_admin_page` is on
    /// and `path` starts with [`ADMIN_PATH_PREFIX`].
    pub fn applies_to_path(&self, path: &str) -> bool {
        let applies = self.settings.determine_menu
            && (!self.settings.disable_admin_page || !path.starts_with(ADMIN_PATH_PREFIX));
        trace_log!("applies('{}') = {}", path, applies);
        applies
    }

    /// Whether the builder applies to `route`, judged by its path.
    pub fn applies(&self, route: &CurrentRoute) -> bool {
        self.applies_to_path(&route.path)
    }

    /// Breadcrumb for `route`: the trail of the first matching menu, with
    /// the home link and current page handled per the settings.
    pub fn build(&self, route: &CurrentRoute) -> Breadcrumb {
        let trail = select_active_trail(&self.settings, &self.provider, route);
        BreadcrumbAssembler::new(&self.settings, &self.site, &self.translator).assemble(trail)
    }
}

impl<P, S, T> BreadcrumbBuilder for MenuBasedBreadcrumbBuilder<P, S, T>
where
    P: MenuTreeProvider,
    S: SiteSettings,
    T: Translator,
{
    fn applies(&self, route: &CurrentRoute) -> bool {
        MenuBasedBreadcrumbBuilder::applies(self, route)
    }

    fn build(&self, route: &CurrentRoute) -> Breadcrumb {
        MenuBasedBreadcrumbBuilder::build(self, route)
    }
}
