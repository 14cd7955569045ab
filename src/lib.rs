//! # menu-breadcrumb
//!
//! Breadcrumbs taken from the active trail of navigation menus instead of
//! from the URL path.
//!
//! A site usually has several menus (main navigation, footer, account
//! links). For the page being rendered, the builder tries each configured
//! menu by weight, takes the first one that leads to the page, and turns
//! the chain of active links into a breadcrumb:
//!
//! ```text
//! Settings ──► applies(route)?
//!                 │
//!                 ▼
//!          select_active_trail ──► MenuTreeProvider (per menu, by weight)
//!                 │
//!                 ▼
//!          extract_active_trail (root → leaf, <front> skipped)
//!                 │
//!                 ▼
//!          BreadcrumbAssembler (home link, current page) ──► Breadcrumb
//! ```
//!
//! Menu storage, access rules and rendering stay with the host. It plugs
//! them in through [`MenuTreeProvider`], [`AccessCheck`], [`SiteSettings`]
//! and [`Translator`].
//!
//! # Logging
//!
//! Diagnostics go through `log` (default feature) or `tracing`.

pub mod access;
pub mod assembler;
pub mod breadcrumb;
pub mod builder;
pub mod config;
pub mod error;
pub mod logging;
pub mod params;
pub mod route;
pub mod selector;
pub mod site;
pub mod trail;
pub mod tree;

pub use access::{
    access_fn, apply_manipulators, check_access, generate_index_and_sort, AccessCheck, AllowAll,
    FnAccessCheck,
};
pub use assembler::BreadcrumbAssembler;
pub use breadcrumb::{Breadcrumb, LinkEntry, URL_PATH_CONTEXT};
pub use builder::{BreadcrumbBuilder, MenuBasedBreadcrumbBuilder, ADMIN_PATH_PREFIX};
pub use config::{MenuConfigEntry, Settings, SETTINGS_KEY};
pub use error::ConfigError;
pub use params::RouteParams;
pub use route::{CurrentRoute, RouteReference, FRONT_ROUTE};
pub use selector::select_active_trail;
pub use site::{SiteSettings, StaticSite, TranslationTable, Translator, Untranslated, HOME_LABEL};
pub use trail::extract_active_trail;
pub use tree::{MenuTreeNode, MenuTreeProvider, TreeManipulator, TreeParameters, DEFAULT_MANIPULATORS};
