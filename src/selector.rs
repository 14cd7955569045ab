//! Choosing the menu the breadcrumb is taken from.
//!
//! Menus are tried by ascending weight. The first enabled menu whose
//! active trail reaches the current page and yields at least one link
//! wins; later menus are never loaded.

use crate::tree::DEFAULT_MANIPULATORS;
use crate::{debug_log, trace_log};
use crate::{extract_active_trail, CurrentRoute, LinkEntry, MenuTreeProvider, Settings};

/// Active trail of the current route as links, or empty when no configured
/// menu leads to it.
pub fn select_active_trail<P>(settings: &Settings, provider: &P, route: &CurrentRoute) -> Vec<LinkEntry>
where
    P: MenuTreeProvider + ?Sized,
{
    for menu in settings.menus_by_weight() {
        let menu_name = menu.menu_name.as_str();
        if !menu.enabled {
            trace_log!("Menu '{}' skipped: disabled", menu_name);
            continue;
        }

        let Some(parameters) = provider.current_route_tree_parameters(menu_name, route) else {
            debug_log!("Menu '{}' skipped: no tree parameters", menu_name);
            continue;
        };
        if !parameters.reaches_current_page() {
            trace_log!(
                "Menu '{}' skipped: active trail length {}",
                menu_name,
                parameters.active_trail_len()
            );
            continue;
        }

        let tree = provider.load(menu_name, &parameters);
        let tree = provider.transform(tree, &DEFAULT_MANIPULATORS);
        let links = extract_active_trail(&tree);

        if !links.is_empty() {
            debug_log!(
                "Menu '{}' selected for route '{}' ({} links)",
                menu_name,
                route.name,
                links.len()
            );
            return links;
        }
        debug_log!("Menu '{}' yielded no visible trail", menu_name);
    }

    Vec::new()
}
