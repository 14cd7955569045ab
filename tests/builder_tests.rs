//! End-to-end breadcrumb building against in-memory menus.

mod common;

use common::*;
use menu_breadcrumb::*;

fn main_footer_settings() -> Settings {
    Settings::new()
        .with_menu("main", true, 0)
        .with_menu("footer", true, 1)
}

#[test]
fn test_footer_selected_when_main_does_not_match() {
    let menus = FixtureMenuTree::new()
        .menu("main", &[], vec![link("Blog").active()])
        .menu("footer", &["products", "widgets"], footer_tree());
    let builder = MenuBasedBreadcrumbBuilder::new(main_footer_settings(), &menus, site());

    let breadcrumb = builder.build(&route("widgets"));

    assert_eq!(labels(&breadcrumb), vec!["Home", "Products", "Widgets"]);
    assert_eq!(*menus.queried.borrow(), vec!["main", "footer"]);
    assert_eq!(*menus.loaded.borrow(), vec!["footer"]);
}

#[test]
fn test_first_matching_menu_wins_without_merging() {
    let menus = FixtureMenuTree::new()
        .menu("main", &["blog"], vec![link("Blog").active()])
        .menu("footer", &["products", "widgets"], footer_tree());
    let builder = MenuBasedBreadcrumbBuilder::new(main_footer_settings(), &menus, site());

    let breadcrumb = builder.build(&route("blog"));

    assert_eq!(labels(&breadcrumb), vec!["Home", "Blog"]);
    assert_eq!(*menus.queried.borrow(), vec!["main"]);
}

#[test]
fn test_home_link_points_to_front() {
    let menus = FixtureMenuTree::new().menu("footer", &["products", "widgets"], footer_tree());
    let builder = MenuBasedBreadcrumbBuilder::new(main_footer_settings(), &menus, site());

    let breadcrumb = builder.build(&route("widgets"));

    assert_eq!(
        breadcrumb.links()[0],
        LinkEntry::new("Home", RouteReference::front())
    );
    assert_eq!(
        breadcrumb.links()[1],
        LinkEntry::new("Products", RouteReference::new("Products"))
    );
}

#[test]
fn test_current_page_unlinked_by_default() {
    let menus = FixtureMenuTree::new().menu("footer", &["products", "widgets"], footer_tree());
    let builder = MenuBasedBreadcrumbBuilder::new(main_footer_settings(), &menus, site());

    let breadcrumb = builder.build(&route("widgets"));
    let last = breadcrumb.links().last().unwrap();

    assert_eq!(last.label, "Widgets");
    assert_eq!(last.target, None);
}

#[test]
fn test_append_page_url_keeps_current_link() {
    let menus = FixtureMenuTree::new().menu("footer", &["products", "widgets"], footer_tree());
    let settings = main_footer_settings().with_append_page_url(true);
    let builder = MenuBasedBreadcrumbBuilder::new(settings, &menus, site());

    let breadcrumb = builder.build(&route("widgets"));

    assert_eq!(
        breadcrumb.links().last(),
        Some(&LinkEntry::new("Widgets", RouteReference::new("Widgets")))
    );
}

#[test]
fn test_current_page_dropped_without_page_title() {
    let menus = FixtureMenuTree::new().menu("footer", &["products", "widgets"], footer_tree());
    let settings = main_footer_settings().with_append_page_title(false);
    let builder = MenuBasedBreadcrumbBuilder::new(settings, &menus, site());

    let breadcrumb = builder.build(&route("widgets"));

    assert_eq!(labels(&breadcrumb), vec!["Home", "Products"]);
}

#[test]
fn test_site_name_and_translation() {
    let menus = FixtureMenuTree::new().menu("footer", &["products", "widgets"], footer_tree());

    let named = MenuBasedBreadcrumbBuilder::new(
        main_footer_settings().with_home_as_site_name(true),
        &menus,
        site(),
    );
    assert_eq!(named.build(&route("widgets")).links()[0].label, "Acme Corp");

    let translated = MenuBasedBreadcrumbBuilder::new(main_footer_settings(), &menus, site())
        .with_translator(TranslationTable::new().with("Home", "Startseite"));
    assert_eq!(
        translated.build(&route("widgets")).links()[0].label,
        "Startseite"
    );
}

#[test]
fn test_hide_on_single_item_without_match() {
    let menus = FixtureMenuTree::new().menu("main", &[], vec![link("Blog").active()]);
    let settings = main_footer_settings().with_hide_on_single_item(true);
    let builder = MenuBasedBreadcrumbBuilder::new(settings, &menus, site());

    let breadcrumb = builder.build(&route("contact"));

    assert!(breadcrumb.is_empty());
    assert!(breadcrumb.has_cache_context(URL_PATH_CONTEXT));
}

#[test]
fn test_front_page_in_trail_is_not_duplicated_as_interior_node() {
    let tree = vec![front("Start")
        .active()
        .children(vec![link("About").active().children(vec![link("Team").active()])])];
    let menus = FixtureMenuTree::new().menu("main", &["front", "about", "team"], tree);
    let builder = MenuBasedBreadcrumbBuilder::new(main_footer_settings(), &menus, site());

    let breadcrumb = builder.build(&route("team"));

    assert_eq!(labels(&breadcrumb), vec!["Home", "About", "Team"]);
}

#[test]
fn test_inaccessible_link_removes_its_branch() {
    let menus = FixtureMenuTree::new()
        .menu("main", &["products", "widgets"], footer_tree())
        .deny("Products")
        .menu(
            "footer",
            &["widgets"],
            vec![link("Widgets").active()],
        );
    let builder = MenuBasedBreadcrumbBuilder::new(main_footer_settings(), &menus, site());

    let breadcrumb = builder.build(&route("widgets"));

    // Main yields nothing once Products is hidden, so footer is used.
    assert_eq!(labels(&breadcrumb), vec!["Home", "Widgets"]);
    assert_eq!(*menus.loaded.borrow(), vec!["main", "footer"]);
}

#[test]
fn test_cache_context_always_present() {
    let menus = FixtureMenuTree::new().menu("footer", &["products", "widgets"], footer_tree());
    let builder = MenuBasedBreadcrumbBuilder::new(main_footer_settings(), &menus, site());

    let contexts: Vec<String> = builder
        .build(&route("widgets"))
        .cache_contexts()
        .map(String::from)
        .collect();
    assert_eq!(contexts, vec!["url.path".to_string()]);
}

#[test]
fn test_build_is_idempotent() {
    let menus = FixtureMenuTree::new()
        .menu("main", &[], vec![link("Blog").active()])
        .menu("footer", &["products", "widgets"], footer_tree());
    let builder = MenuBasedBreadcrumbBuilder::new(main_footer_settings(), &menus, site());
    let current = route("widgets");

    let first = builder.build(&current);
    let second = builder.build(&current);

    assert_eq!(first, second);
    assert_eq!(builder.settings(), &main_footer_settings());
}

#[test]
fn test_applicability_gate() {
    let menus = FixtureMenuTree::new();
    let builder = MenuBasedBreadcrumbBuilder::new(main_footer_settings(), &menus, site());

    assert!(builder.applies(&route("widgets")));
    assert!(!builder.applies(&CurrentRoute::new("system.admin_content", "/admin/content")));

    let everywhere = MenuBasedBreadcrumbBuilder::new(
        main_footer_settings().with_disable_admin_page(false),
        &menus,
        site(),
    );
    assert!(everywhere.applies(&CurrentRoute::new("system.admin_content", "/admin/content")));

    let off = MenuBasedBreadcrumbBuilder::new(
        main_footer_settings().with_determine_menu(false),
        &menus,
        site(),
    );
    assert!(!off.applies(&route("widgets")));
}

#[test]
fn test_host_picks_first_applicable_builder() {
    let menus = FixtureMenuTree::new().menu("footer", &["products", "widgets"], footer_tree());
    let disabled = MenuBasedBreadcrumbBuilder::new(
        main_footer_settings().with_determine_menu(false),
        &menus,
        site(),
    );
    let enabled = MenuBasedBreadcrumbBuilder::new(main_footer_settings(), &menus, site());
    let builders: Vec<&dyn BreadcrumbBuilder> = vec![&disabled, &enabled];
    let current = route("widgets");

    let breadcrumb = builders
        .iter()
        .find(|b| b.applies(&current))
        .map(|b| b.build(&current))
        .unwrap();

    assert_eq!(labels(&breadcrumb), vec!["Home", "Products", "Widgets"]);
}
