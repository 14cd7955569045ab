//! Turning an extracted trail into the final breadcrumb.
//!
//! Applied in order:
//!
//! 1. An empty trail with `hide_on_single_item` gives an empty breadcrumb.
//! 2. Unless `remove_home`, a home link to `<front>` is prepended, labeled
//!    with the site name or the translated "Home".
//! 3. The last link (the current page) is taken off. With
//!    `append_page_title` it is put back, unlinked unless
//!    `append_page_url`. Otherwise it is dropped.
//!
//! The result always varies by [`URL_PATH_CONTEXT`].
//!
//! Nothing is deduplicated: a trail whose first link already points home
//! still gets the home link prepended.

use crate::breadcrumb::URL_PATH_CONTEXT;
use crate::site::{SiteSettings, Translator, HOME_LABEL};
use crate::{Breadcrumb, LinkEntry, RouteReference, Settings};

/// Applies the cosmetic settings to an active trail.
pub struct BreadcrumbAssembler<'a> {
    settings: &'a Settings,
    site: &'a dyn SiteSettings,
    translator: &'a dyn Translator,
}

impl<'a> BreadcrumbAssembler<'a> {
    pub fn new(
        settings: &'a Settings,
        site: &'a dyn SiteSettings,
        translator: &'a dyn Translator,
    ) -> Self {
        Self {
            settings,
            site,
            translator,
        }
    }

    /// Label of the home link under the current settings.
    pub fn home_label(&self) -> String {
        if self.settings.home_as_site_name {
            self.site.site_name()
        } else {
            self.translator.translate(HOME_LABEL)
        }
    }

    pub fn assemble(&self, mut trail: Vec<LinkEntry>) -> Breadcrumb {
        let mut breadcrumb = Breadcrumb::new();
        breadcrumb.add_cache_contexts([URL_PATH_CONTEXT]);

        if trail.is_empty() && self.settings.hide_on_single_item {
            return breadcrumb;
        }

        if !self.settings.remove_home {
            trail.insert(0, LinkEntry::new(self.home_label(), RouteReference::front()));
        }

        if let Some(mut current) = trail.pop() {
            if self.settings.append_page_title {
                if !self.settings.append_page_url {
                    current.unlink();
                }
                trail.push(current);
            }
        }

        breadcrumb.set_links(trail);
        breadcrumb
    }
}
