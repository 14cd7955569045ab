//! Site collaborators used when labeling the home link.
//!
//! The builder does not reach into global site state. The host passes in a
//! [`SiteSettings`] for the site name and a [`Translator`] for the "Home"
//! label.

use std::collections::HashMap;

/// Untranslated label of the home link.
pub const HOME_LABEL: &str = "Home";

/// Read access to site-wide settings.
pub trait SiteSettings {
    fn site_name(&self) -> String;
}

/// Translates interface strings into the current language.
pub trait Translator {
    fn translate(&self, source: &str) -> String;
}

/// Site settings backed by a fixed name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticSite {
    name: String,
}

impl StaticSite {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl SiteSettings for StaticSite {
    fn site_name(&self) -> String {
        self.name.clone()
    }
}

/// Translator that returns strings unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Untranslated;

impl Translator for Untranslated {
    fn translate(&self, source: &str) -> String {
        source.to_string()
    }
}

/// Translator backed by a lookup table. Unknown strings pass through.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    strings: HashMap<String, String>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, source: impl Into<String>, translation: impl Into<String>) -> Self {
        self.strings.insert(source.into(), translation.into());
        self
    }
}

impl Translator for TranslationTable {
    fn translate(&self, source: &str) -> String {
        self.strings
            .get(source)
            .cloned()
            .unwrap_or_else(|| source.to_string())
    }
}

impl<S: SiteSettings + ?Sized> SiteSettings for &S {
    fn site_name(&self) -> String {
        (**self).site_name()
    }
}

impl<T: Translator + ?Sized> Translator for &T {
    fn translate(&self, source: &str) -> String {
        (**self).translate(source)
    }
}
