//! Builder settings.
//!
//! [`Settings`] mirrors the persisted `menu_breadcrumb.settings` document:
//!
//! ```yaml
//! determine_menu: true
//! disable_admin_page: true
//! hide_on_single_item: false
//! remove_home: false
//! home_as_site_name: false
//! append_page_title: true
//! append_page_url: false
//! menu_breadcrumb_menus:
//!   main: { enabled: true, weight: 0 }
//!   footer: { enabled: true, weight: 1 }
//! ```
//!
//! The document may also be nested under a top-level
//! `menu_breadcrumb.settings` key. Missing fields take their defaults.
//! Menus keep their document order, which breaks ties between equal
//! weights.
//!
//! # Example
//!
//! ```
//! use menu_breadcrumb::Settings;
//!
//! let settings = Settings::from_yaml_str(
//!     "menu_breadcrumb_menus:\n  main: { enabled: true, weight: 5 }\n  footer: { enabled: true }\n",
//! )
//! .unwrap();
//!
//! let order: Vec<&str> = settings.menus_by_weight().iter().map(|m| m.menu_name.as_str()).collect();
//! assert_eq!(order, vec!["footer", "main"]);
//! ```

use crate::error::ConfigError;
use crate::warn_log;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// Key the settings are stored under in a wrapped document.
pub const SETTINGS_KEY: &str = "menu_breadcrumb.settings";

/// One menu considered when looking for an active trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuConfigEntry {
    pub menu_name: String,
    pub enabled: bool,
    /// Lower weights are tried first.
    pub weight: i32,
}

impl MenuConfigEntry {
    pub fn new(menu_name: impl Into<String>, enabled: bool, weight: i32) -> Self {
        Self {
            menu_name: menu_name.into(),
            enabled,
            weight,
        }
    }
}

/// Settings of a [`MenuBasedBreadcrumbBuilder`](crate::MenuBasedBreadcrumbBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Master switch. When off the builder never applies.
    pub determine_menu: bool,
    /// Do not apply on paths under `/admin`.
    pub disable_admin_page: bool,
    /// Candidate menus, in configured order.
    #[serde(deserialize_with = "deserialize_menus")]
    pub menu_breadcrumb_menus: Vec<MenuConfigEntry>,
    /// Return no links at all when no menu matched.
    pub hide_on_single_item: bool,
    /// Do not prepend the home link.
    pub remove_home: bool,
    /// Label the home link with the site name instead of "Home".
    pub home_as_site_name: bool,
    /// Keep the current page as the last segment.
    pub append_page_title: bool,
    /// Keep the current page's segment clickable.
    pub append_page_url: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            determine_menu: true,
            disable_admin_page: true,
            menu_breadcrumb_menus: Vec::new(),
            hide_on_single_item: false,
            remove_home: false,
            home_as_site_name: false,
            append_page_title: true,
            append_page_url: false,
        }
    }
}

impl Settings {
    /// Default settings with no menus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate settings from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let mut doc: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        let wrapped = doc.as_mapping_mut().and_then(|m| m.remove(SETTINGS_KEY));
        if let Some(inner) = wrapped {
            doc = inner;
        }
        if doc.is_null() {
            doc = serde_yaml::Value::Mapping(serde_yaml::Mapping::new());
        }
        let settings: Settings = serde_yaml::from_value(doc)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a settings file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Reject empty or duplicated menu names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for menu in &self.menu_breadcrumb_menus {
            if menu.menu_name.trim().is_empty() {
                return Err(ConfigError::InvalidConfig(
                    "menu name must not be empty".to_string(),
                ));
            }
            if !seen.insert(menu.menu_name.as_str()) {
                return Err(ConfigError::InvalidConfig(format!(
                    "menu '{}' is configured more than once",
                    menu.menu_name
                )));
            }
        }
        Ok(())
    }

    /// Menus ordered by ascending weight. Equal weights keep configured order.
    pub fn menus_by_weight(&self) -> Vec<&MenuConfigEntry> {
        let mut menus: Vec<&MenuConfigEntry> = self.menu_breadcrumb_menus.iter().collect();
        menus.sort_by_key(|m| m.weight);
        menus
    }

    /// Look up a menu entry by name.
    pub fn menu(&self, menu_name: &str) -> Option<&MenuConfigEntry> {
        self.menu_breadcrumb_menus
            .iter()
            .find(|m| m.menu_name == menu_name)
    }

    /// Add a menu, or update it in place if already present.
    pub fn with_menu(mut self, menu_name: impl Into<String>, enabled: bool, weight: i32) -> Self {
        let entry = MenuConfigEntry::new(menu_name, enabled, weight);
        match self
            .menu_breadcrumb_menus
            .iter_mut()
            .find(|m| m.menu_name == entry.menu_name)
        {
            Some(existing) => *existing = entry,
            None => self.menu_breadcrumb_menus.push(entry),
        }
        self
    }

    pub fn with_determine_menu(mut self, value: bool) -> Self {
        self.determine_menu = value;
        self
    }

    pub fn with_disable_admin_page(mut self, value: bool) -> Self {
        self.disable_admin_page = value;
        self
    }

    pub fn with_hide_on_single_item(mut self, value: bool) -> Self {
        self.hide_on_single_item = value;
        self
    }

    pub fn with_remove_home(mut self, value: bool) -> Self {
        self.remove_home = value;
        self
    }

    pub fn with_home_as_site_name(mut self, value: bool) -> Self {
        self.home_as_site_name = value;
        self
    }

    pub fn with_append_page_title(mut self, value: bool) -> Self {
        self.append_page_title = value;
        self
    }

    pub fn with_append_page_url(mut self, value: bool) -> Self {
        self.append_page_url = value;
        self
    }
}

/// Per-menu value as stored: `{ enabled, weight }`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MenuParams {
    #[serde(deserialize_with = "deserialize_flag")]
    enabled: bool,
    weight: i32,
}

/// Read the `menu_name -> { enabled, weight }` mapping in document order.
fn deserialize_menus<'de, D>(deserializer: D) -> Result<Vec<MenuConfigEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    struct MenusVisitor;

    impl<'de> Visitor<'de> for MenusVisitor {
        type Value = Vec<MenuConfigEntry>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a mapping of menu names to { enabled, weight }")
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut menus = Vec::new();
            while let Some(menu_name) = map.next_key::<String>()? {
                let params: Option<MenuParams> = map.next_value()?;
                let params = params.unwrap_or_default();
                menus.push(MenuConfigEntry::new(menu_name, params.enabled, params.weight));
            }
            Ok(menus)
        }
    }

    deserializer.deserialize_any(MenusVisitor)
}

/// Accept `true`/`false` as well as the numeric and string flags older
/// configs store. Only zero, `""` and `"0"` count as disabled.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct FlagVisitor;

    impl<'de> Visitor<'de> for FlagVisitor {
        type Value = bool;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a boolean, number or string flag")
        }

        fn visit_bool<E>(self, v: bool) -> Result<bool, E>
        where
            E: de::Error,
        {
            Ok(v)
        }

        fn visit_i64<E>(self, v: i64) -> Result<bool, E>
        where
            E: de::Error,
        {
            Ok(v != 0)
        }

        fn visit_u64<E>(self, v: u64) -> Result<bool, E>
        where
            E: de::Error,
        {
            Ok(v != 0)
        }

        fn visit_unit<E>(self) -> Result<bool, E>
        where
            E: de::Error,
        {
            Ok(false)
        }

        fn visit_f64<E>(self, v: f64) -> Result<bool, E>
        where
            E: de::Error,
        {
            Ok(v != 0.0)
        }

        fn visit_str<E>(self, v: &str) -> Result<bool, E>
        where
            E: de::Error,
        {
            match v {
                "" | "0" => Ok(false),
                "1" | "true" => Ok(true),
                other => {
                    warn_log!("Menu flag '{}' is not a boolean, treating as enabled", other);
                    Ok(true)
                }
            }
        }
    }

    deserializer.deserialize_any(FlagVisitor)
}
