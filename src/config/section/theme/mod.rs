//! `[theme]` section configuration.
//!
//! Branding, menu entries, social links and the locale table.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! site_title = "Island"
//! nav = [
//!     { text = "Guide", link = "/guide/" },
//!     { text = "API", items = [{ text = "Config", link = "/api/config" }] },
//! ]
//! social_links = [{ icon = "github", link = "https://github.com/island" }]
//!
//! [theme.locales."/"]
//! lang = "en"
//! label = "English"
//!
//! [theme.locales."/zh/"]
//! lang = "zh"
//! label = "简体中文"
//! ```

mod locale;
mod nav;
mod social;

pub use locale::{LocaleConfig, LocaleDescriptor};
pub use nav::{GroupItem, NavItem, SingleItem};
pub use social::{SocialIcon, SocialLink};

use indexmap::IndexMap;
use macros::Config;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::route::normalize_route;

/// Theme configuration: branding, navigation and locales.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme")]
pub struct ThemeConfig {
    /// Brand title shown in the nav bar (falls back to `site.title`).
    #[config(inline_doc)]
    pub site_title: Option<String>,

    /// Menu entries used when the current locale has no `nav` of its own.
    #[config(skip)]
    pub nav: Option<Vec<NavItem>>,

    /// Social links shown at the end of the nav bar.
    #[config(skip)]
    pub social_links: Option<Vec<SocialLink>>,

    /// Locales keyed by route prefix, in declaration order.
    #[config(skip)]
    pub locales: Option<IndexMap<String, LocaleConfig>>,
}

impl ThemeConfig {
    pub const NAV: FieldPath = FieldPath::new("theme.nav");
    pub const SOCIAL_LINKS: FieldPath = FieldPath::new("theme.social_links");
    pub const LOCALES: FieldPath = FieldPath::new("theme.locales");

    /// Locale tables in declaration order (empty when `locales` is absent).
    pub fn locales(&self) -> impl Iterator<Item = (&str, &LocaleConfig)> {
        self.locales
            .iter()
            .flatten()
            .map(|(prefix, locale)| (prefix.as_str(), locale))
    }

    pub fn social_links(&self) -> &[SocialLink] {
        self.social_links.as_deref().unwrap_or_default()
    }

    /// Validate theme configuration.
    ///
    /// # Checks
    /// - locale keys must be route prefixes starting with `/`
    /// - locale `lang` must not be empty
    /// - duplicate `lang` values (warning, only the first can be active)
    /// - keys normalizing to the same route prefix (warning, only the first matches)
    /// - social links with unsupported icons or non-absolute URLs (warning)
    /// - nav groups without items (warning)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.validate_locales(diag);
        self.validate_social_links(diag);

        if let Some(nav) = &self.nav {
            validate_nav(nav, "theme.nav", diag);
        }
    }

    fn validate_locales(&self, diag: &mut ConfigDiagnostics) {
        let mut seen = FxHashSet::default();
        let mut prefixes: FxHashMap<String, &str> = FxHashMap::default();

        for (prefix, locale) in self.locales() {
            if !prefix.starts_with('/') {
                diag.error_with_hint(
                    Self::LOCALES,
                    format!("locale key '{prefix}' is not a route prefix"),
                    format!("use a path like \"/{}/\"", prefix.trim_matches('/')),
                );
            }

            match prefixes.entry(normalize_route(prefix)) {
                Entry::Occupied(first) => diag.warn(
                    Self::LOCALES,
                    format!(
                        "locale key '{prefix}' is the same route prefix as '{}', \
                         only the first one can match",
                        first.get()
                    ),
                ),
                Entry::Vacant(slot) => {
                    slot.insert(prefix);
                }
            }

            if locale.lang.trim().is_empty() {
                diag.error_with_hint(
                    Self::LOCALES,
                    format!("locale '{prefix}' has an empty `lang`"),
                    "set a language code, e.g.: lang = \"en\"",
                );
            } else if !seen.insert(locale.lang.as_str()) {
                diag.warn(
                    Self::LOCALES,
                    format!(
                        "locale '{prefix}' repeats lang '{}', only the first one can be active",
                        locale.lang
                    ),
                );
            }

            if let Some(nav) = &locale.nav {
                validate_nav(nav, &format!("theme.locales.\"{prefix}\".nav"), diag);
            }
        }
    }

    fn validate_social_links(&self, diag: &mut ConfigDiagnostics) {
        for link in self.social_links() {
            if !link.icon.is_supported() {
                diag.warn(
                    Self::SOCIAL_LINKS,
                    format!(
                        "icon '{}' is not supported, link '{}' will not be shown",
                        link.icon.key(),
                        link.link
                    ),
                );
            }

            if let Err(e) = url::Url::parse(&link.link) {
                diag.warn(
                    Self::SOCIAL_LINKS,
                    format!("link '{}' is not an absolute URL: {}", link.link, e),
                );
            }
        }
    }
}

fn validate_nav(nav: &[NavItem], location: &str, diag: &mut ConfigDiagnostics) {
    for item in nav {
        if let NavItem::Group(group) = item
            && group.items.is_empty()
        {
            diag.warn(
                ThemeConfig::NAV,
                format!("group '{}' in {location} has no items", group.text),
            );
        }
    }
}
