//! `[theme.locales."<route prefix>"]` entries.

use serde::{Deserialize, Serialize};

use super::NavItem;

/// One supported site language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleDescriptor {
    pub lang: String,
    pub label: String,
}

/// A locale table: its descriptor plus optional per-locale overrides.
///
/// ```toml
/// [theme.locales."/zh/"]
/// lang = "zh"
/// label = "简体中文"
/// title = "岛"
/// nav = [{ text = "指南", link = "/zh/guide/" }]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub lang: String,
    pub label: String,
    /// Overrides `theme.site_title` for routes under this locale.
    #[serde(default)]
    pub title: Option<String>,
    /// Replaces `theme.nav` for routes under this locale.
    #[serde(default)]
    pub nav: Option<Vec<NavItem>>,
}

impl LocaleConfig {
    pub fn descriptor(&self) -> LocaleDescriptor {
        LocaleDescriptor {
            lang: self.lang.clone(),
            label: self.label.clone(),
        }
    }
}
