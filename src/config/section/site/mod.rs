//! `[site]` section configuration.
//!
//! Global, locale-independent site settings.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Island.js"
//! description = "Island architecture for documentation sites"
//! lang = "en"
//! appearance = true
//! ```

mod appearance;

pub use appearance::Appearance;

use macros::Config;
use serde::{Deserialize, Serialize};

/// Global site settings, the last link of the title fallback chain.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteSectionConfig {
    /// Site title.
    #[config(inline_doc)]
    pub title: Option<String>,

    /// Site description.
    #[config(inline_doc)]
    pub description: String,

    /// Language code used when no locale matches the current route.
    #[config(default = "en", inline_doc)]
    pub lang: String,

    /// Light/dark switch in the nav bar; only `false` hides it.
    #[config(default = "true", inline_doc)]
    pub appearance: Option<Appearance>,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: None,
            description: String::new(),
            lang: "en".into(),
            appearance: None,
        }
    }
}

impl SiteSectionConfig {
    /// The appearance switch is shown unless `appearance = false`.
    #[inline]
    pub fn has_appearance_switch(&self) -> bool {
        !matches!(self.appearance, Some(Appearance::Toggle(false)))
    }
}
