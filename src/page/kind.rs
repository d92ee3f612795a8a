//! Page layout kind.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Layout kind of the page the nav is rendered for.
///
/// Only `Doc` pages carry a sidebar, which shifts the nav container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    #[default]
    Doc,
    Home,
    Custom,
    #[value(name = "404")]
    #[serde(rename = "404")]
    NotFound,
}

impl PageType {
    #[inline]
    pub const fn has_sidebar(&self) -> bool {
        matches!(self, Self::Doc)
    }
}
