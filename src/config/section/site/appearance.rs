//! `site.appearance` value.

use serde::{Deserialize, Serialize};

/// Raw `appearance` setting.
///
/// Booleans are kept as a toggle; anything else (e.g. `"dark"`) is preserved
/// as-is and counts as enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Appearance {
    Toggle(bool),
    Other(toml::Value),
}
