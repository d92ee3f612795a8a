//! Navigation menu entries.

use serde::{Deserialize, Deserializer, Serialize};

/// A menu entry: a direct link or a labeled group of links.
///
/// A table with a `link` key is a single item, a table without one is a
/// group, so the tag is decided once at load time:
///
/// ```toml
/// nav = [
///     { text = "Guide", link = "/guide/" },
///     { text = "API", items = [{ text = "Config", link = "/api/config" }] },
/// ]
/// ```
///
/// Unknown keys and a non-string `link` are load errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavItem {
    Single(SingleItem),
    Group(GroupItem),
}

/// Every key a nav entry may carry, before the tag is decided.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawNavItem {
    text: String,
    link: Option<String>,
    #[serde(default)]
    items: Vec<SingleItem>,
}

impl<'de> Deserialize<'de> for NavItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let RawNavItem { text, link, items } = RawNavItem::deserialize(deserializer)?;
        Ok(match link {
            Some(link) => Self::Single(SingleItem { text, link }),
            None => Self::Group(GroupItem { text, items }),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SingleItem {
    pub text: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupItem {
    pub text: String,
    pub items: Vec<SingleItem>,
}

impl NavItem {
    pub fn single(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self::Single(SingleItem::new(text, link))
    }

    pub fn group(text: impl Into<String>, items: Vec<SingleItem>) -> Self {
        Self::Group(GroupItem {
            text: text.into(),
            items,
        })
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Single(item) => &item.text,
            Self::Group(group) => &group.text,
        }
    }
}

impl SingleItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}
