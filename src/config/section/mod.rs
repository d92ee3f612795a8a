//! Configuration section definitions.
//!
//! Each module corresponds to a section in `docnav.toml`:
//!
//! | Module  | TOML Section               | Purpose                              |
//! |---------|----------------------------|--------------------------------------|
//! | `site`  | `[site]`                   | Global title, language, appearance   |
//! | `theme` | `[theme]`                  | Nav items, social links, branding    |
//! |         | `[theme.locales."<path>"]` | Per-locale label, title and nav      |

pub mod site;
pub mod theme;

pub use site::{Appearance, SiteSectionConfig};
pub use theme::{
    GroupItem, LocaleConfig, LocaleDescriptor, NavItem, SingleItem, SocialIcon, SocialLink,
    ThemeConfig,
};
