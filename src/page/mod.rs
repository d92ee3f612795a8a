//! Page context handed to the nav renderer.
//!
//! | Type             | Purpose                                          |
//! |------------------|--------------------------------------------------|
//! | `PageType`       | Layout kind of the page being rendered           |
//! | `PageData`       | Site config + page type + route, read-only       |
//! | `LocaleSiteData` | Title/nav/lang of the locale the route belongs to |

mod kind;
mod locale;

pub use kind::PageType;
pub use locale::LocaleSiteData;

use crate::config::SiteConfig;

/// Read-only context for one render pass.
///
/// Built by the caller and passed explicitly; nothing is read from globals.
#[derive(Debug, Clone, Copy)]
pub struct PageData<'a> {
    pub site: &'a SiteConfig,
    pub page_type: PageType,
    pub route: &'a str,
}

impl<'a> PageData<'a> {
    pub const fn new(site: &'a SiteConfig, page_type: PageType, route: &'a str) -> Self {
        Self {
            site,
            page_type,
            route,
        }
    }

    /// Resolve the locale data for this page's route.
    pub fn locale(&self) -> LocaleSiteData {
        LocaleSiteData::resolve(self.site, self.route)
    }
}
