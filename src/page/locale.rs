//! Locale resolution for the current route.

use serde::Serialize;

use crate::config::{NavItem, SiteConfig};
use crate::utils::route::{normalize_route, prefix_without_trailing_slash, route_has_prefix};

/// Site data as seen from one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocaleSiteData {
    /// Locale-specific title, first link of the title fallback chain.
    pub title: Option<String>,
    /// Locale nav, or `theme.nav` when the locale has none.
    pub nav: Option<Vec<NavItem>>,
    /// Route prefix without trailing slash (`"/zh"`), `None` for the root locale.
    pub route_prefix: Option<String>,
    pub lang: String,
}

impl LocaleSiteData {
    /// Pick the locale whose prefix is the longest match for `route`.
    ///
    /// Keys normalizing to the same prefix (`"/zh/"`, `"/zh"`) resolve to the
    /// first declared one.
    ///
    /// Without locales, or when none matches, the result carries the theme
    /// nav and `site.lang`.
    pub fn resolve(site: &SiteConfig, route: &str) -> Self {
        let theme_nav = site.theme().and_then(|theme| theme.nav.clone());

        let matched = site
            .theme()
            .into_iter()
            .flat_map(|theme| theme.locales())
            .filter(|(prefix, _)| route_has_prefix(route, prefix))
            // strictly longer only: on equal prefixes the first declared wins
            .fold(None, |best: Option<(usize, _)>, (prefix, locale)| {
                let len = normalize_route(prefix).len();
                match best {
                    Some((best_len, _)) if best_len >= len => best,
                    _ => Some((len, (prefix, locale))),
                }
            })
            .map(|(_, matched)| matched);

        match matched {
            Some((prefix, locale)) => {
                crate::debug!("locale"; "route {} -> locale '{}' ({})", route, prefix, locale.lang);
                Self {
                    title: locale.title.clone(),
                    nav: locale.nav.clone().or(theme_nav),
                    route_prefix: prefix_without_trailing_slash(prefix),
                    lang: locale.lang.clone(),
                }
            }
            None => Self {
                title: None,
                nav: theme_nav,
                route_prefix: None,
                lang: site.site.lang.clone(),
            },
        }
    }
}
