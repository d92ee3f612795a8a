//! Config resolution: everything the nav renders, with no optionality left.

use serde::{Serialize, Serializer};

use crate::config::{LocaleDescriptor, NavItem, SingleItem, SiteConfig, SocialLink};
use crate::page::{LocaleSiteData, PageData};

/// Resolved view model of the nav bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavModel {
    pub title: String,
    pub has_sidebar: bool,
    pub has_appearance_switch: bool,
    pub locale_languages: Vec<LocaleDescriptor>,
    pub has_multi_language: bool,
    pub translation_menu: Option<TranslationMenu>,
    pub menu_items: Vec<NavItem>,
    pub social_links: Vec<SocialLink>,
    pub has_social_links: bool,
    /// Search scope, empty for the root locale.
    pub route_prefix: String,
}

/// The language switcher group: one entry per locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationMenu {
    pub items: Vec<SingleItem>,
    /// Entry whose `lang` is the current locale's; written as `-1` when none.
    #[serde(serialize_with = "serialize_active_index")]
    pub active_index: Option<usize>,
}

fn serialize_active_index<S: Serializer>(index: &Option<usize>, s: S) -> Result<S::Ok, S::Error> {
    match index {
        Some(index) => s.serialize_u64(*index as u64),
        None => s.serialize_i64(-1),
    }
}

impl NavModel {
    /// Merge site, theme and locale data into the nav view model.
    pub fn resolve(page: &PageData<'_>, locale: &LocaleSiteData) -> Self {
        let site = page.site;
        let theme = site.theme();

        let locale_languages: Vec<LocaleDescriptor> = theme
            .into_iter()
            .flat_map(|theme| theme.locales())
            .map(|(_, locale)| locale.descriptor())
            .collect();
        let has_multi_language = locale_languages.len() > 1;
        let translation_menu = has_multi_language
            .then(|| TranslationMenu::new(&locale_languages, &locale.lang));

        let social_links = theme
            .map(|theme| theme.social_links().to_vec())
            .unwrap_or_default();

        Self {
            title: resolve_title(locale, site),
            has_sidebar: page.page_type.has_sidebar(),
            has_appearance_switch: site.site.has_appearance_switch(),
            has_multi_language,
            translation_menu,
            locale_languages,
            menu_items: locale.nav.clone().unwrap_or_default(),
            has_social_links: !social_links.is_empty(),
            social_links,
            route_prefix: locale.route_prefix.clone().unwrap_or_default(),
        }
    }
}

impl TranslationMenu {
    pub fn new(locales: &[LocaleDescriptor], current_lang: &str) -> Self {
        Self {
            items: locales
                .iter()
                .map(|locale| SingleItem::new(&locale.label, format!("/{}", locale.lang)))
                .collect(),
            active_index: locales.iter().position(|locale| locale.lang == current_lang),
        }
    }
}

/// Locale title → theme site title → site title → empty.
pub fn resolve_title(locale: &LocaleSiteData, site: &SiteConfig) -> String {
    fallback_title(
        locale.title.as_deref(),
        site.theme().and_then(|theme| theme.site_title.as_deref()),
        site.site.title.as_deref(),
    )
}

/// First present title of the chain, or an empty string.
pub fn fallback_title(
    locale_title: Option<&str>,
    theme_site_title: Option<&str>,
    global_title: Option<&str>,
) -> String {
    locale_title
        .or(theme_site_title)
        .or(global_title)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SocialIcon, test_parse_config};
    use crate::page::PageType;

    fn resolve(config: &SiteConfig, route: &str, page_type: PageType) -> NavModel {
        let page = PageData::new(config, page_type, route);
        NavModel::resolve(&page, &page.locale())
    }

    fn locale(lang: &str, label: &str) -> LocaleDescriptor {
        LocaleDescriptor {
            lang: lang.into(),
            label: label.into(),
        }
    }

    #[test]
    fn test_title_fallback_chain() {
        assert_eq!(fallback_title(Some("A"), Some("B"), Some("C")), "A");
        assert_eq!(fallback_title(None, Some("B"), Some("C")), "B");
        assert_eq!(fallback_title(None, None, Some("C")), "C");
        assert_eq!(fallback_title(None, None, None), "");
    }

    #[test]
    fn test_title_from_config_layers() {
        let config = test_parse_config(
            r#"[theme]
site_title = "Theme"

[theme.locales."/zh/"]
lang = "zh"
label = "简体中文"
title = "Locale"
"#,
        );
        assert_eq!(resolve(&config, "/zh/", PageType::Doc).title, "Locale");
        assert_eq!(resolve(&config, "/", PageType::Doc).title, "Theme");

        let config = test_parse_config("");
        assert_eq!(resolve(&config, "/", PageType::Doc).title, "Test");

        let config = SiteConfig::default();
        assert_eq!(resolve(&config, "/", PageType::Doc).title, "");
    }

    #[test]
    fn test_single_locale_is_not_multi_language() {
        let config = test_parse_config(
            r#"[theme.locales."/"]
lang = "en"
label = "English"
"#,
        );
        let model = resolve(&config, "/", PageType::Doc);
        assert_eq!(model.locale_languages, vec![locale("en", "English")]);
        assert!(!model.has_multi_language);
        assert!(model.translation_menu.is_none());

        let model = resolve(&test_parse_config(""), "/", PageType::Doc);
        assert!(model.locale_languages.is_empty());
        assert!(!model.has_multi_language);
        assert!(model.translation_menu.is_none());
    }

    #[test]
    fn test_translation_menu() {
        let config = test_parse_config(
            r#"[theme.locales."/"]
lang = "en"
label = "English"

[theme.locales."/zh/"]
lang = "zh"
label = "简体中文"
"#,
        );
        let model = resolve(&config, "/zh/guide/", PageType::Doc);
        assert!(model.has_multi_language);
        let menu = model.translation_menu.unwrap();
        assert_eq!(
            menu.items,
            vec![
                SingleItem::new("English", "/en"),
                SingleItem::new("简体中文", "/zh"),
            ]
        );
        assert_eq!(menu.active_index, Some(1));
    }

    #[test]
    fn test_active_index_no_match() {
        let locales = [locale("en", "English"), locale("zh", "简体中文")];
        let menu = TranslationMenu::new(&locales, "fr");
        assert_eq!(menu.active_index, None);

        let json = serde_json::to_value(&menu).unwrap();
        assert_eq!(json["active_index"], -1i64);
    }

    #[test]
    fn test_active_index_first_duplicate() {
        let locales = [locale("en", "English"), locale("en", "English (US)")];
        assert_eq!(TranslationMenu::new(&locales, "en").active_index, Some(0));
    }

    #[test]
    fn test_appearance_switch_flag() {
        let cases = [
            ("", true),
            ("appearance = true", true),
            ("appearance = \"dark\"", true),
            ("appearance = false", false),
        ];
        for (extra, expected) in cases {
            let model = resolve(&test_parse_config(extra), "/", PageType::Doc);
            assert_eq!(model.has_appearance_switch, expected, "{extra:?}");
        }
    }

    #[test]
    fn test_social_links_absent_or_empty() {
        let model = resolve(&test_parse_config(""), "/", PageType::Doc);
        assert!(model.social_links.is_empty());
        assert!(!model.has_social_links);

        let model = resolve(
            &test_parse_config("[theme]\nsocial_links = []"),
            "/",
            PageType::Doc,
        );
        assert!(!model.has_social_links);

        let model = resolve(
            &test_parse_config(
                "[theme]\nsocial_links = [{ icon = \"github\", link = \"https://github.com/x\" }]",
            ),
            "/",
            PageType::Doc,
        );
        assert!(model.has_social_links);
        assert_eq!(model.social_links[0].icon, SocialIcon::Github);
    }

    #[test]
    fn test_menu_items_default_empty() {
        let model = resolve(&test_parse_config(""), "/", PageType::Home);
        assert!(model.menu_items.is_empty());
        assert!(!model.has_sidebar);
        assert_eq!(model.route_prefix, "");
    }

    #[test]
    fn test_sidebar_and_route_prefix() {
        let config = test_parse_config(
            r#"[theme.locales."/zh/"]
lang = "zh"
label = "简体中文"
"#,
        );
        let model = resolve(&config, "/zh/", PageType::Doc);
        assert!(model.has_sidebar);
        assert_eq!(model.route_prefix, "/zh");
    }
}
