//! `docnav inspect`: the resolved nav view model as JSON.

use anyhow::Result;

use crate::cli::PageArgs;
use crate::config::SiteConfig;
use crate::debug;
use crate::nav::NavModel;
use crate::page::PageData;

/// Resolve the view model for `args.route` and serialize it.
pub fn inspect_page(config: &SiteConfig, args: &PageArgs, pretty: bool) -> Result<String> {
    let page = PageData::new(config, args.page_type, &args.route);
    let locale = page.locale();
    debug!("inspect"; "{} -> prefix {:?}", args.route, locale.route_prefix);

    let model = NavModel::resolve(&page, &locale);
    let formatted = if pretty {
        serde_json::to_string_pretty(&model)?
    } else {
        serde_json::to_string(&model)?
    };
    Ok(formatted)
}

pub fn run_inspect(config: &SiteConfig, args: &PageArgs, pretty: bool) -> Result<()> {
    println!("{}", inspect_page(config, args, pretty)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::page::PageType;
    use serde_json::Value as JsonValue;

    #[test]
    fn test_inspect_fields() {
        let config = test_parse_config(
            r#"[theme.locales."/"]
lang = "en"
label = "English"

[theme.locales."/zh/"]
lang = "zh"
label = "简体中文"
"#,
        );
        let args = PageArgs {
            route: "/zh/".into(),
            page_type: PageType::Home,
            verbose: false,
        };
        let json: JsonValue = serde_json::from_str(&inspect_page(&config, &args, false).unwrap()).unwrap();

        assert_eq!(json["title"], "Test");
        assert_eq!(json["has_sidebar"], false);
        assert_eq!(json["has_multi_language"], true);
        assert_eq!(json["translation_menu"]["active_index"], 1);
        assert_eq!(json["translation_menu"]["items"][1]["link"], "/zh");
        assert_eq!(json["route_prefix"], "/zh");
    }

    #[test]
    fn test_inspect_pretty_is_multiline() {
        let config = test_parse_config("");
        let args = PageArgs {
            route: "/".into(),
            page_type: PageType::Doc,
            verbose: false,
        };
        assert!(inspect_page(&config, &args, true).unwrap().contains('\n'));
        assert!(!inspect_page(&config, &args, false).unwrap().contains('\n'));
    }
}
