//! Configuration file generation.

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::{SiteSectionConfig, ThemeConfig};

/// Commented examples for the list/table parts of `[theme]`.
const THEME_EXAMPLES: &str = r#"# Top-level nav entries: a link, or a dropdown group with `items`.
# nav = [
#     { text = "Guide", link = "/guide/" },
#     { text = "API", items = [{ text = "Config", link = "/api/config" }] },
# ]

# Icon links at the end of the bar. Supported icons: github
# social_links = [
#     { icon = "github", link = "https://github.com/owner/repo" },
# ]

# One table per locale, keyed by route prefix. With more than one locale a
# language switcher is rendered; `title` and `nav` override the theme's.
# [theme.locales."/"]
# lang = "en"
# label = "English"
#
# [theme.locales."/zh/"]
# lang = "zh"
# label = "简体中文"
# title = "文档"
"#;

/// Generate docnav.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "# docnav configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));

    // [site] section
    out.push_str(&SiteSectionConfig::template_with_header());
    out.push('\n');

    // [theme] section
    out.push_str(&ThemeConfig::template_with_header());
    out.push('\n');
    out.push_str(THEME_EXAMPLES);

    out
}

/// Write the default configuration into `root`
pub fn write_config(root: &Path, config_name: &Path) -> Result<PathBuf> {
    let content = generate_config_template();

    let path = root.join(config_name);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(path)
}
