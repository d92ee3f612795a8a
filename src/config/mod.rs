//! Site configuration management for `docnav.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   └── theme      # [theme], [theme.locales."<prefix>"]
//! ├── types/         # Diagnostics, field paths
//! ├── util.rs        # Config file discovery
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The configuration is loaded once and then passed by reference to every
//! render; nothing here is global.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    Appearance, GroupItem, LocaleConfig, LocaleDescriptor, NavItem, SingleItem, SiteSectionConfig,
    SocialIcon, SocialLink, ThemeConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::log;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config filename
pub const CONFIG_FILE: &str = "docnav.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing docnav.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Global site settings
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Theme settings; `None` when the file has no `[theme]` table at all
    #[serde(default)]
    pub theme: Option<ThemeConfig>,
}

impl SiteConfig {
    /// Locate, parse and validate the config file.
    ///
    /// `config` is searched upward from the current directory unless it is
    /// an absolute path.
    pub fn load(config: &Path) -> Result<Self> {
        let site = Self::read(config)?;
        site.validate()?;
        Ok(site)
    }

    /// Locate and parse the config file without validating it.
    pub fn read(config: &Path) -> Result<Self> {
        let config_path = find_config_file(config).with_context(|| {
            format!(
                "Config file '{}' not found. Run 'docnav init' to create one.",
                config.display()
            )
        })?;

        let mut site = Self::from_path(&config_path)?;
        site.config_path = config_path;
        Ok(site)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Theme section, if the file has one.
    #[inline]
    pub fn theme(&self) -> Option<&ThemeConfig> {
        self.theme.as_ref()
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration, collecting all errors at once.
    ///
    /// Warnings are printed; errors are returned.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnose();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Run every check without printing anything.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        if let Some(theme) = &self.theme {
            theme.validate(&mut diag);
        }

        diag
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with a minimal `[site]` table; `extra` continues that table.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\ntitle = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[site\ntitle = \"Docs\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_str_empty_is_default() {
        let config = SiteConfig::from_str("").unwrap();
        assert!(config.site.title.is_none());
        assert!(config.theme.is_none());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.title.as_deref(), Some("Test"));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_unknown_theme_field_detected() {
        let content = "[theme]\nsiteTitle = \"Camel\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(config.theme.unwrap().site_title.is_none());
        assert!(ignored.iter().any(|f| f.contains("siteTitle")));
    }

    #[test]
    fn test_nav_entry_typos_fail_to_load() {
        let content = "[theme]\nnav = [{ text = \"X\", link = 5 }]";
        assert!(SiteConfig::parse_with_ignored(content).is_err());

        let content = "[theme]\nnav = [{ text = \"X\", lnk = \"/x\" }]";
        assert!(SiteConfig::parse_with_ignored(content).is_err());
    }

    #[test]
    fn test_diagnose_collects_theme_errors() {
        let config = test_parse_config("[theme.locales.zh]\nlang = \"zh\"\nlabel = \"中文\"");
        let diag = config.diagnose();
        assert!(diag.has_errors());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_diagnose_without_theme() {
        let config = test_parse_config("");
        let diag = config.diagnose();
        assert!(!diag.has_errors());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[site]\ntitle = \"Docs\"\n").unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.site.title.as_deref(), Some("Docs"));
        assert_eq!(config.config_path, path);
    }

    #[test]
    fn test_read_skips_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[theme.locales.zh]\nlang = \"zh\"\nlabel = \"中文\"\n").unwrap();

        assert!(SiteConfig::load(&path).is_err());
        let config = SiteConfig::read(&path).unwrap();
        assert!(config.diagnose().has_errors());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SiteConfig::load(&dir.path().join(CONFIG_FILE)).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
