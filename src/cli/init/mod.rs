//! Config initialization module.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`config`]: Configuration file generation

mod config;
mod validate;

use crate::log;
use anyhow::{Context, Result};
use std::{fs, path::Path};

pub use config::generate_config_template;
pub use validate::InitMode;

/// Write a commented `docnav.toml`
///
/// # Steps
/// 1. Validate target directory
/// 2. Create it when a name was given
/// 3. Write the configuration file
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_config(name: Option<&Path>, config_name: &Path, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template());
        return Ok(());
    }

    let (root, mode) = match name {
        Some(name) => (name, InitMode::NewDir),
        None => (Path::new("."), InitMode::CurrentDir),
    };

    validate::validate_target(root, config_name, mode)?;

    if matches!(mode, InitMode::NewDir) {
        fs::create_dir_all(root)
            .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    }

    let path = config::write_config(root, config_name)?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    #[test]
    fn test_new_config_in_new_dir() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("docs");

        new_config(Some(&root), Path::new("docnav.toml"), false).unwrap();

        let content = fs::read_to_string(root.join("docnav.toml")).unwrap();
        let config = SiteConfig::from_str(&content).unwrap();
        assert!(!config.diagnose().has_errors());
    }

    #[test]
    fn test_new_config_refuses_existing_dir() {
        let temp = TempDir::new().unwrap();
        assert!(new_config(Some(temp.path()), Path::new("docnav.toml"), false).is_err());
    }
}
