//! Pre-initialization validation.
//!
//! Validates target directory state before the config is written.

use anyhow::{Result, bail};
use std::path::Path;

/// Initialization mode determines validation rules.
#[derive(Debug, Clone, Copy)]
pub enum InitMode {
    /// `docnav init` - write into current directory (no config there yet)
    CurrentDir,
    /// `docnav init <name>` - create new subdirectory (must not exist)
    NewDir,
}

/// Validate target directory for initialization.
///
/// # Rules
/// - `CurrentDir`: `config_name` must not exist in `root`
/// - `NewDir`: `root` must not exist
pub fn validate_target(root: &Path, config_name: &Path, mode: InitMode) -> Result<()> {
    match mode {
        InitMode::CurrentDir => {
            let path = root.join(config_name);
            if path.exists() {
                bail!(
                    "'{}' already exists.\n\
                     Remove it first or use `docnav init <name>` to create a new directory.",
                    path.display()
                );
            }
        }
        InitMode::NewDir => {
            if root.exists() {
                bail!(
                    "Directory '{}' already exists.\n\
                     Choose a different name or remove the existing directory.",
                    root.display()
                );
            }
        }
    }
    Ok(())
}
