//! `docnav check`: report every config problem at once.

use anyhow::{Result, bail};

use crate::config::SiteConfig;
use crate::log;

/// Print diagnostics; fails when any of them is an error.
pub fn check_config(config: &SiteConfig) -> Result<()> {
    let diag = config.diagnose();
    diag.print_warnings();

    if diag.has_errors() {
        for error in diag.errors() {
            log!("error"; "{}", error);
        }
        bail!(
            "{} error(s) in {}",
            diag.errors().len(),
            config.config_path.display()
        );
    }

    let warnings = diag.warnings().len();
    if warnings == 0 {
        log!("check"; "{} is valid", config.config_path.display());
    } else {
        log!("check"; "{} is valid with {} warning(s)", config.config_path.display(), warnings);
    }
    Ok(())
}
