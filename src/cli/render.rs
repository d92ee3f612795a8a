//! `docnav render`: nav bar HTML for one page.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::PageArgs;
use crate::config::SiteConfig;
use crate::page::PageData;
use crate::render::to_html;
use crate::{debug, log, nav};

/// Render the nav fragment for `args.route`.
pub fn render_page(config: &SiteConfig, args: &PageArgs) -> String {
    let page = PageData::new(config, args.page_type, &args.route);
    let locale = page.locale();
    debug!("render"; "{} ({:?}) -> lang {}", args.route, args.page_type, locale.lang);
    to_html(&nav::render_nav(&page, &locale))
}

/// Print the fragment, or write it to `output`.
pub fn run_render(config: &SiteConfig, args: &PageArgs, output: Option<&Path>) -> Result<()> {
    let html = render_page(config, args);

    if let Some(output_path) = output {
        fs::write(output_path, format!("{html}\n"))
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        log!("render"; "wrote {}", output_path.display());
    } else {
        println!("{html}");
    }

    Ok(())
}
