//! docnav - Navigation bar renderer for documentation sites.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;
mod nav;
mod page;
mod render;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    match &cli.command {
        Commands::Init { name, dry } => {
            cli::init::new_config(name.as_deref(), &cli.config, *dry)
        }
        Commands::Render { page, output } => {
            logger::set_verbose(page.verbose);
            let config = SiteConfig::load(&cli.config)?;
            cli::render::run_render(&config, page, output.as_deref())
        }
        Commands::Inspect { page, pretty } => {
            logger::set_verbose(page.verbose);
            let config = SiteConfig::load(&cli.config)?;
            cli::inspect::run_inspect(&config, page, *pretty)
        }
        Commands::Check => {
            let config = SiteConfig::read(&cli.config)?;
            cli::check::check_config(&config)
        }
    }
}
