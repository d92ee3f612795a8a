//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::page::PageType;

/// Navigation bar renderer for documentation sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: docnav.toml)
    #[arg(short = 'C', long, global = true, default_value = "docnav.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a commented docnav.toml
    #[command(visible_alias = "i")]
    Init {
        /// Directory to create the config in (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config template to stdout instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Render the nav bar of a page as an HTML fragment
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        page: PageArgs,

        /// Write output to file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Print the resolved nav view model as JSON
    Inspect {
        #[command(flatten)]
        page: PageArgs,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Validate docnav.toml and print diagnostics
    #[command(visible_alias = "c")]
    Check,
}

/// Shared page arguments for Render and Inspect commands
#[derive(clap::Args, Debug, Clone)]
pub struct PageArgs {
    /// Route of the page, e.g. `/zh/guide/`
    #[arg(default_value = "/")]
    pub route: String,

    /// Layout kind of the page
    #[arg(short = 't', long, value_enum, default_value_t = PageType::Doc)]
    pub page_type: PageType,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_render(&self) -> bool {
        matches!(self.command, Commands::Render { .. })
    }
    pub const fn is_inspect(&self) -> bool {
        matches!(self.command, Commands::Inspect { .. })
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_defaults() {
        let cli = Cli::try_parse_from(["docnav", "render"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("docnav.toml"));
        let Commands::Render { page, output } = cli.command else {
            panic!("expected render");
        };
        assert_eq!(page.route, "/");
        assert_eq!(page.page_type, PageType::Doc);
        assert!(!page.verbose);
        assert!(output.is_none());
    }

    #[test]
    fn test_inspect_with_flags() {
        let cli = Cli::try_parse_from([
            "docnav",
            "inspect",
            "/zh/guide/",
            "--page-type",
            "404",
            "--pretty",
            "-V",
            "-C",
            "site/docnav.toml",
        ])
        .unwrap();
        assert!(cli.is_inspect());
        assert_eq!(cli.config, PathBuf::from("site/docnav.toml"));
        let Commands::Inspect { page, pretty } = cli.command else {
            panic!("expected inspect");
        };
        assert_eq!(page.route, "/zh/guide/");
        assert_eq!(page.page_type, PageType::NotFound);
        assert!(page.verbose);
        assert!(pretty);
    }

    #[test]
    fn test_unknown_page_type_rejected() {
        assert!(Cli::try_parse_from(["docnav", "render", "/", "-t", "blog"]).is_err());
    }

    #[test]
    fn test_init_dry() {
        let cli = Cli::try_parse_from(["docnav", "init", "--dry"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Init {
                name: None,
                dry: true
            }
        ));
    }
}
