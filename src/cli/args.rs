//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Cross-reference resolver and link checker for Markdown documentation
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "docref.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build the uid -> route mapping from document headers
    #[command(visible_alias = "m")]
    Map,

    /// Check relative links in the docs and versioned docs trees
    #[command(visible_alias = "v")]
    Verify {
        /// Exit with an error when broken links are found
        #[arg(long)]
        strict: bool,
    },

    /// Render Markdown to HTML with cross references resolved
    #[command(visible_alias = "r")]
    Render {
        /// Files or directories to render. If omitted, renders the docs tree.
        #[arg(value_name = "PATH", value_hint = clap::ValueHint::AnyPath)]
        paths: Vec<PathBuf>,

        /// Output directory for `.html` files
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        output: Option<PathBuf>,
    },

    /// Look up routes for uids in the mapping
    Resolve {
        /// Uids to resolve
        #[arg(value_name = "UID", required = true)]
        uids: Vec<String>,
    },

    /// Show total package downloads for an owner
    Downloads {
        #[command(flatten)]
        args: DownloadsArgs,
    },
}

/// Downloads command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct DownloadsArgs {
    /// Package owner (overrides `[downloads] owner`)
    #[arg(short, long)]
    pub owner: Option<String>,

    /// Ignore the cached total and fetch again
    #[arg(short, long)]
    pub refresh: bool,

    /// Remove the cached total for the owner and exit
    #[arg(long, conflicts_with = "clear_all")]
    pub clear: bool,

    /// Remove every cached total and exit
    #[arg(long)]
    pub clear_all: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_verify_strict() {
        let cli = Cli::parse_from(["docref", "v", "--strict"]);
        assert!(matches!(cli.command, Commands::Verify { strict: true }));
        assert_eq!(cli.config, PathBuf::from("docref.toml"));
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::parse_from(["docref", "-V", "render", "docs/a.md", "-o", "out"]);
        assert!(cli.verbose);
        let Commands::Render { paths, output } = cli.command else {
            panic!("expected render");
        };
        assert_eq!(paths, vec![PathBuf::from("docs/a.md")]);
        assert_eq!(output, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_parse_downloads() {
        let cli = Cli::parse_from(["docref", "downloads", "--owner", "dotnet", "--refresh"]);
        let Commands::Downloads { args } = cli.command else {
            panic!("expected downloads");
        };
        assert_eq!(args.owner.as_deref(), Some("dotnet"));
        assert!(args.refresh);
        assert!(!args.clear);
    }

    #[test]
    fn test_resolve_requires_uid() {
        assert!(Cli::try_parse_from(["docref", "resolve"]).is_err());
    }
}
