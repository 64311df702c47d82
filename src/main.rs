//! docref - uid cross references and link checks for Markdown docs.

mod cli;
mod config;
mod core;
mod downloads;
mod logger;
mod pipeline;
mod utils;
mod verify;
mod xref;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::DocsConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = DocsConfig::load(&cli)?;

    match &cli.command {
        Commands::Map => cli::map::build_mapping(&config).map(|_| ()),
        Commands::Verify { .. } => cli::verify::verify_links(&config),
        Commands::Render { paths, output } => {
            cli::render::render_documents(paths, output.as_deref(), &config)
        }
        Commands::Resolve { uids } => cli::resolve::print_routes(uids, &config),
        Commands::Downloads { args } => cli::downloads::show_downloads(args, &config),
    }
}
