//! folio - Portfolio site server: route metadata, preview cards and
//! prerendered content pages for a single-page app.

mod cli;
mod config;
mod content;
mod core;
mod embed;
mod generator;
mod image;
mod logger;
mod page;
mod seo;
mod store;
mod utils;

use std::sync::Arc;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    // Crop works on plain files and needs no site
    if let Commands::Crop { args } = &cli.command {
        return cli::crop::run_crop(args);
    }

    let config = Arc::new(SiteConfig::load(&cli)?);

    match &cli.command {
        Commands::Init { .. } => cli::init::new_site(&config),
        Commands::Serve { .. } => cli::serve::serve_site(Arc::clone(&config)),
        Commands::Meta { args } => cli::meta::run_meta(args, &config),
        Commands::Og { args } => cli::og::run_og(args, &config),
        Commands::Normalize { args } => cli::normalize::run_normalize(args, &config),
        Commands::Sitemap { output } => cli::sitemap::run_sitemap(output.as_deref(), &config),
        Commands::Crop { args } => cli::crop::run_crop(args),
    }
}
