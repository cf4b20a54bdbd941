// src/main.rs

//! College Catalog Crawler CLI
//!
//! Scrapes the UChicago College Catalog, deduplicates cross-listed
//! courses, and reports department statistics.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use catalog::{
    error::Result,
    models::Config,
    pipeline::{run_pipeline, run_process, run_scrape},
    storage::CatalogStore,
};

/// College Catalog Crawler
#[derive(Parser, Debug)]
#[command(name = "catalog", version, about = "UChicago College Catalog crawler")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Override the output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape the catalog site and write the raw course table
    Scrape {
        /// Only fetch the first N department pages
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Deduplicate an existing raw table and derive statistics and answers
    Process,

    /// Run full pipeline: Scrape → Process
    Pipeline {
        /// Only fetch the first N department pages
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);
    if let Some(dir) = &cli.output {
        config.output.dir = dir.display().to_string();
    }

    let store = CatalogStore::new(&config.output.dir);

    match cli.command {
        Command::Scrape { limit } => {
            if limit.is_some() {
                config.catalog.department_limit = limit;
            }
            config.validate()?;
            run_scrape(&config, &store).await?;
        }
        Command::Process => {
            run_process(&config, &store).await?;
        }
        Command::Pipeline { limit } => {
            if limit.is_some() {
                config.catalog.department_limit = limit;
            }
            config.validate()?;
            run_pipeline(&config, &store).await?;
        }
        Command::Validate => {
            config.validate()?;
            log::info!("Configuration OK ({})", cli.config.display());
        }
    }

    Ok(())
}
