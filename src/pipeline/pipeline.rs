// src/pipeline/pipeline.rs

use crate::error::Result;
use crate::models::Config;
use crate::storage::CatalogStore;

use super::process::run_process;
use super::scrape::run_scrape;

/// Run the full pipeline: scrape, then process.
pub async fn run_pipeline(config: &Config, store: &CatalogStore) -> Result<()> {
    log::info!("[STEP 1/2] Scrape - Fetching catalog pages");
    run_scrape(config, store).await?;

    log::info!("[STEP 2/2] Process - Deduplicating and aggregating");
    run_process(config, store).await?;

    log::info!("Pipeline complete");
    Ok(())
}
