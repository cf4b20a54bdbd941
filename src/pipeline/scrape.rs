// src/pipeline/scrape.rs

//! Scrape stage: discover department pages and build the raw catalog table.

use std::sync::Arc;

use chrono::Utc;

use crate::error::Result;
use crate::models::{Config, ScrapeStats};
use crate::services::{CourseScraper, DepartmentScraper};
use crate::storage::CatalogStore;
use crate::utils::http;

/// Discover departments, scrape every page in order, and write the raw
/// catalog table.
pub async fn run_scrape(config: &Config, store: &CatalogStore) -> Result<ScrapeStats> {
    let start_time = Utc::now();

    let client = http::create_client(&config.scraper)?;
    let departments = DepartmentScraper::new(&client).discover(config).await?;
    log::info!("Found {} department pages", departments.len());

    let scraper = CourseScraper::new(Arc::new(config.clone()))?;
    let outcome = scraper.fetch_all(&departments).await;

    store
        .write_records(&config.output.catalog_file, &outcome.records)
        .await?;

    let stats = ScrapeStats {
        start_time,
        end_time: Utc::now(),
        department_count: outcome.page_total,
        page_failures: outcome.page_failures,
        course_count: outcome.records.len(),
    };

    log::info!(
        "Scraped {} courses from {} departments ({} pages failed) in {}s",
        stats.course_count,
        stats.department_count,
        stats.page_failures,
        stats.elapsed_secs()
    );
    log::info!(
        "Catalog written to {}",
        store.path(&config.output.catalog_file).display()
    );

    Ok(stats)
}
