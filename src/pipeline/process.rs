// src/pipeline/process.rs

//! Process stage: deduplicate the raw catalog, aggregate departments,
//! and write the answers summary.

use crate::dedup::dedup_crosslisted;
use crate::error::Result;
use crate::models::Config;
use crate::report::render_summary;
use crate::stats::department_statistics;
use crate::storage::CatalogStore;

/// Read the raw catalog table and derive every downstream artifact:
/// deduplicated table, department statistics, and the answers file.
pub async fn run_process(config: &Config, store: &CatalogStore) -> Result<()> {
    let raw = store.read_records(&config.output.catalog_file).await?;
    log::info!("Loaded {} raw course records", raw.len());

    let deduplicated = dedup_crosslisted(&raw);
    store
        .write_records(&config.output.deduplicated_file, &deduplicated)
        .await?;
    log::info!(
        "Deduplicated cross-listed courses from {} down to {}",
        raw.len(),
        deduplicated.len()
    );

    let stats = department_statistics(&deduplicated);
    store
        .write_departments(&config.output.departments_file, &stats)
        .await?;
    log::info!("Department statistics for {} departments", stats.len());

    let summary = render_summary(raw.len(), deduplicated.len(), stats.first());
    store
        .write_text(&config.output.answers_file, &summary)
        .await?;
    log::info!(
        "Answers written to {}",
        store.path(&config.output.answers_file).display()
    );

    Ok(())
}
