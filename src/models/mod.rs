// src/models/mod.rs

//! Domain models for the catalog crawler.

mod config;
mod course;
mod stats;

// Re-export all public types
pub use config::{CatalogConfig, Config, OutputConfig, ScraperConfig};
pub use course::{CourseRecord, NO_VALUE};
pub use stats::{DepartmentStat, ScrapeStats};
