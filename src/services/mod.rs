// src/services/mod.rs

//! Scraping services for the catalog site.

mod courses;
mod departments;

pub use courses::{CourseScraper, ScrapeOutcome, extract_courses};
pub use departments::{DepartmentPage, DepartmentScraper};
