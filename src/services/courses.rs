// src/services/courses.rs

//! Course extraction service.
//!
//! Fetches department pages sequentially and extracts one `CourseRecord`
//! per course block, using the catalog's fixed markup conventions.

use std::sync::Arc;
use std::time::Duration;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};
use crate::models::{Config, CourseRecord, NO_VALUE};
use crate::services::DepartmentPage;
use crate::utils::{clean_field, clean_text, http};

/// Summary of a scrape run over department pages.
#[derive(Debug, Default)]
pub struct ScrapeOutcome {
    pub records: Vec<CourseRecord>,
    pub page_total: usize,
    pub page_failures: usize,
}

/// Service for scraping course records from department pages.
pub struct CourseScraper {
    config: Arc<Config>,
    client: reqwest::Client,
}

impl CourseScraper {
    /// Create a new course scraper with the given configuration.
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let client = http::create_client(&config.scraper)?;
        Ok(Self { config, client })
    }

    /// Fetch all department pages in order, one at a time, with the
    /// configured delay between requests.
    ///
    /// Pages that fail to fetch or parse are logged and skipped; they
    /// contribute no records and never abort the run.
    pub async fn fetch_all(&self, pages: &[DepartmentPage]) -> ScrapeOutcome {
        let delay = Duration::from_millis(self.config.scraper.request_delay_ms);

        let mut outcome = ScrapeOutcome {
            page_total: pages.len(),
            ..ScrapeOutcome::default()
        };

        for (i, page) in pages.iter().enumerate() {
            if i > 0 && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            match self.fetch_department(page).await {
                Ok(records) => {
                    log::info!("{}: {} courses", page.name, records.len());
                    outcome.records.extend(records);
                }
                Err(error) => {
                    outcome.page_failures += 1;
                    log::warn!("Failed to scrape {} ({}): {}", page.name, page.url, error);
                }
            }
        }

        outcome
    }

    async fn fetch_department(&self, page: &DepartmentPage) -> Result<Vec<CourseRecord>> {
        let document = http::fetch_page(&self.client, &page.url).await?;
        extract_courses(&document)
            .map_err(|e| AppError::scrape(page.name.clone(), e))
    }
}

/// Compiled patterns for the labeled fields inside a course block.
struct FieldPatterns {
    title: Regex,
    terms: Regex,
    equivalents: Regex,
    prerequisites: Regex,
    instructors: Regex,
}

impl FieldPatterns {
    fn new() -> Self {
        // Literal patterns; compilation cannot fail.
        Self {
            title: Regex::new(r"^(.*?)\.\s*(.*)$").expect("valid regex"),
            terms: Regex::new(r"Terms Offered:\s*(.*)").expect("valid regex"),
            equivalents: Regex::new(r"Equivalent Course\(s\):\s*(.*)").expect("valid regex"),
            prerequisites: Regex::new(r"Prerequisite\(s\):\s*(.*)").expect("valid regex"),
            instructors: Regex::new(r"Instructor\(s\):\s*(.*)").expect("valid regex"),
        }
    }

    fn capture<'t>(&self, pattern: &Regex, text: &'t str) -> Option<&'t str> {
        pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// Extract every course record from a department page.
pub fn extract_courses(document: &Html) -> Result<Vec<CourseRecord>> {
    let block_selector =
        Selector::parse("div.courseblock").map_err(|e| AppError::selector("div.courseblock", e))?;
    let title_selector = Selector::parse("p.courseblocktitle")
        .map_err(|e| AppError::selector("p.courseblocktitle", e))?;
    let desc_selector = Selector::parse("p.courseblockdesc")
        .map_err(|e| AppError::selector("p.courseblockdesc", e))?;

    let patterns = FieldPatterns::new();

    let records = document
        .select(&block_selector)
        .map(|block| parse_block(block, &title_selector, &desc_selector, &patterns))
        .collect();

    Ok(records)
}

fn parse_block(
    block: ElementRef,
    title_selector: &Selector,
    desc_selector: &Selector,
    patterns: &FieldPatterns,
) -> CourseRecord {
    let raw_title = block
        .select(title_selector)
        .next()
        .map(|p| clean_text(&p.text().collect::<String>()))
        .unwrap_or_default();

    // "CMSC 15100. Introduction to Computer Science I. 100 Units." splits
    // at the first period into number and title.
    let (course_number, course_title) = match patterns.title.captures(&raw_title) {
        Some(caps) => (
            clean_text(caps.get(1).map_or("", |m| m.as_str())),
            clean_field(caps.get(2).map_or("", |m| m.as_str())),
        ),
        None => (raw_title.clone(), None),
    };

    let course_number = if course_number.is_empty() {
        NO_VALUE.to_string()
    } else {
        course_number
    };

    let description = block
        .select(desc_selector)
        .next()
        .and_then(|p| clean_field(&p.text().collect::<String>()));

    // Field labels are matched against the block's raw text, one capture
    // per line; values are cleaned afterwards.
    let block_text = block.text().collect::<Vec<_>>().join("\n");

    let terms_offered = patterns
        .capture(&patterns.terms, &block_text)
        .and_then(clean_field);
    let equivalent_courses = patterns
        .capture(&patterns.equivalents, &block_text)
        .and_then(clean_field);
    let prerequisites = patterns
        .capture(&patterns.prerequisites, &block_text)
        .and_then(clean_field);

    // Some blocks run the instructor and terms labels together on one
    // line; truncate the instructor capture at the embedded label.
    let instructors = patterns
        .capture(&patterns.instructors, &block_text)
        .map(|raw| match raw.find("Terms Offered:") {
            Some(idx) => &raw[..idx],
            None => raw,
        })
        .and_then(clean_field);

    CourseRecord {
        course_number,
        course_title,
        description,
        terms_offered,
        equivalent_courses,
        prerequisites,
        instructors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_FIXTURE: &str = r#"
        <html><body>
          <div class="courseblock">
            <p class="courseblocktitle">CMSC&#160;15100.  Introduction to Computer Science I.  100 Units.</p>
            <p class="courseblockdesc">An introduction to functional programming.</p>
            <p class="courseblockextra">Instructor(s): A. Staff     Terms Offered: Autumn,Winter</p>
            <p class="courseblockextra">Prerequisite(s): None</p>
            <p class="courseblockextra">Equivalent Course(s): MAAD 15100, DATA 15100</p>
          </div>
          <div class="courseblock">
            <p class="courseblocktitle">ECON 10000. Principles of Microeconomics. 100 Units.</p>
          </div>
        </body></html>
    "#;

    fn extract_fixture() -> Vec<CourseRecord> {
        let document = Html::parse_document(PAGE_FIXTURE);
        extract_courses(&document).unwrap()
    }

    #[test]
    fn test_extracts_every_block() {
        assert_eq!(extract_fixture().len(), 2);
    }

    #[test]
    fn test_title_split_and_nbsp_handling() {
        let records = extract_fixture();
        assert_eq!(records[0].course_number, "CMSC 15100");
        assert_eq!(
            records[0].course_title.as_deref(),
            Some("Introduction to Computer Science I. 100 Units.")
        );
    }

    #[test]
    fn test_labeled_fields() {
        let records = extract_fixture();
        assert_eq!(
            records[0].description.as_deref(),
            Some("An introduction to functional programming.")
        );
        assert_eq!(
            records[0].equivalent_courses.as_deref(),
            Some("MAAD 15100, DATA 15100")
        );
        assert_eq!(records[0].prerequisites.as_deref(), Some("None"));
        assert_eq!(records[0].terms_offered.as_deref(), Some("Autumn,Winter"));
    }

    #[test]
    fn test_instructors_truncated_at_embedded_terms_label() {
        let records = extract_fixture();
        assert_eq!(records[0].instructors.as_deref(), Some("A. Staff"));
    }

    #[test]
    fn test_sparse_block_leaves_fields_absent() {
        let records = extract_fixture();
        let sparse = &records[1];
        assert_eq!(sparse.course_number, "ECON 10000");
        assert_eq!(
            sparse.course_title.as_deref(),
            Some("Principles of Microeconomics. 100 Units.")
        );
        assert!(sparse.description.is_none());
        assert!(sparse.equivalent_courses.is_none());
        assert!(sparse.instructors.is_none());
        assert!(sparse.equivalents().is_empty());
    }

    #[test]
    fn test_block_without_title_gets_sentinel_number() {
        let document = Html::parse_document(
            r#"<div class="courseblock"><p class="courseblockdesc">Orphan.</p></div>"#,
        );
        let records = extract_courses(&document).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].course_number, NO_VALUE);
    }
}
