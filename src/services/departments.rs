// src/services/departments.rs

//! Department page discovery.
//!
//! Fetches the programs-of-study index and collects links to every
//! department's course listing page.

use scraper::{Html, Selector};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::Config;
use crate::utils::{clean_text, http::fetch_page, resolve_url};

/// Selector for the secondary navigation list holding department links.
const DEPARTMENT_LINKS: &str = "ul.nav.leveltwo a[href]";

/// A department page discovered on the programs-of-study index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentPage {
    /// Display name from the link text
    pub name: String,

    /// Absolute URL of the department's course listing
    pub url: String,
}

/// Service for discovering department pages.
pub struct DepartmentScraper<'a> {
    client: &'a reqwest::Client,
}

impl<'a> DepartmentScraper<'a> {
    /// Create a new department scraper.
    pub fn new(client: &'a reqwest::Client) -> Self {
        Self { client }
    }

    /// Fetch the programs-of-study index and return department page links,
    /// capped by the configured department limit if one is set.
    pub async fn discover(&self, config: &Config) -> Result<Vec<DepartmentPage>> {
        let base = Url::parse(&config.catalog.base_url)?;
        let index_url = resolve_url(&base, &config.catalog.programs_path);

        log::info!("Fetching department index: {index_url}");
        let document = fetch_page(self.client, &index_url).await?;

        let mut pages = extract_department_links(&document, &base)?;
        if let Some(limit) = config.catalog.department_limit {
            pages.truncate(limit);
        }

        Ok(pages)
    }
}

/// Pull department links out of the index page's navigation list.
fn extract_department_links(document: &Html, base: &Url) -> Result<Vec<DepartmentPage>> {
    let selector =
        Selector::parse(DEPARTMENT_LINKS).map_err(|e| AppError::selector(DEPARTMENT_LINKS, e))?;

    let mut pages = Vec::new();
    for anchor in document.select(&selector) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };

        let name = clean_text(&anchor.text().collect::<String>());
        if name.is_empty() {
            continue;
        }

        pages.push(DepartmentPage {
            name,
            url: resolve_url(base, href),
        });
    }

    Ok(pages)
}
