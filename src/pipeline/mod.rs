//! Pipeline entry points for catalog operations.
//!
//! - `run_scrape`: Fetch department pages and build the raw catalog table
//! - `run_process`: Deduplicate, aggregate, and write the answers summary
//! - `run_pipeline`: Both stages in order

mod pipeline;
mod process;
mod scrape;

pub use pipeline::run_pipeline;
pub use process::run_process;
pub use scrape::run_scrape;
