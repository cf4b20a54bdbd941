//! Aggregation and run statistics structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Course count for one department. One row of the department table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DepartmentStat {
    /// Department code, e.g. "CMSC"
    #[serde(rename = "Department")]
    pub department: String,

    /// Number of deduplicated courses in the department
    #[serde(rename = "Course Count")]
    pub course_count: usize,
}

/// Timing and volume statistics for one scrape run.
#[derive(Debug, Clone)]
pub struct ScrapeStats {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub department_count: usize,
    pub page_failures: usize,
    pub course_count: usize,
}

impl ScrapeStats {
    /// Wall-clock duration of the run in seconds.
    pub fn elapsed_secs(&self) -> i64 {
        (self.end_time - self.start_time).num_seconds()
    }
}
