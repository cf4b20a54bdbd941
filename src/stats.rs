// src/stats.rs

//! Department-level aggregation over deduplicated records.

use crate::models::{CourseRecord, DepartmentStat};

/// Department bucket for course numbers whose leading token is missing.
const UNKNOWN_DEPARTMENT: &str = "Unknown";

/// Count deduplicated courses per department, sorted by descending count.
///
/// The department code is the first whitespace-delimited token of the
/// course number. The sort is stable, so departments with equal counts
/// stay in first-encountered order.
pub fn department_statistics(records: &[CourseRecord]) -> Vec<DepartmentStat> {
    let mut stats: Vec<DepartmentStat> = Vec::new();

    for record in records {
        let department = record.department().unwrap_or(UNKNOWN_DEPARTMENT);
        match stats.iter_mut().find(|s| s.department == department) {
            Some(stat) => stat.course_count += 1,
            None => stats.push(DepartmentStat {
                department: department.to_string(),
                course_count: 1,
            }),
        }
    }

    stats.sort_by(|a, b| b.course_count.cmp(&a.course_count));
    stats
}
