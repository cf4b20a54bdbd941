// src/report.rs

//! Plain-text summary report.

use crate::models::{DepartmentStat, NO_VALUE};

/// Render the three-line answers summary.
///
/// With no top department (empty catalog) the third line carries the
/// explicit `N/A` marker instead of failing.
pub fn render_summary(total: usize, unique: usize, top: Option<&DepartmentStat>) -> String {
    let (department, count) = top
        .map(|stat| (stat.department.as_str(), stat.course_count))
        .unwrap_or((NO_VALUE, 0));

    format!(
        "Total classes: {total}\n\
         Total unique classes: {unique}\n\
         Department with most courses: {department} ({count} courses)\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_format() {
        let top = DepartmentStat {
            department: "CMSC".to_string(),
            course_count: 42,
        };
        let summary = render_summary(500, 430, Some(&top));
        assert_eq!(
            summary,
            "Total classes: 500\n\
             Total unique classes: 430\n\
             Department with most courses: CMSC (42 courses)\n"
        );
    }

    #[test]
    fn test_summary_has_exactly_three_lines() {
        let summary = render_summary(1, 1, None);
        assert_eq!(summary.lines().count(), 3);
    }

    #[test]
    fn test_empty_catalog_uses_marker() {
        let summary = render_summary(0, 0, None);
        assert_eq!(
            summary,
            "Total classes: 0\n\
             Total unique classes: 0\n\
             Department with most courses: N/A (0 courses)\n"
        );
    }
}
