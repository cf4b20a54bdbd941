//! Course record data structure.

use serde::{Deserialize, Serialize};

/// Sentinel the catalog CSV surface uses for an absent field.
pub const NO_VALUE: &str = "N/A";

/// A single course entry extracted from a department catalog page.
///
/// `course_number` is the primary identifying key, conventionally
/// `"<DEPT> <DIGITS>"` (e.g. `"CMSC 15100"`). Every other field is optional;
/// absence is represented as `None` in memory and as the `N/A` sentinel on
/// the CSV surface. The mapping happens once, at the serde boundary, so
/// nothing downstream ever compares against the sentinel string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourseRecord {
    /// Primary key, e.g. "CMSC 15100"
    #[serde(rename = "Course Number")]
    pub course_number: String,

    /// Course title
    #[serde(rename = "Course Title", with = "na_field")]
    pub course_title: Option<String>,

    /// Free-text course description
    #[serde(rename = "Description", with = "na_field")]
    pub description: Option<String>,

    /// Quarters the course is offered in
    #[serde(rename = "Terms Offered", with = "na_field")]
    pub terms_offered: Option<String>,

    /// Comma-separated cross-listed course numbers
    #[serde(rename = "Equivalent Courses", with = "na_field")]
    pub equivalent_courses: Option<String>,

    /// Prerequisite description
    #[serde(rename = "Prerequisites", with = "na_field")]
    pub prerequisites: Option<String>,

    /// Instructor names
    #[serde(rename = "Instructors", with = "na_field")]
    pub instructors: Option<String>,
}

impl CourseRecord {
    /// Course numbers this record declares as cross-listed equivalents.
    ///
    /// Tokenizes the raw field on commas, trims each token, and drops
    /// empties. An absent field yields an empty list, so callers only ever
    /// branch on "has equivalents / does not".
    pub fn equivalents(&self) -> Vec<&str> {
        self.equivalent_courses
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|token| !token.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Department code: the leading whitespace-delimited token of the
    /// course number, or `None` when there is nothing to parse.
    pub fn department(&self) -> Option<&str> {
        self.course_number.split_whitespace().next()
    }
}

/// Serde adapter mapping `Option<String>` to the catalog's `N/A` sentinel.
///
/// Blank values and the sentinel both deserialize to `None`; `None`
/// serializes back to the sentinel so emitted CSV matches the source
/// convention.
mod na_field {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::NO_VALUE;

    pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.as_deref().unwrap_or(NO_VALUE))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == NO_VALUE {
            Ok(None)
        } else {
            Ok(Some(raw))
        }
    }
}
