// src/storage/mod.rs

//! Catalog artifact storage.
//!
//! Writes the catalog tables as UTF-8 CSV with a header row, plus the
//! plain-text answers file. All writes go through a temp file and rename
//! so an aborted run never leaves a half-written artifact behind.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tokio::io::AsyncWriteExt;

use crate::error::Result;
use crate::models::{CourseRecord, DepartmentStat};

/// Column headers of the course tables, in record field order.
const COURSE_HEADERS: [&str; 7] = [
    "Course Number",
    "Course Title",
    "Description",
    "Terms Offered",
    "Equivalent Courses",
    "Prerequisites",
    "Instructors",
];

/// Column headers of the department statistics table.
const DEPARTMENT_HEADERS: [&str; 2] = ["Department", "Course Count"];

/// Filesystem store for catalog output artifacts.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    root_dir: PathBuf,
}

impl CatalogStore {
    /// Create a store rooted at the given output directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Full path of a named artifact.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root_dir.join(name)
    }

    /// Write a course table (raw or deduplicated) as CSV.
    pub async fn write_records(&self, name: &str, records: &[CourseRecord]) -> Result<()> {
        let bytes = to_csv_bytes(&COURSE_HEADERS, records)?;
        self.write_bytes(name, &bytes).await
    }

    /// Read a course table back from CSV.
    pub async fn read_records(&self, name: &str) -> Result<Vec<CourseRecord>> {
        let bytes = tokio::fs::read(self.path(name)).await?;
        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let mut records = Vec::new();
        for row in reader.deserialize() {
            records.push(row?);
        }
        Ok(records)
    }

    /// Write the department statistics table as CSV.
    pub async fn write_departments(&self, name: &str, stats: &[DepartmentStat]) -> Result<()> {
        let bytes = to_csv_bytes(&DEPARTMENT_HEADERS, stats)?;
        self.write_bytes(name, &bytes).await
    }

    /// Write a plain-text artifact.
    pub async fn write_text(&self, name: &str, text: &str) -> Result<()> {
        self.write_bytes(name, text.as_bytes()).await
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, name: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path(name);
        ensure_dir(&path).await?;

        let tmp = path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }
}

/// Ensure the parent directory of a path exists.
async fn ensure_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    Ok(())
}

/// Serialize rows to CSV in memory. The header row is written explicitly
/// so that an empty table still carries it.
fn to_csv_bytes<T: Serialize>(headers: &[&str], rows: &[T]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut buf);
        writer.write_record(headers)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
    }
    Ok(buf)
}
