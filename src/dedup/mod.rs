// src/dedup/mod.rs

//! Cross-listing deduplication.
//!
//! Catalog pages list the same course under every department that
//! cross-lists it, each copy naming the others in its equivalents field.
//! The resolver partitions records into equivalence groups — connected
//! components of the "is equivalent to" relation, so chains like
//! A→B, B→C land all three in one group — and keeps exactly one record
//! per group.
//!
//! Canonical selection is first-seen-wins: among the records whose course
//! number resolves to the same group root, the one earliest in input order
//! is kept and the rest are dropped. No field merging is attempted; see
//! DESIGN.md for why the richer merge policy was rejected.

mod union_find;

pub use union_find::DisjointSet;

use std::collections::HashSet;

use crate::models::CourseRecord;

/// Build the disjoint-set over every course number seen, either as a
/// record's own key or inside an equivalents field.
fn link_records(records: &[CourseRecord]) -> DisjointSet {
    let mut sets = DisjointSet::new();

    for record in records {
        let own = sets.insert(&record.course_number);
        for equivalent in record.equivalents() {
            let other = sets.insert(equivalent);
            sets.union(own, other);
        }
    }

    sets
}

/// Collapse cross-listed courses to one canonical record per equivalence
/// group, preserving the input order of each group's first occurrence.
///
/// Pure function of its input: no I/O, no error cases. Records with
/// malformed or absent equivalents simply form singleton groups. Course
/// numbers that appear only inside equivalents fields join the partition
/// but are never emitted, since only physical records can be kept.
pub fn dedup_crosslisted(records: &[CourseRecord]) -> Vec<CourseRecord> {
    let mut sets = link_records(records);

    let mut seen_roots = HashSet::new();
    let mut canonical = Vec::new();

    for record in records {
        let id = sets.insert(&record.course_number);
        let root = sets.find(id);
        if seen_roots.insert(root) {
            canonical.push(record.clone());
        }
    }

    canonical
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(number: &str, title: &str, equivalents: Option<&str>) -> CourseRecord {
        CourseRecord {
            course_number: number.to_string(),
            course_title: Some(title.to_string()),
            description: None,
            terms_offered: None,
            equivalent_courses: equivalents.map(str::to_string),
            prerequisites: None,
            instructors: None,
        }
    }

    fn numbers(records: &[CourseRecord]) -> Vec<&str> {
        records.iter().map(|r| r.course_number.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(dedup_crosslisted(&[]).is_empty());
    }

    #[test]
    fn test_no_equivalents_keeps_everything() {
        let records = vec![
            record("CMSC 15100", "A", None),
            record("CMSC 15200", "B", None),
        ];
        assert_eq!(dedup_crosslisted(&records), records);
    }

    #[test]
    fn test_self_reference_stays_singleton() {
        let records = vec![
            record("CMSC 15100", "A", Some("CMSC 15100")),
            record("CMSC 15200", "B", None),
        ];
        let deduped = dedup_crosslisted(&records);
        assert_eq!(numbers(&deduped), vec!["CMSC 15100", "CMSC 15200"]);
    }

    #[test]
    fn test_first_seen_wins() {
        let records = vec![
            record("ECON 10000", "A", Some("PBPL 22500")),
            record("PBPL 22500", "B", None),
        ];
        let deduped = dedup_crosslisted(&records);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].course_number, "ECON 10000");
        assert_eq!(deduped[0].course_title.as_deref(), Some("A"));
    }

    #[test]
    fn test_transitive_chain_collapses_to_first() {
        let records = vec![
            record("AAAA 10000", "A", Some("BBBB 10000")),
            record("BBBB 10000", "B", Some("CCCC 10000")),
            record("CCCC 10000", "C", None),
        ];
        let deduped = dedup_crosslisted(&records);
        assert_eq!(numbers(&deduped), vec!["AAAA 10000"]);
    }

    #[test]
    fn test_phantom_equivalent_never_emitted() {
        // "GHOST 99999" exists only inside an equivalents field.
        let records = vec![
            record("CMSC 15100", "A", Some("GHOST 99999")),
            record("CMSC 15200", "B", None),
        ];
        let deduped = dedup_crosslisted(&records);
        assert_eq!(numbers(&deduped), vec!["CMSC 15100", "CMSC 15200"]);
    }

    #[test]
    fn test_order_preserved_across_groups() {
        let records = vec![
            record("ARTH 10100", "A", None),
            record("ECON 10000", "B", Some("PBPL 22500")),
            record("CMSC 15100", "C", None),
            record("PBPL 22500", "D", None),
            record("MATH 15300", "E", None),
        ];
        let deduped = dedup_crosslisted(&records);
        assert_eq!(
            numbers(&deduped),
            vec!["ARTH 10100", "ECON 10000", "CMSC 15100", "MATH 15300"]
        );
    }

    #[test]
    fn test_duplicate_course_number_rows_collapse() {
        let records = vec![
            record("CMSC 15100", "first sighting", None),
            record("CMSC 15100", "second sighting", None),
        ];
        let deduped = dedup_crosslisted(&records);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].course_title.as_deref(), Some("first sighting"));
    }

    #[test]
    fn test_idempotent() {
        let records = vec![
            record("ECON 10000", "A", Some("PBPL 22500")),
            record("PBPL 22500", "B", None),
            record("CMSC 15100", "C", None),
        ];
        let once = dedup_crosslisted(&records);
        let twice = dedup_crosslisted(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_count_never_grows() {
        let records = vec![
            record("ECON 10000", "A", Some("PBPL 22500")),
            record("PBPL 22500", "B", Some("ECON 10000")),
            record("CMSC 15100", "C", None),
        ];
        let deduped = dedup_crosslisted(&records);
        assert!(deduped.len() <= records.len());
        assert_eq!(deduped.len(), 2);
    }

    #[test]
    fn test_partition_covers_every_seen_number() {
        let records = vec![
            record("ECON 10000", "A", Some("PBPL 22500, GHOST 99999")),
            record("PBPL 22500", "B", None),
            record("CMSC 15100", "C", None),
        ];
        let mut sets = link_records(&records);

        // Every number seen anywhere is interned exactly once and resolves
        // to exactly one root.
        for key in ["ECON 10000", "PBPL 22500", "GHOST 99999", "CMSC 15100"] {
            let id = sets.get(key).expect("key should be interned");
            let root = sets.find(id);
            assert_eq!(sets.find(id), root);
        }
        assert_eq!(sets.len(), 4);

        // The ECON group spans both referenced numbers; CMSC stays apart.
        let econ = sets.get("ECON 10000").unwrap();
        let pbpl = sets.get("PBPL 22500").unwrap();
        let ghost = sets.get("GHOST 99999").unwrap();
        let cmsc = sets.get("CMSC 15100").unwrap();
        assert_eq!(sets.find(econ), sets.find(pbpl));
        assert_eq!(sets.find(econ), sets.find(ghost));
        assert_ne!(sets.find(econ), sets.find(cmsc));
    }
}
