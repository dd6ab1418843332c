//! Content repository.
//!
//! Loads the tabular source of each [`ContentKind`], applies the publish
//! gate, and orders the survivors newest first. The resulting
//! [`Collection`]s are never mutated after loading; every later stage
//! reads the same [`Content`] snapshot.
//!
//! # Publish gate
//!
//! A record is kept iff its `status` is `published` (case-insensitive) and
//! its `publish_date` is absent, unparseable, or not after the build date.
//! Unparseable dates keep the record.
//!
//! # Ordering
//!
//! Stable sort by the raw `publish_date` string, descending. Missing dates
//! compare as `""` and therefore sort after every dated record.

mod kind;
mod record;
mod source;

pub use kind::ContentKind;
pub use record::ContentRecord;

use crate::{log, utils::date::parse_ymd};
use anyhow::Result;
use chrono::NaiveDate;
use std::path::Path;

/// The filtered, ordered records of one kind for a single build.
#[derive(Debug, Clone)]
pub struct Collection {
    kind: ContentKind,
    records: Vec<ContentRecord>,
}

impl Collection {
    /// Gate and order raw rows.
    pub fn from_rows(kind: ContentKind, rows: Vec<ContentRecord>, today: NaiveDate) -> Self {
        let mut records: Vec<_> = rows
            .into_iter()
            .filter(|record| is_published(record, today))
            .collect();
        records.sort_by(|a, b| b.publish_date().cmp(a.publish_date()));

        Self { kind, records }
    }

    /// Load `<data_dir>/<kind>.csv`.
    pub fn load(kind: ContentKind, data_dir: &Path, today: NaiveDate) -> Result<Self> {
        let path = data_dir.join(format!("{}.csv", kind.source_stem()));
        let rows = source::read_records(&path)?;
        let total = rows.len();

        let collection = Self::from_rows(kind, rows, today);
        log!("content"; "{kind}: {} of {total} published", collection.len());
        Ok(collection)
    }

    pub const fn kind(&self) -> ContentKind {
        self.kind
    }

    pub fn records(&self) -> &[ContentRecord] {
        &self.records
    }

    /// The first `n` records (fewer if the collection is shorter).
    pub fn head(&self, n: usize) -> &[ContentRecord] {
        &self.records[..n.min(self.records.len())]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Frozen content snapshot shared by every build stage.
#[derive(Debug, Clone)]
pub struct Content {
    pub products: Collection,
    pub posts: Collection,
}

impl Content {
    /// Load both kinds from `data_dir`.
    pub fn load(data_dir: &Path, today: NaiveDate) -> Result<Self> {
        Ok(Self {
            products: Collection::load(ContentKind::Product, data_dir, today)?,
            posts: Collection::load(ContentKind::Post, data_dir, today)?,
        })
    }

    pub fn collection(&self, kind: ContentKind) -> &Collection {
        match kind {
            ContentKind::Product => &self.products,
            ContentKind::Post => &self.posts,
        }
    }
}

/// Publish gate: status check, then best-effort date comparison.
pub fn is_published(record: &ContentRecord, today: NaiveDate) -> bool {
    if record.get("status").to_lowercase() != "published" {
        return false;
    }

    match record.field("publish_date").map(parse_ymd) {
        Some(Some(date)) => date <= today,
        // Absent, or present but unparseable
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn record(title: &str, status: &str, date: &str) -> ContentRecord {
        ContentRecord::from_pairs([("title", title), ("status", status), ("publish_date", date)])
    }

    fn titles(collection: &Collection) -> Vec<&str> {
        collection.records().iter().map(ContentRecord::title).collect()
    }

    #[test]
    fn test_gate_status_case_insensitive() {
        assert!(is_published(&record("A", "Published", ""), today()));
        assert!(is_published(&record("A", "PUBLISHED", ""), today()));
        assert!(!is_published(&record("A", "draft", ""), today()));
        assert!(!is_published(&record("A", " published", ""), today()));
    }

    #[test]
    fn test_gate_missing_status() {
        let record = ContentRecord::from_pairs([("title", "A")]);
        assert!(!is_published(&record, today()));
    }

    #[test]
    fn test_gate_dates() {
        assert!(is_published(&record("A", "published", "2025-06-15"), today()));
        assert!(is_published(&record("A", "published", "2025-06-14"), today()));
        assert!(!is_published(&record("A", "published", "2025-06-16"), today()));
    }

    #[test]
    fn test_gate_unparseable_date_is_published() {
        assert!(is_published(&record("A", "published", "next week"), today()));
        assert!(is_published(&record("A", "published", "2025-02-30"), today()));
    }

    #[test]
    fn test_gate_unparseable_date_still_needs_status() {
        assert!(!is_published(&record("A", "draft", "next week"), today()));
    }

    #[test]
    fn test_from_rows_filters_and_sorts() {
        let rows = vec![
            record("Old", "published", "2024-01-01"),
            record("Draft", "draft", "2025-01-01"),
            record("New", "published", "2025-06-01"),
            record("Future", "published", "2025-07-01"),
        ];
        let collection = Collection::from_rows(ContentKind::Product, rows, today());

        assert_eq!(titles(&collection), ["New", "Old"]);
    }

    #[test]
    fn test_from_rows_undated_sort_last() {
        let rows = vec![
            record("Undated", "published", ""),
            record("Dated", "published", "2020-01-01"),
        ];
        let collection = Collection::from_rows(ContentKind::Post, rows, today());

        assert_eq!(titles(&collection), ["Dated", "Undated"]);
    }

    #[test]
    fn test_from_rows_raw_string_order() {
        // Raw string comparison: "next week" > "2025-..." because 'n' > '2'
        let rows = vec![
            record("Dated", "published", "2025-06-01"),
            record("Free text", "published", "next week"),
        ];
        let collection = Collection::from_rows(ContentKind::Post, rows, today());

        assert_eq!(titles(&collection), ["Free text", "Dated"]);
    }

    #[test]
    fn test_from_rows_stable_for_equal_dates() {
        let rows = vec![
            record("First", "published", "2025-01-01"),
            record("Second", "published", "2025-01-01"),
            record("Third", "published", ""),
            record("Fourth", "published", ""),
        ];
        let collection = Collection::from_rows(ContentKind::Post, rows, today());

        assert_eq!(titles(&collection), ["First", "Second", "Third", "Fourth"]);
    }

    #[test]
    fn test_head() {
        let rows = (1..=5)
            .map(|i| record(&format!("P{i}"), "published", &format!("2025-01-0{i}")))
            .collect();
        let collection = Collection::from_rows(ContentKind::Product, rows, today());

        assert_eq!(collection.head(3).len(), 3);
        assert_eq!(collection.head(3)[0].title(), "P5");
        assert_eq!(collection.head(10).len(), 5);
    }

    #[test]
    fn test_load_empty_collection_is_valid() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("products.csv"), "title,status\n").unwrap();

        let collection = Collection::load(ContentKind::Product, dir.path(), today()).unwrap();
        assert!(collection.is_empty());
    }

    #[test]
    fn test_content_load_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("products.csv"), "title,status\n").unwrap();

        let err = Content::load(dir.path(), today()).unwrap_err();
        assert!(err.to_string().contains("posts.csv"));
    }
}
