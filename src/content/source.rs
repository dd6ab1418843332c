//! Tabular source reading.
//!
//! Reads a headed CSV file into [`ContentRecord`]s. The header row names
//! the columns and every cell is kept as text, so values reach templates
//! exactly as written.

use super::ContentRecord;
use crate::error::SiteError;
use anyhow::Result;
use csv::ReaderBuilder;
use std::path::Path;

/// Read every row of a CSV file, in file order.
///
/// A file with no header row yields no records. Rows do not need to match
/// the header width: missing trailing cells are absent fields and cells
/// past the last named column are dropped.
pub fn read_records(path: &Path) -> Result<Vec<ContentRecord>> {
    let source_error = |reason: String| SiteError::DataSource {
        path: path.to_path_buf(),
        reason,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|err| source_error(err.to_string()))?;

    let columns = reader
        .headers()
        .map_err(|err| source_error(format!("malformed header: {err}")))?
        .clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|err| source_error(err.to_string()))?;
        // zip stops at the shorter side, covering both short and long rows
        records.push(ContentRecord::from_pairs(columns.iter().zip(row.iter())));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_csv(content: impl AsRef<[u8]>) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.csv");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_read_records_in_file_order() {
        let (_dir, path) = write_csv(
            "title,status,price\n\
             Blue Widget,published,9.99\n\
             Red Widget,draft,19.99\n",
        );
        let records = read_records(&path).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title(), "Blue Widget");
        assert_eq!(records[0].get("price"), "9.99");
        assert_eq!(records[1].get("status"), "draft");
    }

    #[test]
    fn test_read_records_keeps_text_verbatim() {
        // Dates and numbers must not be reinterpreted
        let (_dir, path) = write_csv("title,publish_date,price\nA,2024-01-05,10.50\n");
        let records = read_records(&path).unwrap();

        assert_eq!(records[0].publish_date(), "2024-01-05");
        assert_eq!(records[0].get("price"), "10.50");
    }

    #[test]
    fn test_read_records_quoted_cells() {
        let (_dir, path) = write_csv("title,tags\n\"Widgets, Gadgets\",\"home,office\"\n");
        let records = read_records(&path).unwrap();

        assert_eq!(records[0].title(), "Widgets, Gadgets");
        assert_eq!(records[0].get("tags"), "home,office");
    }

    #[test]
    fn test_read_records_empty_cells_absent() {
        let (_dir, path) = write_csv("title,status,publish_date\nA,published,\n");
        let records = read_records(&path).unwrap();

        assert_eq!(records[0].field("publish_date"), None);
    }

    #[test]
    fn test_read_records_short_row() {
        let (_dir, path) = write_csv("title,status,publish_date\nA,published\n");
        let records = read_records(&path).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("status"), "published");
        assert_eq!(records[0].field("publish_date"), None);
    }

    #[test]
    fn test_read_records_long_row_keeps_named_cells() {
        let (_dir, path) = write_csv(
            "title,status\n\
             A,published,extra,cells\n\
             B,draft\n",
        );
        let records = read_records(&path).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title(), "A");
        assert_eq!(records[0].get("status"), "published");
        assert_eq!(records[0].iter().count(), 2);
        assert_eq!(records[1].get("status"), "draft");
    }

    #[test]
    fn test_read_records_header_only() {
        let (_dir, path) = write_csv("title,status\n");
        assert!(read_records(&path).unwrap().is_empty());
    }

    #[test]
    fn test_read_records_empty_file() {
        let (_dir, path) = write_csv("");
        assert!(read_records(&path).unwrap().is_empty());
    }

    #[test]
    fn test_read_records_malformed_header() {
        let (_dir, path) = write_csv(b"ti\xfftle,status\nA,published\n");
        let err = read_records(&path).unwrap_err();

        match err.downcast_ref::<SiteError>() {
            Some(SiteError::DataSource { reason, .. }) => assert!(reason.contains("header")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_read_records_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_records(&dir.path().join("missing.csv")).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SiteError>(),
            Some(SiteError::DataSource { .. })
        ));
    }
}
