//! CSV content source.
//!
//! Reads a comma-separated file with a header row into [`RawRow`]s.
//! Recognized columns: `business`, `page`, `section`, `title`, `subtitle`,
//! `content`, `image`, `display`, `order`, `content_type`, `filename`.
//! Other columns are carried along and ignored by the parser.
//!
//! Only file-level failures are errors. A record the CSV reader cannot
//! decode is skipped with a warning so one bad row never blocks the rest.

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::row::{RawRow, parse_row};
use crate::section::Section;
use crate::store::SectionStore;

/// Error returned when the content source cannot be read.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Source file missing, unstattable or unreadable.
    #[error("Missing content CSV at {}: {source}", path.display())]
    Unavailable {
        /// Source file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    fn unavailable(path: &Path, source: std::io::Error) -> Self {
        Self::Unavailable {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path of the source that failed.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Unavailable { path, .. } => path,
        }
    }
}

/// Stat the source and return its modification time.
pub fn source_modified(path: &Path) -> Result<SystemTime, SourceError> {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|e| SourceError::unavailable(path, e))
}

/// Read every row of a CSV file.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>, SourceError> {
    let file = File::open(path).map_err(|e| SourceError::unavailable(path, e))?;
    read_rows_from(file).map_err(|e| SourceError::unavailable(path, e))
}

/// Read every row from CSV data with a header row.
///
/// Short records behave as if the missing trailing columns were empty.
///
/// # Errors
///
/// Returns the underlying I/O error if reading fails. Records that fail to
/// decode (e.g., invalid UTF-8) are skipped.
pub fn read_rows_from<R: Read>(reader: R) -> Result<Vec<RawRow>, std::io::Error> {
    let mut csv = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = match csv.headers() {
        Ok(headers) => headers.iter().map(|h| h.trim().to_owned()).collect(),
        Err(e) => return header_error(e),
    };

    let mut rows = Vec::new();
    for (index, record) in csv.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(into_io_error(e)),
            Err(e) => {
                tracing::warn!(record = index + 1, error = %e, "Skipping unreadable CSV record");
                continue;
            }
        };
        rows.push(
            headers
                .iter()
                .zip(record.iter())
                .map(|(column, value)| (column.clone(), value))
                .collect(),
        );
    }

    Ok(rows)
}

/// An unreadable header row means no rows at all, unless the reader itself failed.
fn header_error(e: csv::Error) -> Result<Vec<RawRow>, std::io::Error> {
    if e.is_io_error() {
        return Err(into_io_error(e));
    }
    tracing::warn!(error = %e, "Unreadable CSV header row, no rows loaded");
    Ok(Vec::new())
}

fn into_io_error(e: csv::Error) -> std::io::Error {
    match e.into_kind() {
        csv::ErrorKind::Io(e) => e,
        other => std::io::Error::other(format!("{other:?}")),
    }
}

/// Read a CSV file and parse every visible row into a [`Section`].
pub fn load_sections(path: &Path) -> Result<Vec<Section>, SourceError> {
    let rows = read_rows(path)?;
    let total = rows.len();
    let sections: Vec<Section> = rows.iter().filter_map(parse_row).collect();
    tracing::debug!(
        path = %path.display(),
        rows = total,
        sections = sections.len(),
        "Parsed content source"
    );
    Ok(sections)
}

/// Read a CSV file straight into a [`SectionStore`].
pub fn load_store(path: &Path, business: Option<&str>) -> Result<SectionStore, SourceError> {
    Ok(SectionStore::build(load_sections(path)?, business))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::section::ContentType;

    const HEADER: &str = "business,page,section,title,subtitle,content,image,display,order,content_type,filename";

    fn write_csv(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("content.csv");
        fs::write(&path, format!("{HEADER}\n{body}")).unwrap();
        path
    }

    #[test]
    fn test_read_rows_from_maps_headers() {
        let data = "page,section,title\nindex,hero,Welcome\n";
        let rows = read_rows_from(data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("page"), Some("index"));
        assert_eq!(rows[0].get("title"), Some("Welcome"));
        assert_eq!(rows[0].get("display"), None);
    }

    #[test]
    fn test_read_rows_from_short_record() {
        let data = "page,section,title,display\nindex,hero\n";
        let rows = read_rows_from(data.as_bytes()).unwrap();

        assert_eq!(rows[0].get("section"), Some("hero"));
        assert_eq!(rows[0].get("title"), None);
    }

    #[test]
    fn test_read_rows_from_quoted_fields() {
        let data = "section,content\nintro,\"Fresh, local, \"\"homemade\"\"\"\n";
        let rows = read_rows_from(data.as_bytes()).unwrap();

        assert_eq!(rows[0].get("content"), Some("Fresh, local, \"homemade\""));
    }

    #[test]
    fn test_read_rows_from_skips_invalid_utf8_record() {
        let mut data = b"section,title\nok,Fine\n".to_vec();
        data.extend_from_slice(b"bad,\xff\xfe\n");
        data.extend_from_slice(b"also-ok,Good\n");

        let rows = read_rows_from(data.as_slice()).unwrap();
        let keys: Vec<_> = rows.iter().map(|r| r.get("section").unwrap()).collect();

        assert_eq!(keys, vec!["ok", "also-ok"]);
    }

    #[test]
    fn test_read_rows_missing_file_is_unavailable() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing.csv");

        let err = read_rows(&path).unwrap_err();

        assert!(matches!(err, SourceError::Unavailable { .. }));
        assert_eq!(err.path(), path.as_path());
        assert!(err.to_string().contains("missing.csv"));
    }

    #[test]
    fn test_source_modified_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(source_modified(&temp_dir.path().join("nope.csv")).is_err());
    }

    #[test]
    fn test_load_sections_drops_hidden_and_keyless_rows() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            temp_dir.path(),
            "default,index,hero,Welcome,,,,true,1,hero,\n\
             default,index,secret,Hidden,,,,no,2,text,\n\
             default,index,,No key,,,,yes,3,text,\n",
        );

        let sections = load_sections(&path).unwrap();

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].key, "hero");
        assert_eq!(sections[0].content_type, ContentType::Hero);
    }

    #[test]
    fn test_load_store_end_to_end() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            temp_dir.path(),
            "default,index,info,Hours,,,,,2,text,\n\
             default,index,hero,Welcome,,,,,1,hero,\n\
             acme,menu,mains,Mains,,,,,0,card,\n",
        );

        let store = load_store(&path, Some("other-biz")).unwrap();
        let index = store.page("index.html").unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(index.sections.len(), 2);
        assert_eq!(index.sections[0].key, "hero");
        assert_eq!(index.sections[1].key, "info");
    }

    #[test]
    fn test_load_store_missing_columns() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("content.csv");
        fs::write(&path, "page,section\nabout,story\n").unwrap();

        let store = load_store(&path, None).unwrap();
        let section = &store.page("about.html").unwrap().sections[0];

        assert_eq!(section.order, 0);
        assert_eq!(section.content_type, ContentType::Text);
        assert_eq!(section.business, "default");
    }
}
