//! Loading and saving the label CSV file.
//!
//! Legacy files carry leading spaces in the `comment` and `checked` header
//! names; load matches headers after trimming, save always writes the
//! normalized `label_path,comment,checked` header.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::record::{Record, checked_text, parse_checked};

/// Error type for label file I/O
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Csv {
        path: PathBuf,
        source: csv::Error,
    },
    #[error("missing required column: {0}")]
    Column(String),
    #[error("row {row}: checked value {text:?} is not a boolean (expected \"true\", \"false\" or blank)")]
    Checked { row: usize, text: String },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: io::Error,
    },
}

const PATH_COLUMN: &str = "label_path";
const COMMENT_COLUMN: &str = "comment";
const CHECKED_COLUMN: &str = "checked";

/// Load all records from the label file, preserving row order.
/// Columns are matched by trimmed header name, so legacy headers with
/// leading spaces resolve to the same columns. Rows are 1-based in errors.
pub fn load(path: &Path) -> Result<Vec<Record>, StoreError> {
    let file = File::open(path).map_err(|e| StoreError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| StoreError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?
        .clone();
    let column = |name: &str| -> Result<usize, StoreError> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| StoreError::Column(name.to_string()))
    };
    let path_col = column(PATH_COLUMN)?;
    let comment_col = column(COMMENT_COLUMN)?;
    let checked_col = column(CHECKED_COLUMN)?;

    let mut records = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let row = result.map_err(|e| StoreError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;
        let field = |col: usize| row.get(col).unwrap_or("");
        let checked = parse_checked(field(checked_col)).map_err(|_| StoreError::Checked {
            row: i + 1,
            text: field(checked_col).to_string(),
        })?;
        records.push(Record {
            path: field(path_col).to_string(),
            comment: field(comment_col).to_string(),
            checked,
        });
    }
    Ok(records)
}

/// Save all records back to the label file, overwriting it in place.
/// The whole file is rewritten through a temp file in the same directory,
/// so an interrupted save leaves the previous version intact.
pub fn save(path: &Path, records: &[Record]) -> Result<(), StoreError> {
    let content = to_csv(records).map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    atomic_write(path, &content).map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

fn to_csv(records: &[Record]) -> io::Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record([PATH_COLUMN, COMMENT_COLUMN, CHECKED_COLUMN])
        .map_err(io::Error::other)?;
    for record in records {
        writer
            .write_record([
                record.path.as_str(),
                record.comment.as_str(),
                checked_text(record.checked),
            ])
            .map_err(io::Error::other)?;
    }
    writer.flush()?;
    writer.into_inner().map_err(io::Error::other)
}

/// Write `content` to `path` atomically using a temp file + rename.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
