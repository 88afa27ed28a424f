//! Flat-file persistence for discovered candidates.
//!
//! Candidates are written as CSV with a fixed ten-column header. The same
//! file is the input of `bootstrap-keywords`, which only needs the title and
//! description columns.

use std::path::{Path, PathBuf};

use tgscout_core::Candidate;
use tgscout_scoring::ChannelText;
use thiserror::Error;

/// Column order of a candidates file.
pub(crate) const CANDIDATE_HEADER: [&str; 10] = [
    "handle",
    "url",
    "title",
    "description",
    "google_query",
    "google_title",
    "google_snippet",
    "score",
    "url_type",
    "discovered_at",
];

#[derive(Debug, Error)]
pub(crate) enum StorageError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl StorageError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn csv(path: &Path, source: csv::Error) -> Self {
        Self::Csv {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Creates the parent directory of `path` if it has one.
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), StorageError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))
        }
        _ => Ok(()),
    }
}

/// Writes `rows` to `path`, header first. The header is written even when
/// `rows` is empty.
///
/// # Errors
///
/// Returns [`StorageError`] if the parent directory cannot be created or the
/// file cannot be written.
pub(crate) fn write_candidates(path: &Path, rows: &[Candidate]) -> Result<(), StorageError> {
    ensure_parent_dir(path)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| StorageError::csv(path, e))?;

    writer
        .write_record(CANDIDATE_HEADER)
        .map_err(|e| StorageError::csv(path, e))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| StorageError::csv(path, e))?;
    }
    writer.flush().map_err(|e| StorageError::io(path, e))?;

    tracing::debug!(path = %path.display(), rows = rows.len(), "wrote candidates");
    Ok(())
}

/// Reads a candidates file written by [`write_candidates`].
///
/// # Errors
///
/// Returns [`StorageError::Csv`] if the file cannot be opened or a row does
/// not match the candidate columns.
pub(crate) fn read_candidates(path: &Path) -> Result<Vec<Candidate>, StorageError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| StorageError::csv(path, e))?;
    reader
        .deserialize()
        .collect::<Result<Vec<Candidate>, _>>()
        .map_err(|e| StorageError::csv(path, e))
}

/// Reads only the `title` and `description` columns of a CSV. Missing
/// columns read as empty strings; other columns are ignored.
///
/// # Errors
///
/// Returns [`StorageError::Csv`] if the file cannot be opened or parsed.
pub(crate) fn read_channel_texts(path: &Path) -> Result<Vec<ChannelText>, StorageError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| StorageError::csv(path, e))?;
    reader
        .deserialize()
        .collect::<Result<Vec<ChannelText>, _>>()
        .map_err(|e| StorageError::csv(path, e))
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
