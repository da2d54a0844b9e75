//! CSV output.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::OutputError;
use crate::record::{CsvTable, Dataset};

/// Rows written per file, in write order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub rows: usize,
}

/// Writes the four tables under `dir`, creating it if needed.
///
/// Every file starts with its header row, even when the table is empty.
pub fn write_dataset(dir: &Path, dataset: &Dataset) -> Result<Vec<WrittenFile>, OutputError> {
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    Ok(vec![
        write_table(dir, &dataset.teachers)?,
        write_table(dir, &dataset.students)?,
        write_table(dir, &dataset.courses)?,
        write_table(dir, &dataset.enrollments)?,
    ])
}

fn write_table<T: CsvTable>(dir: &Path, rows: &[T]) -> Result<WrittenFile, OutputError> {
    let path = dir.join(T::FILE_NAME);
    let write_err = |source| OutputError::Write {
        path: path.clone(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&path)
        .map_err(write_err)?;
    writer.write_record(T::HEADER).map_err(write_err)?;
    for row in rows {
        writer.serialize(row).map_err(write_err)?;
    }
    writer.flush().map_err(|source| OutputError::Flush {
        path: path.clone(),
        source,
    })?;

    tracing::info!(path = %path.display(), rows = rows.len(), "table written");
    Ok(WrittenFile {
        path,
        rows: rows.len(),
    })
}
