use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure output directory exists; create if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::OutputDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    }
    // Basic writability probe: try creating a temp file.
    NamedTempFile::new_in(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    Ok(())
}

/// Persists one rendered report per calendar day.
///
/// The artifact is named from the date only; a second run on the same day
/// overwrites the first. Writes go through a temp file and a rename so a
/// reader never observes a partial artifact.
pub struct Archiver {
    dir: PathBuf,
}

impl Archiver {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn artifact_name(date: NaiveDate) -> String {
        format!("github_trending_{}.html", date.format("%Y%m%d"))
    }

    pub fn archive(&self, html: &str, date: NaiveDate) -> Result<PathBuf, PersistError> {
        ensure_output_dir(&self.dir)?;

        let target = self.dir.join(Self::artifact_name(date));
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(html.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        // Replace the existing artifact if present; one file per day.
        if target.exists() {
            fs::remove_file(&target)?;
        }
        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        Ok(target)
    }
}
