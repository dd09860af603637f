//! Job dataset sources. The dataset is read once at startup and handed to the
//! transformer; nothing else reads it.

use std::path::PathBuf;

use tracing::info;

use crate::errors::AppError;
use crate::models::job::RawJobRecord;

/// Dataset compiled into the binary.
const BUNDLED_JOBS: &str = include_str!("../data/jobs.json");

/// Read-only provider of raw job records.
pub trait JobSource: Send + Sync {
    fn load(&self) -> Result<Vec<RawJobRecord>, AppError>;
}

/// The bundled ten-listing dataset.
pub struct BundledSource;

impl JobSource for BundledSource {
    fn load(&self) -> Result<Vec<RawJobRecord>, AppError> {
        let records = parse_records(BUNDLED_JOBS)?;
        info!("Loaded {} bundled job records", records.len());
        Ok(records)
    }
}

/// A JSON dataset file on disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl JobSource for FileSource {
    fn load(&self) -> Result<Vec<RawJobRecord>, AppError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| {
            AppError::Dataset(format!("failed to read {}: {e}", self.path.display()))
        })?;
        let records = parse_records(&raw)?;
        info!(
            "Loaded {} job records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}

/// Picks the file source when a path is configured, otherwise the bundled dataset.
pub fn source_for(path: Option<PathBuf>) -> Box<dyn JobSource> {
    match path {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(BundledSource),
    }
}

fn parse_records(raw: &str) -> Result<Vec<RawJobRecord>, AppError> {
    serde_json::from_str(raw).map_err(|e| AppError::Dataset(format!("invalid job dataset: {e}")))
}
