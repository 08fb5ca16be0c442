use once_cell::sync::OnceCell;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, error, info};

use crate::core::error::AppResult;
use crate::core::loader::parse_dataset;
use crate::core::matcher::filter;
use crate::core::models::MunicipalityRecord;
use crate::core::source::{BundledDataset, DatasetSource, FileDataset};

/// Lazily loaded, immutable municipality directory.
///
/// The dataset is read and parsed on the first call to [`get_directory`]
/// and kept for the lifetime of the service. Concurrent first callers wait for
/// a single load. A failed load is not cached.
///
/// [`get_directory`]: MunicipalityDirectory::get_directory
pub struct MunicipalityDirectory {
    source: Box<dyn DatasetSource>,
    records: OnceCell<Vec<MunicipalityRecord>>,
}

impl MunicipalityDirectory {
    pub fn new(source: impl DatasetSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            records: OnceCell::new(),
        }
    }

    pub fn bundled() -> Self {
        Self::new(BundledDataset)
    }

    /// File-backed directory when a path is configured, bundled otherwise.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::new(FileDataset::new(path)),
            None => Self::bundled(),
        }
    }

    pub fn get_directory(&self) -> AppResult<&[MunicipalityRecord]> {
        let records = self.records.get_or_try_init(|| -> AppResult<Vec<MunicipalityRecord>> {
            let started = Instant::now();
            info!("Loading municipalities from {}", self.source.describe());

            let records = self
                .source
                .read_text()
                .and_then(|text| parse_dataset(&text))
                .inspect_err(|e| error!("Failed to load municipality directory: {}", e))?;

            info!(
                "Municipality directory ready: {} records in {:?}",
                records.len(),
                started.elapsed()
            );
            Ok(records)
        })?;

        Ok(records.as_slice())
    }

    pub fn search(&self, query: &str, limit: usize) -> AppResult<Vec<&MunicipalityRecord>> {
        let records = self.get_directory()?;
        let results = filter(records, query, limit);
        debug!(query, limit, matches = results.len(), "Municipality search");
        Ok(results)
    }

    pub fn is_loaded(&self) -> bool {
        self.records.get().is_some()
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }
}
