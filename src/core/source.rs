use std::path::{Path, PathBuf};

use crate::core::error::{AppError, AppResult};

/// Dataset shipped inside the binary.
pub const BUNDLED_DATASET: &str = include_str!("../../assets/municipalities.json");

/// Where the raw municipality dataset text comes from.
#[cfg_attr(test, mockall::automock)]
pub trait DatasetSource: Send + Sync {
    fn read_text(&self) -> AppResult<String>;

    /// Human readable origin, used in logs.
    fn describe(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BundledDataset;

impl DatasetSource for BundledDataset {
    fn read_text(&self) -> AppResult<String> {
        Ok(BUNDLED_DATASET.to_string())
    }

    fn describe(&self) -> String {
        "bundled dataset".to_string()
    }
}

#[derive(Debug, Clone)]
pub struct FileDataset {
    path: PathBuf,
}

impl FileDataset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for FileDataset {
    fn read_text(&self) -> AppResult<String> {
        std::fs::read_to_string(&self.path)
            .map_err(|e| AppError::DataUnavailable(format!("cannot read {:?}: {}", self.path, e)))
    }

    fn describe(&self) -> String {
        format!("file {:?}", self.path)
    }
}

/// Dataset text handed over by the caller.
#[derive(Debug, Clone)]
pub struct InlineDataset(pub String);

impl DatasetSource for InlineDataset {
    fn read_text(&self) -> AppResult<String> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        format!("inline dataset ({} bytes)", self.0.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_bundled_dataset_is_not_empty() {
        let text = BundledDataset.read_text().unwrap();
        assert!(text.contains("\"meta\""));
        assert!(text.contains("\"data\""));
    }

    #[test]
    fn test_file_dataset_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("municipios.json");
        std::fs::write(&path, "{\"meta\":{},\"data\":[]}").unwrap();

        let source = FileDataset::new(&path);
        assert_eq!(source.read_text().unwrap(), "{\"meta\":{},\"data\":[]}");
        assert!(source.describe().contains("municipios.json"));
    }

    #[test]
    fn test_missing_file_is_data_unavailable() {
        let source = FileDataset::new("/nonexistent/municipios.json");
        let err = source.read_text().unwrap_err();
        assert!(matches!(err, AppError::DataUnavailable(_)));
    }
}
