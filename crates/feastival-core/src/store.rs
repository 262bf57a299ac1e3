//! Dataset file loading.
//!
//! The calendar dataset is a JSON object mapping `yyyy-MM-dd` date labels to
//! arrays of event names, shipped as `data/2025.json`. The store resolves the
//! file location, reads it, and parses it into a [`Dataset`]. The dataset is
//! read-only: it is loaded fresh for each command and never written back.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

use crate::filter::Dataset;

/// Default dataset filename.
const DATASET_FILENAME: &str = "2025.json";

/// Directory holding the dataset when running from a repository checkout.
const LOCAL_DATA_DIR: &str = "data";

/// Application qualifier (for XDG paths).
const QUALIFIER: &str = "";

/// Application organization (for XDG paths).
const ORGANIZATION: &str = "";

/// Application name (for XDG paths).
const APPLICATION: &str = "feast";

/// Errors that can occur while loading the dataset.
#[derive(Debug, Error)]
pub enum DatasetStoreError {
    /// Failed to determine a dataset directory.
    #[error("failed to determine data directory: no valid home directory found")]
    NoDataDir,

    /// I/O error during file read.
    #[error("failed to read dataset file '{path}': {source}")]
    ReadError {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for dataset store operations.
pub type Result<T> = std::result::Result<T, DatasetStoreError>;

/// Locates and loads the calendar dataset file.
///
/// # Example
///
/// ```no_run
/// use feastival_core_rs::DatasetStore;
///
/// let store = DatasetStore::new()?;
/// let data = store.load()?;
/// # Ok::<(), feastival_core_rs::DatasetStoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DatasetStore {
    /// Path to the dataset file.
    path: PathBuf,
}

impl DatasetStore {
    /// Creates a new `DatasetStore` with the default dataset path.
    ///
    /// # Errors
    ///
    /// Returns `DatasetStoreError::NoDataDir` if no repository-local dataset
    /// exists and the home directory cannot be determined.
    pub fn new() -> Result<Self> {
        let path = Self::default_path()?;
        Ok(Self { path })
    }

    /// Creates a new `DatasetStore` reading from a custom path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the default dataset path.
    ///
    /// `data/2025.json` relative to the working directory when present (a
    /// repository checkout), otherwise the platform data dir — on Unix,
    /// `~/.local/share/feast/2025.json`.
    ///
    /// # Errors
    ///
    /// Returns `DatasetStoreError::NoDataDir` if the home directory cannot be
    /// determined.
    pub fn default_path() -> Result<PathBuf> {
        let local = Path::new(LOCAL_DATA_DIR).join(DATASET_FILENAME);
        if local.exists() {
            return Ok(local);
        }

        let project_dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
            .ok_or(DatasetStoreError::NoDataDir)?;
        Ok(project_dirs.data_dir().join(DATASET_FILENAME))
    }

    /// Returns the path to the dataset file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Returns true if the dataset file exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads the dataset from disk.
    ///
    /// # Errors
    ///
    /// - Returns `DatasetStoreError::ReadError` if the file cannot be read.
    /// - Returns `DatasetStoreError::Json` if the file contains invalid JSON
    ///   or does not have the expected label-to-names shape.
    pub fn load(&self) -> Result<Dataset> {
        let contents = fs::read_to_string(&self.path).map_err(|e| DatasetStoreError::ReadError {
            path: self.path.clone(),
            source: e,
        })?;
        let data: Dataset = serde_json::from_str(&contents)?;
        Ok(data)
    }
}
