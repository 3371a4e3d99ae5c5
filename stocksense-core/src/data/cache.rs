//! Load-once cache for the sales dataset.
//!
//! The dataset is read at most once per process. The first successful load,
//! including the "file missing" outcome, is stored and every later call
//! returns the same shared table. Parse and I/O failures are not stored, so a
//! corrected file is picked up on the next request.

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use tracing::debug;

use super::loader::{load_dataset, DataError};
use super::table::SalesTable;
use crate::config::DATASET_PATH;

/// Shared, read-only handle to the loaded dataset.
#[derive(Debug)]
pub struct DatasetCache {
    path: PathBuf,
    cell: OnceLock<Option<Arc<SalesTable>>>,
}

impl DatasetCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceLock::new(),
        }
    }

    /// Cache bound to the fixed dataset location.
    pub fn at_default_path() -> Self {
        Self::new(DATASET_PATH)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// The dataset, loading it on first use. `Ok(None)` means the file is missing.
    pub fn get(&self) -> Result<Option<Arc<SalesTable>>, DataError> {
        if let Some(cached) = self.cell.get() {
            debug!(path = %self.path.display(), "dataset cache hit");
            return Ok(cached.clone());
        }

        let loaded = load_dataset(&self.path)?.map(Arc::new);
        // If another caller finished first, its value wins and ours is dropped.
        let _ = self.cell.set(loaded);
        Ok(self.cell.get().cloned().flatten())
    }
}

impl Default for DatasetCache {
    fn default() -> Self {
        Self::at_default_path()
    }
}
