use std::fs;
use std::path::PathBuf;

use crate::catalog::domain::image_catalog::{CatalogError, ImageCatalog};
use crate::shared::constants::HIDDEN_FILE_PREFIX;

/// Lists the non-hidden entries of a single directory.
///
/// Entries are reported in filesystem enumeration order, which is not
/// guaranteed to be sorted. Subdirectories are included, matching a plain
/// directory read.
pub struct DirectoryLister {
    dir: PathBuf,
}

impl DirectoryLister {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn unavailable(&self, source: std::io::Error) -> CatalogError {
        CatalogError::DirectoryUnavailable {
            path: self.dir.clone(),
            source,
        }
    }
}

impl ImageCatalog for DirectoryLister {
    fn list_visible(&self) -> Result<Vec<String>, CatalogError> {
        let entries = fs::read_dir(&self.dir).map_err(|e| self.unavailable(e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| self.unavailable(e))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with(HIDDEN_FILE_PREFIX) {
                continue;
            }
            names.push(name);
        }

        log::debug!("Listed {} entries in {}", names.len(), self.dir.display());
        Ok(names)
    }
}
