use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("couldn't open image directory {path}: {source}")]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Enumerates the candidate source images a user can choose from.
///
/// Listing is advisory: callers surface a failure and carry on.
pub trait ImageCatalog: Send {
    /// Names of the visible entries, in enumeration order. Rebuilt on every call.
    fn list_visible(&self) -> Result<Vec<String>, CatalogError>;
}
