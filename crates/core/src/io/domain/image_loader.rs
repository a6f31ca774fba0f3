use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::pixel_buffer::PixelBuffer;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("image not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Decodes an image file into a pixel buffer.
pub trait ImageLoader: Send {
    fn load(&self, path: &Path) -> Result<PixelBuffer, LoadError>;
}
