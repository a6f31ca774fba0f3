use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::pixel_buffer::PixelBuffer;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot encode a {channels}-channel image")]
    UnsupportedChannels { channels: u8 },
    #[error("failed to write {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Persists a pixel buffer to an image file. The format follows the path's extension.
pub trait ImageWriter: Send {
    fn write(&self, path: &Path, buffer: &PixelBuffer) -> Result<(), WriteError>;
}
