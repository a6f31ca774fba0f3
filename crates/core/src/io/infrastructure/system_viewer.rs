use std::path::Path;

use crate::io::domain::image_viewer::ImageViewer;

/// Opens images in the platform's default viewer application.
pub struct SystemViewer;

impl SystemViewer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageViewer for SystemViewer {
    fn show(&self, title: &str, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        log::info!("Opening {title} ({}) in the default viewer", path.display());
        open::that(path)?;
        Ok(())
    }
}
