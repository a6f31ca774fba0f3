use std::path::Path;

/// Shows a written image to the user. Purely a side effect; failures are
/// reported but never affect the produced file.
pub trait ImageViewer: Send {
    fn show(&self, title: &str, path: &Path) -> Result<(), Box<dyn std::error::Error>>;
}

/// Viewer that displays nothing. Used for headless runs and tests.
pub struct NullViewer;

impl ImageViewer for NullViewer {
    fn show(&self, _title: &str, _path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}
