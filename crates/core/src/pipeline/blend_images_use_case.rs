use std::path::PathBuf;

use thiserror::Error;

use crate::blending::domain::image_blender::{BlendError, ImageBlender};
use crate::blending::domain::ratio_validator;
use crate::blending::domain::region_intersector::{compute_region, RegionError};
use crate::catalog::domain::image_catalog::{CatalogError, ImageCatalog};
use crate::io::domain::image_loader::{ImageLoader, LoadError};
use crate::io::domain::image_viewer::ImageViewer;
use crate::io::domain::image_writer::{ImageWriter, WriteError};
use crate::pipeline::output_name::{validate_output_name, OutputNameError};
use crate::shared::blend_config::BlendConfig;
use crate::shared::blend_weight::BlendWeight;
use crate::shared::pixel_buffer::PixelBuffer;

/// Which of the two sources an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceSlot {
    First,
    Second,
}

impl std::fmt::Display for SourceSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceSlot::First => write!(f, "first"),
            SourceSlot::Second => write!(f, "second"),
        }
    }
}

#[derive(Error, Debug)]
pub enum BlendImagesError {
    #[error("error loading {slot} image: {source}")]
    Load {
        slot: SourceSlot,
        #[source]
        source: LoadError,
    },
    #[error(transparent)]
    Region(#[from] RegionError),
    #[error(transparent)]
    Blend(#[from] BlendError),
    #[error("invalid output name: {0}")]
    OutputName(#[from] OutputNameError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// One complete set of answers for a blend run.
#[derive(Clone, Debug, PartialEq)]
pub struct BlendRequest {
    /// Raw ratio as entered; out-of-range values fall back to the default weight.
    pub ratio: f64,
    pub first: String,
    pub second: String,
    /// Output base name, without extension.
    pub output_name: String,
}

/// Two-image blending pipeline: list → load ×2 → region → blend → write → show.
///
/// Each stage is exposed separately so an interactive front end can prompt
/// between them; [`execute`](Self::execute) runs them back to back.
pub struct BlendImagesUseCase {
    config: BlendConfig,
    catalog: Box<dyn ImageCatalog>,
    loader: Box<dyn ImageLoader>,
    blender: Box<dyn ImageBlender>,
    writer: Box<dyn ImageWriter>,
    viewer: Box<dyn ImageViewer>,
}

impl BlendImagesUseCase {
    pub fn new(
        config: BlendConfig,
        catalog: Box<dyn ImageCatalog>,
        loader: Box<dyn ImageLoader>,
        blender: Box<dyn ImageBlender>,
        writer: Box<dyn ImageWriter>,
        viewer: Box<dyn ImageViewer>,
    ) -> Self {
        Self {
            config,
            catalog,
            loader,
            blender,
            writer,
            viewer,
        }
    }

    /// Candidate source names. A failure here is advisory; callers report it and continue.
    pub fn list_images(&self) -> Result<Vec<String>, CatalogError> {
        self.catalog.list_visible()
    }

    /// Loads both sources from the input directory. The second is not
    /// attempted if the first fails.
    pub fn load_pair(
        &self,
        first: &str,
        second: &str,
    ) -> Result<(PixelBuffer, PixelBuffer), BlendImagesError> {
        let a = self.load(first, SourceSlot::First)?;
        let b = self.load(second, SourceSlot::Second)?;
        Ok((a, b))
    }

    /// Blends two loaded sources over their shared region.
    pub fn blend(
        &self,
        first: &PixelBuffer,
        second: &PixelBuffer,
        weight: BlendWeight,
    ) -> Result<PixelBuffer, BlendImagesError> {
        let region = compute_region(first, second, self.config.size_policy())?;
        log::info!(
            "Blending {}x{} region with {weight}",
            region.width,
            region.height
        );
        Ok(self.blender.blend(first, second, region, weight)?)
    }

    /// Writes the result under the chosen base name and shows it.
    ///
    /// Returns the path written. A viewer failure is logged, not returned.
    pub fn export(
        &self,
        output: &PixelBuffer,
        output_name: &str,
    ) -> Result<PathBuf, BlendImagesError> {
        let name = validate_output_name(output_name)?;
        let path = self.config.output_path(name);
        self.writer.write(&path, output)?;
        log::info!("Output written to {}", path.display());

        if let Err(e) = self.viewer.show(name, &path) {
            log::warn!("Could not display {}: {e}", path.display());
        }
        Ok(path)
    }

    /// Runs the whole pipeline for a canned request.
    pub fn execute(&self, request: &BlendRequest) -> Result<PathBuf, BlendImagesError> {
        let weight = ratio_validator::validate(request.ratio);

        match self.list_images() {
            Ok(names) => log::debug!("Available images: {names:?}"),
            Err(e) => log::warn!("{e}"),
        }

        let (a, b) = self.load_pair(&request.first, &request.second)?;
        let output = self.blend(&a, &b, weight)?;
        self.export(&output, &request.output_name)
    }

    fn load(&self, name: &str, slot: SourceSlot) -> Result<PixelBuffer, BlendImagesError> {
        let path = self.config.input_path(name);
        let buffer = self
            .loader
            .load(&path)
            .map_err(|source| BlendImagesError::Load { slot, source })?;
        log::info!(
            "Loaded {slot} image {} ({}x{})",
            path.display(),
            buffer.width(),
            buffer.height()
        );
        Ok(buffer)
    }
}
