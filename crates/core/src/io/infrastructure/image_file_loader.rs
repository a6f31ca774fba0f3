use std::path::Path;

use crate::io::domain::image_loader::{ImageLoader, LoadError};
use crate::shared::pixel_buffer::PixelBuffer;

/// Decodes image files with the `image` crate.
///
/// Every source is normalised to 3-channel RGB so two images of different
/// formats (e.g. a grayscale PNG and a JPEG) can still be blended.
pub struct ImageFileLoader;

impl ImageFileLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageLoader for ImageFileLoader {
    fn load(&self, path: &Path) -> Result<PixelBuffer, LoadError> {
        if !path.is_file() {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }

        let img = image::ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| LoadError::Decode {
                path: path.to_path_buf(),
                source: Box::new(e),
            })?
            .decode()
            .map_err(|e| LoadError::Decode {
                path: path.to_path_buf(),
                source: Box::new(e),
            })?;

        let buffer = PixelBuffer::from_rgb_image(img.to_rgb8());
        log::debug!(
            "Loaded {} ({}x{})",
            path.display(),
            buffer.width(),
            buffer.height()
        );
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_test_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        let mut img = image::RgbImage::new(width, height);
        for pixel in img.pixels_mut() {
            *pixel = image::Rgb([50, 100, 200]);
        }
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_load_returns_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_image(dir.path(), "test.png", 100, 80);
        let buffer = ImageFileLoader::new().load(&path).unwrap();
        assert_eq!(buffer.dimensions(), (100, 80));
        assert_eq!(buffer.channels(), 3);
    }

    #[test]
    fn test_load_preserves_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_image(dir.path(), "test.png", 4, 4);
        let buffer = ImageFileLoader::new().load(&path).unwrap();
        assert_eq!(buffer.pixel(0, 0), Some(&[50, 100, 200][..]));
    }

    #[test]
    fn test_grayscale_is_expanded_to_rgb() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        image::GrayImage::from_pixel(3, 3, image::Luma([77])).save(&path).unwrap();
        let buffer = ImageFileLoader::new().load(&path).unwrap();
        assert_eq!(buffer.channels(), 3);
        assert_eq!(buffer.pixel(1, 1), Some(&[77, 77, 77][..]));
    }

    #[test]
    fn test_nonexistent_is_not_found() {
        let err = ImageFileLoader::new()
            .load(Path::new("/nonexistent/test.png"))
            .unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }

    #[test]
    fn test_directory_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = ImageFileLoader::new().load(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"definitely not an image").unwrap();
        let err = ImageFileLoader::new().load(&path).unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
    }
}
