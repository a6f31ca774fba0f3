use std::path::Path;

use crate::io::domain::image_writer::{ImageWriter, WriteError};
use crate::shared::pixel_buffer::PixelBuffer;

/// Writes RGB buffers with the `image` crate, creating the parent directory
/// if needed.
pub struct ImageFileWriter;

impl ImageFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageWriter for ImageFileWriter {
    fn write(&self, path: &Path, buffer: &PixelBuffer) -> Result<(), WriteError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| WriteError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let img = buffer
            .to_rgb_image()
            .ok_or(WriteError::UnsupportedChannels {
                channels: buffer.channels(),
            })?;

        img.save(path).map_err(|e| WriteError::Encode {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_buffer(width: u32, height: u32, rgb: [u8; 3]) -> PixelBuffer {
        let data = rgb
            .iter()
            .copied()
            .cycle()
            .take((width * height * 3) as usize)
            .collect();
        PixelBuffer::new(data, width, height, 3)
    }

    #[test]
    fn test_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        ImageFileWriter::new()
            .write(&path, &make_buffer(100, 80, [50, 100, 200]))
            .unwrap();
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_jpeg_is_decodable_with_same_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        ImageFileWriter::new()
            .write(&path, &make_buffer(40, 30, [128, 128, 128]))
            .unwrap();
        let img = image::open(&path).unwrap();
        assert_eq!(img.width(), 40);
        assert_eq!(img.height(), 30);
        assert_eq!(
            image::ImageFormat::from_path(&path).unwrap(),
            image::ImageFormat::Jpeg
        );
    }

    #[test]
    fn test_png_roundtrip_preserves_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        ImageFileWriter::new()
            .write(&path, &make_buffer(5, 5, [50, 100, 200]))
            .unwrap();
        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.get_pixel(0, 0).0, [50, 100, 200]);
    }

    #[test]
    fn test_creates_missing_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outputImgs").join("mix.jpg");
        ImageFileWriter::new()
            .write(&path, &make_buffer(2, 2, [0, 0, 0]))
            .unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_rejects_non_rgb_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let gray = PixelBuffer::filled(2, 2, 1, 0);
        let err = ImageFileWriter::new()
            .write(&dir.path().join("gray.jpg"), &gray)
            .unwrap_err();
        assert!(matches!(err, WriteError::UnsupportedChannels { channels: 1 }));
    }

    #[test]
    fn test_unknown_extension_is_encode_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ImageFileWriter::new()
            .write(&dir.path().join("out.nope"), &make_buffer(2, 2, [0, 0, 0]))
            .unwrap_err();
        assert!(matches!(err, WriteError::Encode { .. }));
    }
}
