//! Image loading utilities for control images
//!
//! Provides PNG loading into shared RGBA bitmaps.

use std::path::Path;
use std::sync::Arc;

use image::RgbaImage;

use crate::assets::AssetError;

/// Shared, immutable RGBA image
///
/// Cloning is cheap; clones refer to the same pixels.
#[derive(Debug, Clone)]
pub struct Image {
    pixels: Arc<RgbaImage>,
}

impl Image {
    /// Load an image from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path_ref = path.as_ref();

        log::debug!("Loading image from: {:?}", path_ref);

        let img = image::open(path_ref)
            .map_err(|e| AssetError::LoadFailed(format!("Failed to load image: {e}")))?;
        let rgba = img.to_rgba8();

        log::debug!("Loaded image {}x{} from {:?}", rgba.width(), rgba.height(), path_ref);

        Ok(Self::from_rgba(rgba))
    }

    /// Load image from memory (useful for embedded resources)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| AssetError::LoadFailed(format!("Failed to load image from bytes: {e}")))?;

        Ok(Self::from_rgba(img.to_rgba8()))
    }

    /// Wrap raw RGBA8 pixel data
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, AssetError> {
        let expected = width as usize * height as usize * 4;
        let actual = data.len();
        RgbaImage::from_raw(width, height, data)
            .map(Self::from_rgba)
            .ok_or_else(|| {
                AssetError::InvalidData(format!(
                    "{width}x{height} image needs {expected} bytes, got {actual}"
                ))
            })
    }

    /// Create a solid color image (useful for testing and defaults)
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        Self::from_rgba(RgbaImage::from_pixel(width, height, image::Rgba(color)))
    }

    fn from_rgba(pixels: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Underlying RGBA bitmap
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// True if both handles share the same pixels
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_color_image() {
        let img = Image::solid_color(4, 3, [255, 0, 0, 255]);
        assert_eq!(img.width(), 4);
        assert_eq!(img.height(), 3);
        assert_eq!(img.pixels().get_pixel(0, 0).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_from_raw_checks_length() {
        assert!(Image::from_raw(2, 2, vec![0; 16]).is_ok());
        assert!(matches!(
            Image::from_raw(2, 2, vec![0; 15]),
            Err(AssetError::InvalidData(_))
        ));
    }

    #[test]
    fn test_clone_shares_pixels() {
        let img = Image::solid_color(1, 1, [0, 0, 0, 255]);
        let copy = img.clone();
        assert!(img.ptr_eq(&copy));
        assert!(!img.ptr_eq(&Image::solid_color(1, 1, [0, 0, 0, 255])));
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(matches!(
            Image::from_bytes(b"not an image"),
            Err(AssetError::LoadFailed(_))
        ));
    }
}
