//! Asset loading
//!
//! Images displayed by controls are decoded once and shared.

pub mod image_loader;

pub use image_loader::Image;

/// Asset loading errors
#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    /// Decoding or reading failed
    #[error("Asset load failed: {0}")]
    LoadFailed(String),

    /// Pixel data did not match the declared dimensions
    #[error("Invalid asset data: {0}")]
    InvalidData(String),
}
