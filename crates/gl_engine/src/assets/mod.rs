//! Asset loading
//!
//! Host-side loading and decoding of the data the GPU wrappers upload.

mod image_loader;

pub use image_loader::ImageData;

use thiserror::Error;

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset could not be read or decoded
    #[error("asset load failed: {0}")]
    LoadFailed(String),
}
