//! Image loading utilities for texture data
//!
//! Decodes PNG (and other supported formats) into RGBA8 rows ready for GPU
//! upload. Images are flipped vertically at load time because OpenGL samples
//! textures with the origin in the bottom-left corner.

use std::path::Path;

use crate::assets::AssetError;

/// Decoded image data ready for GPU upload
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Raw RGBA pixel rows, bottom row first
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of color channels (always 4 after conversion)
    pub channels: u8,
}

impl ImageData {
    /// Load an image from a file path
    ///
    /// The image is converted to RGBA8 and flipped vertically to match the
    /// GPU texture coordinate convention.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path_ref = path.as_ref();

        log::debug!("Loading image from: {:?}", path_ref);

        let img = image::open(path_ref)
            .map_err(|e| AssetError::LoadFailed(format!("failed to load image: {e}")))?
            .flipv();

        let rgba_img = img.to_rgba8();
        let (width, height) = rgba_img.dimensions();

        log::info!("Loaded image {}x{} from {:?}", width, height, path_ref);

        Ok(Self {
            data: rgba_img.into_raw(),
            width,
            height,
            channels: 4,
        })
    }

    /// Create a solid color image (useful for testing and defaults)
    #[must_use]
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixel_count = (width * height) as usize;
        let mut data = Vec::with_capacity(pixel_count * 4);

        for _ in 0..pixel_count {
            data.extend_from_slice(&color);
        }

        Self {
            data,
            width,
            height,
            channels: 4,
        }
    }

    /// Create a two-color checkerboard with `cell` pixel squares
    ///
    /// Used as a stand-in texture when no image asset is available on disk.
    #[must_use]
    pub fn checkerboard(width: u32, height: u32, cell: u32, a: [u8; 4], b: [u8; 4]) -> Self {
        let cell = cell.max(1);
        let mut data = Vec::with_capacity((width * height * 4) as usize);

        for y in 0..height {
            for x in 0..width {
                let color = if ((x / cell) + (y / cell)) % 2 == 0 { a } else { b };
                data.extend_from_slice(&color);
            }
        }

        Self {
            data,
            width,
            height,
            channels: 4,
        }
    }

    /// Size of the pixel data in bytes
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_color_image() {
        let img = ImageData::solid_color(4, 4, [255, 0, 0, 255]);
        assert_eq!(img.width, 4);
        assert_eq!(img.height, 4);
        assert_eq!(img.channels, 4);
        assert_eq!(img.size_bytes(), 4 * 4 * 4);

        // First pixel is red
        assert_eq!(&img.data[0..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn checkerboard_alternates_cells() {
        let white = [255, 255, 255, 255];
        let black = [0, 0, 0, 255];
        let img = ImageData::checkerboard(4, 4, 2, white, black);

        assert_eq!(img.size_bytes(), 4 * 4 * 4);
        // (0,0) is in the first cell, (2,0) in the second
        assert_eq!(&img.data[0..4], &white);
        assert_eq!(&img.data[2 * 4..2 * 4 + 4], &black);
        // Row 2 starts with the opposite color
        let row2 = (2 * 4 * 4) as usize;
        assert_eq!(&img.data[row2..row2 + 4], &black);
    }

    #[test]
    fn checkerboard_clamps_zero_cell() {
        let img = ImageData::checkerboard(2, 2, 0, [1, 1, 1, 1], [2, 2, 2, 2]);
        assert_eq!(img.size_bytes(), 2 * 2 * 4);
    }
}
