use std::{io::Cursor, sync::Arc};

use image::{DynamicImage, ImageFormat, RgbaImage};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("Image too large. Max size is {max} bytes")]
    TooLarge { max: usize },

    #[error("Could not decode image: {0}")]
    Unreadable(String),

    #[error("Camera unavailable: {0}")]
    CameraUnavailable(String),

    #[error("No active camera stream")]
    NoActiveStream,

    #[error("Invalid bitmap dimensions {width}x{height} for {len} bytes")]
    InvalidDimensions { width: u32, height: u32, len: usize },
}

/// Immutable RGBA8 pixel grid produced by a capture. Clones share the pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Arc<[u8]>,
}

impl Bitmap {
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, CaptureError> {
        let expected = width as usize * height as usize * 4;
        if width == 0 || height == 0 || pixels.len() != expected {
            return Err(CaptureError::InvalidDimensions {
                width,
                height,
                len: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels: pixels.into(),
        })
    }

    /// Uniformly coloured bitmap, mostly useful for tests and placeholders.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, CaptureError> {
        let pixels = rgba
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Self::from_rgba(width, height, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len() / 4
    }

    pub fn to_rgba_image(&self) -> Result<RgbaImage, CaptureError> {
        RgbaImage::from_raw(self.width, self.height, self.pixels.to_vec()).ok_or(
            CaptureError::InvalidDimensions {
                width: self.width,
                height: self.height,
                len: self.pixels.len(),
            },
        )
    }

    /// Encodes the bitmap as JPEG, dropping the alpha channel.
    pub fn encode_jpeg(&self) -> Result<Vec<u8>, CaptureError> {
        let rgb = DynamicImage::ImageRgba8(self.to_rgba_image()?).to_rgb8();
        let mut buffer = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(rgb)
            .write_to(&mut buffer, ImageFormat::Jpeg)
            .map_err(|e| CaptureError::Unreadable(e.to_string()))?;

        Ok(buffer.into_inner())
    }
}

impl From<RgbaImage> for Bitmap {
    fn from(image: RgbaImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            pixels: image.into_raw().into(),
        }
    }
}
