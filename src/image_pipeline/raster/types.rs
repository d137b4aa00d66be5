//! RGBA raster data types

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::view::{RasterView, validate_layout};

/// Number of bytes per RGBA pixel.
pub const CHANNELS: usize = 4;

/// A single 8-bit RGBA pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    /// Fully transparent black, the value written by every erase operation.
    pub const TRANSPARENT: Pixel = Pixel { r: 0, g: 0, b: 0, a: 0 };

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque pixel with the given color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: u8::MAX }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == u8::MAX
    }

    pub fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub(crate) fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }
}

/// Owned RGBA image, row-major with a top-left origin.
///
/// The buffer always holds exactly `width * height * 4` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Wraps an RGBA buffer, rejecting zero dimensions and length mismatches.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        validate_layout(width, height, data.len())?;
        Ok(Self { width, height, data })
    }

    /// Creates a raster with every pixel set to `fill`.
    pub fn filled(width: u32, height: u32, fill: Pixel) -> Result<Self> {
        let len = (width as usize) * (height as usize) * CHANNELS;
        let data = [fill.r, fill.g, fill.b, fill.a]
            .into_iter()
            .cycle()
            .take(len)
            .collect();
        Self::new(width, height, data)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) {
        let index = self.index(x, y);
        self.data[index..index + CHANNELS].copy_from_slice(&[pixel.r, pixel.g, pixel.b, pixel.a]);
    }

    /// Zeroes all four channels of the pixel at `(x, y)`.
    pub fn set_transparent(&mut self, x: u32, y: u32) {
        self.set_pixel(x, y, Pixel::TRANSPARENT);
    }

    pub(crate) fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let stride = self.width as usize * CHANNELS;
        let start = y as usize * stride;
        &mut self.data[start..start + stride]
    }

    /// Number of pixels whose alpha is zero.
    pub fn transparent_count(&self) -> usize {
        self.data
            .chunks_exact(CHANNELS)
            .filter(|px| px[3] == 0)
            .count()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }
}

impl RasterView for Raster {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
