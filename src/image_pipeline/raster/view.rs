use crate::image_pipeline::common::error::{Result, TrimError};
use crate::image_pipeline::raster::types::{CHANNELS, Pixel};

/// Read-only access to a row-major RGBA buffer.
pub trait RasterView {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn as_bytes(&self) -> &[u8];

    fn pixel(&self, x: u32, y: u32) -> Pixel {
        let index = (y as usize * self.width() as usize + x as usize) * CHANNELS;
        Pixel::from_bytes(&self.as_bytes()[index..index + CHANNELS])
    }

    /// Bytes of row `y`, `width * 4` long.
    fn row(&self, y: u32) -> &[u8] {
        let stride = self.width() as usize * CHANNELS;
        let start = y as usize * stride;
        &self.as_bytes()[start..start + stride]
    }
}

/// Borrowed view over a decoded buffer owned elsewhere.
#[derive(Debug, Clone, Copy)]
pub struct RasterRef<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> RasterRef<'a> {
    pub fn new(width: u32, height: u32, data: &'a [u8]) -> Result<Self> {
        validate_layout(width, height, data.len())?;
        Ok(Self { width, height, data })
    }
}

impl RasterView for RasterRef<'_> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn as_bytes(&self) -> &[u8] {
        self.data
    }
}

pub(crate) fn validate_layout(width: u32, height: u32, len: usize) -> Result<()> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS));
    if width == 0 || height == 0 || expected != Some(len) {
        return Err(TrimError::InvalidInput { width, height, len });
    }
    Ok(())
}
