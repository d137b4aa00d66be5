use std::io::Write;

use png::{BitDepth, ColorType, Encoder};
use tracing::debug;

use crate::image_pipeline::codec::writer::RasterWriter;
use crate::image_pipeline::common::error::{Result, TrimError};
use crate::image_pipeline::raster::{Raster, RasterView};

/// Writes 8-bit RGBA PNG, keeping the alpha channel.
pub struct PngRasterWriter;

impl RasterWriter for PngRasterWriter {
    fn write_raster(&self, image: &Raster, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding PNG image: {}x{}", image.width(), image.height());

        let mut encoder = Encoder::new(output, image.width(), image.height());
        encoder.set_color(ColorType::Rgba);
        encoder.set_depth(BitDepth::Eight);

        let mut writer = encoder
            .write_header()
            .map_err(|e| TrimError::EncodeError(format!("PNG header: {}", e)))?;
        writer
            .write_image_data(image.data())
            .map_err(|e| TrimError::EncodeError(format!("PNG data: {}", e)))?;
        writer
            .finish()
            .map_err(|e| TrimError::EncodeError(format!("PNG finish: {}", e)))?;

        debug!("PNG encoding complete");
        Ok(())
    }
}
