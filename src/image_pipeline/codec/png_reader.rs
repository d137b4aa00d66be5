//! PNG decoding into RGBA rasters.
//!
//! Palette and low bit depth images are expanded, 16-bit samples are reduced
//! to 8 bits, and sources without alpha are made fully opaque.

use std::io::Cursor;

use png::{ColorType, Decoder, Transformations};
use tracing::debug;

use crate::image_pipeline::codec::reader::RasterReader;
use crate::image_pipeline::common::error::{Result, TrimError};
use crate::image_pipeline::raster::Raster;

pub struct PngRasterReader;

impl RasterReader for PngRasterReader {
    fn read_raster(&self, data: &[u8]) -> Result<Raster> {
        debug!("Decoding PNG image, {} bytes", data.len());

        let mut decoder = Decoder::new(Cursor::new(data));
        decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
        let mut reader = decoder
            .read_info()
            .map_err(|e| TrimError::DecodeError(format!("PNG header: {}", e)))?;

        let buf_size = reader
            .output_buffer_size()
            .ok_or_else(|| TrimError::DecodeError("PNG output buffer size overflows".to_string()))?;
        let mut buf = vec![0; buf_size];
        let info = reader
            .next_frame(&mut buf)
            .map_err(|e| TrimError::DecodeError(format!("PNG frame: {}", e)))?;

        let (width, height) = (info.width, info.height);
        if width == 0 || height == 0 {
            return Err(TrimError::DecodeError(format!("degenerate dimensions {}x{}", width, height)));
        }

        let samples = match info.color_type {
            ColorType::Grayscale => 1,
            ColorType::GrayscaleAlpha => 2,
            ColorType::Rgb => 3,
            ColorType::Rgba => 4,
            other => {
                return Err(TrimError::UnsupportedFormat(format!(
                    "PNG color type {:?} after expansion",
                    other
                )));
            }
        };

        let mut rgba = Vec::with_capacity(width as usize * height as usize * 4);
        for line in buf[..info.buffer_size()].chunks_exact(info.line_size) {
            for px in line[..width as usize * samples].chunks_exact(samples) {
                let pixel = match *px {
                    [g] => [g, g, g, u8::MAX],
                    [g, a] => [g, g, g, a],
                    [r, g, b] => [r, g, b, u8::MAX],
                    [r, g, b, a] => [r, g, b, a],
                    _ => unreachable!("chunks_exact yields {} samples", samples),
                };
                rgba.extend_from_slice(&pixel);
            }
        }

        debug!("Decoded image: {}x{} ({:?})", width, height, info.color_type);
        Raster::new(width, height, rgba)
    }
}
