use std::io::{Cursor, Write};

use tiff::encoder::TiffEncoder;
use tiff::encoder::colortype::RGBA8;
use tiff::tags::Predictor;
use tracing::debug;

use crate::image_pipeline::codec::types::TiffCompression;
use crate::image_pipeline::codec::writer::RasterWriter;
use crate::image_pipeline::common::error::{Result, TrimError};
use crate::image_pipeline::raster::{Raster, RasterView};

/// Writes 8-bit RGBA TIFF.
#[derive(Debug, Clone, Default)]
pub struct TiffRasterWriter {
    pub compression: TiffCompression,
    /// Apply horizontal differencing before compression
    pub horizontal_predictor: bool,
}

impl TiffRasterWriter {
    pub fn new(compression: TiffCompression) -> Self {
        Self {
            compression,
            horizontal_predictor: false,
        }
    }

    pub fn with_horizontal_predictor(mut self, enable: bool) -> Self {
        self.horizontal_predictor = enable;
        self
    }

    fn predictor(&self) -> Predictor {
        if self.horizontal_predictor {
            Predictor::Horizontal
        } else {
            Predictor::None
        }
    }
}

impl RasterWriter for TiffRasterWriter {
    fn write_raster(&self, image: &Raster, output: &mut dyn Write) -> Result<()> {
        debug!(
            compression = ?self.compression,
            horizontal_predictor = self.horizontal_predictor,
            "Encoding TIFF image: {}x{}",
            image.width(),
            image.height()
        );

        // TiffEncoder needs Seek, so encode into memory and copy out.
        let mut buffer = Cursor::new(Vec::new());
        TiffEncoder::new(&mut buffer)
            .map_err(|e| TrimError::EncodeError(e.to_string()))?
            .with_compression(self.compression.into())
            .with_predictor(self.predictor())
            .write_image::<RGBA8>(image.width(), image.height(), image.data())
            .map_err(|e| TrimError::EncodeError(e.to_string()))?;

        output.write_all(buffer.get_ref())?;

        debug!(bytes = buffer.get_ref().len(), "TIFF encoding complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::raster::Pixel;

    fn decode(bytes: Vec<u8>) -> (u32, u32, Vec<u8>) {
        let mut decoder = tiff::decoder::Decoder::new(std::io::Cursor::new(bytes)).unwrap();
        let (width, height) = decoder.dimensions().unwrap();
        match decoder.read_image().unwrap() {
            tiff::decoder::DecodingResult::U8(data) => (width, height, data),
            _ => panic!("expected 8-bit samples"),
        }
    }

    #[test]
    fn test_writes_rgba_tiff() {
        for compression in [TiffCompression::None, TiffCompression::Lzw, TiffCompression::DeflateBest] {
            let mut raster = Raster::filled(4, 3, Pixel::opaque(10, 20, 30)).unwrap();
            raster.set_transparent(3, 2);

            let mut output = Vec::new();
            TiffRasterWriter::new(compression).write_raster(&raster, &mut output).unwrap();

            let (width, height, data) = decode(output);
            assert_eq!((width, height), (4, 3));
            assert_eq!(data, raster.data());
        }
    }

    #[test]
    fn test_horizontal_predictor_round_trips() {
        let data = (0..6 * 5)
            .flat_map(|i| [i as u8, (i * 3) as u8, 200, if i % 7 == 0 { 0 } else { 255 }])
            .collect();
        let raster = Raster::new(6, 5, data).unwrap();

        let mut output = Vec::new();
        TiffRasterWriter::new(TiffCompression::Lzw)
            .with_horizontal_predictor(true)
            .write_raster(&raster, &mut output)
            .unwrap();

        let (width, height, decoded) = decode(output);
        assert_eq!((width, height), (6, 5));
        assert_eq!(decoded, raster.data());
    }
}
