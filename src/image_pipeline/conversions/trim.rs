use std::io::Write;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{info, instrument, warn};

use crate::image_pipeline::{
    codec::{PngRasterReader, PngRasterWriter, RasterReader, RasterWriter},
    common::error::{Result, TrimError},
    config::TrimConfig,
    generator::Generator,
    raster::RasterView,
};

pub struct TrimPipeline<R: RasterReader, W: RasterWriter> {
    reader: R,
    writer: W,
    generator: Generator,
}

impl TrimPipeline<PngRasterReader, PngRasterWriter> {
    pub fn new(config: TrimConfig) -> Self {
        Self {
            reader: PngRasterReader,
            writer: PngRasterWriter,
            generator: Generator::new(config),
        }
    }
}

impl<R: RasterReader, W: RasterWriter> TrimPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: TrimConfig) -> Self {
        Self {
            reader,
            writer,
            generator: Generator::new(config),
        }
    }

    fn validate_dimensions(&self, width: u32, height: u32) -> Result<()> {
        let config = self.generator.config();
        if !config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(TrimError::InvalidDimensions(width, height));
        }

        if let Some(max) = config.max_dimension
            && (width > max || height > max)
        {
            return Err(TrimError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        info!("Starting trim");

        let image = {
            let _span = tracing::info_span!("decode").entered();
            self.reader.read_raster(input_data)?
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = image.width(),
                height = image.height()
            ).entered();
            self.validate_dimensions(image.width(), image.height())?;
        }

        let trimmed = self.generator.generate(&image)?;

        {
            let _span = tracing::info_span!("encode").entered();
            self.writer.write_raster(&trimmed, output)?;
        }

        info!(
            source_width = image.width(),
            source_height = image.height(),
            width = trimmed.width(),
            height = trimmed.height(),
            "Conversion complete"
        );
        Ok(())
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                TrimError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        // Nothing is written unless the whole trim succeeds.
        let mut encoded = Vec::new();
        self.convert(&input_data, &mut encoded)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            std::fs::write(output_path, &encoded).map_err(|e| {
                TrimError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        Ok(())
    }

    /// Converts every `(input, output)` pair, one image per rayon task.
    ///
    /// Results come back in the order of `jobs`; a failure only affects its own entry.
    #[instrument(skip_all, fields(jobs = jobs.len()))]
    pub fn convert_batch(&self, jobs: &[(PathBuf, PathBuf)]) -> Vec<Result<()>>
    where
        R: Sync,
        W: Sync,
    {
        let results: Vec<Result<()>> = jobs
            .par_iter()
            .map(|(input, output)| {
                let result = self.convert_file(input, output);
                if let Err(e) = &result {
                    warn!(input = %input.display(), error = %e, "Trim failed");
                }
                result
            })
            .collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        info!(succeeded = results.len() - failed, failed, "Batch complete");
        results
    }

    pub fn config(&self) -> &TrimConfig {
        self.generator.config()
    }

    pub fn set_config(&mut self, config: TrimConfig) {
        self.generator = Generator::new(config);
    }
}
