//! Trimming entry point
//!
//! Runs analysis, crop, border erasure and straightening over one image.

use tracing::{info, instrument};

use crate::image_pipeline::{
    analysis::analyze,
    common::error::Result,
    config::TrimConfig,
    crop::crop_to_bounds,
    erase::{erase_borders, straighten_edges},
    raster::{Raster, RasterView, validate_layout},
};

/// Trims images with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: TrimConfig,
}

impl Generator {
    pub fn new(config: TrimConfig) -> Self {
        Self { config }
    }

    pub fn generate<V: RasterView + ?Sized>(&self, input: &V) -> Result<Raster> {
        generate_with(input, &self.config)
    }

    pub fn config(&self) -> &TrimConfig {
        &self.config
    }
}

/// Trims `input` with the default configuration.
pub fn generate<V: RasterView + ?Sized>(input: &V) -> Result<Raster> {
    generate_with(input, &TrimConfig::default())
}

/// Crops `input` to its foreground and erases the residual background along its edges.
///
/// The input is never modified; the returned raster is a new allocation.
/// Either every stage succeeds or an error is returned and no raster is produced.
#[instrument(skip_all, fields(width = input.width(), height = input.height()))]
pub fn generate_with<V: RasterView + ?Sized>(input: &V, config: &TrimConfig) -> Result<Raster> {
    validate_layout(input.width(), input.height(), input.as_bytes().len())?;

    let analysis = {
        let _span = tracing::info_span!("analyze").entered();
        analyze(input, config.color_margin)?
    };

    let mut output = {
        let _span = tracing::info_span!("crop",
            left = analysis.bounds.left,
            top = analysis.bounds.top,
            right = analysis.bounds.right,
            bottom = analysis.bounds.bottom
        ).entered();
        crop_to_bounds(input, &analysis.bounds)?
    };

    {
        let _span = tracing::info_span!("erase_borders").entered();
        erase_borders(&mut output, &analysis.predicate, &config.erase);
    }

    if config.straighten_edges {
        let _span = tracing::info_span!("straighten_edges").entered();
        straighten_edges(&mut output, &analysis.predicate, &config.straighten)?;
    }

    info!(
        width = output.width(),
        height = output.height(),
        transparent = output.transparent_count(),
        "Trim complete"
    );
    Ok(output)
}
