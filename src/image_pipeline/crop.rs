//! Cropping to the foreground bounds

use tracing::debug;

use crate::image_pipeline::analysis::BoundingRect;
use crate::image_pipeline::common::error::{Result, TrimError};
use crate::image_pipeline::raster::types::CHANNELS;
use crate::image_pipeline::raster::{Pixel, Raster, RasterView};

/// Copies the region covered by `rect` into a new raster.
///
/// Pixel bytes are copied verbatim, alpha included. Local `(x, y)` in the
/// result is `(rect.left + x, rect.top + y)` in the source.
pub fn crop_to_bounds<V: RasterView + ?Sized>(view: &V, rect: &BoundingRect) -> Result<Raster> {
    if !rect.fits_within(view.width(), view.height()) {
        return Err(TrimError::InvalidRect(*rect));
    }

    let mut cropped = Raster::filled(rect.width(), rect.height(), Pixel::TRANSPARENT)?;
    let start = rect.left as usize * CHANNELS;
    let end = (rect.right as usize + 1) * CHANNELS;
    for y in 0..rect.height() {
        cropped
            .row_mut(y)
            .copy_from_slice(&view.row(rect.top + y)[start..end]);
    }

    debug!(width = cropped.width(), height = cropped.height(), "Cropped to foreground bounds");
    Ok(cropped)
}
