use tracing::debug;

use crate::image_pipeline::analysis::types::{BoundingRect, ColorThreshold, ForegroundPredicate};
use crate::image_pipeline::common::error::{Result, TrimError};
use crate::image_pipeline::raster::{RasterView, validate_layout};

/// Result of analyzing one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundAnalysis {
    pub predicate: ForegroundPredicate,
    pub bounds: BoundingRect,
}

/// Estimates the background from the corners and finds the foreground bounds.
///
/// Views with a zero dimension or a buffer that does not match their size are
/// rejected with `TrimError::InvalidInput` before any pixel is read.
pub fn analyze<V: RasterView + ?Sized>(view: &V, color_margin: u8) -> Result<BackgroundAnalysis> {
    validate_layout(view.width(), view.height(), view.as_bytes().len())?;

    let threshold = ColorThreshold::from_corners(view);
    debug!(threshold = ?threshold.channels(), color_margin, "Estimated background threshold");

    let predicate = ForegroundPredicate::new(threshold, color_margin);
    let bounds = find_bounds(view, &predicate)?;
    Ok(BackgroundAnalysis { predicate, bounds })
}

/// Scans each edge inward for the first row or column holding a foreground pixel.
///
/// Every scan covers the full orthogonal extent of the image.
pub fn find_bounds<V: RasterView + ?Sized>(
    view: &V,
    predicate: &ForegroundPredicate,
) -> Result<BoundingRect> {
    let (width, height) = (view.width(), view.height());
    let row_has_foreground = |y: u32| (0..width).any(|x| predicate.is_foreground(view.pixel(x, y)));
    let column_has_foreground = |x: u32| (0..height).any(|y| predicate.is_foreground(view.pixel(x, y)));

    let top = (0..height).find(|&y| row_has_foreground(y));
    let bottom = (0..height).rev().find(|&y| row_has_foreground(y));
    let left = (0..width).find(|&x| column_has_foreground(x));
    let right = (0..width).rev().find(|&x| column_has_foreground(x));

    match (left, top, right, bottom) {
        (Some(left), Some(top), Some(right), Some(bottom)) => {
            let rect = BoundingRect { left, top, right, bottom };
            debug!(?rect, "Found foreground bounds");
            Ok(rect)
        }
        _ => Err(TrimError::NoForegroundFound),
    }
}
