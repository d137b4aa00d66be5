use tracing::debug;

use crate::image_pipeline::analysis::ForegroundPredicate;
use crate::image_pipeline::common::error::{Edge, Result, TrimError};
use crate::image_pipeline::config::StraightenMargins;
use crate::image_pipeline::erase::first_foreground;
use crate::image_pipeline::raster::{Raster, RasterView};

/// Band maxima and pixel counts from one straightening run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightenReport {
    /// Deepest first-foreground column over the left band.
    pub max_x: u32,
    /// Deepest first-foreground row over the top band.
    pub max_y: u32,
    /// Rows whose protruding pixel was erased.
    pub rows_flattened: usize,
    /// Columns whose protruding pixel was erased.
    pub columns_flattened: usize,
}

/// Flattens the left and top silhouette edges.
///
/// For the left edge, the first foreground column is found for every row in
/// `margins.top..height - margins.bottom` and the largest one becomes `max_x`.
/// Then every row of the raster whose first foreground column is exactly
/// `max_x - 1` loses that pixel. The top edge does the same over columns
/// `margins.left..width - margins.right`. Both edges read from a copy taken
/// before either is modified. Lines with no foreground pixel are skipped.
///
/// # Errors
///
/// `TrimError::DegenerateBand` when a band is empty or none of its lines
/// contains a foreground pixel.
pub fn straighten_edges(
    raster: &mut Raster,
    predicate: &ForegroundPredicate,
    margins: &StraightenMargins,
) -> Result<StraightenReport> {
    let snapshot = raster.clone();
    let (width, height) = (snapshot.width(), snapshot.height());

    let first_x = |y: u32| first_foreground(&snapshot, predicate, (0..width).map(|x| (x, y)));
    let first_y = |x: u32| first_foreground(&snapshot, predicate, (0..height).map(|y| (x, y)));

    let max_x = band_max(margins.top, height.saturating_sub(margins.bottom), first_x)
        .ok_or(TrimError::DegenerateBand { edge: Edge::Left })?;
    let max_y = band_max(margins.left, width.saturating_sub(margins.right), first_y)
        .ok_or(TrimError::DegenerateBand { edge: Edge::Top })?;

    let mut rows_flattened = 0;
    if let Some(target) = max_x.checked_sub(1) {
        for y in (0..height).filter(|&y| first_x(y) == Some(target)) {
            raster.set_transparent(target, y);
            rows_flattened += 1;
        }
    }

    let mut columns_flattened = 0;
    if let Some(target) = max_y.checked_sub(1) {
        for x in (0..width).filter(|&x| first_y(x) == Some(target)) {
            raster.set_transparent(x, target);
            columns_flattened += 1;
        }
    }

    let report = StraightenReport {
        max_x,
        max_y,
        rows_flattened,
        columns_flattened,
    };
    debug!(?report, "Straightened edges");
    Ok(report)
}

fn band_max(start: u32, end: u32, first: impl Fn(u32) -> Option<u32>) -> Option<u32> {
    (start..end).filter_map(first).max()
}
