use tracing::debug;

use crate::image_pipeline::analysis::ForegroundPredicate;
use crate::image_pipeline::config::EraseMargins;
use crate::image_pipeline::erase::erase_until_foreground;
use crate::image_pipeline::raster::{Raster, RasterView};

/// Sweeps inward from all four edges, erasing background up to the first foreground pixel.
///
/// Every sweep reads from a copy of the raster taken before any pixel is
/// erased, so the outcome does not depend on sweep order. The left-to-right
/// and top-to-bottom sweeps cover every line. The right-to-left sweep is
/// limited to rows `0..=margins.top` and `height - margins.bottom..height`,
/// the bottom-to-top sweep to columns `0..=margins.left` and
/// `width - margins.right..width`.
///
/// Returns the number of pixel writes performed.
pub fn erase_borders(
    raster: &mut Raster,
    predicate: &ForegroundPredicate,
    margins: &EraseMargins,
) -> usize {
    let snapshot = raster.clone();
    let (width, height) = (snapshot.width(), snapshot.height());
    let mut erased = 0;

    // left -> right
    for y in 0..height {
        erased += erase_until_foreground(&snapshot, raster, predicate, (0..width).map(|x| (x, y)));
    }

    // top -> bottom
    for x in 0..width {
        erased += erase_until_foreground(&snapshot, raster, predicate, (0..height).map(|y| (x, y)));
    }

    // right -> left, rows near the top and bottom only
    for y in (0..height).filter(|&y| within_margins(y, height, margins.top, margins.bottom)) {
        erased += erase_until_foreground(&snapshot, raster, predicate, (0..width).rev().map(|x| (x, y)));
    }

    // bottom -> top, columns near the left and right only
    for x in (0..width).filter(|&x| within_margins(x, width, margins.left, margins.right)) {
        erased += erase_until_foreground(&snapshot, raster, predicate, (0..height).rev().map(|y| (x, y)));
    }

    debug!(erased, width, height, "Erased border background");
    erased
}

fn within_margins(index: u32, extent: u32, leading: u32, trailing: u32) -> bool {
    index <= leading || index >= extent.saturating_sub(trailing)
}
