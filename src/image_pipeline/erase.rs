//! Border erasure module
//!
//! Turns residual background along the edges of a cropped raster transparent,
//! then optionally flattens the left and top silhouette edges.

mod border;
mod straighten;

pub use border::erase_borders;
pub use straighten::{StraightenReport, straighten_edges};

use crate::image_pipeline::analysis::ForegroundPredicate;
use crate::image_pipeline::raster::{Raster, RasterView};

/// Erases pixels along `line` until the first foreground pixel in `snapshot`.
///
/// Returns how many pixels were written.
fn erase_until_foreground<I>(
    snapshot: &Raster,
    output: &mut Raster,
    predicate: &ForegroundPredicate,
    line: I,
) -> usize
where
    I: IntoIterator<Item = (u32, u32)>,
{
    let mut erased = 0;
    for (x, y) in line {
        if predicate.is_foreground(snapshot.pixel(x, y)) {
            break;
        }
        output.set_transparent(x, y);
        erased += 1;
    }
    erased
}

/// Offset along `line` of the first foreground pixel in `snapshot`.
fn first_foreground<I>(snapshot: &Raster, predicate: &ForegroundPredicate, line: I) -> Option<u32>
where
    I: IntoIterator<Item = (u32, u32)>,
{
    line.into_iter()
        .position(|(x, y)| predicate.is_foreground(snapshot.pixel(x, y)))
        .map(|offset| offset as u32)
}
