//! RGBA raster module
//!
//! This module provides the in-memory pixel buffer shared by every pipeline stage.

pub mod types;
mod view;

pub use types::{Pixel, Raster};
pub use view::{RasterRef, RasterView};
pub(crate) use view::validate_layout;
