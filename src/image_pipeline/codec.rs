//! Image codec module
//!
//! Decoding of encoded images into RGBA rasters and encoding of trimmed
//! rasters back into PNG or TIFF.

mod reader;
mod writer;
mod png_reader;
mod png_writer;
mod tiff_writer;
pub mod types;

pub use reader::RasterReader;
pub use writer::RasterWriter;
pub use png_reader::PngRasterReader;
pub use png_writer::PngRasterWriter;
pub use tiff_writer::TiffRasterWriter;
pub use types::{OutputFormat, TiffCompression};
