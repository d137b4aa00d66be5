//! Image processing pipeline module
//!
//! This module trims photographed or scanned objects off a roughly uniform
//! background: the background color is estimated from the image corners, the
//! image is cropped to the foreground, and leftover background along the edges
//! is made transparent. Codecs and file orchestration live alongside.

pub mod analysis;
pub mod codec;
pub mod common;
pub mod config;
pub mod conversions;
pub mod crop;
pub mod erase;
pub mod generator;
pub mod raster;

pub use common::{
    Edge,
    Result,
    TrimError,
};

pub use raster::{
    Pixel,
    Raster,
    RasterRef,
    RasterView,
};

pub use analysis::{
    BackgroundAnalysis,
    BoundingRect,
    ColorThreshold,
    ForegroundPredicate,
    analyze,
    find_bounds,
};

pub use crop::crop_to_bounds;

pub use erase::{
    StraightenReport,
    erase_borders,
    straighten_edges,
};

pub use config::{
    EraseMargins,
    StraightenMargins,
    TrimConfig,
    TrimConfigBuilder,
};

pub use generator::{
    Generator,
    generate,
    generate_with,
};

pub use codec::{
    OutputFormat,
    PngRasterReader,
    PngRasterWriter,
    RasterReader,
    RasterWriter,
    TiffCompression,
    TiffRasterWriter,
};

pub use conversions::TrimPipeline;
