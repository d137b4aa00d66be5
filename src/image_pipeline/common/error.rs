use std::fmt;

use thiserror::Error;

use crate::image_pipeline::analysis::BoundingRect;

/// Silhouette edge processed by the straightening stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Top,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Left => f.write_str("left"),
            Edge::Top => f.write_str("top"),
        }
    }
}

#[derive(Error, Debug)]
pub enum TrimError {
    #[error("Invalid raster: {width}x{height} with {len} bytes (expected width*height*4)")]
    InvalidInput { width: u32, height: u32, len: usize },

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(u32, u32),

    #[error("No foreground pixel found: every pixel matches the corner background")]
    NoForegroundFound,

    #[error("Bounding rectangle {0:?} does not fit the image")]
    InvalidRect(BoundingRect),

    #[error("Straightening band for the {edge} edge contains no foreground line")]
    DegenerateBand { edge: Edge },

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Failed to encode image: {0}")]
    EncodeError(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TrimError>;
