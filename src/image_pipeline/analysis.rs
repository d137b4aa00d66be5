//! Background analysis module
//!
//! Estimates the background color from the image corners and locates the
//! bounding rectangle of everything that is not background.

mod bounds;
pub mod types;

pub use bounds::{BackgroundAnalysis, analyze, find_bounds};
pub use types::{BoundingRect, ColorThreshold, ForegroundPredicate};
