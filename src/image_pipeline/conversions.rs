//! Pipeline conversions module
//!
//! This module contains orchestration logic for trimming encoded images,
//! from in-memory bytes, single files, or batches of files.

mod trim;

#[cfg(test)]
mod tests;

pub use trim::TrimPipeline;
