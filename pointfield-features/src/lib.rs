//! # Pointfield Features
//!
//! Per-point statistical feature extraction over neighborhoods of a decoded
//! point cloud. An extractor declares the features it requires and provides,
//! and computes one value per target point from the source rows selected by a
//! neighborhood.

pub mod extractor;
pub mod kurtosis;

pub use extractor::*;
pub use kurtosis::*;
