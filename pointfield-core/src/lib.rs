//! Core data structures for pointfield
//!
//! This crate provides the columnar in-memory representation of a point cloud:
//! typed columns, ordered blocks of columns keyed by element type, and the
//! error taxonomy shared by the reader and the feature extractors.

pub mod column;
pub mod error;
pub mod point_cloud;

pub use column::*;
pub use error::*;
pub use point_cloud::*;

/// Common result type for pointfield operations
pub type Result<T> = std::result::Result<T, Error>;
