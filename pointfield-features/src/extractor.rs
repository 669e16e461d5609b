//! The feature extraction contract

use pointfield_core::PointCloud;

/// Description of the volume a neighborhood was built from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Volume {
    Sphere { radius: f64 },
    InfiniteCylinder { radius: f64 },
}

/// Per-point feature computation over a neighborhood of source points
///
/// A neighborhood is a set of row indices into the source cloud's point
/// block. Extractors must return `f64::NAN` for an empty neighborhood
/// rather than fail, and must treat both clouds as read-only shared input.
pub trait FeatureExtractor {
    /// Feature names this extractor needs computed beforehand
    fn requires(&self) -> Vec<&'static str>;

    /// Feature names this extractor computes
    fn provides(&self) -> Vec<&'static str>;

    /// Compute the feature value for one target point
    fn extract(
        &self,
        source: &PointCloud,
        neighborhood: &[usize],
        target: &PointCloud,
        target_index: usize,
        volume: &Volume,
    ) -> f64;
}
