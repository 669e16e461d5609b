//! Kurtosis of the height coordinate

use crate::extractor::{FeatureExtractor, Volume};
use ndarray_stats::SummaryStatisticsExt;
use pointfield_core::{keys, PointCloud};

/// Calculates the variation on the z axis
///
/// Reports the excess kurtosis of the z values in the neighborhood, so a
/// normally distributed neighborhood scores zero.
pub struct KurtosisZExtractor;

impl KurtosisZExtractor {
    const DATA_KEY: &'static str = "z";
}

impl FeatureExtractor for KurtosisZExtractor {
    fn requires(&self) -> Vec<&'static str> {
        vec![]
    }

    fn provides(&self) -> Vec<&'static str> {
        vec!["kurto_z"]
    }

    fn extract(
        &self,
        source: &PointCloud,
        neighborhood: &[usize],
        _target: &PointCloud,
        _target_index: usize,
        _volume: &Volume,
    ) -> f64 {
        if neighborhood.is_empty() {
            return f64::NAN;
        }
        let column = match source
            .block(keys::POINT)
            .and_then(|block| block.get(Self::DATA_KEY))
        {
            Some(column) => column,
            None => return f64::NAN,
        };

        let z = column.select_f64(neighborhood);
        z.kurtosis().map_or(f64::NAN, |k| k - 3.0)
    }
}
