use super::types::MetricPolicy;
use crate::error::{RoadError, RsResult};
use crate::lanes::{ByMetric, Metric};
use strum::IntoEnumIterator;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Checked once when a `Scorer` is built; normalization divides by `limit`.
pub fn validate_constants(policies: &ByMetric<MetricPolicy>, weights: &ByMetric<f64>) -> RsResult<()> {
    for metric in Metric::iter() {
        let p = policies.get(metric);
        if !p.limit.is_finite() || p.limit <= 0.0 {
            return Err(RoadError::InvalidConstant(format!(
                "{} limit must be a positive finite number, got {}",
                metric, p.limit
            )));
        }
        if !(0.0..=1.0).contains(&p.missing_default) {
            return Err(RoadError::InvalidConstant(format!(
                "{} default score {} is outside [0, 1]",
                metric, p.missing_default
            )));
        }
        let w = *weights.get(metric);
        if !(0.0..=1.0).contains(&w) {
            return Err(RoadError::InvalidConstant(format!(
                "{} weight {} is outside [0, 1]",
                metric, w
            )));
        }
    }

    let total: f64 = Metric::iter().map(|m| *weights.get(m)).sum();
    if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(RoadError::InvalidConstant(format!(
            "quality weights sum to {}, expected 1.0",
            total
        )));
    }

    Ok(())
}
