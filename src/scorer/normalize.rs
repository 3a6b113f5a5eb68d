use super::types::MetricPolicy;
use crate::lanes::Metric;

/// Maps a raw aggregate onto [0, 1], where 1 is a defect-free surface.
///
/// This is the only place the absent/zero default is substituted.
pub fn score_value(policy: &MetricPolicy, value: Option<f64>) -> f64 {
    match value {
        Some(v) if v != 0.0 && !v.is_nan() => ((policy.limit - v) / policy.limit).clamp(0.0, 1.0),
        _ => policy.missing_default,
    }
}

pub fn normalize(metric: Metric, value: Option<f64>) -> f64 {
    score_value(&MetricPolicy::for_metric(metric), value)
}

/// Roughness index (mm/km); 2400 and above scores 0.
pub fn roughness_score(bi: Option<f64>) -> f64 {
    score_value(&MetricPolicy::ROUGHNESS, bi)
}

pub fn rut_score(depth_mm: Option<f64>) -> f64 {
    score_value(&MetricPolicy::RUT_DEPTH, depth_mm)
}

pub fn crack_score(area_pct: Option<f64>) -> f64 {
    score_value(&MetricPolicy::CRACK_AREA, area_pct)
}

pub fn ravelling_score(area_pct: Option<f64>) -> f64 {
    score_value(&MetricPolicy::RAVELLING, area_pct)
}
