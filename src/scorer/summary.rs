use super::types::{BandCounts, QualityBand};
use crate::model::RoadSegment;
use serde::{Deserialize, Serialize};

/// Batch-level statistics over the overall quality score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_segments: usize,
    pub mean_quality: Option<f64>,
    pub best_quality: Option<f64>,
    pub worst_quality: Option<f64>,
    pub bands: BandCounts,
}

impl BatchSummary {
    pub fn from_segments(segments: &[RoadSegment]) -> Self {
        let mut summary = Self {
            total_segments: segments.len(),
            ..Default::default()
        };
        if segments.is_empty() {
            return summary;
        }

        let mut sum = 0.0;
        let mut best = f64::NEG_INFINITY;
        let mut worst = f64::INFINITY;
        for seg in segments {
            let q = seg.quality.overall;
            sum += q;
            best = best.max(q);
            worst = worst.min(q);
            summary.bands.add(QualityBand::from_score(q));
        }

        summary.mean_quality = Some(sum / segments.len() as f64);
        summary.best_quality = Some(best);
        summary.worst_quality = Some(worst);
        summary
    }
}
