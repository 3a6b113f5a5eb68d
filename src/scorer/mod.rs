pub mod aggregate;
pub mod engine;
pub mod loader;
pub mod normalize;
pub mod setup;
pub mod summary;
pub mod types;

pub use self::summary::BatchSummary;
pub use self::types::{MetricPolicy, QualityBand, QUALITY_WEIGHTS};
use crate::error::RsResult;
use crate::lanes::ByMetric;
use crate::model::{RawMeasurementRow, RoadSegment};
use tracing::{debug, info};

/// Turns survey rows into scored segments.
///
/// Holds only the validated normalization constants; scoring is a pure
/// function of the input rows.
#[derive(Debug, Clone)]
pub struct Scorer {
    pub policies: ByMetric<MetricPolicy>,
    pub weights: ByMetric<f64>,
}

impl Scorer {
    pub fn new() -> RsResult<Self> {
        let policies = ByMetric::from_fn(MetricPolicy::for_metric);
        setup::validate_constants(&policies, &QUALITY_WEIGHTS)?;
        Ok(Self {
            policies,
            weights: QUALITY_WEIGHTS,
        })
    }

    pub fn score_row(&self, id: u64, row: &RawMeasurementRow) -> RoadSegment {
        engine::score_row(self, id, row)
    }

    /// Scores a whole ingestion batch. Segment ids follow input order, starting at 1.
    pub fn score_batch(&self, rows: &[RawMeasurementRow]) -> RsResult<Vec<RoadSegment>> {
        let mut segments = Vec::with_capacity(rows.len());
        for (idx, row) in rows.iter().enumerate() {
            let id = idx as u64 + 1;
            row.validate(idx + 1)?;
            let seg = self.score_row(id, row);
            debug!(id, quality = seg.quality.overall, "scored segment");
            segments.push(seg);
        }
        info!(segments = segments.len(), "quality scores calculated");
        Ok(segments)
    }
}
