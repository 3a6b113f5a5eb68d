use crate::error::{RoadError, RsResult};
use crate::geometry::SegmentGeometry;
use crate::lanes::{ByMetric, BySpan, Metric, SideReadings};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::warn;

/// Contractual thresholds printed alongside each chainage interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RegulatoryLimits {
    pub roughness_bi: Option<f64>,
    pub rut_depth: Option<f64>,
    pub cracking: Option<f64>,
    pub ravelling: Option<f64>,
}

impl RegulatoryLimits {
    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Roughness => self.roughness_bi,
            Metric::RutDepth => self.rut_depth,
            Metric::CrackArea => self.cracking,
            Metric::Ravelling => self.ravelling,
        }
    }
}

/// One surveyed chainage interval as handed over by the ingestion layer.
///
/// Every numeric field is optional: `None` means "not measured" and is distinct
/// from a recorded zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMeasurementRow {
    pub nh_number: Option<String>,
    pub start_chainage: Option<f64>,
    pub end_chainage: Option<f64>,
    pub length: Option<f64>,
    pub structure_details: Option<String>,
    pub remark: Option<String>,
    pub geometry: SegmentGeometry,
    pub limits: RegulatoryLimits,
    pub readings: ByMetric<SideReadings>,
}

impl RawMeasurementRow {
    /// Rejects values the scoring core cannot represent (NaN / infinity).
    ///
    /// Half-populated coordinate pairs are tolerated; they are logged and the
    /// matcher skips them.
    pub fn validate(&self, row: usize) -> RsResult<()> {
        let invalid = |reason: String| RoadError::InvalidRow { row, reason };

        for (name, value) in [
            ("start chainage", self.start_chainage),
            ("end chainage", self.end_chainage),
            ("length", self.length),
        ] {
            if value.is_some_and(|v| !v.is_finite()) {
                return Err(invalid(format!("{} is not finite", name)));
            }
        }

        for metric in Metric::iter() {
            if self.limits.get(metric).is_some_and(|v| !v.is_finite()) {
                return Err(invalid(format!("{} limit is not finite", metric)));
            }
            for (side, lane, value) in self.readings.get(metric).iter() {
                if value.is_some_and(|v| !v.is_finite()) {
                    return Err(invalid(format!(
                        "{}{} {} reading is not finite",
                        side.prefix(),
                        lane,
                        metric
                    )));
                }
            }
        }

        let partial = self.geometry.slots().filter(|s| s.is_partial()).count();
        if partial > 0 {
            warn!(row, partial, "coordinate pairs with only one half present");
        }

        Ok(())
    }
}

/// The scored, persisted form of a chainage interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadSegment {
    pub id: u64,
    pub nh_number: Option<String>,
    pub start_chainage: Option<f64>,
    pub end_chainage: Option<f64>,
    pub length: Option<f64>,
    pub structure_details: Option<String>,
    pub remark: Option<String>,
    pub geometry: SegmentGeometry,
    pub limits: RegulatoryLimits,
    pub readings: ByMetric<SideReadings>,

    /// Mean of the populated lanes; `None` when no lane in the span has a value.
    pub averages: ByMetric<BySpan<Option<f64>>>,
    /// Normalized [0, 1] score per metric and span.
    pub scores: ByMetric<BySpan<f64>>,
    /// Weighted composite of `scores`.
    pub quality: BySpan<f64>,
}
