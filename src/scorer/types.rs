use crate::lanes::{ByMetric, Metric};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Normalization parameters for one metric.
///
/// `limit` is the raw value at which the score reaches 0. `missing_default` is
/// the score used when the aggregate is absent or exactly zero (zero is the
/// survey equipment's "not measured" code).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricPolicy {
    pub limit: f64,
    pub missing_default: f64,
}

impl MetricPolicy {
    pub const ROUGHNESS: Self = Self {
        limit: 2400.0,
        missing_default: 0.5,
    };
    pub const RUT_DEPTH: Self = Self {
        limit: 5.0,
        missing_default: 0.5,
    };
    // No cracking / ravelling on record is the best case, not an unknown.
    pub const CRACK_AREA: Self = Self {
        limit: 5.0,
        missing_default: 1.0,
    };
    pub const RAVELLING: Self = Self {
        limit: 1.0,
        missing_default: 1.0,
    };

    pub const fn for_metric(metric: Metric) -> Self {
        match metric {
            Metric::Roughness => Self::ROUGHNESS,
            Metric::RutDepth => Self::RUT_DEPTH,
            Metric::CrackArea => Self::CRACK_AREA,
            Metric::Ravelling => Self::RAVELLING,
        }
    }
}

/// Composite weights: roughness 40%, rut 30%, crack 20%, ravelling 10%.
pub const QUALITY_WEIGHTS: ByMetric<f64> = ByMetric {
    roughness: 0.4,
    rut_depth: 0.3,
    crack_area: 0.2,
    ravelling: 0.1,
};

#[derive(
    Debug, Clone, Copy, EnumIter, Display, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum QualityBand {
    Good,
    Fair,
    Poor,
    VeryPoor,
}

impl QualityBand {
    pub fn from_score(score: f64) -> Self {
        let pct = score * 100.0;
        if pct >= 80.0 {
            Self::Good
        } else if pct >= 60.0 {
            Self::Fair
        } else if pct >= 40.0 {
            Self::Poor
        } else {
            Self::VeryPoor
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandCounts {
    pub good: usize,
    pub fair: usize,
    pub poor: usize,
    pub very_poor: usize,
}

impl BandCounts {
    pub fn add(&mut self, band: QualityBand) {
        match band {
            QualityBand::Good => self.good += 1,
            QualityBand::Fair => self.fair += 1,
            QualityBand::Poor => self.poor += 1,
            QualityBand::VeryPoor => self.very_poor += 1,
        }
    }

    pub fn get(&self, band: QualityBand) -> usize {
        match band {
            QualityBand::Good => self.good,
            QualityBand::Fair => self.fair,
            QualityBand::Poor => self.poor,
            QualityBand::VeryPoor => self.very_poor,
        }
    }
}
