use super::aggregate::metric_averages;
use super::normalize::score_value;
use super::Scorer;
use crate::lanes::{ByMetric, BySpan, Span};
use crate::model::{RawMeasurementRow, RoadSegment};

/// Weighted sum of the four metric scores. Defaults count like any other score.
pub fn composite(scores: &ByMetric<f64>, weights: &ByMetric<f64>) -> f64 {
    scores.roughness * weights.roughness
        + scores.rut_depth * weights.rut_depth
        + scores.crack_area * weights.crack_area
        + scores.ravelling * weights.ravelling
}

pub fn score_averages(
    scorer: &Scorer,
    averages: &ByMetric<BySpan<Option<f64>>>,
) -> ByMetric<BySpan<f64>> {
    ByMetric::from_fn(|metric| {
        let policy = scorer.policies.get(metric);
        let spans = averages.get(metric);
        BySpan::from_fn(|span| score_value(policy, *spans.get(span)))
    })
}

pub fn span_quality(scorer: &Scorer, scores: &ByMetric<BySpan<f64>>) -> BySpan<f64> {
    BySpan::from_fn(|span: Span| {
        let per_metric = ByMetric::from_fn(|metric| *scores.get(metric).get(span));
        composite(&per_metric, &scorer.weights)
    })
}

pub fn score_row(scorer: &Scorer, id: u64, row: &RawMeasurementRow) -> RoadSegment {
    let averages = metric_averages(&row.readings);
    let scores = score_averages(scorer, &averages);
    let quality = span_quality(scorer, &scores);

    RoadSegment {
        id,
        nh_number: row.nh_number.clone(),
        start_chainage: row.start_chainage,
        end_chainage: row.end_chainage,
        length: row.length,
        structure_details: row.structure_details.clone(),
        remark: row.remark.clone(),
        geometry: row.geometry,
        limits: row.limits,
        readings: row.readings,
        averages,
        scores,
        quality,
    }
}
