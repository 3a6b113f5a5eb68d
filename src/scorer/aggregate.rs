use crate::lanes::{ByMetric, BySpan, SideReadings, Span};

/// Arithmetic mean of the populated lanes in `span`, summed in survey column order.
pub fn span_average(readings: &SideReadings, span: Span) -> Option<f64> {
    let (sum, count) = readings
        .iter()
        .filter(|(side, _, _)| span.covers(*side))
        .filter_map(|(_, _, value)| value)
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

pub fn span_averages(readings: &SideReadings) -> BySpan<Option<f64>> {
    BySpan::from_fn(|span| span_average(readings, span))
}

pub fn metric_averages(readings: &ByMetric<SideReadings>) -> ByMetric<BySpan<Option<f64>>> {
    ByMetric::from_fn(|metric| span_averages(readings.get(metric)))
}
