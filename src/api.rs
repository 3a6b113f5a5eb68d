use crate::config::IngestParams;
use crate::error::RsResult;
use crate::matcher::{nearest_segment, MatchOutcome, Query};
use crate::model::RoadSegment;
use crate::scorer::loader::load_survey_file;
use crate::scorer::{BatchSummary, Scorer};
use crate::store::SegmentStore;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Service: load a survey CSV, score it, and replace the stored collection.
pub fn ingest_csv<S, P>(store: &S, csv_path: P, params: &IngestParams) -> RsResult<BatchSummary>
where
    S: SegmentStore + ?Sized,
    P: AsRef<Path>,
{
    let rows = load_survey_file(csv_path, params)?;
    let scorer = Scorer::new()?;
    let segments = scorer.score_batch(&rows)?;
    let summary = BatchSummary::from_segments(&segments);
    store.replace_all(segments)?;
    info!(
        total = summary.total_segments,
        mean = ?summary.mean_quality,
        "ingestion complete"
    );
    Ok(summary)
}

/// Wire shape of a lookup result.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LocateResponse {
    pub segment: Option<RoadSegment>,
    pub distance: Option<f64>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub no_match: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<MatchOutcome<'_>> for LocateResponse {
    fn from(outcome: MatchOutcome<'_>) -> Self {
        match outcome {
            MatchOutcome::Found {
                segment,
                distance_m,
            } => Self {
                segment: Some(segment.clone()),
                distance: Some(distance_m),
                no_match: false,
                requested_radius: None,
                message: None,
            },
            MatchOutcome::NoMatch { requested_radius } => Self {
                segment: None,
                distance: None,
                no_match: true,
                requested_radius: Some(requested_radius),
                message: Some(format!(
                    "No road segment found within {} meters",
                    requested_radius
                )),
            },
        }
    }
}

/// Service: nearest stored segment to a point.
pub fn locate<S>(store: &S, lat: f64, lng: f64, radius_m: f64) -> RsResult<LocateResponse>
where
    S: SegmentStore + ?Sized,
{
    // Bad input is rejected before the store is touched.
    let query = Query::new(lat, lng, radius_m)?;
    let snapshot = store.snapshot()?;
    Ok(nearest_segment(&snapshot, &query).into())
}

/// One line of a batch query file (`lat,lng`). Fields stay raw so a bad cell
/// fails that query only.
#[derive(Deserialize, Debug, Clone)]
pub struct PointQuery {
    pub lat: String,
    pub lng: String,
}

impl PointQuery {
    fn coordinates(&self) -> (f64, f64) {
        let parse = |s: &str| s.trim().parse::<f64>().unwrap_or(f64::NAN);
        (parse(&self.lat), parse(&self.lng))
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct BatchEntry {
    pub lat: String,
    pub lng: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<LocateResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn load_queries<R: Read>(reader: R) -> RsResult<Vec<PointQuery>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut queries = Vec::new();
    for result in rdr.deserialize() {
        queries.push(result?);
    }
    Ok(queries)
}

/// Service: many lookups against a single snapshot, matched in parallel.
/// Output order follows `queries`.
pub fn locate_batch<S>(store: &S, queries: &[PointQuery], radius_m: f64) -> RsResult<Vec<BatchEntry>>
where
    S: SegmentStore + ?Sized,
{
    let snapshot = store.snapshot()?;
    let segments: &[RoadSegment] = &snapshot;

    let entries: Vec<BatchEntry> = queries
        .par_iter()
        .map(|q| {
            let (lat, lng) = q.coordinates();
            let (result, error): (Option<LocateResponse>, Option<String>) =
                match Query::new(lat, lng, radius_m) {
                    Ok(query) => (Some(nearest_segment(segments, &query).into()), None),
                    Err(e) => (None, Some(e.to_string())),
                };
            BatchEntry {
                lat: q.lat.clone(),
                lng: q.lng.clone(),
                result,
                error,
            }
        })
        .collect();

    let matched = entries
        .iter()
        .filter(|e| e.result.as_ref().is_some_and(|r| !r.no_match))
        .count();
    info!(queries = entries.len(), matched, "batch lookup complete");
    Ok(entries)
}

/// Service: the full stored collection.
pub fn list_segments<S>(store: &S) -> RsResult<Arc<Vec<RoadSegment>>>
where
    S: SegmentStore + ?Sized,
{
    store.snapshot()
}

/// Service: statistics over the stored collection.
pub fn summarize<S>(store: &S) -> RsResult<BatchSummary>
where
    S: SegmentStore + ?Sized,
{
    let snapshot = store.snapshot()?;
    Ok(BatchSummary::from_segments(&snapshot))
}
