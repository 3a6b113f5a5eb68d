use crate::error::{RoadError, RsResult};
use crate::geometry::{haversine_m, GeoPoint};
use crate::model::RoadSegment;
use serde::Serialize;
use tracing::debug;

pub const DEFAULT_RADIUS_M: f64 = 100.0;

/// A validated lookup request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Query {
    pub point: GeoPoint,
    pub radius_m: f64,
}

impl Query {
    /// Rejects non-finite coordinates and negative or non-finite radii before
    /// any distance is computed.
    pub fn new(lat: f64, lon: f64, radius_m: f64) -> RsResult<Self> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(RoadError::InvalidQuery(format!(
                "coordinates must be finite, got ({}, {})",
                lat, lon
            )));
        }
        if !radius_m.is_finite() || radius_m < 0.0 {
            return Err(RoadError::InvalidQuery(format!(
                "radius must be a non-negative finite number of meters, got {}",
                radius_m
            )));
        }
        Ok(Self {
            point: GeoPoint::new(lat, lon),
            radius_m,
        })
    }

    pub fn with_default_radius(lat: f64, lon: f64) -> RsResult<Self> {
        Self::new(lat, lon, DEFAULT_RADIUS_M)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MatchOutcome<'a> {
    Found {
        segment: &'a RoadSegment,
        distance_m: f64,
    },
    NoMatch {
        requested_radius: f64,
    },
}

impl<'a> MatchOutcome<'a> {
    pub fn segment(&self) -> Option<&'a RoadSegment> {
        match self {
            Self::Found { segment, .. } => Some(*segment),
            Self::NoMatch { .. } => None,
        }
    }

    pub fn distance_m(&self) -> Option<f64> {
        match self {
            Self::Found { distance_m, .. } => Some(*distance_m),
            Self::NoMatch { .. } => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

/// Closest probe point over every segment, regardless of radius.
///
/// Exhaustive scan in snapshot order; only a strictly smaller distance
/// replaces the current best, so ties keep the first segment seen.
pub fn closest<'a>(segments: &'a [RoadSegment], point: GeoPoint) -> Option<(&'a RoadSegment, f64)> {
    let mut best: Option<(&'a RoadSegment, f64)> = None;

    for segment in segments {
        for candidate in segment.geometry.probe_points() {
            let d = haversine_m(point, candidate);
            if best.map_or(true, |(_, min)| d < min) {
                best = Some((segment, d));
            }
        }
    }

    best
}

pub fn nearest_segment<'a>(segments: &'a [RoadSegment], query: &Query) -> MatchOutcome<'a> {
    match closest(segments, query.point) {
        Some((segment, distance_m)) if distance_m <= query.radius_m => {
            debug!(id = segment.id, distance_m, "matched segment");
            MatchOutcome::Found {
                segment,
                distance_m,
            }
        }
        other => {
            debug!(
                nearest_m = ?other.map(|(_, d)| d),
                radius_m = query.radius_m,
                "no segment within radius"
            );
            MatchOutcome::NoMatch {
                requested_radius: query.radius_m,
            }
        }
    }
}

/// Validates the raw query values, then matches.
pub fn find_nearest(
    segments: &[RoadSegment],
    lat: f64,
    lon: f64,
    radius_m: f64,
) -> RsResult<MatchOutcome<'_>> {
    let query = Query::new(lat, lon, radius_m)?;
    Ok(nearest_segment(segments, &query))
}
