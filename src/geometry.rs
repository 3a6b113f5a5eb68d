use crate::lanes::{Side, LANES_PER_SIDE};
use serde::{Deserialize, Serialize};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Lanes whose boundary endpoints take part in nearest-segment lookup.
pub const PROBED_LANES: [usize; 2] = [1, 2];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

/// Great-circle distance in meters between two points given in decimal degrees.
pub fn haversine_m(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = lat2 - lat1;
    let dlon = b.lon.to_radians() - a.lon.to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // rounding can push h a hair above 1 for antipodal points
    let c = 2.0 * h.sqrt().min(1.0).asin();
    EARTH_RADIUS_KM * c * 1000.0
}

/// A recorded latitude/longitude column pair. Either half may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSlot {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl CoordinateSlot {
    pub fn at(lat: f64, lon: f64) -> Self {
        Self {
            latitude: Some(lat),
            longitude: Some(lon),
        }
    }

    /// Usable point, only when both halves are present and finite.
    pub fn point(&self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => {
                Some(GeoPoint::new(lat, lon))
            }
            _ => None,
        }
    }

    pub fn is_partial(&self) -> bool {
        self.latitude.is_some() != self.longitude.is_some()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LaneLine {
    pub start: CoordinateSlot,
    pub end: CoordinateSlot,
}

/// Start/end coordinates for every lane of a chainage interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentGeometry {
    pub left: [LaneLine; LANES_PER_SIDE],
    pub right: [LaneLine; LANES_PER_SIDE],
}

impl SegmentGeometry {
    /// `lane` is 1-based, as in the survey column names.
    pub fn lane(&self, side: Side, lane: usize) -> Option<&LaneLine> {
        let lanes = match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        };
        lanes.get(lane.checked_sub(1)?)
    }

    pub fn lane_mut(&mut self, side: Side, lane: usize) -> Option<&mut LaneLine> {
        let lanes = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        lanes.get_mut(lane.checked_sub(1)?)
    }

    /// All coordinate slots in survey column order (L1..L4, R1..R4; start before end).
    pub fn slots(&self) -> impl Iterator<Item = &CoordinateSlot> + '_ {
        self.left
            .iter()
            .chain(self.right.iter())
            .flat_map(|line| [&line.start, &line.end])
    }

    /// Points compared by the matcher: start and end of the probed lanes, left side first.
    pub fn probe_points(&self) -> impl Iterator<Item = GeoPoint> + '_ {
        [Side::Left, Side::Right]
            .into_iter()
            .flat_map(|side| PROBED_LANES.iter().map(move |&lane| (side, lane)))
            .filter_map(|(side, lane)| self.lane(side, lane))
            .flat_map(|line| [line.start, line.end])
            .filter_map(|slot| slot.point())
    }

    pub fn has_probe_points(&self) -> bool {
        self.probe_points().next().is_some()
    }
}
