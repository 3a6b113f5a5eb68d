#![allow(dead_code)]

use roadscore::geometry::{CoordinateSlot, LaneLine};
use roadscore::lanes::{Metric, Side, LANES_PER_SIDE};
use roadscore::model::{RawMeasurementRow, RoadSegment};
use roadscore::scorer::loader::{
    lane_column_name, limit_column_name, COL_END_CHAINAGE, COL_LENGTH, COL_NH_NUMBER, COL_REMARK,
    COL_START_CHAINAGE, COL_STRUCTURE, COORDINATE_BLOCK_LEN,
};
use roadscore::scorer::Scorer;
use std::collections::HashMap;
use strum::IntoEnumIterator;

pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Point `meters` due north of (`lat`, `lon`) on the haversine sphere.
pub fn north_of(lat: f64, lon: f64, meters: f64) -> (f64, f64) {
    (lat + (meters / EARTH_RADIUS_M).to_degrees(), lon)
}

/// Column names in survey export order: 5 identity columns, the 32-column
/// coordinate block, then remark, limits and lane readings.
pub fn survey_headers() -> Vec<String> {
    let mut headers: Vec<String> = [
        COL_NH_NUMBER,
        COL_START_CHAINAGE,
        COL_END_CHAINAGE,
        COL_LENGTH,
        COL_STRUCTURE,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    for side in [Side::Left, Side::Right] {
        for lane in 1..=LANES_PER_SIDE {
            for part in ["Start Lat", "Start Lon", "End Lat", "End Lon"] {
                headers.push(format!("{}{} {}", side.prefix(), lane, part));
            }
        }
    }
    debug_assert_eq!(headers.len(), 5 + COORDINATE_BLOCK_LEN);

    headers.push(COL_REMARK.to_string());
    for metric in Metric::iter() {
        headers.push(limit_column_name(metric).to_string());
    }
    for metric in Metric::iter() {
        for side in [Side::Left, Side::Right] {
            for lane in 1..=LANES_PER_SIDE {
                headers.push(lane_column_name(metric, side, lane));
            }
        }
    }
    headers
}

fn coordinate_index(side: Side, lane: usize) -> usize {
    let side_offset = match side {
        Side::Left => 0,
        Side::Right => LANES_PER_SIDE,
    };
    5 + (side_offset + lane - 1) * 4
}

/// One data line of a survey export, cell by cell.
#[derive(Clone)]
pub struct SurveyRow {
    cells: HashMap<String, String>,
    coords: Vec<String>,
}

impl SurveyRow {
    pub fn new(nh: &str, start: f64, end: f64) -> Self {
        let mut cells = HashMap::new();
        cells.insert(COL_NH_NUMBER.to_string(), nh.to_string());
        cells.insert(COL_START_CHAINAGE.to_string(), start.to_string());
        cells.insert(COL_END_CHAINAGE.to_string(), end.to_string());
        cells.insert(COL_LENGTH.to_string(), format!("{}", (end - start).abs()));
        Self {
            cells,
            coords: vec![String::new(); COORDINATE_BLOCK_LEN],
        }
    }

    pub fn cell(mut self, column: &str, value: &str) -> Self {
        self.cells.insert(column.to_string(), value.to_string());
        self
    }

    pub fn reading(self, metric: Metric, side: Side, lane: usize, value: &str) -> Self {
        let name = lane_column_name(metric, side, lane);
        self.cell(&name, value)
    }

    pub fn lane_start(mut self, side: Side, lane: usize, lat: f64, lon: f64) -> Self {
        let i = coordinate_index(side, lane) - 5;
        self.coords[i] = lat.to_string();
        self.coords[i + 1] = lon.to_string();
        self
    }

    pub fn lane_end(mut self, side: Side, lane: usize, lat: f64, lon: f64) -> Self {
        let i = coordinate_index(side, lane) - 5;
        self.coords[i + 2] = lat.to_string();
        self.coords[i + 3] = lon.to_string();
        self
    }

    pub fn coordinate_cell(mut self, offset: usize, value: &str) -> Self {
        self.coords[offset] = value.to_string();
        self
    }

    pub fn to_fields(&self, headers: &[String]) -> Vec<String> {
        headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                if (5..5 + COORDINATE_BLOCK_LEN).contains(&i) {
                    self.coords[i - 5].clone()
                } else {
                    self.cells.get(h).cloned().unwrap_or_default()
                }
            })
            .collect()
    }
}

fn csv_line(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| {
            if f.contains(',') || f.contains('"') {
                format!("\"{}\"", f.replace('"', "\"\""))
            } else {
                f.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Full export text: lane-group banner line, header line, data lines.
pub fn survey_csv(rows: &[SurveyRow]) -> String {
    let headers = survey_headers();
    let mut out = String::new();
    out.push_str(&csv_line(&vec!["Lane Details".to_string(); headers.len()]));
    out.push('\n');
    out.push_str(&csv_line(&headers));
    out.push('\n');
    for row in rows {
        out.push_str(&csv_line(&row.to_fields(&headers)));
        out.push('\n');
    }
    out
}

/// Scored segment whose only geometry is the L1 start point.
pub fn segment_at(id: u64, lat: f64, lon: f64) -> RoadSegment {
    let mut row = RawMeasurementRow {
        nh_number: Some("NH48".to_string()),
        start_chainage: Some(id as f64),
        end_chainage: Some(id as f64 + 1.0),
        ..Default::default()
    };
    if let Some(line) = row.geometry.lane_mut(Side::Left, 1) {
        *line = LaneLine {
            start: CoordinateSlot::at(lat, lon),
            end: CoordinateSlot::default(),
        };
    }
    Scorer::new().unwrap().score_row(id, &row)
}

/// Scored segment with no usable coordinates at all.
pub fn segment_without_geometry(id: u64) -> RoadSegment {
    let row = RawMeasurementRow {
        nh_number: Some("NH48".to_string()),
        ..Default::default()
    };
    Scorer::new().unwrap().score_row(id, &row)
}
