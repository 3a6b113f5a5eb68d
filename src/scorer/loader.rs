use crate::config::IngestParams;
use crate::error::{RoadError, RsResult};
use crate::geometry::{CoordinateSlot, SegmentGeometry};
use crate::lanes::{ByMetric, Metric, Side, SideReadings, LANES_PER_SIDE};
use crate::model::{RawMeasurementRow, RegulatoryLimits};
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::{debug, info, warn};

/// 8 lanes x (start lat, start lon, end lat, end lon).
pub const COORDINATE_BLOCK_LEN: usize = 2 * LANES_PER_SIDE * 4;

pub const COL_NH_NUMBER: &str = "NH Number";
pub const COL_START_CHAINAGE: &str = "Start Chainage";
pub const COL_END_CHAINAGE: &str = "End Chainage";
pub const COL_LENGTH: &str = "Length";
pub const COL_STRUCTURE: &str = "Structure Details";
pub const COL_REMARK: &str = "Remark";

pub fn limit_column_name(metric: Metric) -> &'static str {
    match metric {
        Metric::Roughness => "Limitation of BI as per MoRT&H Circular (in mm/km)",
        Metric::RutDepth => "Limitation of Rut Depth as per Concession Agreement (in mm)",
        Metric::CrackArea => "Limitation of Cracking as per Concession Agreement (in % area)",
        Metric::Ravelling => "Limitation of Ravelling as per Concession Agreement (in % area)",
    }
}

/// `lane` is 1-based.
pub fn lane_column_name(metric: Metric, side: Side, lane: usize) -> String {
    let p = side.prefix();
    match metric {
        Metric::Roughness => format!("{}{} Lane Roughness BI (in mm/km)", p, lane),
        Metric::RutDepth => format!("{}{} Rut Depth (in mm)", p, lane),
        Metric::CrackArea => format!("{}{} Crack Area (in % area)", p, lane),
        Metric::Ravelling => format!("{}{} Area (% area)", p, lane),
    }
}

type LaneColumns = [[Option<usize>; LANES_PER_SIDE]; 2];

/// Column positions resolved once from the header row.
#[derive(Debug, Clone)]
pub struct SurveyColumns {
    pub width: usize,
    pub nh_number: usize,
    pub start_chainage: usize,
    pub end_chainage: usize,
    pub length: Option<usize>,
    pub structure_details: Option<usize>,
    pub remark: Option<usize>,
    pub limits: ByMetric<Option<usize>>,
    pub lanes: ByMetric<LaneColumns>,
    pub coordinate_start: usize,
}

impl SurveyColumns {
    pub fn resolve(headers: &StringRecord, coordinate_start: usize, line: u64) -> RsResult<Self> {
        let names: Vec<&str> = headers.iter().map(str::trim).collect();
        let required_width = coordinate_start + COORDINATE_BLOCK_LEN;
        if names.len() < required_width {
            return Err(RoadError::MalformedRow {
                row: line as usize,
                expected: required_width,
                found: names.len(),
            });
        }

        let find = |name: &str| names.iter().position(|h| *h == name);
        let required = |name: &str| {
            find(name).ok_or_else(|| RoadError::MissingColumn {
                column: name.to_string(),
            })
        };
        let optional = |name: &str| {
            let idx = find(name);
            if idx.is_none() {
                warn!(column = name, "column not present, values treated as absent");
            }
            idx
        };

        let limits = ByMetric::from_fn(|metric| optional(limit_column_name(metric)));
        let lanes = ByMetric::from_fn(|metric| {
            let mut cols: LaneColumns = [[None; LANES_PER_SIDE]; 2];
            for (s, side) in [Side::Left, Side::Right].into_iter().enumerate() {
                for lane in 1..=LANES_PER_SIDE {
                    cols[s][lane - 1] = optional(&lane_column_name(metric, side, lane));
                }
            }
            cols
        });

        Ok(Self {
            width: names.len(),
            nh_number: required(COL_NH_NUMBER)?,
            start_chainage: required(COL_START_CHAINAGE)?,
            end_chainage: required(COL_END_CHAINAGE)?,
            length: optional(COL_LENGTH),
            structure_details: optional(COL_STRUCTURE),
            remark: optional(COL_REMARK),
            limits,
            lanes,
            coordinate_start,
        })
    }

    pub fn build_row(&self, rec: &StringRecord, line: u64) -> RsResult<RawMeasurementRow> {
        if rec.len() != self.width {
            return Err(RoadError::MalformedRow {
                row: line as usize,
                expected: self.width,
                found: rec.len(),
            });
        }

        let number = |idx: Option<usize>| idx.and_then(|i| parse_number(&rec[i]));
        let text = |idx: Option<usize>| idx.and_then(|i| parse_text(&rec[i]));

        let mut readings: ByMetric<SideReadings> = ByMetric::default();
        for metric in Metric::iter() {
            let cols = self.lanes.get(metric);
            let target = readings.get_mut(metric);
            for (s, side) in [Side::Left, Side::Right].into_iter().enumerate() {
                let values = target.side_mut(side);
                for lane in 0..LANES_PER_SIDE {
                    values[lane] = number(cols[s][lane]);
                }
            }
        }

        Ok(RawMeasurementRow {
            nh_number: text(Some(self.nh_number)),
            start_chainage: number(Some(self.start_chainage)),
            end_chainage: number(Some(self.end_chainage)),
            length: number(self.length),
            structure_details: text(self.structure_details),
            remark: text(self.remark),
            geometry: self.build_geometry(rec),
            limits: RegulatoryLimits {
                roughness_bi: number(*self.limits.get(Metric::Roughness)),
                rut_depth: number(*self.limits.get(Metric::RutDepth)),
                cracking: number(*self.limits.get(Metric::CrackArea)),
                ravelling: number(*self.limits.get(Metric::Ravelling)),
            },
            readings,
        })
    }

    /// Positional block: L1..L4 then R1..R4, each start lat, start lon, end lat, end lon.
    fn build_geometry(&self, rec: &StringRecord) -> SegmentGeometry {
        let mut geometry = SegmentGeometry::default();
        let fields: Vec<&str> = rec.iter().collect();
        let block = &fields[self.coordinate_start..self.coordinate_start + COORDINATE_BLOCK_LEN];

        for (i, quad) in block.chunks(4).enumerate() {
            let side = if i < LANES_PER_SIDE { Side::Left } else { Side::Right };
            let lane = i % LANES_PER_SIDE + 1;
            if let Some(line) = geometry.lane_mut(side, lane) {
                line.start = CoordinateSlot {
                    latitude: parse_number(quad[0]),
                    longitude: parse_number(quad[1]),
                };
                line.end = CoordinateSlot {
                    latitude: parse_number(quad[2]),
                    longitude: parse_number(quad[3]),
                };
            }
        }
        geometry
    }
}

/// Unparseable, empty and non-finite cells are "not measured".
pub fn parse_number(field: &str) -> Option<f64> {
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

pub fn parse_text(field: &str) -> Option<String> {
    let t = field.trim();
    if t.is_empty() {
        None
    } else {
        Some(t.to_string())
    }
}

pub fn load_survey<R: Read>(reader: R, params: &IngestParams) -> RsResult<Vec<RawMeasurementRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(params.delimiter_byte()?)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = rdr.records();

    for _ in 0..params.header_rows_to_skip {
        if records.next().transpose()?.is_none() {
            return Err(RoadError::MissingColumn {
                column: COL_NH_NUMBER.to_string(),
            });
        }
    }

    let header = records.next().transpose()?.ok_or_else(|| RoadError::MissingColumn {
        column: COL_NH_NUMBER.to_string(),
    })?;
    let header_line = header.position().map(|p| p.line()).unwrap_or(0);
    let columns = SurveyColumns::resolve(&header, params.coordinate_block_start, header_line)?;
    debug!(width = columns.width, "resolved survey header");

    let mut rows = Vec::new();
    for result in records {
        let rec = result?;
        let line = rec.position().map(|p| p.line()).unwrap_or(0);
        rows.push(columns.build_row(&rec, line)?);
    }

    info!(rows = rows.len(), "loaded survey rows");
    Ok(rows)
}

pub fn load_survey_file<P: AsRef<Path>>(
    path: P,
    params: &IngestParams,
) -> RsResult<Vec<RawMeasurementRow>> {
    let path = path.as_ref();
    info!(path = %path.display(), "loading survey CSV");
    let file = File::open(path)?;
    load_survey(file, params)
}
