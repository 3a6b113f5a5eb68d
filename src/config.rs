use crate::error::{RoadError, RsResult};
use crate::matcher::DEFAULT_RADIUS_M;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub ingest: IngestParams,
    #[command(flatten)]
    pub matching: MatchParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestParams {
    /// Lines above the column-name header (the survey export carries a lane-header row)
    #[arg(long, default_value_t = 1)]
    pub header_rows_to_skip: usize,
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,
    /// Index of the first lane coordinate column
    #[arg(long, default_value_t = 5)]
    pub coordinate_block_start: usize,
}

impl Default for IngestParams {
    fn default() -> Self {
        Self {
            header_rows_to_skip: 1,
            delimiter: ',',
            coordinate_block_start: 5,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchParams {
    /// Search radius in meters
    #[arg(long = "radius", default_value_t = DEFAULT_RADIUS_M)]
    pub radius_m: f64,
}

impl Default for MatchParams {
    fn default() -> Self {
        Self {
            radius_m: DEFAULT_RADIUS_M,
        }
    }
}

impl IngestParams {
    pub fn delimiter_byte(&self) -> RsResult<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(RoadError::Config(format!(
                "delimiter '{}' is not a single-byte character",
                self.delimiter
            )))
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> RsResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RoadError::Config(format!("failed to read '{}': {}", path.display(), e))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overlays only the values the user typed on the command line.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(ingest.header_rows_to_skip);
        update_if_present!(ingest.delimiter);
        update_if_present!(ingest.coordinate_block_start);
        update_if_present!(matching.radius_m);
    }
}
