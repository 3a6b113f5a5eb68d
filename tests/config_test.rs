use clap::{CommandFactory, FromArgMatches, Parser};
use roadscore::config::{Config, IngestParams, MatchParams};
use roadscore::error::RoadError;
use std::io::Write;
use tempfile::NamedTempFile;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: Config,
}

fn parse(args: &[&str]) -> (Config, clap::ArgMatches) {
    let matches = TestCli::command().get_matches_from(args);
    let cli = TestCli::from_arg_matches(&matches).unwrap();
    (cli.config, matches)
}

fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", json).unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.ingest.header_rows_to_skip, 1);
    assert_eq!(config.ingest.delimiter, ',');
    assert_eq!(config.ingest.coordinate_block_start, 5);
    assert_eq!(config.matching.radius_m, 100.0);
}

#[test]
fn test_cli_defaults_match_struct_defaults() {
    let (config, _) = parse(&["test"]);
    let default = Config::default();
    assert_eq!(config.ingest.header_rows_to_skip, default.ingest.header_rows_to_skip);
    assert_eq!(config.ingest.delimiter, default.ingest.delimiter);
    assert_eq!(config.matching.radius_m, default.matching.radius_m);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let file = write_config(r#"{ "matching": { "radius_m": 250.0 } }"#);
    let config = Config::load_from_file(file.path()).unwrap();
    assert_eq!(config.matching.radius_m, 250.0);
    assert_eq!(config.ingest.header_rows_to_skip, 1);
    assert_eq!(config.ingest.coordinate_block_start, 5);
}

#[test]
fn test_cli_overrides_only_typed_values() {
    let file = write_config(
        r#"{ "ingest": { "header_rows_to_skip": 0, "delimiter": ";" }, "matching": { "radius_m": 500.0 } }"#,
    );
    let mut config = Config::load_from_file(file.path()).unwrap();

    let (cli_config, matches) = parse(&["test", "--radius", "25"]);
    config.merge_from_cli(&cli_config, &matches);

    assert_eq!(config.matching.radius_m, 25.0);
    // Not typed on the command line, so the file wins over clap defaults.
    assert_eq!(config.ingest.header_rows_to_skip, 0);
    assert_eq!(config.ingest.delimiter, ';');
}

#[test]
fn test_missing_config_file() {
    let result = Config::load_from_file("/no/such/config.json");
    assert!(matches!(result, Err(RoadError::Config(_))));
}

#[test]
fn test_invalid_json_config() {
    let file = write_config("{ not json");
    assert!(matches!(
        Config::load_from_file(file.path()),
        Err(RoadError::Json(_))
    ));
}

#[test]
fn test_non_ascii_delimiter_rejected() {
    let params = IngestParams {
        delimiter: '§',
        ..Default::default()
    };
    assert!(matches!(params.delimiter_byte(), Err(RoadError::Config(_))));
    assert_eq!(IngestParams::default().delimiter_byte().unwrap(), b',');
}

#[test]
fn test_match_params_default() {
    assert_eq!(MatchParams::default().radius_m, 100.0);
}
