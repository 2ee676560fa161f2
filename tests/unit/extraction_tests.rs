//! Extraction tests
//!
//! Exercises the pure extraction function and the file pipeline.

use crate::common::test_helpers::*;
use kml_extract::{ExtractConfig, ExtractError, extract_from_str, run};

#[test]
fn test_round_trip_station_names() {
    let extraction = extract_from_str(STATIONS_KML, "name", "kml").unwrap();
    assert_eq!(extraction.values, STATION_NAMES);
    assert_eq!(extraction.missing, 0);
}

#[test]
fn test_n_occurrences_give_n_lines() {
    let extraction = extract_from_str(STATIONS_KML, "coordinates", "kml").unwrap();
    let text = extraction.to_text();
    assert_eq!(text.lines().count(), 2);
    assert!(!text.ends_with('\n'));
}

#[test]
fn test_zero_occurrences() {
    let extraction = extract_from_str(STATIONS_KML, "Polygon", "kml").unwrap();
    assert!(extraction.is_empty());
    assert_eq!(extraction.missing, 1);
}

#[test]
fn test_unknown_prefix_is_an_error() {
    let result = extract_from_str(STATIONS_KML, "Placemark/gx:coordinates", "kml");
    assert!(matches!(result, Err(ExtractError::UnknownPrefix { .. })));
}

#[test]
fn test_pipeline_overwrites_previous_output() {
    let workspace = Workspace::with_input(STATIONS_KML).unwrap();
    std::fs::write(&workspace.output, "old\nold\nold\nold").unwrap();

    let config = ExtractConfig::new(&workspace.input, "name", &workspace.output);
    run(&config).unwrap();

    assert_eq!(workspace.read_output().unwrap(), STATION_NAMES.join("\n"));
}

#[test]
fn test_pipeline_empty_output_for_missing_tag() {
    let workspace = Workspace::with_input(STATIONS_KML).unwrap();

    let config = ExtractConfig::new(&workspace.input, "LineString", &workspace.output);
    let report = run(&config).unwrap();

    assert_eq!(report.extraction.missing, 1);
    assert_eq!(workspace.read_output().unwrap(), "");
}

#[test]
fn test_pipeline_malformed_input_writes_nothing() {
    let workspace = Workspace::with_input(MALFORMED_KML).unwrap();

    let config = ExtractConfig::new(&workspace.input, "name", &workspace.output);
    let result = run(&config);

    assert!(matches!(result, Err(ExtractError::MalformedXml { .. })));
    assert!(!workspace.output.exists());
}

#[test]
fn test_pipeline_missing_input_writes_nothing() {
    let workspace = Workspace::with_input(STATIONS_KML).unwrap();
    let missing = workspace.dir.path().join("missing.kml");

    let config = ExtractConfig::new(&missing, "name", &workspace.output);
    let error = run(&config).unwrap_err();

    assert!(matches!(error, ExtractError::InputNotFound { .. }));
    assert!(error.to_string().contains("missing.kml"));
    assert!(!workspace.output.exists());
}

#[test]
fn test_pipeline_custom_alias() {
    let workspace = Workspace::with_input(STATIONS_KML).unwrap();

    let config = ExtractConfig::new(&workspace.input, "Placemark/k:name", &workspace.output)
        .with_namespace_alias("k");
    let report = run(&config).unwrap();

    assert_eq!(report.extraction.len(), 2);
}
