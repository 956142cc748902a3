// File: crates/heatmap-core/tests/dataset.rs
// Purpose: Parsing and validation of the temperature document.

use heatmap_core::{Dataset, DatasetError, Record};

const DOC: &str = r#"{
  "baseTemperature": 8.66,
  "monthlyVariance": [
    {"year": 1753, "month": 1, "variance": -1.366},
    {"year": 1753, "month": 2, "variance": -2.223},
    {"year": 2015, "month": 9, "variance": 1.145}
  ]
}"#;

#[test]
fn parses_camel_case_document() {
    let ds = Dataset::from_json_slice(DOC.as_bytes()).expect("valid document");
    assert_eq!(ds.base_temperature, 8.66);
    assert_eq!(ds.len(), 3);
    assert_eq!(ds.monthly_variance[1], Record::new(1753, 2, -2.223));
    assert_eq!(ds.year_range(), Some((1753, 2015)));
}

#[test]
fn description_matches_reference_heading() {
    let ds = Dataset::from_json_slice(DOC.as_bytes()).unwrap();
    assert_eq!(ds.description(), "Temperatures from 1753 to 2015. Average is 8.66C");
}

#[test]
fn empty_records_are_rejected() {
    let err = Dataset::from_json_slice(br#"{"baseTemperature": 8.66, "monthlyVariance": []}"#).unwrap_err();
    assert!(matches!(err, DatasetError::EmptyDataset), "got {err:?}");
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = Dataset::from_json_slice(b"<html>404</html>").unwrap_err();
    assert!(matches!(err, DatasetError::Parse(_)), "got {err:?}");
}

#[test]
fn missing_field_is_a_parse_error() {
    let err = Dataset::from_json_slice(br#"{"monthlyVariance": []}"#).unwrap_err();
    assert!(matches!(err, DatasetError::Parse(_)), "got {err:?}");
}

#[test]
fn month_outside_calendar_is_rejected() {
    let ds = Dataset::new(8.66, vec![Record::new(1900, 1, 0.0), Record::new(1901, 13, 0.2)]);
    match ds.validate() {
        Err(DatasetError::MonthOutOfRange { year, month }) => {
            assert_eq!((year, month), (1901, 13));
        }
        other => panic!("expected MonthOutOfRange, got {other:?}"),
    }
    let zero = Dataset::new(8.66, vec![Record::new(1900, 0, 0.0)]);
    assert!(matches!(zero.validate(), Err(DatasetError::MonthOutOfRange { .. })));
}

#[test]
fn every_year_lies_within_range() {
    let ds = Dataset::from_json_slice(DOC.as_bytes()).unwrap();
    let (lo, hi) = ds.year_range().unwrap();
    assert!(lo <= hi);
    assert!(ds.monthly_variance.iter().all(|r| lo <= r.year && r.year <= hi));
}

#[test]
fn empty_dataset_has_no_year_range() {
    let ds = Dataset::new(8.66, Vec::new());
    assert!(ds.is_empty());
    assert_eq!(ds.year_range(), None);
}
