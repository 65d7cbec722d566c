//! Log Data Transcoding Tests
//!
//! Rows to nested-array data, payload envelopes, and the per-version
//! adapters.

use crate::*;
use witsml_valve::{
    build_payload, encode_rows, Error, LogRowSet, MnemonicList, RowError, RowWidthCheck,
    ValveOptions,
};

// =============================================================================
// ENCODE ROWS
// =============================================================================

#[test]
fn test_encode_no_rows() {
    assert_eq!(encode_rows(&LogRowSet::new()).unwrap(), "[]");
}

#[test]
fn test_encode_single_row() {
    let rows = LogRowSet::parse_lines(["10,1.1,2.2"]).unwrap();
    assert_eq!(encode_rows(&rows).unwrap(), "[[[10],[1.1, 2.2]]]");
}

#[test]
fn test_encode_two_rows() {
    let rows = LogRowSet::parse_lines(["10,1.1", "20,3.3"]).unwrap();
    assert_eq!(encode_rows(&rows).unwrap(), "[[[10],[1.1]],[[20],[3.3]]]");
}

#[test]
fn test_delimiter_whitespace_is_equivalent() {
    let tight = LogRowSet::parse_lines(["10,1.1,2.2"]).unwrap();
    let loose = LogRowSet::parse_lines(["10 , 1.1, 2.2"]).unwrap();
    assert_eq!(encode_rows(&tight).unwrap(), encode_rows(&loose).unwrap());
}

#[test]
fn test_fields_copied_verbatim() {
    let rows = LogRowSet::parse_lines(["1e3,-999.25,0.500"]).unwrap();
    assert_eq!(encode_rows(&rows).unwrap(), "[[[1e3],[-999.25, 0.500]]]");
}

#[test]
fn test_single_field_row() {
    let rows = LogRowSet::parse_lines(["10"]).unwrap();
    assert_eq!(encode_rows(&rows).unwrap(), "[[[10],[]]]");
}

#[test]
fn test_blank_row_is_malformed() {
    let err = LogRowSet::parse_lines(["10,1.1", "   "]).unwrap_err();
    assert_eq!(err.row, 1);
    assert_eq!(err.source, RowError::Empty);
}

#[test]
fn test_empty_index_is_malformed() {
    let err = LogRowSet::parse_lines(["10,1.1,2.2", ",1.1,2.2"]).unwrap_err();
    assert_eq!(err.row, 1);
    assert_eq!(err.source, RowError::MissingIndex);

    let err = valve().log_payload(Some(&log_1311(&[",1,2"]))).unwrap_err();
    assert!(err.is_malformed_input());
}

// =============================================================================
// PAYLOAD
// =============================================================================

#[test]
fn test_payload_fields() {
    let rows = LogRowSet::parse_lines(["10,1.1", "20,3.3"]).unwrap();
    let payload = build_payload(&MnemonicList::parse("DEPT,GR"), &rows).unwrap();
    assert_eq!(payload.mnemonic_list, "DEPT,GR");
    assert_eq!(payload.data, encode_rows(&rows).unwrap());
}

#[test]
fn test_payload_json_envelope() {
    let rows = LogRowSet::parse_lines(["10,1.1"]).unwrap();
    let payload = build_payload(&MnemonicList::parse("DEPT,GR"), &rows).unwrap();

    let json = payload.to_json().unwrap();
    assert_eq!(json, r#"{"mnemonicList":"DEPT,GR","data":"[[[10],[1.1]]]"}"#);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert!(object["data"].is_string());
}

#[test]
fn test_payload_width_mismatch_names_row() {
    let err = valve()
        .log_payload(Some(&log_1311(&["10,1,2", "20,3,4", "30,5"])))
        .unwrap_err();
    match err {
        Error::MalformedRow(row) => {
            assert_eq!(row.row, 2);
            assert_eq!(row.source, RowError::WidthMismatch { expected: 3, actual: 2 });
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_payload_width_check_off() {
    let valve = Valve::with_options(ValveOptions::new().row_width(RowWidthCheck::Off));
    let payload = valve
        .log_payload(Some(&log_1311(&["10,1,2", "30,5"])))
        .unwrap()
        .unwrap();
    assert_eq!(payload.data, "[[[10],[1, 2]],[[30],[5]]]");
}

// =============================================================================
// VERSION ADAPTERS
// =============================================================================

#[test]
fn test_1311_mnemonics_from_curve_info() {
    let payload = valve()
        .log_payload(Some(&log_1311(&["10,1,2"])))
        .unwrap()
        .unwrap();
    assert_eq!(payload.mnemonic_list, "DEPT,GR,ROP");
    assert_eq!(payload.data, "[[[10],[1, 2]]]");
}

#[test]
fn test_1411_reads_first_log_data_only() {
    let log = log_1411(vec![
        ("TIME, HKLD", vec!["0,101.5", "1,102.0"]),
        ("TIME,SPP,TQ", vec!["0,1,2"]),
    ]);
    let payload = valve().log_payload(Some(&log)).unwrap().unwrap();
    assert_eq!(payload.mnemonic_list, "TIME,HKLD");
    assert_eq!(payload.data, "[[[0],[101.5]],[[1],[102.0]]]");
}

#[test]
fn test_1411_without_log_data_is_empty_payload() {
    let payload = valve().log_payload(Some(&log_1411(vec![]))).unwrap().unwrap();
    assert_eq!(payload.mnemonic_list, "");
    assert_eq!(payload.data, "[]");
}

#[test]
fn test_1311_without_log_data_is_empty_payload() {
    let log = LogObject::V1311(Log1311 {
        uid: "log".into(),
        name: "log".into(),
        log_curve_info: vec![LogCurveInfo::new("DEPT")],
        log_data: None,
    });
    let payload = valve().log_payload(Some(&log)).unwrap().unwrap();
    assert_eq!(payload.mnemonic_list, "DEPT");
    assert_eq!(payload.data, "[]");
}

#[test]
fn test_absent_log_is_none() {
    assert!(valve().log_payload(None).unwrap().is_none());
    assert!(valve().log_data(None).unwrap().is_none());
}

#[test]
fn test_log_data_string_matches_payload_data() {
    let log = log_1411(vec![("TIME,HKLD", vec!["0,101.5"])]);
    let data = valve().log_data(Some(&log)).unwrap().unwrap();
    let payload = valve().log_payload(Some(&log)).unwrap().unwrap();
    assert_eq!(data, payload.data);
}
