//! Property Tests
//!
//! Randomized checks that encoded data is always valid JSON of the expected
//! shape and that merging never reorders objects.

use crate::*;
use proptest::prelude::*;
use witsml_valve::{encode_rows, LogRow, LogRowSet};

fn numeric_field() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<i32>().prop_map(|n| n.to_string()),
        (-1.0e6f64..1.0e6).prop_map(|x| format!("{:.3}", x)),
    ]
}

fn numeric_rows() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec(numeric_field(), 2..8), 0..20)
}

proptest! {
    #[test]
    fn test_numeric_rows_encode_to_pairs(rows in numeric_rows()) {
        let set: LogRowSet = rows
            .iter()
            .map(|fields| LogRow::from_fields(fields.iter().map(String::as_str)).unwrap())
            .collect();
        let encoded = encode_rows(&set).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        let pairs = parsed.as_array().unwrap();
        prop_assert_eq!(pairs.len(), rows.len());

        for (pair, fields) in pairs.iter().zip(&rows) {
            let pair = pair.as_array().unwrap();
            prop_assert_eq!(pair.len(), 2);
            prop_assert_eq!(pair[0].as_array().unwrap().len(), 1);
            prop_assert_eq!(pair[1].as_array().unwrap().len(), fields.len() - 1);
        }
    }

    #[test]
    fn test_row_order_preserved(indexes in prop::collection::vec(0u32..100_000, 1..30)) {
        let lines: Vec<String> = indexes.iter().map(|i| format!("{},1.0", i)).collect();
        let set = LogRowSet::parse_lines(&lines).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&encode_rows(&set).unwrap()).unwrap();

        let decoded: Vec<u64> = parsed
            .as_array()
            .unwrap()
            .iter()
            .map(|pair| pair[0][0].as_u64().unwrap())
            .collect();
        let expected: Vec<u64> = indexes.iter().map(|&i| u64::from(i)).collect();
        prop_assert_eq!(decoded, expected);
    }

    #[test]
    fn test_merge_preserves_fragment_order(count in 2usize..12) {
        let uids: Vec<String> = (0..count).rev().map(|i| format!("obj-{:02}", i)).collect();
        let fragments: Vec<String> = uids
            .iter()
            .map(|uid| fragment(SchemaVersion::V1411, ObjectType::Wellbore, uid))
            .collect();
        let merged = valve()
            .merge_at(&fragments, SchemaVersion::V1411, ObjectType::Wellbore)
            .unwrap();

        prop_assert_eq!(merged.matches(XML_DECLARATION).count(), 1);
        prop_assert_eq!(merged.matches("</wellbores>").count(), 1);
        let positions: Vec<usize> = uids
            .iter()
            .map(|uid| merged.find(&format!(r#"uid="{}""#, uid)).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
