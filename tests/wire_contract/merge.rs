//! Response Merge Tests
//!
//! Single-object documents merged under one root, directly and through
//! `Valve::read_response`.

use crate::*;
use witsml_valve::{merge_tags, Error, FragmentPart, RenderError};

const V: SchemaVersion = SchemaVersion::V1411;

// =============================================================================
// MERGE
// =============================================================================

#[test]
fn test_merge_one_is_identity() {
    let f = fragment(V, ObjectType::Well, "A");
    let merged = valve().merge_at(&[&f], V, ObjectType::Well).unwrap();
    assert_eq!(merged, f);

    let again = valve().merge_at(&[&merged], V, ObjectType::Well).unwrap();
    assert_eq!(again, merged);
}

#[test]
fn test_merge_two_has_single_wrapper() {
    let a = fragment(V, ObjectType::Wellbore, "A");
    let b = fragment(V, ObjectType::Wellbore, "B");
    let merged = valve().merge_at(&[a, b], V, ObjectType::Wellbore).unwrap();

    let open = root_open(V, ObjectType::Wellbore);
    assert_eq!(merged.matches(XML_DECLARATION).count(), 1);
    assert_eq!(merged.matches(open.as_str()).count(), 1);
    assert_eq!(merged.matches("</wellbores>").count(), 1);
    assert!(merged.starts_with(&format!("{}{}", XML_DECLARATION, open)));
    assert!(merged.ends_with("</wellbores>"));
    assert!(merged.find(r#"uid="A""#).unwrap() < merged.find(r#"uid="B""#).unwrap());
}

#[test]
fn test_merge_three_keeps_order() {
    let fragments: Vec<String> = ["C", "A", "B"]
        .iter()
        .map(|uid| fragment(SchemaVersion::V1311, ObjectType::Log, uid))
        .collect();
    let merged = valve()
        .merge_at(&fragments, SchemaVersion::V1311, ObjectType::Log)
        .unwrap();

    let positions: Vec<usize> = ["C", "A", "B"]
        .iter()
        .map(|uid| merged.find(&format!(r#"uid="{}""#, uid)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_merge_uses_default_schema() {
    let a = fragment(V, ObjectType::Rig, "A");
    let b = fragment(V, ObjectType::Rig, "B");
    assert!(valve().merge(&[a, b], ObjectType::Rig).is_ok());
}

#[test]
fn test_merge_no_fragments() {
    let empty: [&str; 0] = [];
    let merged = valve().merge_at(&empty, V, ObjectType::Trajectory).unwrap();
    assert_eq!(
        merged,
        format!(
            "{}{}</trajectorys>",
            XML_DECLARATION,
            root_open(V, ObjectType::Trajectory)
        )
    );
}

#[test]
fn test_merge_mismatched_fragment() {
    let a = fragment(V, ObjectType::Well, "A");
    let b = fragment(SchemaVersion::V1311, ObjectType::Well, "B");
    let err = valve().merge_at(&[a, b], V, ObjectType::Well).unwrap_err();
    assert!(matches!(
        err,
        Error::FragmentShapeMismatch {
            index: 1,
            part: FragmentPart::Prefix
        }
    ));
    assert!(err.is_malformed_input());
}

#[test]
fn test_merge_v20_rejected() {
    let err = valve()
        .merge_at(&["<a/>", "<b/>"], SchemaVersion::V20, ObjectType::Well)
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedVersion(SchemaVersion::V20)));
}

#[test]
fn test_merge_single_v20_passes_through() {
    let well = r#"<?xml version="1.0" encoding="UTF-8"?><Well uuid="w-1" schemaVersion="2.0"/>"#;
    let merged = valve()
        .merge_at(&[well], SchemaVersion::V20, ObjectType::Well)
        .unwrap();
    assert_eq!(merged, well);

    let uids = ["w-1"];
    let render = |uid: &&str, _: SchemaVersion| -> Result<String, RenderError> {
        Ok(format!(r#"<Well uuid="{}" schemaVersion="2.0"/>"#, uid))
    };
    let doc = valve()
        .read_response(&uids, SchemaVersion::V20, ObjectType::Well, &render)
        .unwrap();
    assert_eq!(doc, r#"<Well uuid="w-1" schemaVersion="2.0"/>"#);
}

#[test]
fn test_merge_with_literal_tags() {
    let a = format!("{}<things><thing/></things>", XML_DECLARATION);
    let merged = merge_tags(&[a.as_str(), a.as_str()], "<things>", "</things>").unwrap();
    assert_eq!(
        merged,
        format!("{}<things><thing/><thing/></things>", XML_DECLARATION)
    );
}

// =============================================================================
// READ RESPONSE
// =============================================================================

#[test]
fn test_read_response_with_closure_renderer() {
    let uids = ["W-1", "W-2", "W-3"];
    let render = |uid: &&str, version: SchemaVersion| -> Result<String, RenderError> {
        Ok(fragment(version, ObjectType::Well, uid))
    };
    let doc = valve()
        .read_response(&uids, SchemaVersion::V1311, ObjectType::Well, &render)
        .unwrap();

    assert_eq!(doc.matches("<well ").count(), 3);
    assert_eq!(doc.matches(XML_DECLARATION).count(), 1);
}

#[test]
fn test_read_response_propagates_render_error() {
    let uids = ["W-1"];
    let render = |_: &&str, _: SchemaVersion| -> Result<String, RenderError> {
        Err(RenderError::new("object layer unavailable"))
    };
    let err = valve()
        .read_response(&uids, V, ObjectType::Well, &render)
        .unwrap_err();
    assert_eq!(err.to_string(), "render failed: object layer unavailable");
    assert!(!err.is_retryable());
}
