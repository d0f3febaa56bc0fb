//! Integration tests for the JSON interface: decoding, annotated output, and error reports

use flex_infer::schema::{has_loop, is_fixed_node, is_slot_node, LoopMarker};
use flex_infer::{infer, outline, parse, InferError, LayoutType, NodeSchema};
use pretty_assertions::assert_eq;

const TOOLBAR: &str = r#"{
    "id": "root",
    "componentName": "View",
    "frame": {"left": 0, "top": 0, "width": 300, "height": 100},
    "children": [
        {"id": "a", "componentName": "Button", "frame": {"left": 10, "top": 30, "width": 80, "height": 40}},
        {"id": "b", "componentName": "Button", "frame": {"left": 110, "top": 30, "width": 80, "height": 40}},
        {"id": "c", "componentName": "Button", "frame": {"left": 210, "top": 30, "width": 80, "height": 40}}
    ]
}"#;

#[test]
fn test_annotated_json_fields() {
    let tree = infer(TOOLBAR).unwrap();
    let json: serde_json::Value = serde_json::to_value(&tree).unwrap();
    let layout = &json["layout"];

    assert_eq!(layout["layoutType"], "row");
    assert_eq!(layout["gap"], 20.0);
    assert_eq!(layout["alignHorizontal"], "space-between");
    assert_eq!(layout["alignVertical"], "middle");
    assert_eq!(layout["items"][0], serde_json::json!({"kind": "node", "id": "a"}));
    assert_eq!(layout["padding"]["left"], 10.0);
    assert!(layout.get("absolute").is_none());
    assert!(json["children"][0].get("layout").is_none());
}

#[test]
fn test_annotated_tree_round_trips() {
    let tree = infer(TOOLBAR).unwrap();
    let encoded = serde_json::to_string(&tree).unwrap();
    assert_eq!(parse(&encoded).unwrap(), tree);
}

#[test]
fn test_outline_snapshot() {
    let tree = infer(TOOLBAR).unwrap();
    insta::assert_snapshot!(outline(&tree).trim_end(), @"root: row gap=20 space-between/middle [a, b, c]");
}

#[test]
fn test_frame_edges_are_normalized() {
    let root = parse(
        r#"{"id": "x", "componentName": "View", "frame": {"left": 10, "top": 20, "right": 110, "bottom": 70}}"#,
    )
    .unwrap();
    let frame = root.frame().unwrap();
    assert_eq!(frame.width, 100.0);
    assert_eq!(frame.height, 50.0);
}

#[test]
fn test_invalid_frame_is_ignored() {
    let root = parse(
        r#"{"id": "x", "componentName": "View", "frame": {"left": 0, "top": 0, "width": -5, "height": 10}}"#,
    )
    .unwrap();
    assert!(root.frame().is_none());
}

#[test]
fn test_markers_decode() {
    let root: NodeSchema = parse(
        r#"{"id": "list", "componentName": "View", "children": [
            {"id": "row", "componentName": "Item", "loop": {"items": 3}},
            {"id": "flag", "componentName": "Item", "loop": true},
            {"id": "content", "componentName": "Slot"},
            {"id": "fab", "componentName": "Button", "x-layout": {"fixed": true}},
            {"id": "when", "componentName": "Text", "condition": {"var": "loggedIn"}}
        ]}"#,
    )
    .unwrap();

    let children = &root.children;
    assert!(matches!(
        children[0].loop_marker,
        Some(LoopMarker::Config(ref config)) if config.items == Some(3)
    ));
    assert!(has_loop(&children[0]));
    assert!(has_loop(&children[1]));
    assert!(is_slot_node(&children[2]));
    assert!(is_fixed_node(&children[3]));
    assert!(children[4].condition.is_some());
    assert!(!has_loop(&children[4]));
}

#[test]
fn test_syntax_error_report() {
    let source = "{\"id\": \"root\",\n \"children\": [}";
    let err = match infer(source) {
        Err(InferError::Schema(err)) => err,
        other => panic!("expected a schema error, got {:?}", other),
    };
    assert!(err.to_string().contains("line 2"));

    let report = err.format(source, "tree.json");
    assert!(report.contains("tree.json"));
    assert!(report.contains("invalid design tree"));
}

#[test]
fn test_missing_frames_fall_back_to_row() {
    let tree = infer(
        r#"{"id": "root", "componentName": "View", "children": [
            {"id": "a", "componentName": "Text"},
            {"id": "b", "componentName": "Text"}
        ]}"#,
    )
    .unwrap();
    let layout = tree.layout.unwrap();
    assert_eq!(layout.layout_type, LayoutType::Row);
    assert_eq!(layout.items.len(), 2);
    assert_eq!(layout.gap, 0.0);
}
