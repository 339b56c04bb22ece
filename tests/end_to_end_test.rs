//! End-to-end tests: load a provider dump from disk, explore, resolve.

mod common;

use common::fixtures::{REGION_METHOD_JSON, REGION_REPLIES};
use std::path::Path;

use type_closure::adapters::oracle::scripted::ScriptedOracle;
use type_closure::app::dto::ExploreRequest;
use type_closure::app::engine::ClosureEngine;

#[test]
fn test_summary_of_dumped_method() {
    let engine = ClosureEngine::load_from_json(Path::new(REGION_METHOD_JSON)).unwrap();
    let summary = engine.summary();

    assert_eq!(summary.class_name, "com.example.ast.Region");
    assert!(!summary.is_static);
    assert_eq!(summary.parameter_count, 2);
    assert_eq!(summary.type_count, 7);
}

#[test]
fn test_full_exploration_from_parameter_roots() {
    let engine = ClosureEngine::load_from_json(Path::new(REGION_METHOD_JSON)).unwrap();
    let response = engine.explore(&ExploreRequest::default());

    // Position, Comment, int, both comment subclasses, String. The receiver
    // class itself is not a parameter and stays out.
    assert_eq!(response.type_count, 6);
    assert!(response.report.contains("  - class: com.example.ast.Position"));
    assert!(response.report.contains("  - abstract class: com.example.ast.Comment"));
    assert!(response
        .report
        .contains("  - java.lang.String: a jdk-builtin type or cannot be parsed"));
    assert!(!response.report.contains("com.example.ast.Region"));
}

#[test]
fn test_depth_one_exploration_stops_before_builtin_leaves_of_subclasses() {
    let engine = ClosureEngine::load_from_json(Path::new(REGION_METHOD_JSON)).unwrap();
    let response = engine.explore(&ExploreRequest {
        roots: Some(vec!["com.example.ast.Comment".to_string()]),
        max_depth: 1,
        max_branch: None,
    });

    assert_eq!(response.type_count, 3);
    assert!(!response.report.contains("java.lang.String:"));
}

#[test]
fn test_resolve_with_scripted_replies_from_disk() {
    let engine = ClosureEngine::load_from_json(Path::new(REGION_METHOD_JSON)).unwrap();
    let oracle = ScriptedOracle::from_file(REGION_REPLIES).unwrap();
    assert_eq!(oracle.remaining(), 2);

    let response = engine.resolve(&oracle, None).unwrap();

    assert_eq!(response.entries.len(), 2);
    assert_eq!(response.entries[0].type_name, "com.example.ast.Position");
    assert_eq!(response.entries[0].signature, "Position(int line, int column)");
    assert_eq!(
        response.entries[1].via_subclass.as_deref(),
        Some("com.example.ast.BlockComment")
    );
    assert!(response
        .report
        .contains("Sub class of com.example.ast.Comment: com.example.ast.BlockComment"));
    assert!(response
        .class_report
        .as_deref()
        .is_some_and(|r| r.contains("Region(Position begin, Position end)")));
    assert_eq!(oracle.remaining(), 0);
}

#[test]
fn test_resolve_response_serializes_to_json() {
    let engine = ClosureEngine::load_from_json(Path::new(REGION_METHOD_JSON)).unwrap();
    let oracle = ScriptedOracle::from_file(REGION_REPLIES).unwrap();
    let response = engine.resolve(&oracle, None).unwrap();

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains(r#""type_name":"com.example.ast.Position""#));
    // Parameter order survives serialization.
    assert!(json.contains(r#""params":{"line":"int","column":"int"}"#));
}
