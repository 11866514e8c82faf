use flowdoc::graph::Graph;
use flowdoc::node::Node;
use flowdoc::persistence::DocumentError;
use serde_json::json;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_save_then_load_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pipeline.awf.json");

    let mut graph = Graph::new("Pipeline");
    graph.add_node(Node::with_id("a", "A").with_property("x", json!(1)));
    graph.add_node(Node::with_id("b", "B"));
    graph.connect_labeled("a", "b", "next");

    graph.save(&path).unwrap();
    let restored = Graph::load(&path).unwrap();
    assert_eq!(graph, restored);
}

#[test]
fn test_saved_file_is_pretty_printed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("doc.awf.json");
    Graph::new("W").save(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("{\n  \"name\": \"W\""));
}

#[test]
fn test_save_truncates_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("doc.awf.json");
    fs::write(&path, "x".repeat(10_000)).unwrap();

    Graph::new("W").save(&path).unwrap();
    let restored = Graph::load(&path).unwrap();
    assert_eq!(restored.name, "W");
    assert!(restored.is_empty());
}

#[test]
fn test_load_missing_path_is_not_found() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope").join("missing.awf.json");
    let err = Graph::load(&path).unwrap_err();
    assert!(matches!(err, DocumentError::NotFound { .. }));
    assert!(err.to_string().contains("missing.awf.json"));
}

#[test]
fn test_load_invalid_json_is_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.awf.json");
    fs::write(&path, "not json").unwrap();

    let err = Graph::load(&path).unwrap_err();
    assert!(matches!(err, DocumentError::Parse { .. }));
}

#[test]
fn test_load_malformed_edge_is_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("badedge.awf.json");
    fs::write(
        &path,
        r#"{"name": "W", "nodes": [], "edges": [{"id": "e1"}]}"#,
    )
    .unwrap();

    let err = Graph::load(&path).unwrap_err();
    assert!(matches!(err, DocumentError::Parse { .. }));
}
