use flowdoc::edge::Edge;
use flowdoc::graph::Graph;
use flowdoc::node::Node;
use flowdoc::persistence::DocumentError;
use serde_json::json;

fn sample_graph() -> Graph {
    let mut graph = Graph::new("Release");
    graph.add_node(
        Node::with_id("build", "Build")
            .with_kind("StatusNode")
            .with_property("status", json!("InProgress")),
    );
    graph.add_node(Node::with_id("test", "Test"));
    graph.add_edge(
        Edge::with_id("e1", "build", "test")
            .with_label("on success")
            .with_property("retries", json!(3)),
    );
    graph
}

#[test]
fn test_wire_field_names() {
    let value = sample_graph().to_value().unwrap();

    let node = &value["nodes"][0];
    assert_eq!(node["id"], json!("build"));
    assert_eq!(node["label"], json!("Build"));
    assert_eq!(node["type"], json!("StatusNode"));
    assert_eq!(node["properties"]["status"], json!("InProgress"));

    // In-memory names source_id/source_endpoint rename on the wire.
    let edge = &value["edges"][0];
    assert_eq!(edge["source"], json!("build"));
    assert_eq!(edge["target"], json!("test"));
    assert_eq!(edge["sourceEndpoint"], json!("0 0.5"));
    assert_eq!(edge["targetEndpoint"], json!("1 0.5"));
    assert!(edge.get("source_id").is_none());
    assert!(edge.get("source_endpoint").is_none());
}

#[test]
fn test_value_round_trip() {
    let graph = sample_graph();
    let restored = Graph::from_value(graph.to_value().unwrap()).unwrap();
    assert_eq!(graph, restored);
}

#[test]
fn test_round_trip_preserves_order() {
    let mut graph = Graph::new("Ordered");
    for id in ["c", "a", "b"] {
        graph.add_node(Node::with_id(id, id));
    }
    graph.connect("c", "a");
    graph.connect("a", "b");

    let restored = Graph::from_value(graph.to_value().unwrap()).unwrap();
    let original: Vec<&str> = graph.nodes().map(|n| n.id()).collect();
    let roundtripped: Vec<&str> = restored.nodes().map(|n| n.id()).collect();
    assert_eq!(original, roundtripped);
}

#[test]
fn test_round_trip_rebuilds_edge_registration() {
    let mut graph = Graph::new("W");
    graph.add_node(Node::with_id("a", "A"));
    graph.add_node(Node::with_id("b", "B"));
    let edge_id = graph.connect("a", "b").id().to_string();

    let restored = Graph::from_value(graph.to_value().unwrap()).unwrap();
    assert!(restored.node("a").unwrap().outgoing_edges().contains(&edge_id));
    assert!(restored.node("b").unwrap().incoming_edges().contains(&edge_id));
}

#[test]
fn test_end_to_end_document() {
    let document = json!({
        "name": "W",
        "nodes": [
            {"id": "n1", "label": "Start", "type": "Node", "properties": {}}
        ],
        "edges": []
    });

    let graph = Graph::from_value(document.clone()).unwrap();
    assert_eq!(graph.name, "W");
    assert_eq!(graph.node("n1").unwrap().label, "Start");

    let reserialized = graph.to_value().unwrap();
    assert_eq!(reserialized, document);
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let document = json!({
        "nodes": [{}],
        "edges": [{"source": "x", "target": "y"}]
    });

    let graph = Graph::from_value(document).unwrap();
    assert_eq!(graph.name, "Workflow");

    let node = graph.nodes().next().unwrap();
    assert!(!node.id().is_empty());
    assert_eq!(node.label, "Node");
    assert_eq!(node.kind, "Node");

    let edge = graph.edges().next().unwrap();
    assert!(!edge.id().is_empty());
    assert_eq!(edge.label, "");
    assert_eq!(edge.source_endpoint, "0 0.5");
    assert_eq!(edge.target_endpoint, "1 0.5");
}

#[test]
fn test_null_id_triggers_generation() {
    let document = json!({
        "name": "W",
        "nodes": [{"id": null, "label": null}],
        "edges": []
    });
    let graph = Graph::from_value(document).unwrap();
    let node = graph.nodes().next().unwrap();
    assert!(!node.id().is_empty());
    assert_eq!(node.label, "Node");
}

#[test]
fn test_edge_missing_source_is_parse_error() {
    let document = json!({
        "name": "W",
        "nodes": [],
        "edges": [{"target": "y"}]
    });
    let err = Graph::from_value(document).unwrap_err();
    assert!(matches!(err, DocumentError::Parse { .. }));
}

#[test]
fn test_dangling_document_edges_load() {
    // Edges referencing absent nodes deserialize without error.
    let document = json!({
        "name": "W",
        "nodes": [],
        "edges": [{"id": "e", "source": "nowhere", "target": "elsewhere"}]
    });
    let graph = Graph::from_value(document).unwrap();
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.node_count(), 0);
}

#[test]
fn test_properties_survive_verbatim() {
    let mut graph = Graph::new("W");
    graph.add_node(Node::with_id("n", "N").with_property(
        "blob",
        json!({"list": [1, 2, {"deep": true}], "none": null, "pi": 3.25}),
    ));
    let restored = Graph::from_value(graph.to_value().unwrap()).unwrap();
    assert_eq!(
        restored.node("n").unwrap().property("blob"),
        graph.node("n").unwrap().property("blob")
    );
}

#[test]
fn test_json_text_round_trip() {
    let graph = sample_graph();
    let text = graph.to_json_pretty().unwrap();
    // Pretty printer uses 2-space indentation.
    assert!(text.contains("\n  \"name\""));
    let restored = Graph::from_json_str(&text).unwrap();
    assert_eq!(graph, restored);
}

#[test]
fn test_unknown_document_fields_are_ignored() {
    let document = json!({
        "name": "W",
        "zoom": 1.5,
        "nodes": [{"id": "n1", "label": "A", "type": "Node", "properties": {}, "style": {}}],
        "edges": []
    });
    let graph = Graph::from_value(document).unwrap();
    assert_eq!(graph.node_count(), 1);
}
