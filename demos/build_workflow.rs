//! Build Workflow Demo
//!
//! Builds a small release workflow in memory, inspects the derived
//! incoming/outgoing edge registration, and prints the wire-format JSON.
//!
//! ## Run it
//! ```bash
//! cargo run --example build_workflow
//! ```

use flowdoc::graph::Graph;
use flowdoc::node::Node;
use flowdoc::persistence::DocumentError;
use serde_json::json;

fn main() -> Result<(), DocumentError> {
    flowdoc::telemetry::init();

    println!("=== Build Workflow Demo ===\n");

    let mut graph = Graph::new("Release pipeline");

    graph.add_node(
        Node::with_id("build", "Build")
            .with_kind("StatusNode")
            .with_property("status", json!("Completed")),
    );
    graph.add_node(
        Node::with_id("test", "Test")
            .with_kind("StatusNode")
            .with_property("status", json!("InProgress")),
    );
    graph.add_node(Node::with_id("deploy", "Deploy").with_property("region", json!("eu-west-1")));

    graph.connect_labeled("build", "test", "on success");
    graph.connect_labeled("test", "deploy", "on success");

    println!(
        "Document '{}': {} nodes, {} edges\n",
        graph.name,
        graph.node_count(),
        graph.edge_count()
    );

    for node in graph.nodes() {
        println!(
            "node {:10} in={} out={} status={}",
            node.id(),
            node.incoming_edges().len(),
            node.outgoing_edges().len(),
            node.property_or("status", &json!("n/a"))
        );
    }
    println!();

    println!("Wire format (pretty, 2-space indent):");
    println!("{}", graph.to_json_pretty()?);

    println!("\n=== Demo Complete ===");
    Ok(())
}
