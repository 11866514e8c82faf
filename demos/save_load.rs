//! Save/Load Demo
//!
//! Round-trips a workflow document through a file on disk and shows the
//! error taxonomy for missing and malformed documents.
//!
//! ## Run it
//! ```bash
//! cargo run --example save_load
//! ```

use flowdoc::graph::Graph;
use flowdoc::node::Node;
use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    flowdoc::telemetry::init();

    println!("=== Save/Load Demo ===\n");

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("onboarding.awf.json");

    let mut graph = Graph::new("Onboarding");
    graph.add_node(Node::with_id("collect", "Collect details"));
    graph.add_node(Node::with_id("verify", "Verify"));
    graph.connect("collect", "verify");

    graph.save(&path)?;
    println!("Saved to {:?}\n", path);

    let restored = Graph::load(&path)?;
    println!(
        "Loaded '{}' back: {} nodes, {} edges, round-trip equal: {}\n",
        restored.name,
        restored.node_count(),
        restored.edge_count(),
        restored == graph
    );

    // Missing file -> NotFound
    let missing = dir.path().join("missing.awf.json");
    match Graph::load(&missing) {
        Err(err) => println!("Missing file error: {err}"),
        Ok(_) => unreachable!("missing file cannot load"),
    }

    // Malformed content -> Parse
    let broken = dir.path().join("broken.awf.json");
    fs::write(&broken, "not json")?;
    match Graph::load(&broken) {
        Err(err) => println!("Malformed file error: {err}"),
        Ok(_) => unreachable!("malformed file cannot load"),
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
