//! # Flowdoc: Workflow Graph Document Model
//!
//! Flowdoc is an in-memory representation of a directed workflow graph —
//! labeled nodes and edges carrying open-ended property bags — together with
//! a JSON serialization contract and file persistence for "workflow
//! documents".
//!
//! There is no execution engine here: a [`graph::Graph`] is a plain data
//! aggregate that a caller builds, serializes, and discards. Validation of
//! graph well-formedness (cycles, dangling edge references) is deliberately
//! out of scope; dangling references are tolerated silently.
//!
//! ## Core Concepts
//!
//! - **Node**: a labeled vertex with an open property bag and derived
//!   incoming/outgoing edge-id sets
//! - **Edge**: a labeled, directed connection between two node ids, with
//!   endpoint descriptors for visual attachment
//! - **Graph**: the document aggregate owning insertion-ordered node and
//!   edge maps
//! - **Wire format**: serde-friendly structs decoupled from the in-memory
//!   types, defining the persisted JSON shape
//!
//! ## Quick Start
//!
//! ### Building a Graph
//!
//! ```
//! use flowdoc::graph::Graph;
//! use flowdoc::node::Node;
//!
//! let mut graph = Graph::new("Release pipeline");
//!
//! let build = graph.add_node(Node::new("Build")).id().to_string();
//! let test = graph.add_node(Node::new("Test")).id().to_string();
//!
//! let edge_id = graph.connect(&build, &test).id().to_string();
//!
//! assert!(graph.node(&build).unwrap().outgoing_edges().contains(&edge_id));
//! assert!(graph.node(&test).unwrap().incoming_edges().contains(&edge_id));
//! ```
//!
//! ### Properties
//!
//! Nodes and edges carry arbitrary JSON-valued properties:
//!
//! ```
//! use flowdoc::node::Node;
//! use serde_json::json;
//!
//! let mut node = Node::new("Deploy").with_property("region", json!("eu-west-1"));
//! node.set_property("replicas", json!(3));
//!
//! assert_eq!(node.property("replicas"), Some(&json!(3)));
//! assert_eq!(node.property_or("missing", &json!(null)), &json!(null));
//! ```
//!
//! ### Serialization and Persistence
//!
//! ```
//! use flowdoc::graph::Graph;
//! use flowdoc::node::Node;
//!
//! # fn main() -> Result<(), flowdoc::persistence::DocumentError> {
//! let mut graph = Graph::new("W");
//! graph.add_node(Node::with_id("n1", "Start"));
//!
//! let value = graph.to_value()?;
//! let restored = Graph::from_value(value)?;
//! assert_eq!(restored.name, "W");
//! assert_eq!(restored.node_count(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! File persistence uses the same wire shape, pretty-printed with 2-space
//! indentation; see [`Graph::save`](graph::Graph::save) and
//! [`Graph::load`](graph::Graph::load).
//!
//! ## Module Guide
//!
//! - [`ident`] - Identifier generation for nodes and edges
//! - [`node`] - Node type and property-bag accessors
//! - [`edge`] - Edge type with endpoint descriptors
//! - [`graph`] - The document aggregate and connection maintenance
//! - [`wire`] - Wire-format structs and conversions (the JSON contract)
//! - [`persistence`] - File save/load and the error taxonomy
//! - [`telemetry`] - Tracing subscriber setup for binaries and demos

pub mod edge;
pub mod graph;
pub mod ident;
pub mod node;
pub mod persistence;
pub mod telemetry;
pub mod wire;
