/*!
Wire-format structs for workflow documents.

Defines the persisted JSON shape of a graph as explicit serde-friendly
structs decoupled from the in-memory types, with `From` conversions in both
directions so the persistence code stays lean and declarative.

The wire field names are part of the external interface and differ from the
in-memory names: an edge's `source_id`/`target_id` serialize as
`source`/`target`, and its endpoint descriptors as
`sourceEndpoint`/`targetEndpoint`. A node's `kind` serializes as `type`.

Missing or null `id`, `label`, `type`, and endpoint fields fall back to the
constructor defaults; a missing `source` or `target` on an edge entry is a
parse error. This module performs no I/O.
*/

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::edge::Edge;
use crate::graph::Graph;
use crate::node::Node;
use crate::persistence::DocumentError;

/// Persisted shape of a [`Node`].
///
/// ```json
/// { "id": "n1", "label": "Start", "type": "Node", "properties": {} }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WireNode {
    /// Absent, null, or empty ids trigger generation on conversion.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    /// The `type` discriminator; preserved verbatim for editors that
    /// subclass nodes.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

/// Persisted shape of an [`Edge`].
///
/// `source` and `target` are required; everything else defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WireEdge {
    #[serde(default)]
    pub id: Option<String>,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "sourceEndpoint", default)]
    pub source_endpoint: Option<String>,
    #[serde(rename = "targetEndpoint", default)]
    pub target_endpoint: Option<String>,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

/// Persisted shape of a whole [`Graph`] document.
///
/// Node and edge lists appear in map-insertion order, which round-trips: on
/// load, entries are re-inserted in listed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WireGraph {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub nodes: Vec<WireNode>,
    #[serde(default)]
    pub edges: Vec<WireEdge>,
}

impl From<&Node> for WireNode {
    fn from(node: &Node) -> Self {
        Self {
            id: Some(node.id().to_string()),
            label: Some(node.label.clone()),
            kind: Some(node.kind.clone()),
            properties: node.properties.clone(),
        }
    }
}

impl From<WireNode> for Node {
    fn from(wire: WireNode) -> Self {
        let mut node = Node::with_id(
            wire.id.unwrap_or_default(),
            wire.label.unwrap_or_else(|| Node::DEFAULT_LABEL.to_string()),
        );
        node.kind = wire.kind.unwrap_or_else(|| Node::DEFAULT_KIND.to_string());
        node.properties = wire.properties;
        node
    }
}

impl From<&Edge> for WireEdge {
    fn from(edge: &Edge) -> Self {
        Self {
            id: Some(edge.id().to_string()),
            source: edge.source_id().to_string(),
            target: edge.target_id().to_string(),
            label: Some(edge.label.clone()),
            source_endpoint: Some(edge.source_endpoint.clone()),
            target_endpoint: Some(edge.target_endpoint.clone()),
            properties: edge.properties.clone(),
        }
    }
}

impl From<WireEdge> for Edge {
    fn from(wire: WireEdge) -> Self {
        let mut edge = Edge::with_id(wire.id.unwrap_or_default(), wire.source, wire.target)
            .with_label(wire.label.unwrap_or_default())
            .with_endpoints(
                wire.source_endpoint
                    .unwrap_or_else(|| Edge::DEFAULT_SOURCE_ENDPOINT.to_string()),
                wire.target_endpoint
                    .unwrap_or_else(|| Edge::DEFAULT_TARGET_ENDPOINT.to_string()),
            );
        edge.properties = wire.properties;
        edge
    }
}

impl From<&Graph> for WireGraph {
    fn from(graph: &Graph) -> Self {
        Self {
            name: Some(graph.name.clone()),
            nodes: graph.nodes().map(WireNode::from).collect(),
            edges: graph.edges().map(WireEdge::from).collect(),
        }
    }
}

impl From<WireGraph> for Graph {
    fn from(wire: WireGraph) -> Self {
        let mut graph = Graph::new(
            wire.name
                .unwrap_or_else(|| Graph::DEFAULT_NAME.to_string()),
        );
        // Nodes must be registered before edges so the incoming/outgoing
        // sets populate.
        for node in wire.nodes {
            graph.add_node(Node::from(node));
        }
        for edge in wire.edges {
            graph.add_edge(Edge::from(edge));
        }
        graph
    }
}

impl Graph {
    /// Serializes the document to a generic JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Parse`] if the property bags contain values
    /// JSON cannot represent (e.g. non-finite floats).
    pub fn to_value(&self) -> Result<Value, DocumentError> {
        Ok(serde_json::to_value(WireGraph::from(self))?)
    }

    /// Deserializes a document from a generic JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Parse`] when required substructure is
    /// malformed, e.g. an edge entry missing `source` or `target`.
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        let wire: WireGraph = serde_json::from_value(value)?;
        Ok(Graph::from(wire))
    }

    /// Serializes to pretty-printed JSON text with 2-space indentation, the
    /// on-disk document format.
    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(&WireGraph::from(self))?)
    }

    /// Deserializes a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Parse`] on malformed JSON or malformed
    /// required substructure.
    pub fn from_json_str(text: &str) -> Result<Self, DocumentError> {
        let wire: WireGraph = serde_json::from_str(text)?;
        Ok(Graph::from(wire))
    }
}
