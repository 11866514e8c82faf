//! The workflow document aggregate.
//!
//! A [`Graph`] owns insertion-ordered maps of nodes and edges, keyed by
//! entity id, plus a document name. It is the single synchronization point
//! for the derived incoming/outgoing edge-id sets on nodes: those sets are
//! updated only inside [`Graph::add_edge`], never by nodes themselves.
//!
//! The aggregate is deliberately permissive:
//!
//! - re-adding an entity with an existing id overwrites the prior entry
//!   silently (the entry keeps its original position in iteration order)
//! - an edge referencing a node id not present in the graph is stored
//!   anyway; only the missing side's edge-id set update is skipped
//!
//! There are no removal operations. The lifecycle is empty → populated →
//! serialized or dropped.

use indexmap::IndexMap;
use tracing::debug;

use crate::edge::Edge;
use crate::node::Node;

/// A named workflow graph: the document aggregate.
///
/// # Examples
///
/// ```
/// use flowdoc::graph::Graph;
/// use flowdoc::node::Node;
///
/// let mut graph = Graph::new("Onboarding");
/// let a = graph.add_node(Node::with_id("a", "Collect details")).id().to_string();
/// let b = graph.add_node(Node::with_id("b", "Verify")).id().to_string();
/// let edge_id = graph.connect(&a, &b).id().to_string();
///
/// assert_eq!(graph.node_count(), 2);
/// assert!(graph.node("a").unwrap().outgoing_edges().contains(&edge_id));
/// assert!(graph.node("b").unwrap().incoming_edges().contains(&edge_id));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Graph {
    /// Document name; defaults to [`Graph::DEFAULT_NAME`].
    pub name: String,
    nodes: IndexMap<String, Node>,
    edges: IndexMap<String, Edge>,
}

impl Graph {
    /// Name applied to graphs constructed without one.
    pub const DEFAULT_NAME: &'static str = "Workflow";

    /// Creates an empty graph with the given document name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: IndexMap::new(),
            edges: IndexMap::new(),
        }
    }

    /// Inserts a node keyed by its id, overwriting any prior entry with the
    /// same id, and returns a reference to the stored node.
    ///
    /// Overwriting replaces the whole node, including its derived edge-id
    /// sets; callers relying on those sets should add nodes before edges.
    pub fn add_node(&mut self, node: Node) -> &Node {
        let id = node.id().to_string();
        debug!(node_id = %id, label = %node.label, "adding node");
        self.nodes.insert(id.clone(), node);
        &self.nodes[id.as_str()]
    }

    /// Inserts an edge keyed by its id and registers it on the endpoint
    /// nodes that are present.
    ///
    /// When the source node exists, the edge id is added to its outgoing
    /// set; when the target node exists, to its incoming set. A missing side
    /// is skipped without error — dangling references are tolerated.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowdoc::edge::Edge;
    /// use flowdoc::graph::Graph;
    ///
    /// let mut graph = Graph::default();
    /// // Neither endpoint exists; the edge is stored regardless.
    /// graph.add_edge(Edge::new("missing-src", "missing-dst"));
    /// assert_eq!(graph.edge_count(), 1);
    /// ```
    pub fn add_edge(&mut self, edge: Edge) -> &Edge {
        let id = edge.id().to_string();
        debug!(
            edge_id = %id,
            source = %edge.source_id(),
            target = %edge.target_id(),
            "adding edge"
        );
        if let Some(source) = self.nodes.get_mut(edge.source_id()) {
            source.outgoing.insert(id.clone());
        }
        if let Some(target) = self.nodes.get_mut(edge.target_id()) {
            target.incoming.insert(id.clone());
        }
        self.edges.insert(id.clone(), edge);
        &self.edges[id.as_str()]
    }

    /// Connects two nodes by id with a fresh, unlabeled edge.
    ///
    /// Convenience wrapper over [`Edge::new`] + [`add_edge`](Self::add_edge);
    /// the endpoint ids are not checked for existence.
    pub fn connect(&mut self, source_id: impl Into<String>, target_id: impl Into<String>) -> &Edge {
        self.add_edge(Edge::new(source_id, target_id))
    }

    /// Connects two nodes by id with a labeled edge.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowdoc::graph::Graph;
    /// use flowdoc::node::Node;
    ///
    /// let mut graph = Graph::default();
    /// graph.add_node(Node::with_id("a", "A"));
    /// graph.add_node(Node::with_id("b", "B"));
    /// let edge = graph.connect_labeled("a", "b", "on success");
    /// assert_eq!(edge.label, "on success");
    /// ```
    pub fn connect_labeled(
        &mut self,
        source_id: impl Into<String>,
        target_id: impl Into<String>,
        label: impl Into<String>,
    ) -> &Edge {
        self.add_edge(Edge::new(source_id, target_id).with_label(label))
    }

    /// Looks up a node by id.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Looks up a node by id for mutation. The id itself stays fixed; only
    /// label, kind, and properties are mutable through the returned value.
    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Looks up an edge by id.
    #[must_use]
    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Looks up an edge by id for mutation.
    pub fn edge_mut(&mut self, id: &str) -> Option<&mut Edge> {
        self.edges.get_mut(id)
    }

    /// Iterates nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Iterates edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Number of nodes in the document.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges in the document.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true when the document holds no nodes and no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAME)
    }
}
