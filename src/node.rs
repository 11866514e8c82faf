//! Node type for workflow documents.
//!
//! A [`Node`] is a labeled vertex with an open-ended property bag and two
//! derived sets of edge ids (incoming/outgoing). The edge-id sets are owned
//! state but maintained exclusively by [`Graph::add_edge`](crate::graph::Graph::add_edge);
//! a node constructed and wired by hand carries empty sets.

use rustc_hash::FxHashSet;
use serde_json::{Map, Value};

use crate::ident;

/// A labeled vertex in a workflow graph.
///
/// The `id` is fixed at construction and never changes; `label`, `kind`, and
/// `properties` are freely mutable. The incoming/outgoing edge-id sets are
/// read-only from the outside and reflect the edges registered through the
/// owning graph.
///
/// # Examples
///
/// ```
/// use flowdoc::node::Node;
/// use serde_json::json;
///
/// // Auto-generated id, default kind
/// let node = Node::new("Fetch data");
/// assert!(!node.id().is_empty());
/// assert_eq!(node.kind, Node::DEFAULT_KIND);
///
/// // Explicit id with properties
/// let node = Node::with_id("fetch", "Fetch data")
///     .with_property("url", json!("https://example.com"))
///     .with_property("retries", json!(2));
/// assert_eq!(node.id(), "fetch");
/// assert_eq!(node.property("retries"), Some(&json!(2)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Immutable entity id; unique within a graph by convention only.
    id: String,
    /// Human-readable display label.
    pub label: String,
    /// Wire `type` discriminator. Round-trips verbatim so documents produced
    /// by editors with node subclassing survive load/save.
    pub kind: String,
    /// Open property bag; values are arbitrary JSON.
    pub properties: Map<String, Value>,
    /// Ids of edges whose target is this node. Maintained by the graph.
    pub(crate) incoming: FxHashSet<String>,
    /// Ids of edges whose source is this node. Maintained by the graph.
    pub(crate) outgoing: FxHashSet<String>,
}

impl Node {
    /// Default label and wire `type` for nodes constructed without one.
    pub const DEFAULT_LABEL: &'static str = "Node";
    /// Default wire `type` discriminator.
    pub const DEFAULT_KIND: &'static str = "Node";

    /// Creates a node with a freshly generated id.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowdoc::node::Node;
    ///
    /// let a = Node::new("A");
    /// let b = Node::new("B");
    /// assert_ne!(a.id(), b.id());
    /// ```
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_id(ident::fresh_id(), label)
    }

    /// Creates a node with an explicit id.
    ///
    /// An empty id is treated as absent and triggers generation, mirroring
    /// the wire format where `"id": ""` and a missing id are equivalent.
    #[must_use]
    pub fn with_id(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: ident::id_or_fresh(id),
            label: label.into(),
            kind: Self::DEFAULT_KIND.to_string(),
            properties: Map::new(),
            incoming: FxHashSet::default(),
            outgoing: FxHashSet::default(),
        }
    }

    /// Sets the wire `type` discriminator (builder style).
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Adds a property (builder style).
    ///
    /// # Examples
    ///
    /// ```
    /// use flowdoc::node::Node;
    /// use serde_json::json;
    ///
    /// let node = Node::new("Review")
    ///     .with_property("status", json!("InProgress"))
    ///     .with_property("assignees", json!(["ada", "grace"]));
    /// assert_eq!(node.properties.len(), 2);
    /// ```
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// Returns the entity id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Inserts or overwrites a property. Values may be any JSON shape.
    pub fn set_property(&mut self, key: impl Into<String>, value: Value) {
        self.properties.insert(key.into(), value);
    }

    /// Returns the stored property value, if present.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Returns the stored property value, or `default` when the key is
    /// absent. Never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowdoc::node::Node;
    /// use serde_json::json;
    ///
    /// let node = Node::new("A").with_property("weight", json!(7));
    /// assert_eq!(node.property_or("weight", &json!(0)), &json!(7));
    /// assert_eq!(node.property_or("height", &json!(0)), &json!(0));
    /// ```
    #[must_use]
    pub fn property_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.properties.get(key).unwrap_or(default)
    }

    /// Ids of edges registered through the owning graph whose target is this
    /// node.
    #[must_use]
    pub fn incoming_edges(&self) -> &FxHashSet<String> {
        &self.incoming
    }

    /// Ids of edges registered through the owning graph whose source is this
    /// node.
    #[must_use]
    pub fn outgoing_edges(&self) -> &FxHashSet<String> {
        &self.outgoing
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LABEL)
    }
}
