//! Edge type for workflow documents.
//!
//! An [`Edge`] is a labeled, directed connection between two node ids. The
//! references are weak: nothing checks that the endpoints exist, and an edge
//! whose source or target is missing from the graph is tolerated silently.

use serde_json::{Map, Value};

use crate::ident;

/// A directed, attributed connection between two node ids.
///
/// `id`, `source_id`, and `target_id` are fixed at construction; there is no
/// reconnect operation. Endpoint descriptors are opaque strings encoding a
/// relative attachment point on the node's visual bounding box ("0 0.5" is
/// left-middle, "1 0.5" is right-middle).
///
/// # Examples
///
/// ```
/// use flowdoc::edge::Edge;
/// use serde_json::json;
///
/// let edge = Edge::new("a", "b")
///     .with_label("on success")
///     .with_property("weight", json!(1));
///
/// assert_eq!(edge.source_id(), "a");
/// assert_eq!(edge.target_id(), "b");
/// assert_eq!(edge.source_endpoint, Edge::DEFAULT_SOURCE_ENDPOINT);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    /// Immutable entity id.
    id: String,
    /// Weak reference to the source node id.
    source_id: String,
    /// Weak reference to the target node id.
    target_id: String,
    /// Display label; empty by default.
    pub label: String,
    /// Attachment descriptor on the source node's bounding box.
    pub source_endpoint: String,
    /// Attachment descriptor on the target node's bounding box.
    pub target_endpoint: String,
    /// Open property bag; values are arbitrary JSON.
    pub properties: Map<String, Value>,
}

impl Edge {
    /// Default source attachment: left-middle of the node box.
    pub const DEFAULT_SOURCE_ENDPOINT: &'static str = "0 0.5";
    /// Default target attachment: right-middle of the node box.
    pub const DEFAULT_TARGET_ENDPOINT: &'static str = "1 0.5";

    /// Creates an edge with a freshly generated id, empty label, and default
    /// endpoints.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowdoc::edge::Edge;
    ///
    /// let edge = Edge::new("a", "b");
    /// assert_eq!(edge.label, "");
    /// assert!(!edge.id().is_empty());
    /// ```
    #[must_use]
    pub fn new(source_id: impl Into<String>, target_id: impl Into<String>) -> Self {
        Self::with_id(ident::fresh_id(), source_id, target_id)
    }

    /// Creates an edge with an explicit id. An empty id triggers generation.
    #[must_use]
    pub fn with_id(
        id: impl Into<String>,
        source_id: impl Into<String>,
        target_id: impl Into<String>,
    ) -> Self {
        Self {
            id: ident::id_or_fresh(id),
            source_id: source_id.into(),
            target_id: target_id.into(),
            label: String::new(),
            source_endpoint: Self::DEFAULT_SOURCE_ENDPOINT.to_string(),
            target_endpoint: Self::DEFAULT_TARGET_ENDPOINT.to_string(),
            properties: Map::new(),
        }
    }

    /// Sets the display label (builder style).
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets both endpoint descriptors (builder style).
    #[must_use]
    pub fn with_endpoints(
        mut self,
        source_endpoint: impl Into<String>,
        target_endpoint: impl Into<String>,
    ) -> Self {
        self.source_endpoint = source_endpoint.into();
        self.target_endpoint = target_endpoint.into();
        self
    }

    /// Adds a property (builder style).
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

    /// Returns the source node id.
    #[must_use]
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// Returns the target node id.
    #[must_use]
    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    /// Inserts or overwrites a property.
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
    #[must_use]
    pub fn property_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.properties.get(key).unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn generated_ids_are_unique() {
        let a = Edge::new("x", "y");
        let b = Edge::new("x", "y");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn default_label_and_endpoints() {
        let edge = Edge::new("a", "b");
        assert_eq!(edge.label, "");
        assert_eq!(edge.source_endpoint, "0 0.5");
        assert_eq!(edge.target_endpoint, "1 0.5");
    }

    #[test]
    fn empty_id_triggers_generation() {
        let edge = Edge::with_id("", "a", "b");
        assert!(!edge.id().is_empty());
    }

    #[test]
    fn endpoints_override() {
        let edge = Edge::new("a", "b").with_endpoints("0.5 0", "0.5 1");
        assert_eq!(edge.source_endpoint, "0.5 0");
        assert_eq!(edge.target_endpoint, "0.5 1");
    }

    #[test]
    fn property_accessors() {
        let mut edge = Edge::new("a", "b").with_property("kind", json!("sequence"));
        edge.set_property("kind", json!("parallel"));
        assert_eq!(edge.property("kind"), Some(&json!("parallel")));
        assert_eq!(edge.property_or("missing", &json!(null)), &json!(null));
    }
}
