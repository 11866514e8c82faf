//! Identifier generation for nodes and edges.
//!
//! Every entity in a workflow document is keyed by a string id. Callers may
//! supply their own ids (any non-empty string); when none is supplied the
//! constructors fall back to [`fresh_id`], a random v4 UUID. Uniqueness is
//! probabilistic, not enforced: the document model accepts duplicate ids and
//! resolves them by overwrite.

use uuid::Uuid;

/// Generate a fresh, collision-improbable entity identifier.
///
/// # Examples
///
/// ```
/// use flowdoc::ident::fresh_id;
///
/// let a = fresh_id();
/// let b = fresh_id();
/// assert_ne!(a, b);
/// ```
#[must_use]
pub fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

/// Resolve a caller-supplied id, generating a fresh one when it is empty.
///
/// An explicitly empty id is treated the same as an omitted one, so wire
/// documents carrying `"id": ""` (or no id at all) still get usable keys.
#[must_use]
pub fn id_or_fresh(candidate: impl Into<String>) -> String {
    let candidate = candidate.into();
    if candidate.is_empty() {
        fresh_id()
    } else {
        candidate
    }
}
