//! File persistence for workflow documents.
//!
//! Thin wrappers around the wire format: [`Graph::save`] pretty-prints the
//! document and writes it in one call, [`Graph::load`] reads and parses one
//! file. A write is a single `fs::write` with no temp-file-plus-rename, so a
//! crash mid-write can leave a truncated file; callers needing atomic
//! replace must provide it themselves.

use std::fs;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;
use tracing::info;

use crate::graph::Graph;

/// Errors surfaced by document serialization and persistence.
///
/// Dangling edge references and duplicate-id overwrites are *not* errors;
/// they are documented tolerances of the model. Everything here either fully
/// succeeds or leaves no graph constructed.
#[derive(Debug, Error, Diagnostic)]
pub enum DocumentError {
    /// The requested document path does not exist.
    #[error("workflow document not found: {}", path.display())]
    #[diagnostic(
        code(flowdoc::document::not_found),
        help("Check that the path exists and is readable.")
    )]
    NotFound { path: PathBuf },

    /// The file content is not valid JSON, or a required substructure is
    /// malformed (e.g. an edge entry missing `source`/`target`).
    #[error("malformed workflow document: {source}")]
    #[diagnostic(code(flowdoc::document::parse))]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    /// Underlying read/write failure, surfaced unchanged.
    #[error("workflow document I/O error: {source}")]
    #[diagnostic(code(flowdoc::document::io))]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl Graph {
    /// Serializes the document and writes it to `path` as pretty-printed
    /// UTF-8 JSON (2-space indentation), creating or truncating the file.
    ///
    /// # Errors
    ///
    /// Surfaces the underlying write error as [`DocumentError::Io`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use flowdoc::graph::Graph;
    ///
    /// # fn main() -> Result<(), flowdoc::persistence::DocumentError> {
    /// let graph = Graph::new("Deploy");
    /// graph.save("deploy.awf.json")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DocumentError> {
        let path = path.as_ref();
        let text = self.to_json_pretty()?;
        fs::write(path, text)?;
        info!(
            path = %path.display(),
            nodes = self.node_count(),
            edges = self.edge_count(),
            "saved workflow document"
        );
        Ok(())
    }

    /// Reads a workflow document from `path` and deserializes it.
    ///
    /// # Errors
    ///
    /// - [`DocumentError::NotFound`] when the path does not exist
    /// - [`DocumentError::Parse`] when the content is not a valid document
    /// - [`DocumentError::Io`] for other read failures
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                DocumentError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                DocumentError::Io { source }
            }
        })?;
        let graph = Self::from_json_str(&text)?;
        info!(
            path = %path.display(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "loaded workflow document"
        );
        Ok(graph)
    }
}
