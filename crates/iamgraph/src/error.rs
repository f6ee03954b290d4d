//! Error types for iamgraph operations.
//!
//! Structural failures are returned as [`GraphError`]. Annotation gaps
//! (unknown types, missing levels) are not errors; see
//! [`ResolveWarning`](crate::resolve::ResolveWarning).

use thiserror::Error;

/// Result type alias for iamgraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type for graph construction, annotation and extraction.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Node not found in the graph
    #[error("Node not found: {key}")]
    NodeNotFound {
        /// Key of the missing node
        key: String,
    },

    /// Edge not found in the graph
    #[error("Edge not found: {edge_id}")]
    EdgeNotFound {
        /// ID of the missing edge
        edge_id: usize,
    },

    /// Named graph section absent from the configuration
    #[error("Graph '{name}' is not defined in the configuration")]
    UnknownGraph {
        /// Requested section name
        name: String,
    },

    /// An edge type has no color and the edge color table has no default
    #[error("No color configured for edge type '{edge_type}' ({source_key} -> {target_key})")]
    MissingEdgeColor {
        /// Edge type without a color entry
        edge_type: String,
        /// Source node of the offending edge
        source_key: String,
        /// Target node of the offending edge
        target_key: String,
    },

    /// A non-empty node type filter matched nothing
    #[error("No nodes match the requested node types: {requested:?}")]
    EmptySelection {
        /// The node types that were asked for
        requested: Vec<String>,
    },

    /// Configuration document is structurally invalid
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what went wrong
        message: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl GraphError {
    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    pub(crate) fn node_not_found(key: &str) -> Self {
        Self::NodeNotFound {
            key: key.to_string(),
        }
    }
}
