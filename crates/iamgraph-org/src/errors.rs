//! Error types for organisation export processing.

use iamgraph::GraphError;
use thiserror::Error;

/// Errors that can occur while reading an organisation export
#[derive(Error, Debug)]
pub enum OrgError {
    /// A required top-level field is absent
    #[error("Organisation export is missing required field '{field}'")]
    MissingField {
        /// Name of the missing field
        field: String,
    },

    /// The export is not valid JSON or has the wrong shape
    #[error("Invalid organisation export: {0}")]
    Parse(#[from] serde_json::Error),

    /// Graph construction or annotation failed
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

/// Result type for organisation export operations
pub type OrgResult<T> = Result<T, OrgError>;
