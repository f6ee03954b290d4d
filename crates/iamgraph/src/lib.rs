//! # iamgraph
//!
//! A typed multi-graph for identity and access relations: organisations, units,
//! collaborations, applications, groups and the people acting on them.
//!
//! ## Core Principles
//!
//! - **Explicit Configuration**: one immutable [`GraphConfig`] drives typing, levels and colors
//! - **Add Only**: builders annotate and append, they never remove
//! - **Warn, Don't Guess Silently**: every annotation gap is reported as a [`ResolveWarning`]
//! - **Renderer Agnostic**: layout and drawing are left to external tools
//!
//! ## Architecture
//!
//! ```text
//! Front ends (organisation export, config-defined graphs)
//!     ↓
//! Pipeline (build → resolve → infer → resolve edges)
//!     ↓
//! Resolvers / Inference / Subgraph extraction
//!     ↓
//! Core Graph (nodes, multi-edges, simple paths)
//!     ↓
//! Export (JSON, DOT) for renderers
//! ```
//!
//! ## Example
//!
//! ```rust
//! use iamgraph::{EdgeAttrs, EdgeType, NodeAttrs, NodeType, OrgGraph};
//!
//! let mut graph = OrgGraph::new();
//! graph.add_node("FederFlow", NodeAttrs::new().node_type(NodeType::Organisation));
//! graph.add_node("Research", NodeAttrs::new().node_type(NodeType::Unit));
//! graph.add_edge("FederFlow", "Research", EdgeAttrs::new(EdgeType::Backbone));
//!
//! assert_eq!(graph.degree("Research").unwrap(), 1);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod export;
pub mod graph;
pub mod inference;
pub mod pipeline;
pub mod resolve;
pub mod subgraph;

// Re-export main types
pub use config::{EdgeSet, GraphConfig, InferenceSettings, NodeTypeSpec};
pub use error::{GraphError, Result};
pub use graph::{
    Direction, Edge, EdgeAttrs, EdgeId, EdgeType, Node, NodeAttrs, NodeType, OrgGraph,
    PropertyMap, SimplePaths,
};
pub use inference::InferencePolicy;
pub use resolve::ResolveWarning;
