//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`Node`]: keyed entities with type, level and color annotations
//! - [`Edge`]: directed, typed relations; parallel edges are kept apart
//! - [`OrgGraph`]: the multi-graph container
//! - [`SimplePaths`]: lazy simple-path enumeration over the undirected view

mod types;
mod property;
mod org_graph;
pub mod algorithms;

pub use types::{
    Direction, Edge, EdgeAttrs, EdgeId, EdgeType, Node, NodeAttrs, NodeType,
};
pub use property::PropertyMap;
pub use org_graph::OrgGraph;
pub use algorithms::SimplePaths;
