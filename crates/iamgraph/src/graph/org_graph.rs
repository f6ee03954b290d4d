//! The multi-graph container.

use super::algorithms::SimplePaths;
use super::types::{Direction, Edge, EdgeAttrs, EdgeId, Node, NodeAttrs, NodeType};
use crate::error::{GraphError, Result};
use indexmap::IndexMap;
use log::{debug, trace};
use std::collections::HashMap;

/// A directed multi-graph keyed by node name.
///
/// Nodes keep their insertion order. Edges are never merged: adding the same
/// ordered pair twice yields two independent edges. Nothing is ever removed;
/// filtered views are produced as copies by [`crate::subgraph`].
#[derive(Debug, Clone, Default)]
pub struct OrgGraph {
    nodes: IndexMap<String, Node>,
    edges: Vec<Edge>,
    // Adjacency indexes for O(1) neighbor lookups
    adjacency_out: HashMap<String, Vec<EdgeId>>,
    adjacency_in: HashMap<String, Vec<EdgeId>>,
}

impl OrgGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, or merge `attrs` into the existing node with that key.
    ///
    /// See [`Node::merge`] for the merge rules.
    pub fn add_node(&mut self, key: impl Into<String>, attrs: NodeAttrs) {
        let key = key.into();
        match self.nodes.get_mut(&key) {
            Some(node) => {
                trace!("Merging attributes into node {key}");
                node.merge(attrs);
            }
            None => {
                debug!("Adding node: key={key}, type={:?}", attrs.node_type);
                let mut node = Node::new(key.clone());
                node.merge(attrs);
                self.nodes.insert(key, node);
            }
        }
    }

    /// Append a new edge, creating bare endpoint nodes when they are missing.
    ///
    /// Returns the ID of the new edge.
    pub fn add_edge(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        attrs: EdgeAttrs,
    ) -> EdgeId {
        let source = source.into();
        let target = target.into();
        debug!(
            "Adding edge: source={source}, target={target}, type={}",
            attrs.edge_type
        );

        self.ensure_node(&source);
        self.ensure_node(&target);

        let edge_id = self.edges.len();
        self.adjacency_out
            .entry(source.clone())
            .or_default()
            .push(edge_id);
        self.adjacency_in
            .entry(target.clone())
            .or_default()
            .push(edge_id);
        self.edges.push(Edge::new(edge_id, source, target, attrs));

        edge_id
    }

    /// Get a node by key.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn node(&self, key: &str) -> Result<&Node> {
        self.nodes
            .get(key)
            .ok_or_else(|| GraphError::node_not_found(key))
    }

    /// Get a mutable reference to a node by key.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn node_mut(&mut self, key: &str) -> Result<&mut Node> {
        self.nodes
            .get_mut(key)
            .ok_or_else(|| GraphError::node_not_found(key))
    }

    /// Whether a node with this key exists.
    pub fn contains_node(&self, key: &str) -> bool {
        self.nodes.contains_key(key)
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// All nodes in insertion order, mutably.
    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.values_mut()
    }

    /// Keys of every node carrying `node_type`, in insertion order.
    pub fn nodes_of_type(&self, node_type: &NodeType) -> Vec<&str> {
        self.nodes
            .values()
            .filter(|node| node.is_type(node_type))
            .map(|node| node.key.as_str())
            .collect()
    }

    /// Get an edge by ID.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if the edge doesn't exist.
    pub fn edge(&self, id: EdgeId) -> Result<&Edge> {
        self.edges
            .get(id)
            .ok_or(GraphError::EdgeNotFound { edge_id: id })
    }

    /// Get a mutable reference to an edge by ID.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if the edge doesn't exist.
    pub fn edge_mut(&mut self, id: EdgeId) -> Result<&mut Edge> {
        self.edges
            .get_mut(id)
            .ok_or(GraphError::EdgeNotFound { edge_id: id })
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// All edges in insertion order, mutably.
    pub fn edges_mut(&mut self) -> impl Iterator<Item = &mut Edge> {
        self.edges.iter_mut()
    }

    /// Get all edges from `source` to `target` (direction matters).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint doesn't exist.
    pub fn edges_between(&self, source: &str, target: &str) -> Result<Vec<EdgeId>> {
        self.node(source)?;
        self.node(target)?;

        Ok(self
            .adjacency_out
            .get(source)
            .map(|out_edges| {
                out_edges
                    .iter()
                    .copied()
                    .filter(|&id| self.edges[id].target == target)
                    .collect()
            })
            .unwrap_or_default())
    }

    /// Whether at least one edge runs from `source` to `target`.
    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        self.adjacency_out
            .get(source)
            .is_some_and(|out_edges| {
                out_edges
                    .iter()
                    .any(|&id| self.edges[id].target == target)
            })
    }

    /// Distinct neighbor keys in the given direction.
    ///
    /// Outgoing neighbors come first, then incoming ones, each in edge order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn neighbors(&self, key: &str, direction: Direction) -> Result<Vec<&str>> {
        self.node(key)?;
        Ok(self.neighbor_keys(key, direction))
    }

    /// Number of edges incident to `key`, ignoring direction.
    ///
    /// A self-loop counts twice, as in the undirected view.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn degree(&self, key: &str) -> Result<usize> {
        self.node(key)?;
        let out_degree = self.adjacency_out.get(key).map_or(0, Vec::len);
        let in_degree = self.adjacency_in.get(key).map_or(0, Vec::len);
        Ok(out_degree + in_degree)
    }

    /// Largest degree over all nodes (0 for an empty graph).
    pub fn max_degree(&self) -> usize {
        self.nodes
            .keys()
            .map(|key| {
                self.adjacency_out.get(key).map_or(0, Vec::len)
                    + self.adjacency_in.get(key).map_or(0, Vec::len)
            })
            .max()
            .unwrap_or(0)
    }

    /// Lazily enumerate all simple paths from `source` to `target`, treating
    /// every edge as undirected.
    ///
    /// The iterator is finite and `Clone`, so a sequence can be restarted by
    /// cloning it before consumption or by calling this method again.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint doesn't exist.
    pub fn simple_paths<'a>(
        &'a self,
        source: &'a str,
        target: &'a str,
    ) -> Result<SimplePaths<'a>> {
        self.node(source)?;
        self.node(target)?;
        Ok(SimplePaths::new(self, source, target))
    }

    /// Get the total number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn neighbor_keys<'a>(&'a self, key: &str, direction: Direction) -> Vec<&'a str> {
        let mut neighbors: Vec<&'a str> = Vec::new();
        let mut push = |candidate: &'a str| {
            if candidate != key && !neighbors.contains(&candidate) {
                neighbors.push(candidate);
            }
        };

        if matches!(direction, Direction::Outgoing | Direction::Both) {
            if let Some(out_edges) = self.adjacency_out.get(key) {
                for &id in out_edges {
                    push(self.edges[id].target.as_str());
                }
            }
        }
        if matches!(direction, Direction::Incoming | Direction::Both) {
            if let Some(in_edges) = self.adjacency_in.get(key) {
                for &id in in_edges {
                    push(self.edges[id].source.as_str());
                }
            }
        }

        neighbors
    }

    fn ensure_node(&mut self, key: &str) {
        if !self.nodes.contains_key(key) {
            debug!("Adding node: key={key} (edge endpoint)");
            self.nodes.insert(key.to_string(), Node::new(key));
        }
    }
}
