//! Filtered copies of a graph.

use crate::error::{GraphError, Result};
use crate::graph::{EdgeAttrs, EdgeType, NodeAttrs, NodeType, OrgGraph};
use log::{debug, info};
use std::collections::HashSet;

/// Copy `graph`, keeping only the wanted edge and node types.
///
/// A non-empty `edge_types` set drops every edge of another type; nodes are
/// untouched by this step. A non-empty `node_types` set then restricts the
/// copy to the subgraph induced by the nodes of those types. Empty sets do
/// not filter, so two empty sets return an identical copy.
///
/// Node order, attributes and edge order are preserved. Edge IDs are
/// renumbered in the copy.
///
/// # Errors
///
/// Returns [`GraphError::EmptySelection`] when `node_types` is non-empty and
/// no node carries any of those types.
pub fn extract_subgraph(
    graph: &OrgGraph,
    edge_types: &HashSet<EdgeType>,
    node_types: &HashSet<NodeType>,
) -> Result<OrgGraph> {
    let kept_nodes: Vec<&str> = graph
        .nodes()
        .filter(|node| {
            node_types.is_empty()
                || node
                    .node_type
                    .as_ref()
                    .is_some_and(|node_type| node_types.contains(node_type))
        })
        .map(|node| node.key.as_str())
        .collect();

    if kept_nodes.is_empty() && !node_types.is_empty() {
        let mut requested: Vec<String> = node_types.iter().map(ToString::to_string).collect();
        requested.sort();
        return Err(GraphError::EmptySelection { requested });
    }

    let kept: HashSet<&str> = kept_nodes.iter().copied().collect();
    let mut subgraph = OrgGraph::new();

    for key in &kept_nodes {
        let node = graph.node(key)?;
        subgraph.add_node(
            node.key.clone(),
            NodeAttrs {
                label: node.label.clone(),
                node_type: node.node_type.clone(),
                color_group: node.color_group.clone(),
                level: node.level,
                color: node.color.clone(),
                extra: node.extra.clone(),
            },
        );
    }

    for edge in graph.edges() {
        if !edge_types.is_empty() && !edge_types.contains(&edge.edge_type) {
            continue;
        }
        if !kept.contains(edge.source.as_str()) || !kept.contains(edge.target.as_str()) {
            continue;
        }
        subgraph.add_edge(
            edge.source.clone(),
            edge.target.clone(),
            EdgeAttrs {
                edge_type: edge.edge_type.clone(),
                label: edge.label.clone(),
                color: edge.color.clone(),
                extra: edge.extra.clone(),
            },
        );
    }

    debug!(
        "Subgraph filters: {} edge types, {} node types",
        edge_types.len(),
        node_types.len()
    );
    info!(
        "Extracted subgraph with {} of {} nodes and {} of {} edges",
        subgraph.node_count(),
        graph.node_count(),
        subgraph.edge_count(),
        graph.edge_count()
    );

    Ok(subgraph)
}
