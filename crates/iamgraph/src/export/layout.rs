//! Sizing conventions for force-directed and layered renderers.

use crate::graph::OrgGraph;

/// Size of a node with no incident edges.
pub const BASE_NODE_SIZE: usize = 25;

/// Layout scale of an empty graph.
pub const BASE_LAYOUT_SCALE: usize = 300;

/// Set `extra["size"]` to `25 + degree` on every node.
pub fn apply_degree_sizing(graph: &mut OrgGraph) {
    let sizes: Vec<i64> = graph
        .nodes()
        .map(|node| BASE_NODE_SIZE + graph.degree(&node.key).unwrap_or(0))
        .map(|size| i64::try_from(size).unwrap_or(i64::MAX))
        .collect();

    // nodes() and nodes_mut() share the insertion order
    for (node, size) in graph.nodes_mut().zip(sizes) {
        node.extra.insert("size", size);
    }
}

/// Scale passed to the renderer's layout: `300 + node_count * max_degree`.
pub fn layout_scale(graph: &OrgGraph) -> usize {
    BASE_LAYOUT_SCALE + graph.node_count() * graph.max_degree()
}
