//! Unit tests for renderer export.

use iamgraph::export::{apply_degree_sizing, export_dot, export_json, layout_scale};
use iamgraph::{EdgeAttrs, EdgeType, NodeAttrs, NodeType, OrgGraph};
use serde_json::Value;

fn small_graph() -> OrgGraph {
    let mut graph = OrgGraph::new();
    graph.add_node(
        "FederFlow",
        NodeAttrs::new()
            .label("federflow")
            .node_type(NodeType::Organisation)
            .level(1)
            .color("gray"),
    );
    graph.add_edge("FederFlow", "A", EdgeAttrs::new(EdgeType::Backbone).color("black"));
    graph.add_edge("FederFlow", "B", EdgeAttrs::new(EdgeType::Backbone).color("black"));
    graph
}

#[test]
fn test_json_contains_nodes_and_links() {
    let mut graph = small_graph();
    apply_degree_sizing(&mut graph);

    let value: Value = serde_json::from_str(&export_json(&graph).unwrap()).unwrap();

    let nodes = value["nodes"].as_array().unwrap();
    let links = value["links"].as_array().unwrap();
    assert_eq!(nodes.len(), 3);
    assert_eq!(links.len(), 2);
    assert_eq!(nodes[0]["level"], 1);
    assert_eq!(nodes[0]["size"], 27);
    assert_eq!(links[1]["source"], "FederFlow");
    assert_eq!(links[1]["target"], "B");
    assert_eq!(links[1]["color"], "black");
}

#[test]
fn test_dot_uses_resolved_colors() {
    let dot = export_dot(&small_graph());

    assert!(dot.starts_with("digraph org_graph {"));
    assert!(dot.contains("label=\"federflow\""));
    assert!(dot.contains("fillcolor=\"gray\""));
    assert!(dot.contains("\"FederFlow\" -> \"A\" [label=\"BACKBONE\", color=\"black\"];"));
}

#[test]
fn test_layout_scale_of_empty_graph() {
    assert_eq!(layout_scale(&OrgGraph::new()), 300);
    assert_eq!(layout_scale(&small_graph()), 300 + 3 * 2);
}
