//! DOT format export for Graphviz.
//!
//! Nodes and edges are drawn with the colors the resolvers assigned, so
//! export after annotation.

use crate::graph::{NodeType, OrgGraph};
use std::collections::HashMap;

/// Options for styling DOT export
#[derive(Debug, Clone)]
pub struct DotOptions {
    /// Node shapes by type (box, ellipse, folder, etc.)
    pub node_shapes: HashMap<NodeType, String>,
    /// Fill color for nodes that were never colored
    pub fallback_color: String,
    /// Graph layout direction: LR, TB, RL, BT
    pub rankdir: String,
    /// `extra` entries to show in node labels
    pub show_properties: Vec<String>,
}

impl Default for DotOptions {
    fn default() -> Self {
        let node_shapes = [
            (NodeType::Organisation, "house"),
            (NodeType::Unit, "folder"),
            (NodeType::Collaboration, "component"),
            (NodeType::Application, "box"),
            (NodeType::CoGroup, "tab"),
        ]
        .into_iter()
        .map(|(node_type, shape)| (node_type, shape.to_string()))
        .collect();

        DotOptions {
            node_shapes,
            fallback_color: "#FFFFFF".to_string(),
            rankdir: "TB".to_string(),
            show_properties: vec![],
        }
    }
}

/// Export graph to Graphviz DOT format
pub fn export_dot(graph: &OrgGraph) -> String {
    export_dot_styled(graph, &DotOptions::default())
}

/// Export graph to Graphviz DOT format with custom styling
pub fn export_dot_styled(graph: &OrgGraph, options: &DotOptions) -> String {
    let mut output = String::new();

    output.push_str("digraph org_graph {\n");
    output.push_str(&format!("    rankdir={};\n", options.rankdir));
    output.push_str("    node [style=filled];\n\n");

    for node in graph.nodes() {
        let mut label = escape_dot_label(node.label());
        for prop_name in &options.show_properties {
            if let Some(value) = node.extra.get(prop_name) {
                label.push_str(&format!("\\n{}:{value}", escape_dot_label(prop_name)));
            }
        }

        let color = node.color.as_deref().unwrap_or(&options.fallback_color);
        let shape = node
            .node_type
            .as_ref()
            .and_then(|node_type| options.node_shapes.get(node_type))
            .map_or("ellipse", String::as_str);

        output.push_str(&format!(
            "    \"{}\" [label=\"{label}\", shape={shape}, fillcolor=\"{}\"];\n",
            escape_dot_label(&node.key),
            escape_dot_label(color)
        ));
    }

    output.push('\n');

    for edge in graph.edges() {
        let label = edge.label.as_deref().unwrap_or(edge.edge_type.as_str());
        let color = edge
            .color
            .as_deref()
            .map(|c| format!(", color=\"{}\"", escape_dot_label(c)))
            .unwrap_or_default();

        output.push_str(&format!(
            "    \"{}\" -> \"{}\" [label=\"{}\"{}];\n",
            escape_dot_label(&edge.source),
            escape_dot_label(&edge.target),
            escape_dot_label(label),
            color
        ));
    }

    output.push_str("}\n");
    output
}

/// Escape special characters for DOT labels
fn escape_dot_label(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
