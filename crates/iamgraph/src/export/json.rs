//! JSON export with "nodes" and "links" arrays.

use crate::error::{GraphError, Result};
use crate::graph::{Edge, Node, OrgGraph, PropertyMap};
use serde_json::{json, Map, Value};

/// Export the graph as pretty-printed JSON.
///
/// Nodes are keyed by `id` (the node key) and carry their label, type, level,
/// color and every `extra` entry flattened into the object. Links reference
/// node keys in `source`/`target`.
///
/// # Errors
///
/// Returns [`GraphError::Serialization`] if the document cannot be written.
pub fn export_json(graph: &OrgGraph) -> Result<String> {
    let nodes: Vec<Value> = graph.nodes().map(node_to_json).collect();
    let links: Vec<Value> = graph.edges().map(edge_to_json).collect();

    let result = json!({
        "nodes": nodes,
        "links": links,
    });

    serde_json::to_string_pretty(&result)
        .map_err(|e| GraphError::serialization("Failed to serialize graph to JSON", Some(e)))
}

fn node_to_json(node: &Node) -> Value {
    let mut object = properties_to_json(&node.extra);
    object.insert("id".to_string(), json!(node.key));
    object.insert("label".to_string(), json!(node.label()));
    object.insert(
        "node_type".to_string(),
        json!(node.node_type.as_ref().map(|t| t.as_str())),
    );
    object.insert("level".to_string(), json!(node.level));
    object.insert("color".to_string(), json!(node.color));
    Value::Object(object)
}

fn edge_to_json(edge: &Edge) -> Value {
    json!({
        "id": edge.id,
        "source": edge.source,
        "target": edge.target,
        "edge_type": edge.edge_type.as_str(),
        "label": edge.label,
        "color": edge.color,
    })
}

fn properties_to_json(props: &PropertyMap) -> Map<String, Value> {
    props
        .iter()
        .map(|(key, value)| (key.to_string(), json!(value)))
        .collect()
}
