//! Full configuration pipeline: build, resolve, infer, color.

use super::CONFIG_TOML;
use iamgraph::inference::REJECT_BY_ORG;
use iamgraph::pipeline::render_config_graph;
use iamgraph::{EdgeType, GraphConfig, GraphError, InferencePolicy, NodeType};

#[test]
fn test_render_plain_graph() {
    let config = GraphConfig::from_toml_str(CONFIG_TOML).unwrap();
    let rendered = render_config_graph(&config, "graph").unwrap();

    assert!(rendered.warnings.is_empty());
    assert!(rendered.derived_edges.is_empty());

    let graph = &rendered.graph;
    for node in graph.nodes() {
        assert_eq!(node.node_type.as_ref().map(|t| t.as_str()), Some(node.key.as_str()));
        assert!(node.level.is_some());
        assert!(node.color.is_some());
    }
    assert_eq!(graph.node("ORGANISATION").unwrap().level, Some(1));
    assert_eq!(graph.node("ORGANISATION").unwrap().color.as_deref(), Some("gray"));
    assert_eq!(graph.node("CO_GROUP").unwrap().color.as_deref(), Some("yellow"));

    for edge in graph.edges() {
        assert!(edge.color.is_some());
        if edge.edge_type == EdgeType::Backbone {
            assert_eq!(edge.color.as_deref(), Some("black"));
        }
    }
}

#[test]
fn test_render_approved_graph() {
    let config = GraphConfig::from_toml_str(CONFIG_TOML).unwrap();
    let rendered = render_config_graph(&config, "approved").unwrap();

    assert_eq!(rendered.derived_edges.len(), 1);
    let edge = rendered.graph.edge(rendered.derived_edges[0]).unwrap();
    assert_eq!(edge.source, "COLLABORATION");
    assert_eq!(edge.target, "APPLICATION");
    assert_eq!(edge.edge_type, EdgeType::Backbone);
    assert_eq!(edge.color.as_deref(), Some("black"));
    assert!(rendered.graph.edges().all(|e| e.edge_type != EdgeType::Reject));
}

#[test]
fn test_render_denied_graph_under_both_policies() {
    let mut config = GraphConfig::from_toml_str(CONFIG_TOML).unwrap();
    let rendered = render_config_graph(&config, "denied").unwrap();

    let edge = rendered.graph.edge(rendered.derived_edges[0]).unwrap();
    assert_eq!(rendered.derived_edges.len(), 1);
    assert_eq!(edge.edge_type, EdgeType::Reject);
    assert_eq!(edge.label.as_deref(), Some(REJECT_BY_ORG));
    assert_eq!(edge.color.as_deref(), Some("red"));

    // the app admin approved, so without the veto the org is still the reason
    config.inference.policy = InferencePolicy::ApprovalOnly;
    let rendered = render_config_graph(&config, "denied").unwrap();
    let edge = rendered.graph.edge(rendered.derived_edges[0]).unwrap();
    assert_eq!(edge.label.as_deref(), Some(REJECT_BY_ORG));
}

#[test]
fn test_render_reports_missing_colors_and_types() {
    let config = GraphConfig::from_json_str(
        r#"{
            "node_types": {"ORGANISATION": {"name": "entity", "level": 1}},
            "node_colors": {"entity": "gray"},
            "edge_colors": {"BACKBONE": "black"},
            "tiny": {
                "backbone": {"type": "BACKBONE", "edges": [["ORGANISATION", "SOMETHING"]]}
            }
        }"#,
    )
    .unwrap();

    let rendered = render_config_graph(&config, "tiny").unwrap();

    assert_eq!(rendered.warnings.len(), 2);
    let something = rendered.graph.node("SOMETHING").unwrap();
    assert_eq!(something.node_type, None);
    assert_eq!(something.color.as_deref(), Some("lightblue"));
    assert!(rendered.graph.node("ORGANISATION").unwrap().is_type(&NodeType::Organisation));
}

#[test]
fn test_render_unknown_section() {
    let config = GraphConfig::from_toml_str(CONFIG_TOML).unwrap();
    assert!(matches!(
        render_config_graph(&config, "missing"),
        Err(GraphError::UnknownGraph { .. })
    ));
}
