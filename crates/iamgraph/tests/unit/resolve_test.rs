//! Unit tests for configuration-driven annotation.

use iamgraph::resolve::{
    resolve_edge_colors, resolve_levels, resolve_node_colors, resolve_node_types,
};
use iamgraph::{EdgeAttrs, EdgeType, GraphConfig, GraphError, NodeType, OrgGraph, ResolveWarning};

fn config() -> GraphConfig {
    GraphConfig::from_json_str(
        r#"{
            "node_types": {
                "ORGANISATION": {"name": "entity", "level": 1},
                "COLLABORATION": {"name": "entity", "level": 3},
                "COLL_ADMIN": {"name": "admin", "level": 4}
            },
            "node_colors": {"entity": "gray", "admin": "orange", "no_type": "white"},
            "edge_colors": {"BACKBONE": "black", "default": "pink"}
        }"#,
    )
    .unwrap()
}

fn literal_graph() -> OrgGraph {
    let mut graph = OrgGraph::new();
    graph.add_edge("ORGANISATION", "COLLABORATION", EdgeAttrs::new(EdgeType::Backbone));
    graph.add_edge("COLL_ADMIN", "COLLABORATION", EdgeAttrs::new(EdgeType::Members));
    graph.add_edge("RESEARCHER", "COLLABORATION", EdgeAttrs::new(EdgeType::Members));
    graph
}

fn resolve_all(graph: &mut OrgGraph, config: &GraphConfig) -> Vec<ResolveWarning> {
    let mut warnings = resolve_node_types(graph, config);
    warnings.extend(resolve_levels(graph, config));
    warnings.extend(resolve_node_colors(graph, config));
    resolve_edge_colors(graph, config).unwrap();
    warnings
}

#[test]
fn test_literal_graph_is_annotated() {
    let config = config();
    let mut graph = literal_graph();

    let warnings = resolve_all(&mut graph, &config);

    let org = graph.node("ORGANISATION").unwrap();
    assert_eq!(org.node_type, Some(NodeType::Organisation));
    assert_eq!(org.level, Some(1));
    assert_eq!(org.color.as_deref(), Some("gray"));

    let admin = graph.node("COLL_ADMIN").unwrap();
    assert_eq!(admin.color.as_deref(), Some("orange"));

    // RESEARCHER matches no tag: untyped, unleveled, default-colored
    let researcher = graph.node("RESEARCHER").unwrap();
    assert_eq!(researcher.node_type, None);
    assert_eq!(researcher.level, None);
    assert_eq!(researcher.color.as_deref(), Some("white"));
    assert_eq!(
        warnings,
        vec![
            ResolveWarning::UnresolvedType {
                node: "RESEARCHER".to_string()
            },
            ResolveWarning::MissingLevel {
                node: "RESEARCHER".to_string(),
                node_type: None
            },
        ]
    );
}

#[test]
fn test_resolution_is_idempotent() {
    let config = config();
    let mut graph = literal_graph();
    resolve_all(&mut graph, &config);

    let nodes_before: Vec<_> = graph.nodes().cloned().collect();
    let edges_before: Vec<_> = graph.edges().cloned().collect();

    assert!(resolve_node_types(&mut graph, &config)
        .iter()
        .all(|w| matches!(w, ResolveWarning::UnresolvedType { .. })));
    resolve_node_colors(&mut graph, &config);
    resolve_edge_colors(&mut graph, &config).unwrap();

    assert_eq!(graph.nodes().cloned().collect::<Vec<_>>(), nodes_before);
    assert_eq!(graph.edges().cloned().collect::<Vec<_>>(), edges_before);
}

#[test]
fn test_every_edge_gets_table_or_default_color() {
    let config = config();
    let mut graph = literal_graph();
    graph.add_edge("ORGANISATION", "X", EdgeAttrs::new(EdgeType::Custom("OWNS".into())));

    resolve_edge_colors(&mut graph, &config).unwrap();

    for edge in graph.edges() {
        let expected = config
            .edge_colors
            .get(edge.edge_type.as_str())
            .or_else(|| config.edge_colors.get("default"))
            .map(String::as_str);
        assert_eq!(edge.color.as_deref(), expected);
        assert!(edge.color.is_some());
    }
}

#[test]
fn test_edge_color_without_default_fails() {
    let config = GraphConfig::from_json_str(
        r#"{"node_types": {}, "node_colors": {}, "edge_colors": {"BACKBONE": "black"}}"#,
    )
    .unwrap();
    let mut graph = literal_graph();

    let err = resolve_edge_colors(&mut graph, &config).unwrap_err();
    match err {
        GraphError::MissingEdgeColor {
            edge_type,
            source_key,
            target_key,
        } => {
            assert_eq!(edge_type, "MEMBERS");
            assert_eq!(source_key, "COLL_ADMIN");
            assert_eq!(target_key, "COLLABORATION");
        }
        other => panic!("unexpected error: {other}"),
    }
}
