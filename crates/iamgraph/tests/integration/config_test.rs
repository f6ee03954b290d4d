//! Building graphs from the literal edge lists of a configuration.

use super::CONFIG_TOML;
use iamgraph::{EdgeType, GraphConfig, InferencePolicy, NodeType};

#[test]
fn test_config_sections() {
    let config = GraphConfig::from_toml_str(CONFIG_TOML).unwrap();

    assert_eq!(
        config.graph_names().collect::<Vec<_>>(),
        vec!["graph", "approved", "denied"]
    );
    assert_eq!(config.inference.policy, InferencePolicy::VetoFirst);
    assert_eq!(config.node_types.len(), 9);
    assert_eq!(
        config.node_type_spec(&NodeType::Organisation).unwrap().level,
        Some(1)
    );
}

#[test]
fn test_edges_from_config() {
    let config = GraphConfig::from_toml_str(CONFIG_TOML).unwrap();
    let graph = config.build_graph("graph").unwrap();

    // the one-element tuple is skipped
    assert_eq!(graph.edge_count(), 8);
    assert_eq!(graph.node_count(), 8);

    for edge in graph.edges() {
        match (edge.source.as_str(), edge.target.as_str()) {
            ("ORGANISATION" | "UNIT" | "COLLABORATION", _) => {
                assert_eq!(edge.edge_type, EdgeType::Backbone);
                assert_eq!(edge.label, None);
            }
            ("ORG_ADMIN", _) => {
                assert_eq!(edge.edge_type, EdgeType::Actions);
                assert_eq!(edge.label.as_deref(), Some("create"));
            }
            ("COLL_ADMIN", "CO_MEMBER") => {
                assert_eq!(edge.edge_type, EdgeType::Actions);
                assert_eq!(edge.label.as_deref(), Some("invite"));
            }
            (_, "COLLABORATION") => assert_eq!(edge.edge_type, EdgeType::Members),
            other => panic!("unexpected edge {other:?}"),
        }
    }
}

#[test]
fn test_json_and_toml_agree() {
    let toml_config = GraphConfig::from_toml_str(CONFIG_TOML).unwrap();
    let json = serde_json::to_string(&toml_config).unwrap();
    let json_config = GraphConfig::from_json_str(&json).unwrap();

    assert_eq!(json_config, toml_config);
}

#[test]
fn test_invalid_document() {
    assert!(GraphConfig::from_toml_str("node_types = 3").is_err());
    assert!(GraphConfig::from_json_str("{}").is_err());
}
