//! Unit tests for the multi-graph container.
//!
//! Tests cover:
//! - merge semantics of add_node
//! - independent parallel edges
//! - simple path enumeration over the undirected view
//! - lookup errors for unknown keys

use iamgraph::{
    Direction, EdgeAttrs, EdgeType, GraphError, NodeAttrs, NodeType, OrgGraph,
};

#[test]
fn test_merge_keeps_existing_attributes() {
    let mut graph = OrgGraph::new();
    graph.add_node(
        "C1",
        NodeAttrs::new()
            .label("c1")
            .node_type(NodeType::Collaboration)
            .level(3),
    );
    graph.add_node("C1", NodeAttrs::new());

    let node = graph.node("C1").unwrap();
    assert_eq!(node.label(), "c1");
    assert_eq!(node.node_type, Some(NodeType::Collaboration));
    assert_eq!(node.level, Some(3));
}

#[test]
fn test_merge_never_overwrites_type_level_or_color() {
    let mut graph = OrgGraph::new();
    graph.add_node(
        "u1",
        NodeAttrs::new()
            .node_type(NodeType::CoMember)
            .level(5)
            .color("lightblue"),
    );
    graph.add_node(
        "u1",
        NodeAttrs::new()
            .label("alice")
            .node_type(NodeType::CollAdmin)
            .level(4)
            .color("orange")
            .color_group("admin"),
    );

    let node = graph.node("u1").unwrap();
    assert_eq!(node.label(), "alice");
    assert_eq!(node.color_group.as_deref(), Some("admin"));
    assert_eq!(node.node_type, Some(NodeType::CoMember));
    assert_eq!(node.level, Some(5));
    assert_eq!(node.color.as_deref(), Some("lightblue"));
}

#[test]
fn test_extra_entries_merge() {
    let mut graph = OrgGraph::new();
    graph.add_node("org", NodeAttrs::new());
    graph.node_mut("org").unwrap().extra.insert("subset", 1);

    let mut attrs = NodeAttrs::new();
    attrs.extra.insert("size", 27);
    graph.add_node("org", attrs);

    let node = graph.node("org").unwrap();
    assert_eq!(node.extra.get("subset"), Some(1));
    assert_eq!(node.extra.get("size"), Some(27));
}

#[test]
fn test_edges_of_pair_are_addressable() {
    let mut graph = OrgGraph::new();
    graph.add_edge("p", "c", EdgeAttrs::new(EdgeType::Actions).label("approves"));
    graph.add_edge("p", "c", EdgeAttrs::new(EdgeType::Actions).label("invite"));
    graph.add_edge("c", "p", EdgeAttrs::new(EdgeType::Trust));

    let labels: Vec<_> = graph
        .edges_between("p", "c")
        .unwrap()
        .into_iter()
        .map(|id| graph.edge(id).unwrap().label.clone())
        .collect();

    assert_eq!(
        labels,
        vec![Some("approves".to_string()), Some("invite".to_string())]
    );
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.degree("p").unwrap(), 3);
    assert!(graph.has_edge("c", "p"));
}

#[test]
fn test_unknown_keys_are_errors() {
    let graph = OrgGraph::new();

    assert!(matches!(
        graph.node("ghost"),
        Err(GraphError::NodeNotFound { .. })
    ));
    assert!(matches!(
        graph.edge(7),
        Err(GraphError::EdgeNotFound { edge_id: 7 })
    ));
    assert!(graph.degree("ghost").is_err());
    assert!(graph.neighbors("ghost", Direction::Both).is_err());
}

#[test]
fn test_simple_paths_via_units_and_trust() {
    let mut graph = OrgGraph::new();
    graph.add_edge("ORG_ADMIN", "ORG", EdgeAttrs::new(EdgeType::Backbone));
    graph.add_edge("ORG", "UNIT_A", EdgeAttrs::new(EdgeType::Backbone));
    graph.add_edge("ORG", "UNIT_B", EdgeAttrs::new(EdgeType::Backbone));
    graph.add_edge("UNIT_A", "COLL", EdgeAttrs::new(EdgeType::Backbone));
    graph.add_edge("COLL", "UNIT_B", EdgeAttrs::new(EdgeType::Trust));

    let paths: Vec<_> = graph.simple_paths("COLL", "ORG_ADMIN").unwrap().collect();

    assert_eq!(paths.len(), 2);
    assert!(paths.contains(&vec!["COLL", "UNIT_A", "ORG", "ORG_ADMIN"]));
    assert!(paths.contains(&vec!["COLL", "UNIT_B", "ORG", "ORG_ADMIN"]));
    assert!(paths.iter().all(|path| {
        let mut seen = path.clone();
        seen.sort_unstable();
        seen.dedup();
        seen.len() == path.len()
    }));
}

#[test]
fn test_simple_paths_restart() {
    let mut graph = OrgGraph::new();
    graph.add_edge("a", "b", EdgeAttrs::new(EdgeType::Backbone));
    graph.add_edge("b", "c", EdgeAttrs::new(EdgeType::Backbone));
    graph.add_edge("a", "c", EdgeAttrs::new(EdgeType::Backbone));

    let first: Vec<_> = graph.simple_paths("a", "c").unwrap().collect();
    let second: Vec<_> = graph.simple_paths("a", "c").unwrap().collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn test_nodes_of_type_in_insertion_order() {
    let mut graph = OrgGraph::new();
    graph.add_node("C2", NodeAttrs::new().node_type(NodeType::Collaboration));
    graph.add_node("A", NodeAttrs::new().node_type(NodeType::Unit));
    graph.add_node("C1", NodeAttrs::new().node_type(NodeType::Collaboration));

    assert_eq!(
        graph.nodes_of_type(&NodeType::Collaboration),
        vec!["C2", "C1"]
    );
}

#[test]
fn test_custom_types_round_trip_as_tags() {
    assert_eq!(NodeType::from("ORG_ADMIN"), NodeType::OrgAdmin);
    assert_eq!(
        NodeType::from("RESEARCHER"),
        NodeType::Custom("RESEARCHER".to_string())
    );
    assert_eq!(EdgeType::from("REJECT"), EdgeType::Reject);
    assert_eq!(EdgeType::Custom("OWNS".to_string()).to_string(), "OWNS");
}
