//! Graph construction from an organisation export.

use crate::document::OrgExport;
use crate::errors::OrgResult;
use crate::users::UserDirectory;
use iamgraph::pipeline::{annotate, AnnotatedGraph};
use iamgraph::{EdgeAttrs, EdgeType, GraphConfig, NodeAttrs, NodeType, OrgGraph};
use log::{debug, info};

/// Color group of application nodes.
pub const SERVICE_COLOR_GROUP: &str = "service";
/// Color group of collaboration group nodes.
pub const GROUP_COLOR_GROUP: &str = "group";
/// Color group of users administering a collaboration.
pub const ADMIN_COLOR_GROUP: &str = "admin";
/// Color group of every other user.
pub const USER_COLOR_GROUP: &str = "user";

const MEMBER_OF: &str = "member_of";
const INVITE: &str = "invite";
const CREATE: &str = "create";

/// Populates an [`OrgGraph`] from an [`OrgExport`].
///
/// Node types are known from the export, so the result only needs levels
/// and colors; see [`build_annotated`].
#[derive(Debug)]
pub struct OrgGraphBuilder<'a> {
    export: &'a OrgExport,
    users: UserDirectory,
    graph: OrgGraph,
}

impl<'a> OrgGraphBuilder<'a> {
    /// Aggregate the export's users and start an empty graph.
    pub fn new(export: &'a OrgExport) -> Self {
        Self {
            export,
            users: UserDirectory::from_export(export),
            graph: OrgGraph::new(),
        }
    }

    /// Users aggregated from the export.
    pub fn users(&self) -> &UserDirectory {
        &self.users
    }

    /// Run every construction pass and return the graph.
    pub fn build(mut self) -> OrgGraph {
        info!("Building graph for organisation {}", self.export.name);
        self.add_organisation();
        self.add_units();
        self.add_collaborations();
        self.add_users();
        info!(
            "Organisation graph built: {} nodes, {} edges",
            self.graph.node_count(),
            self.graph.edge_count()
        );
        self.graph
    }

    fn add_organisation(&mut self) {
        self.graph.add_node(
            self.export.name.as_str(),
            NodeAttrs::new()
                .label(self.export.short_name.as_str())
                .node_type(NodeType::Organisation),
        );
    }

    fn add_units(&mut self) {
        let org = self.export.name.as_str();
        for unit in &self.export.units {
            self.graph
                .add_node(unit.as_str(), NodeAttrs::new().node_type(NodeType::Unit));
            self.graph
                .add_edge(org, unit.as_str(), EdgeAttrs::new(EdgeType::Backbone));
        }
    }

    fn add_collaborations(&mut self) {
        let org = self.export.name.as_str();
        for collaboration in &self.export.collaborations {
            let coll = collaboration.name.as_str();
            debug!("Adding collaboration {coll}");
            self.graph.add_node(
                coll,
                NodeAttrs::new()
                    .label(collaboration.short_name.as_str())
                    .node_type(NodeType::Collaboration),
            );

            if collaboration.units.is_empty() {
                self.graph
                    .add_edge(org, coll, EdgeAttrs::new(EdgeType::Backbone));
            }
            for unit in &collaboration.units {
                self.graph
                    .add_edge(unit.as_str(), coll, EdgeAttrs::new(EdgeType::Backbone));
            }

            for service in &collaboration.services {
                self.graph.add_node(
                    service.name.as_str(),
                    NodeAttrs::new()
                        .color_group(SERVICE_COLOR_GROUP)
                        .node_type(NodeType::Application),
                );
                self.graph
                    .add_edge(coll, service.name.as_str(), EdgeAttrs::new(EdgeType::Backbone));
            }

            for group in &collaboration.groups {
                let group_key = collaboration.group_key(group);
                self.graph.add_node(
                    group_key.as_str(),
                    NodeAttrs::new()
                        .label(group.name.as_str())
                        .color_group(GROUP_COLOR_GROUP)
                        .node_type(NodeType::CoGroup),
                );
                self.graph
                    .add_edge(coll, group_key, EdgeAttrs::new(EdgeType::Backbone));
            }

            for uid in collaboration.member_uids() {
                self.graph.add_edge(
                    uid,
                    coll,
                    EdgeAttrs::new(EdgeType::Members).label(MEMBER_OF),
                );
            }
        }
    }

    fn add_users(&mut self) {
        for (uid, record) in self.users.iter() {
            let (node_type, color_group) = if record.is_admin() {
                (NodeType::CollAdmin, ADMIN_COLOR_GROUP)
            } else {
                (NodeType::CoMember, USER_COLOR_GROUP)
            };
            self.graph.add_node(
                uid,
                NodeAttrs::new()
                    .label(record.label.as_deref().unwrap_or(uid))
                    .color_group(color_group)
                    .node_type(node_type),
            );
        }

        for (uid, record) in self.users.iter() {
            if let Some(inviter) = record.created_by.as_deref() {
                if self.graph.contains_node(inviter) {
                    self.graph
                        .add_edge(inviter, uid, EdgeAttrs::new(EdgeType::Actions).label(INVITE));
                }
            }
            for coll in &record.admin_of {
                self.graph
                    .add_edge(uid, coll.as_str(), EdgeAttrs::new(EdgeType::Backbone));
            }
            for coll in &record.create {
                self.graph.add_edge(
                    uid,
                    coll.as_str(),
                    EdgeAttrs::new(EdgeType::Actions).label(CREATE),
                );
            }
        }
    }
}

/// Build the graph of an export and resolve its levels, node colors and
/// edge colors.
///
/// # Errors
///
/// Returns [`crate::OrgError::Graph`] if an edge type has no configured color.
pub fn build_annotated(export: &OrgExport, config: &GraphConfig) -> OrgResult<AnnotatedGraph> {
    let mut graph = OrgGraphBuilder::new(export).build();
    let warnings = annotate(&mut graph, config)?;
    Ok(AnnotatedGraph {
        graph,
        warnings,
        derived_edges: Vec::new(),
    })
}
