//! Relationship inference between collaborations and applications.
//!
//! A collaboration may use an application when three things hold:
//!
//! 1. the collaboration belongs to the organisation of an org admin, i.e. a
//!    simple path `COLLABORATION – [UNIT –] ORGANISATION – ORG_ADMIN` exists
//!    (edge direction ignored);
//! 2. an application admin who administers the application (`APPLICATION →
//!    APP_ADMIN` edge) has approved the collaboration (`ACTIONS` edge labelled
//!    `approves` from the app admin to the collaboration);
//! 3. the org admin has approved the application (`ACTIONS` edge labelled
//!    `approves` from the org admin to the application).
//!
//! Every `(collaboration, org admin, application, app admin)` tuple with
//! organisational linkage yields one derived edge: `BACKBONE` when 2 and 3
//! hold, `REJECT` labelled `reject by org` when only 2 holds, and `REJECT`
//! labelled `reject by app` otherwise. Tuples without linkage yield nothing.
//!
//! Under [`InferencePolicy::VetoFirst`] an `ACTIONS` edge labelled `denies`
//! from any org admin to the application rejects every collaboration's pair
//! with it once, before and instead of any tuple check. Which org admins
//! approve does not matter, nor does the order they were added in.
//!
//! Derived edges are appended, never merged: running inference twice
//! duplicates them.

use crate::error::Result;
use crate::graph::{EdgeAttrs, EdgeId, EdgeType, NodeType, OrgGraph};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Label of a derived rejection caused by the organisation.
pub const REJECT_BY_ORG: &str = "reject by org";

/// Label of a derived rejection caused by the application side.
pub const REJECT_BY_APP: &str = "reject by app";

const APPROVES: &str = "approves";
const DENIES: &str = "denies";

// Sorted node type sequences of the paths that count as organisational linkage
const LINKAGE_SHAPES: [&[&str]; 2] = [
    &["COLLABORATION", "ORGANISATION", "ORG_ADMIN"],
    &["COLLABORATION", "ORGANISATION", "ORG_ADMIN", "UNIT"],
];
const MAX_LINKAGE_NODES: usize = 4;

/// Order in which the inference rules are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InferencePolicy {
    /// An org admin "denies" edge rejects the pair before the topology check
    #[default]
    VetoFirst,
    /// No veto step; "denies" only counts as missing org approval
    ApprovalOnly,
}

struct DerivedEdge<'a> {
    collaboration: &'a str,
    application: &'a str,
    attrs: EdgeAttrs,
}

impl<'a> DerivedEdge<'a> {
    fn approved(collaboration: &'a str, application: &'a str) -> Self {
        Self {
            collaboration,
            application,
            attrs: EdgeAttrs::new(EdgeType::Backbone),
        }
    }

    fn rejected(collaboration: &'a str, application: &'a str, reason: &str) -> Self {
        Self {
            collaboration,
            application,
            attrs: EdgeAttrs::new(EdgeType::Reject).label(reason),
        }
    }
}

/// Derive `BACKBONE`/`REJECT` edges from collaborations to applications.
///
/// Returns the IDs of the appended edges in derivation order. The new edges
/// carry no color; run [`crate::resolve::resolve_edge_colors`] afterwards.
///
/// # Errors
///
/// Propagates graph lookup failures, which indicate an inconsistent graph.
pub fn infer_collaboration_application_edges(
    graph: &mut OrgGraph,
    policy: InferencePolicy,
) -> Result<Vec<EdgeId>> {
    let derived: Vec<(String, String, EdgeAttrs)> = plan(graph, policy)?
        .into_iter()
        .map(|edge| {
            (
                edge.collaboration.to_string(),
                edge.application.to_string(),
                edge.attrs,
            )
        })
        .collect();

    info!("Adding {} derived collaboration/application edges", derived.len());
    Ok(derived
        .into_iter()
        .map(|(collaboration, application, attrs)| {
            graph.add_edge(collaboration, application, attrs)
        })
        .collect())
}

fn plan(graph: &OrgGraph, policy: InferencePolicy) -> Result<Vec<DerivedEdge<'_>>> {
    let collaborations = graph.nodes_of_type(&NodeType::Collaboration);
    let org_admins = graph.nodes_of_type(&NodeType::OrgAdmin);
    let applications = graph.nodes_of_type(&NodeType::Application);
    let app_admins = graph.nodes_of_type(&NodeType::AppAdmin);
    info!(
        "Inferring edges for {} collaborations, {} org admins, {} applications, {} app admins ({policy:?})",
        collaborations.len(),
        org_admins.len(),
        applications.len(),
        app_admins.len()
    );

    // (collaboration, app admin, application)
    let mut approved_by_app = HashSet::new();
    for &collaboration in &collaborations {
        for &app_admin in &app_admins {
            if !has_action(graph, app_admin, collaboration, APPROVES)? {
                continue;
            }
            for &application in &applications {
                if graph.has_edge(application, app_admin) {
                    approved_by_app.insert((collaboration, app_admin, application));
                }
            }
        }
    }

    // (application, org admin)
    let mut approved_by_org = HashSet::new();
    for &application in &applications {
        for &org_admin in &org_admins {
            if has_action(graph, org_admin, application, APPROVES)? {
                approved_by_org.insert((application, org_admin));
            }
        }
    }

    // Applications denied by any org admin, decided before any tuple is seen
    let mut vetoed = HashSet::new();
    if policy == InferencePolicy::VetoFirst {
        for &application in &applications {
            for &org_admin in &org_admins {
                if has_action(graph, org_admin, application, DENIES)? {
                    debug!("{application} vetoed by {org_admin}");
                    vetoed.insert(application);
                    break;
                }
            }
        }
    }

    let mut linkage: HashMap<(&str, &str), bool> = HashMap::new();
    let mut derived = Vec::new();

    for &collaboration in &collaborations {
        for &application in applications.iter().filter(|app| vetoed.contains(*app)) {
            derived.push(DerivedEdge::rejected(
                collaboration,
                application,
                REJECT_BY_ORG,
            ));
        }

        for &org_admin in &org_admins {
            for &application in &applications {
                if vetoed.contains(application) {
                    continue;
                }
                for &app_admin in &app_admins {
                    let linked = match linkage.get(&(collaboration, org_admin)) {
                        Some(&linked) => linked,
                        None => {
                            let linked = has_org_linkage(graph, collaboration, org_admin)?;
                            debug!("{collaboration} linked to {org_admin}: {linked}");
                            linkage.insert((collaboration, org_admin), linked);
                            linked
                        }
                    };
                    if !linked {
                        continue;
                    }

                    let app_approved =
                        approved_by_app.contains(&(collaboration, app_admin, application));
                    let edge = if !app_approved {
                        debug!("Not approved by app: {collaboration}, {app_admin}, {application}");
                        DerivedEdge::rejected(collaboration, application, REJECT_BY_APP)
                    } else if !approved_by_org.contains(&(application, org_admin)) {
                        debug!("Not approved by org: {application}, {org_admin}");
                        DerivedEdge::rejected(collaboration, application, REJECT_BY_ORG)
                    } else {
                        debug!("Approved: {collaboration} -> {application}");
                        DerivedEdge::approved(collaboration, application)
                    };
                    derived.push(edge);
                }
            }
        }
    }

    Ok(derived)
}

/// Whether an `ACTIONS` edge with the given label runs from `source` to `target`.
fn has_action(graph: &OrgGraph, source: &str, target: &str, label: &str) -> Result<bool> {
    for edge_id in graph.edges_between(source, target)? {
        if graph.edge(edge_id)?.is(&EdgeType::Actions, label) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Whether some simple path between the collaboration and the org admin has
/// one of the linkage shapes.
fn has_org_linkage(graph: &OrgGraph, collaboration: &str, org_admin: &str) -> Result<bool> {
    let paths = graph
        .simple_paths(collaboration, org_admin)?
        .max_nodes(MAX_LINKAGE_NODES);

    for path in paths {
        let mut node_types = path
            .iter()
            .map(|key| {
                graph
                    .node(key)
                    .map(|node| node.node_type.as_ref().map_or("", NodeType::as_str))
            })
            .collect::<Result<Vec<_>>>()?;
        node_types.sort_unstable();

        if LINKAGE_SHAPES.iter().any(|shape| *shape == node_types.as_slice()) {
            return Ok(true);
        }
    }

    Ok(false)
}
