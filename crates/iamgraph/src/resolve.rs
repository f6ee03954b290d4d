//! Configuration-driven annotation of node types, levels and colors.
//!
//! Every pass only touches nodes (or edges) that are not yet annotated, so
//! running a pass twice leaves the graph unchanged. Gaps in the configuration
//! are not errors: they are logged, returned as [`ResolveWarning`]s, and the
//! affected node keeps a safe default. The one exception is an edge type with
//! no color and no `default` color, which [`resolve_edge_colors`] reports as
//! [`GraphError::MissingEdgeColor`] because a renderer cannot draw it.

use crate::config::{GraphConfig, DEFAULT_COLOR_GROUP};
use crate::error::{GraphError, Result};
use crate::graph::{NodeType, OrgGraph};
use log::{info, warn};
use std::fmt;

/// Non-fatal annotation gap found while resolving a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveWarning {
    /// No configured type tag occurs in the node key
    UnresolvedType {
        /// Node key
        node: String,
    },
    /// Several configured type tags occur in the node key
    AmbiguousType {
        /// Node key
        node: String,
        /// Every matching tag, in configuration order
        candidates: Vec<String>,
        /// The tag that was applied (first candidate)
        chosen: String,
    },
    /// Level could not be looked up
    MissingLevel {
        /// Node key
        node: String,
        /// The node's type, if it has one
        node_type: Option<String>,
    },
    /// The color bucket is absent from `node_colors`
    MissingColorMapping {
        /// Node key
        node: String,
        /// Bucket that had no color
        color_group: String,
    },
}

impl fmt::Display for ResolveWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveWarning::UnresolvedType { node } => {
                write!(f, "Cannot retrieve the type of {node} from the config")
            }
            ResolveWarning::AmbiguousType {
                node,
                candidates,
                chosen,
            } => write!(
                f,
                "{node} can be of types {candidates:?}. Setting type to {chosen}"
            ),
            ResolveWarning::MissingLevel {
                node,
                node_type: Some(node_type),
            } => write!(f, "No level configured for type {node_type} of {node}"),
            ResolveWarning::MissingLevel {
                node,
                node_type: None,
            } => write!(f, "{node} is not labeled with its node_type. Cannot set level"),
            ResolveWarning::MissingColorMapping { node, color_group } => write!(
                f,
                "No color for group '{color_group}' of {node}, using the default color"
            ),
        }
    }
}

fn report(warnings: &mut Vec<ResolveWarning>, warning: ResolveWarning) {
    warn!("{warning}");
    warnings.push(warning);
}

/// Assign a type to every untyped node by matching configured tags against
/// the node key.
///
/// A tag matches when it occurs anywhere in the key. With several matches
/// the first tag in configuration order wins. This heuristic is meant for
/// graphs written as literal edge lists whose node names embed their type
/// (`"ORG_ADMIN_2"`); it cannot tell `ORG_ADMIN` from `ADMIN` by itself.
pub fn resolve_node_types(graph: &mut OrgGraph, config: &GraphConfig) -> Vec<ResolveWarning> {
    let mut warnings = Vec::new();

    for node in graph.nodes_mut().filter(|node| node.node_type.is_none()) {
        let candidates: Vec<&String> = config
            .node_types
            .keys()
            .filter(|tag| node.key.contains(tag.as_str()))
            .collect();

        match candidates.as_slice() {
            [] => report(
                &mut warnings,
                ResolveWarning::UnresolvedType {
                    node: node.key.clone(),
                },
            ),
            [only] => node.node_type = Some(NodeType::from(only.as_str())),
            [first, ..] => {
                node.node_type = Some(NodeType::from(first.as_str()));
                report(
                    &mut warnings,
                    ResolveWarning::AmbiguousType {
                        node: node.key.clone(),
                        candidates: candidates.iter().map(|tag| tag.to_string()).collect(),
                        chosen: first.to_string(),
                    },
                );
            }
        }
    }

    warnings
}

/// Set the hierarchy level of every typed, unleveled node from
/// `node_types[type].level`.
///
/// The level is mirrored into `extra["subset"]`, the key layered layouts
/// partition on.
pub fn resolve_levels(graph: &mut OrgGraph, config: &GraphConfig) -> Vec<ResolveWarning> {
    let mut warnings = Vec::new();

    for node in graph.nodes_mut().filter(|node| node.level.is_none()) {
        let level = node
            .node_type
            .as_ref()
            .and_then(|node_type| config.node_type_spec(node_type))
            .and_then(|spec| spec.level);

        match level {
            Some(level) => {
                node.level = Some(level);
                node.extra.insert("subset", level);
            }
            None => report(
                &mut warnings,
                ResolveWarning::MissingLevel {
                    node: node.key.clone(),
                    node_type: node.node_type.as_ref().map(ToString::to_string),
                },
            ),
        }
    }

    warnings
}

/// Color every uncolored node.
///
/// The bucket is the node's `color_group`, else the configured name of its
/// type, else `"default"`. Buckets missing from `node_colors` get
/// [`GraphConfig::default_node_color`].
pub fn resolve_node_colors(graph: &mut OrgGraph, config: &GraphConfig) -> Vec<ResolveWarning> {
    let mut warnings = Vec::new();

    for node in graph.nodes_mut().filter(|node| node.color.is_none()) {
        let color_group = node
            .color_group
            .clone()
            .or_else(|| {
                node.node_type
                    .as_ref()
                    .and_then(|node_type| config.node_type_spec(node_type))
                    .and_then(|spec| spec.name.clone())
            })
            .unwrap_or_else(|| DEFAULT_COLOR_GROUP.to_string());

        let color = match config.node_colors.get(&color_group) {
            Some(color) => color.clone(),
            None => {
                if color_group != DEFAULT_COLOR_GROUP {
                    report(
                        &mut warnings,
                        ResolveWarning::MissingColorMapping {
                            node: node.key.clone(),
                            color_group,
                        },
                    );
                }
                config.default_node_color().to_string()
            }
        };
        node.color = Some(color);
    }

    warnings
}

/// Color every uncolored edge from `edge_colors[edge_type]`, falling back to
/// the `default` entry.
///
/// Either every uncolored edge is colored or none is.
///
/// # Errors
///
/// Returns [`GraphError::MissingEdgeColor`] for the first edge whose type has
/// no color and no default.
pub fn resolve_edge_colors(graph: &mut OrgGraph, config: &GraphConfig) -> Result<()> {
    let mut assignments = Vec::new();
    for edge in graph.edges().filter(|edge| edge.color.is_none()) {
        let color = config
            .edge_color(&edge.edge_type)
            .ok_or_else(|| GraphError::MissingEdgeColor {
                edge_type: edge.edge_type.to_string(),
                source_key: edge.source.clone(),
                target_key: edge.target.clone(),
            })?;
        assignments.push((edge.id, color.to_string()));
    }

    info!("Coloring {} edges", assignments.len());
    for (edge_id, color) in assignments {
        graph.edge_mut(edge_id)?.color = Some(color);
    }

    Ok(())
}
