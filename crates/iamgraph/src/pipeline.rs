//! End-to-end annotation pipelines.
//!
//! Stages run in dependency order: construction, type resolution, level
//! resolution, node colors, relationship inference, then edge colors so that
//! derived edges are colored too.

use crate::config::GraphConfig;
use crate::error::Result;
use crate::graph::{EdgeId, OrgGraph};
use crate::inference::infer_collaboration_application_edges;
use crate::resolve::{
    resolve_edge_colors, resolve_levels, resolve_node_colors, resolve_node_types, ResolveWarning,
};
use log::info;

/// A fully annotated graph together with the gaps found on the way.
#[derive(Debug, Clone)]
pub struct AnnotatedGraph {
    /// The annotated graph
    pub graph: OrgGraph,
    /// Every non-fatal annotation gap, in the order it was found
    pub warnings: Vec<ResolveWarning>,
    /// Edges added by relationship inference
    pub derived_edges: Vec<EdgeId>,
}

/// Resolve levels and node colors, then edge colors.
///
/// For graphs whose node types are already known, such as the ones built
/// from an organisation export.
///
/// # Errors
///
/// Returns [`crate::GraphError::MissingEdgeColor`] if an edge type has no
/// color.
pub fn annotate(graph: &mut OrgGraph, config: &GraphConfig) -> Result<Vec<ResolveWarning>> {
    let mut warnings = resolve_levels(graph, config);
    warnings.extend(resolve_node_colors(graph, config));
    resolve_edge_colors(graph, config)?;
    Ok(warnings)
}

/// Build the named configuration section and run every stage on it.
///
/// The inference policy comes from the configuration's `[inference]` table.
///
/// # Errors
///
/// Returns [`crate::GraphError::UnknownGraph`] for an unknown section and
/// [`crate::GraphError::MissingEdgeColor`] if an edge type has no color.
pub fn render_config_graph(config: &GraphConfig, section: &str) -> Result<AnnotatedGraph> {
    info!("Building graph '{section}' from configuration");
    let mut graph = config.build_graph(section)?;

    info!("Resolving node types, levels and colors");
    let mut warnings = resolve_node_types(&mut graph, config);
    warnings.extend(resolve_levels(&mut graph, config));
    warnings.extend(resolve_node_colors(&mut graph, config));

    info!("Inferring collaboration/application relations");
    let derived_edges = infer_collaboration_application_edges(&mut graph, config.inference.policy)?;

    info!("Resolving edge colors");
    resolve_edge_colors(&mut graph, config)?;

    info!(
        "Graph '{section}' ready: {} nodes, {} edges, {} warnings",
        graph.node_count(),
        graph.edge_count(),
        warnings.len()
    );

    Ok(AnnotatedGraph {
        graph,
        warnings,
        derived_edges,
    })
}
