//! Declarative graph configuration.
//!
//! A [`GraphConfig`] is built once per run and passed by reference to every
//! resolver. It carries:
//! - `node_types`: type tag → display name (the color bucket) and level
//! - `node_colors`: color bucket → color, including a `default` entry
//! - `edge_colors`: edge type → color
//! - `inference`: optional settings for relationship inference
//! - any number of named graph sections, each a table of edge sets
//!
//! ```toml
//! [node_types.ORGANISATION]
//! name = "entity"
//! level = 1
//!
//! [node_colors]
//! entity = "gray"
//! default = "lightblue"
//!
//! [edge_colors]
//! BACKBONE = "black"
//!
//! [plain_graph.backbone]
//! type = "BACKBONE"
//! edges = [["ORGANISATION", "UNIT"]]
//! ```
//!
//! Every map keeps document order. The node type heuristic in
//! [`crate::resolve`] depends on the order of `node_types`.

use crate::error::{GraphError, Result};
use crate::graph::{EdgeAttrs, EdgeType, NodeType, OrgGraph};
use crate::inference::InferencePolicy;
use indexmap::IndexMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Color used when the configuration names neither `default` nor `no_type`.
pub const FALLBACK_NODE_COLOR: &str = "lightblue";

/// Bucket used for nodes with no explicit or type-derived color group.
pub const DEFAULT_COLOR_GROUP: &str = "default";

/// Edge-set key holding free text rather than edges.
const EXPLANATION_KEY: &str = "explanation";

/// Configuration entry for one node type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeTypeSpec {
    /// Display name, doubling as the color bucket
    #[serde(default)]
    pub name: Option<String>,
    /// Hierarchy level
    #[serde(default)]
    pub level: Option<i64>,
}

/// Settings for relationship inference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceSettings {
    /// Rule ordering used when deriving collaboration/application edges
    #[serde(default)]
    pub policy: InferencePolicy,
}

/// A typed list of edges within a graph section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSet {
    /// Type given to every edge of the set
    #[serde(rename = "type")]
    pub edge_type: EdgeType,
    /// `[from, to]` or `[from, to, label]` tuples
    pub edges: Vec<Vec<String>>,
}

/// One entry of a graph section: an edge set, or explanatory text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionEntry {
    /// Edges to add
    Edges(EdgeSet),
    /// Free text (the `explanation` key)
    Note(String),
}

/// The whole configuration document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Type tag → name and level
    pub node_types: IndexMap<String, NodeTypeSpec>,
    /// Color bucket → color
    pub node_colors: IndexMap<String, String>,
    /// Edge type → color
    pub edge_colors: IndexMap<String, String>,
    /// Inference settings (optional section)
    #[serde(default)]
    pub inference: InferenceSettings,
    /// Named graph sections
    #[serde(flatten)]
    pub graphs: IndexMap<String, IndexMap<String, SectionEntry>>,
}

impl GraphConfig {
    /// Parse a TOML configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Serialization`] if the document is invalid.
    #[cfg(feature = "toml-config")]
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)
            .map_err(|e| GraphError::serialization("Failed to parse TOML configuration", Some(e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Serialization`] if the document is invalid.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(source)
            .map_err(|e| GraphError::serialization("Failed to parse JSON configuration", Some(e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the parsed document for values that deserialize fine but
    /// cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Config`] for an empty node type tag, which would
    /// match every node key.
    pub fn validate(&self) -> Result<()> {
        if self.node_types.keys().any(|tag| tag.trim().is_empty()) {
            return Err(GraphError::Config {
                message: "node_types contains an empty type tag".to_string(),
            });
        }
        Ok(())
    }

    /// Names of the graph sections, in document order.
    pub fn graph_names(&self) -> impl Iterator<Item = &str> {
        self.graphs.keys().map(String::as_str)
    }

    /// Configuration entry for a node type, if any.
    pub fn node_type_spec(&self, node_type: &NodeType) -> Option<&NodeTypeSpec> {
        self.node_types.get(node_type.as_str())
    }

    /// Color used for buckets absent from `node_colors`.
    pub fn default_node_color(&self) -> &str {
        self.node_colors
            .get(DEFAULT_COLOR_GROUP)
            .or_else(|| self.node_colors.get("no_type"))
            .map_or(FALLBACK_NODE_COLOR, String::as_str)
    }

    /// Color for an edge type, falling back to the `default` entry.
    pub fn edge_color(&self, edge_type: &EdgeType) -> Option<&str> {
        self.edge_colors
            .get(edge_type.as_str())
            .or_else(|| self.edge_colors.get(DEFAULT_COLOR_GROUP))
            .map(String::as_str)
    }

    /// Build a fresh graph from the named section.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownGraph`] if no such section exists.
    pub fn build_graph(&self, section: &str) -> Result<OrgGraph> {
        let mut graph = OrgGraph::new();
        self.add_section_edges(&mut graph, section)?;
        Ok(graph)
    }

    /// Add every edge of the named section to `graph`.
    ///
    /// Tuples that are not `[from, to]` or `[from, to, label]` are skipped
    /// with a warning. Returns the number of edges added.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownGraph`] if no such section exists.
    pub fn add_section_edges(&self, graph: &mut OrgGraph, section: &str) -> Result<usize> {
        let entries = self
            .graphs
            .get(section)
            .ok_or_else(|| GraphError::UnknownGraph {
                name: section.to_string(),
            })?;

        let mut added = 0;
        for (set_name, entry) in entries {
            let edge_set = match entry {
                SectionEntry::Edges(edge_set) => edge_set,
                SectionEntry::Note(_) if set_name == EXPLANATION_KEY => continue,
                SectionEntry::Note(text) => {
                    warn!("Ignoring text entry '{set_name}' in graph '{section}': {text}");
                    continue;
                }
            };

            debug!(
                "Adding edge set '{set_name}' ({} edges, type {})",
                edge_set.edges.len(),
                edge_set.edge_type
            );
            for tuple in &edge_set.edges {
                let attrs = EdgeAttrs::new(edge_set.edge_type.clone());
                match tuple.as_slice() {
                    [from, to] => graph.add_edge(from.as_str(), to.as_str(), attrs),
                    [from, to, label] => {
                        graph.add_edge(from.as_str(), to.as_str(), attrs.label(label.as_str()))
                    }
                    _ => {
                        warn!(
                            "Skipping malformed edge {tuple:?} in '{set_name}'. Expect [u, v, label]."
                        );
                        continue;
                    }
                };
                added += 1;
            }
        }

        Ok(added)
    }
}
