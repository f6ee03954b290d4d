//! Core graph types: nodes, edges, type tags and attribute sets.

use super::property::PropertyMap;
use serde::{Deserialize, Serialize};

/// Index of an edge within its graph (insertion order).
pub type EdgeId = usize;

/// Classification tag of a node.
///
/// Serialized as the plain tag string (`"COLLABORATION"`), which is also the
/// key used in the `node_types` configuration table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeType {
    /// Root organisation
    Organisation,
    /// Organisational unit
    Unit,
    /// Collaboration spanning units
    Collaboration,
    /// Service offered to a collaboration
    Application,
    /// Group inside a collaboration
    CoGroup,
    /// Collaboration administrator
    CollAdmin,
    /// Collaboration member
    CoMember,
    /// Organisation administrator
    OrgAdmin,
    /// Application administrator
    AppAdmin,
    /// Tag defined only in configuration
    Custom(String),
}

impl NodeType {
    /// The configuration tag for this type.
    pub fn as_str(&self) -> &str {
        match self {
            NodeType::Organisation => "ORGANISATION",
            NodeType::Unit => "UNIT",
            NodeType::Collaboration => "COLLABORATION",
            NodeType::Application => "APPLICATION",
            NodeType::CoGroup => "CO_GROUP",
            NodeType::CollAdmin => "COLL_ADMIN",
            NodeType::CoMember => "CO_MEMBER",
            NodeType::OrgAdmin => "ORG_ADMIN",
            NodeType::AppAdmin => "APP_ADMIN",
            NodeType::Custom(tag) => tag,
        }
    }
}

impl From<&str> for NodeType {
    fn from(tag: &str) -> Self {
        match tag {
            "ORGANISATION" => NodeType::Organisation,
            "UNIT" => NodeType::Unit,
            "COLLABORATION" => NodeType::Collaboration,
            "APPLICATION" => NodeType::Application,
            "CO_GROUP" => NodeType::CoGroup,
            "COLL_ADMIN" => NodeType::CollAdmin,
            "CO_MEMBER" => NodeType::CoMember,
            "ORG_ADMIN" => NodeType::OrgAdmin,
            "APP_ADMIN" => NodeType::AppAdmin,
            other => NodeType::Custom(other.to_string()),
        }
    }
}

impl From<String> for NodeType {
    fn from(tag: String) -> Self {
        NodeType::from(tag.as_str())
    }
}

impl From<NodeType> for String {
    fn from(node_type: NodeType) -> Self {
        node_type.as_str().to_string()
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type of a (directed) edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EdgeType {
    /// Structural ownership (org → unit → collaboration → service)
    Backbone,
    /// Membership of a user in a collaboration
    Members,
    /// Event or decision (invite, create, approves, denies)
    Actions,
    /// Trust relation between entities
    Trust,
    /// Derived rejection of a collaboration/application link
    Reject,
    /// Type defined only in configuration
    Custom(String),
}

impl EdgeType {
    /// The configuration tag for this type.
    pub fn as_str(&self) -> &str {
        match self {
            EdgeType::Backbone => "BACKBONE",
            EdgeType::Members => "MEMBERS",
            EdgeType::Actions => "ACTIONS",
            EdgeType::Trust => "TRUST",
            EdgeType::Reject => "REJECT",
            EdgeType::Custom(tag) => tag,
        }
    }
}

impl From<&str> for EdgeType {
    fn from(tag: &str) -> Self {
        match tag {
            "BACKBONE" => EdgeType::Backbone,
            "MEMBERS" => EdgeType::Members,
            "ACTIONS" => EdgeType::Actions,
            "TRUST" => EdgeType::Trust,
            "REJECT" => EdgeType::Reject,
            other => EdgeType::Custom(other.to_string()),
        }
    }
}

impl From<String> for EdgeType {
    fn from(tag: String) -> Self {
        EdgeType::from(tag.as_str())
    }
}

impl From<EdgeType> for String {
    fn from(edge_type: EdgeType) -> Self {
        edge_type.as_str().to_string()
    }
}

impl std::fmt::Display for EdgeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction for neighbor queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Follow outgoing edges (from this node)
    Outgoing,
    /// Follow incoming edges (to this node)
    Incoming,
    /// Follow edges in both directions
    Both,
}

/// A node in the graph, identified by its unique key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique key (not necessarily what is displayed)
    pub key: String,
    /// Display label; [`Node::label`] falls back to the key
    pub label: Option<String>,
    /// Classification tag, never overwritten once set
    pub node_type: Option<NodeType>,
    /// Explicit coloring bucket, overrides the type-derived one
    pub color_group: Option<String>,
    /// Hierarchy rank
    pub level: Option<i64>,
    /// Resolved display color
    pub color: Option<String>,
    /// Renderer-only metadata (position, size, ...)
    pub extra: PropertyMap,
}

impl Node {
    /// Create a bare node carrying only its key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: None,
            node_type: None,
            color_group: None,
            level: None,
            color: None,
            extra: PropertyMap::new(),
        }
    }

    /// Display label, defaulting to the key.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.key)
    }

    /// Whether this node carries the given type tag.
    pub fn is_type(&self, node_type: &NodeType) -> bool {
        self.node_type.as_ref() == Some(node_type)
    }

    /// Merge an attribute set into this node.
    ///
    /// Absent attributes never clear existing ones. `label` and `color_group`
    /// take the new value; `node_type`, `level` and `color` are written only
    /// when still unset.
    pub fn merge(&mut self, attrs: NodeAttrs) {
        if attrs.label.is_some() {
            self.label = attrs.label;
        }
        if attrs.color_group.is_some() {
            self.color_group = attrs.color_group;
        }
        if self.node_type.is_none() {
            self.node_type = attrs.node_type;
        }
        if self.level.is_none() {
            self.level = attrs.level;
        }
        if self.color.is_none() {
            self.color = attrs.color;
        }
        self.extra.merge(attrs.extra);
    }
}

/// Attribute set applied to a node by [`OrgGraph::add_node`](super::OrgGraph::add_node).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeAttrs {
    /// Display label
    pub label: Option<String>,
    /// Classification tag
    pub node_type: Option<NodeType>,
    /// Coloring bucket override
    pub color_group: Option<String>,
    /// Hierarchy rank
    pub level: Option<i64>,
    /// Display color
    pub color: Option<String>,
    /// Renderer-only metadata
    pub extra: PropertyMap,
}

impl NodeAttrs {
    /// Empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the node type.
    pub fn node_type(mut self, node_type: NodeType) -> Self {
        self.node_type = Some(node_type);
        self
    }

    /// Set the coloring bucket.
    pub fn color_group(mut self, color_group: impl Into<String>) -> Self {
        self.color_group = Some(color_group.into());
        self
    }

    /// Set the hierarchy level.
    pub fn level(mut self, level: i64) -> Self {
        self.level = Some(level);
        self
    }

    /// Set the display color.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// A directed edge. Several edges may connect the same ordered pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Index assigned by the graph
    pub id: EdgeId,
    /// Source node key
    pub source: String,
    /// Target node key
    pub target: String,
    /// Exactly one type per edge
    pub edge_type: EdgeType,
    /// Free text such as "approves", "invite", "member_of"
    pub label: Option<String>,
    /// Resolved display color
    pub color: Option<String>,
    /// Renderer-only metadata
    pub extra: PropertyMap,
}

impl Edge {
    /// Create a new edge (ID is assigned by the graph).
    pub fn new(
        id: EdgeId,
        source: impl Into<String>,
        target: impl Into<String>,
        attrs: EdgeAttrs,
    ) -> Self {
        Self {
            id,
            source: source.into(),
            target: target.into(),
            edge_type: attrs.edge_type,
            label: attrs.label,
            color: attrs.color,
            extra: attrs.extra,
        }
    }

    /// Whether the edge has this type and exactly this label.
    pub fn is(&self, edge_type: &EdgeType, label: &str) -> bool {
        self.edge_type == *edge_type && self.label.as_deref() == Some(label)
    }
}

/// Attribute set for a new edge.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeAttrs {
    /// Edge type (required)
    pub edge_type: EdgeType,
    /// Optional label
    pub label: Option<String>,
    /// Optional pre-resolved color
    pub color: Option<String>,
    /// Renderer-only metadata
    pub extra: PropertyMap,
}

impl EdgeAttrs {
    /// Attributes for an unlabelled edge of the given type.
    pub fn new(edge_type: EdgeType) -> Self {
        Self {
            edge_type,
            label: None,
            color: None,
            extra: PropertyMap::new(),
        }
    }

    /// Set the edge label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the edge color.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}
