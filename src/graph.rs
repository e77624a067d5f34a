//! Immutable graph description: nodes with fixed design-time positions and
//! directed edges between them.
//!
//! A [`GraphModel`] is validated once at construction and shared read-only by
//! every derived computation afterwards.
//!
//! ```
//! use slint_dag_view::{Edge, GraphModel, Node, NodeRole};
//!
//! let graph = GraphModel::new(
//!     vec![Node::new("a", "A", 100.0, 150.0), Node::new("b", "B", 300.0, 150.0)],
//!     vec![Edge::new("a", "b")],
//! )
//! .unwrap();
//!
//! assert_eq!(graph.role("a"), Some(NodeRole::Source));
//! assert_eq!(graph.immediate_children("a").collect::<Vec<_>>(), vec!["b"]);
//! ```

use crate::error::{DagError, EdgeEnd, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A node with a fixed center position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub x: f32,
    pub y: f32,
}

impl Node {
    pub fn new(id: impl Into<String>, label: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            x,
            y,
        }
    }
}

/// A directed edge. Parallel edges are allowed and kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// True if either endpoint is `node_id`.
    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }
}

/// Role of a node in the full, unfiltered edge set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    /// Source of at least one edge, target of none
    Source,
    /// Target of at least one edge, source of none
    Sink,
    /// Both source and target
    Intermediate,
    /// Not touched by any edge
    Isolated,
}

impl NodeRole {
    fn from_flags(is_source: bool, is_target: bool) -> Self {
        match (is_source, is_target) {
            (true, false) => NodeRole::Source,
            (false, true) => NodeRole::Sink,
            (true, true) => NodeRole::Intermediate,
            (false, false) => NodeRole::Isolated,
        }
    }
}

/// Serialized form of a graph, e.g. `{ "nodes": [...], "edges": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDefinition {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

/// Validated, read-only graph.
#[derive(Debug, Clone)]
pub struct GraphModel {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    index: HashMap<String, usize>,
    roles: Vec<NodeRole>,
}

impl GraphModel {
    /// Build a graph, rejecting duplicate node ids and edges with unknown endpoints.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if index.insert(node.id.clone(), i).is_some() {
                return Err(DagError::DuplicateNode(node.id.clone()));
            }
        }

        let mut is_source = vec![false; nodes.len()];
        let mut is_target = vec![false; nodes.len()];
        for (i, edge) in edges.iter().enumerate() {
            let source = *index.get(&edge.source).ok_or_else(|| DagError::InvalidEdge {
                index: i,
                endpoint: EdgeEnd::Source,
                id: edge.source.clone(),
            })?;
            let target = *index.get(&edge.target).ok_or_else(|| DagError::InvalidEdge {
                index: i,
                endpoint: EdgeEnd::Target,
                id: edge.target.clone(),
            })?;
            is_source[source] = true;
            is_target[target] = true;
        }

        let roles = is_source
            .into_iter()
            .zip(is_target)
            .map(|(s, t)| NodeRole::from_flags(s, t))
            .collect();

        tracing::debug!(nodes = nodes.len(), edges = edges.len(), "graph model built");

        Ok(Self {
            nodes,
            edges,
            index,
            roles,
        })
    }

    pub fn from_definition(definition: GraphDefinition) -> Result<Self> {
        Self::new(definition.nodes, definition.edges)
    }

    /// Parse and validate a JSON graph definition.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let definition: GraphDefinition = serde_json::from_str(json)?;
        Self::from_definition(definition)
    }

    pub fn node_by_id(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All nodes, in definition order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges, in definition order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Targets of the edges leaving `id`. Parallel edges repeat their target.
    pub fn immediate_children<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.edges
            .iter()
            .filter(move |edge| edge.source == id)
            .map(|edge| edge.target.as_str())
    }

    /// True if some edge goes directly from `parent` to `child`.
    pub fn has_child(&self, parent: &str, child: &str) -> bool {
        self.edges
            .iter()
            .any(|edge| edge.source == parent && edge.target == child)
    }

    /// Role of `id` in the full edge set, or `None` for unknown ids.
    pub fn role(&self, id: &str) -> Option<NodeRole> {
        self.index.get(id).map(|&i| self.roles[i])
    }
}
