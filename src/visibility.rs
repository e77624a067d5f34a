//! Collapse-driven visibility.
//!
//! Collapsing a node hides its immediate children only. A node is visible iff
//! no collapsed node has it as a direct child, and an edge is visible iff both
//! of its endpoints are. Collapse is shallow: grandchildren stay visible unless
//! one of their own parents is collapsed too.
//!
//! Nothing is cached. Every query walks the collapsed set against the edge
//! list, which is cheap at the tens-of-nodes scale this view targets.

use crate::graph::{Edge, GraphModel, Node};
use std::collections::BTreeSet;

/// Visibility queries for one graph under one collapsed set.
#[derive(Clone, Copy)]
pub struct Visibility<'a> {
    graph: &'a GraphModel,
    collapsed: &'a BTreeSet<String>,
}

impl<'a> Visibility<'a> {
    pub fn new(graph: &'a GraphModel, collapsed: &'a BTreeSet<String>) -> Self {
        Self { graph, collapsed }
    }

    /// True unless some collapsed node has `node_id` as an immediate child.
    ///
    /// Ids that are not part of the graph are never anyone's child and so
    /// report visible; callers filter unknown ids before asking.
    pub fn is_node_visible(&self, node_id: &str) -> bool {
        !self
            .collapsed
            .iter()
            .any(|collapsed| self.graph.has_child(collapsed, node_id))
    }

    pub fn is_edge_visible(&self, edge: &Edge) -> bool {
        self.is_node_visible(&edge.source) && self.is_node_visible(&edge.target)
    }

    /// Visible nodes in definition order.
    pub fn visible_nodes(&self) -> impl Iterator<Item = &'a Node> + 'a {
        let vis = *self;
        self.graph
            .nodes()
            .iter()
            .filter(move |node| vis.is_node_visible(&node.id))
    }

    /// Visible edges with their index, in definition order.
    pub fn visible_edges(&self) -> impl Iterator<Item = (usize, &'a Edge)> + 'a {
        let vis = *self;
        self.graph
            .edges()
            .iter()
            .enumerate()
            .filter(move |(_, edge)| vis.is_edge_visible(edge))
    }

    /// Ids of the nodes currently hidden, in definition order.
    pub fn hidden_node_ids(&self) -> Vec<&'a str> {
        self.graph
            .nodes()
            .iter()
            .filter(|node| !self.is_node_visible(&node.id))
            .map(|node| node.id.as_str())
            .collect()
    }
}
