//! Edge attachment points.
//!
//! Each node has a single anchor, chosen from its role in the full edge set:
//! pure sources attach on the right edge, everything else on the left edge.
//! Intermediate nodes share one left-side anchor for both incoming and
//! outgoing edges. The anchor's y is always the node's vertical center.

use crate::config::NodeDimensions;
use crate::graph::{GraphModel, Node, NodeRole};

/// Horizontal side of the node box an edge attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorSide {
    Left,
    Right,
}

impl From<NodeRole> for AnchorSide {
    fn from(role: NodeRole) -> Self {
        match role {
            NodeRole::Source => AnchorSide::Right,
            NodeRole::Sink | NodeRole::Intermediate | NodeRole::Isolated => AnchorSide::Left,
        }
    }
}

/// Resolved attachment point of a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub x: f32,
    pub y: f32,
    pub side: AnchorSide,
}

impl Anchor {
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

/// Anchor of `node` for a given role.
pub fn anchor_for_role(node: &Node, role: NodeRole, dims: &NodeDimensions) -> Anchor {
    let side = AnchorSide::from(role);
    let half_width = dims.width / 2.0;
    let x = match side {
        AnchorSide::Left => node.x - half_width,
        AnchorSide::Right => node.x + half_width,
    };
    Anchor { x, y: node.y, side }
}

/// Anchor of the node with `node_id`, or `None` if the graph has no such node.
pub fn resolve_anchor(graph: &GraphModel, node_id: &str, dims: &NodeDimensions) -> Option<Anchor> {
    let node = graph.node_by_id(node_id)?;
    let role = graph.role(node_id)?;
    Some(anchor_for_role(node, role, dims))
}
