//! Test harness for the pipeline graph.
//!
//! Builds the five-node source/raw/stage/transform/target pipeline, a
//! controller with node and edge models bound, and callback tracking.

#![allow(dead_code)]

use super::CallbackTracker;
use slint::{Color, Model, ModelRc, SharedString, VecModel};
use slint_dag_view::{DagViewController, Edge, GraphModel, Node, ViewConfig};
use std::rc::Rc;

/// Row type a Slint node repeater would consume.
#[derive(Clone)]
pub struct NodeRow {
    pub id: SharedString,
    pub label: SharedString,
    pub x: f32,
    pub y: f32,
    pub selected: bool,
    pub expanded: bool,
    pub dropdown_open: bool,
    pub columns: ModelRc<SharedString>,
}

/// Row type a Slint edge repeater would consume.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeRow {
    pub index: i32,
    pub path: SharedString,
    pub color: Color,
    pub line_width: f32,
    pub highlighted: bool,
}

pub fn pipeline_nodes() -> Vec<Node> {
    vec![
        Node::new("source", "Source", 100.0, 150.0),
        Node::new("raw", "Raw", 300.0, 80.0),
        Node::new("stage", "Stage", 300.0, 220.0),
        Node::new("transform", "Transform", 500.0, 150.0),
        Node::new("target", "Target", 700.0, 150.0),
    ]
}

pub fn pipeline_edges() -> Vec<Edge> {
    vec![
        Edge::new("source", "raw"),
        Edge::new("source", "stage"),
        Edge::new("raw", "transform"),
        Edge::new("stage", "transform"),
        Edge::new("transform", "target"),
    ]
}

pub fn pipeline_graph() -> GraphModel {
    GraphModel::new(pipeline_nodes(), pipeline_edges()).unwrap()
}

/// Test harness for the pipeline view.
pub struct PipelineHarness {
    pub ctrl: DagViewController,
    pub nodes: Rc<VecModel<NodeRow>>,
    pub edges: Rc<VecModel<EdgeRow>>,
    pub tracker: CallbackTracker,
}

impl PipelineHarness {
    pub fn new() -> Self {
        Self::with_graph(pipeline_graph())
    }

    pub fn with_graph(graph: GraphModel) -> Self {
        Self::with_graph_and_config(graph, ViewConfig::default())
    }

    pub fn with_graph_and_config(graph: GraphModel, config: ViewConfig) -> Self {
        let ctrl = DagViewController::new(graph, config);
        let tracker = CallbackTracker::new();

        let nodes = Rc::new(VecModel::<NodeRow>::default());
        ctrl.bind_node_model(nodes.clone(), |n| NodeRow {
            id: n.id.as_str().into(),
            label: n.label.as_str().into(),
            x: n.geometry.body.x,
            y: n.geometry.body.y,
            selected: n.selected,
            expanded: n.expanded,
            dropdown_open: n.dropdown_open(),
            columns: n.columns_model(),
        });

        let edges = Rc::new(VecModel::<EdgeRow>::default());
        ctrl.bind_edge_model(edges.clone(), |e| EdgeRow {
            index: e.index as i32,
            path: e.path_commands.as_str().into(),
            color: e.color,
            line_width: e.line_width,
            highlighted: e.highlighted,
        });

        ctrl.on_scene_changed({
            let tracker = tracker.clone();
            move |scene| {
                *tracker.scene_changed.borrow_mut() += 1;
                tracker
                    .visible_nodes
                    .borrow_mut()
                    .push(scene.nodes.iter().map(|n| n.id.clone()).collect());
                tracker.highlighted_edges.borrow_mut().push(
                    scene
                        .edges
                        .iter()
                        .filter(|e| e.highlighted)
                        .map(|e| e.index)
                        .collect(),
                );
            }
        });

        Self {
            ctrl,
            nodes,
            edges,
            tracker,
        }
    }

    /// Ids of the rows currently in the node model.
    pub fn node_ids(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.id.to_string()).collect()
    }

    /// Edge indices currently in the edge model.
    pub fn edge_indices(&self) -> Vec<i32> {
        self.edges.iter().map(|e| e.index).collect()
    }

    pub fn node_row(&self, id: &str) -> Option<NodeRow> {
        self.nodes.iter().find(|n| n.id.as_str() == id)
    }

    pub fn edge_row(&self, index: i32) -> Option<EdgeRow> {
        self.edges.iter().find(|e| e.index == index)
    }

    /// Columns shown for `id`, as plain strings.
    pub fn columns_of(&self, id: &str) -> Vec<String> {
        self.node_row(id)
            .map(|row| row.columns.iter().map(|c| c.to_string()).collect())
            .unwrap_or_default()
    }

    /// Simulate a click at canvas coordinates.
    pub fn click(&self, x: f32, y: f32) {
        self.ctrl.handle_pointer_press(x, y);
    }
}
