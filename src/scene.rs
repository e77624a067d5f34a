//! Per-frame view of the graph for the presentation layer.
//!
//! A [`DagScene`] is a pure function of the graph, the interaction state and
//! the view configuration: visible nodes with their box geometry and flags,
//! visible edges with routed paths and stroke style, and the background grid.
//! [`SceneBindings`] pushes a scene into Slint `VecModel`s.
//!
//! # Example
//!
//! ```ignore
//! use slint_dag_view::{DagScene, SceneBindings};
//!
//! let edges = Rc::new(VecModel::<EdgeData>::default());
//! let mut bindings = SceneBindings::new();
//! bindings.bind_edges(edges.clone(), |edge| EdgeData {
//!     path: edge.path_commands.as_str().into(),
//!     color: edge.color,
//!     width: edge.line_width,
//! });
//! window.set_edges(ModelRc::from(edges));
//!
//! bindings.sync(&DagScene::build(&graph, &state, &config));
//! ```

use crate::config::ViewConfig;
use crate::graph::GraphModel;
use crate::hit_test::{DropdownBox, NodeBox};
use crate::path::{route_edge, EdgeRoute};
use crate::state::InteractionState;
use crate::visibility::Visibility;
use slint::{Color, Model, ModelRc, SharedString, VecModel};
use std::rc::Rc;

/// Arrowhead marker variant at the target end of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowHead {
    Normal,
    Highlighted,
}

/// A visible node, ready to paint.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeView {
    pub id: String,
    pub label: String,
    pub x: f32,
    pub y: f32,
    pub geometry: NodeBox,
    pub selected: bool,
    /// Not collapsed
    pub expanded: bool,
    /// Present while this node's column picker is open
    pub dropdown: Option<DropdownBox>,
    pub columns: Vec<String>,
}

impl NodeView {
    pub fn dropdown_open(&self) -> bool {
        self.dropdown.is_some()
    }

    /// Chosen columns as a Slint model.
    pub fn columns_model(&self) -> ModelRc<SharedString> {
        let items: Vec<SharedString> = self.columns.iter().map(|c| c.as_str().into()).collect();
        ModelRc::from(Rc::new(VecModel::from(items)))
    }
}

/// A visible edge, ready to paint.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeView {
    /// Position in the graph's edge list
    pub index: usize,
    pub source: String,
    pub target: String,
    pub route: EdgeRoute,
    pub path_commands: String,
    pub highlighted: bool,
    pub color: Color,
    pub line_width: f32,
    pub arrow_head: ArrowHead,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DagScene {
    /// Visible nodes in definition order
    pub nodes: Vec<NodeView>,
    /// Visible edges in definition order
    pub edges: Vec<EdgeView>,
    pub grid_commands: String,
}

impl DagScene {
    pub fn build(graph: &GraphModel, state: &InteractionState, config: &ViewConfig) -> Self {
        let visibility = Visibility::new(graph, state.collapsed());
        let selected = state.selected();

        let nodes: Vec<NodeView> = visibility
            .visible_nodes()
            .map(|node| NodeView {
                id: node.id.clone(),
                label: node.label.clone(),
                x: node.x,
                y: node.y,
                geometry: NodeBox::new(node, &config.node),
                selected: state.is_selected(&node.id),
                expanded: state.is_expanded(&node.id),
                dropdown: state
                    .is_dropdown_open(&node.id)
                    .then(|| DropdownBox::new(node, &config.node, &config.dropdown)),
                columns: state.columns_for(&node.id).to_vec(),
            })
            .collect();

        let style = &config.edge;
        let edges: Vec<EdgeView> = visibility
            .visible_edges()
            .filter_map(|(index, edge)| {
                let route = route_edge(graph, edge, &config.node, style, selected)?;
                let highlighted = route.highlighted;
                Some(EdgeView {
                    index,
                    source: edge.source.clone(),
                    target: edge.target.clone(),
                    path_commands: route.path_commands(),
                    route,
                    highlighted,
                    color: if highlighted {
                        style.highlighted_color.to_color()
                    } else {
                        style.color.to_color()
                    },
                    line_width: if highlighted {
                        style.highlighted_line_width
                    } else {
                        style.line_width
                    },
                    arrow_head: if highlighted {
                        ArrowHead::Highlighted
                    } else {
                        ArrowHead::Normal
                    },
                })
            })
            .collect();

        tracing::trace!(nodes = nodes.len(), edges = edges.len(), "scene built");

        Self {
            nodes,
            edges,
            grid_commands: crate::grid::generate_grid_commands(
                config.canvas_width,
                config.canvas_height,
                config.grid_spacing,
            ),
        }
    }

    pub fn node(&self, id: &str) -> Option<&NodeView> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Edges that touch `id`, in definition order.
    pub fn edges_of<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a EdgeView> + 'a {
        self.edges
            .iter()
            .filter(move |e| e.source == id || e.target == id)
    }
}

/// Update `model` in place so that it holds one row per item of `rows`.
pub fn sync_rows<T, P, F>(model: &VecModel<P>, rows: &[T], constructor: F)
where
    P: Clone + 'static,
    F: Fn(&T) -> P,
{
    // Update existing rows or add new ones
    for (i, row) in rows.iter().enumerate() {
        let item = constructor(row);
        if i < model.row_count() {
            model.set_row_data(i, item);
        } else {
            model.push(item);
        }
    }
    // Remove excess rows
    while model.row_count() > rows.len() {
        model.remove(model.row_count() - 1);
    }
}

/// Internal trait for auto-syncing to Slint models.
trait ModelSyncer<T> {
    fn sync(&self, rows: &[T]);
}

struct ConcreteModelSyncer<P, F> {
    model: Rc<VecModel<P>>,
    constructor: F,
}

impl<T, P, F> ModelSyncer<T> for ConcreteModelSyncer<P, F>
where
    P: Clone + 'static,
    F: Fn(&T) -> P,
{
    fn sync(&self, rows: &[T]) {
        sync_rows(&self.model, rows, &self.constructor);
    }
}

/// Slint models kept in step with the scene.
#[derive(Default)]
pub struct SceneBindings {
    nodes: Option<Box<dyn ModelSyncer<NodeView>>>,
    edges: Option<Box<dyn ModelSyncer<EdgeView>>>,
}

impl SceneBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a node model. `constructor` builds one Slint row per visible node.
    pub fn bind_nodes<P, F>(&mut self, model: Rc<VecModel<P>>, constructor: F)
    where
        P: Clone + 'static,
        F: Fn(&NodeView) -> P + 'static,
    {
        self.nodes = Some(Box::new(ConcreteModelSyncer { model, constructor }));
    }

    /// Bind an edge model. `constructor` builds one Slint row per visible edge.
    pub fn bind_edges<P, F>(&mut self, model: Rc<VecModel<P>>, constructor: F)
    where
        P: Clone + 'static,
        F: Fn(&EdgeView) -> P + 'static,
    {
        self.edges = Some(Box::new(ConcreteModelSyncer { model, constructor }));
    }

    pub fn is_bound(&self) -> bool {
        self.nodes.is_some() || self.edges.is_some()
    }

    pub fn sync(&self, scene: &DagScene) {
        if let Some(nodes) = &self.nodes {
            nodes.sync(&scene.nodes);
        }
        if let Some(edges) = &self.edges {
            edges.sync(&scene.edges);
        }
        tracing::trace!("scene models synced");
    }
}
