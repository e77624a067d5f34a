//! High-level controller for DAG view applications.
//!
//! The [`DagViewController`] owns the graph, the view configuration and the
//! single interaction state bundle, applies events one at a time, and keeps
//! bound Slint models in step with the resulting scene.
//!
//! # Example
//!
//! ```ignore
//! use slint_dag_view::{DagViewController, GraphModel, ViewConfig};
//!
//! slint::include_modules!();
//!
//! fn main() {
//!     let window = MainWindow::new().unwrap();
//!     let graph = GraphModel::from_json_str(include_str!("pipeline.json")).unwrap();
//!     let ctrl = DagViewController::new(graph, ViewConfig::default());
//!
//!     let nodes = Rc::new(VecModel::<NodeData>::default());
//!     ctrl.bind_node_model(nodes.clone(), |n| NodeData {
//!         id: n.id.as_str().into(),
//!         label: n.label.as_str().into(),
//!         x: n.geometry.body.x,
//!         y: n.geometry.body.y,
//!         selected: n.selected,
//!         expanded: n.expanded,
//!         dropdown_open: n.dropdown_open(),
//!         columns: n.columns_model(),
//!     });
//!     window.set_nodes(ModelRc::from(nodes));
//!
//!     window.on_node_clicked(ctrl.node_clicked_callback());
//!     window.on_toggle_expand(ctrl.toggle_expand_callback());
//!     window.on_toggle_dropdown(ctrl.toggle_dropdown_callback());
//!     window.on_column_selected(ctrl.column_selected_callback());
//!     window.on_background_clicked(ctrl.background_clicked_callback());
//!     window.set_grid_commands(ctrl.grid_commands());
//!
//!     window.run().unwrap();
//! }
//! ```

use crate::config::ViewConfig;
use crate::graph::GraphModel;
use crate::hit_test::{hit_test, PointerTarget};
use crate::scene::{DagScene, EdgeView, NodeView, SceneBindings};
use crate::state::{DagEvent, InteractionState};
use slint::{SharedString, VecModel};
use std::cell::RefCell;
use std::rc::Rc;

/// Controller that owns the view state and provides callback implementations.
///
/// Events are applied synchronously and one at a time. After each applied
/// event, or each batch from [`dispatch_all`](Self::dispatch_all), the scene
/// is rebuilt and pushed to any bound models, then the change handler (if
/// set) runs. Events naming unknown nodes are logged and
/// ignored.
///
/// Clone this controller to share it across callbacks.
#[derive(Clone)]
pub struct DagViewController {
    graph: Rc<GraphModel>,
    config: Rc<ViewConfig>,
    state: Rc<RefCell<InteractionState>>,
    bindings: Rc<RefCell<SceneBindings>>,
    on_change: Rc<RefCell<Option<Box<dyn Fn(&DagScene)>>>>,
}

impl DagViewController {
    pub fn new(graph: GraphModel, config: ViewConfig) -> Self {
        Self {
            graph: Rc::new(graph),
            config: Rc::new(config),
            state: Rc::new(RefCell::new(InteractionState::new())),
            bindings: Rc::new(RefCell::new(SceneBindings::new())),
            on_change: Rc::new(RefCell::new(None)),
        }
    }

    pub fn graph(&self) -> &GraphModel {
        &self.graph
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Snapshot of the current interaction state.
    pub fn state(&self) -> InteractionState {
        self.state.borrow().clone()
    }

    /// Build the scene for the current state.
    pub fn scene(&self) -> DagScene {
        DagScene::build(&self.graph, &self.state.borrow(), &self.config)
    }

    /// Background grid commands for the configured canvas.
    pub fn grid_commands(&self) -> SharedString {
        crate::grid::generate_grid_commands(
            self.config.canvas_width,
            self.config.canvas_height,
            self.config.grid_spacing,
        )
        .into()
    }

    /// Bind a Slint node model and fill it with the current scene.
    pub fn bind_node_model<P, F>(&self, model: Rc<VecModel<P>>, constructor: F)
    where
        P: Clone + 'static,
        F: Fn(&NodeView) -> P + 'static,
    {
        self.bindings.borrow_mut().bind_nodes(model, constructor);
        self.refresh();
    }

    /// Bind a Slint edge model and fill it with the current scene.
    pub fn bind_edge_model<P, F>(&self, model: Rc<VecModel<P>>, constructor: F)
    where
        P: Clone + 'static,
        F: Fn(&EdgeView) -> P + 'static,
    {
        self.bindings.borrow_mut().bind_edges(model, constructor);
        self.refresh();
    }

    /// Run `handler` with the new scene after every applied event.
    pub fn on_scene_changed(&self, handler: impl Fn(&DagScene) + 'static) {
        *self.on_change.borrow_mut() = Some(Box::new(handler));
    }

    /// Rebuild the scene and push it to bound models.
    pub fn refresh(&self) {
        let scene = self.scene();
        self.bindings.borrow().sync(&scene);
        if let Some(handler) = self.on_change.borrow().as_ref() {
            handler(&scene);
        }
    }

    /// Apply one event. Returns `false` if it named an unknown node and was ignored.
    pub fn dispatch(&self, event: DagEvent) -> bool {
        let applied = self.apply(&event);
        if applied {
            self.refresh();
        }
        applied
    }

    /// Apply events in order, then refresh once if any of them applied.
    /// Returns how many were applied.
    pub fn dispatch_all<I>(&self, events: I) -> usize
    where
        I: IntoIterator<Item = DagEvent>,
    {
        let mut applied = 0;
        for event in events {
            if self.apply(&event) {
                applied += 1;
            }
        }
        if applied > 0 {
            self.refresh();
        }
        applied
    }

    /// Resolve a pointer press at (x, y) and apply the events it produces as one batch.
    pub fn handle_pointer_press(&self, x: f32, y: f32) -> PointerTarget {
        let target = hit_test(x, y, &self.graph, &self.state.borrow(), &self.config);
        tracing::trace!(x, y, target = ?target, "pointer press");
        self.dispatch_all(target.events());
        target
    }

    fn apply(&self, event: &DagEvent) -> bool {
        let applied = self.state.borrow_mut().apply(&self.graph, event);
        match applied {
            Ok(()) => {
                tracing::debug!(node = event.node_id(), event = %event, "applied interaction event");
                true
            }
            Err(err) => {
                tracing::warn!(node = event.node_id(), event = %event, error = %err, "ignoring interaction event");
                false
            }
        }
    }

    // === Callback factories ===

    /// Returns a callback for `node-clicked(id)`: toggles selection.
    pub fn node_clicked_callback(&self) -> impl Fn(SharedString) {
        let ctrl = self.clone();
        move |id| {
            ctrl.dispatch(DagEvent::Select(id.to_string()));
        }
    }

    /// Returns a callback for `toggle-expand(id)`.
    pub fn toggle_expand_callback(&self) -> impl Fn(SharedString) {
        let ctrl = self.clone();
        move |id| {
            ctrl.dispatch(DagEvent::ToggleExpand(id.to_string()));
        }
    }

    /// Returns a callback for `toggle-dropdown(id)`.
    pub fn toggle_dropdown_callback(&self) -> impl Fn(SharedString) {
        let ctrl = self.clone();
        move |id| {
            ctrl.dispatch(DagEvent::ToggleDropdown(id.to_string()));
        }
    }

    /// Returns a callback for `column-selected(id, column)`.
    pub fn column_selected_callback(&self) -> impl Fn(SharedString, SharedString) {
        let ctrl = self.clone();
        move |id, column| {
            ctrl.dispatch(DagEvent::SelectColumn {
                node: id.to_string(),
                column: column.to_string(),
            });
        }
    }

    /// Returns a callback for `background-clicked()`.
    pub fn background_clicked_callback(&self) -> impl Fn() {
        let ctrl = self.clone();
        move || {
            ctrl.dispatch(DagEvent::BackgroundClick);
        }
    }

    /// Returns a callback for `pointer-pressed(x, y)` on a single canvas touch area.
    pub fn pointer_pressed_callback(&self) -> impl Fn(f32, f32) {
        let ctrl = self.clone();
        move |x, y| {
            ctrl.handle_pointer_press(x, y);
        }
    }
}
