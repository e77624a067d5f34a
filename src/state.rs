//! Transient interaction state and its transitions.
//!
//! [`InteractionState`] is the single mutable bundle of the view: the
//! selected node, the collapsed set, the node whose column picker is open, and
//! the columns chosen per node. Every transition is total and synchronous.
//! [`InteractionState::apply`] additionally checks event node ids against a
//! graph and leaves the state untouched for unknown ids.

use crate::error::{DagError, Result};
use crate::graph::GraphModel;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// One interaction event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DagEvent {
    Select(String),
    ToggleExpand(String),
    ToggleDropdown(String),
    SelectColumn { node: String, column: String },
    BackgroundClick,
}

impl DagEvent {
    /// The node this event targets, if any.
    pub fn node_id(&self) -> Option<&str> {
        match self {
            DagEvent::Select(id) | DagEvent::ToggleExpand(id) | DagEvent::ToggleDropdown(id) => {
                Some(id.as_str())
            }
            DagEvent::SelectColumn { node, .. } => Some(node.as_str()),
            DagEvent::BackgroundClick => None,
        }
    }
}

impl fmt::Display for DagEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(id) => write!(f, "select({id})"),
            Self::ToggleExpand(id) => write!(f, "toggle-expand({id})"),
            Self::ToggleDropdown(id) => write!(f, "toggle-dropdown({id})"),
            Self::SelectColumn { node, column } => write!(f, "select-column({node}, {column})"),
            Self::BackgroundClick => write!(f, "background-click"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    selected: Option<String>,
    collapsed: BTreeSet<String>,
    active_dropdown: Option<String>,
    columns: HashMap<String, Vec<String>>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    // === Transitions ===

    /// Select `node_id`, or clear the selection if it is already selected.
    pub fn select(&mut self, node_id: &str) {
        if self.selected.as_deref() == Some(node_id) {
            self.selected = None;
        } else {
            self.selected = Some(node_id.to_owned());
        }
    }

    /// Add `node_id` to the collapsed set, or remove it if present.
    pub fn toggle_expand(&mut self, node_id: &str) {
        if !self.collapsed.remove(node_id) {
            self.collapsed.insert(node_id.to_owned());
        }
    }

    /// Open the column picker of `node_id`, closing any other; close it if already open.
    pub fn toggle_dropdown(&mut self, node_id: &str) {
        if self.active_dropdown.as_deref() == Some(node_id) {
            self.active_dropdown = None;
        } else {
            self.active_dropdown = Some(node_id.to_owned());
        }
    }

    /// Append `column` to the node's columns and close its picker if open.
    ///
    /// Duplicates are kept. A picker open on another node stays open.
    pub fn select_column(&mut self, node_id: &str, column: &str) {
        self.columns
            .entry(node_id.to_owned())
            .or_default()
            .push(column.to_owned());
        if self.active_dropdown.as_deref() == Some(node_id) {
            self.active_dropdown = None;
        }
    }

    /// Close any open picker. Selection and collapse state are untouched.
    pub fn background_click(&mut self) {
        self.active_dropdown = None;
    }

    /// Apply `event` without checking node ids.
    pub fn apply_unchecked(&mut self, event: &DagEvent) {
        match event {
            DagEvent::Select(id) => self.select(id),
            DagEvent::ToggleExpand(id) => self.toggle_expand(id),
            DagEvent::ToggleDropdown(id) => self.toggle_dropdown(id),
            DagEvent::SelectColumn { node, column } => self.select_column(node, column),
            DagEvent::BackgroundClick => self.background_click(),
        }
    }

    /// Apply `event` if its node (if any) exists in `graph`.
    ///
    /// Unknown ids yield [`DagError::UnknownNodeReference`] and leave the
    /// state exactly as it was.
    pub fn apply(&mut self, graph: &GraphModel, event: &DagEvent) -> Result<()> {
        if let Some(id) = event.node_id() {
            if !graph.contains(id) {
                return Err(DagError::UnknownNodeReference(id.to_owned()));
            }
        }
        self.apply_unchecked(event);
        Ok(())
    }

    // === Queries ===

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, node_id: &str) -> bool {
        self.selected.as_deref() == Some(node_id)
    }

    pub fn collapsed(&self) -> &BTreeSet<String> {
        &self.collapsed
    }

    pub fn is_collapsed(&self, node_id: &str) -> bool {
        self.collapsed.contains(node_id)
    }

    /// Expanded is the negation of collapsed; drives the chevron icon.
    pub fn is_expanded(&self, node_id: &str) -> bool {
        !self.is_collapsed(node_id)
    }

    pub fn active_dropdown(&self) -> Option<&str> {
        self.active_dropdown.as_deref()
    }

    pub fn is_dropdown_open(&self, node_id: &str) -> bool {
        self.active_dropdown.as_deref() == Some(node_id)
    }

    /// Columns chosen for `node_id`, in the order they were picked.
    pub fn columns_for(&self, node_id: &str) -> &[String] {
        self.columns.get(node_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn columns(&self) -> &HashMap<String, Vec<String>> {
        &self.columns
    }
}
