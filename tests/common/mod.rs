//! Common test utilities for integration tests.

#![allow(dead_code)]

pub mod harness;

use std::cell::RefCell;
use std::rc::Rc;

/// Tracks callback invocations for testing.
///
/// Each field records calls to the corresponding hook with their arguments.
#[derive(Default, Clone)]
pub struct CallbackTracker {
    /// Count of scene_changed calls
    pub scene_changed: Rc<RefCell<usize>>,
    /// Visible node ids reported by each scene_changed call
    pub visible_nodes: Rc<RefCell<Vec<Vec<String>>>>,
    /// Highlighted edge indices reported by each scene_changed call
    pub highlighted_edges: Rc<RefCell<Vec<Vec<usize>>>>,
}

impl CallbackTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all recorded callbacks.
    pub fn clear(&self) {
        *self.scene_changed.borrow_mut() = 0;
        self.visible_nodes.borrow_mut().clear();
        self.highlighted_edges.borrow_mut().clear();
    }

    pub fn scene_changes(&self) -> usize {
        *self.scene_changed.borrow()
    }
}
