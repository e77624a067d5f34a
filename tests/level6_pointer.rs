//! Level 6: Pointer Interaction Tests
//!
//! Tests mapping presses on the canvas to events: node bodies, the two node
//! buttons, open pickers and the background.
//!
//! With default dimensions the source node box spans x 20..180, y 130..170,
//! its add-column button is centered at (128, 150) and its expand button at
//! (160, 150). The raw picker panel spans x 220..380, y 105..225 with option
//! rows starting at y 141, 20 high each.

mod common;

use common::harness::PipelineHarness;
use slint_dag_view::{hit_test, DagEvent, PointerTarget};

fn target_at(harness: &PipelineHarness, x: f32, y: f32) -> PointerTarget {
    hit_test(
        x,
        y,
        harness.ctrl.graph(),
        &harness.ctrl.state(),
        harness.ctrl.config(),
    )
}

// ============================================================================
// Node box
// ============================================================================

#[test]
fn test_click_body_selects() {
    let harness = PipelineHarness::new();
    harness.click(40.0, 150.0);

    assert_eq!(harness.ctrl.state().selected(), Some("source"));
    assert!(harness.node_row("source").unwrap().selected);
}

#[test]
fn test_click_body_twice_deselects() {
    let harness = PipelineHarness::new();
    harness.click(40.0, 150.0);
    harness.click(60.0, 140.0);

    assert_eq!(harness.ctrl.state().selected(), None);
}

#[test]
fn test_click_body_closes_open_dropdown() {
    let harness = PipelineHarness::new();
    harness.ctrl.dispatch(DagEvent::ToggleDropdown("raw".into()));
    harness.tracker.clear();
    harness.click(40.0, 150.0);

    let state = harness.ctrl.state();
    assert_eq!(state.selected(), Some("source"));
    assert_eq!(state.active_dropdown(), None);

    // No intermediate scene with the node selected and the picker still open
    assert_eq!(harness.tracker.scene_changes(), 1);
    assert!(harness.node_row("source").unwrap().selected);
    assert!(!harness.node_row("raw").unwrap().dropdown_open);
}

#[test]
fn test_click_between_buttons_hits_body() {
    let harness = PipelineHarness::new();
    assert_eq!(
        target_at(&harness, 144.0, 150.0),
        PointerTarget::NodeBody("source".into())
    );
}

#[test]
fn test_click_expand_button_toggles_collapse() {
    let harness = PipelineHarness::new();
    harness.click(160.0, 150.0);

    assert!(harness.ctrl.state().is_collapsed("source"));
    assert_eq!(harness.node_ids(), vec!["source", "transform", "target"]);
    // Buttons consume the press
    assert_eq!(harness.ctrl.state().selected(), None);

    harness.click(160.0, 150.0);
    assert_eq!(harness.node_ids().len(), 5);
}

#[test]
fn test_click_add_button_opens_dropdown() {
    let harness = PipelineHarness::new();
    harness.click(128.0, 150.0);

    assert_eq!(harness.ctrl.state().active_dropdown(), Some("source"));
    assert!(harness.node_row("source").unwrap().dropdown_open);
    assert_eq!(harness.ctrl.state().selected(), None);
}

// ============================================================================
// Dropdown
// ============================================================================

#[test]
fn test_click_option_adds_column() {
    let harness = PipelineHarness::new();
    harness.ctrl.dispatch(DagEvent::ToggleDropdown("raw".into()));

    assert_eq!(
        target_at(&harness, 300.0, 150.0),
        PointerTarget::DropdownOption {
            node: "raw".into(),
            column: "id".into(),
        }
    );
    harness.click(300.0, 150.0);

    assert_eq!(harness.columns_of("raw"), vec!["id"]);
    assert_eq!(harness.ctrl.state().active_dropdown(), None);
}

#[test]
fn test_option_rows_in_order() {
    let harness = PipelineHarness::new();
    harness.ctrl.dispatch(DagEvent::ToggleDropdown("raw".into()));
    harness.click(300.0, 170.0);
    harness.ctrl.dispatch(DagEvent::ToggleDropdown("raw".into()));
    harness.click(300.0, 190.0);

    assert_eq!(harness.columns_of("raw"), vec!["name", "value"]);
}

#[test]
fn test_click_panel_header_closes_dropdown() {
    let harness = PipelineHarness::new();
    harness.ctrl.dispatch(DagEvent::ToggleDropdown("raw".into()));

    assert_eq!(
        target_at(&harness, 300.0, 120.0),
        PointerTarget::DropdownPanel("raw".into())
    );
    harness.click(300.0, 120.0);

    assert_eq!(harness.ctrl.state().active_dropdown(), None);
    assert!(harness.columns_of("raw").is_empty());
}

#[test]
fn test_closed_dropdown_is_not_hit() {
    let harness = PipelineHarness::new();
    assert_eq!(target_at(&harness, 300.0, 150.0), PointerTarget::Background);
}

// ============================================================================
// Background and hidden nodes
// ============================================================================

#[test]
fn test_click_background() {
    let harness = PipelineHarness::new();
    harness.ctrl.dispatch(DagEvent::Select("raw".into()));
    harness.ctrl.dispatch(DagEvent::ToggleDropdown("target".into()));

    harness.click(600.0, 40.0);

    let state = harness.ctrl.state();
    assert_eq!(state.active_dropdown(), None);
    assert_eq!(state.selected(), Some("raw"));
}

#[test]
fn test_hidden_node_is_not_hit() {
    let harness = PipelineHarness::new();
    harness.ctrl.dispatch(DagEvent::ToggleExpand("source".into()));

    assert_eq!(target_at(&harness, 300.0, 80.0), PointerTarget::Background);
    harness.click(300.0, 80.0);
    assert_eq!(harness.ctrl.state().selected(), None);
}

#[test]
fn test_pointer_pressed_callback() {
    let harness = PipelineHarness::new();
    let pressed = harness.ctrl.pointer_pressed_callback();

    pressed(700.0, 150.0);
    assert_eq!(harness.ctrl.state().selected(), Some("target"));
    // Select and the bubbled background click land as one scene change
    assert_eq!(harness.tracker.scene_changes(), 1);
}
