//! Layout and style constants for the DAG view.
//!
//! Node positions are supplied by the graph definition; everything else the
//! presentation layer needs to size nodes, buttons, dropdowns and edges lives
//! here. All structs deserialize from partial JSON documents, so a host can
//! override only the values it cares about:
//!
//! ```
//! use slint_dag_view::ViewConfig;
//!
//! let config = ViewConfig::from_json_str(r#"{ "node": { "width": 200 } }"#).unwrap();
//! assert_eq!(config.node.width, 200.0);
//! assert_eq!(config.node.height, 40.0);
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use slint::Color;

/// Fixed node box dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeDimensions {
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
    /// Left padding of the label inside the node box
    pub text_padding: f32,
    /// Horizontal distance between the centers of the two node buttons
    pub button_spacing: f32,
    pub button_radius: f32,
    /// Extra inset of the first button from the node's right edge
    pub button_inset: f32,
    pub horizontal_gap: f32,
    pub vertical_gap: f32,
}

impl Default for NodeDimensions {
    fn default() -> Self {
        Self {
            width: 160.0,
            height: 40.0,
            corner_radius: 8.0,
            text_padding: 16.0,
            button_spacing: 32.0,
            button_radius: 12.0,
            button_inset: 20.0,
            horizontal_gap: 100.0,
            vertical_gap: 80.0,
        }
    }
}

/// An opaque RGB color that survives a JSON round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_color(self) -> Color {
        Color::from_rgb_u8(self.0, self.1, self.2)
    }
}

/// Edge stroke styling and curvature limit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeStyle {
    /// Upper bound for the horizontal control point offset
    pub max_curvature: f32,
    pub line_width: f32,
    pub highlighted_line_width: f32,
    pub color: Rgb,
    pub highlighted_color: Rgb,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            max_curvature: 80.0,
            line_width: 1.5,
            highlighted_line_width: 2.0,
            color: Rgb(0xd1, 0xd5, 0xdb),
            highlighted_color: Rgb(0x60, 0xa5, 0xfa),
        }
    }
}

/// Geometry and contents of the per-node column picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropdownStyle {
    /// Gap between the node's bottom edge and the panel
    pub offset: f32,
    pub height: f32,
    pub padding: f32,
    pub header_height: f32,
    /// Chosen so the default options all fit inside `height`; text-sized rows would overflow it
    pub row_height: f32,
    pub options: Vec<String>,
}

impl Default for DropdownStyle {
    fn default() -> Self {
        Self {
            offset: 5.0,
            height: 120.0,
            padding: 8.0,
            header_height: 28.0,
            row_height: 20.0,
            options: ["id", "name", "value", "timestamp"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Complete view configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub node: NodeDimensions,
    pub edge: EdgeStyle,
    pub dropdown: DropdownStyle,
    pub grid_spacing: f32,
    pub canvas_width: f32,
    pub canvas_height: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            node: NodeDimensions::default(),
            edge: EdgeStyle::default(),
            dropdown: DropdownStyle::default(),
            grid_spacing: 40.0,
            canvas_width: 800.0,
            canvas_height: 300.0,
        }
    }
}

impl ViewConfig {
    /// Parse a (possibly partial) JSON document. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
