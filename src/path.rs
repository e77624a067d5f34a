use crate::anchor::{resolve_anchor, Anchor};
use crate::config::{EdgeStyle, NodeDimensions};
use crate::graph::{Edge, GraphModel};

/// Horizontal control point offset for a connector spanning `dx`.
///
/// Half the horizontal distance, capped at `max_curvature`.
pub fn curvature(dx: f32, max_curvature: f32) -> f32 {
    (dx.abs() / 2.0).min(max_curvature)
}

/// Generate SVG path command for a connector between two anchor points
///
/// Creates a symmetric S-curve that leaves the start point and enters the
/// end point horizontally, so vertically offset nodes never get a sharp bend.
///
/// # Arguments
/// * `start_x`, `start_y` - Source anchor
/// * `end_x`, `end_y` - Target anchor
/// * `max_curvature` - Upper bound on the control point offset (default: 80.0)
///
/// # Returns
/// SVG path command string (e.g., "M 180 150 C 200 150 200 80 220 80")
pub fn generate_curve_path(
    start_x: f32,
    start_y: f32,
    end_x: f32,
    end_y: f32,
    max_curvature: f32,
) -> String {
    CubicBezier::from_endpoints(start_x, start_y, end_x, end_y, max_curvature).to_path_commands()
}

/// Cubic bezier connector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub p0: (f32, f32), // Start point
    pub p1: (f32, f32), // Control point 1
    pub p2: (f32, f32), // Control point 2
    pub p3: (f32, f32), // End point
}

impl CubicBezier {
    /// Create a connector from endpoints using the same logic as generate_curve_path
    pub fn from_endpoints(
        start_x: f32,
        start_y: f32,
        end_x: f32,
        end_y: f32,
        max_curvature: f32,
    ) -> Self {
        let offset = curvature(end_x - start_x, max_curvature);

        CubicBezier {
            p0: (start_x, start_y),
            p1: (start_x + offset, start_y),
            p2: (end_x - offset, end_y),
            p3: (end_x, end_y),
        }
    }

    pub fn from_anchors(source: &Anchor, target: &Anchor, max_curvature: f32) -> Self {
        Self::from_endpoints(source.x, source.y, target.x, target.y, max_curvature)
    }

    /// SVG path: M (move to), C (cubic bezier)
    pub fn to_path_commands(&self) -> String {
        format!(
            "M {} {} C {} {} {} {} {} {}",
            self.p0.0, self.p0.1, self.p1.0, self.p1.1, self.p2.0, self.p2.1, self.p3.0, self.p3.1
        )
    }

    /// Evaluate the bezier curve at parameter t (0.0 to 1.0)
    pub fn eval(&self, t: f32) -> (f32, f32) {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        let x = mt3 * self.p0.0
            + 3.0 * mt2 * t * self.p1.0
            + 3.0 * mt * t2 * self.p2.0
            + t3 * self.p3.0;
        let y = mt3 * self.p0.1
            + 3.0 * mt2 * t * self.p1.1
            + 3.0 * mt * t2 * self.p2.1
            + t3 * self.p3.1;

        (x, y)
    }
}

/// True iff a node is selected and the edge starts or ends at it.
pub fn is_edge_highlighted(edge: &Edge, selected: Option<&str>) -> bool {
    selected.is_some_and(|id| edge.touches(id))
}

/// Routed connector for one edge
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRoute {
    pub source: Anchor,
    pub target: Anchor,
    pub curve: CubicBezier,
    /// Presentation-only emphasis; never changes the geometry
    pub highlighted: bool,
}

impl EdgeRoute {
    pub fn path_commands(&self) -> String {
        self.curve.to_path_commands()
    }
}

/// Route `edge` between the anchors of its endpoints.
///
/// Returns `None` if either endpoint is missing from the graph.
pub fn route_edge(
    graph: &GraphModel,
    edge: &Edge,
    dims: &NodeDimensions,
    style: &EdgeStyle,
    selected: Option<&str>,
) -> Option<EdgeRoute> {
    let source = resolve_anchor(graph, &edge.source, dims)?;
    let target = resolve_anchor(graph, &edge.target, dims)?;
    Some(EdgeRoute {
        source,
        target,
        curve: CubicBezier::from_anchors(&source, &target, style.max_curvature),
        highlighted: is_edge_highlighted(edge, selected),
    })
}
