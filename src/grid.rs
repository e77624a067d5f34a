/// Spacing below this is too dense to be visible and yields no grid.
pub const MIN_GRID_SPACING: f32 = 4.0;

/// Upper bound on the number of lines in one grid.
pub const MAX_GRID_LINES: usize = 4096;

/// Generate SVG path commands for the background grid
///
/// The grid is a fixed square lattice anchored at the canvas origin, drawn
/// under the edges and nodes. Returns an empty string when the spacing is
/// below [`MIN_GRID_SPACING`], when either dimension is not a positive finite
/// number, or when the grid would need more than [`MAX_GRID_LINES`] lines.
///
/// # Arguments
/// * `width` - Canvas width in pixels
/// * `height` - Canvas height in pixels
/// * `spacing` - Distance between grid lines (default: 40.0)
///
/// # Returns
/// SVG path commands string (e.g., "M 0 0 L 0 300 M 40 0 L 40 300...")
pub fn generate_grid_commands(width: f32, height: f32, spacing: f32) -> String {
    let positive = |v: f32| v.is_finite() && v > 0.0;
    if !positive(width) || !positive(height) || !positive(spacing) || spacing < MIN_GRID_SPACING {
        return String::new();
    }

    // Lines at 0, spacing, ..., up to and including the far edge
    let columns = ((width / spacing).floor() as usize).saturating_add(1);
    let rows = ((height / spacing).floor() as usize).saturating_add(1);
    if columns.saturating_add(rows) > MAX_GRID_LINES {
        tracing::warn!(width, height, spacing, "grid too dense, skipping");
        return String::new();
    }

    let vertical = (0..columns).map(|i| {
        let x = i as f32 * spacing;
        format!("M {} 0 L {} {}", x, x, height)
    });
    let horizontal = (0..rows).map(|i| {
        let y = i as f32 * spacing;
        format!("M 0 {} L {} {}", y, width, y)
    });

    vertical.chain(horizontal).collect::<Vec<_>>().join(" ")
}
