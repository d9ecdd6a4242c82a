//! Fixed-width text gauges.

use crate::estimate::FPS_GAUGE_MAX;

/// Number of cells in a gauge.
pub const GAUGE_WIDTH: usize = 16;

/// Render `value / max` as a bar of [`GAUGE_WIDTH`] cells, clamped to full.
///
/// ```
/// use pixelbuddy::ui::render_gauge;
///
/// assert_eq!(render_gauge(60, 120), "[████████░░░░░░░░]");
/// assert_eq!(render_gauge(500, 120), "[████████████████]");
/// ```
pub fn render_gauge(value: u32, max: u32) -> String {
    let filled = if max > 0 {
        (value.min(max) as usize * GAUGE_WIDTH) / max as usize
    } else {
        0
    };
    let empty = GAUGE_WIDTH - filled;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

/// Gauge for an FPS estimate, full at [`FPS_GAUGE_MAX`].
pub fn fps_gauge(fps: u32) -> String {
    render_gauge(fps, FPS_GAUGE_MAX)
}
