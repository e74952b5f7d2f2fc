/// Scroll geometry of a container, read fresh on every scan.
///
/// Never cached: the host page's layout can change between sessions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    /// How much content extends beyond the visible area.
    pub fn overflow(&self) -> f64 {
        self.scroll_height - self.client_height
    }

    /// Whether the container overflows by more than `epsilon` pixels.
    /// The epsilon filters out scrollbar rounding noise.
    pub fn is_scrollable(&self, epsilon: f64) -> bool {
        self.scroll_height > self.client_height + epsilon
    }
}

/// Step size for walking a container: half the visible height, but never
/// below `min_step` so tiny containers still make progress.
pub fn scroll_step(metrics: &ScrollMetrics, min_step: f64) -> f64 {
    (metrics.client_height * 0.5).max(min_step)
}

/// Positions for a downward walk: 0, step, 2*step, ... while <= extent.
///
/// The stepped walk can stop short of the exact bottom, which is why callers
/// force an explicit final step to `extent` afterwards.
pub fn forward_positions(extent: f64, step: f64) -> Vec<f64> {
    let mut positions = Vec::new();
    let mut pos = 0.0;
    while pos <= extent {
        positions.push(pos);
        pos += step;
    }
    positions
}

/// Positions for the return walk: extent, extent - step, ... while >= 0.
/// The host may mount different virtualized rows depending on scroll
/// direction, so the upward pass is not redundant with the downward one.
pub fn reverse_positions(extent: f64, step: f64) -> Vec<f64> {
    let mut positions = Vec::new();
    let mut pos = extent;
    while pos >= 0.0 {
        positions.push(pos);
        pos -= step;
    }
    positions
}
