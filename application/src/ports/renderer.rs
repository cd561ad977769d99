//! Renderer port
//!
//! Defines the interface the assembled radar is handed to on a
//! successful load. Implementations live in the presentation layer
//! (console today; an SVG engine would plug in here).

use radar_domain::Radar;

/// Consumer of a successfully assembled radar
pub trait Renderer: Send + Sync {
    /// Render the radar at the given viewport size.
    fn render(&self, radar: &Radar, viewport_size: u32);
}

/// No-op renderer for when no output is wanted
pub struct NoRenderer;

impl Renderer for NoRenderer {
    fn render(&self, _radar: &Radar, _viewport_size: u32) {}
}
