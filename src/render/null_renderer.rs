use crate::error::ChartResult;
use crate::render::Renderer;
use crate::scene::SceneFrame;

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_ring_count: usize,
    pub last_spoke_count: usize,
    pub last_label_count: usize,
    pub last_polygon_rendered: bool,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &SceneFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_ring_count = frame.grid_rings.len();
        self.last_spoke_count = frame.axis_spokes.len();
        self.last_label_count = frame.axis_labels.len();
        self.last_polygon_rendered = frame.series_polygon.is_some();
        Ok(())
    }
}
