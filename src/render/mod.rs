mod null_renderer;
mod svg_backend;

pub use null_renderer::NullRenderer;
pub use svg_backend::{SVG_MEDIA_TYPE, SvgRenderer, render_svg_document};

use crate::error::ChartResult;
use crate::scene::SceneFrame;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `SceneFrame` so
/// drawing code remains isolated from chart geometry and form handling.
pub trait Renderer {
    fn render(&mut self, frame: &SceneFrame) -> ChartResult<()>;
}
