use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::scene::primitives::Color;

/// Presentation tuning for one chart scene.
///
/// Defaults reproduce the hairline near-black grid and the orange accent
/// series of the stock theme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneStyle {
    /// Score distance between consecutive grid rings.
    pub ring_step: f64,
    /// Every n-th ring is drawn as a major ring.
    pub major_ring_every: usize,
    pub minor_ring_color: Color,
    pub major_ring_color: Color,
    pub minor_ring_width: f64,
    pub major_ring_width: f64,
    pub spoke_color: Color,
    pub spoke_width: f64,
    pub label_color: Color,
    pub label_font_size_px: f64,
    /// Rotate labels to read along their radial direction.
    pub rotate_labels: bool,
    /// Clip labels to a circle slightly larger than the outer ring.
    pub clip_labels: bool,
    pub accent_color: Color,
    pub polygon_fill_alpha: f64,
    pub polygon_stroke_width: f64,
    pub show_vertex_markers: bool,
    pub vertex_marker_radius_px: f64,
    pub title_color: Color,
    pub title_font_size_px: f64,
}

const INK: Color = Color::rgb(0.02, 0.02, 0.02);
const ACCENT: Color = Color::rgb(1.0, 0.549, 0.0);

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            ring_step: 0.5,
            major_ring_every: 5,
            minor_ring_color: INK.with_alpha(0.05),
            major_ring_color: INK.with_alpha(0.2),
            minor_ring_width: 1.0,
            major_ring_width: 1.25,
            spoke_color: INK.with_alpha(0.8),
            spoke_width: 1.5,
            label_color: INK,
            label_font_size_px: 14.0,
            rotate_labels: false,
            clip_labels: false,
            accent_color: ACCENT,
            polygon_fill_alpha: 0.5,
            polygon_stroke_width: 3.0,
            show_vertex_markers: false,
            vertex_marker_radius_px: 4.0,
            title_color: INK,
            title_font_size_px: 20.0,
        }
    }
}

impl SceneStyle {
    pub fn validate(self) -> ChartResult<()> {
        if !self.ring_step.is_finite() || self.ring_step <= 0.0 {
            return Err(ChartError::InvalidData(
                "ring step must be finite and > 0".to_owned(),
            ));
        }
        if self.major_ring_every == 0 {
            return Err(ChartError::InvalidData(
                "major ring cadence must be > 0".to_owned(),
            ));
        }
        for (value, name) in [
            (self.minor_ring_width, "minor_ring_width"),
            (self.major_ring_width, "major_ring_width"),
            (self.spoke_width, "spoke_width"),
            (self.label_font_size_px, "label_font_size_px"),
            (self.polygon_stroke_width, "polygon_stroke_width"),
            (self.vertex_marker_radius_px, "vertex_marker_radius_px"),
            (self.title_font_size_px, "title_font_size_px"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }
        if !self.polygon_fill_alpha.is_finite() || !(0.0..=1.0).contains(&self.polygon_fill_alpha)
        {
            return Err(ChartError::InvalidData(
                "polygon fill alpha must be in [0, 1]".to_owned(),
            ));
        }
        for color in [
            self.minor_ring_color,
            self.major_ring_color,
            self.spoke_color,
            self.label_color,
            self.accent_color,
            self.title_color,
        ] {
            color.validate()?;
        }
        Ok(())
    }
}
