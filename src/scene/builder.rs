use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ChartState, PolarProjector, RadialScale, SCORE_MAX, Viewport, layout_axes};
use crate::error::{ChartError, ChartResult};
use crate::scene::frame::SceneFrame;
use crate::scene::primitives::{
    CirclePrimitive, LinePrimitive, PolygonPrimitive, TextHAlign, TextPrimitive,
};
use crate::scene::style::SceneStyle;

/// Fixed pixel geometry of one chart instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub viewport: Viewport,
    /// Pixel radius of the outer grid ring.
    pub max_radius_px: f64,
    /// Score-domain distance of label anchors from the pole; sits past
    /// `SCORE_MAX` so labels clear the grid.
    pub label_offset_score: f64,
}

impl ChartGeometry {
    #[must_use]
    pub fn new(viewport: Viewport, max_radius_px: f64, label_offset_score: f64) -> Self {
        Self {
            viewport,
            max_radius_px,
            label_offset_score,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.max_radius_px.is_finite() || self.max_radius_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "chart radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.label_offset_score.is_finite() || self.label_offset_score <= SCORE_MAX {
            return Err(ChartError::InvalidData(format!(
                "label offset must be finite and > {SCORE_MAX}"
            )));
        }
        Ok(())
    }
}

/// Computes the full drawable scene for one chart state.
///
/// Pure and deterministic: identical inputs produce identical frames. The
/// degenerate empty state still yields the grid, with no spokes, labels,
/// polygon, or markers.
pub fn build_scene(
    state: &ChartState,
    title: Option<&str>,
    style: &SceneStyle,
    geometry: ChartGeometry,
) -> ChartResult<SceneFrame> {
    geometry.validate()?;
    style.validate()?;

    let center = geometry.viewport.center();
    let scale = RadialScale::new(geometry.max_radius_px)?;
    let projector = PolarProjector::new(center, scale);

    let mut frame = SceneFrame::new(geometry.viewport);

    // Concentric grid rings, major every `major_ring_every` steps.
    let ring_count = (SCORE_MAX / style.ring_step + 1e-9).floor() as usize;
    for step in 1..=ring_count {
        let tick = step as f64 * style.ring_step;
        let major = step % style.major_ring_every == 0;
        frame.grid_rings.push(CirclePrimitive::new(
            center.x,
            center.y,
            scale.score_to_radius(tick)?,
            if major {
                style.major_ring_width
            } else {
                style.minor_ring_width
            },
            if major {
                style.major_ring_color
            } else {
                style.minor_ring_color
            },
            None,
        ));
    }

    let axes = layout_axes(state.axes())?;

    for axis in &axes {
        let tip = projector.project(axis.angle, SCORE_MAX)?;
        frame.axis_spokes.push(LinePrimitive::new(
            center.x,
            center.y,
            tip.x,
            tip.y,
            style.spoke_width,
            style.spoke_color,
        ));

        let anchor = projector.project(axis.angle, geometry.label_offset_score)?;
        let mut label = TextPrimitive::new(
            axis.label.clone(),
            anchor.x,
            anchor.y,
            style.label_font_size_px,
            style.label_color,
            TextHAlign::Center,
        );
        if style.rotate_labels {
            let rotation = (anchor.y - center.y).atan2(anchor.x - center.x).to_degrees() + 90.0;
            label = label.with_rotation_deg(rotation);
        }
        frame.axis_labels.push(label);
    }

    if !state.is_empty() {
        let mut vertices = Vec::with_capacity(state.len());
        for (axis, score) in axes.iter().zip(state.scores()) {
            vertices.push(projector.project(axis.angle, *score)?);
        }

        if let Some(OrderedFloat(max_score)) =
            state.scores().iter().copied().map(OrderedFloat).max()
        {
            if max_score > SCORE_MAX {
                debug!(max_score, "scores extend past the outer grid ring");
            }
        }

        if style.show_vertex_markers {
            for vertex in &vertices {
                frame.vertex_markers.push(CirclePrimitive::new(
                    vertex.x,
                    vertex.y,
                    style.vertex_marker_radius_px,
                    style.polygon_stroke_width,
                    style.accent_color,
                    Some(style.accent_color),
                ));
            }
        }

        frame.series_polygon = Some(PolygonPrimitive::new(
            vertices,
            style.accent_color.with_alpha(style.polygon_fill_alpha),
            style.accent_color,
            style.polygon_stroke_width,
        ));
    }

    if style.clip_labels {
        frame.label_clip_radius = Some(scale.score_to_radius(geometry.label_offset_score + 1.0)?);
    }

    if let Some(title) = title {
        if !title.is_empty() {
            frame.title = Some(TextPrimitive::new(
                title,
                center.x,
                style.title_font_size_px * 2.0,
                style.title_font_size_px,
                style.title_color,
                TextHAlign::Center,
            ));
        }
    }

    Ok(frame)
}
