use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::scene::primitives::{CirclePrimitive, LinePrimitive, PolygonPrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Fully recomputed from chart state on every render; draw order is
/// grid rings, axis spokes, labels, data polygon, vertex markers, title.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFrame {
    pub viewport: Viewport,
    pub grid_rings: Vec<CirclePrimitive>,
    pub axis_spokes: Vec<LinePrimitive>,
    pub axis_labels: Vec<TextPrimitive>,
    pub series_polygon: Option<PolygonPrimitive>,
    pub vertex_markers: Vec<CirclePrimitive>,
    pub title: Option<TextPrimitive>,
    /// Radius of the circle labels are clipped to, when clipping is on.
    pub label_clip_radius: Option<f64>,
}

impl SceneFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            grid_rings: Vec::new(),
            axis_spokes: Vec::new(),
            axis_labels: Vec::new(),
            series_polygon: None,
            vertex_markers: Vec::new(),
            title: None,
            label_clip_radius: None,
        }
    }

    #[must_use]
    pub fn with_ring(mut self, ring: CirclePrimitive) -> Self {
        self.grid_rings.push(ring);
        self
    }

    #[must_use]
    pub fn with_spoke(mut self, spoke: LinePrimitive) -> Self {
        self.axis_spokes.push(spoke);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: TextPrimitive) -> Self {
        self.axis_labels.push(label);
        self
    }

    #[must_use]
    pub fn with_polygon(mut self, polygon: PolygonPrimitive) -> Self {
        self.series_polygon = Some(polygon);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for ring in &self.grid_rings {
            ring.validate()?;
        }
        for spoke in &self.axis_spokes {
            spoke.validate()?;
        }
        for label in &self.axis_labels {
            label.validate()?;
        }
        if let Some(polygon) = &self.series_polygon {
            polygon.validate()?;
        }
        for marker in &self.vertex_markers {
            marker.validate()?;
        }
        if let Some(title) = &self.title {
            title.validate()?;
        }
        if let Some(clip_radius) = self.label_clip_radius {
            if !clip_radius.is_finite() || clip_radius <= 0.0 {
                return Err(ChartError::InvalidData(
                    "label clip radius must be finite and > 0".to_owned(),
                ));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grid_rings.is_empty()
            && self.axis_spokes.is_empty()
            && self.axis_labels.is_empty()
            && self.series_polygon.is_none()
            && self.vertex_markers.is_empty()
            && self.title.is_none()
    }
}
