use serde::{Deserialize, Serialize};

use crate::core::{SCORE_MAX, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::scene::{ChartGeometry, SceneStyle};

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can persist/load chart setup without
/// inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    /// Pixel radius of the outer grid ring.
    pub max_radius_px: f64,
    /// Score-domain offset of label anchors past the outer ring.
    #[serde(default = "default_label_offset_score")]
    pub label_offset_score: f64,
    #[serde(default)]
    pub style: SceneStyle,
}

fn default_label_offset_score() -> f64 {
    12.0
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport, max_radius_px: f64) -> Self {
        Self {
            viewport,
            max_radius_px,
            label_offset_score: default_label_offset_score(),
            style: SceneStyle::default(),
        }
    }

    /// The stock 800×800 canvas with a 250 px outer ring.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Viewport::new(800, 800), 250.0)
    }

    #[must_use]
    pub fn with_label_offset_score(mut self, label_offset_score: f64) -> Self {
        self.label_offset_score = label_offset_score;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: SceneStyle) -> Self {
        self.style = style;
        self
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
        self.style.validate()
    }

    #[must_use]
    pub(super) fn geometry(self) -> ChartGeometry {
        ChartGeometry::new(self.viewport, self.max_radius_px, self.label_offset_score)
    }
}
