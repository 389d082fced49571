use crate::error::{ChartError, ChartResult};

/// Lower bound of the score domain.
pub const SCORE_MIN: f64 = 0.0;
/// Upper bound of the score domain; maps onto the outer grid ring.
pub const SCORE_MAX: f64 = 10.0;

/// Exact linear map from the score domain `[0, 10]` to pixel radius `[0, R]`.
///
/// Scores outside the domain are not clamped; they extrapolate linearly past
/// the outer ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialScale {
    max_radius_px: f64,
}

impl RadialScale {
    pub fn new(max_radius_px: f64) -> ChartResult<Self> {
        if !max_radius_px.is_finite() || max_radius_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "chart radius must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self { max_radius_px })
    }

    #[must_use]
    pub fn max_radius_px(self) -> f64 {
        self.max_radius_px
    }

    pub fn score_to_radius(self, score: f64) -> ChartResult<f64> {
        if !score.is_finite() {
            return Err(ChartError::InvalidData("score must be finite".to_owned()));
        }

        Ok(self.max_radius_px * score / SCORE_MAX)
    }

    pub fn radius_to_score(self, radius_px: f64) -> ChartResult<f64> {
        if !radius_px.is_finite() {
            return Err(ChartError::InvalidData("radius must be finite".to_owned()));
        }

        Ok(radius_px / self.max_radius_px * SCORE_MAX)
    }
}
