use crate::core::scale::SCORE_MAX;
use crate::error::{ChartError, ChartResult};

/// Current axis labels and scores for one chart instance.
///
/// Both sequences are positionally paired and length-checked at
/// construction; the state is replaced wholesale on every submission and
/// never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartState {
    axes: Vec<String>,
    scores: Vec<f64>,
}

impl ChartState {
    pub fn new(axes: Vec<String>, scores: Vec<f64>) -> ChartResult<Self> {
        if axes.len() != scores.len() {
            return Err(ChartError::AxisScoreLengthMismatch {
                axes: axes.len(),
                scores: scores.len(),
            });
        }

        for score in &scores {
            if !score.is_finite() {
                return Err(ChartError::InvalidData("score must be finite".to_owned()));
            }
        }

        Ok(Self { axes, scores })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            axes: Vec::new(),
            scores: Vec::new(),
        }
    }

    /// Startup default: every given axis selected at the maximum score.
    #[must_use]
    pub fn full_marks(axes: Vec<String>) -> Self {
        let scores = vec![SCORE_MAX; axes.len()];
        Self { axes, scores }
    }

    #[must_use]
    pub fn axes(&self) -> &[String] {
        &self.axes
    }

    #[must_use]
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }
}
