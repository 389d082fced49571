use crate::core::angle::axis_angle;
use crate::error::ChartResult;

/// One labeled radial direction on the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub label: String,
    pub angle: f64,
}

impl Axis {
    #[must_use]
    pub fn new(label: impl Into<String>, angle: f64) -> Self {
        Self {
            label: label.into(),
            angle,
        }
    }
}

/// Assigns evenly spaced angles to an ordered list of labels.
///
/// Label order is significant: it fixes the polygon shape. Duplicate labels
/// are permitted and simply overlap visually.
pub fn layout_axes(labels: &[String]) -> ChartResult<Vec<Axis>> {
    let count = labels.len();
    labels
        .iter()
        .enumerate()
        .map(|(index, label)| Ok(Axis::new(label.clone(), axis_angle(index, count)?)))
        .collect()
}
