use std::f64::consts::{FRAC_PI_2, TAU};

use crate::core::scale::RadialScale;
use crate::core::types::Point;
use crate::error::{ChartError, ChartResult};

/// Angle of axis `index` out of `count` evenly spaced axes.
///
/// Axis 0 points straight up; subsequent axes proceed clockwise in screen
/// coordinates.
pub fn axis_angle(index: usize, count: usize) -> ChartResult<f64> {
    if count == 0 {
        return Err(ChartError::InvalidData(
            "axis count must be > 0".to_owned(),
        ));
    }
    if index >= count {
        return Err(ChartError::InvalidData(format!(
            "axis index {index} out of range for {count} axes"
        )));
    }

    Ok(FRAC_PI_2 + TAU * index as f64 / count as f64)
}

/// Polar-to-Cartesian projection around a fixed pole.
///
/// The y axis grows downward, so the sine term is subtracted: a score on the
/// `π/2` axis lands straight above the pole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarProjector {
    center: Point,
    scale: RadialScale,
}

impl PolarProjector {
    #[must_use]
    pub fn new(center: Point, scale: RadialScale) -> Self {
        Self { center, scale }
    }

    #[must_use]
    pub fn center(self) -> Point {
        self.center
    }

    #[must_use]
    pub fn scale(self) -> RadialScale {
        self.scale
    }

    pub fn project(self, angle: f64, score: f64) -> ChartResult<Point> {
        if !angle.is_finite() {
            return Err(ChartError::InvalidData("angle must be finite".to_owned()));
        }

        let radius = self.scale.score_to_radius(score)?;
        Ok(Point::new(
            self.center.x + angle.cos() * radius,
            self.center.y - angle.sin() * radius,
        ))
    }
}
