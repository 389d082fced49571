pub mod angle;
pub mod axis;
pub mod primitives;
pub mod scale;
pub mod state;
pub mod types;

pub use angle::{PolarProjector, axis_angle};
pub use axis::{Axis, layout_axes};
pub use primitives::decimal_to_f64;
pub use scale::{RadialScale, SCORE_MAX, SCORE_MIN};
pub use state::ChartState;
pub use types::{Point, Viewport};
