mod builder;
mod frame;
mod primitives;
mod style;

pub use builder::{ChartGeometry, build_scene};
pub use frame::SceneFrame;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, PolygonPrimitive, TextHAlign, TextPrimitive,
};
pub use style::SceneStyle;
