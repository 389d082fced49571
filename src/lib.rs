//! radar-rs: a radar ("spider") chart engine.
//!
//! This crate separates pure chart geometry from presentation: a
//! [`scene::SceneFrame`] is computed deterministically from chart state,
//! then handed to a pluggable [`render::Renderer`]. The reference backend
//! serializes the scene into a standalone SVG document suitable for file
//! export.

pub mod api;
pub mod core;
pub mod error;
pub mod export;
pub mod render;
pub mod scene;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
