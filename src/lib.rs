//! Tilecaster - a one-shot grid raycaster
//!
//! Renders a top-down view of a tile map next to a pseudo-3D projection
//! of what a viewer standing in it sees, and writes the frame to a BMP.

pub mod config;
pub mod entities;
pub mod error;
pub mod render;
pub mod world;

// Re-export commonly used types
pub use config::RenderConfig;
pub use entities::Viewer;
pub use error::{ConfigError, MapError, RenderError};
pub use render::{render_scene, Canvas, FrameStats};
pub use world::GridMap;
