//! Rendering layer
//!
//! - `sink`: the drawing interface everything renders through
//! - `canvas`: an RGBA buffer implementing it, saved as BMP
//! - `coords`: map-space to pixel-space conversion
//! - `projection`: the pseudo-3D column strip
//! - `scene`: composes a full frame

pub mod canvas;
pub mod coords;
pub mod projection;
pub mod scene;
pub mod sink;

pub use canvas::Canvas;
pub use coords::{to_pixel, AxisMapper, MapLayout};
pub use projection::{column_height, Column, ProjectionStrip};
pub use scene::{render_scene, FrameStats};
pub use sink::{Color, PixelSink};
