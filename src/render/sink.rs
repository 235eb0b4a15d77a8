//! Pixel sink abstraction
//!
//! Everything that draws goes through this trait so scenes can be rendered
//! into an image buffer or into a recorder in tests.

use image::Rgba;

/// RGBA draw color
pub type Color = Rgba<u8>;

/// Build an opaque color
pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Rgba([r, g, b, 255])
}

/// Build a color with alpha
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
    Rgba([r, g, b, a])
}

/// A 2D drawing target with a current draw color
///
/// Coordinates are signed; anything outside the target is clipped.
pub trait PixelSink {
    /// Size of the target in pixels
    fn size(&self) -> (u32, u32);

    fn set_draw_color(&mut self, color: Color);

    fn draw_point(&mut self, x: i32, y: i32);

    /// Fill a `w` x `h` rectangle with its top-left corner at (x, y)
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32);

    /// Draw a line including both end points
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);
}
