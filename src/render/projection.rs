//! Pseudo-3D column projection
//!
//! Each FOV ray becomes one vertical line whose height is inversely
//! proportional to the hit distance. No fisheye correction is applied.

use super::sink::{Color, PixelSink};
use crate::world::FovRay;

/// Column height for a hit `distance` on an image `image_height` px tall
///
/// A zero (or negative) distance, i.e. a viewer standing inside a wall,
/// yields the distance itself truncated, which is a zero-height column.
pub fn column_height(distance: f32, image_height: u32) -> i32 {
    if distance > 0.0 {
        (image_height as f32 / distance) as i32
    } else {
        distance as i32
    }
}

/// Where the column strip sits in the output image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionStrip {
    /// x of the first column; the strip starts right of the map view
    pub left: i32,
    pub image_height: u32,
}

/// One vertical line of the projection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub x: i32,
    pub top: i32,
    pub height: i32,
}

impl Column {
    /// Geometry of the column for ray `index` at `distance`
    pub fn new(strip: &ProjectionStrip, index: usize, distance: f32) -> Self {
        let height = column_height(distance, strip.image_height);
        Self {
            x: strip.left + index as i32,
            top: strip.image_height as i32 / 2 - height / 2,
            height,
        }
    }

    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }
}

/// Draw one column per ray and return their geometry
pub fn draw_columns<S: PixelSink>(
    sink: &mut S,
    strip: &ProjectionStrip,
    rays: &[FovRay],
    color: Color,
) -> Vec<Column> {
    sink.set_draw_color(color);
    rays.iter()
        .map(|ray| {
            let column = Column::new(strip, ray.index, ray.sample.distance());
            sink.draw_line(column.x, column.top, column.x, column.bottom());
            column
        })
        .collect()
}
