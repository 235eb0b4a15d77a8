//! Scene composition
//!
//! Draws the whole frame into a pixel sink: background, top-down map,
//! viewer marker, FOV rays and the projected column strip.

use super::coords::MapLayout;
use super::projection::{draw_columns, ProjectionStrip};
use super::sink::{rgb, Color, PixelSink};
use crate::config::RenderConfig;
use crate::entities::Viewer;
use crate::error::RenderError;
use crate::world::{cast_fov_with, FovRay, GridMap};

/// Summary of the rays cast for a frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameStats {
    pub rays: usize,
    pub hits: usize,
    pub misses: usize,
    /// Shortest hit distance, if any ray hit
    pub nearest: Option<f32>,
    /// Longest hit distance, if any ray hit
    pub farthest: Option<f32>,
}

impl FrameStats {
    fn from_rays(rays: &[FovRay]) -> Self {
        let mut stats = FrameStats {
            rays: rays.len(),
            ..Default::default()
        };
        for ray in rays {
            if !ray.sample.is_hit() {
                stats.misses += 1;
                continue;
            }
            let d = ray.sample.distance();
            stats.hits += 1;
            stats.nearest = Some(stats.nearest.map_or(d, |n| n.min(d)));
            stats.farthest = Some(stats.farthest.map_or(d, |f| f.max(d)));
        }
        stats
    }
}

/// Gradient color at (x, y): red follows the row, green the column
pub fn gradient_color(x: u32, y: u32, width: u32, height: u32) -> Color {
    let r = (255.0 * y as f32 / height as f32) as u8;
    let g = (255.0 * x as f32 / width as f32) as u8;
    rgb(r, g, 0)
}

/// Paint the gradient over the whole sink
pub fn draw_background<S: PixelSink>(sink: &mut S) {
    let (width, height) = sink.size();
    for y in 0..height {
        for x in 0..width {
            sink.set_draw_color(gradient_color(x, y, width, height));
            sink.draw_point(x as i32, y as i32);
        }
    }
}

/// Draw one solid block per wall tile
pub fn draw_map<S: PixelSink>(sink: &mut S, map: &GridMap, layout: &MapLayout, color: Color) {
    let (block_w, block_h) = layout.block_size();
    sink.set_draw_color(color);
    for (row, col, _) in map.walls() {
        let (x, y) = layout.to_pixel(col as f32, row as f32);
        sink.fill_rect(x, y, block_w, block_h);
    }
}

/// Draw the viewer as a square whose top-left corner is at its position
pub fn draw_marker<S: PixelSink>(
    sink: &mut S,
    viewer: &Viewer,
    layout: &MapLayout,
    size: u32,
    color: Color,
) {
    let (x, y) = layout.to_pixel(viewer.x, viewer.y);
    sink.set_draw_color(color);
    sink.fill_rect(x, y, size, size);
}

/// Render a full frame
pub fn render_scene<S: PixelSink>(
    sink: &mut S,
    map: &GridMap,
    viewer: &Viewer,
    config: &RenderConfig,
) -> Result<FrameStats, RenderError> {
    if !map.contains_point(viewer.x, viewer.y) {
        return Err(RenderError::ViewerOutOfBounds {
            x: viewer.x,
            y: viewer.y,
        });
    }

    let layout = MapLayout::new(map, config.map_view_width, config.map_view_height)?;
    let tracer = config.tracer()?;
    let palette = &config.palette;
    log::debug!(
        "{}x{} map, {:?} px blocks",
        map.width(),
        map.height(),
        layout.block_size()
    );

    draw_background(sink);
    draw_map(sink, map, &layout, palette.wall());
    draw_marker(sink, viewer, &layout, config.marker_size, palette.marker());

    sink.set_draw_color(palette.ray());
    let rays = cast_fov_with(map, viewer, &tracer, config.fov_columns, |x, y| {
        let (px, py) = layout.to_pixel(x, y);
        sink.draw_point(px, py);
    })?;

    let strip = ProjectionStrip {
        left: config.map_view_width as i32,
        image_height: sink.size().1,
    };
    draw_columns(sink, &strip, &rays, palette.column());

    let stats = FrameStats::from_rays(&rays);
    log::debug!("{:?}", stats);
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::sink::testing::{DrawCall, RecordingSink};
    use crate::render::Canvas;

    fn small_config() -> RenderConfig {
        RenderConfig {
            image_width: 96,
            image_height: 32,
            map_view_width: 32,
            map_view_height: 32,
            fov_columns: 64,
            marker_size: 2,
            ..RenderConfig::default()
        }
    }

    #[test]
    fn test_gradient_corners() {
        assert_eq!(gradient_color(0, 0, 1024, 512), rgb(0, 0, 0));
        assert_eq!(gradient_color(1023, 511, 1024, 512), rgb(254, 254, 0));
        assert_eq!(gradient_color(512, 256, 1024, 512), rgb(127, 127, 0));
    }

    #[test]
    fn test_map_blocks() {
        let map = GridMap::from_rows(&["# ", " #"]).unwrap();
        let layout = MapLayout::new(&map, 64, 64).unwrap();
        let mut sink = RecordingSink::new(64, 64);
        draw_map(&mut sink, &map, &layout, rgb(0, 255, 255));
        assert_eq!(sink.rects(), vec![(0, 0, 32, 32), (32, 32, 32, 32)]);
        assert_eq!(sink.calls[0], DrawCall::Color(rgb(0, 255, 255)));
    }

    #[test]
    fn test_marker_position() {
        let map = GridMap::demo().unwrap();
        let layout = MapLayout::new(&map, 512, 512).unwrap();
        let mut sink = RecordingSink::new(1024, 512);
        draw_marker(&mut sink, &Viewer::default(), &layout, 8, rgb(255, 255, 255));
        assert_eq!(sink.rects(), vec![(110, 75, 8, 8)]);
    }

    #[test]
    fn test_scene_draws_one_column_per_ray() {
        let config = small_config();
        let map = GridMap::demo().unwrap();
        let mut sink = RecordingSink::new(config.image_width, config.image_height);
        let stats = render_scene(&mut sink, &map, &config.viewer, &config).unwrap();

        assert_eq!(stats.rays, 64);
        assert_eq!(stats.hits + stats.misses, 64);
        let lines = sink.lines();
        assert_eq!(lines.len(), 64);
        assert!(lines.iter().enumerate().all(|(i, l)| l.0 == 32 + i as i32 && l.0 == l.2));
        assert!(sink.points() > 96 * 32);
    }

    #[test]
    fn test_scene_draw_order() {
        let config = small_config();
        let map = GridMap::demo().unwrap();
        let mut sink = RecordingSink::new(config.image_width, config.image_height);
        render_scene(&mut sink, &map, &config.viewer, &config).unwrap();

        let first_rect = sink.calls.iter().position(|c| matches!(c, DrawCall::Rect(..))).unwrap();
        let first_line = sink.calls.iter().position(|c| matches!(c, DrawCall::Line(..))).unwrap();
        let background = (config.image_width * config.image_height) as usize * 2;
        assert!(first_rect >= background);
        assert!(first_line > first_rect);
        assert_eq!(sink.rects().len(), map.walls().count() + 1);
    }

    #[test]
    fn test_viewer_outside_map_is_rejected() {
        let config = small_config();
        let mut sink = RecordingSink::new(96, 32);
        let viewer = Viewer::new(16.5, 3.0, 0.0);
        let err = render_scene(&mut sink, &GridMap::demo().unwrap(), &viewer, &config).unwrap_err();
        assert!(matches!(err, RenderError::ViewerOutOfBounds { .. }));
        assert!(sink.calls.is_empty());
    }

    #[test]
    fn test_zero_ray_step_fails_before_drawing() {
        let config = RenderConfig {
            ray_step: 0.0,
            ..small_config()
        };
        let mut sink = RecordingSink::new(96, 32);
        let err = render_scene(&mut sink, &GridMap::demo().unwrap(), &config.viewer, &config)
            .unwrap_err();
        assert!(matches!(err, RenderError::Geometry(_)));
        assert!(sink.calls.is_empty());
    }

    #[test]
    fn test_viewer_inside_wall_renders() {
        let config = small_config();
        let mut canvas = Canvas::new(96, 32);
        let viewer = Viewer::new(0.5, 0.5, 0.0);
        let stats = render_scene(&mut canvas, &GridMap::demo().unwrap(), &viewer, &config).unwrap();
        assert_eq!(stats.hits, 64);
        assert_eq!(stats.nearest, Some(0.0));
    }

    #[test]
    fn test_full_frame_on_canvas() {
        let config = RenderConfig::default();
        let map = GridMap::demo().unwrap();
        let mut canvas = Canvas::new(config.image_width, config.image_height);
        let stats = render_scene(&mut canvas, &map, &config.viewer, &config).unwrap();
        assert_eq!(stats.rays, 512);
        assert_eq!(stats.misses, 0);
        let (nearest, farthest) = (stats.nearest.unwrap(), stats.farthest.unwrap());
        assert!(nearest > 0.0 && nearest <= farthest && farthest < 20.0);

        // top-left wall block
        assert_eq!(canvas.pixel(5, 5), Some(rgb(0, 255, 255)));
        // viewer marker
        assert_eq!(canvas.pixel(112, 77), Some(rgb(255, 255, 255)));
        // center column crosses the horizon line
        assert_eq!(canvas.pixel(512 + 256, 256), Some(rgb(255, 255, 255)));
        // far above any column the gradient shows through
        assert_eq!(canvas.pixel(1000, 0), Some(gradient_color(1000, 0, 1024, 512)));
    }
}
