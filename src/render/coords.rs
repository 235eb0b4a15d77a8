//! Map-space to pixel-space conversion
//!
//! Block sizes use integer division, so a map view that is not a multiple of
//! the grid size leaves an unused strip on the right/bottom edge.

use crate::error::RenderError;
use crate::world::GridMap;

/// Pixel coordinate of `map_coordinate` on an axis of `axis_blocks` tiles
/// drawn into `region_px` pixels
///
/// Returns 0 for an axis without tiles.
pub fn to_pixel(axis_blocks: usize, region_px: u32, map_coordinate: f32) -> i32 {
    let block = (region_px as usize).checked_div(axis_blocks).unwrap_or(0);
    (map_coordinate * block as f32) as i32
}

/// Converter for a single axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisMapper {
    blocks: usize,
    region_px: u32,
    block_px: u32,
}

impl AxisMapper {
    pub fn new(blocks: usize, region_px: u32) -> Result<Self, RenderError> {
        let block_px = (region_px as usize).checked_div(blocks).unwrap_or(0) as u32;
        if block_px == 0 {
            return Err(RenderError::Geometry(format!(
                "{region_px} px cannot hold {blocks} tiles"
            )));
        }
        if region_px as usize % blocks != 0 {
            log::warn!(
                "{} px is not a multiple of {} tiles, {} px unused",
                region_px,
                blocks,
                region_px - block_px * blocks as u32
            );
        }
        Ok(Self {
            blocks,
            region_px,
            block_px,
        })
    }

    /// Size of one tile in pixels
    pub fn block_px(&self) -> u32 {
        self.block_px
    }

    pub fn to_pixel(&self, map_coordinate: f32) -> i32 {
        to_pixel(self.blocks, self.region_px, map_coordinate)
    }
}

/// Pixel layout of the top-down map view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapLayout {
    pub x: AxisMapper,
    pub y: AxisMapper,
}

impl MapLayout {
    /// Horizontal axis follows the map width, vertical the map height
    pub fn new(map: &GridMap, view_width: u32, view_height: u32) -> Result<Self, RenderError> {
        Ok(Self {
            x: AxisMapper::new(map.width(), view_width)?,
            y: AxisMapper::new(map.height(), view_height)?,
        })
    }

    /// Pixel position of a map-space point
    pub fn to_pixel(&self, x: f32, y: f32) -> (i32, i32) {
        (self.x.to_pixel(x), self.y.to_pixel(y))
    }

    /// Pixel size of one tile
    pub fn block_size(&self) -> (u32, u32) {
        (self.x.block_px(), self.y.block_px())
    }
}
