//! Ray marching against the tile grid
//!
//! Rays advance in fixed steps from the origin and stop at the first sample
//! that lands on a wall tile. Thin features narrower than the step can be
//! skipped; the grids this renders are coarse enough for that not to matter.

use super::map::GridMap;
use super::tile::Tile;
use crate::error::{MapError, RenderError};

/// Distance between two samples along a ray, in tiles
pub const DEFAULT_STEP: f32 = 0.05;

/// Farthest distance a ray travels before giving up, in tiles
pub const DEFAULT_MAX_RANGE: f32 = 20.0;

/// Outcome of casting one ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RaySample {
    /// The ray stopped on a wall
    Hit {
        distance: f32,
        row: usize,
        col: usize,
        tile: Tile,
    },
    /// No wall within range
    MaxRange { range: f32 },
}

impl RaySample {
    /// Distance travelled; a miss reports the full range
    pub fn distance(&self) -> f32 {
        match self {
            RaySample::Hit { distance, .. } => *distance,
            RaySample::MaxRange { range } => *range,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, RaySample::Hit { .. })
    }

    /// Tile coordinate (row, col) the ray stopped on, if any
    pub fn hit_tile(&self) -> Option<(usize, usize)> {
        match self {
            RaySample::Hit { row, col, .. } => Some((*row, *col)),
            RaySample::MaxRange { .. } => None,
        }
    }
}

/// Fixed-step ray marcher
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayTracer {
    step: f32,
    max_range: f32,
}

impl RayTracer {
    /// Both `step` and `max_range` must be finite and positive
    pub fn new(step: f32, max_range: f32) -> Result<Self, RenderError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(step) || !valid(max_range) {
            return Err(RenderError::Geometry(format!(
                "ray step {step} and range {max_range} must be finite and positive"
            )));
        }
        Ok(Self { step, max_range })
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn max_range(&self) -> f32 {
        self.max_range
    }

    /// Index of the last sample that can fall short of `max_range`
    fn last_sample(&self) -> u32 {
        // saturating cast; the loop below still stops on range
        (self.max_range / self.step).ceil() as u32
    }

    /// Cast a ray from (x, y) at `angle` radians
    pub fn trace(&self, map: &GridMap, x: f32, y: f32, angle: f32) -> Result<RaySample, MapError> {
        self.trace_with(map, x, y, angle, |_, _| {})
    }

    /// Cast a ray, handing every empty sample point to `visit`
    ///
    /// Sample `i` sits at distance `i * step`. Any sample outside the map is
    /// an error rather than a miss.
    pub fn trace_with<F>(
        &self,
        map: &GridMap,
        x: f32,
        y: f32,
        angle: f32,
        mut visit: F,
    ) -> Result<RaySample, MapError>
    where
        F: FnMut(f32, f32),
    {
        let (sin, cos) = angle.sin_cos();

        for i in 0..=self.last_sample() {
            let c = i as f32 * self.step;
            if c >= self.max_range {
                break;
            }

            let sx = x + c * cos;
            let sy = y + c * sin;
            let tile = map.tile_at_point(sx, sy)?;
            if tile.is_wall() {
                return Ok(RaySample::Hit {
                    distance: c,
                    row: sy as usize,
                    col: sx as usize,
                    tile,
                });
            }
            visit(sx, sy);
        }

        Ok(RaySample::MaxRange { range: self.max_range })
    }
}

impl Default for RayTracer {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            max_range: DEFAULT_MAX_RANGE,
        }
    }
}
