//! Field of view sweep
//!
//! Casts one ray per screen column across the viewer's view cone.

use super::map::GridMap;
use super::ray::{RaySample, RayTracer};
use crate::entities::Viewer;
use crate::error::MapError;

/// Default horizontal resolution of the projection
pub const DEFAULT_COLUMNS: usize = 512;

/// One ray of the sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FovRay {
    /// Column index, 0 at the start (leftmost) edge of the cone
    pub index: usize,
    pub angle: f32,
    pub sample: RaySample,
}

/// Angles of each column, `start + i * fov / columns` for `i in 0..columns`
///
/// The count is fixed by `columns` and does not depend on the fov.
pub fn sweep_angles(viewer: &Viewer, columns: usize) -> impl Iterator<Item = (usize, f32)> {
    let start = viewer.start_angle();
    let step = viewer.fov / columns as f32;
    (0..columns).map(move |i| (i, start + i as f32 * step))
}

/// Trace every column of the view cone
pub fn cast_fov(
    map: &GridMap,
    viewer: &Viewer,
    tracer: &RayTracer,
    columns: usize,
) -> Result<Vec<FovRay>, MapError> {
    cast_fov_with(map, viewer, tracer, columns, |_, _| {})
}

/// Trace every column, handing each empty sample point to `visit`
pub fn cast_fov_with<F>(
    map: &GridMap,
    viewer: &Viewer,
    tracer: &RayTracer,
    columns: usize,
    mut visit: F,
) -> Result<Vec<FovRay>, MapError>
where
    F: FnMut(f32, f32),
{
    let mut rays = Vec::with_capacity(columns);
    for (index, angle) in sweep_angles(viewer, columns) {
        let sample = tracer.trace_with(map, viewer.x, viewer.y, angle, &mut visit)?;
        rays.push(FovRay { index, angle, sample });
    }
    Ok(rays)
}
