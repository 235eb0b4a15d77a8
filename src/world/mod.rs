//! World module
//!
//! The tile grid and the rays cast through it.

pub mod fov;
pub mod map;
pub mod ray;
pub mod tile;

pub use fov::{cast_fov, cast_fov_with, sweep_angles, FovRay};
pub use map::GridMap;
pub use ray::{RaySample, RayTracer};
pub use tile::Tile;
