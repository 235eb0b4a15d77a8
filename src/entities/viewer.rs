//! The viewer the frame is rendered from

use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_3;

/// Default horizontal field of view (60 degrees)
pub const DEFAULT_FOV: f32 = FRAC_PI_3;

/// Position and heading in map space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewer {
    pub x: f32,
    pub y: f32,
    /// Heading in radians, 0 looks along +x and angles grow towards +y
    pub heading: f32,
    /// Total angular width of the view cone, in radians
    pub fov: f32,
}

impl Viewer {
    pub fn new(x: f32, y: f32, heading: f32) -> Self {
        Self {
            x,
            y,
            heading,
            fov: DEFAULT_FOV,
        }
    }

    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }

    /// Angle of the leftmost edge of the view cone
    pub fn start_angle(&self) -> f32 {
        self.heading - self.fov / 2.0
    }

    /// Angle of the rightmost edge of the view cone
    pub fn end_angle(&self) -> f32 {
        self.heading + self.fov / 2.0
    }
}

impl Default for Viewer {
    /// The fixed demo pose
    fn default() -> Self {
        Self::new(3.456, 2.345, 1.523)
    }
}
