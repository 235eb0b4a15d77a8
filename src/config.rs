//! Render configuration
//!
//! Every knob has a built-in default; a RON file can override any subset.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entities::Viewer;
use crate::error::{ConfigError, MapError, RenderError};
use crate::render::sink::{rgb, Color};
use crate::world::fov::DEFAULT_COLUMNS;
use crate::world::ray::{DEFAULT_MAX_RANGE, DEFAULT_STEP};
use crate::world::{GridMap, RayTracer};

/// Where the binary looks for overrides
pub const DEFAULT_CONFIG_PATH: &str = "assets/render.ron";

/// Colors used by the scene, as RGB triples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub wall: [u8; 3],
    pub ray: [u8; 3],
    pub marker: [u8; 3],
    pub column: [u8; 3],
}

impl Palette {
    pub fn wall(&self) -> Color {
        to_color(self.wall)
    }

    pub fn ray(&self) -> Color {
        to_color(self.ray)
    }

    pub fn marker(&self) -> Color {
        to_color(self.marker)
    }

    pub fn column(&self) -> Color {
        to_color(self.column)
    }
}

fn to_color([r, g, b]: [u8; 3]) -> Color {
    rgb(r, g, b)
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            wall: [0, 255, 255],
            ray: [255, 255, 255],
            marker: [255, 255, 255],
            column: [255, 255, 255],
        }
    }
}

/// Everything needed to render one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub image_width: u32,
    pub image_height: u32,
    /// Size of the top-down map view in the left part of the image
    pub map_view_width: u32,
    pub map_view_height: u32,
    pub viewer: Viewer,
    pub ray_step: f32,
    pub ray_max_range: f32,
    /// Number of projected columns, independent of the fov
    pub fov_columns: usize,
    /// Side of the square viewer marker, in pixels
    pub marker_size: u32,
    pub palette: Palette,
    /// Map rows overriding the built-in level
    pub map: Option<Vec<String>>,
    pub output: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_width: 1024,
            image_height: 512,
            map_view_width: 512,
            map_view_height: 512,
            viewer: Viewer::default(),
            ray_step: DEFAULT_STEP,
            ray_max_range: DEFAULT_MAX_RANGE,
            fov_columns: DEFAULT_COLUMNS,
            marker_size: 8,
            palette: Palette::default(),
            map: None,
            output: "output.bmp".to_string(),
        }
    }
}

impl RenderConfig {
    /// Parse a RON config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: RenderConfig = ron::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to the defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            log::info!("Loading render config from {:?}", path);
            Self::load(path)
        } else {
            log::info!("No config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Write this config as pretty RON
    pub fn export<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let text = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, text)?;
        Ok(())
    }

    /// Reject values that make rendering meaningless
    ///
    /// Values that only degrade the picture are logged and accepted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "image size {}x{}",
                self.image_width, self.image_height
            )));
        }
        if self.map_view_width == 0 || self.map_view_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "map view size {}x{}",
                self.map_view_width, self.map_view_height
            )));
        }
        if !(self.ray_step > 0.0) || !(self.ray_max_range > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "ray step {} and range {} must be positive",
                self.ray_step, self.ray_max_range
            )));
        }
        if self.fov_columns == 0 {
            return Err(ConfigError::Invalid("fov_columns must be at least 1".to_string()));
        }
        if !(self.viewer.fov > 0.0 && self.viewer.fov <= std::f32::consts::TAU) {
            return Err(ConfigError::Invalid(format!("fov {} outside (0, 2pi]", self.viewer.fov)));
        }

        if self.map_view_width as usize + self.fov_columns > self.image_width as usize {
            log::warn!(
                "{} columns right of a {} px map view overflow a {} px image",
                self.fov_columns,
                self.map_view_width,
                self.image_width
            );
        }
        if self.map_view_height > self.image_height || self.map_view_width > self.image_width {
            log::warn!("map view is larger than the image and will be clipped");
        }
        Ok(())
    }

    /// The map to render: the override rows if any, else the demo level
    pub fn grid_map(&self) -> Result<GridMap, MapError> {
        match &self.map {
            Some(rows) => GridMap::from_rows(rows.as_slice()),
            None => GridMap::demo(),
        }
    }

    pub fn tracer(&self) -> Result<RayTracer, RenderError> {
        RayTracer::new(self.ray_step, self.ray_max_range)
    }
}
