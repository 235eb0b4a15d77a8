//! Tilecaster - Entry Point
//!
//! Loads the render config, draws one frame and writes it to disk.

use anyhow::{Context, Result};

use tilecaster::config::DEFAULT_CONFIG_PATH;
use tilecaster::{render_scene, Canvas, RenderConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Tilecaster v{}", env!("CARGO_PKG_VERSION"));

    let result = run();
    if let Err(ref e) = result {
        log::error!("Render failed: {:#}", e);
    }
    result
}

fn run() -> Result<()> {
    let config = RenderConfig::load_or_default(DEFAULT_CONFIG_PATH)
        .with_context(|| format!("failed to load {}", DEFAULT_CONFIG_PATH))?;
    let map = config.grid_map().context("invalid map")?;
    log::info!(
        "Rendering {}x{} map from ({}, {}) heading {} rad",
        map.width(),
        map.height(),
        config.viewer.x,
        config.viewer.y,
        config.viewer.heading
    );

    let mut canvas = Canvas::new(config.image_width, config.image_height);
    let stats = render_scene(&mut canvas, &map, &config.viewer, &config)
        .context("failed to render frame")?;
    log::info!(
        "Cast {} rays: {} hits, {} out of range",
        stats.rays,
        stats.hits,
        stats.misses
    );
    if let (Some(nearest), Some(farthest)) = (stats.nearest, stats.farthest) {
        log::info!("Hit distances range from {:.2} to {:.2}", nearest, farthest);
    }

    canvas
        .save_bmp(&config.output)
        .with_context(|| format!("failed to write {}", config.output))?;
    Ok(())
}
