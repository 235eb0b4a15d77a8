//! In-memory RGBA canvas
//!
//! The pixel sink the binary draws into, persisted as an uncompressed BMP.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::bmp::BmpEncoder;
use image::{ImageEncoder, ImageResult, RgbaImage};

use super::sink::{rgba, Color, PixelSink};

/// An owned RGBA pixel buffer with a current draw color
pub struct Canvas {
    image: RgbaImage,
    draw_color: Color,
}

impl Canvas {
    /// Create a transparent black canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            draw_color: rgba(255, 255, 255, 255),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Read a pixel, `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image.get_pixel_checked(x, y).copied()
    }

    /// Fill every pixel with one color
    pub fn clear(&mut self, color: Color) {
        for pixel in self.image.pixels_mut() {
            *pixel = color;
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    #[inline]
    fn put(&mut self, x: i32, y: i32) {
        if x >= 0 && y >= 0 && (x as u32) < self.image.width() && (y as u32) < self.image.height() {
            self.image.put_pixel(x as u32, y as u32, self.draw_color);
        }
    }

    /// Encode the canvas as a BMP file
    pub fn save_bmp<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        write_bmp(&self.image, &mut writer)?;
        writer.flush()?;
        log::info!(
            "Wrote {}x{} image to {:?}",
            self.width(),
            self.height(),
            path.as_ref()
        );
        Ok(())
    }

    /// Encode the canvas as BMP bytes
    pub fn to_bmp_bytes(&self) -> ImageResult<Vec<u8>> {
        let mut buffer = Vec::new();
        write_bmp(&self.image, &mut buffer)?;
        Ok(buffer)
    }
}

fn write_bmp<W: Write>(image: &RgbaImage, writer: &mut W) -> ImageResult<()> {
    BmpEncoder::new(writer).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        image::ExtendedColorType::Rgba8,
    )
}

impl PixelSink for Canvas {
    fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    fn draw_point(&mut self, x: i32, y: i32) {
        self.put(x, y);
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x as i64 + w as i64).min(self.image.width() as i64) as i32;
        let y1 = (y as i64 + h as i64).min(self.image.height() as i64) as i32;
        for py in y0..y1 {
            for px in x0..x1 {
                self.put(px, py);
            }
        }
    }

    /// Bresenham line
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let dx = (x2 - x1).abs();
        let dy = -(y2 - y1).abs();
        let sx = if x1 < x2 { 1 } else { -1 };
        let sy = if y1 < y2 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x1, y1);

        loop {
            self.put(x, y);
            if x == x2 && y == y2 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}
