//! Shot chart rasterizer
//!
//! Draws the court template and the made/missed point sets into an RGB
//! image. One court unit maps to a fixed number of pixels on both axes, so
//! equal aspect is preserved by construction. Image rows grow downward while
//! court y grows away from the baseline, so rows are flipped.

use super::court::{CourtPrimitive, CourtTemplate};
use super::event::ShotEvent;
use image::{Rgb, RgbImage};
use std::path::Path;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const MADE_COLOR: Rgb<u8> = Rgb([34, 139, 34]);
const MADE_OUTLINE: Rgb<u8> = Rgb([0, 0, 0]);
const MISSED_COLOR: Rgb<u8> = Rgb([220, 20, 60]);
const MADE_MARKER_RADIUS: i32 = 4;
const MISSED_MARKER_ARM: i32 = 4;

#[derive(Debug)]
pub enum RenderError {
    Io(std::io::Error),
    Image(image::ImageError),
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::Io(err)
    }
}

impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        RenderError::Image(err)
    }
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Io(e) => write!(f, "IO error: {}", e),
            RenderError::Image(e) => write!(f, "Image error: {}", e),
        }
    }
}

impl std::error::Error for RenderError {}

#[derive(Debug, Clone, Copy)]
pub struct RenderStyle {
    /// Pixels per court unit, applied to both axes.
    pub scale: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self { scale: 2.0 }
    }
}

pub struct ChartRenderer {
    template: CourtTemplate,
    scale: f64,
    width: u32,
    height: u32,
}

impl ChartRenderer {
    pub fn new(template: CourtTemplate, style: RenderStyle) -> Self {
        let viewport = template.viewport;
        let width = ((viewport.x_max - viewport.x_min) * style.scale).ceil() as u32 + 1;
        let height = ((viewport.y_max - viewport.y_min) * style.scale).ceil() as u32 + 1;
        Self { template, scale: style.scale, width, height }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Rasterize the court plus both point sets. Missed markers draw before
    /// made markers so the makes stay visible where the two overlap.
    pub fn render(&self, made: &[ShotEvent], missed: &[ShotEvent]) -> RgbImage {
        let mut img = RgbImage::from_pixel(self.width, self.height, BACKGROUND);

        for primitive in &self.template.primitives {
            self.draw_primitive(&mut img, primitive);
        }

        for shot in missed {
            self.draw_missed_marker(&mut img, shot.x, shot.y);
        }
        for shot in made {
            self.draw_made_marker(&mut img, shot.x, shot.y);
        }

        img
    }

    /// Render and save as PNG. Parent directories are created on demand.
    pub fn render_to_file(
        &self,
        made: &[ShotEvent],
        missed: &[ShotEvent],
        path: impl AsRef<Path>,
    ) -> Result<(), RenderError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let img = self.render(made, missed);
        img.save(path)?;
        log::info!("🖼️ Saved shot chart to: {}", path.display());
        Ok(())
    }

    fn to_pixel(&self, x: f64, y: f64) -> (i32, i32) {
        let px = (x - self.template.viewport.x_min) * self.scale;
        let py = (self.template.viewport.y_max - y) * self.scale;
        (px.round() as i32, py.round() as i32)
    }

    fn draw_primitive(&self, img: &mut RgbImage, primitive: &CourtPrimitive) {
        let color = self.template.style.color;
        let lw = self.template.style.line_width.max(1) as i32;

        match *primitive {
            CourtPrimitive::Circle { cx, cy, radius } => {
                self.draw_arc(img, cx, cy, radius, 0.0, 360.0, color, lw);
            }
            CourtPrimitive::Arc { cx, cy, radius, start_deg, end_deg } => {
                self.draw_arc(img, cx, cy, radius, start_deg, end_deg, color, lw);
            }
            CourtPrimitive::Rect { x, y, width, height } => {
                let (x0, y0) = self.to_pixel(x, y);
                let (x1, y1) = self.to_pixel(x + width, y + height);
                if width == 0.0 || height == 0.0 {
                    // degenerate rectangle, draws as a single segment
                    draw_line(img, x0, y0, x1, y1, color, lw);
                } else {
                    draw_line(img, x0, y0, x1, y0, color, lw);
                    draw_line(img, x1, y0, x1, y1, color, lw);
                    draw_line(img, x1, y1, x0, y1, color, lw);
                    draw_line(img, x0, y1, x0, y0, color, lw);
                }
            }
        }
    }

    /// Plot an arc as densely sampled points. The angular step keeps
    /// consecutive samples under half a pixel apart so the outline has no
    /// gaps.
    fn draw_arc(
        &self,
        img: &mut RgbImage,
        cx: f64,
        cy: f64,
        radius: f64,
        start_deg: f64,
        end_deg: f64,
        color: Rgb<u8>,
        lw: i32,
    ) {
        let radius_px = (radius * self.scale).max(1.0);
        let sweep = (end_deg - start_deg).to_radians();
        let steps = ((sweep.abs() * radius_px) * 2.0).ceil().max(8.0) as usize;

        for i in 0..=steps {
            let theta = start_deg.to_radians() + sweep * (i as f64 / steps as f64);
            let x = cx + radius * theta.cos();
            let y = cy + radius * theta.sin();
            let (px, py) = self.to_pixel(x, y);
            plot(img, px, py, color, lw);
        }
    }

    fn draw_made_marker(&self, img: &mut RgbImage, x: f64, y: f64) {
        let (px, py) = self.to_pixel(x, y);
        fill_disc(img, px, py, MADE_MARKER_RADIUS + 1, MADE_OUTLINE);
        fill_disc(img, px, py, MADE_MARKER_RADIUS, MADE_COLOR);
    }

    fn draw_missed_marker(&self, img: &mut RgbImage, x: f64, y: f64) {
        let (px, py) = self.to_pixel(x, y);
        let arm = MISSED_MARKER_ARM;
        draw_line(img, px - arm, py - arm, px + arm, py + arm, MISSED_COLOR, 1);
        draw_line(img, px - arm, py + arm, px + arm, py - arm, MISSED_COLOR, 1);
    }
}

/// Put a line-width sized square of pixels, skipping anything off-image.
fn plot(img: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, lw: i32) {
    let half = (lw - 1) / 2;
    for dy in -half..(lw - half) {
        for dx in -half..(lw - half) {
            let px = x + dx;
            let py = y + dy;
            if px >= 0 && px < img.width() as i32 && py >= 0 && py < img.height() as i32 {
                img.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

/// Draw a line using Bresenham's algorithm.
fn draw_line(img: &mut RgbImage, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb<u8>, lw: i32) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let mut x = x0;
    let mut y = y0;

    loop {
        plot(img, x, y, color, lw);

        if x == x1 && y == y1 {
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

fn fill_disc(img: &mut RgbImage, cx: i32, cy: i32, radius: i32, color: Rgb<u8>) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                plot(img, cx + dx, cy + dy, color, 1);
            }
        }
    }
}
