use std::path::Path;

use glam::Vec2;
use image::{Rgb as Pixel, RgbImage};
use sketchbook::prelude::*;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Rasterization settings.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output pixels per surface pixel.
    pub scale: u32,
    /// Outline thickness in surface pixels.
    pub stroke_width: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: 1,
            stroke_width: 1.0,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.max(1);
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: f32) -> Self {
        self.stroke_width = stroke_width.max(0.0);
        self
    }
}

/// Rasterize the current frame of `canvas`. Text commands are skipped.
pub fn rasterize(canvas: &Canvas, config: &RenderConfig) -> anyhow::Result<RgbImage> {
    let (w, h) = canvas
        .surface_size()
        .ok_or_else(|| anyhow::anyhow!("canvas has no surface"))?;
    let scale = config.scale.max(1);
    let mut img = RgbImage::new(w * scale, h * scale);

    for command in canvas.commands() {
        match command {
            DrawCommand::Background(color) => {
                for p in img.pixels_mut() {
                    *p = Pixel(color.to_array());
                }
            }
            DrawCommand::Ellipse {
                center,
                diameter,
                fill,
                stroke,
            } => draw_ellipse(
                &mut img,
                *center * scale as f32,
                *diameter * scale as f32,
                *fill,
                *stroke,
                config.stroke_width * scale as f32,
            ),
            DrawCommand::Text { text, .. } => {
                debug!("Skipping text '{}'.", text);
            }
        }
    }

    Ok(img)
}

/// Rasterize `canvas` and write it as PNG to `path`.
pub fn render_canvas_to_png(
    canvas: &Canvas,
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let img = rasterize(canvas, config)?;
    img.save(path.as_ref())?;
    info!("Wrote {}", path.as_ref().display());
    Ok(())
}

fn draw_ellipse(
    img: &mut RgbImage,
    center: Vec2,
    diameter: Vec2,
    fill: Option<Rgb>,
    stroke: Option<Rgb>,
    stroke_width: f32,
) {
    let half_stroke = if stroke.is_some() { stroke_width * 0.5 } else { 0.0 };
    let outer = diameter * 0.5 + Vec2::splat(half_stroke);
    let inner = (diameter * 0.5 - Vec2::splat(half_stroke)).max(Vec2::ZERO);
    if outer.x <= 0.0 || outer.y <= 0.0 {
        return;
    }

    let (iw, ih) = (img.width() as i64, img.height() as i64);
    let x0 = ((center.x - outer.x).floor() as i64).max(0);
    let x1 = ((center.x + outer.x).ceil() as i64).min(iw - 1);
    let y0 = ((center.y - outer.y).floor() as i64).max(0);
    let y1 = ((center.y + outer.y).ceil() as i64).min(ih - 1);

    for y in y0..=y1 {
        for x in x0..=x1 {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - center;
            if !inside(p, outer) {
                continue;
            }
            let in_body = inner.x > 0.0 && inner.y > 0.0 && inside(p, inner);
            let color = if in_body { fill } else { stroke.or(fill) };
            if let Some(c) = color {
                img.put_pixel(x as u32, y as u32, Pixel(c.to_array()));
            }
        }
    }
}

#[inline]
fn inside(p: Vec2, radii: Vec2) -> bool {
    let q = p / radii;
    q.length_squared() <= 1.0
}
