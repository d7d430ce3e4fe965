// File: crates/chart-render-skia/src/lib.rs
// Summary: Headless raster backend; draws a chart Graphic on a Skia CPU surface and encodes PNG.

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use chart_core::axis::{AxisGroup, AxisOrient};
use chart_core::{Color, Graphic, Paint, PathCommand, Theme};
use skia_safe as skia;
use thiserror::Error;
use tracing::debug;

/// Font size used for tick labels, matching the 10px sans-serif of the SVG output.
const LABEL_SIZE: f32 = 10.0;
/// Radius of the dot drawn for an isolated sample.
const DOT_RADIUS: f32 = 1.5;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: u32, height: u32 },
    #[error("failed to read pixels back from the raster surface")]
    ReadPixels,
    #[error("pixel buffer does not match {width}x{height}")]
    BufferSize { width: u32, height: u32 },
    #[error("encode PNG failed: {0}")]
    Encode(#[from] image::ImageError),
}

#[derive(Clone, Copy, Debug)]
pub struct RasterOptions {
    /// Tick labels need a system font; disable for byte-stable output.
    pub draw_labels: bool,
    /// Overrides the theme background when set.
    pub background: Option<Color>,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { draw_labels: true, background: None }
    }
}

pub struct SkiaRenderer {
    theme: Theme,
    options: RasterOptions,
}

impl SkiaRenderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme, options: RasterOptions::default() }
    }

    pub fn with_options(mut self, options: RasterOptions) -> Self {
        self.options = options;
        self
    }

    /// Render to a straight-alpha RGBA8 buffer: `(pixels, width, height, stride)`.
    pub fn render_rgba8(&self, graphic: &Graphic) -> Result<(Vec<u8>, u32, u32, usize), RasterError> {
        let (w, h) = (graphic.width, graphic.height);
        let mut surface = skia::surfaces::raster_n32_premul((w as i32, h as i32))
            .ok_or(RasterError::Surface { width: w, height: h })?;

        {
            let canvas = surface.canvas();
            canvas.clear(sk_color(self.options.background.unwrap_or(self.theme.background)));
            self.draw_axis(canvas, &graphic.x_axis);
            self.draw_axis(canvas, &graphic.y_axis);
            self.draw_line(canvas, graphic);
        }

        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        let info = skia::ImageInfo::new(
            (w as i32, h as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RasterError::ReadPixels);
        }
        debug!(width = w, height = h, "rasterized chart");
        Ok((pixels, w, h, stride))
    }

    /// Render and encode as PNG in memory.
    pub fn render_png_bytes(&self, graphic: &Graphic) -> Result<Vec<u8>, RasterError> {
        let (pixels, w, h, _) = self.render_rgba8(graphic)?;
        let img = image::RgbaImage::from_raw(w, h, pixels).ok_or(RasterError::BufferSize { width: w, height: h })?;
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, graphic: &Graphic, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_png_bytes(graphic)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    // ---- helpers ------------------------------------------------------------

    fn draw_axis(&self, canvas: &skia::Canvas, axis: &AxisGroup) {
        let mut axis_paint = stroke_paint(self.theme.resolve(&Paint::CurrentColor), 1.0);
        axis_paint.set_anti_alias(false);

        let pts = axis.domain_points();
        let mut domain = skia::Path::new();
        domain.move_to(pt(pts[0]));
        for &p in &pts[1..] {
            domain.line_to(pt(p));
        }
        canvas.draw_path(&domain, &axis_paint);

        for tick in &axis.ticks {
            let (a, b) = axis.tick_line(tick);
            canvas.draw_line(pt(a), pt(b), &axis_paint);
        }

        if !self.options.draw_labels {
            return;
        }
        let font = label_font();
        let mut text_paint = skia::Paint::default();
        text_paint.set_anti_alias(true);
        text_paint.set_color(sk_color(self.theme.axis_label));
        for tick in &axis.ticks {
            let (x, y) = axis.label_anchor(tick);
            let (width, _) = font.measure_str(&tick.label, Some(&text_paint));
            // baselines follow the SVG dy offsets: 0.71em below, 0.32em centered
            let origin = match axis.orient {
                AxisOrient::Bottom => (x as f32 - width / 2.0, y as f32 + 0.71 * LABEL_SIZE),
                AxisOrient::Left => (x as f32 - width, y as f32 + 0.32 * LABEL_SIZE),
            };
            canvas.draw_str(&tick.label, origin, &font, &text_paint);
        }
    }

    fn draw_line(&self, canvas: &skia::Canvas, graphic: &Graphic) {
        let color = self.theme.resolve(&graphic.style.stroke);
        let stroke = stroke_paint(color, graphic.style.stroke_width as f32);
        let mut dot = skia::Paint::default();
        dot.set_anti_alias(true);
        dot.set_color(sk_color(color));

        for run in graphic.line.runs() {
            match run {
                [PathCommand::MoveTo(p), PathCommand::Close] => {
                    canvas.draw_circle((p.x as f32, p.y as f32), DOT_RADIUS, &dot);
                }
                _ => {
                    let mut path = skia::Path::new();
                    for cmd in run {
                        match cmd {
                            PathCommand::MoveTo(p) => { path.move_to((p.x as f32, p.y as f32)); }
                            PathCommand::LineTo(p) => { path.line_to((p.x as f32, p.y as f32)); }
                            PathCommand::Close => { path.close(); }
                        }
                    }
                    canvas.draw_path(&path, &stroke);
                }
            }
        }
    }
}

fn sk_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn pt((x, y): (f64, f64)) -> (f32, f32) {
    (x as f32, y as f32)
}

fn stroke_paint(color: Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(sk_color(color));
    paint
}

fn label_font() -> skia::Font {
    match skia::FontMgr::default().legacy_make_typeface(None, skia::FontStyle::default()) {
        Some(typeface) => skia::Font::from_typeface(typeface, LABEL_SIZE),
        None => {
            let mut font = skia::Font::default();
            font.set_size(LABEL_SIZE);
            font
        }
    }
}
