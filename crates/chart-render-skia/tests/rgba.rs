// File: crates/chart-render-skia/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape, a few pixels, and PNG encoding.

use chart_core::series::parse_json;
use chart_core::{render, ChartConfig, Color, Graphic, Theme};
use chart_render_skia::{RasterOptions, SkiaRenderer};

fn graphic() -> Graphic {
    let samples = parse_json("[[0,10],[60,20],[120,null],[180,40]]").expect("valid samples");
    render(&samples, &ChartConfig::default())
}

fn renderer(theme: Theme) -> SkiaRenderer {
    // avoid font variance
    SkiaRenderer::new(theme).with_options(RasterOptions { draw_labels: false, ..RasterOptions::default() })
}

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn render_rgba8_buffer() {
    let (px, w, h, stride) = renderer(Theme::dark()).render_rgba8(&graphic()).expect("rgba render");
    assert_eq!((w, h), (640, 400));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Check background in top-left pixel (RGBA)
    assert_eq!(pixel(&px, stride, 0, 0), [18, 18, 20, 255]);
}

#[test]
fn background_override_wins_over_theme() {
    let opts = RasterOptions { draw_labels: false, background: Some(Color::from_argb(255, 1, 2, 3)) };
    let (px, _, _, stride) = SkiaRenderer::new(Theme::light())
        .with_options(opts)
        .render_rgba8(&graphic())
        .expect("rgba render");
    assert_eq!(pixel(&px, stride, 5, 5), [1, 2, 3, 255]);
}

#[test]
fn axes_are_drawn_inside_the_canvas() {
    let theme = Theme::high_contrast_dark();
    let (px, w, h, stride) = renderer(theme).render_rgba8(&graphic()).expect("rgba render");
    let bg = [0, 0, 0, 255];
    // somewhere around the bottom axis row (y = 370) differs from background
    let row_hit = (367..=373).any(|y| (40..620).any(|x| pixel(&px, stride, x, y) != bg));
    assert!(row_hit, "bottom axis not drawn");
    // far corners outside the plot stay background
    assert_eq!(pixel(&px, stride, w as usize - 1, h as usize - 1), bg);
}

#[test]
fn unlabelled_rendering_is_deterministic() {
    let r = renderer(Theme::dark());
    let a = r.render_rgba8(&graphic()).expect("first");
    let b = r.render_rgba8(&graphic()).expect("second");
    assert_eq!(a, b);
}

#[test]
fn png_bytes_have_signature() {
    let bytes = renderer(Theme::light()).render_png_bytes(&graphic()).expect("png");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn png_file_is_written_with_parent_dirs() {
    let dir = std::env::temp_dir().join(format!("dash-render-skia-{}", std::process::id()));
    let path = dir.join("nested/chart.png");
    renderer(Theme::dark()).render_to_png(&graphic(), &path).expect("write png");
    let written = std::fs::read(&path).expect("read back");
    assert!(written.starts_with(b"\x89PNG"));
    std::fs::remove_dir_all(&dir).ok();
}
