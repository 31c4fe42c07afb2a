// File: crates/tally-render-skia/tests/smoke.rs
// Purpose: End-to-end render smoke tests writing PNGs and reading RGBA pixels back.

use tally_core::{Chart, Color, Dataset};
use tally_render_skia::{RenderOptions, SkiaRenderer};

fn line_chart() -> Chart {
    Chart::line(vec![Dataset::from_xy(
        Color::from_argb(255, 0, 0, 255),
        &[(0, 0.0), (1, 120.0), (2, 80.0), (3, 180.0), (4, 140.0)],
    )])
}

#[test]
fn render_smoke_png() {
    let renderer = SkiaRenderer::default();
    let mut chart = line_chart();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");

    renderer.render_to_png(&mut chart, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = renderer.render_to_png_bytes(&mut chart).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_rgba8_buffer() {
    let renderer = SkiaRenderer::new(RenderOptions { draw_labels: false, ..RenderOptions::default() });
    let mut chart = line_chart();
    let (px, w, h, stride) = renderer.render_to_rgba8(&mut chart).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, w as usize * 4);

    // White background in the top-right corner (RGBA)
    let i = (w as usize - 1) * 4;
    assert_eq!(&px[i..i + 4], &[255, 255, 255, 255]);
}

#[test]
fn empty_chart_renders_background_only() {
    let renderer = SkiaRenderer::new(RenderOptions { width: 64, height: 48, ..RenderOptions::default() });
    let mut chart = Chart::bar(Vec::new());
    let (px, ..) = renderer.render_to_rgba8(&mut chart).expect("empty data still renders");
    assert!(px.chunks(4).all(|p| p == [255, 255, 255, 255]));
}
