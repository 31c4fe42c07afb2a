// File: crates/tally-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic line and bar charts to PNG bytes (labels off to avoid font variance).
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot files.
// - Else, if a snapshot exists, compares decoded pixels for an exact match.
// - Else, logs a note; the content checks below still run.
// - Every run checks size, background and that each expected color was painted.

use image::RgbaImage;
use tally_core::{Chart, ChartConfig, Color, Dataset, GradientFill, LinePainter, LineStyle, ScrubbingBehavior};
use tally_render_skia::{RenderOptions, SkiaRenderer};

fn datasets() -> Vec<Dataset> {
    vec![
        Dataset::from_xy(Color::from_argb(255, 0, 0, 255), &[(0, 120.0), (1, 80.0), (2, 260.0), (3, 190.0), (4, 230.0)]),
        Dataset::from_xy(Color::from_argb(255, 0, 200, 200), &[(0, -40.0), (1, 60.0), (2, 20.0), (3, 110.0), (4, 90.0)]),
    ]
}

fn renderer() -> SkiaRenderer {
    SkiaRenderer::new(RenderOptions { width: 320, height: 200, draw_labels: false, ..RenderOptions::default() })
}

// Antialiased edges blend into the background; stroke and fill interiors keep the exact color.
fn painted(img: &RgbaImage, color: Color) -> bool {
    img.pixels().any(|p| {
        let [r, g, b, a] = p.0;
        [r.abs_diff(color.r), g.abs_diff(color.g), b.abs_diff(color.b)].iter().all(|d| *d <= 2) && a == 255
    })
}

fn check_content(bytes: &[u8], colors: &[Color]) {
    let img = image::load_from_memory(bytes).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (320, 200));
    assert_eq!(img.get_pixel(319, 0).0, [255, 255, 255, 255], "background outside the plot");
    for &color in colors {
        assert!(painted(&img, color), "no pixel painted in {color:?}");
    }
}

fn check_snapshot(name: &str, bytes: &[u8]) {
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join(name);

    let update = std::env::var("UPDATE_SNAPSHOTS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}

#[test]
fn golden_cubic_gradient_line_chart() {
    let mut chart = Chart::line(datasets()).with_painter(LinePainter::new(LineStyle::CubicGradient(GradientFill::default())));
    let bytes = renderer().render_to_png_bytes(&mut chart).expect("render");
    let colors: Vec<Color> = datasets().iter().map(|d| d.color).collect();
    check_content(&bytes, &colors);
    check_snapshot("line_cubic_gradient.png", &bytes);
}

#[test]
fn golden_highlighted_bar_chart() {
    let config = ChartConfig::default().with_scrubbing(ScrubbingBehavior::TouchScrubbing {
        always_highlight: true,
        start_on_left: false,
        reset_after_delay: false,
    });
    let mut chart = Chart::bar(datasets()).with_config(config).expect("valid config");
    let bytes = renderer().render_to_png_bytes(&mut chart).expect("render");
    // Plain bars for x 0..=3, highlighted bars at x 4 (rightmost default selection).
    let colors: Vec<Color> = datasets().iter().flat_map(|d| [d.color, d.highlight_color]).collect();
    check_content(&bytes, &colors);
    check_snapshot("bar_highlighted.png", &bytes);
}
