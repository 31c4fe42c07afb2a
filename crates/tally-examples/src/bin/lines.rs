// File: crates/tally-examples/src/bin/lines.rs
// Summary: Renders the mock line datasets in each line style to PNG.

use anyhow::Result;
use tally_core::{Chart, GradientFill, LinePainter, LineStyle};
use tally_examples::{init_logging, mock, monthly_config, out_path};
use tally_render_skia::SkiaRenderer;

fn main() -> Result<()> {
    init_logging();
    let renderer = SkiaRenderer::default();

    let styles = [
        ("lines", LineStyle::Straight),
        ("lines_cubic", LineStyle::Cubic),
        ("lines_gradient", LineStyle::Gradient(GradientFill::default())),
        ("lines_cubic_gradient", LineStyle::CubicGradient(GradientFill { alpha: 0.6, ..GradientFill::default() })),
    ];
    for (name, style) in styles {
        let mut chart = Chart::line(mock::line_datasets())
            .with_config(monthly_config())?
            .with_painter(LinePainter::new(style));
        let out = out_path(name);
        renderer.render_to_png(&mut chart, &out)?;
        println!("Wrote {}", out.display());
    }

    // Negative and zero-crossing data, thinner strokes
    let mut chart = Chart::line(vec![mock::line_negative(), mock::line_mixed()])
        .with_config(monthly_config())?
        .with_painter(LinePainter::default().with_stroke_width(2.0));
    let out = out_path("lines_negative");
    renderer.render_to_png(&mut chart, &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
