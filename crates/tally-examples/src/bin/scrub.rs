// File: crates/tally-examples/src/bin/scrub.rs
// Summary: Drives a scripted drag over a line chart, rendering frames and logging the selection.

use std::time::Duration;

use anyhow::Result;
use tally_core::{Chart, PointerEvent, ScrubbingBehavior};
use tally_examples::{init_logging, mock, monthly_config, out_path};
use tally_render_skia::SkiaRenderer;
use tracing::info;

fn main() -> Result<()> {
    init_logging();
    let renderer = SkiaRenderer::default();
    let mut chart = Chart::line(mock::line_datasets())
        .with_config(monthly_config().with_scrubbing(ScrubbingBehavior::touch()))?
        .on_selected_value(|v| info!(x = v.x_value, highlighted = v.is_highlighted, "selected"))
        .on_dragging(|d| info!(dragging = d, "dragging"));

    // First render builds the position map the pointer resolves against.
    renderer.render_to_png(&mut chart, out_path("scrub_idle"))?;

    let width = renderer.options().width as f32;
    let script = [
        (0, PointerEvent::Down { x: width * 0.3 }),
        (16, PointerEvent::Move { x: width * 0.45 }),
        (32, PointerEvent::Move { x: width * 0.62 }),
    ];
    for (ms, event) in script {
        chart.handle_pointer(event, Duration::from_millis(ms));
    }
    let out = out_path("scrub_dragging");
    renderer.render_to_png(&mut chart, &out)?;
    println!("Wrote {}", out.display());

    chart.handle_pointer(PointerEvent::Up, Duration::from_millis(48));
    let reset_at = chart.scrubber().pending_reset().unwrap_or_default();
    if chart.tick(reset_at) {
        info!(?reset_at, "selection reset");
    }
    let out = out_path("scrub_reset");
    renderer.render_to_png(&mut chart, &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
