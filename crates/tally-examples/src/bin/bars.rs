// File: crates/tally-examples/src/bin/bars.rs
// Summary: Renders the mock bar datasets, including single-bar edge cases, to PNG.

use anyhow::Result;
use tally_core::{Chart, ScrubbingBehavior};
use tally_examples::{init_logging, mock, monthly_config, out_path};
use tally_render_skia::SkiaRenderer;

fn main() -> Result<()> {
    init_logging();
    let renderer = SkiaRenderer::default();

    let cases = [
        ("bars", mock::bar_datasets()),
        ("bars_single", vec![mock::bar_single_negative(), mock::bar_single_positive()]),
    ];
    for (name, data) in cases {
        let mut chart = Chart::bar(data).with_config(monthly_config())?;
        let out = out_path(name);
        renderer.render_to_png(&mut chart, &out)?;
        println!("Wrote {}", out.display());
    }

    // Rightmost month kept highlighted
    let config = monthly_config().with_scrubbing(ScrubbingBehavior::TouchScrubbing {
        always_highlight: true,
        start_on_left: false,
        reset_after_delay: false,
    });
    let mut chart = Chart::bar(mock::bar_datasets()).with_config(config)?;
    let out = out_path("bars_highlighted");
    renderer.render_to_png(&mut chart, &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
