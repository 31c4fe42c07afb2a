// File: crates/tally-demo/src/main.rs
// Summary: Demo loads x,y[,series] CSV data and renders a line (or bar) chart plus a highlighted variant to PNG.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tally_core::{Chart, ChartConfig, ChartKind, Color, Dataset, ScrubbingBehavior};
use tally_render_skia::SkiaRenderer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const PALETTE: [Color; 4] = [
    Color::from_argb(255, 0x3C, 0x46, 0x55),
    Color::from_argb(255, 0x79, 0x90, 0xA5),
    Color::from_argb(255, 0x2E, 0x8B, 0x57),
    Color::from_argb(255, 0xC0, 0x39, 0x2B),
];

struct Args {
    input: PathBuf,
    kind: ChartKind,
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = parse_args(std::env::args().skip(1))?;
    println!("Using input file: {}", args.input.display());

    let datasets = load_xy_csv(&args.input)
        .with_context(|| format!("failed to load CSV '{}'", args.input.display()))?;
    if datasets.is_empty() {
        anyhow::bail!("no rows loaded; expected columns x,y[,series]");
    }
    let points: usize = datasets.iter().map(|d| d.points.len()).sum();
    println!("Loaded {} series, {} points", datasets.len(), points);

    let renderer = SkiaRenderer::default();
    let stem = args.input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let suffix = match args.kind {
        ChartKind::Line => "line",
        ChartKind::Bar => "bar",
    };

    let mut chart = Chart::new(args.kind, datasets.clone());
    let out = args.out_dir.join(format!("{stem}_{suffix}.png"));
    renderer.render_to_png(&mut chart, &out)?;
    println!("Wrote {}", out.display());

    // Same data with the rightmost value highlighted
    let config = ChartConfig::default().with_scrubbing(ScrubbingBehavior::TouchScrubbing {
        always_highlight: true,
        start_on_left: false,
        reset_after_delay: false,
    });
    let mut chart = Chart::new(args.kind, datasets).with_config(config)?;
    let out = args.out_dir.join(format!("{stem}_{suffix}_highlight.png"));
    renderer.render_to_png(&mut chart, &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut input = None;
    let mut kind = ChartKind::Line;
    let mut out_dir = PathBuf::from("target/out");
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--bar" => kind = ChartKind::Bar,
            "--out" => {
                out_dir = it.next().map(PathBuf::from).context("--out needs a directory")?;
            }
            flag if flag.starts_with("--") => anyhow::bail!("unknown flag {flag}"),
            _ => input = Some(PathBuf::from(arg)),
        }
    }
    let input = input.context("usage: tally-demo <data.csv> [--bar] [--out <dir>]")?;
    if !input.exists() {
        anyhow::bail!("file not found: {}", input.display());
    }
    Ok(Args { input, kind, out_dir })
}

/// Load `x,y[,series]` rows. A header row is optional; rows that fail to parse are skipped.
/// Rows are grouped by series name (first-seen order) and sorted by x.
fn load_xy_csv(path: &Path) -> Result<Vec<Dataset>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut order: Vec<String> = Vec::new();
    let mut series: BTreeMap<String, Vec<(i64, f32)>> = BTreeMap::new();
    let mut skipped = 0usize;
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let x = rec.get(0).and_then(|s| s.parse::<i64>().ok());
        let y = rec.get(1).and_then(|s| s.parse::<f32>().ok());
        let (Some(x), Some(y)) = (x, y) else {
            // tolerate a header line
            if row > 0 {
                skipped += 1;
            }
            continue;
        };
        let name = rec.get(2).unwrap_or("").to_string();
        if !series.contains_key(&name) {
            order.push(name.clone());
        }
        series.entry(name).or_default().push((x, y));
    }
    if skipped > 0 {
        warn!(skipped, "rows without numeric x,y were skipped");
    }

    let datasets = order
        .iter()
        .enumerate()
        .filter_map(|(i, name)| {
            let mut points = series.remove(name)?;
            points.sort_by_key(|p| p.0);
            info!(series = %name, points = points.len(), "loaded series");
            Some(Dataset::from_xy(PALETTE[i % PALETTE.len()], &points))
        })
        .collect();
    Ok(datasets)
}
