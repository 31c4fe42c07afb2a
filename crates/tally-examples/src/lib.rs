// File: crates/tally-examples/src/lib.rs
// Summary: Shared helpers for the example binaries: mock data, month labels, logging and output paths.

pub mod mock;

use std::path::PathBuf;

use chrono::NaiveDate;
use tally_core::{format, ChartConfig};
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber honouring `RUST_LOG`, defaulting to `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Month of x = 0 in the mock data.
pub fn mock_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default()
}

/// Default config with `"Jan 2020"` style x labels.
pub fn monthly_config() -> ChartConfig {
    ChartConfig::default().with_x_label(format::month_label(mock_start()))
}

/// `target/out/example_<name>.png`
pub fn out_path(name: &str) -> PathBuf {
    PathBuf::from("target/out").join(format!("example_{name}.png"))
}
