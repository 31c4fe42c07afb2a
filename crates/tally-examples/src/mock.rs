// File: crates/tally-examples/src/mock.rs
// Summary: Monthly sample datasets (x = months since Jan 2020) for the line and bar examples.

use tally_core::{Color, Dataset};

pub const SLATE: Color = Color::from_argb(0xFF, 0x3C, 0x46, 0x55);
pub const LIGHT_BLUE: Color = Color::from_argb(0xFF, 0xCC, 0xD6, 0xE0);
pub const DARK_GREY: Color = Color::from_argb(0x4D, 0xCC, 0xD6, 0xE0);
pub const BLUE_GRAY: Color = Color::from_argb(0xFF, 0x79, 0x90, 0xA5);
pub const YELLOW: Color = Color::from_argb(0xFF, 0xFF, 0xFF, 0x00);
pub const GREEN: Color = Color::from_argb(0xFF, 0x00, 0xFF, 0x00);
pub const MAGENTA: Color = Color::from_argb(0xFF, 0xFF, 0x00, 0xFF);

fn monthly(color: Color, ys: &[f32]) -> Dataset {
    let points: Vec<(i64, f32)> = ys.iter().enumerate().map(|(i, &y)| (i as i64, y)).collect();
    Dataset::from_xy(color, &points)
}

pub fn line_a() -> Dataset {
    monthly(SLATE, &[
        1234.0, 1532.0, 1532.0, 1153.0, 2352.0, 1532.0, 1914.0, 2034.0, 2132.0, 1332.0, 2432.0, 2634.0, 2332.0,
        2513.0, 2843.0,
    ])
}

pub fn line_b() -> Dataset {
    monthly(BLUE_GRAY, &[
        1355.0, 1560.0, 1621.0, 1250.0, 2100.0, 1402.0, 2052.0, 2224.0, 1632.0, 2000.0, 2150.0, 2912.0, 2523.0,
        2421.0, 2299.0,
    ])
}

/// All values at or below zero.
pub fn line_negative() -> Dataset {
    monthly(YELLOW, &[
        -235.0, -211.0, -5.0, -509.0, -550.0, -700.0, -300.0, -200.0, -150.0, -10.0, -15.0, -20.0, -11.0, -0.0,
        -2.0,
    ])
}

/// Crosses zero twice.
pub fn line_mixed() -> Dataset {
    monthly(GREEN, &[
        135.0, 551.0, 150.0, -400.0, -650.0, -1200.0, -1700.0, -200.0, 300.0, 700.0, 2000.0, 2100.0, 900.0, 550.0,
        300.0,
    ])
}

pub fn bar_a() -> Dataset {
    monthly(DARK_GREY, &[135.0, 551.0, 150.0, -400.0, -650.0, -1200.0]).with_highlight_color(BLUE_GRAY)
}

pub fn bar_b() -> Dataset {
    monthly(LIGHT_BLUE, &[115.0, 231.0, 80.0, -300.0, 400.0, -330.0]).with_highlight_color(SLATE)
}

/// Single negative bar.
pub fn bar_single_negative() -> Dataset {
    monthly(MAGENTA, &[-735.0])
}

/// Single positive bar.
pub fn bar_single_positive() -> Dataset {
    monthly(YELLOW, &[235.0])
}

pub fn line_datasets() -> Vec<Dataset> {
    vec![line_a(), line_b()]
}

pub fn bar_datasets() -> Vec<Dataset> {
    vec![bar_a(), bar_b()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_series_are_sorted_and_aligned() {
        for d in [line_a(), line_b(), line_negative(), line_mixed()] {
            assert_eq!(d.points.len(), 15);
            assert!(d.is_sorted_by_x());
        }
        assert_eq!(bar_a().highlight_color, BLUE_GRAY);
        assert_eq!(line_a().points[14].y, 2843.0);
    }
}
