// File: crates/tally-core/src/format.rs
// Summary: Stock axis label formatters (integer values, month indices).

use chrono::{Months, NaiveDate};

/// Truncates toward zero: `1250.7 -> "1250"`, `-49.9 -> "-49"`.
pub fn integer_label(value: f32) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    Some((value as i64).to_string())
}

/// Treats x as a month offset from `start` and renders `"Jan 2020"` style labels.
pub fn month_label(start: NaiveDate) -> impl Fn(i64) -> Option<String> {
    move |x| {
        let months = u32::try_from(x.unsigned_abs()).ok()?;
        let date = if x >= 0 {
            start.checked_add_months(Months::new(months))?
        } else {
            start.checked_sub_months(Months::new(months))?
        };
        Some(date.format("%b %Y").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_label_truncates() {
        assert_eq!(integer_label(1250.7).as_deref(), Some("1250"));
        assert_eq!(integer_label(-49.9).as_deref(), Some("-49"));
        assert_eq!(integer_label(f32::NAN), None);
    }

    #[test]
    fn month_label_counts_from_start() {
        let f = month_label(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert_eq!(f(0).as_deref(), Some("Jan 2020"));
        assert_eq!(f(14).as_deref(), Some("Mar 2021"));
        assert_eq!(f(-1).as_deref(), Some("Dec 2019"));
    }
}
