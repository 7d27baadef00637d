//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// Pad to `width` display columns (accented labels count as one column).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{s}{}", " ".repeat(width - w))
    }
}

/// Minute-of-day as `HH:MM`, truncating fractional minutes.
///
/// `452.6` → `"07:32"`
pub fn minutes_to_hhmm(minutes: f64) -> String {
    let total = minutes.max(0.0) as i64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// `N/A` for missing values in summary tables.
pub fn or_na(value: Option<&str>) -> String {
    value.unwrap_or("N/A").to_string()
}
