//! Shared formatting utilities

use unicode_width::UnicodeWidthChar;

/// Format a duration in seconds as `"1h 5m"`, or `"5m"` when under an hour.
///
/// # Examples
///
/// ```
/// use ecolearn::util::format_duration;
///
/// assert_eq!(format_duration(3900), "1h 5m");
/// assert_eq!(format_duration(300), "5m");
/// ```
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Format an ISO date (or RFC 3339 timestamp) as `"Mar 8, 2024"`.
///
/// Unparseable input is returned unchanged rather than rendered as an
/// error marker.
pub fn format_date(date: &str) -> String {
    use chrono::{DateTime, NaiveDate};

    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return dt.format("%b %-d, %Y").to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return d.format("%b %-d, %Y").to_string();
    }
    date.to_string()
}

/// Truncate a string to at most `max_width` terminal columns, appending an
/// ellipsis when anything was cut. Width-aware so CJK and emoji don't
/// overflow panel borders.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return s.to_string();
    }
    let mut width = 0usize;
    for (i, ch) in s.char_indices() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            // Reserve one column for the ellipsis
            let mut out = s[..i].to_string();
            out.push('…');
            return out;
        }
        width += w;
    }
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_with_hours() {
        assert_eq!(format_duration(3725), "1h 2m");
        assert_eq!(format_duration(7200), "2h 0m");
    }

    #[test]
    fn test_duration_minutes_only() {
        assert_eq!(format_duration(0), "0m");
        assert_eq!(format_duration(59), "0m");
        assert_eq!(format_duration(1800), "30m");
    }

    #[test]
    fn test_date_from_plain_date() {
        assert_eq!(format_date("2024-03-08"), "Mar 8, 2024");
    }

    #[test]
    fn test_date_from_rfc3339() {
        assert_eq!(format_date("2024-12-01T09:30:00+00:00"), "Dec 1, 2024");
    }

    #[test]
    fn test_date_unparseable_passes_through() {
        assert_eq!(format_date("not a date"), "not a date");
    }

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_appends_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
    }
}
