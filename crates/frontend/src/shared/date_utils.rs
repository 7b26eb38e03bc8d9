/// Utilities for date and number formatting
///
/// Provides consistent display formatting across the dashboard pages.

/// Format an ISO datetime string to DD.MM.YYYY HH:MM format
/// Example: "2026-03-15T14:02:26.123Z" -> "15.03.2026 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some(date) = reorder_date(date_part) {
            let time: String = time_part.chars().take(5).collect();
            return format!("{} {}", date, time);
        }
    }
    datetime_str.to_string()
}

/// Format an ISO date string to DD.MM.YYYY format
/// Example: "2026-03-15" or "2026-03-15T14:02:26Z" -> "15.03.2026"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    reorder_date(date_part).unwrap_or_else(|| date_str.to_string())
}

fn reorder_date(date_part: &str) -> Option<String> {
    let mut parts = date_part.splitn(3, '-');
    let year = parts.next()?;
    let month = parts.next()?;
    let day = parts.next()?;
    Some(format!("{}.{}.{}", day, month, year))
}

/// Format a price in whole currency units with thousands separators.
/// Example: 32500.0 -> "$32,500"
pub fn format_price(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();
    if rounded < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2026-03-15T14:02:26.123Z"),
            "15.03.2026 14:02"
        );
        assert_eq!(format_datetime("2026-12-31T23:59:59Z"), "31.12.2026 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-03-15"), "15.03.2026");
        assert_eq!(format_date("2026-03-15T14:02:26.123Z"), "15.03.2026");
    }

    #[test]
    fn test_invalid_format_passes_through() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(32500.0), "$32,500");
        assert_eq!(format_price(999.4), "$999");
        assert_eq!(format_price(1_250_000.0), "$1,250,000");
    }
}
