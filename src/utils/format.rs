//! Display formatting for currency amounts, dates, and text.

use chrono::{DateTime, NaiveDate};

/// Symbol and decimal places for the currencies the formatter knows,
/// rendered en-US style.
fn currency_style(code: &str) -> Option<(&'static str, u32)> {
    match code {
        "USD" => Some(("$", 2)),
        "EUR" => Some(("€", 2)),
        "GBP" => Some(("£", 2)),
        "JPY" => Some(("¥", 0)),
        "CNY" => Some(("CN¥", 2)),
        "INR" => Some(("₹", 2)),
        "CAD" => Some(("CA$", 2)),
        "AUD" => Some(("A$", 2)),
        "CHF" => Some(("CHF ", 2)),
        "KRW" => Some(("₩", 0)),
        _ => None,
    }
}

/// Format an amount in the given currency ("$1,234.56").
///
/// Unrecognized codes fall back to `"<CODE> <amount to 2 decimals>"`.
/// Rounding is half-away-from-zero on the stored binary value, so
/// `1.005` (which sits just below the half) renders as `$1.00`.
pub fn format_currency(amount: f64, currency: &str) -> String {
    let Some((symbol, decimals)) = currency_style(currency) else {
        return format!("{} {:.2}", currency, amount);
    };

    let scale = 10f64.powi(decimals as i32);
    let minor_units = (amount.abs() * scale).round() as u64;
    let whole = minor_units / scale as u64;
    let fraction = minor_units % scale as u64;

    let mut body = group_thousands(whole);
    if decimals > 0 {
        body.push_str(&format!(".{:0width$}", fraction, width = decimals as usize));
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, symbol, body)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Render an ISO-like date string as "Month D, YYYY".
///
/// Unparseable input is returned unchanged, never an error.
pub fn format_date(value: &str) -> String {
    let parsed = DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .or_else(|_| NaiveDate::parse_from_str(value, "%m/%d/%Y"));

    match parsed {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => value.to_string(),
    }
}

/// Render an epoch-milliseconds timestamp (a `File`'s last-modified
/// stamp) as "Month D, YYYY HH:MM".
pub fn format_timestamp(millis: f64) -> String {
    match DateTime::from_timestamp_millis(millis as i64) {
        Some(timestamp) => timestamp.format("%B %-d, %Y %H:%M").to_string(),
        None => String::new(),
    }
}

/// Truncate to `max_length` characters with an "..." suffix; shorter
/// text is returned unchanged.
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_length).collect();
    format!("{}...", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_usd_amounts() {
        assert_eq!(format_currency(0.0, "USD"), "$0.00");
        assert_eq!(format_currency(1.5, "USD"), "$1.50");
        assert_eq!(format_currency(10.99, "USD"), "$10.99");
        assert_eq!(format_currency(1000.0, "USD"), "$1,000.00");
        assert_eq!(format_currency(1234567.89, "USD"), "$1,234,567.89");
    }

    #[test]
    fn formats_other_known_currencies() {
        assert_eq!(format_currency(5.99, "EUR"), "€5.99");
        assert_eq!(format_currency(25.50, "GBP"), "£25.50");
        assert_eq!(format_currency(1000.0, "JPY"), "¥1,000");
        assert_eq!(format_currency(0.0, "JPY"), "¥0");
    }

    #[test]
    fn falls_back_for_unknown_codes() {
        assert_eq!(format_currency(0.0, "INVALID"), "INVALID 0.00");
        assert_eq!(format_currency(12.3, "XYZ"), "XYZ 12.30");
    }

    #[test]
    fn negative_amounts_carry_a_leading_sign() {
        assert_eq!(format_currency(-5.0, "USD"), "-$5.00");
        assert_eq!(format_currency(-1234.5, "USD"), "-$1,234.50");
    }

    #[test]
    fn rounds_half_away_from_zero_on_the_stored_value() {
        assert_eq!(format_currency(1.234, "USD"), "$1.23");
        assert_eq!(format_currency(1.999, "USD"), "$2.00");
        // 1.005 is stored slightly below the half, so it stays at $1.00.
        assert_eq!(format_currency(1.005, "USD"), "$1.00");
    }

    #[test]
    fn renders_calendar_dates() {
        assert_eq!(format_date("2024-01-15"), "January 15, 2024");
        assert_eq!(format_date("2023-12-31"), "December 31, 2023");
        assert_eq!(format_date("2024-02-29"), "February 29, 2024");
        assert_eq!(format_date("2024-01-15T10:30:00Z"), "January 15, 2024");
        assert_eq!(format_date("01/15/2024"), "January 15, 2024");
    }

    #[test]
    fn unparseable_dates_pass_through() {
        assert_eq!(format_date("not-a-date"), "not-a-date");
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("2024-13-45"), "2024-13-45");
    }

    #[test]
    fn renders_last_modified_timestamps() {
        // 2024-01-15T10:30:00Z
        assert_eq!(format_timestamp(1705314600000.0), "January 15, 2024 10:30");
    }

    #[test]
    fn truncates_long_text_with_ellipsis() {
        let long = "This is a very long text that needs to be truncated";
        assert_eq!(truncate_text(long, 20), "This is a very long ...");
        assert_eq!(truncate_text("Short text", 20), "Short text");
    }

    #[test]
    fn truncation_edge_cases() {
        assert_eq!(truncate_text("", 10), "");
        assert_eq!(truncate_text("Text", 0), "...");
        assert_eq!(truncate_text("Exactly twenty chars", 20), "Exactly twenty chars");
        assert_eq!(truncate_text("Exactly twenty chars", 19), "Exactly twenty char...");
    }
}
