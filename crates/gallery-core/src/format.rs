//! Display formatters for currency, sizes, dates and other values.

use chrono::NaiveDate;

/// Format file size for display (e.g., "1.2 KB", "3.4 MB").
///
/// Uses decimal units, like the sizes reported by upload services.
pub fn format_bytes(bytes: u64) -> String {
    if bytes >= 1_000_000_000 {
        format!("{:.1} GB", bytes as f64 / 1_000_000_000.0)
    } else if bytes >= 1_000_000 {
        format!("{:.1} MB", bytes as f64 / 1_000_000.0)
    } else if bytes >= 1_000 {
        format!("{:.1} KB", bytes as f64 / 1_000.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Format an amount as US dollars with thousands separators ("$1,234.50").
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, group_thousands(cents / 100), cents % 100)
}

/// Insert `,` every three digits.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a date for display ("Oct 1, 2024").
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Format a date as ISO (YYYY-MM-DD).
pub fn format_date_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format a whole-number percentage ("25%").
pub fn format_percent(value: u8) -> String {
    format!("{}%", value)
}

/// Format a temperature in Celsius ("22°C").
pub fn format_celsius(c: i32) -> String {
    format!("{}°C", c)
}

/// `mailto:` link target for an e-mail address.
pub fn mailto(email: &str) -> String {
    format!("mailto:{}", email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(500), "500 B");
        assert_eq!(format_bytes(1_500), "1.5 KB");
        assert_eq!(format_bytes(412_733), "412.7 KB");
        assert_eq!(format_bytes(1_500_000), "1.5 MB");
        assert_eq!(format_bytes(2_000_000_000), "2.0 GB");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(100.0), "$100.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(-12.5), "-$12.50");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(123456789), "123,456,789");
    }

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();
        assert_eq!(format_date(d), "Oct 1, 2024");
        assert_eq!(format_date_iso(d), "2024-10-01");
    }

    #[test]
    fn test_small_formats() {
        assert_eq!(format_percent(25), "25%");
        assert_eq!(format_celsius(-7), "-7°C");
        assert_eq!(mailto("a@email.com"), "mailto:a@email.com");
    }
}
