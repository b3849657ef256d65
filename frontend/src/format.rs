//! Display formatting helpers (vi-VN locale).

use chrono::{DateTime, Utc};

/// VND with dot thousands separators, e.g. `1.000.000 ₫`.
pub fn format_currency(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{grouped} ₫")
    } else {
        format!("{grouped} ₫")
    }
}

/// Whole-percent markdown from `original` to `sale`, for the strikethrough
/// badge on product cards. Zero when the pair makes no sense.
pub fn calculate_discount(original: i64, sale: i64) -> u32 {
    if original <= 0 || sale < 0 || sale >= original {
        return 0;
    }
    ((original - sale) * 100 / original) as u32
}

/// Order timestamps, `dd/mm/yyyy hh:mm`.
pub fn format_date_time(dt: &DateTime<Utc>) -> String {
    dt.format("%d/%m/%Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_vnd_with_dot_groups() {
        assert_eq!(format_currency(1_000_000), "1.000.000 ₫");
        assert_eq!(format_currency(0), "0 ₫");
        assert_eq!(format_currency(999), "999 ₫");
        assert_eq!(format_currency(1_000), "1.000 ₫");
        assert_eq!(format_currency(123_456_789), "123.456.789 ₫");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(format_currency(-50_000), "-50.000 ₫");
    }

    #[test]
    fn discount_percent_matches_price_pair() {
        assert_eq!(calculate_discount(100_000, 80_000), 20);
        assert_eq!(calculate_discount(200_000, 150_000), 25);
        assert_eq!(calculate_discount(3_000_000, 2_999_000), 0);
    }

    #[test]
    fn nonsense_price_pairs_yield_zero_discount() {
        assert_eq!(calculate_discount(0, 0), 0);
        assert_eq!(calculate_discount(100, 100), 0);
        assert_eq!(calculate_discount(100, 200), 0);
        assert_eq!(calculate_discount(-100, 50), 0);
    }

    #[test]
    fn date_time_renders_vietnamese_order() {
        let dt = Utc.with_ymd_and_hms(2025, 3, 7, 14, 5, 0).unwrap();
        assert_eq!(format_date_time(&dt), "07/03/2025 14:05");
    }
}
