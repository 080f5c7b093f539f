//! Display formatting for dates and money.

use chrono::NaiveDate;

/// `2025-02-04` -> `04 Feb 2025`; missing dates render as `-`.
pub fn date(value: Option<NaiveDate>) -> String {
    match value {
        Some(d) => d.format("%d %b %Y").to_string(),
        None => "-".to_string(),
    }
}

/// Value for an `<input type="date">`.
pub fn input_date(value: NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

/// Rupiah, rounded to whole units with `.` as the thousands separator:
/// `4000.0` -> `Rp 4.000`.
pub fn rupiah(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("{sign}Rp {grouped}")
}

/// Today's date in the browser's local time zone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rupiah_grouping() {
        assert_eq!(rupiah(0.0), "Rp 0");
        assert_eq!(rupiah(500.0), "Rp 500");
        assert_eq!(rupiah(4000.0), "Rp 4.000");
        assert_eq!(rupiah(1_250_000.4), "Rp 1.250.000");
        assert_eq!(rupiah(-2500.0), "-Rp 2.500");
    }

    #[test]
    fn test_dates() {
        let d = NaiveDate::from_ymd_opt(2025, 2, 4).unwrap();
        assert_eq!(date(Some(d)), "04 Feb 2025");
        assert_eq!(date(None), "-");
        assert_eq!(input_date(d), "2025-02-04");
    }
}
