//! Date display and elapsed-duration formatting, pt-BR locale.
//!
//! Parsing failures never propagate: blank input renders as blank,
//! unparseable non-empty input surfaces verbatim.

use chrono::{Datelike, NaiveDate};

const MONTH_ABBR_PT: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Formats an ISO calendar date as lowercase abbreviated month + 4-digit
/// year, e.g. "mar 2021". Empty input yields the empty string; unparseable
/// non-empty input is returned unchanged.
pub fn format_display_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    match parse_iso_date(raw) {
        Some(date) => format!("{} {}", MONTH_ABBR_PT[date.month0() as usize], date.year()),
        None => raw.to_string(),
    }
}

/// Elapsed duration between two dates as a parenthesized human string,
/// e.g. "(2 anos e 3 meses)". The effective end is `today` when `current`
/// is set; the renderer passes the actual current date. Whole months only;
/// the day of month is ignored, a documented approximation.
pub fn calculate_duration(start: &str, end: &str, current: bool, today: NaiveDate) -> String {
    let Some(start_date) = parse_iso_date(start) else {
        return String::new();
    };
    let end_date = if current {
        today
    } else {
        match parse_iso_date(end) {
            Some(date) => date,
            None => return String::new(),
        }
    };

    let total_months = (end_date.year() - start_date.year()) * 12
        + (end_date.month() as i32 - start_date.month() as i32);
    if total_months <= 0 {
        return String::new();
    }

    let years = total_months / 12;
    let months = total_months % 12;
    let mut parts = Vec::new();
    if years > 0 {
        parts.push(format!("{years} ano{}", if years > 1 { "s" } else { "" }));
    }
    if months > 0 {
        parts.push(format!(
            "{months} {}",
            if months > 1 { "meses" } else { "mês" }
        ));
    }
    format!("({})", parts.join(" e "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_empty_is_empty() {
        assert_eq!(format_display_date(""), "");
    }

    #[test]
    fn test_format_unparseable_returns_input_unchanged() {
        assert_eq!(format_display_date("not-a-date"), "not-a-date");
    }

    #[test]
    fn test_format_valid_date_is_abbreviated_month_and_year() {
        assert_eq!(format_display_date("2021-03-15"), "mar 2021");
        assert_eq!(format_display_date("2019-12-01"), "dez 2019");
        assert_eq!(format_display_date("2024-01-31"), "jan 2024");
    }

    #[test]
    fn test_duration_current_counts_until_today() {
        let s = calculate_duration("2021-03-01", "", true, day(2023, 6, 1));
        assert!(s.contains("2 anos"), "got {s:?}");
        assert!(s.contains("3 meses"), "got {s:?}");
        assert_eq!(s, "(2 anos e 3 meses)");
    }

    #[test]
    fn test_duration_missing_start_is_empty() {
        assert_eq!(calculate_duration("", "2021-01-01", false, day(2023, 1, 1)), "");
    }

    #[test]
    fn test_duration_missing_end_not_current_is_empty() {
        assert_eq!(calculate_duration("2021-01-01", "", false, day(2023, 1, 1)), "");
    }

    #[test]
    fn test_duration_unparseable_dates_are_empty() {
        assert_eq!(calculate_duration("soon", "2021-01-01", false, day(2023, 1, 1)), "");
        assert_eq!(calculate_duration("2021-01-01", "later", false, day(2023, 1, 1)), "");
    }

    #[test]
    fn test_duration_singular_forms() {
        assert_eq!(
            calculate_duration("2021-01-01", "2022-02-01", false, day(2024, 1, 1)),
            "(1 ano e 1 mês)"
        );
    }

    #[test]
    fn test_duration_omits_zero_units() {
        assert_eq!(
            calculate_duration("2020-01-01", "2022-01-01", false, day(2024, 1, 1)),
            "(2 anos)"
        );
        assert_eq!(
            calculate_duration("2022-01-01", "2022-04-01", false, day(2024, 1, 1)),
            "(3 meses)"
        );
    }

    #[test]
    fn test_duration_zero_or_negative_span_is_empty() {
        assert_eq!(
            calculate_duration("2022-01-10", "2022-01-25", false, day(2024, 1, 1)),
            ""
        );
        assert_eq!(
            calculate_duration("2022-06-01", "2021-01-01", false, day(2024, 1, 1)),
            ""
        );
    }

    #[test]
    fn test_duration_ignores_day_of_month() {
        // 2021-01-31 to 2021-02-01 is one whole month by the approximation.
        assert_eq!(
            calculate_duration("2021-01-31", "2021-02-01", false, day(2024, 1, 1)),
            "(1 mês)"
        );
    }
}
