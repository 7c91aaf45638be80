use chrono::NaiveDate;

/// Regex fragment for a calendar date token. Shared by every rule so the
/// pipeline agrees on what a date looks like before parsing decides whether
/// it is real.
pub const DATE_TOKEN: &str = r"\d{4}-\d{2}-\d{2}";

/// Strict `YYYY-MM-DD` parse. `2025-13-40` and friends come back as None.
pub fn parse_date_token(token: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(token, "%Y-%m-%d").ok()
}

/// Whether a date token is strictly older than the cutoff. Malformed tokens
/// are never stale; the rule that asked simply does not fire.
pub fn is_stale(token: &str, cutoff: NaiveDate) -> bool {
    match parse_date_token(token) {
        Some(date) => date < cutoff,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cutoff() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()
    }

    #[test]
    fn test_parse_date_token() {
        let date = parse_date_token("2024-01-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());

        // Out-of-range components fail the parse
        assert!(parse_date_token("2025-13-40").is_none());
        assert!(parse_date_token("2025-02-30").is_none());
        assert!(parse_date_token("not-a-date").is_none());
    }

    #[test]
    fn test_is_stale_before_cutoff() {
        assert!(is_stale("2025-04-30", cutoff()));
        assert!(is_stale("2024-12-01", cutoff()));
    }

    #[test]
    fn test_is_stale_on_or_after_cutoff() {
        assert!(!is_stale("2025-05-01", cutoff()));
        assert!(!is_stale("2025-06-01", cutoff()));
    }

    #[test]
    fn test_is_stale_malformed_is_never_stale() {
        assert!(!is_stale("2025-13-40", cutoff()));
        assert!(!is_stale("", cutoff()));
    }
}
