// src/core/dates.rs
//! Validity ranges as printed on the site: `"01.03.2024 - 15.03.2024"`.
//!
//! The year is dropped when it is the current one (`"01.03. - 15.03."`); such
//! tokens end in a bare `.` and get the caller's reference year appended.

use chrono::NaiveDate;

use crate::error::DateError;

const RANGE_SEP: &str = " - ";
const DATE_FMT: &str = "%d.%m.%Y";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Inclusive at both ends.
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

/// Parse both ends or nothing.
pub fn parse_date_range(text: &str, reference_year: i32) -> Result<DateRange, DateError> {
    let parts: Vec<&str> = text.trim().split(RANGE_SEP).collect();
    let [start, end] = parts.as_slice() else {
        return Err(DateError::Shape(s!(text)));
    };

    Ok(DateRange {
        start: parse_date(start.trim(), reference_year)?,
        end: parse_date(end.trim(), reference_year)?,
    })
}

/// One `DD.MM.YYYY` or `DD.MM.` token.
pub fn parse_date(token: &str, reference_year: i32) -> Result<NaiveDate, DateError> {
    let token = if has_elided_year(token) {
        format!("{token}{reference_year}")
    } else {
        s!(token)
    };

    NaiveDate::parse_from_str(&token, DATE_FMT)
        .map_err(|source| DateError::Token { token, source })
}

fn has_elided_year(token: &str) -> bool {
    token.matches('.').count() == 2 && token.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn full_dates() {
        let r = parse_date_range("10.01.2024 - 20.01.2024", 1999).unwrap();
        assert_eq!(r, DateRange { start: ymd(2024, 1, 10), end: ymd(2024, 1, 20) });
    }

    #[test]
    fn elided_years_take_reference_year() {
        let r = parse_date_range("01.03. - 15.03.", 2024).unwrap();
        assert_eq!(r.start, ymd(2024, 3, 1));
        assert_eq!(r.end, ymd(2024, 3, 15));
    }

    #[test]
    fn mixed_elision_and_padding() {
        let r = parse_date_range("  28.12. - 03.01.2025 ", 2024).unwrap();
        assert_eq!(r.start, ymd(2024, 12, 28));
        assert_eq!(r.end, ymd(2025, 1, 3));
    }

    #[test]
    fn one_bad_token_discards_the_range() {
        assert!(matches!(
            parse_date_range("31.02.2024 - 15.03.2024", 2024),
            Err(DateError::Token { ref token, .. }) if token == "31.02.2024"
        ));
        assert!(matches!(
            parse_date_range("01.03.2024 - ab.cd.", 2024),
            Err(DateError::Token { .. })
        ));
    }

    #[test]
    fn wrong_shape() {
        for text in ["01.03.2024", "01.03.2024 - 02.03.2024 - 03.03.2024", "01.03.2024-02.03.2024", ""] {
            assert!(matches!(parse_date_range(text, 2024), Err(DateError::Shape(_))), "{text:?}");
        }
    }

    #[test]
    fn three_dots_is_not_elision() {
        // "01.03.2024." keeps its dots and fails as a whole
        assert!(parse_date("01.03.2024.", 2024).is_err());
        assert!(!has_elided_year("01.03.2024"));
        assert!(has_elided_year("01.03."));
    }

    #[test]
    fn contains_is_inclusive() {
        let r = DateRange { start: ymd(2024, 1, 10), end: ymd(2024, 1, 20) };
        assert!(r.contains(ymd(2024, 1, 10)));
        assert!(r.contains(ymd(2024, 1, 15)));
        assert!(r.contains(ymd(2024, 1, 20)));
        assert!(!r.contains(ymd(2024, 1, 9)));
        assert!(!r.contains(ymd(2024, 1, 21)));
    }
}
