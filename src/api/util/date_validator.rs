use chrono::NaiveDate;
use tracing::warn;

use crate::domain::report::model::date_range::{parse_strict_date, DateRange};
use crate::errors::AppError;

/// Path date in strict `YYYY-MM-DD` form.
pub fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    parse_strict_date(raw).ok_or_else(|| {
        warn!("Rejected date path segment '{}'", raw);
        AppError::InvalidDate(format!("'{raw}' is not a YYYY-MM-DD date"))
    })
}

/// Both ends parsed strictly; `start` after `end` is rejected.
pub fn parse_range(start: &str, end: &str) -> Result<DateRange, AppError> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;
    DateRange::validated(start, end).map_err(|e| {
        warn!("Rejected date range {} .. {}", start, end);
        AppError::from(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_canonical_dates() {
        assert_eq!(
            parse_date("2020-03-10").unwrap(),
            NaiveDate::from_ymd_opt(2020, 3, 10).unwrap()
        );
    }

    #[test]
    fn rejects_loose_or_impossible_dates() {
        for raw in ["2020-3-10", "10-03-2020", "2020-02-30", "yesterday", ""] {
            assert!(matches!(parse_date(raw), Err(AppError::InvalidDate(_))), "{raw}");
        }
    }

    #[test]
    fn single_day_range_is_allowed() {
        let range = parse_range("2020-03-10", "2020-03-10").unwrap();
        assert_eq!(range.start, range.end);
    }

    #[test]
    fn reversed_range_is_invalid() {
        assert!(matches!(
            parse_range("2020-03-12", "2020-03-10"),
            Err(AppError::InvalidRange(_))
        ));
    }

    #[test]
    fn bad_end_is_invalid_date_not_range() {
        assert!(matches!(
            parse_range("2020-03-10", "2020-13-01"),
            Err(AppError::InvalidDate(_))
        ));
    }
}
