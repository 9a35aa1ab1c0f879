//! Year-boundary search policy shared by the anchor and foreign-calendar resolvers.
//!
//! Both resolvers compute candidates from the target year and its two
//! neighbours, then keep only what lands inside the target year. A window of
//! one year either side is enough for any offset smaller than about a year.

use crate::utils::error::{HolidayError, Result};
use chrono::{Datelike, Days, NaiveDate};
use std::collections::BTreeSet;

pub const SEARCH_RADIUS: i32 = 1;

/// `target - 1`, `target`, `target + 1`.
pub fn neighbouring_years(target: i32) -> impl Iterator<Item = i32> {
    (-SEARCH_RADIUS..=SEARCH_RADIUS).map(move |k| target + k)
}

/// Adds a signed number of days, failing instead of wrapping.
pub fn shift_days(date: NaiveDate, days: i64) -> Result<NaiveDate> {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.ok_or_else(|| HolidayError::DateOverflow {
        message: format!("{} {:+} days", date, days),
    })
}

/// Collects candidates into a set, dropping those outside `year`.
pub fn keep_in_year<I>(year: i32, candidates: I) -> BTreeSet<NaiveDate>
where
    I: IntoIterator<Item = NaiveDate>,
{
    candidates
        .into_iter()
        .filter(|d| d.year() == year)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_neighbouring_years() {
        let years: Vec<i32> = neighbouring_years(2020).collect();
        assert_eq!(years, vec![2019, 2020, 2021]);
    }

    #[test]
    fn test_shift_days_both_directions() {
        assert_eq!(shift_days(ymd(2019, 12, 31), 1).unwrap(), ymd(2020, 1, 1));
        assert_eq!(shift_days(ymd(2020, 3, 1), -1).unwrap(), ymd(2020, 2, 29));
        assert!(shift_days(NaiveDate::MAX, 1).is_err());
    }

    #[test]
    fn test_keep_in_year_collapses_duplicates() {
        let kept = keep_in_year(
            2020,
            vec![ymd(2019, 12, 31), ymd(2020, 5, 1), ymd(2020, 5, 1), ymd(2021, 1, 1)],
        );
        assert_eq!(kept.into_iter().collect::<Vec<_>>(), vec![ymd(2020, 5, 1)]);
    }
}
