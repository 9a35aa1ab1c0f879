use crate::core::search::{keep_in_year, neighbouring_years, shift_days};
use crate::domain::model::ForeignDate;
use crate::domain::ports::CalendarConverter;
use crate::utils::error::{HolidayError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Gregorian month/day used to find which foreign year is "current" around a
/// Gregorian year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorDay {
    pub month: u32,
    pub day: u32,
}

impl Default for AnchorDay {
    fn default() -> Self {
        Self { month: 7, day: 1 }
    }
}

/// A foreign (month, day) occurrence, possibly spanning several days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignOccurrence {
    pub month: u32,
    pub day: u32,
    pub day_count: u32,
    pub offset_days: i64,
}

impl ForeignOccurrence {
    pub fn single(month: u32, day: u32) -> Self {
        Self {
            month,
            day,
            day_count: 1,
            offset_days: 0,
        }
    }
}

/// Resolves holidays defined by a date in a drifting foreign calendar.
pub struct ForeignCalendarResolver<C: CalendarConverter> {
    converter: C,
    anchor: AnchorDay,
}

impl<C: CalendarConverter> ForeignCalendarResolver<C> {
    pub fn new(converter: C) -> Self {
        Self::with_anchor(converter, AnchorDay::default())
    }

    pub fn with_anchor(converter: C, anchor: AnchorDay) -> Self {
        Self { converter, anchor }
    }

    /// Gregorian dates in `year` on which foreign `(month, day)` and the
    /// following `day_count - 1` days fall.
    pub fn resolve(
        &self,
        year: i32,
        month: u32,
        day: u32,
        day_count: u32,
    ) -> Result<BTreeSet<NaiveDate>> {
        self.resolve_occurrence(
            year,
            ForeignOccurrence {
                month,
                day,
                day_count,
                offset_days: 0,
            },
        )
    }

    pub fn resolve_occurrence(
        &self,
        year: i32,
        occurrence: ForeignOccurrence,
    ) -> Result<BTreeSet<NaiveDate>> {
        let mut candidates = Vec::new();
        for foreign_year in self.candidate_years(year)? {
            let first = self.converter.to_gregorian(ForeignDate::new(
                foreign_year,
                occurrence.month,
                occurrence.day,
            ))?;
            let first = shift_days(first, occurrence.offset_days)?;
            for i in 0..occurrence.day_count.max(1) {
                candidates.push(shift_days(first, i64::from(i))?);
            }
        }
        Ok(keep_in_year(year, candidates))
    }

    /// Foreign years current at the anchor day of `year - 1 ..= year + 1`,
    /// widened to a contiguous span. A foreign year shorter than the
    /// Gregorian one can start and end between two anchors.
    fn candidate_years(&self, year: i32) -> Result<std::ops::RangeInclusive<i32>> {
        let mut lowest = i32::MAX;
        let mut highest = i32::MIN;
        for anchor_year in neighbouring_years(year) {
            let anchor = NaiveDate::from_ymd_opt(anchor_year, self.anchor.month, self.anchor.day)
                .ok_or_else(|| HolidayError::InvalidConfigValueError {
                    field: "calendar.foreign_anchor".to_string(),
                    value: format!("{}-{}", self.anchor.month, self.anchor.day),
                    reason: format!("not a valid date in {}", anchor_year),
                })?;
            let foreign_year = self.converter.to_foreign(anchor)?.year;
            lowest = lowest.min(foreign_year);
            highest = highest.max(foreign_year);
        }
        Ok(lowest..=highest)
    }
}
