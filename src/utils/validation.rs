use crate::domain::model::{Country, HolidayDefinition, HolidayEntry};
use crate::utils::error::{HolidayError, Result};
use chrono::NaiveDate;
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HolidayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(HolidayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_year_bounds(field_name: &str, first: i32, last: i32) -> Result<()> {
    if first > last {
        return Err(HolidayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{}..={}", first, last),
            reason: "First year must not be after last year".to_string(),
        });
    }
    Ok(())
}

/// Accepts any month/day that exists in a leap year.
pub fn validate_month_day(field_name: &str, month: u32, day: u32) -> Result<()> {
    if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
        return Err(HolidayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{}/{}", month, day),
            reason: "Not a calendar day".to_string(),
        });
    }
    Ok(())
}

impl Validate for HolidayEntry {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("holiday.name", &self.name)?;
        let invalid = |reason: String| HolidayError::invalid_definition(&self.name, reason);

        match &self.rule {
            HolidayDefinition::FixedDate { month, day } => {
                validate_month_day("holiday.rule", *month, *day)
                    .map_err(|_| invalid(format!("{}/{} is not a calendar day", month, day)))?;
            }
            HolidayDefinition::EasterRelative { offset_days, .. } => {
                validate_range("holiday.rule.offset_days", *offset_days, -300, 300)
                    .map_err(|e| invalid(e.to_string()))?;
            }
            HolidayDefinition::ForeignCalendarDate {
                month,
                day,
                day_count,
                offset_days,
                ..
            } => {
                validate_range("holiday.rule.month", *month, 1, 12)
                    // Day 30 is missing from short lunar and Hijri months.
                    .and_then(|_| validate_range("holiday.rule.day", *day, 1, 29))
                    .and_then(|_| validate_range("holiday.rule.day_count", *day_count, 1, 30))
                    .and_then(|_| validate_range("holiday.rule.offset_days", *offset_days, -300, 300))
                    .map_err(|e| invalid(e.to_string()))?;
            }
            HolidayDefinition::HardcodedYearTable { table } => {
                if table.entries.is_empty() {
                    return Err(invalid("year table has no entries".to_string()));
                }
                let mut seen = HashSet::new();
                for e in &table.entries {
                    if NaiveDate::from_ymd_opt(e.year, e.month, e.day).is_none() {
                        return Err(invalid(format!("{}-{}-{} is not a date", e.year, e.month, e.day)));
                    }
                    if !seen.insert(e.year) {
                        return Err(invalid(format!("year {} is listed twice", e.year)));
                    }
                }
            }
        }

        if let (Some(since), Some(until)) = (self.active.since, self.active.until) {
            validate_year_bounds("holiday.active", since, until)
                .map_err(|_| invalid(format!("active span {}..={} is empty", since, until)))?;
        }
        Ok(())
    }
}

impl Validate for Country {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("country.code", &self.code)?;
        validate_non_empty_string("country.name", &self.name)?;
        for alias in &self.aliases {
            validate_non_empty_string("country.aliases", alias)?;
        }
        for holiday in &self.holidays {
            holiday.validate()?;
        }
        Ok(())
    }
}
