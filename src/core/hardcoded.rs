use crate::domain::model::{UnsupportedYear, YearTable};
use crate::utils::error::{HolidayError, Result};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(NaiveDate),
    Unsupported(UnsupportedYear),
}

/// Looks `year` up in an explicit table.
///
/// A missing year is not an error; the caller decides how to report it.
/// A malformed entry (e.g. 31 February) is.
pub fn lookup(holiday: &str, table: &YearTable, year: i32) -> Result<Lookup> {
    let Some(entry) = table.entry(year) else {
        return Ok(Lookup::Unsupported(UnsupportedYear {
            holiday: holiday.to_string(),
            year,
            supported: table.supported_range(),
        }));
    };

    NaiveDate::from_ymd_opt(entry.year, entry.month, entry.day)
        .map(Lookup::Found)
        .ok_or_else(|| {
            HolidayError::invalid_definition(
                holiday,
                format!("{}-{:02}-{:02} is not a date", entry.year, entry.month, entry.day),
            )
        })
}
