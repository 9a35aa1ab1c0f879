// Adapters layer: concrete anchor and calendar providers behind the domain ports.

pub mod easter;
pub mod hijri;
pub mod lunar;

use crate::core::foreign::AnchorDay;
use crate::core::search::SEARCH_RADIUS;
use crate::domain::model::{CalendarKind, EasterVariant};
use crate::domain::ports::{AnchorFunction, CalendarConverter};
use crate::utils::error::{HolidayError, Result};
use chrono::{Datelike, NaiveDate};
use icu_calendar::{Date, Iso};
use serde::{Deserialize, Serialize};

pub use easter::EasterSunday;
pub use hijri::TabularHijri;
pub use lunar::ChineseLunar;

/// Inclusive Gregorian target years a converter can resolve holidays for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedYears {
    pub first: i32,
    pub last: i32,
}

impl SupportedYears {
    pub const LUNAR: SupportedYears = SupportedYears {
        first: 1900,
        last: 2100,
    };
    pub const HIJRI: SupportedYears = SupportedYears {
        first: 1000,
        last: 3000,
    };

    /// Whether holidays of target `year` can be resolved.
    pub fn contains(&self, year: i32) -> bool {
        (self.first..=self.last).contains(&year)
    }

    /// Gregorian dates handed to a converter: the anchors of the
    /// neighbouring years of every supported target year.
    fn check_input(&self, calendar: CalendarKind, date: NaiveDate) -> Result<()> {
        self.check(calendar, date, SEARCH_RADIUS)
    }

    /// Gregorian dates a converter produces: one more year, since a foreign
    /// year found at the last anchor may end in the following Gregorian year.
    fn check_output(&self, calendar: CalendarKind, date: NaiveDate) -> Result<()> {
        self.check(calendar, date, SEARCH_RADIUS + 1)
    }

    fn check(&self, calendar: CalendarKind, date: NaiveDate, margin: i32) -> Result<()> {
        let reachable = self.first.saturating_sub(margin)..=self.last.saturating_add(margin);
        if reachable.contains(&date.year()) {
            Ok(())
        } else {
            Err(HolidayError::conversion(
                calendar,
                format!(
                    "{} is outside the supported years {}..={}",
                    date, self.first, self.last
                ),
            ))
        }
    }
}

fn to_iso(calendar: CalendarKind, date: NaiveDate) -> Result<Date<Iso>> {
    Date::try_new_iso(date.year(), date.month() as u8, date.day() as u8)
        .map_err(|e| HolidayError::conversion(calendar, e))
}

fn from_iso(calendar: CalendarKind, date: &Date<Iso>) -> Result<NaiveDate> {
    let year = date.extended_year();
    let month = u32::from(date.month().ordinal);
    let day = u32::from(date.day_of_month().0);
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        HolidayError::conversion(calendar, format!("{}-{}-{} is not representable", year, month, day))
    })
}

/// The anchor functions and converters a holiday set is resolved against.
#[derive(Debug, Clone)]
pub struct CalendarProviders {
    western: EasterSunday,
    orthodox: EasterSunday,
    lunar: ChineseLunar,
    hijri: TabularHijri,
    foreign_anchor: AnchorDay,
}

impl CalendarProviders {
    pub fn new(lunar_years: SupportedYears, hijri_years: SupportedYears, foreign_anchor: AnchorDay) -> Self {
        Self {
            western: EasterSunday::western(),
            orthodox: EasterSunday::orthodox(),
            lunar: ChineseLunar::new(lunar_years),
            hijri: TabularHijri::new(hijri_years),
            foreign_anchor,
        }
    }

    pub fn easter(&self, variant: EasterVariant) -> &dyn AnchorFunction {
        match variant {
            EasterVariant::Western => &self.western,
            EasterVariant::Orthodox => &self.orthodox,
        }
    }

    pub fn converter(&self, kind: CalendarKind) -> &dyn CalendarConverter {
        match kind {
            CalendarKind::Lunar => &self.lunar,
            CalendarKind::Hijri => &self.hijri,
        }
    }

    pub fn foreign_anchor(&self) -> AnchorDay {
        self.foreign_anchor
    }
}

impl Default for CalendarProviders {
    fn default() -> Self {
        Self::new(SupportedYears::LUNAR, SupportedYears::HIJRI, AnchorDay::default())
    }
}
