use super::{from_iso, to_iso, SupportedYears};
use crate::domain::model::{CalendarKind, ForeignDate};
use crate::domain::ports::CalendarConverter;
use crate::utils::error::{HolidayError, Result};
use chrono::NaiveDate;
use icu_calendar::cal::Chinese;
use icu_calendar::types::MonthCode;
use icu_calendar::{Date, Ref};

/// Chinese lunisolar calendar backed by `icu_calendar`.
///
/// Foreign years are the related Gregorian year in which the lunar year
/// starts (lunar 2019/1/1 is 2019-02-05). Months are the regular months;
/// leap months report the number of the month they follow.
#[derive(Debug, Clone)]
pub struct ChineseLunar {
    calendar: Chinese,
    supported: SupportedYears,
}

impl ChineseLunar {
    pub fn new(supported: SupportedYears) -> Self {
        Self {
            calendar: Chinese::new(),
            supported,
        }
    }
}

impl Default for ChineseLunar {
    fn default() -> Self {
        Self::new(SupportedYears::LUNAR)
    }
}

impl CalendarConverter for ChineseLunar {
    fn to_foreign(&self, date: NaiveDate) -> Result<ForeignDate> {
        self.supported.check_input(CalendarKind::Lunar, date)?;
        let lunar = to_iso(CalendarKind::Lunar, date)?.to_calendar(Ref(&self.calendar));
        let month = lunar.month();
        Ok(ForeignDate::new(
            lunar.cyclic_year().related_iso,
            u32::from(month.month_number()),
            u32::from(lunar.day_of_month().0),
        ))
    }

    fn to_gregorian(&self, date: ForeignDate) -> Result<NaiveDate> {
        let code = u8::try_from(date.month)
            .ok()
            .and_then(MonthCode::new_normal)
            .ok_or_else(|| {
                HolidayError::conversion(CalendarKind::Lunar, format!("invalid month {}", date.month))
            })?;
        let day = u8::try_from(date.day).map_err(|e| HolidayError::conversion(CalendarKind::Lunar, e))?;

        let lunar = Date::try_new_from_codes(None, date.year, code, day, Ref(&self.calendar))
            .map_err(|e| HolidayError::conversion(CalendarKind::Lunar, e))?;
        let gregorian = from_iso(CalendarKind::Lunar, &lunar.to_iso())?;
        self.supported.check_output(CalendarKind::Lunar, gregorian)?;
        Ok(gregorian)
    }
}
