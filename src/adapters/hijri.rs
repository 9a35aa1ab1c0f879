use super::{from_iso, to_iso, SupportedYears};
use crate::domain::model::{CalendarKind, ForeignDate};
use crate::domain::ports::CalendarConverter;
use crate::utils::error::{HolidayError, Result};
use chrono::NaiveDate;
use icu_calendar::cal::{HijriTabular, HijriTabularEpoch, HijriTabularLeapYears};
use icu_calendar::Date;

/// Arithmetic (tabular) Islamic calendar: type II leap years, civil epoch
/// of Friday 16 July 622 (Julian).
#[derive(Debug, Clone, Copy)]
pub struct TabularHijri {
    calendar: HijriTabular,
    supported: SupportedYears,
}

impl TabularHijri {
    pub fn new(supported: SupportedYears) -> Self {
        Self {
            calendar: HijriTabular::new(HijriTabularLeapYears::TypeII, HijriTabularEpoch::Friday),
            supported,
        }
    }
}

impl Default for TabularHijri {
    fn default() -> Self {
        Self::new(SupportedYears::HIJRI)
    }
}

impl CalendarConverter for TabularHijri {
    fn to_foreign(&self, date: NaiveDate) -> Result<ForeignDate> {
        self.supported.check_input(CalendarKind::Hijri, date)?;
        let hijri = to_iso(CalendarKind::Hijri, date)?.to_calendar(self.calendar);
        Ok(ForeignDate::new(
            hijri.extended_year(),
            u32::from(hijri.month().ordinal),
            u32::from(hijri.day_of_month().0),
        ))
    }

    fn to_gregorian(&self, date: ForeignDate) -> Result<NaiveDate> {
        let month = u8::try_from(date.month).map_err(|e| HolidayError::conversion(CalendarKind::Hijri, e))?;
        let day = u8::try_from(date.day).map_err(|e| HolidayError::conversion(CalendarKind::Hijri, e))?;

        let hijri = Date::try_new_hijri_tabular_with_calendar(date.year, month, day, self.calendar)
            .map_err(|e| HolidayError::conversion(CalendarKind::Hijri, e))?;
        let gregorian = from_iso(CalendarKind::Hijri, &hijri.to_iso())?;
        self.supported.check_output(CalendarKind::Hijri, gregorian)?;
        Ok(gregorian)
    }
}
