use crate::domain::model::ForeignDate;
use crate::utils::error::Result;
use chrono::NaiveDate;

/// Computes a reference date (e.g. Easter Sunday) for a Gregorian year.
pub trait AnchorFunction: Send + Sync {
    fn name(&self) -> &str;
    fn anchor(&self, year: i32) -> Result<NaiveDate>;
}

/// Bidirectional conversion between the Gregorian calendar and a foreign one.
pub trait CalendarConverter: Send + Sync {
    fn to_foreign(&self, date: NaiveDate) -> Result<ForeignDate>;
    fn to_gregorian(&self, date: ForeignDate) -> Result<NaiveDate>;
}

impl<A: AnchorFunction + ?Sized> AnchorFunction for &A {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn anchor(&self, year: i32) -> Result<NaiveDate> {
        (**self).anchor(year)
    }
}

impl<C: CalendarConverter + ?Sized> CalendarConverter for &C {
    fn to_foreign(&self, date: NaiveDate) -> Result<ForeignDate> {
        (**self).to_foreign(date)
    }

    fn to_gregorian(&self, date: ForeignDate) -> Result<NaiveDate> {
        (**self).to_gregorian(date)
    }
}
