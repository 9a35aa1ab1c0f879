use crate::adapters::CalendarProviders;
use crate::core::builder::{HolidaySet, HolidaySetBuilder};
use crate::domain::model::{Country, HolidayRow, ResolvedHoliday, UnsupportedYear};
use crate::utils::error::Result;
use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

/// Holidays of a single country, populated lazily one year at a time.
///
/// A year is built on first access and never rebuilt, so repeated queries for
/// the same year return the same mapping. Years whose hard-coded tables have
/// no entry are reported once through `tracing` and kept in
/// [`CountryCalendar::diagnostics`].
pub struct CountryCalendar {
    country: Arc<Country>,
    providers: Arc<CalendarProviders>,
    observed: bool,
    years: BTreeMap<i32, HolidaySet>,
    reported: HashSet<UnsupportedYear>,
    diagnostics: Vec<UnsupportedYear>,
}

impl CountryCalendar {
    pub fn new(country: Arc<Country>, providers: Arc<CalendarProviders>) -> Self {
        Self {
            country,
            providers,
            observed: true,
            years: BTreeMap::new(),
            reported: HashSet::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn with_observed(mut self, observed: bool) -> Self {
        if observed != self.observed {
            self.years.clear();
        }
        self.observed = observed;
        self
    }

    pub fn country(&self) -> &Country {
        &self.country
    }

    pub fn populate(&mut self, year: i32) -> Result<&HolidaySet> {
        if !self.years.contains_key(&year) {
            let built = HolidaySetBuilder::new(&self.providers)
                .observed(self.observed)
                .build(&self.country, year)?;

            for missing in built.unsupported {
                if self.reported.insert(missing.clone()) {
                    tracing::warn!("{}: {}", self.country.code, missing);
                    self.diagnostics.push(missing);
                }
            }

            tracing::debug!(
                "Populated {} holidays for {} {}",
                built.holidays.len(),
                self.country.code,
                year
            );
            self.years.insert(year, built.holidays);
        }

        Ok(&self.years[&year])
    }

    /// Holiday name on `date`, populating its year if needed.
    pub fn get(&mut self, date: NaiveDate) -> Result<Option<&str>> {
        let holidays = self.populate(date.year())?;
        Ok(holidays.get(&date).map(String::as_str))
    }

    pub fn is_holiday(&mut self, date: NaiveDate) -> Result<bool> {
        Ok(self.get(date)?.is_some())
    }

    pub fn resolved(&mut self, year: i32) -> Result<Vec<ResolvedHoliday>> {
        Ok(self
            .populate(year)?
            .iter()
            .map(|(date, name)| ResolvedHoliday {
                date: *date,
                name: name.clone(),
            })
            .collect())
    }

    /// Export rows for every year in `first..=last`, ordered by date.
    pub fn rows(&mut self, first: i32, last: i32) -> Result<Vec<HolidayRow>> {
        let mut rows = Vec::new();
        for year in first..=last {
            let code = self.country.code.clone();
            rows.extend(self.populate(year)?.iter().map(|(ds, holiday)| HolidayRow {
                country: code.clone(),
                ds: *ds,
                holiday: holiday.clone(),
            }));
        }
        Ok(rows)
    }

    pub fn diagnostics(&self) -> &[UnsupportedYear] {
        &self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::HolidayEntry;

    fn testland() -> Arc<Country> {
        Arc::new(Country {
            code: "XX".to_string(),
            name: "Testland".to_string(),
            aliases: vec![],
            holidays: vec![
                HolidayEntry::fixed("New Year's Day", 1, 1),
                HolidayEntry::easter("Good Friday", -2),
                HolidayEntry::table("Festival", &[(2018, 3, 17), (2019, 3, 7)]),
            ],
        })
    }

    #[test]
    fn test_populate_is_idempotent() {
        let mut calendar = CountryCalendar::new(testland(), Arc::new(CalendarProviders::default()));
        let first = calendar.populate(2019).unwrap().clone();
        let second = calendar.populate(2019).unwrap().clone();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_unsupported_year_reported_once() {
        let mut calendar = CountryCalendar::new(testland(), Arc::new(CalendarProviders::default()));
        calendar.populate(2020).unwrap();
        calendar.populate(2020).unwrap();
        assert_eq!(calendar.diagnostics().len(), 1);
        assert_eq!(calendar.diagnostics()[0].year, 2020);

        calendar.populate(2021).unwrap();
        assert_eq!(calendar.diagnostics().len(), 2);
    }

    #[test]
    fn test_lookup_by_date() {
        let mut calendar = CountryCalendar::new(testland(), Arc::new(CalendarProviders::default()));
        let good_friday = NaiveDate::from_ymd_opt(2019, 4, 19).unwrap();
        assert_eq!(calendar.get(good_friday).unwrap(), Some("Good Friday"));
        assert!(!calendar
            .is_holiday(NaiveDate::from_ymd_opt(2019, 4, 20).unwrap())
            .unwrap());
    }

    #[test]
    fn test_rows_span_years() {
        let mut calendar = CountryCalendar::new(testland(), Arc::new(CalendarProviders::default()));
        let rows = calendar.rows(2018, 2019).unwrap();
        assert_eq!(rows.len(), 6);
        assert!(rows.windows(2).all(|w| w[0].ds < w[1].ds));
        assert!(rows.iter().all(|r| r.country == "XX"));
    }
}
