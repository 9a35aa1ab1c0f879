use crate::adapters::CalendarProviders;
use crate::core::anchor::AnchorOffsetResolver;
use crate::core::foreign::{ForeignCalendarResolver, ForeignOccurrence};
use crate::core::hardcoded::{self, Lookup};
use crate::core::search::shift_days;
use crate::domain::model::{
    Country, HolidayDefinition, HolidayEntry, UnsupportedYear, WeekendRule,
};
use crate::utils::error::Result;
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::{BTreeMap, BTreeSet};

pub type HolidaySet = BTreeMap<NaiveDate, String>;

/// Holidays of one country for one year, plus the table lookups that had no
/// answer for that year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuiltYear {
    pub holidays: HolidaySet,
    pub unsupported: Vec<UnsupportedYear>,
}

/// Applies a country's holiday table to a year.
pub struct HolidaySetBuilder<'p> {
    providers: &'p CalendarProviders,
    observed: bool,
}

impl<'p> HolidaySetBuilder<'p> {
    pub fn new(providers: &'p CalendarProviders) -> Self {
        Self {
            providers,
            observed: true,
        }
    }

    pub fn observed(mut self, observed: bool) -> Self {
        self.observed = observed;
        self
    }

    pub fn build(&self, country: &Country, year: i32) -> Result<BuiltYear> {
        let mut built = BuiltYear::default();

        for entry in &country.holidays {
            if !entry.active.contains(year) {
                continue;
            }
            let dates = match self.resolve(entry, year)? {
                Resolution::Dates(dates) => dates,
                Resolution::Unsupported(missing) => {
                    built.unsupported.push(missing);
                    continue;
                }
            };
            for date in dates {
                let Some(date) = self.apply_weekend_rule(entry.weekend, date)? else {
                    continue;
                };
                // Later entries overwrite earlier ones on the same date.
                if let Some(previous) = built.holidays.insert(date, entry.name.clone()) {
                    if previous != entry.name {
                        tracing::debug!(
                            "{} {}: '{}' replaces '{}'",
                            country.code,
                            date,
                            entry.name,
                            previous
                        );
                    }
                }
            }
        }

        Ok(built)
    }

    fn resolve(&self, entry: &HolidayEntry, year: i32) -> Result<Resolution> {
        let dates = match &entry.rule {
            HolidayDefinition::FixedDate { month, day } => {
                // 29 February simply does not occur in common years.
                NaiveDate::from_ymd_opt(year, *month, *day).into_iter().collect()
            }
            HolidayDefinition::EasterRelative {
                offset_days,
                variant,
            } => AnchorOffsetResolver::new(self.providers.easter(*variant))
                .resolve(year, *offset_days)?,
            HolidayDefinition::ForeignCalendarDate {
                calendar,
                month,
                day,
                day_count,
                offset_days,
            } => ForeignCalendarResolver::with_anchor(
                self.providers.converter(*calendar),
                self.providers.foreign_anchor(),
            )
            .resolve_occurrence(
                year,
                ForeignOccurrence {
                    month: *month,
                    day: *day,
                    day_count: *day_count,
                    offset_days: *offset_days,
                },
            )?,
            HolidayDefinition::HardcodedYearTable { table } => {
                match hardcoded::lookup(&entry.name, table, year)? {
                    Lookup::Found(date) => BTreeSet::from([date]),
                    Lookup::Unsupported(missing) => return Ok(Resolution::Unsupported(missing)),
                }
            }
        };
        Ok(Resolution::Dates(dates))
    }

    fn apply_weekend_rule(&self, rule: WeekendRule, date: NaiveDate) -> Result<Option<NaiveDate>> {
        let weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
        match rule {
            WeekendRule::Keep => Ok(Some(date)),
            WeekendRule::OmitUnlessObserved if weekend && !self.observed => Ok(None),
            WeekendRule::OmitUnlessObserved => Ok(Some(date)),
            WeekendRule::MondayIfWeekend => match date.weekday() {
                Weekday::Sat => shift_days(date, 2).map(Some),
                Weekday::Sun => shift_days(date, 1).map(Some),
                _ => Ok(Some(date)),
            },
        }
    }
}

enum Resolution {
    Dates(BTreeSet<NaiveDate>),
    Unsupported(UnsupportedYear),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn country(holidays: Vec<HolidayEntry>) -> Country {
        Country {
            code: "XX".to_string(),
            name: "Testland".to_string(),
            aliases: vec![],
            holidays,
        }
    }

    #[test]
    fn test_last_definition_wins_on_same_date() {
        let providers = CalendarProviders::default();
        let c = country(vec![
            HolidayEntry::fixed("Labour Day", 5, 1),
            HolidayEntry::fixed("Spring Day", 5, 1),
        ]);
        let built = HolidaySetBuilder::new(&providers).build(&c, 2020).unwrap();
        assert_eq!(built.holidays.get(&ymd(2020, 5, 1)).map(String::as_str), Some("Spring Day"));
        assert_eq!(built.holidays.len(), 1);
    }

    #[test]
    fn test_year_span_filters_entries() {
        let providers = CalendarProviders::default();
        let c = country(vec![
            HolidayEntry::fixed("New Day", 6, 1).since(2017),
            HolidayEntry::fixed("Old Day", 5, 5).until(2016),
        ]);
        let builder = HolidaySetBuilder::new(&providers);
        let early = builder.build(&c, 2016).unwrap();
        let late = builder.build(&c, 2017).unwrap();
        assert_eq!(early.holidays.values().collect::<Vec<_>>(), vec!["Old Day"]);
        assert_eq!(late.holidays.values().collect::<Vec<_>>(), vec!["New Day"]);
    }

    #[test]
    fn test_weekend_rules() {
        let providers = CalendarProviders::default();
        // 2018-01-01 is a Monday, 2017-01-01 a Sunday, 2018-04-07 a Saturday.
        let c = country(vec![
            HolidayEntry::fixed("New Year's Day", 1, 1).weekend(WeekendRule::OmitUnlessObserved),
            HolidayEntry::fixed("Memorial Day", 4, 7).weekend(WeekendRule::MondayIfWeekend),
        ]);
        let unobserved = HolidaySetBuilder::new(&providers).observed(false);
        assert!(!unobserved.build(&c, 2017).unwrap().holidays.contains_key(&ymd(2017, 1, 1)));
        assert!(unobserved.build(&c, 2018).unwrap().holidays.contains_key(&ymd(2018, 1, 1)));

        let observed = HolidaySetBuilder::new(&providers);
        assert!(observed.build(&c, 2017).unwrap().holidays.contains_key(&ymd(2017, 1, 1)));
        let shifted = observed.build(&c, 2018).unwrap();
        assert_eq!(
            shifted.holidays.get(&ymd(2018, 4, 9)).map(String::as_str),
            Some("Memorial Day")
        );
    }

    #[test]
    fn test_leap_day_only_in_leap_years() {
        let providers = CalendarProviders::default();
        let c = country(vec![HolidayEntry::fixed("Leap Day", 2, 29)]);
        let builder = HolidaySetBuilder::new(&providers);
        assert!(builder.build(&c, 2019).unwrap().holidays.is_empty());
        assert_eq!(builder.build(&c, 2020).unwrap().holidays.len(), 1);
    }

    #[test]
    fn test_unsupported_table_year_is_collected() {
        let providers = CalendarProviders::default();
        let c = country(vec![HolidayEntry::table("Festival", &[(2018, 3, 17), (2019, 3, 7)])]);
        let built = HolidaySetBuilder::new(&providers).build(&c, 2020).unwrap();
        assert!(built.holidays.is_empty());
        assert_eq!(built.unsupported.len(), 1);
        assert_eq!(built.unsupported[0].year, 2020);
    }
}
