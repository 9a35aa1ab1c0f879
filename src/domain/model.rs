use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasterVariant {
    Western,
    Orthodox,
}

impl fmt::Display for EasterVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EasterVariant::Western => write!(f, "western easter"),
            EasterVariant::Orthodox => write!(f, "orthodox easter"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarKind {
    Lunar,
    Hijri,
}

impl fmt::Display for CalendarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarKind::Lunar => write!(f, "lunar"),
            CalendarKind::Hijri => write!(f, "hijri"),
        }
    }
}

/// A (year, month, day) triple in a non-Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ForeignDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl ForeignDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

/// One row of a hard-coded year table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearTableEntry {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Explicit year → date table for holidays that cannot be computed.
///
/// The supported range is the span between the first and last listed year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearTable {
    pub entries: Vec<YearTableEntry>,
}

impl YearTable {
    pub fn from_triples(triples: &[(i32, u32, u32)]) -> Self {
        let mut entries: Vec<YearTableEntry> = triples
            .iter()
            .map(|&(year, month, day)| YearTableEntry { year, month, day })
            .collect();
        entries.sort_by_key(|e| e.year);
        Self { entries }
    }

    pub fn supported_range(&self) -> Option<(i32, i32)> {
        let first = self.entries.iter().map(|e| e.year).min()?;
        let last = self.entries.iter().map(|e| e.year).max()?;
        Some((first, last))
    }

    pub fn entry(&self, year: i32) -> Option<&YearTableEntry> {
        self.entries.iter().find(|e| e.year == year)
    }
}

fn default_day_count() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HolidayDefinition {
    FixedDate {
        month: u32,
        day: u32,
    },
    EasterRelative {
        #[serde(default)]
        offset_days: i64,
        variant: EasterVariant,
    },
    /// `day` stops at 29 since short lunar and Hijri months have no day 30;
    /// use `offset_days` from the next month's first day instead.
    ForeignCalendarDate {
        calendar: CalendarKind,
        month: u32,
        day: u32,
        #[serde(default = "default_day_count")]
        day_count: u32,
        #[serde(default)]
        offset_days: i64,
    },
    HardcodedYearTable {
        table: YearTable,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekendRule {
    #[default]
    Keep,
    /// Saturday and Sunday occurrences move to the following Monday.
    MondayIfWeekend,
    /// Weekend occurrences are dropped unless the calendar is observed.
    OmitUnlessObserved,
}

/// Inclusive year bounds; `None` means unbounded on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSpan {
    #[serde(default)]
    pub since: Option<i32>,
    #[serde(default)]
    pub until: Option<i32>,
}

impl YearSpan {
    pub fn contains(&self, year: i32) -> bool {
        self.since.map_or(true, |s| year >= s) && self.until.map_or(true, |u| year <= u)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayEntry {
    pub name: String,
    pub rule: HolidayDefinition,
    #[serde(default)]
    pub active: YearSpan,
    #[serde(default)]
    pub weekend: WeekendRule,
}

impl HolidayEntry {
    pub fn new(name: &str, rule: HolidayDefinition) -> Self {
        Self {
            name: name.to_string(),
            rule,
            active: YearSpan::default(),
            weekend: WeekendRule::Keep,
        }
    }

    pub fn fixed(name: &str, month: u32, day: u32) -> Self {
        Self::new(name, HolidayDefinition::FixedDate { month, day })
    }

    pub fn easter(name: &str, offset_days: i64) -> Self {
        Self::new(
            name,
            HolidayDefinition::EasterRelative {
                offset_days,
                variant: EasterVariant::Western,
            },
        )
    }

    pub fn orthodox_easter(name: &str, offset_days: i64) -> Self {
        Self::new(
            name,
            HolidayDefinition::EasterRelative {
                offset_days,
                variant: EasterVariant::Orthodox,
            },
        )
    }

    pub fn foreign(name: &str, calendar: CalendarKind, month: u32, day: u32) -> Self {
        Self::new(
            name,
            HolidayDefinition::ForeignCalendarDate {
                calendar,
                month,
                day,
                day_count: 1,
                offset_days: 0,
            },
        )
    }

    pub fn lunar(name: &str, month: u32, day: u32) -> Self {
        Self::foreign(name, CalendarKind::Lunar, month, day)
    }

    pub fn hijri(name: &str, month: u32, day: u32) -> Self {
        Self::foreign(name, CalendarKind::Hijri, month, day)
    }

    pub fn table(name: &str, triples: &[(i32, u32, u32)]) -> Self {
        Self::new(
            name,
            HolidayDefinition::HardcodedYearTable {
                table: YearTable::from_triples(triples),
            },
        )
    }

    /// Spans `count` consecutive foreign-calendar days. No effect on other rules.
    pub fn days(mut self, count: u32) -> Self {
        if let HolidayDefinition::ForeignCalendarDate { day_count, .. } = &mut self.rule {
            *day_count = count;
        }
        self
    }

    /// Shifts a foreign-calendar occurrence by whole days. No effect on other rules.
    pub fn shifted(mut self, days: i64) -> Self {
        if let HolidayDefinition::ForeignCalendarDate { offset_days, .. } = &mut self.rule {
            *offset_days = days;
        }
        self
    }

    pub fn since(mut self, year: i32) -> Self {
        self.active.since = Some(year);
        self
    }

    pub fn until(mut self, year: i32) -> Self {
        self.active.until = Some(year);
        self
    }

    pub fn weekend(mut self, rule: WeekendRule) -> Self {
        self.weekend = rule;
        self
    }
}

/// A holiday resolved to a concrete Gregorian date.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResolvedHoliday {
    pub date: NaiveDate,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub holidays: Vec<HolidayEntry>,
}

/// A year a hard-coded table could not answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnsupportedYear {
    pub holiday: String,
    pub year: i32,
    pub supported: Option<(i32, i32)>,
}

impl fmt::Display for UnsupportedYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.supported {
            Some((first, last)) => write!(
                f,
                "'{}' is only supported from {} to {}, requested {}",
                self.holiday, first, last, self.year
            ),
            None => write!(f, "'{}' has no dated entries, requested {}", self.holiday, self.year),
        }
    }
}

/// Export row, shaped like the holidays frame the forecasting side consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRow {
    pub country: String,
    pub ds: NaiveDate,
    pub holiday: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_span_bounds() {
        let span = YearSpan {
            since: Some(2017),
            until: None,
        };
        assert!(!span.contains(2016));
        assert!(span.contains(2017));
        assert!(YearSpan::default().contains(1900));
    }

    #[test]
    fn test_year_table_range() {
        let table = YearTable::from_triples(&[(2011, 3, 5), (2009, 3, 26), (2010, 3, 16)]);
        assert_eq!(table.supported_range(), Some((2009, 2011)));
        assert_eq!(table.entry(2010).map(|e| e.day), Some(16));
        assert!(table.entry(2012).is_none());
    }

    #[test]
    fn test_definition_from_toml() {
        let entry: HolidayEntry = toml::from_str(
            r#"
name = "Eid al-Fitr"
rule = { kind = "foreign_calendar_date", calendar = "hijri", month = 10, day = 1, day_count = 2 }
"#,
        )
        .unwrap();
        assert_eq!(entry, HolidayEntry::hijri("Eid al-Fitr", 10, 1).days(2));
    }
}
