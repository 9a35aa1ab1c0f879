use crate::domain::model::EasterVariant;
use crate::domain::ports::AnchorFunction;
use crate::utils::error::{HolidayError, Result};
use chrono::NaiveDate;

pub const FIRST_EASTER_YEAR: i32 = 1583;
pub const LAST_EASTER_YEAR: i32 = 4099;

/// Easter Sunday, as a Gregorian date, in Western or Orthodox reckoning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EasterSunday {
    variant: EasterVariant,
    name: &'static str,
}

impl EasterSunday {
    pub fn new(variant: EasterVariant) -> Self {
        let name = match variant {
            EasterVariant::Western => "western easter",
            EasterVariant::Orthodox => "orthodox easter",
        };
        Self { variant, name }
    }

    pub fn western() -> Self {
        Self::new(EasterVariant::Western)
    }

    pub fn orthodox() -> Self {
        Self::new(EasterVariant::Orthodox)
    }
}

impl AnchorFunction for EasterSunday {
    fn name(&self) -> &str {
        self.name
    }

    fn anchor(&self, year: i32) -> Result<NaiveDate> {
        if !(FIRST_EASTER_YEAR..=LAST_EASTER_YEAR).contains(&year) {
            return Err(HolidayError::AnchorUndefined {
                anchor: self.name.to_string(),
                year,
            });
        }

        let y = year;
        let g = y % 19;
        let (i, j, e) = match self.variant {
            EasterVariant::Western => {
                let c = y / 100;
                let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
                let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
                let j = (y + y / 4 + i + 2 - c + c / 4) % 7;
                (i, j, 0)
            }
            EasterVariant::Orthodox => {
                // Julian computus, then the Julian → Gregorian day gap.
                let i = (19 * g + 15) % 30;
                let j = (y + y / 4 + i) % 7;
                let mut e = 10;
                if y > 1600 {
                    e += y / 100 - 16 - (y / 100 - 16) / 4;
                }
                (i, j, e)
            }
        };

        let p = i - j + e;
        let day = 1 + (p + 27 + (p + 6) / 40) % 31;
        let month = 3 + (p + 26) / 30;

        NaiveDate::from_ymd_opt(y, month as u32, day as u32).ok_or(HolidayError::AnchorUndefined {
            anchor: self.name.to_string(),
            year,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_known_western_easters() {
        let easter = EasterSunday::western();
        assert_eq!(easter.anchor(2019).unwrap(), ymd(2019, 4, 21));
        assert_eq!(easter.anchor(2024).unwrap(), ymd(2024, 3, 31));
        assert_eq!(easter.anchor(2000).unwrap(), ymd(2000, 4, 23));
        assert_eq!(easter.anchor(2038).unwrap(), ymd(2038, 4, 25));
    }

    #[test]
    fn test_known_orthodox_easters() {
        let easter = EasterSunday::orthodox();
        assert_eq!(easter.anchor(2019).unwrap(), ymd(2019, 4, 28));
        assert_eq!(easter.anchor(2024).unwrap(), ymd(2024, 5, 5));
        assert_eq!(easter.anchor(2023).unwrap(), ymd(2023, 4, 16));
    }

    #[test]
    fn test_always_a_sunday() {
        for variant in [EasterVariant::Western, EasterVariant::Orthodox] {
            let easter = EasterSunday::new(variant);
            for year in 1900..=2100 {
                assert_eq!(easter.anchor(year).unwrap().weekday(), Weekday::Sun);
            }
        }
    }

    #[test]
    fn test_out_of_range_year() {
        let err = EasterSunday::western().anchor(1500).unwrap_err();
        assert!(matches!(err, HolidayError::AnchorUndefined { year: 1500, .. }));
    }
}
