use crate::domain::model::{Country, HolidayEntry, WeekendRule};

/// National holidays of Indonesia. Regional holidays are not included.
pub fn indonesia() -> Country {
    Country {
        code: "ID".to_string(),
        name: "Indonesia".to_string(),
        aliases: vec![],
        holidays: vec![
            HolidayEntry::fixed("New Year's Day", 1, 1).weekend(WeekendRule::OmitUnlessObserved),
            HolidayEntry::lunar("Chinese New Year", 1, 1),
            // Balinese calendar; only published dates are known.
            HolidayEntry::table(
                "Day of Silence/ Nyepi",
                &[
                    (2009, 3, 26),
                    (2010, 3, 16),
                    (2011, 3, 5),
                    (2012, 3, 23),
                    (2013, 3, 12),
                    (2014, 3, 31),
                    (2015, 3, 21),
                    (2016, 3, 9),
                    (2017, 3, 28),
                    (2018, 3, 17),
                    (2019, 3, 7),
                ],
            ),
            HolidayEntry::hijri("Ascension of the Prophet", 7, 27),
            HolidayEntry::fixed("Labor Day", 5, 1),
            HolidayEntry::easter("Ascension of Jesus", 39),
            HolidayEntry::lunar("Buddha's Birthday", 4, 15),
            HolidayEntry::fixed("Pancasila Day", 6, 1).since(2017),
            HolidayEntry::hijri("Eid al-Fitr", 10, 1).days(2),
            HolidayEntry::fixed("Independence Day", 8, 17),
            HolidayEntry::hijri("Feast of the Sacrifice", 12, 10),
            HolidayEntry::hijri("Islamic New Year", 1, 1),
            HolidayEntry::hijri("Birth of the Prophet", 3, 12),
            HolidayEntry::fixed("Christmas", 12, 25),
        ],
    }
}
