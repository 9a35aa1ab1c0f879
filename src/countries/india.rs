use crate::domain::model::{Country, HolidayEntry};

/// Holidays observed in all states and territories of India.
pub fn india() -> Country {
    Country {
        code: "IN".to_string(),
        name: "India".to_string(),
        aliases: vec![],
        holidays: vec![
            HolidayEntry::fixed("Republic Day", 1, 26),
            HolidayEntry::fixed("Independence Day", 8, 15),
            HolidayEntry::fixed("Gandhi Jayanti", 10, 2),
            HolidayEntry::table(
                "Diwali",
                &[
                    (2010, 12, 5),
                    (2011, 10, 26),
                    (2012, 11, 13),
                    (2013, 11, 3),
                    (2014, 10, 23),
                    (2015, 11, 11),
                    (2016, 10, 30),
                    (2017, 10, 19),
                    (2018, 11, 7),
                    (2019, 10, 27),
                    (2020, 11, 14),
                    (2021, 11, 4),
                    (2022, 10, 24),
                    (2023, 10, 12),
                    (2024, 11, 1),
                    (2025, 10, 21),
                    (2026, 11, 8),
                    (2027, 10, 29),
                    (2028, 10, 17),
                    (2029, 11, 5),
                    (2030, 10, 26),
                ],
            ),
            HolidayEntry::table(
                "Holi",
                &[
                    (2010, 2, 28),
                    (2011, 3, 19),
                    (2012, 3, 8),
                    (2013, 3, 26),
                    (2014, 3, 17),
                    (2015, 3, 6),
                    (2016, 3, 24),
                    (2017, 3, 13),
                    (2018, 3, 2),
                    (2019, 3, 21),
                    (2020, 3, 9),
                    (2021, 3, 28),
                    (2022, 3, 18),
                    (2023, 3, 7),
                    (2024, 3, 25),
                    (2025, 3, 14),
                    (2026, 3, 3),
                    (2027, 3, 22),
                    (2028, 3, 11),
                    (2029, 2, 28),
                    (2030, 3, 19),
                ],
            ),
            HolidayEntry::hijri("Day of Ashura", 1, 10),
            HolidayEntry::hijri("Mawlid", 3, 12),
            HolidayEntry::hijri("Eid al-Fitr", 10, 1).days(2),
            HolidayEntry::hijri("Feast of the Sacrifice", 12, 10),
            HolidayEntry::fixed("New Year's Day", 1, 1),
            HolidayEntry::easter("Palm Sunday", -7),
            HolidayEntry::easter("Maundy Thursday", -3),
            HolidayEntry::easter("Good Friday", -2),
            HolidayEntry::easter("Easter Sunday", 0),
            HolidayEntry::easter("Feast of Pentecost", 49),
            HolidayEntry::fixed("Fest of St. Theresa of Calcutta", 9, 5),
            HolidayEntry::fixed("Feast of the Blessed Virgin", 9, 8),
            HolidayEntry::fixed("All Saints Day", 11, 1),
            HolidayEntry::fixed("All Souls Day", 11, 2),
            HolidayEntry::fixed("Christmas Day", 12, 25),
            HolidayEntry::fixed("Boxing Day", 12, 26),
            HolidayEntry::fixed("Feast of Holy Family", 12, 30),
        ],
    }
}
