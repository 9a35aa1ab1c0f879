use crate::domain::model::{Country, HolidayEntry, WeekendRule};

pub fn thailand() -> Country {
    Country {
        code: "TH".to_string(),
        name: "Thailand".to_string(),
        aliases: vec![],
        holidays: vec![
            HolidayEntry::fixed("New Year's Day", 1, 1),
            // Buddhist lunar calendar; only published dates are known.
            HolidayEntry::table(
                "Magha Pujab/Makha Bucha",
                &[(2016, 2, 22), (2017, 2, 11), (2018, 3, 1), (2019, 2, 19)],
            ),
            HolidayEntry::fixed("Chakri Memorial Day", 4, 6).weekend(WeekendRule::MondayIfWeekend),
            HolidayEntry::fixed("Songkran Festival", 4, 14),
            HolidayEntry::lunar("Buddha's Birthday", 4, 15),
            HolidayEntry::fixed("Coronation Day", 5, 5).until(2016),
            HolidayEntry::fixed("King Maha Vajiralongkorn's Birthday", 7, 28),
            HolidayEntry::table(
                "Asalha Puja",
                &[
                    (2006, 7, 11),
                    (2007, 6, 30),
                    (2008, 7, 18),
                    (2009, 7, 7),
                    (2010, 7, 25),
                    (2011, 7, 15),
                    (2012, 8, 2),
                    (2013, 7, 30),
                    (2014, 7, 13),
                    (2015, 7, 30),
                    (2016, 7, 15),
                    (2017, 7, 9),
                    (2018, 7, 29),
                    (2019, 7, 16),
                    (2020, 7, 5),
                    (2021, 7, 24),
                    (2022, 7, 13),
                    (2023, 7, 3),
                    (2024, 7, 21),
                    (2025, 7, 10),
                ],
            ),
            HolidayEntry::table(
                "Beginning of Vassa",
                &[
                    (2006, 7, 12),
                    (2007, 7, 31),
                    (2008, 7, 19),
                    (2009, 7, 8),
                    (2010, 7, 27),
                    (2011, 7, 16),
                    (2012, 8, 3),
                    (2013, 7, 23),
                    (2014, 7, 13),
                    (2015, 8, 1),
                    (2016, 7, 20),
                    (2017, 7, 9),
                    (2018, 7, 28),
                    (2019, 7, 17),
                    (2020, 7, 6),
                ],
            ),
            HolidayEntry::fixed("The Queen Sirikit's Birthday", 8, 12),
            HolidayEntry::fixed("Anniversary for the Death of King Bhumibol Adulyadej", 10, 13),
            HolidayEntry::fixed("King Chulalongkorn Day", 10, 23),
            HolidayEntry::fixed("King Bhumibol Adulyadej's Birthday Anniversary", 12, 5),
            HolidayEntry::fixed("Constitution Day", 12, 10),
            HolidayEntry::fixed("New Year's Eve", 12, 31),
        ],
    }
}
