//! Kyrgyzstan, Russia, Belarus and Georgia.

use crate::domain::model::{Country, HolidayEntry};

pub fn kyrgyzstan() -> Country {
    Country {
        code: "KG".to_string(),
        name: "Kyrgyzstan".to_string(),
        aliases: vec![],
        holidays: vec![
            HolidayEntry::fixed("New Year's Day", 1, 1),
            HolidayEntry::fixed("Orthodox Christmas Day", 1, 7),
            HolidayEntry::fixed("Fatherland Defender's Day", 2, 23),
            HolidayEntry::fixed("International Women's Day", 3, 8),
            HolidayEntry::fixed("Nooruz Mairamy", 3, 21),
            HolidayEntry::fixed("Day of the People's April Revolution", 4, 7),
            HolidayEntry::fixed("Spring and Labour Day", 5, 1),
            HolidayEntry::fixed("Constitution Day", 5, 5),
            HolidayEntry::fixed("Victory Day", 5, 9),
            HolidayEntry::fixed("Children's Day", 6, 1),
            HolidayEntry::fixed("Independence Day", 8, 31),
            HolidayEntry::fixed("Day 1 of History and Commemoration of Ancestors", 11, 7),
            HolidayEntry::fixed("Day 2 of History and Commemoration of Ancestors", 11, 8),
            HolidayEntry::fixed("New Year's Eve", 12, 31),
        ],
    }
}

/// Orthodox Christmas is the official day off; 25 December is also kept.
pub fn russia() -> Country {
    Country {
        code: "RU".to_string(),
        name: "Russia".to_string(),
        aliases: vec![],
        holidays: vec![
            HolidayEntry::fixed("New Year's Day", 1, 1),
            HolidayEntry::fixed("Orthodox Christmas Day", 1, 7),
            HolidayEntry::fixed("Christmas Day", 12, 25),
            HolidayEntry::fixed("Defender of the Fatherland Day", 2, 23),
            HolidayEntry::fixed("International Women's Day", 3, 8),
            HolidayEntry::fixed("National Flag Day", 8, 22),
            HolidayEntry::fixed("Spring and Labour Day", 5, 1),
            HolidayEntry::fixed("Victory Day", 5, 9),
            HolidayEntry::fixed("Russia Day", 6, 12),
            HolidayEntry::fixed("Unity Day", 11, 4),
        ],
    }
}

pub fn belarus() -> Country {
    Country {
        code: "BY".to_string(),
        name: "Belarus".to_string(),
        aliases: vec![],
        holidays: vec![
            HolidayEntry::fixed("New Year's Day", 1, 1),
            HolidayEntry::fixed("Orthodox Christmas Day", 1, 7),
            HolidayEntry::fixed("International Women's Day", 3, 8),
            HolidayEntry::orthodox_easter("Commemoration Day", 9),
            HolidayEntry::fixed("Spring and Labour Day", 5, 1),
            HolidayEntry::fixed("Victory Day", 5, 9),
            HolidayEntry::fixed("Independence Day", 7, 3),
            HolidayEntry::fixed("October Revolution Day", 11, 7),
            HolidayEntry::fixed("Christmas Day", 12, 25),
        ],
    }
}

pub fn georgia() -> Country {
    Country {
        code: "GE".to_string(),
        name: "Georgia".to_string(),
        aliases: vec![],
        holidays: vec![
            HolidayEntry::fixed("New Year's Day", 1, 1),
            HolidayEntry::fixed("Second day of the New Year", 1, 2),
            HolidayEntry::fixed("Orthodox Christmas", 1, 7),
            HolidayEntry::fixed("Baptism Day of our Lord Jesus Christ", 1, 19),
            HolidayEntry::fixed("Mother's Day", 3, 3),
            HolidayEntry::fixed("International Women's Day", 3, 8),
            HolidayEntry::orthodox_easter("Good Friday", -2),
            HolidayEntry::orthodox_easter("Great Saturday", -1),
            HolidayEntry::orthodox_easter("Easter Sunday", 0),
            HolidayEntry::orthodox_easter("Easter Monday", 1),
            HolidayEntry::fixed("National Unity Day", 4, 9),
            HolidayEntry::fixed("Victory Day", 5, 9),
            HolidayEntry::fixed("Saint Andrew the First-Called Day", 5, 12),
            HolidayEntry::fixed("Independence Day", 5, 26),
            HolidayEntry::fixed("Saint Mary's Day", 8, 28),
            HolidayEntry::fixed("Day of Svetitskhoveli Cathedral", 10, 14),
            HolidayEntry::fixed("Saint George's Day", 12, 23),
        ],
    }
}
