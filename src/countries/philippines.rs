use crate::domain::model::{Country, HolidayEntry};

pub fn philippines() -> Country {
    Country {
        code: "PH".to_string(),
        name: "Philippines".to_string(),
        aliases: vec![],
        holidays: vec![
            HolidayEntry::fixed("New Year's Day", 1, 1),
            HolidayEntry::easter("Maundy Thursday", -3),
            HolidayEntry::easter("Good Friday", -2),
            HolidayEntry::fixed("Day of Valor", 4, 9),
            HolidayEntry::fixed("Labor Day", 5, 1),
            HolidayEntry::fixed("Independence Day", 6, 12),
            // Observed on the eve of 1 Shawwal.
            HolidayEntry::hijri("Eid al-Fitr", 10, 1).shifted(-1),
            HolidayEntry::hijri("Feast of the Sacrifice", 12, 10),
            HolidayEntry::fixed("National Heroes' Day", 8, 27),
            HolidayEntry::fixed("Bonifacio Day", 11, 30),
            HolidayEntry::fixed("Christmas Day", 12, 25),
            HolidayEntry::fixed("Rizal Day", 12, 30),
        ],
    }
}
