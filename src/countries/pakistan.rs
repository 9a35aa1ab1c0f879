use crate::domain::model::{Country, HolidayEntry};

pub fn pakistan() -> Country {
    Country {
        code: "PK".to_string(),
        name: "Pakistan".to_string(),
        aliases: vec![],
        holidays: vec![
            HolidayEntry::fixed("Kashmir Solidarity Day", 2, 5),
            HolidayEntry::fixed("Pakistan Day", 3, 23),
            HolidayEntry::fixed("Labor Day", 5, 1),
            HolidayEntry::fixed("Independence Day", 8, 14),
            HolidayEntry::fixed("Iqbal Day", 11, 9),
            // Also the birthday of the founder.
            HolidayEntry::fixed("Christmas Day", 12, 25),
            HolidayEntry::hijri("Feast of the Sacrifice", 12, 10).days(3),
            HolidayEntry::hijri("Eid al-Fitr", 10, 1).days(3),
            HolidayEntry::hijri("Mawlid", 3, 12),
            HolidayEntry::hijri("Day of Ashura", 1, 10).days(2),
            HolidayEntry::hijri("Shab e Mairaj", 7, 27),
            HolidayEntry::fixed("Defence Day", 9, 6),
            HolidayEntry::fixed("Death Anniversary of Quaid-e-Azam", 9, 11),
        ],
    }
}
