use chrono::{
    NaiveDate,
    Weekday
};

use super::recurringholiday::RecurringHoliday;

/// The `n`-th occurrence of a weekday in a month, e.g. the fourth Thursday
/// of November. Never falls on a weekend, so no adjustment applies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NthWeekdayHoliday {
    month: u32,
    n: u8,
    weekday: Weekday,
}

impl NthWeekdayHoliday {
    pub fn new(month: u32, n: u8, weekday: Weekday) -> Option<NthWeekdayHoliday> {
        if !(1..=12).contains(&month) || !(1..=5).contains(&n) {
            None
        } else {
            Some(NthWeekdayHoliday { month, n, weekday })
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn n(&self) -> u8 {
        self.n
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for NthWeekdayHoliday {
    fn nominal_date(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_weekday_of_month_opt(
            year,
            self.month,
            self.weekday,
            self.n
        )
    }
}
