use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::recurringholiday::RecurringHoliday;
use crate::time::utility::days_of_month;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LastWeekdayHoliday {
    month: u32,
    weekday: Weekday,
}

impl LastWeekdayHoliday {
    pub fn new(month: u32, weekday: Weekday) -> Option<LastWeekdayHoliday> {
        if !(1..=12).contains(&month) {
            None
        } else {
            Some(LastWeekdayHoliday { month, weekday })
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for LastWeekdayHoliday {
    fn nominal_date(&self, year: i32) -> Option<NaiveDate> {
        let end_of_month = NaiveDate::from_ymd_opt(year, self.month, days_of_month(year, self.month))?;

        // Step back from the month end to the target weekday.
        let days_back = (end_of_month.weekday().num_days_from_monday() + 7
                         - self.weekday.num_days_from_monday()) % 7;

        end_of_month.checked_sub_days(Days::new(days_back as u64))
    }
}
