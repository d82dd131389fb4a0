use chrono::NaiveDate;

use super::fixeddateholiday::FixedDateHoliday;
use super::lastweekdayholiday::LastWeekdayHoliday;
use super::nthweekdayholiday::NthWeekdayHoliday;
use super::recurringholiday::RecurringHoliday;

/// One of the three holiday shapes a policy can contain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HolidayRule {
    FixedDate(FixedDateHoliday),
    NthWeekday(NthWeekdayHoliday),
    LastWeekday(LastWeekdayHoliday)
}

impl HolidayRule {
    fn as_recurring(&self) -> &dyn RecurringHoliday {
        match self {
            HolidayRule::FixedDate(h) => h,
            HolidayRule::NthWeekday(h) => h,
            HolidayRule::LastWeekday(h) => h
        }
    }

    pub fn is_weekend_adjusted(&self) -> bool {
        matches!(self, HolidayRule::FixedDate(_))
    }
}

impl RecurringHoliday for HolidayRule {
    fn nominal_date(&self, year: i32) -> Option<NaiveDate> {
        self.as_recurring().nominal_date(year)
    }

    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        self.as_recurring().get_holiday(year)
    }
}

impl From<FixedDateHoliday> for HolidayRule {
    fn from(h: FixedDateHoliday) -> Self {
        HolidayRule::FixedDate(h)
    }
}

impl From<NthWeekdayHoliday> for HolidayRule {
    fn from(h: NthWeekdayHoliday) -> Self {
        HolidayRule::NthWeekday(h)
    }
}

impl From<LastWeekdayHoliday> for HolidayRule {
    fn from(h: LastWeekdayHoliday) -> Self {
        HolidayRule::LastWeekday(h)
    }
}
