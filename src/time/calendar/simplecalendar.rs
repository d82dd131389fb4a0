use std::collections::HashSet;

use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};
use tracing::trace;

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::observedholiday::{NamedHoliday, ObservedHoliday};

/// Weekend representation as a bitmask: Mon(0), Tue(1), ..., Sun(6).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct WeekendMask(u8);

impl WeekendMask {
    fn new(weekends: &HashSet<Weekday>) -> Self {
        let mut mask = 0u8;
        for &weekday in weekends {
            mask |= 1u8 << weekday.num_days_from_monday();
        }
        WeekendMask(mask)
    }

    #[inline]
    fn is_weekend(&self, weekday: Weekday) -> bool {
        let bit = 1u8 << weekday.num_days_from_monday();
        (self.0 & bit) != 0
    }

    fn to_hashset(&self) -> HashSet<Weekday> {
        (0..7u8)
            .filter(|day| (self.0 & (1u8 << day)) != 0)
            .filter_map(|day| Weekday::try_from(day).ok())
            .collect()
    }
}

/// A calendar made of a weekend set and an ordered list of named holidays.
#[derive(Clone, Debug)]
pub struct SimpleCalendar {
    weekends: WeekendMask,
    holidays: Vec<NamedHoliday>
}

impl SimpleCalendar {
    /// Creates a new SimpleCalendar.
    ///
    /// # Arguments
    /// * `weekends` - Weekdays that are never business days
    /// * `holidays` - Holiday rules, in the order they are reported
    pub fn new(weekends: HashSet<Weekday>, holidays: Vec<NamedHoliday>) -> SimpleCalendar {
        SimpleCalendar {
            weekends: WeekendMask::new(&weekends),
            holidays
        }
    }

    pub fn weekends(&self) -> HashSet<Weekday> {
        self.weekends.to_hashset()
    }

    pub fn holidays(&self) -> &[NamedHoliday] {
        &self.holidays
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

impl HolidayCalendar for SimpleCalendar {
    #[inline]
    fn is_weekend(&self, d: NaiveDate) -> bool {
        self.weekends.is_weekend(d.weekday())
    }

    fn observed_holidays_with_names(&self, year: i32) -> Vec<ObservedHoliday> {
        let observed: Vec<ObservedHoliday> = self.holidays
            .iter()
            .filter_map(|h| h.observe(year))
            .collect();
        trace!(year, count = observed.len(), "resolved observed holidays");
        observed
    }
}
