use std::collections::HashMap;

use chrono::{
    NaiveDate,
    Weekday
};

use super::recurringholiday::RecurringHoliday;
use super::weekendadjustment::{
    WeekendAdjustment,
    WeekendAdjustmentRule
};
use crate::time::utility::days_of_month;

// Leap year used to validate February 29.
const LEAP_REFERENCE_YEAR: i32 = 2024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32,
    weekend_adjustment_rule: WeekendAdjustmentRule
}

impl FixedDateHoliday {
    pub fn new(month: u32, day: u32, weekend_adjustment_map: &HashMap<Weekday, WeekendAdjustment>) -> Option<FixedDateHoliday> {
        FixedDateHoliday::with_rule(month, day, WeekendAdjustmentRule::new(weekend_adjustment_map))
    }

    /// A fixed date observed on the Friday before when it falls on Saturday and
    /// on the Monday after when it falls on Sunday.
    pub fn weekend_observed(month: u32, day: u32) -> Option<FixedDateHoliday> {
        FixedDateHoliday::with_rule(month, day, WeekendAdjustmentRule::saturday_friday_sunday_monday())
    }

    pub fn with_rule(month: u32, day: u32, weekend_adjustment_rule: WeekendAdjustmentRule) -> Option<FixedDateHoliday> {
        if !(1..=12).contains(&month) || day == 0 || day > days_of_month(LEAP_REFERENCE_YEAR, month) {
            return None;
        }
        Some(FixedDateHoliday {
            month,
            day,
            weekend_adjustment_rule
        })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn weekend_adjustment_rule(&self) -> &WeekendAdjustmentRule {
        &self.weekend_adjustment_rule
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn nominal_date(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }

    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        self.nominal_date(year)
            .map(|d| self.weekend_adjustment_rule.adjust(d))
    }
}


#[cfg(test)]
mod tests {
    use chrono::Datelike;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn invalid_month_or_day_is_rejected() {
        assert!(FixedDateHoliday::weekend_observed(13, 1).is_none());
        assert!(FixedDateHoliday::weekend_observed(4, 31).is_none());
        assert!(FixedDateHoliday::weekend_observed(2, 0).is_none());
        assert!(FixedDateHoliday::weekend_observed(2, 29).is_some());
    }

    #[test]
    fn new_years_day_on_sunday_is_observed_monday() {
        let new_years = FixedDateHoliday::weekend_observed(1, 1).unwrap();
        assert_eq!(new_years.get_holiday(2023), Some(ymd(2023, 1, 2)));
        assert!(new_years.was_shifted(2023));
    }

    #[test]
    fn new_years_day_on_saturday_spills_into_previous_year() {
        let new_years = FixedDateHoliday::weekend_observed(1, 1).unwrap();
        let observed = new_years.get_holiday(2022).unwrap();
        assert_eq!(observed, ymd(2021, 12, 31));
        assert_eq!(observed.weekday(), Weekday::Fri);
        assert!(new_years.is_holiday(&ymd(2021, 12, 31)));
        assert!(!new_years.is_holiday(&ymd(2022, 1, 1)));
    }

    #[test]
    fn weekday_date_is_kept() {
        let independence = FixedDateHoliday::weekend_observed(7, 4).unwrap();
        assert_eq!(independence.get_holiday(2025), Some(ymd(2025, 7, 4)));
        assert!(!independence.was_shifted(2025));
    }

    #[test]
    fn feb_29_has_no_date_outside_leap_years() {
        let leap_day = FixedDateHoliday::weekend_observed(2, 29).unwrap();
        assert!(leap_day.get_holiday(2025).is_none());
        assert!(leap_day.get_holiday(2028).is_some());
    }
}
