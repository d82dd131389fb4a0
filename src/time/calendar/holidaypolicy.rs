use std::collections::HashSet;

use chrono::Weekday;

use crate::time::calendar::observedholiday::NamedHoliday;
use crate::time::calendar::simplecalendar::SimpleCalendar;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::holidayrule::HolidayRule;
use crate::time::recurringholiday::lastweekdayholiday::LastWeekdayHoliday;
use crate::time::recurringholiday::nthweekdayholiday::NthWeekdayHoliday;

pub const US_OBSERVED_CALENDAR_NAME: &str = "USObserved";

enum PolicyRule {
    FixedDate { month: u32, day: u32 },
    NthWeekday { month: u32, n: u8, weekday: Weekday },
    LastWeekday { month: u32, weekday: Weekday }
}

const US_OBSERVED_POLICY: [(&str, PolicyRule); 9] = [
    ("New Year's Day", PolicyRule::FixedDate { month: 1, day: 1 }),
    ("Martin Luther King Jr. Day", PolicyRule::NthWeekday { month: 1, n: 3, weekday: Weekday::Mon }),
    ("Presidents' Day", PolicyRule::NthWeekday { month: 2, n: 3, weekday: Weekday::Mon }),
    ("Memorial Day", PolicyRule::LastWeekday { month: 5, weekday: Weekday::Mon }),
    ("Juneteenth", PolicyRule::FixedDate { month: 6, day: 19 }),
    ("Independence Day", PolicyRule::FixedDate { month: 7, day: 4 }),
    ("Labor Day", PolicyRule::NthWeekday { month: 9, n: 1, weekday: Weekday::Mon }),
    ("Thanksgiving", PolicyRule::NthWeekday { month: 11, n: 4, weekday: Weekday::Thu }),
    ("Christmas Day", PolicyRule::FixedDate { month: 12, day: 25 }),
];

impl PolicyRule {
    fn to_rule(&self) -> Option<HolidayRule> {
        match *self {
            PolicyRule::FixedDate { month, day } =>
                FixedDateHoliday::weekend_observed(month, day).map(HolidayRule::from),
            PolicyRule::NthWeekday { month, n, weekday } =>
                NthWeekdayHoliday::new(month, n, weekday).map(HolidayRule::from),
            PolicyRule::LastWeekday { month, weekday } =>
                LastWeekdayHoliday::new(month, weekday).map(HolidayRule::from)
        }
    }
}

/// The nine holidays of the standard leave policy, in calendar order.
///
/// Fixed-date holidays falling on Saturday are observed the Friday before and
/// those falling on Sunday the Monday after.
pub fn us_observed_holidays() -> Vec<NamedHoliday> {
    US_OBSERVED_POLICY
        .iter()
        .filter_map(|(name, rule)| rule.to_rule().map(|r| NamedHoliday::new(*name, r)))
        .collect()
}

/// Saturday/Sunday weekend plus [`us_observed_holidays`].
pub fn us_observed_calendar() -> SimpleCalendar {
    SimpleCalendar::new(
        HashSet::from([Weekday::Sat, Weekday::Sun]),
        us_observed_holidays()
    )
}


#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate};

    use super::*;
    use crate::time::calendar::holidaycalendar::HolidayCalendar;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn every_policy_entry_is_a_valid_rule() {
        assert_eq!(us_observed_holidays().len(), US_OBSERVED_POLICY.len());
    }

    #[test]
    fn nine_distinct_holidays_every_year() {
        let calendar = us_observed_calendar();
        for year in 1990..=2100 {
            assert_eq!(calendar.observed_holidays(year).len(), 9, "year {year}");
        }
    }

    #[test]
    fn holidays_2025() {
        let calendar = us_observed_calendar();
        let expected = HashSet::from([
            ymd(2025, 1, 1),
            ymd(2025, 1, 20),
            ymd(2025, 2, 17),
            ymd(2025, 5, 26),
            ymd(2025, 6, 19),
            ymd(2025, 7, 4),
            ymd(2025, 9, 1),
            ymd(2025, 11, 27),
            ymd(2025, 12, 25),
        ]);
        assert_eq!(calendar.observed_holidays(2025), expected);
    }

    #[test]
    fn holidays_2026_with_names() {
        let calendar = us_observed_calendar();
        let holidays = calendar.observed_holidays_with_names(2026);
        let summary: Vec<(&str, NaiveDate, bool)> = holidays
            .iter()
            .map(|h| (h.name.as_str(), h.date, h.was_shifted))
            .collect();
        assert_eq!(summary, vec![
            ("New Year's Day", ymd(2026, 1, 1), false),
            ("Martin Luther King Jr. Day", ymd(2026, 1, 19), false),
            ("Presidents' Day", ymd(2026, 2, 16), false),
            ("Memorial Day", ymd(2026, 5, 25), false),
            ("Juneteenth", ymd(2026, 6, 19), false),
            ("Independence Day", ymd(2026, 7, 3), true),
            ("Labor Day", ymd(2026, 9, 7), false),
            ("Thanksgiving", ymd(2026, 11, 26), false),
            ("Christmas Day", ymd(2026, 12, 25), false),
        ]);
    }

    #[test]
    fn new_years_day_2023_observed_on_monday() {
        let calendar = us_observed_calendar();
        assert!(calendar.observed_holidays(2023).contains(&ymd(2023, 1, 2)));
        assert!(!calendar.observed_holidays(2023).contains(&ymd(2023, 1, 1)));
    }

    #[test]
    fn only_fixed_date_holidays_are_ever_shifted() {
        let calendar = us_observed_calendar();
        for year in 2000..=2060 {
            for (named, observed) in calendar.holidays().iter().zip(calendar.observed_holidays_with_names(year)) {
                if observed.was_shifted {
                    assert!(named.rule().is_weekend_adjusted(), "{} {year}", observed.name);
                }
            }
        }
    }

    #[test]
    fn observed_holidays_are_never_business_days() {
        let calendar = us_observed_calendar();
        for year in 2000..=2060 {
            for d in calendar.observed_holidays(year) {
                assert!(!calendar.is_business_day(d), "{d}");
                assert!(!matches!(d.weekday(), Weekday::Sat | Weekday::Sun), "{d}");
            }
        }
    }

    #[test]
    fn years_beyond_the_date_range_are_empty() {
        let calendar = us_observed_calendar();
        for year in [i32::MIN, i32::MAX] {
            assert!(calendar.observed_holidays(year).is_empty());
            assert!(calendar.holidays_in_year(year).is_empty());
        }
    }
}
