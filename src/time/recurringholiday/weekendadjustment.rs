use std::collections::HashMap;

use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};
use serde::{
    Serialize,
    Deserialize
};


#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum WeekendAdjustment {
    Unadjusted = 0,
    NextWeekday = 1,
    PreviousWeekday = -1
}

/// Observance rule for a fixed-date holiday, indexed by
/// `Weekday::num_days_from_monday()`. `0` means the date is kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekendAdjustmentRule {
    rule: [i8; 7]
}

impl WeekendAdjustmentRule {
    /// Builds the rule from a weekday map. Every weekday present in the map is
    /// treated as a non-working day, so a shift walks past consecutive entries
    /// until it lands on a weekday absent from the map.
    pub fn new(adjustment_map: &HashMap<Weekday, WeekendAdjustment>) -> WeekendAdjustmentRule {
        let mut rule = [0i8; 7];

        for (&weekday, &adj) in adjustment_map {
            if adj == WeekendAdjustment::Unadjusted {
                continue;
            }

            let step = if adj == WeekendAdjustment::NextWeekday {
                Weekday::succ
            } else {
                Weekday::pred
            };

            let mut to_weekday = weekday;
            let mut shift_days = 0i8;
            while adjustment_map.contains_key(&to_weekday) && shift_days.abs() < 7 {
                to_weekday = step(&to_weekday);
                shift_days += adj as i8;
            }

            rule[weekday.num_days_from_monday() as usize] = shift_days;
        }

        WeekendAdjustmentRule { rule }
    }

    /// Saturday to the preceding Friday, Sunday to the following Monday.
    pub fn saturday_friday_sunday_monday() -> WeekendAdjustmentRule {
        WeekendAdjustmentRule::new(&HashMap::from([
            (Weekday::Sat, WeekendAdjustment::PreviousWeekday),
            (Weekday::Sun, WeekendAdjustment::NextWeekday)
        ]))
    }

    pub fn shift_days(&self, weekday: Weekday) -> i8 {
        self.rule[weekday.num_days_from_monday() as usize]
    }

    #[inline]
    pub fn adjust(&self, d: NaiveDate) -> NaiveDate {
        let shift = self.shift_days(d.weekday());
        let days = Days::new(shift.unsigned_abs() as u64);
        let adjusted = if shift >= 0 {
            d.checked_add_days(days)
        } else {
            d.checked_sub_days(days)
        };
        adjusted.unwrap_or(d)
    }
}

impl Default for WeekendAdjustmentRule {
    fn default() -> Self {
        WeekendAdjustmentRule::saturday_friday_sunday_monday()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn saturday_moves_back_sunday_moves_forward() {
        let rule = WeekendAdjustmentRule::default();
        // 2026-07-04 is a Saturday, 2023-01-01 a Sunday.
        assert_eq!(rule.adjust(ymd(2026, 7, 4)), ymd(2026, 7, 3));
        assert_eq!(rule.adjust(ymd(2023, 1, 1)), ymd(2023, 1, 2));
        assert_eq!(rule.adjust(ymd(2025, 7, 4)), ymd(2025, 7, 4));
    }

    #[test]
    fn consecutive_weekend_days_are_skipped() {
        let rule = WeekendAdjustmentRule::new(&HashMap::from([
            (Weekday::Sat, WeekendAdjustment::NextWeekday),
            (Weekday::Sun, WeekendAdjustment::NextWeekday)
        ]));
        assert_eq!(rule.shift_days(Weekday::Sat), 2);
        assert_eq!(rule.shift_days(Weekday::Sun), 1);
        assert_eq!(rule.shift_days(Weekday::Mon), 0);
    }

    #[test]
    fn unadjusted_entries_keep_the_date() {
        let rule = WeekendAdjustmentRule::new(&HashMap::from([
            (Weekday::Sat, WeekendAdjustment::Unadjusted),
            (Weekday::Sun, WeekendAdjustment::NextWeekday)
        ]));
        assert_eq!(rule.shift_days(Weekday::Sat), 0);
        assert_eq!(rule.shift_days(Weekday::Sun), 1);
        assert_eq!(rule.adjust(ymd(2026, 7, 4)), ymd(2026, 7, 4));
    }
}
