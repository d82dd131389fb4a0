use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::rangeofdates::RangeOfDates;

/// Split of an inclusive date range into business, weekend and holiday days.
///
/// `total_days == business_days + weekend_days + holiday_days` always holds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RangeBreakdown {
    pub total_days: u32,
    pub business_days: u32,
    pub weekend_days: u32,
    pub holiday_days: u32,
    pub holidays_list: Vec<NaiveDate>,
    pub weekends_list: Vec<NaiveDate>
}

impl RangeBreakdown {
    pub fn is_empty(&self) -> bool {
        self.total_days == 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayKind {
    Weekend,
    Holiday,
    BusinessDay
}

fn classify(calendar: &dyn HolidayCalendar, holidays: &HashSet<NaiveDate>, d: NaiveDate) -> DayKind {
    if calendar.is_weekend(d) {
        DayKind::Weekend
    } else if holidays.contains(&d) {
        DayKind::Holiday
    } else {
        DayKind::BusinessDay
    }
}

fn holidays_touched(calendar: &dyn HolidayCalendar, range: &RangeOfDates) -> HashSet<NaiveDate> {
    range.years()
        .into_iter()
        .flat_map(|year| calendar.holidays_in_year(year))
        .collect()
}

/// Classifies every date of `[start, end]` once, weekend before holiday.
/// An inverted range yields the zero breakdown.
pub fn range_breakdown(calendar: &dyn HolidayCalendar, start: NaiveDate, end: NaiveDate) -> RangeBreakdown {
    let range = RangeOfDates::new(start, end);
    if range.is_empty() {
        debug!(%start, %end, "inverted range, nothing to count");
        return RangeBreakdown::default();
    }

    let holidays = holidays_touched(calendar, &range);
    let mut breakdown = RangeBreakdown {
        total_days: range.len() as u32,
        ..RangeBreakdown::default()
    };

    for d in range.iter() {
        match classify(calendar, &holidays, d) {
            DayKind::Weekend => {
                breakdown.weekend_days += 1;
                breakdown.weekends_list.push(d);
            },
            DayKind::Holiday => {
                breakdown.holiday_days += 1;
                breakdown.holidays_list.push(d);
            },
            DayKind::BusinessDay => breakdown.business_days += 1
        }
    }

    debug!(
        %start,
        %end,
        total = breakdown.total_days,
        business = breakdown.business_days,
        weekend = breakdown.weekend_days,
        holiday = breakdown.holiday_days,
        "range breakdown"
    );
    breakdown
}

pub fn business_day_count(calendar: &dyn HolidayCalendar, start: NaiveDate, end: NaiveDate) -> u32 {
    range_breakdown(calendar, start, end).business_days
}

/// Every business day of `[start, end]`, in order.
pub fn business_days_list(calendar: &dyn HolidayCalendar, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let range = RangeOfDates::new(start, end);
    let holidays = holidays_touched(calendar, &range);
    range.iter()
        .filter(|&d| classify(calendar, &holidays, d) == DayKind::BusinessDay)
        .collect()
}
