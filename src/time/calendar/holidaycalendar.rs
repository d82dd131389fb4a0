use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use crate::time::calendar::observedholiday::ObservedHoliday;

/// Weekend and holiday classification of dates.
///
/// `is_holiday` answers for observed holidays only; weekends are reported by
/// `is_weekend`. Implementations must be shareable across threads so a single
/// calendar can serve every request.
pub trait HolidayCalendar: Send + Sync {
    fn is_weekend(&self, d: NaiveDate) -> bool;

    /// Every observed holiday produced by applying the policy to `year`, in
    /// policy order. Dates may spill into a neighbouring calendar year.
    fn observed_holidays_with_names(&self, year: i32) -> Vec<ObservedHoliday>;

    fn observed_holidays(&self, year: i32) -> HashSet<NaiveDate> {
        self.observed_holidays_with_names(year)
            .into_iter()
            .map(|h| h.date)
            .collect()
    }

    /// Observed holidays whose date falls within calendar year `year`.
    /// Years outside the representable date range yield an empty set.
    fn holidays_in_year(&self, year: i32) -> HashSet<NaiveDate> {
        (year.saturating_sub(1)..=year.saturating_add(1))
            .flat_map(|y| self.observed_holidays(y))
            .filter(|d| d.year() == year)
            .collect()
    }

    fn is_holiday(&self, d: NaiveDate) -> bool {
        self.holidays_in_year(d.year()).contains(&d)
    }

    /// Weekend is checked before holidays.
    fn is_business_day(&self, d: NaiveDate) -> bool {
        if self.is_weekend(d) {
            return false;
        }
        !self.is_holiday(d)
    }
}
