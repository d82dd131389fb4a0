use chrono::{Datelike, NaiveDate};


pub trait RecurringHoliday {

    /// The calendar date the rule names before any weekend adjustment.
    fn nominal_date(&self, year: i32) -> Option<NaiveDate>;

    /// The date on which the holiday is observed in `year`.
    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        self.nominal_date(year)
    }

    fn was_shifted(&self, year: i32) -> bool {
        self.nominal_date(year) != self.get_holiday(year)
    }

    // An observed date can spill into the neighbouring year.
    fn is_holiday(&self, d: &NaiveDate) -> bool {
        (d.year() - 1..=d.year() + 1).any(|year| self.get_holiday(year) == Some(*d))
    }
}
