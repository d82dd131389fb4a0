use std::collections::BTreeSet;

use chrono::{
    Datelike,
    Days,
    NaiveDate
};

/// Inclusive range of dates. A range whose start is after its end is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeOfDates {
    start_date: NaiveDate,
    end_date: NaiveDate
}

impl RangeOfDates {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> RangeOfDates {
        RangeOfDates { start_date, end_date }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn is_empty(&self) -> bool {
        self.start_date > self.end_date
    }

    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            ((self.end_date - self.start_date).num_days() + 1) as usize
        }
    }

    /// Distinct years touched by the range, ascending.
    pub fn years(&self) -> BTreeSet<i32> {
        if self.is_empty() {
            BTreeSet::new()
        } else {
            (self.start_date.year()..=self.end_date.year()).collect()
        }
    }

    pub fn iter(&self) -> RangeOfDatesIterator<'_> {
        RangeOfDatesIterator {
            range_of_dates: self,
            index: 0,
        }
    }
}

impl<'a> IntoIterator for &'a RangeOfDates {
    type Item = NaiveDate;
    type IntoIter = RangeOfDatesIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct RangeOfDatesIterator<'a> {
    range_of_dates: &'a RangeOfDates,
    index: usize,
}

impl<'a> Iterator for RangeOfDatesIterator<'a> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.range_of_dates.len() {
            let result = self.range_of_dates
                .start_date()
                .checked_add_days(Days::new(self.index as u64));
            self.index += 1;
            result
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.range_of_dates.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}
