use chrono::NaiveDate;
use serde::Serialize;

use crate::time::recurringholiday::holidayrule::HolidayRule;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;

/// A holiday rule together with the name shown to employees.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedHoliday {
    name: String,
    rule: HolidayRule
}

impl NamedHoliday {
    pub fn new(name: impl Into<String>, rule: impl Into<HolidayRule>) -> NamedHoliday {
        NamedHoliday { name: name.into(), rule: rule.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rule(&self) -> &HolidayRule {
        &self.rule
    }

    pub fn observe(&self, year: i32) -> Option<ObservedHoliday> {
        let date = self.rule.get_holiday(year)?;
        Some(ObservedHoliday {
            date,
            name: self.name.clone(),
            was_shifted: self.rule.nominal_date(year) != Some(date)
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ObservedHoliday {
    pub date: NaiveDate,
    pub name: String,
    pub was_shifted: bool
}
