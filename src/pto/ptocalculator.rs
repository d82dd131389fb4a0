use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::pto::ptoerror::PtoError;
use crate::pto::rangebreakdown::{
    RangeBreakdown,
    business_days_list,
    range_breakdown
};
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidaypolicy::{US_OBSERVED_CALENDAR_NAME, us_observed_calendar};
use crate::time::utility::parse_iso_date;

fn default_calendar_name() -> String {
    US_OBSERVED_CALENDAR_NAME.to_owned()
}

fn default_hours_per_day() -> Decimal {
    Decimal::from(8)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PtoSettings {
    /// Name of the holiday calendar used for PTO requests.
    #[serde(default = "default_calendar_name")]
    pub calendar: String,
    /// Hours charged against the balance per business day.
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: Decimal
}

impl Default for PtoSettings {
    fn default() -> Self {
        PtoSettings {
            calendar: default_calendar_name(),
            hours_per_day: default_hours_per_day()
        }
    }
}

/// Entry points used when an employee submits a leave request.
///
/// Dates arrive as `YYYY-MM-DD` strings. The plain methods fail soft: a
/// malformed string yields zero, so request handlers never need to handle an
/// error. Callers that must tell "zero days" from "bad input" use the `try_*`
/// methods.
#[derive(Clone)]
pub struct PtoCalculator {
    calendar: Arc<dyn HolidayCalendar>,
    settings: PtoSettings
}

impl PtoCalculator {
    pub fn new(calendar: Arc<dyn HolidayCalendar>, settings: PtoSettings) -> PtoCalculator {
        PtoCalculator { calendar, settings }
    }

    pub fn calendar(&self) -> &Arc<dyn HolidayCalendar> {
        &self.calendar
    }

    pub fn settings(&self) -> &PtoSettings {
        &self.settings
    }

    fn parse_range(start_iso: &str, end_iso: &str) -> Result<(NaiveDate, NaiveDate), PtoError> {
        let start = parse_iso_date(start_iso).map_err(|e| PtoError::invalid_date(start_iso, e))?;
        let end = parse_iso_date(end_iso).map_err(|e| PtoError::invalid_date(end_iso, e))?;
        Ok((start, end))
    }

    pub fn try_get_pto_breakdown(&self, start_iso: &str, end_iso: &str) -> Result<RangeBreakdown, PtoError> {
        let (start, end) = PtoCalculator::parse_range(start_iso, end_iso)?;
        Ok(range_breakdown(self.calendar.as_ref(), start, end))
    }

    pub fn try_calculate_pto_days(&self, start_iso: &str, end_iso: &str) -> Result<u32, PtoError> {
        self.try_get_pto_breakdown(start_iso, end_iso).map(|b| b.business_days)
    }

    pub fn try_calculate_pto_hours(&self, start_iso: &str, end_iso: &str) -> Result<Decimal, PtoError> {
        self.try_calculate_pto_days(start_iso, end_iso)
            .map(|days| Decimal::from(days) * self.settings.hours_per_day)
    }

    pub fn try_business_days_list(&self, start_iso: &str, end_iso: &str) -> Result<Vec<NaiveDate>, PtoError> {
        let (start, end) = PtoCalculator::parse_range(start_iso, end_iso)?;
        Ok(business_days_list(self.calendar.as_ref(), start, end))
    }

    pub fn get_pto_breakdown(&self, start_iso: &str, end_iso: &str) -> RangeBreakdown {
        self.try_get_pto_breakdown(start_iso, end_iso)
            .unwrap_or_else(|error| {
                warn!(%error, "PTO breakdown defaulted to zero");
                RangeBreakdown::default()
            })
    }

    /// Chargeable business days in the inclusive range.
    pub fn calculate_pto_days(&self, start_iso: &str, end_iso: &str) -> u32 {
        self.get_pto_breakdown(start_iso, end_iso).business_days
    }

    pub fn calculate_pto_hours(&self, start_iso: &str, end_iso: &str) -> Decimal {
        Decimal::from(self.calculate_pto_days(start_iso, end_iso)) * self.settings.hours_per_day
    }

    pub fn business_days_list(&self, start_iso: &str, end_iso: &str) -> Vec<NaiveDate> {
        self.try_business_days_list(start_iso, end_iso)
            .unwrap_or_else(|error| {
                warn!(%error, "business day list defaulted to empty");
                Vec::new()
            })
    }
}

impl Default for PtoCalculator {
    fn default() -> Self {
        PtoCalculator::new(Arc::new(us_observed_calendar()), PtoSettings::default())
    }
}

pub fn calculate_pto_days(start_iso: &str, end_iso: &str) -> u32 {
    PtoCalculator::default().calculate_pto_days(start_iso, end_iso)
}

pub fn get_pto_breakdown(start_iso: &str, end_iso: &str) -> RangeBreakdown {
    PtoCalculator::default().get_pto_breakdown(start_iso, end_iso)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_ranges() {
        assert_eq!(calculate_pto_days("2025-09-18", "2025-09-23"), 4);
        assert_eq!(calculate_pto_days("2025-12-24", "2025-12-26"), 2);
        assert_eq!(calculate_pto_days("2025-11-27", "2025-11-28"), 1);
        assert_eq!(calculate_pto_days("2025-07-03", "2025-07-07"), 3);
    }

    #[test]
    fn malformed_input_fails_soft() {
        assert_eq!(calculate_pto_days("2025-13-01", "2025-12-31"), 0);
        assert_eq!(calculate_pto_days("", "2025-12-31"), 0);
        assert_eq!(get_pto_breakdown("2025-12-24", "yesterday"), RangeBreakdown::default());
        assert!(PtoCalculator::default().business_days_list("bad", "2025-12-31").is_empty());
    }

    #[test]
    fn strict_variant_reports_the_bad_string() {
        let calculator = PtoCalculator::default();
        match calculator.try_get_pto_breakdown("2025-12-24", "2025-12-32") {
            Err(PtoError::InvalidDate { input, .. }) => assert_eq!(input, "2025-12-32"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn strict_variant_accepts_inverted_range() {
        let calculator = PtoCalculator::default();
        assert_eq!(calculator.try_calculate_pto_days("2025-12-26", "2025-12-24"), Ok(0));
    }

    #[test]
    fn hours_follow_hours_per_day() {
        let calculator = PtoCalculator::default();
        assert_eq!(calculator.calculate_pto_hours("2025-09-18", "2025-09-23"), Decimal::from(32));

        let short_days = PtoCalculator::new(
            Arc::new(us_observed_calendar()),
            PtoSettings { hours_per_day: Decimal::new(75, 1), ..PtoSettings::default() }
        );
        assert_eq!(short_days.calculate_pto_hours("2025-12-24", "2025-12-26"), Decimal::new(150, 1));
        assert_eq!(short_days.calculate_pto_hours("oops", "2025-12-26"), Decimal::ZERO);
    }

    #[test]
    fn business_days_skip_weekend_and_holiday() {
        let calculator = PtoCalculator::default();
        let days = calculator.business_days_list("2025-07-03", "2025-07-07");
        let expected: Vec<NaiveDate> = [(7, 3), (7, 7)]
            .iter()
            .filter_map(|&(m, d)| NaiveDate::from_ymd_opt(2025, m, d))
            .collect();
        assert_eq!(days, expected);
    }
}
