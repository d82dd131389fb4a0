use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::Weekday;
use serde::Deserialize;

use crate::manager::manager::{IManager, Manager};
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidaypolicy::{US_OBSERVED_CALENDAR_NAME, us_observed_calendar};
use crate::time::calendar::observedholiday::NamedHoliday;
use crate::time::calendar::simplecalendar::SimpleCalendar;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::holidayrule::HolidayRule;
use crate::time::recurringholiday::lastweekdayholiday::LastWeekdayHoliday;
use crate::time::recurringholiday::nthweekdayholiday::NthWeekdayHoliday;
use crate::time::recurringholiday::weekendadjustment::{
    WeekendAdjustment,
    WeekendAdjustmentRule
};

fn check_month(name: &str, month: u32) -> Result<(), ManagerError> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(ManagerError::invalid_holiday(name, format!("month {month} is out of range")))
    }
}

#[derive(Deserialize)]
struct FixedDateHolidayJsonProp {
    month: u32,
    day: u32,
    weekend_adjustment_map: Option<HashMap<Weekday, WeekendAdjustment>>
}

fn fixed_date_holiday_from_json(name: &str, json: serde_json::Value) -> Result<HolidayRule, ManagerError> {
    let json_prop: FixedDateHolidayJsonProp = parse_json_value(json)?;
    check_month(name, json_prop.month)?;
    let rule = match json_prop.weekend_adjustment_map {
        Some(map) => WeekendAdjustmentRule::new(&map),
        None => WeekendAdjustmentRule::saturday_friday_sunday_monday()
    };
    FixedDateHoliday::with_rule(json_prop.month, json_prop.day, rule)
        .map(HolidayRule::from)
        .ok_or_else(|| ManagerError::invalid_holiday(
            name,
            format!("day {} does not exist in month {}", json_prop.day, json_prop.month)
        ))
}

#[derive(Deserialize)]
struct NthWeekdayHolidayJsonProp {
    month: u32,
    n: u8,
    weekday: Weekday,
}

fn nth_weekday_from_json(name: &str, json: serde_json::Value) -> Result<HolidayRule, ManagerError> {
    let json_prop: NthWeekdayHolidayJsonProp = parse_json_value(json)?;
    check_month(name, json_prop.month)?;
    NthWeekdayHoliday::new(json_prop.month, json_prop.n, json_prop.weekday)
        .map(HolidayRule::from)
        .ok_or_else(|| ManagerError::invalid_holiday(name, format!("n must be in 1..=5, got {}", json_prop.n)))
}

#[derive(Deserialize)]
struct LastWeekdayHolidayJsonProp {
    month: u32,
    weekday: Weekday,
}

fn last_weekday_from_json(name: &str, json: serde_json::Value) -> Result<HolidayRule, ManagerError> {
    let json_prop: LastWeekdayHolidayJsonProp = parse_json_value(json)?;
    check_month(name, json_prop.month)?;
    LastWeekdayHoliday::new(json_prop.month, json_prop.weekday)
        .map(HolidayRule::from)
        .ok_or_else(|| ManagerError::invalid_holiday(name, "invalid last weekday rule"))
}

#[derive(Deserialize)]
enum HolidayType {
    FixedDate,
    NthWeekday,
    LastWeekday
}

#[derive(Deserialize)]
struct HolidayTypedObject {
    name: String,
    holiday_type: HolidayType
}

fn get_named_holiday_from_json(json: serde_json::Value) -> Result<NamedHoliday, ManagerError> {
    let typed: HolidayTypedObject = parse_json_value(json.clone())?;
    let rule = match typed.holiday_type {
        HolidayType::FixedDate   => fixed_date_holiday_from_json(&typed.name, json)?,
        HolidayType::NthWeekday  => nth_weekday_from_json(&typed.name, json)?,
        HolidayType::LastWeekday => last_weekday_from_json(&typed.name, json)?
    };
    Ok(NamedHoliday::new(typed.name, rule))
}

fn default_weekends() -> HashSet<Weekday> {
    HashSet::from([Weekday::Sat, Weekday::Sun])
}

#[derive(Deserialize)]
struct SimpleCalendarJsonProp {
    #[serde(default = "default_weekends")]
    weekends: HashSet<Weekday>,
    holidays: Vec<serde_json::Value>
}

fn get_simple_calendar_from_json(json_value: serde_json::Value) -> Result<Arc<dyn HolidayCalendar>, ManagerError> {
    let calendar_json: SimpleCalendarJsonProp = parse_json_value(json_value)?;
    let holidays = calendar_json.holidays
        .into_iter()
        .map(get_named_holiday_from_json)
        .collect::<Result<Vec<NamedHoliday>, ManagerError>>()?;

    Ok(Arc::new(SimpleCalendar::new(calendar_json.weekends, holidays)))
}

/// Registry of holiday calendars keyed by name. Always holds the built-in
/// calendar under [`US_OBSERVED_CALENDAR_NAME`]; loading a calendar with that
/// name replaces it.
pub struct HolidayCalendarManager;

impl HolidayCalendarManager {
    pub fn new() -> Manager<dyn HolidayCalendar> {
        let manager: Manager<dyn HolidayCalendar> = Manager::new(get_simple_calendar_from_json);
        manager.insert(US_OBSERVED_CALENDAR_NAME.to_owned(), Arc::new(us_observed_calendar()));
        manager
    }
}
