use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidaypolicy::us_observed_calendar;
use crate::time::utility::to_iso_string;

const OBSERVED_SUFFIX: &str = " (Observed)";

fn default_color() -> String {
    "#6f42c1".to_owned()
}

fn default_display() -> String {
    "background".to_owned()
}

/// Presentation of holidays in the calendar widget.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarExportSettings {
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_display")]
    pub display: String
}

impl Default for CalendarExportSettings {
    fn default() -> Self {
        CalendarExportSettings {
            color: default_color(),
            display: default_display()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CalendarEventProps {
    #[serde(rename = "type")]
    pub event_type: String,
    pub is_holiday: bool,
    pub observed: bool
}

/// One all-day holiday event for the calendar widget.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub color: String,
    pub all_day: bool,
    pub display: String,
    pub extended_props: CalendarEventProps
}

/// Holiday events for `year` and `year + 1`, each year in policy order.
/// `year` defaults to the current local year.
pub fn holidays_for_calendar(
    calendar: &dyn HolidayCalendar,
    settings: &CalendarExportSettings,
    year: Option<i32>
) -> Vec<CalendarEvent> {
    let year = year.unwrap_or_else(|| Local::now().year());

    [Some(year), year.checked_add(1)]
        .into_iter()
        .flatten()
        .flat_map(|y| calendar.observed_holidays_with_names(y))
        .map(|h| {
            let date = to_iso_string(h.date);
            let mut title = h.name;
            if h.was_shifted {
                title.push_str(OBSERVED_SUFFIX);
            }
            CalendarEvent {
                id: format!("holiday_{date}"),
                title,
                start: date.clone(),
                end: date,
                color: settings.color.clone(),
                all_day: true,
                display: settings.display.clone(),
                extended_props: CalendarEventProps {
                    event_type: "holiday".to_owned(),
                    is_holiday: true,
                    observed: h.was_shifted
                }
            }
        })
        .collect()
}

pub fn get_holidays_for_calendar(year: Option<i32>) -> Vec<CalendarEvent> {
    holidays_for_calendar(&us_observed_calendar(), &CalendarExportSettings::default(), year)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_years_of_events() {
        let events = get_holidays_for_calendar(Some(2025));
        assert_eq!(events.len(), 18);
        assert_eq!(events[0].start, "2025-01-01");
        assert_eq!(events[9].start, "2026-01-01");
        assert!(events.iter().all(|e| e.start == e.end && e.all_day));
    }

    #[test]
    fn shifted_holiday_is_marked_observed() {
        let events = get_holidays_for_calendar(Some(2025));
        let independence_2026 = events
            .iter()
            .find(|e| e.id == "holiday_2026-07-03")
            .expect("observed Independence Day");
        assert_eq!(independence_2026.title, "Independence Day (Observed)");
        assert!(independence_2026.extended_props.observed);

        let christmas_2025 = events
            .iter()
            .find(|e| e.id == "holiday_2025-12-25")
            .expect("Christmas Day");
        assert_eq!(christmas_2025.title, "Christmas Day");
        assert!(!christmas_2025.extended_props.observed);
    }

    #[test]
    fn json_shape_matches_widget_keys() {
        let events = get_holidays_for_calendar(Some(2025));
        let json = serde_json::to_value(&events[0]).unwrap();
        assert_eq!(json["id"], "holiday_2025-01-01");
        assert_eq!(json["title"], "New Year's Day");
        assert_eq!(json["color"], "#6f42c1");
        assert_eq!(json["allDay"], true);
        assert_eq!(json["display"], "background");
        assert_eq!(json["extendedProps"]["type"], "holiday");
        assert_eq!(json["extendedProps"]["is_holiday"], true);
        assert_eq!(json["extendedProps"]["observed"], false);
    }

    #[test]
    fn settings_override_presentation() {
        let settings = CalendarExportSettings { color: "#000000".to_owned(), display: "block".to_owned() };
        let events = holidays_for_calendar(&us_observed_calendar(), &settings, Some(2030));
        assert!(events.iter().all(|e| e.color == "#000000" && e.display == "block"));
    }

    #[test]
    fn years_beyond_the_date_range_yield_no_events() {
        assert!(get_holidays_for_calendar(Some(i32::MAX)).is_empty());
        assert!(get_holidays_for_calendar(Some(i32::MIN)).is_empty());
    }

    #[test]
    fn default_year_is_current_year() {
        let events = get_holidays_for_calendar(None);
        let this_year = Local::now().year();
        assert!(events[0].start.starts_with(&this_year.to_string())
            || events[0].start.starts_with(&(this_year - 1).to_string()));
    }
}
