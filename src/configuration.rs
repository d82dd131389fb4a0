use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::pto::calendarexport::{
    CalendarEvent,
    CalendarExportSettings,
    holidays_for_calendar
};
use crate::pto::ptocalculator::{PtoCalculator, PtoSettings};
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidaycalendarmanager::HolidayCalendarManager;


#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigurationJsonProp {
    #[serde(default)]
    holiday_calendar: Vec<serde_json::Value>,
    #[serde(default)]
    pto: PtoSettings,
    #[serde(default)]
    calendar_export: CalendarExportSettings
}

/// Holiday calendars plus PTO and calendar-export settings.
///
/// `Configuration::new()` holds only the built-in calendar and default
/// settings; `from_reader` layers a JSON file on top.
pub struct Configuration {
    holiday_calendar_manager: Manager<dyn HolidayCalendar>,
    pto_settings: PtoSettings,
    calendar_export_settings: CalendarExportSettings
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            holiday_calendar_manager: HolidayCalendarManager::new(),
            pto_settings: PtoSettings::default(),
            calendar_export_settings: CalendarExportSettings::default()
        }
    }

    pub fn holiday_calendar_manager(&self) -> &Manager<dyn HolidayCalendar> {
        &self.holiday_calendar_manager
    }

    pub fn pto_settings(&self) -> &PtoSettings {
        &self.pto_settings
    }

    pub fn calendar_export_settings(&self) -> &CalendarExportSettings {
        &self.calendar_export_settings
    }

    pub fn from_reader(file_path: &Path) -> Result<Configuration, ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        let configuration = Configuration::from_json(json_value)?;
        info!(
            path = %file_path.display(),
            calendars = ?configuration.holiday_calendar_manager.names(),
            "loaded configuration"
        );
        Ok(configuration)
    }

    pub fn from_json(json_value: serde_json::Value) -> Result<Configuration, ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_value(json_value)?;
        let configuration = Configuration {
            pto_settings: json_prop.pto,
            calendar_export_settings: json_prop.calendar_export,
            ..Configuration::new()
        };
        configuration.holiday_calendar_manager.insert_obj_from_json_vec(&json_prop.holiday_calendar)?;
        // Fail at load time rather than on the first request.
        configuration.pto_calendar()?;
        Ok(configuration)
    }

    /// The calendar named by the PTO settings.
    pub fn pto_calendar(&self) -> Result<Arc<dyn HolidayCalendar>, ManagerError> {
        self.holiday_calendar_manager.get(&self.pto_settings.calendar)
    }

    pub fn pto_calculator(&self) -> Result<PtoCalculator, ManagerError> {
        Ok(PtoCalculator::new(self.pto_calendar()?, self.pto_settings.clone()))
    }

    pub fn holidays_for_calendar(&self, year: Option<i32>) -> Result<Vec<CalendarEvent>, ManagerError> {
        let calendar = self.pto_calendar()?;
        Ok(holidays_for_calendar(calendar.as_ref(), &self.calendar_export_settings, year))
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
