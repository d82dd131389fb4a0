pub mod configuration;

pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod pto {
    pub mod ptoerror;
    pub mod rangebreakdown;
    pub mod ptocalculator;
    pub mod calendarexport;
}

pub mod time {
    pub mod utility;
    pub mod rangeofdates;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod weekendadjustment;
        pub mod fixeddateholiday;
        pub mod nthweekdayholiday;
        pub mod lastweekdayholiday;
        pub mod holidayrule;
    }

    pub mod calendar {
        pub mod observedholiday;
        pub mod holidaycalendar;
        pub mod simplecalendar;
        pub mod holidaypolicy;
        pub mod holidaycalendarmanager;
    }
}

pub use pto::calendarexport::get_holidays_for_calendar;
pub use pto::ptocalculator::{calculate_pto_days, get_pto_breakdown};
