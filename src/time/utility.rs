use chrono::{NaiveDate, ParseResult};

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

#[inline]
pub const fn is_leap (year: i32) -> bool {
    ((year % 4 == 0) && (year % 100!= 0)) || (year % 400 == 0)
}


pub const fn days_of_month (year: i32, month: u32) -> u32 {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if month == 2 && is_leap(year) {
        29
    } else if month >= 1 && month <= 12 {
        NO_LEAP_EOM[month as usize]
    } else {
        0
    }
}

/// Parses a strict `YYYY-MM-DD` date.
pub fn parse_iso_date(s: &str) -> ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(s, ISO_DATE_FORMAT)
}

pub fn to_iso_string(d: NaiveDate) -> String {
    d.format(ISO_DATE_FORMAT).to_string()
}
