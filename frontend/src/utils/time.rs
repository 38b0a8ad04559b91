use chrono::{Local, NaiveDate};

/// The browser-local calendar date. Day boundaries follow the admin's
/// machine, not the server.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Today's date in the wire / `<input type="date">` format.
pub fn today_string() -> String {
    today().format("%Y-%m-%d").to_string()
}

/// "10 Jan 2024", as the record tables show dates.
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

/// "Wednesday, January 10, 2024", as the dashboard header shows today.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
