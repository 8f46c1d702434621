//! Text formatting for the clock regions

use super::state::{ClockState, TimeFormat};
use chrono::{Datelike, NaiveDate, Timelike};
use std::time::Duration;

/// Format a wall-clock time for the big display, e.g. `14:23:07` or `02:23 PM`.
pub fn main_time<T: Timelike>(t: &T, format: TimeFormat, show_seconds: bool) -> String {
    let (hour, suffix) = match format {
        TimeFormat::TwentyFourHour => (t.hour(), String::new()),
        TimeFormat::TwelveHour => (t.hour12().1, format!(" {}", meridiem(t, format))),
    };
    if show_seconds {
        format!("{:02}:{:02}:{:02}{}", hour, t.minute(), t.second(), suffix)
    } else {
        format!("{:02}:{:02}{}", hour, t.minute(), suffix)
    }
}

/// `AM`/`PM` in 12-hour format, empty in 24-hour format.
pub fn meridiem<T: Timelike>(t: &T, format: TimeFormat) -> &'static str {
    match format {
        TimeFormat::TwentyFourHour => "",
        TimeFormat::TwelveHour if t.hour12().0 => "PM",
        TimeFormat::TwelveHour => "AM",
    }
}

/// `Monday, January 05, 2026 • Week 2` (ISO week number).
pub fn date_line(date: NaiveDate) -> String {
    format!(
        "{} • Week {}",
        date.format("%A, %B %d, %Y"),
        date.iso_week().week()
    )
}

/// Elapsed time as `HH:MM:SS`. Hours keep growing past 99.
pub fn uptime(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let (hours, rem) = (total / 3600, total % 3600);
    format!("{:02}:{:02}:{:02}", hours, rem / 60, rem % 60)
}

pub fn status_line(state: &ClockState, elapsed: Duration, zone: &str) -> String {
    format!(
        "Theme: {} | Format: {}H | Uptime: {} | {}",
        state.theme.name().to_uppercase(),
        state.format.hours(),
        uptime(elapsed),
        zone
    )
}
