//! World clock entries and time-zone resolution

use chrono::{DateTime, NaiveTime, Utc};
use chrono_tz::Tz;

/// Shown in place of a time whose zone could not be resolved.
pub const PLACEHOLDER: &str = "--:--";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldClockEntry {
    pub icon: &'static str,
    pub label: &'static str,
    pub zone: &'static str,
}

pub const DEFAULT_ENTRIES: [WorldClockEntry; 5] = [
    WorldClockEntry { icon: "🗽", label: "New York", zone: "America/New_York" },
    WorldClockEntry { icon: "🏰", label: "London", zone: "Europe/London" },
    WorldClockEntry { icon: "🗾", label: "Tokyo", zone: "Asia/Tokyo" },
    WorldClockEntry { icon: "🦘", label: "Sydney", zone: "Australia/Sydney" },
    WorldClockEntry { icon: "🏜", label: "Dubai", zone: "Asia/Dubai" },
];

#[derive(Debug, thiserror::Error)]
pub enum ZoneError {
    #[error("unknown time zone {0:?}")]
    Unknown(String),
}

/// Resolves an instant to the local wall-clock time of a named zone.
pub trait ZoneResolver {
    fn resolve(&self, zone: &str, instant: DateTime<Utc>) -> Result<NaiveTime, ZoneError>;
}

/// IANA database compiled in by `chrono-tz`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TzDatabase;

impl ZoneResolver for TzDatabase {
    fn resolve(&self, zone: &str, instant: DateTime<Utc>) -> Result<NaiveTime, ZoneError> {
        let tz: Tz = zone.parse().map_err(|_| ZoneError::Unknown(zone.to_string()))?;
        Ok(instant.with_timezone(&tz).time())
    }
}

/// `HH:MM` in the entry's zone, or [`PLACEHOLDER`] when it can't be resolved.
pub fn entry_time(resolver: &dyn ZoneResolver, entry: &WorldClockEntry, instant: DateTime<Utc>) -> String {
    match resolver.resolve(entry.zone, instant) {
        Ok(t) => t.format("%H:%M").to_string(),
        Err(e) => {
            tracing::warn!(label = entry.label, error = %e, "world clock unavailable");
            PLACEHOLDER.to_string()
        }
    }
}

pub fn entry_line(entry: &WorldClockEntry, time: &str) -> String {
    format!("{} {:<10} {}", entry.icon, entry.label, time)
}
