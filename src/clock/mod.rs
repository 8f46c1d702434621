//! Clock model and the per-tick refresh

pub mod format;
pub mod state;
pub mod world;

use crate::glyph;
use chrono::{DateTime, FixedOffset, Utc};
use state::ClockState;
use std::time::Duration;
use world::{WorldClockEntry, ZoneResolver};

/// Named text areas of the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    MainTime,
    /// `AM`/`PM` marker of the main time, empty in 24-hour format
    Meridiem,
    DateInfo,
    World(usize),
    Status,
}

/// Anything that can hold the text of the display regions.
pub trait Surface {
    fn set(&mut self, region: Region, text: String);
}

/// One refresh tick: recompute every region from `now` and write it to `surface`.
///
/// Zone failures only affect their own world clock row.
pub fn refresh(
    state: &ClockState,
    now: DateTime<FixedOffset>,
    uptime: Duration,
    entries: &[WorldClockEntry],
    resolver: &dyn ZoneResolver,
    surface: &mut dyn Surface,
) {
    let time = format::main_time(&now, state.format, state.show_seconds);
    surface.set(Region::MainTime, glyph::render(&time));
    surface.set(Region::Meridiem, format::meridiem(&now, state.format).to_string());
    surface.set(Region::DateInfo, format::date_line(now.date_naive()));

    let instant = now.with_timezone(&Utc);
    for (i, entry) in entries.iter().enumerate() {
        let t = world::entry_time(resolver, entry, instant);
        surface.set(Region::World(i), world::entry_line(entry, &t));
    }

    let zone = now.format("%:z").to_string();
    surface.set(Region::Status, format::status_line(state, uptime, &zone));
}
