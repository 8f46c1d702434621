use crate::clock::state::{ClockState, Theme, TimeFormat};
use crate::clock::world::{DEFAULT_ENTRIES, WorldClockEntry};
use directories::ProjectDirs;
use std::path::PathBuf;
use std::time::Duration;

/// Startup settings. Nothing here is read from or written to disk.
#[derive(Debug, Clone)]
pub struct Config {
    pub clock: ClockConfig,
    pub world: Vec<WorldClockEntry>,
    pub log_file: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ClockConfig {
    pub theme: Theme,
    pub format: TimeFormat,
    pub show_seconds: bool,
    /// Refresh cadence
    pub tick: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clock: ClockConfig::default(),
            world: DEFAULT_ENTRIES.to_vec(),
            log_file: default_log_path(),
        }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Neon,
            format: TimeFormat::TwentyFourHour,
            show_seconds: true,
            tick: Duration::from_secs(1),
        }
    }
}

impl Config {
    /// Fresh clock state seeded from the startup settings.
    pub fn initial_state(&self) -> ClockState {
        ClockState {
            theme: self.clock.theme,
            format: self.clock.format,
            show_seconds: self.clock.show_seconds,
            ..ClockState::new()
        }
    }
}

pub fn default_log_path() -> PathBuf {
    let proj = ProjectDirs::from("dev", "bigclock", "bigclock");
    proj.as_ref()
        .map(|p| p.data_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("bigclock"))
        .join("bigclock.log")
}
