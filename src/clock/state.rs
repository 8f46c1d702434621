use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Neon,
    Classic,
    Matrix,
    Cyberpunk,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Neon, Theme::Classic, Theme::Matrix, Theme::Cyberpunk];

    pub fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % Self::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Neon => "neon",
            Theme::Classic => "classic",
            Theme::Matrix => "matrix",
            Theme::Cyberpunk => "cyberpunk",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFormat {
    TwelveHour,
    #[default]
    TwentyFourHour,
}

impl TimeFormat {
    pub fn toggle(self) -> Self {
        match self {
            TimeFormat::TwelveHour => TimeFormat::TwentyFourHour,
            TimeFormat::TwentyFourHour => TimeFormat::TwelveHour,
        }
    }

    pub fn hours(self) -> u8 {
        match self {
            TimeFormat::TwelveHour => 12,
            TimeFormat::TwentyFourHour => 24,
        }
    }
}

/// User-adjustable clock settings plus the process start instant.
#[derive(Debug, Clone)]
pub struct ClockState {
    pub theme: Theme,
    pub format: TimeFormat,
    pub show_seconds: bool,
    pub started_at: Instant,
}

impl Default for ClockState {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockState {
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            format: TimeFormat::default(),
            show_seconds: true,
            started_at: Instant::now(),
        }
    }

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
    }

    pub fn toggle_format(&mut self) {
        self.format = self.format.toggle();
    }

    pub fn toggle_seconds(&mut self) {
        self.show_seconds = !self.show_seconds;
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_cycle_wraps() {
        for start in Theme::ALL {
            let mut state = ClockState {
                theme: start,
                ..ClockState::new()
            };
            let mut seen = Vec::new();
            for _ in 0..Theme::ALL.len() {
                seen.push(state.theme);
                state.cycle_theme();
            }
            assert_eq!(state.theme, start);
            for t in Theme::ALL {
                assert!(seen.contains(&t), "{t:?} never visited from {start:?}");
            }
        }
    }

    #[test]
    fn test_theme_order() {
        assert_eq!(Theme::Neon.next(), Theme::Classic);
        assert_eq!(Theme::Classic.next(), Theme::Matrix);
        assert_eq!(Theme::Matrix.next(), Theme::Cyberpunk);
        assert_eq!(Theme::Cyberpunk.next(), Theme::Neon);
    }

    #[test]
    fn test_toggles_are_involutions() {
        let mut state = ClockState::new();
        assert_eq!(state.format, TimeFormat::TwentyFourHour);
        assert!(state.show_seconds);

        state.toggle_format();
        assert_eq!(state.format.hours(), 12);
        state.toggle_format();
        assert_eq!(state.format.hours(), 24);

        state.toggle_seconds();
        assert!(!state.show_seconds);
        state.toggle_seconds();
        assert!(state.show_seconds);
    }
}
