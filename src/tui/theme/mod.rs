//! Theme configuration - per-theme palette plus border sets

pub mod palette;

pub use palette::Palette;

use crate::clock::state::Theme as ClockTheme;
use ratatui::symbols::border;

/// Resolved look for the active clock theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub palette: Palette,
}

impl Theme {
    /// Heavy frame around the whole clock
    pub const CONTAINER_BORDER: border::Set<'static> = border::THICK;
    pub const PANEL_BORDER: border::Set<'static> = border::PLAIN;

    pub fn new(theme: ClockTheme) -> Self {
        Self {
            palette: Palette::for_theme(theme),
        }
    }
}
