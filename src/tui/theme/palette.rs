//! Color palettes, one per clock theme

use crate::clock::state::Theme;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background outside the clock
    pub bg_screen: Color,
    /// Clock container background
    pub bg_panel: Color,
    pub fg_primary: Color,
    pub fg_muted: Color,
    /// Border and big digits
    pub accent: Color,
    pub status_bg: Color,
}

impl Palette {
    pub const NEON: Self = Self {
        bg_screen: Color::Rgb(10, 10, 26),     // #0a0a1a
        bg_panel: Color::Rgb(0, 17, 34),       // #001122
        fg_primary: Color::Rgb(255, 255, 255),
        fg_muted: Color::Rgb(120, 120, 140),
        accent: Color::Rgb(0, 255, 255),       // cyan
        status_bg: Color::Rgb(22, 33, 62),     // #16213e
    };

    pub const CLASSIC: Self = Self {
        bg_panel: Color::Rgb(34, 17, 0),       // #221100
        accent: Color::Rgb(255, 215, 0),       // gold
        ..Self::NEON
    };

    pub const MATRIX: Self = Self {
        bg_panel: Color::Rgb(0, 17, 0),        // #001100
        accent: Color::Rgb(0, 200, 0),         // green
        ..Self::NEON
    };

    pub const CYBERPUNK: Self = Self {
        bg_panel: Color::Rgb(34, 0, 34),       // #220022
        accent: Color::Rgb(255, 0, 255),       // magenta
        ..Self::NEON
    };

    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Neon => Self::NEON,
            Theme::Classic => Self::CLASSIC,
            Theme::Matrix => Self::MATRIX,
            Theme::Cyberpunk => Self::CYBERPUNK,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::NEON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_theme_has_its_own_accent() {
        let accents: Vec<Color> = Theme::ALL.iter().map(|t| Palette::for_theme(*t).accent).collect();
        for (i, a) in accents.iter().enumerate() {
            assert!(!accents[i + 1..].contains(a), "duplicate accent {a:?}");
        }
    }
}
