//! World times panel

use crate::app::state::AppState;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(Theme::PANEL_BORDER)
        .border_style(Style::default().fg(theme.palette.fg_muted))
        .title(" 🌍 World Times ")
        .title_style(
            Style::default()
                .fg(theme.palette.accent)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = state
        .board
        .world
        .iter()
        .map(|row| Line::styled(format!(" {row}"), Style::default().fg(theme.palette.fg_primary)))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}
