//! Root layout widget - the clock container plus the status bar
//!
//! ```text
//! ┏━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┓
//! ┃            Digital Clock            ┃
//! ┃                                     ┃
//! ┃   ##### ##### • ##### ##### • ...   ┃  main time (5 rows)
//! ┃                                     ┃
//! ┃   Thursday, January 15, 2026 • ...  ┃
//! ┃ ┌ World Times ────────────────────┐ ┃
//! ┃ │ New York   07:00                │ ┃
//! ┃ └─────────────────────────────────┘ ┃
//! ┃ T:Theme | F:Format | S:Seconds | Q  ┃
//! ┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛
//!  Theme: NEON | Format: 24H | Uptime ...   status bar
//! ```

use crate::app::state::{AppState, Board};
use crate::glyph::{GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use super::world;

/// Columns taken by one glyph and its separator
const GLYPH_STEP: usize = GLYPH_WIDTH + 1;

/// Glyphs of the ` AM`/` PM` suffix
const MERIDIEM_GLYPHS: usize = 3;

const PADDING_X: u16 = 2;

/// Widest main time is `hh:mm:ss AM` (11 glyphs), plus border and padding.
const CONTAINER_WIDTH: u16 = 11 * GLYPH_STEP as u16 + 2 * (PADDING_X + 1);
const CONTAINER_HEIGHT: u16 = 24;

pub const CONTROLS: &str = "T:Theme | F:Format | S:Seconds | Q:Quit";

pub fn render(frame: &mut Frame, state: &AppState) {
    let theme = Theme::new(state.clock.theme);
    let root = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.palette.bg_screen)),
        root,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Clock
            Constraint::Length(1), // Status bar
        ])
        .split(root);

    render_container(frame, state, &theme, centered(rows[0], CONTAINER_WIDTH, CONTAINER_HEIGHT));
    render_status(frame, state, &theme, rows[1]);
}

fn render_container(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let palette = &theme.palette;
    let time_rows: Vec<String> = state.board.main_time.lines().map(without_separator).collect();
    let time_width = time_rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);

    // Give up the side padding before cropping any glyph.
    let pad = if time_width + 2 * (PADDING_X as usize + 1) <= area.width as usize {
        PADDING_X
    } else {
        0
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(Theme::CONTAINER_BORDER)
        .border_style(Style::default().fg(palette.accent))
        .padding(Padding::new(pad, pad, 1, 1))
        .style(Style::default().bg(palette.bg_panel));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                   // Title
            Constraint::Length(1),
            Constraint::Length(GLYPH_HEIGHT as u16), // Main time
            Constraint::Length(1),
            Constraint::Length(1),                   // Date
            Constraint::Length(1),
            Constraint::Length(7),                   // World times
            Constraint::Length(1),
            Constraint::Length(1),                   // Controls
        ])
        .split(inner);

    let title = Paragraph::new("Digital Clock")
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD));
    frame.render_widget(title, sections[0]);

    let (time_rows, meridiem_as_text) = fit_main_time(time_rows, &state.board, inner.width);
    let big = Paragraph::new(Text::from_iter(time_rows))
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD));
    frame.render_widget(big, sections[2]);

    let date_text = if meridiem_as_text {
        format!("📅 {} • {}", state.board.date_info, state.board.meridiem)
    } else {
        format!("📅 {}", state.board.date_info)
    };
    let date = Paragraph::new(date_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.fg_primary));
    frame.render_widget(date, sections[4]);

    world::render(frame, state, theme, sections[6]);

    let controls = Paragraph::new(Line::styled(CONTROLS, Style::default().fg(palette.fg_muted)))
        .alignment(Alignment::Center);
    frame.render_widget(controls, sections[8]);
}

fn render_status(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let status = Paragraph::new(state.board.status.as_str())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(theme.palette.fg_muted)
                .bg(theme.palette.status_bg),
        );
    frame.render_widget(status, area);
}

/// Glyph row without the separator column after its last glyph.
fn without_separator(row: &str) -> String {
    let mut row = row.to_string();
    row.pop();
    row
}

/// Main time rows that fit in `width` columns. When the full time is too wide,
/// the ` AM`/` PM` glyphs are cut and `true` tells the caller to show the
/// marker as text instead.
fn fit_main_time(rows: Vec<String>, board: &Board, width: u16) -> (Vec<String>, bool) {
    let width = width as usize;
    let fits = rows.iter().all(|r| r.chars().count() <= width);
    if fits || board.meridiem.is_empty() {
        return (rows, false);
    }
    let cut = MERIDIEM_GLYPHS * GLYPH_STEP;
    let rows = rows
        .iter()
        .map(|r| {
            let keep = r.chars().count().saturating_sub(cut);
            r.chars().take(keep).collect()
        })
        .collect();
    (rows, true)
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
