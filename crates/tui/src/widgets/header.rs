//! Header bar: sidebar toggle, title and theme toggle.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::hitmap::{HitMap, Target};
use crate::state::AppState;
use crate::theme::Palette;

/// Width of a header button: the glyph with one column of padding each side.
const BUTTON_WIDTH: u16 = 3;

/// Width of the help cue next to the theme toggle.
const HELP_CUE_WIDTH: u16 = 9;

/// Renders the header bar.
///
/// ```text
/// ╭──────────────────────────────────────────────╮
/// │ ☰               Dashboard          ? help  ☀ │
/// ╰──────────────────────────────────────────────╯
/// ```
pub fn render_header(state: &AppState, palette: &Palette, area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(palette.header));
    let inner = block.inner(area);
    block.render(area, buf);

    let [menu_area, title_area, help_area, theme_area] = Layout::horizontal([
        Constraint::Length(BUTTON_WIDTH),
        Constraint::Min(0),
        Constraint::Length(HELP_CUE_WIDTH),
        Constraint::Length(BUTTON_WIDTH),
    ])
    .areas(inner);

    let button_style = Style::default().fg(palette.text).add_modifier(Modifier::BOLD);
    Paragraph::new(format!(" {} ", state.sidebar_glyph()))
        .style(button_style)
        .render(menu_area, buf);
    Paragraph::new(format!(" {} ", state.theme_glyph()))
        .style(button_style)
        .render(theme_area, buf);

    Paragraph::new(Span::styled(
        "Dashboard",
        Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .render(title_area, buf);

    Paragraph::new(Line::from(vec![
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::styled(" help ", palette.dim()),
    ]))
    .alignment(Alignment::Right)
    .render(help_area, buf);

    hits.push(menu_area, Target::ToggleSidebar);
    hits.push(theme_area, Target::ToggleTheme);
}
