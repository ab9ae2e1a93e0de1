//! Help overlay widget.
//!
//! This module provides the help overlay that displays all available keybindings
//! when the user presses `?`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::hitmap::{HitMap, Target};
use crate::layout::centered_rect;

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 40;

/// Key bindings per section: key column, then description.
const SECTIONS: [(&str, &[(&str, &str)]); 2] = [
    (
        "Navigation",
        &[
            ("Tab", "Next widget"),
            ("Shift+Tab", "Previous widget"),
            ("1-4", "Go to page"),
            ("b", "Toggle sidebar"),
            ("\u{2190} \u{2192}", "Presets and categories"),
            ("\u{2191} \u{2193}", "Headlines and menu"),
        ],
    ),
    (
        "Actions",
        &[
            ("Enter", "Select"),
            ("/", "Search"),
            ("o", "Open link in browser"),
            ("r", "Refresh"),
            ("t", "Toggle theme"),
            ("Esc", "Close overlay"),
            ("Ctrl+C", "Quit"),
            ("?", "Toggle help"),
        ],
    ),
];

/// Renders a centered help overlay displaying all keybindings.
///
/// The overlay is rendered on top of the existing content, clearing the
/// area beneath it, and swallows clicks on the screen below.
///
/// # Layout
///
/// ```text
/// ╭ Help ────────────────────────────────╮
/// │                                      │
/// │  Navigation                          │
/// │  Tab        Next widget              │
/// │  ...                                 │
/// │                                      │
/// │  Actions                             │
/// │  Enter      Select                   │
/// │  ...                                 │
/// │                                      │
/// │  Press any key to close              │
/// ╰──────────────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use glance_tui::hitmap::HitMap;
/// use glance_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
/// let mut hits = HitMap::new();
///
/// render_help_overlay(area, &mut buf, &mut hits);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
    let lines = build_help_lines();
    let height = lines.len() as u16 + 2;
    let popup_area = centered_rect(HELP_WIDTH, height, area);

    hits.push(area, Target::Backdrop);
    Clear.render(popup_area, buf);

    let help_block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    Paragraph::new(lines)
        .block(help_block)
        .alignment(Alignment::Left)
        .render(popup_area, buf);
}

/// Builds the lines of help content.
fn build_help_lines() -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Green);
    let text_style = Style::default().fg(Color::White);
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let mut lines = vec![Line::from("")];
    for (heading, bindings) in SECTIONS {
        lines.push(Line::from(Span::styled(format!("  {heading}"), header_style)));
        for (key, action) in bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<11}"), key_style),
                Span::styled(*action, text_style),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled("  Press any key to close", hint_style)));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::render_frame;

    #[test]
    fn render_help_overlay_creates_output() {
        let (content, hits) = render_frame(80, 30, render_help_overlay).into_parts();

        assert!(content.contains("Help"));
        assert!(content.contains("Navigation"));
        assert!(content.contains("Actions"));
        assert!(content.contains("Press any key to close"));
        assert_eq!(hits.target_at(0, 0), Some(Target::Backdrop));
    }

    #[test]
    fn render_help_overlay_handles_small_area() {
        let rendered = render_frame(20, 10, render_help_overlay);
        assert!(rendered.hits.contains(Target::Backdrop));
    }

    #[test]
    fn build_help_lines_contains_all_keybindings() {
        let lines = build_help_lines();

        let content: String = lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");

        assert!(content.contains("←"));
        assert!(content.contains("↓"));
        for key in ["Tab", "1-4", "Enter", "Esc", "Ctrl+C", "/", "?"] {
            assert!(content.contains(key), "missing {key}");
        }
        assert!(content.contains("Quit"));
        assert!(content.contains("Toggle theme"));
    }
}
