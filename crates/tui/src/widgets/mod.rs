//! Widget components for the glance TUI.
//!
//! Each widget is a function that renders state into a buffer and records
//! its clickable regions in a [`HitMap`]. Rendering never mutates widget
//! state, which keeps every widget testable against a plain [`Buffer`].
//!
//! # Modules
//!
//! - [`header`]: sidebar toggle, title and theme toggle
//! - [`sidebar`]: route navigation
//! - [`weather`]: city search, presets and the forecast table
//! - [`news`]: category buttons and the headline list
//! - [`finance`]: symbol search, presets and the price chart
//! - [`modal`]: article detail and fullscreen image overlays
//! - [`help`]: key binding overlay
//!
//! # Example
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use glance_tui::hitmap::HitMap;
//! use glance_tui::theme::Palette;
//! use glance_tui::weather_state::WeatherState;
//! use glance_tui::widgets;
//!
//! let area = Rect::new(0, 0, 70, 20);
//! let mut buf = Buffer::empty(area);
//! let mut hits = HitMap::new();
//!
//! widgets::render_weather(&WeatherState::new(), &Palette::DARK, true, area, &mut buf, &mut hits);
//! ```

pub mod finance;
pub mod header;
pub mod help;
pub mod modal;
pub mod news;
pub mod sidebar;
pub mod weather;

use glance_protocol::WidgetKind;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::hitmap::{HitMap, Target};
use crate::search::SearchBox;
use crate::theme::Palette;

pub use finance::render_finance;
pub use header::render_header;
pub use help::render_help_overlay;
pub use modal::{render_article_detail, render_image_overlay};
pub use news::render_news;
pub use sidebar::render_sidebar;
pub use weather::render_weather;

/// Width of the search button, brackets included.
const SEARCH_BUTTON_WIDTH: u16 = 10;

/// Builds the rounded frame shared by the three widgets.
pub(crate) fn widget_block<'a>(title: impl Into<Line<'a>>, palette: &Palette, focused: bool) -> Block<'a> {
    let border = if focused { palette.focus } else { palette.border };
    let title: Line<'a> = title.into();
    Block::default()
        .title(title.style(Style::default().add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
}

/// Places buttons left to right, wrapping onto new rows.
///
/// Returns the column offset and row of each button. Buttons are separated
/// by one column.
fn flow(widths: impl IntoIterator<Item = u16>, width: u16) -> Vec<(u16, u16)> {
    let mut positions = Vec::new();
    let (mut x, mut row) = (0u16, 0u16);
    for button in widths {
        let button = button.min(width);
        if x > 0 && x.saturating_add(button) > width {
            x = 0;
            row += 1;
        }
        positions.push((x, row));
        x = x.saturating_add(button + 1);
    }
    positions
}

fn button_width(label: &str) -> u16 {
    Span::raw(label).width() as u16 + 2
}

/// Returns the rows needed to show every button in `width` columns.
#[must_use]
pub(crate) fn button_rows(labels: &[&str], width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    flow(labels.iter().map(|l| button_width(l)), width)
        .last()
        .map_or(0, |(_, row)| row + 1)
}

/// Returns the screen rect of each button that fits in `area`.
#[must_use]
pub(crate) fn button_rects(labels: &[&str], area: Rect) -> Vec<Rect> {
    let widths: Vec<u16> = labels.iter().map(|l| button_width(l).min(area.width)).collect();
    flow(widths.iter().copied(), area.width)
        .into_iter()
        .zip(widths)
        .take_while(|((_, row), _)| *row < area.height)
        .map(|((x, row), width)| Rect::new(area.x + x, area.y + row, width, 1))
        .collect()
}

/// Renders a row of buttons and records their targets.
///
/// `active` is drawn with the accent colour; `cursor` is underlined when the
/// widget has focus.
#[allow(clippy::too_many_arguments)]
pub(crate) fn render_buttons(
    labels: &[&str],
    active: Option<usize>,
    cursor: Option<usize>,
    target: impl Fn(usize) -> Target,
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
    hits: &mut HitMap,
) {
    for (index, (rect, label)) in button_rects(labels, area).into_iter().zip(labels).enumerate() {
        let mut style = if active == Some(index) {
            palette.active()
        } else {
            palette.idle()
        };
        if cursor == Some(index) {
            style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
        }
        Paragraph::new(format!(" {label} "))
            .style(style)
            .render(rect, buf);
        hits.push(rect, target(index));
    }
}

/// Renders a search input and its button on one row.
pub(crate) fn render_search_box(
    search: &SearchBox,
    placeholder: &str,
    widget: WidgetKind,
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
    hits: &mut HitMap,
) {
    let [input_area, button_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(SEARCH_BUTTON_WIDTH)])
            .spacing(1)
            .areas(area);

    let mut spans = vec![Span::styled("\u{2315} ", palette.dim())];
    if search.text().is_empty() && !search.is_editing() {
        spans.push(Span::styled(placeholder.to_string(), palette.dim()));
    } else {
        spans.push(Span::raw(search.text().to_string()));
    }
    if search.is_editing() {
        spans.push(Span::styled("\u{258f}", Style::default().fg(palette.focus)));
    }

    let input_style = if search.is_editing() {
        palette.idle().add_modifier(Modifier::BOLD)
    } else {
        palette.idle()
    };
    Paragraph::new(Line::from(spans))
        .style(input_style)
        .render(input_area, buf);
    Paragraph::new("[ Search ]")
        .style(palette.active())
        .alignment(Alignment::Center)
        .render(button_area, buf);

    hits.push(input_area, Target::Search(widget));
    hits.push(button_area, Target::SearchSubmit(widget));
}

/// Renders a centred one-paragraph status message.
pub(crate) fn render_status(text: &str, style: Style, area: Rect, buf: &mut Buffer) {
    Paragraph::new(text.to_string())
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(area, buf);
}
