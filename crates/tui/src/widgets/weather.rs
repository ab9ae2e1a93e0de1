//! Weather widget: city search, preset cities and the 5-day table.

use glance_protocol::{TOP_CITIES, WidgetKind, format_temperature};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Cell, Paragraph, Row, Table, Widget},
};

use super::{button_rows, render_buttons, render_search_box, render_status, widget_block};
use crate::hitmap::{HitMap, Target};
use crate::theme::Palette;
use crate::weather_state::{EMPTY_TEXT, LOADING_TEXT, WeatherState};

/// Frame title.
pub const TITLE: &str = " 5-Day Weather Forecast ";

/// Renders the weather widget.
///
/// Exactly one of the loading text, the error, the forecast table or the
/// empty-state text fills the body.
pub fn render_weather(
    state: &WeatherState,
    palette: &Palette,
    focused: bool,
    area: Rect,
    buf: &mut Buffer,
    hits: &mut HitMap,
) {
    let block = widget_block(TITLE, palette, focused);
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.is_empty() {
        return;
    }

    let preset_rows = button_rows(&TOP_CITIES, inner.width);
    let [search_area, _, presets_area, _, body] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(preset_rows),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    render_search_box(
        &state.search,
        "Enter city name...",
        WidgetKind::Weather,
        palette,
        search_area,
        buf,
        hits,
    );
    render_buttons(
        &TOP_CITIES,
        state.highlighted_preset(),
        focused.then_some(state.preset_cursor),
        |index| Target::Preset(WidgetKind::Weather, index),
        palette,
        presets_area,
        buf,
        hits,
    );

    if state.loading {
        render_status(LOADING_TEXT, palette.dim(), body, buf);
    } else if let Some(error) = &state.error {
        render_status(error, Style::default().fg(palette.error), body, buf);
    } else if !state.forecast.is_empty() {
        render_forecast(state, palette, body, buf);
    } else {
        render_status(EMPTY_TEXT, palette.dim(), body, buf);
    }
}

fn render_forecast(state: &WeatherState, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let [title_area, table_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    let city = state.selected_city.as_deref().unwrap_or_default();
    Paragraph::new(Span::styled(city, Style::default().add_modifier(Modifier::BOLD)))
        .alignment(Alignment::Center)
        .render(title_area, buf);

    let header = Row::new([
        Cell::from("Date"),
        Cell::from("Max Temp (°C)").style(Style::default().fg(palette.warm)),
        Cell::from("Min Temp (°C)").style(Style::default().fg(palette.cool)),
        Cell::from("Weather"),
    ])
    .style(palette.dim().add_modifier(Modifier::BOLD));

    let rows = state.forecast.iter().map(|day| {
        let icon = day.weather_icon();
        Row::new([
            Cell::from(day.date.clone()),
            Cell::from(format_temperature(day.max_temp)),
            Cell::from(format_temperature(day.min_temp)),
            Cell::from(format!("{} {}", icon.glyph(), icon.label())),
        ])
    });

    Table::new(rows, [Constraint::Fill(1); 4])
        .header(header)
        .column_spacing(1)
        .render(table_area, buf);
}
