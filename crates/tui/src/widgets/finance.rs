//! Finance widget: symbol search, preset symbols and the price chart.
//!
//! The frame background cycles through [`crate::theme::PULSE_STOPS`]; the
//! caller passes the colour for the current frame.

use glance_protocol::finance::price_range;
use glance_protocol::{PRESET_SYMBOLS, PricePoint, WidgetKind};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Chart, Dataset, GraphType, Widget},
};

use super::{button_rows, render_buttons, render_search_box, render_status, widget_block};
use crate::finance_state::{FinanceState, LOADING_TEXT};
use crate::hitmap::{HitMap, Target};
use crate::theme::Palette;

/// Colour of the price bars.
const BAR_COLOR: Color = Color::Rgb(0xff, 0xd7, 0x00);

/// Colour of the price line and the axis labels.
const LINE_COLOR: Color = Color::White;

/// Returns the frame title for `symbol`.
#[must_use]
pub fn title(symbol: &str) -> String {
    format!(" Finance: {symbol} ")
}

/// Returns the y-axis bounds for a series: its range with some headroom.
///
/// A flat series still gets a non-empty range.
#[must_use]
pub fn price_bounds(points: &[PricePoint]) -> Option<[f64; 2]> {
    let (low, high) = price_range(points)?;
    let pad = ((high - low) * 0.1).max(0.5);
    Some([low - pad, high + pad])
}

/// Renders the finance widget.
///
/// The body shows the loading text, the error, or the chart, in that order
/// of precedence.
#[allow(clippy::too_many_arguments)]
pub fn render_finance(
    state: &FinanceState,
    palette: &Palette,
    focused: bool,
    pulse: Color,
    area: Rect,
    buf: &mut Buffer,
    hits: &mut HitMap,
) {
    let block = widget_block(title(&state.symbol), palette, focused)
        .style(Style::default().bg(pulse).fg(LINE_COLOR));
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.is_empty() {
        return;
    }

    let [search_area, _, presets_area, _, body] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(button_rows(&PRESET_SYMBOLS, inner.width)),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    render_search_box(
        &state.search,
        "Search stock symbol...",
        WidgetKind::Finance,
        palette,
        search_area,
        buf,
        hits,
    );
    render_buttons(
        &PRESET_SYMBOLS,
        state.highlighted_preset(),
        focused.then_some(state.preset_cursor),
        |index| Target::Preset(WidgetKind::Finance, index),
        palette,
        presets_area,
        buf,
        hits,
    );

    if state.loading {
        render_status(LOADING_TEXT, Style::default().fg(Color::Gray), body, buf);
    } else if let Some(error) = &state.error {
        render_status(error, Style::default().fg(palette.error), body, buf);
    } else {
        render_chart(&state.points, body, buf);
    }
}

fn render_chart(points: &[PricePoint], area: Rect, buf: &mut Buffer) {
    let Some(y_bounds) = price_bounds(points) else {
        return;
    };
    let data: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.price))
        .collect();
    let max_x = (points.len().saturating_sub(1) as f64).max(1.0);

    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Bar)
            .style(Style::default().fg(BAR_COLOR))
            .data(&data),
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(LINE_COLOR))
            .data(&data),
    ];

    let first = points.first().map_or("", |p| p.time.as_str());
    let last = points.last().map_or("", |p| p.time.as_str());
    let axis_style = Style::default().fg(Color::Gray);

    Chart::new(datasets)
        .x_axis(
            Axis::default()
                .style(axis_style)
                .bounds([0.0, max_x])
                .labels(vec![Span::raw(first), Span::raw(last)]),
        )
        .y_axis(
            Axis::default()
                .style(axis_style)
                .bounds(y_bounds)
                .labels(vec![
                    Span::raw(format!("{:.2}", y_bounds[0])),
                    Span::raw(format!("{:.2}", y_bounds[1])),
                ]),
        )
        .render(area, buf);
}
