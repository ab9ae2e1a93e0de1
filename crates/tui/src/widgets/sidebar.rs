//! Navigation sidebar.

use glance_protocol::Route;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::hitmap::{HitMap, Target};
use crate::theme::Palette;

/// Glyph shown before each entry.
fn route_glyph(route: Route) -> &'static str {
    match route {
        Route::Dashboard => "\u{2302}", // ⌂
        Route::Weather => "\u{2601}",   // ☁
        Route::News => "\u{2261}",      // ≡
        Route::Finance => "\u{2197}",   // ↗
    }
}

/// Renders the sidebar.
///
/// The current route is highlighted. When `cursor` is set (the sidebar is an
/// overlay with keyboard focus), that entry is underlined. As an overlay the
/// sidebar clears what is beneath it.
pub fn render_sidebar(
    current: Route,
    cursor: Option<usize>,
    overlay: bool,
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
    hits: &mut HitMap,
) {
    if overlay {
        Clear.render(area, buf);
        hits.push(area, Target::Backdrop);
    }
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(palette.border))
        .style(palette.base());
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.height < 2 {
        return;
    }

    let heading = Rect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(1), 1);
    Paragraph::new(Span::styled(
        "Navigation",
        palette.dim().add_modifier(Modifier::BOLD),
    ))
    .render(heading, buf);

    for (index, route) in Route::ALL.into_iter().enumerate() {
        let y = heading.y + 2 + index as u16;
        if y >= inner.bottom() {
            break;
        }
        let entry = Rect::new(inner.x, y, inner.width, 1);
        let mut style = if route == current {
            palette.active()
        } else {
            Style::default().fg(palette.text)
        };
        if cursor == Some(index) {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        Paragraph::new(format!("  {} {}", route_glyph(route), route.label()))
            .style(style)
            .render(entry, buf);
        hits.push(entry, Target::Route(route));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::render_frame;

    #[test]
    fn lists_every_route() {
        let (content, hits) = render_frame(22, 12, |area, buf, hits| {
            render_sidebar(Route::News, None, false, &Palette::DARK, area, buf, hits);
        })
        .into_parts();

        assert!(content.contains("Navigation"));
        for route in Route::ALL {
            assert!(content.contains(route.label()), "missing {route:?}");
            assert!(hits.contains(Target::Route(route)));
        }
        assert_eq!(hits.target_at(5, 4), Some(Target::Route(Route::Weather)));
    }

    #[test]
    fn overlay_swallows_clicks_on_blank_rows() {
        let hits = render_frame(22, 12, |area, buf, hits| {
            render_sidebar(Route::Dashboard, Some(0), true, &Palette::DARK, area, buf, hits);
        })
        .hits;

        assert_eq!(hits.target_at(5, 10), Some(Target::Backdrop));
        assert_eq!(hits.target_at(5, 3), Some(Target::Route(Route::Dashboard)));
    }

    #[test]
    fn tiny_area_does_not_panic() {
        let rendered = render_frame(22, 1, |area, buf, hits| {
            render_sidebar(Route::Dashboard, None, false, &Palette::LIGHT, area, buf, hits);
        });
        assert!(rendered.hits.is_empty());
    }
}
