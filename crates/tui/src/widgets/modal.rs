//! Article detail and fullscreen image overlays.
//!
//! Both overlays cover the whole screen with a [`Target::Backdrop`], so a
//! click outside the panel does nothing.

use glance_protocol::Article;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::news::IMAGE_MARK;
use crate::hitmap::{HitMap, Target};
use crate::layout::centered_rect;
use crate::state::CLOSE;
use crate::theme::Palette;

/// Largest size of the detail panel.
const DETAIL_WIDTH: u16 = 72;
const DETAIL_HEIGHT: u16 = 20;

/// Width of the close button.
const CLOSE_WIDTH: u16 = 3;

/// Label of the link to the full article.
pub const READ_MORE: &str = "Read More \u{2197}"; // ↗

fn overlay_block<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .title(Span::styled(title, Style::default().add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.focus))
        .style(Style::default().fg(palette.text).bg(palette.surface))
}

fn render_close(area: Rect, palette: &Palette, buf: &mut Buffer, hits: &mut HitMap) {
    Paragraph::new(format!(" {CLOSE} "))
        .style(Style::default().fg(palette.error).add_modifier(Modifier::BOLD))
        .render(area, buf);
    hits.push(area, Target::CloseOverlay);
}

/// Renders the detail overlay of one headline.
///
/// ```text
/// ╭ Article ───────────────────────────────╮
/// │▣ https://img.example.com/1.jpg       ✕ │
/// │                                        │
/// │Headline                                │
/// │Example Wire · Jan 5, 2024              │
/// │                                        │
/// │Summary...                              │
/// │                                        │
/// │Read More ↗            Esc close  o open│
/// ╰────────────────────────────────────────╯
/// ```
pub fn render_article_detail(
    article: &Article,
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
    hits: &mut HitMap,
) {
    hits.push(area, Target::Backdrop);
    let popup = centered_rect(
        DETAIL_WIDTH.min(area.width.saturating_sub(4)),
        DETAIL_HEIGHT.min(area.height.saturating_sub(2)),
        area,
    );
    Clear.render(popup, buf);
    let block = overlay_block(" Article ", palette);
    let inner = block.inner(popup);
    block.render(popup, buf);
    if inner.height < 3 {
        return;
    }

    let [top, _, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);
    let [image_area, close_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(CLOSE_WIDTH)]).areas(top);

    if let Some(image) = &article.image_url {
        Paragraph::new(Line::from(vec![
            Span::styled(IMAGE_MARK, Style::default().fg(palette.link)),
            Span::styled(
                image.as_str(),
                Style::default().fg(palette.link).add_modifier(Modifier::UNDERLINED),
            ),
        ]))
        .render(image_area, buf);
        hits.push(image_area, Target::ArticleImage);
    }
    render_close(close_area, palette, buf, hits);

    let mut meta = article.source.clone();
    if let Some(published) = article.published() {
        meta.push_str(&format!(" \u{b7} {}", published.format("%b %-d, %Y")));
    }
    let mut lines = vec![
        Line::from(Span::styled(
            article.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(meta, Style::default().fg(palette.muted))),
    ];
    if let Some(description) = &article.description {
        lines.push(Line::from(""));
        lines.push(Line::from(description.as_str()));
    }
    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .render(body, buf);

    let [link_area, hint_area] = Layout::horizontal([
        Constraint::Length(Span::raw(READ_MORE).width() as u16),
        Constraint::Min(0),
    ])
    .areas(footer);
    if !article.url.is_empty() {
        Paragraph::new(READ_MORE)
            .style(
                Style::default()
                    .fg(palette.link)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .render(link_area, buf);
        hits.push(link_area, Target::ReadMore);
    }
    Paragraph::new("Esc close  o open")
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Right)
        .render(hint_area, buf);
}

/// Renders the fullscreen image overlay.
///
/// Terminals cannot draw the image itself, so the overlay names it and
/// offers to open it in the browser.
pub fn render_image_overlay(url: &str, palette: &Palette, area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
    hits.push(area, Target::Backdrop);
    let popup = centered_rect(
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
        area,
    );
    Clear.render(popup, buf);
    let block = overlay_block(" Image ", palette);
    let inner = block.inner(popup);
    block.render(popup, buf);
    if inner.is_empty() {
        return;
    }

    let [top, body] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
    let [_, close_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(CLOSE_WIDTH)]).areas(top);
    render_close(close_area, palette, buf, hits);

    let lines = vec![
        Line::from(Span::styled(IMAGE_MARK.trim_end(), Style::default().fg(palette.link))),
        Line::from(""),
        Line::from(Span::styled(
            url,
            Style::default().fg(palette.link).add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(""),
        Line::from(Span::styled("Press o to open the image in your browser.", Style::default().fg(palette.muted))),
    ];
    let [_, content] = Layout::vertical([Constraint::Percentage(30), Constraint::Min(0)]).areas(body);
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(content, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{Rendered, render_frame};
    use glance_protocol::sample::sample_articles;

    fn detail(article: &Article) -> Rendered {
        render_frame(80, 24, |area, buf, hits| render_article_detail(article, &Palette::DARK, area, buf, hits))
    }

    fn article(with_image: bool) -> Article {
        let index = if with_image { 0 } else { 1 };
        sample_articles(1, 2).remove(index)
    }

    #[test]
    fn detail_shows_article_fields() {
        let (content, hits) = detail(&article(true)).into_parts();

        assert!(content.contains("Headline 1.1"));
        assert!(content.contains("Example Wire \u{b7} Jan 5, 2024"));
        assert!(content.contains("Summary of story 1 on page 1."));
        assert!(content.contains(READ_MORE));
        assert!(content.contains("https://img.example.com/1/1.jpg"));
        assert!(hits.contains(Target::ArticleImage));
        assert!(hits.contains(Target::ReadMore));
        assert!(hits.contains(Target::CloseOverlay));
        assert_eq!(hits.target_at(0, 0), Some(Target::Backdrop));
    }

    #[test]
    fn detail_without_image_has_no_image_target() {
        let (content, hits) = render_frame(80, 24, |area, buf, hits| {
            render_article_detail(&article(false), &Palette::LIGHT, area, buf, hits);
        })
        .into_parts();

        assert!(!hits.contains(Target::ArticleImage));
        assert!(!content.contains(IMAGE_MARK));
    }

    #[test]
    fn detail_without_url_hides_read_more() {
        let mut article = article(false);
        article.url.clear();

        assert!(!detail(&article).hits.contains(Target::ReadMore));
    }

    #[test]
    fn image_overlay_names_the_image() {
        let (content, hits) = render_frame(80, 24, |area, buf, hits| {
            render_image_overlay("https://img.example.com/1/1.jpg", &Palette::DARK, area, buf, hits);
        })
        .into_parts();

        assert!(content.contains("https://img.example.com/1/1.jpg"));
        assert!(content.contains("Image"));
        let close = hits.area_of(Target::CloseOverlay).unwrap();
        assert_eq!(hits.target_at(close.x + 1, close.y), Some(Target::CloseOverlay));
    }

    #[test]
    fn tiny_area_does_not_panic() {
        render_frame(6, 3, |area, buf, hits| {
            render_article_detail(&article(true), &Palette::DARK, area, buf, hits);
            render_image_overlay("u", &Palette::DARK, area, buf, hits);
        });
    }
}
