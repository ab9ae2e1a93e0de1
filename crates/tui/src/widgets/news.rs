//! News widget: category buttons and the headline list.

use glance_protocol::{Article, NewsCategory};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{button_rows, render_buttons, render_status, widget_block};
use crate::hitmap::{HitMap, Target};
use crate::layout::ARTICLE_HEIGHT;
use crate::news_state::{LOADING_TEXT, NewsState};
use crate::theme::Palette;

/// Frame title.
pub const TITLE: &str = " Latest News ";

/// Marks headlines that carry a lead image.
pub const IMAGE_MARK: &str = "\u{25a3} "; // ▣

/// Returns the first headline shown so that `cursor` stays in view.
#[must_use]
pub fn first_visible(cursor: Option<usize>, capacity: usize) -> usize {
    cursor.map_or(0, |cursor| (cursor + 1).saturating_sub(capacity))
}

/// Renders the news widget.
///
/// Each headline takes [`ARTICLE_HEIGHT`] rows: title, source and date, and
/// a spacer. The list scrolls to keep the cursor visible. Loading and error
/// messages only replace an empty list.
pub fn render_news(
    state: &NewsState,
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

    let labels = NewsCategory::ALL.map(NewsCategory::label);
    let [categories_area, _, list_area] = Layout::vertical([
        Constraint::Length(button_rows(&labels, inner.width)),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    render_buttons(
        &labels,
        Some(state.category.index()),
        None,
        |index| Target::Category(NewsCategory::ALL[index]),
        palette,
        categories_area,
        buf,
        hits,
    );

    if state.articles.is_empty() {
        if state.loading {
            render_status(LOADING_TEXT, palette.dim(), list_area, buf);
        } else if let Some(error) = state.visible_error() {
            render_status(error, Style::default().fg(palette.error), list_area, buf);
        }
        return;
    }

    let capacity = usize::from(list_area.height / ARTICLE_HEIGHT).max(1);
    let start = first_visible(state.cursor, capacity);
    for (offset, (index, article)) in state
        .articles
        .iter()
        .enumerate()
        .skip(start)
        .take(capacity)
        .enumerate()
    {
        let y = list_area.y + offset as u16 * ARTICLE_HEIGHT;
        let height = ARTICLE_HEIGHT.min(list_area.bottom().saturating_sub(y));
        let row = Rect::new(list_area.x, y, list_area.width, height);
        let selected = focused && state.cursor == Some(index);
        render_article(article, selected, palette, row, buf);
        hits.push(row, Target::Article(index));
    }
}

fn render_article(article: &Article, selected: bool, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let mut title_style = Style::default().fg(palette.text).add_modifier(Modifier::BOLD);
    if selected {
        title_style = title_style.fg(palette.focus).add_modifier(Modifier::UNDERLINED);
    }

    let mut title = Vec::with_capacity(2);
    if article.image_url.is_some() {
        title.push(Span::styled(IMAGE_MARK, Style::default().fg(palette.link)));
    }
    title.push(Span::styled(article.title.as_str(), title_style));

    let mut meta = vec![Span::styled(article.source.as_str(), palette.dim())];
    if let Some(published) = article.published() {
        meta.push(Span::styled(
            format!(" \u{b7} {}", published.format("%b %-d")),
            palette.dim(),
        ));
    }

    Paragraph::new(vec![Line::from(title), Line::from(meta)]).render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news_state::FETCH_ERROR;
    use crate::test_utils::render_frame;
    use glance_protocol::FetchFailure;
    use glance_protocol::sample::sample_articles;

    fn render(state: &NewsState, width: u16, height: u16) -> (String, HitMap) {
        render_frame(width, height, |area, buf, hits| {
            render_news(state, &Palette::DARK, true, area, buf, hits);
        })
        .into_parts()
    }

    fn loaded(count: usize) -> NewsState {
        let mut state = NewsState::new();
        let request = state.mount();
        state.apply(request.generation(), 1, Ok(sample_articles(1, count)));
        state
    }

    #[test]
    fn first_visible_follows_cursor() {
        assert_eq!(first_visible(None, 3), 0);
        assert_eq!(first_visible(Some(2), 3), 0);
        assert_eq!(first_visible(Some(3), 3), 1);
        assert_eq!(first_visible(Some(9), 4), 6);
    }

    #[test]
    fn loading_text_shows_for_empty_list() {
        let mut state = NewsState::new();
        state.mount();

        let (content, hits) = render(&state, 60, 20);
        assert!(content.contains("Latest News"));
        assert!(content.contains(LOADING_TEXT));
        for category in NewsCategory::ALL {
            assert!(content.contains(category.label()));
            assert!(hits.contains(Target::Category(category)));
        }
    }

    #[test]
    fn headlines_render_with_meta_and_image_mark() {
        let (content, hits) = render(&loaded(2), 60, 20);

        assert!(content.contains("\u{25a3} Headline 1.1"));
        assert!(content.contains("Headline 1.2"));
        assert!(!content.contains("\u{25a3} Headline 1.2"));
        assert!(content.contains("Example Wire \u{b7} Jan 5"));
        assert!(hits.contains(Target::Article(0)));
        assert!(hits.contains(Target::Article(1)));
    }

    #[test]
    fn loading_more_keeps_list_visible() {
        let mut state = loaded(5);
        state.load_more();

        let (content, _) = render(&state, 60, 20);
        assert!(content.contains("Headline 1.1"));
        assert!(!content.contains(LOADING_TEXT));
    }

    #[test]
    fn error_shows_only_over_empty_list() {
        let mut state = NewsState::new();
        let request = state.mount();
        state.apply(request.generation(), 1, Err(FetchFailure::Transport));
        let (content, _) = render(&state, 60, 20);
        assert!(content.contains(FETCH_ERROR));

        let mut state = loaded(3);
        let request = state.load_more().unwrap();
        state.apply(request.generation(), 2, Err(FetchFailure::Transport));
        let (content, _) = render(&state, 60, 20);
        assert!(!content.contains(FETCH_ERROR));
        assert!(content.contains("Headline 1.1"));
    }

    #[test]
    fn list_scrolls_to_cursor() {
        let mut state = loaded(5);
        state.move_cursor(1);
        state.move_cursor(4);

        // 20 rows: 2 borders, 1 category row and a spacer leave room for 5
        // headlines, so shrink the frame to force scrolling.
        let (_, hits) = render(&state, 60, 13);
        assert!(hits.contains(Target::Article(4)));
        assert!(!hits.contains(Target::Article(0)));
    }
}
