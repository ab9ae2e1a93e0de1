//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle: event handling, widget state updates, fetch
//! dispatch and rendering.

use std::path::PathBuf;
use std::time::Instant;

use glance_config::{Preferences, ThemeMode};
use glance_protocol::{FetchOutcome, FetchRequest, Message, Route, WidgetKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Paragraph, Widget, Wrap},
};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

use crate::{
    AppState,
    event::{event_to_message, key_to_search_message, poll_event},
    finance_state::FinanceState,
    hitmap::{HitMap, Target},
    layout::{HEADER_HEIGHT, MIN_HEIGHT, MIN_WIDTH, SIDEBAR_WIDTH, grid_cells, grid_columns, is_narrow},
    news_state::NewsState,
    search::SearchBox,
    terminal::AppTerminal,
    theme::{Palette, pulse_color},
    weather_state::WeatherState,
    widgets::{
        render_article_detail, render_finance, render_header, render_help_overlay,
        render_image_overlay, render_news, render_sidebar, render_weather,
    },
};

/// The main application struct.
///
/// Owns the shell state, the state of all three widgets and both ends of the
/// fetch channels. Widgets not shown on the current route are kept in their
/// reset state.
#[derive(Debug)]
pub struct App {
    state: AppState,
    weather: WeatherState,
    news: NewsState,
    finance: FinanceState,
    requests: UnboundedSender<FetchRequest>,
    outcomes: UnboundedReceiver<FetchOutcome>,
    /// Click regions of the last frame.
    hits: HitMap,
    /// Start of the finance frame pulse.
    started: Instant,
    /// Where the theme is persisted when toggled.
    preferences_path: Option<PathBuf>,
    should_quit: bool,
    /// Last known terminal area; decides whether the sidebar is an overlay.
    last_area: Rect,
}

impl App {
    /// Creates the application on `route` and issues its mount fetches.
    ///
    /// Requests are sent into `requests`; answers are read from `outcomes`
    /// between frames.
    ///
    /// # Examples
    ///
    /// ```
    /// use glance_protocol::{FetchRequest, Route};
    /// use glance_tui::App;
    /// use tokio::sync::mpsc;
    ///
    /// let (request_tx, mut request_rx) = mpsc::unbounded_channel();
    /// let (_outcome_tx, outcome_rx) = mpsc::unbounded_channel();
    /// let app = App::new(Route::Finance, request_tx, outcome_rx);
    ///
    /// assert!(matches!(request_rx.try_recv(), Ok(FetchRequest::Intraday { .. })));
    /// ```
    #[must_use]
    pub fn new(
        route: Route,
        requests: UnboundedSender<FetchRequest>,
        outcomes: UnboundedReceiver<FetchOutcome>,
    ) -> Self {
        let mut app = Self {
            state: AppState::new(route, ThemeMode::default()),
            weather: WeatherState::new(),
            news: NewsState::new(),
            finance: FinanceState::new(),
            requests,
            outcomes,
            hits: HitMap::new(),
            started: Instant::now(),
            preferences_path: None,
            should_quit: false,
            last_area: Rect::default(),
        };
        app.mount();
        app
    }

    /// Sets the initial theme.
    #[must_use]
    pub fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.state.theme = theme;
        self
    }

    /// Persists theme changes to `path`.
    #[must_use]
    pub fn with_preferences_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.preferences_path = Some(path.into());
        self
    }

    /// Returns a reference to the shell state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns the weather widget state.
    #[must_use]
    pub fn weather(&self) -> &WeatherState {
        &self.weather
    }

    /// Returns the news widget state.
    #[must_use]
    pub fn news(&self) -> &NewsState {
        &self.news
    }

    /// Returns the finance widget state.
    #[must_use]
    pub fn finance(&self) -> &FinanceState {
        &self.finance
    }

    /// Rebuilds every widget and issues the mount fetches of the route.
    fn mount(&mut self) {
        self.weather.reset();
        self.news.reset();
        self.finance.reset();
        for widget in self.state.route.widgets() {
            match widget {
                WidgetKind::Weather => {}
                WidgetKind::News => {
                    let request = self.news.mount();
                    self.send(request);
                }
                WidgetKind::Finance => {
                    let request = self.finance.mount();
                    self.send(request);
                }
            }
        }
    }

    fn send(&self, request: FetchRequest) {
        debug!(widget = ?request.widget(), generation = request.generation(), "requesting fetch");
        if self.requests.send(request).is_err() {
            warn!("fetch dispatcher is gone, request dropped");
        }
    }

    fn send_some(&self, request: Option<FetchRequest>) {
        if let Some(request) = request {
            self.send(request);
        }
    }

    fn is_mounted(&self, widget: WidgetKind) -> bool {
        self.state.route.widgets().contains(&widget)
    }

    /// Applies a fetch outcome to its widget.
    ///
    /// Outcomes for widgets that are not on the current route, or for a
    /// request that is no longer the latest, are dropped.
    pub fn apply(&mut self, outcome: FetchOutcome) {
        let widget = outcome.widget();
        if !self.is_mounted(widget) {
            debug!(?widget, "dropping outcome for unmounted widget");
            return;
        }
        match outcome {
            FetchOutcome::Forecast {
                generation,
                city,
                result,
            } => {
                self.weather.apply(generation, city, result);
            }
            FetchOutcome::Headlines {
                generation,
                page,
                result,
                ..
            } => {
                self.news.apply(generation, page, result);
            }
            FetchOutcome::Intraday {
                generation, result, ..
            } => {
                self.finance.apply(generation, result);
            }
        }
    }

    /// Applies every outcome that has arrived since the last call.
    pub fn drain_outcomes(&mut self) {
        while let Ok(outcome) = self.outcomes.try_recv() {
            self.apply(outcome);
        }
    }

    /// Feeds the load-more observer with the visibility of the last
    /// headline in the frame just drawn.
    fn observe_news_list(&mut self) {
        if !self.is_mounted(WidgetKind::News) {
            return;
        }
        let visible = self
            .news
            .observer
            .target()
            .is_some_and(|last| self.hits.contains(Target::Article(last)));
        let request = self.news.observe_last(visible);
        self.send_some(request);
    }

    /// Returns whether the sidebar is drawn as an overlay.
    fn sidebar_overlay(&self) -> bool {
        self.state.sidebar_open && is_narrow(self.last_area.width)
    }

    fn is_editing(&self) -> bool {
        self.weather.search.is_editing() || self.finance.search.is_editing()
    }

    fn editing_search(&mut self) -> Option<&mut SearchBox> {
        if self.weather.search.is_editing() {
            Some(&mut self.weather.search)
        } else if self.finance.search.is_editing() {
            Some(&mut self.finance.search)
        } else {
            None
        }
    }

    fn blur_search(&mut self) {
        self.weather.search.cancel();
        self.finance.search.cancel();
    }

    /// Updates the application state based on a message.
    ///
    /// When the help overlay is visible, every message except `Quit`
    /// dismisses it instead of performing its normal action.
    ///
    /// # Arguments
    ///
    /// * `msg` - The message to process.
    pub fn update(&mut self, msg: Message) {
        if self.state.help_visible {
            match msg {
                Message::Quit => self.should_quit = true,
                _ => self.state.help_visible = false,
            }
            return;
        }

        match msg {
            Message::Quit => {
                self.should_quit = true;
            }
            Message::ToggleHelp => {
                self.state.toggle_help();
            }
            Message::ToggleSidebar => {
                self.state.toggle_sidebar();
            }
            Message::ToggleTheme => {
                self.toggle_theme();
            }
            Message::GoTo { route } => {
                self.navigate(route);
            }
            Message::FocusNext => {
                self.blur_search();
                self.state.focus_next();
            }
            Message::FocusPrev => {
                self.blur_search();
                self.state.focus_prev();
            }
            Message::NavigateLeft => self.navigate_horizontal(-1),
            Message::NavigateRight => self.navigate_horizontal(1),
            Message::NavigateUp => self.navigate_vertical(-1),
            Message::NavigateDown => self.navigate_vertical(1),
            Message::Select => self.select(),
            Message::Refresh => self.refresh(),
            Message::OpenLink => self.open_link(),
            Message::StartSearch => self.start_search(),
            Message::SearchInput { ch } => {
                if let Some(search) = self.editing_search() {
                    search.input(ch);
                }
            }
            Message::SearchBackspace => {
                if let Some(search) = self.editing_search() {
                    search.backspace();
                }
            }
            Message::SearchSubmit => self.submit_search(),
            Message::SearchCancel => {
                if let Some(search) = self.editing_search() {
                    search.cancel();
                }
            }
            Message::Escape | Message::Back => self.escape(),
            Message::ClickAt { column, row } => {
                self.handle_click(column, row);
            }
        }
    }

    fn navigate(&mut self, route: Route) {
        debug!(%route, "navigating");
        self.state.navigate(route);
        self.mount();
    }

    fn toggle_theme(&mut self) {
        let theme = self.state.toggle_theme();
        let Some(path) = &self.preferences_path else {
            return;
        };
        if let Err(error) = (Preferences { theme }).save_to(path) {
            warn!(%error, path = %path.display(), "failed to persist theme");
        }
    }

    fn navigate_horizontal(&mut self, delta: isize) {
        if self.sidebar_overlay() || self.news.has_overlay() {
            return;
        }
        match self.state.focused_widget() {
            Some(WidgetKind::Weather) => self.weather.move_cursor(delta),
            Some(WidgetKind::Finance) => self.finance.move_cursor(delta),
            Some(WidgetKind::News) => {
                let request = self.news.cycle_category(delta);
                self.send_some(request);
            }
            None => {}
        }
    }

    fn navigate_vertical(&mut self, delta: isize) {
        if self.sidebar_overlay() {
            self.state.move_sidebar_cursor(delta);
        } else if !self.news.has_overlay()
            && self.state.focused_widget() == Some(WidgetKind::News)
        {
            self.news.move_cursor(delta);
        }
    }

    fn select(&mut self) {
        if self.sidebar_overlay() {
            let route = self.state.sidebar_route();
            self.state.sidebar_open = false;
            self.navigate(route);
            return;
        }
        if self.news.has_overlay() {
            if !self.news.image_open {
                self.news.open_image();
            }
            return;
        }
        match self.state.focused_widget() {
            Some(WidgetKind::Weather) => {
                let request = self.weather.select_preset(self.weather.preset_cursor);
                self.send_some(request);
            }
            Some(WidgetKind::Finance) => {
                let request = self.finance.select_preset(self.finance.preset_cursor);
                self.send_some(request);
            }
            Some(WidgetKind::News) => {
                if let Some(index) = self.news.cursor {
                    self.news.open_detail(index);
                }
            }
            None => {}
        }
    }

    fn refresh(&mut self) {
        match self.state.focused_widget() {
            Some(WidgetKind::Weather) => {
                let request = self.weather.refresh();
                self.send_some(request);
            }
            Some(WidgetKind::News) => {
                let request = self.news.refresh();
                self.send(request);
            }
            Some(WidgetKind::Finance) => {
                let request = self.finance.refresh();
                self.send(request);
            }
            None => {}
        }
    }

    fn open_link(&self) {
        let Some(url) = self.news.link_target() else {
            return;
        };
        debug!(url, "opening link");
        if let Err(error) = open::that_detached(url) {
            warn!(%error, url, "failed to open link");
        }
    }

    fn start_search(&mut self) {
        let focused = self.state.focused_widget();
        self.blur_search();
        match focused {
            Some(WidgetKind::Weather) => self.weather.search.start_edit(),
            Some(WidgetKind::Finance) => self.finance.search.start_edit(),
            Some(WidgetKind::News) | None => {}
        }
    }

    fn submit_search(&mut self) {
        let request = if self.weather.search.is_editing() {
            self.weather.submit_search()
        } else if self.finance.search.is_editing() {
            self.finance.submit_search()
        } else {
            None
        };
        self.send_some(request);
    }

    /// Closes the topmost layer: image, article detail, sidebar overlay,
    /// search box, then the headline cursor.
    fn escape(&mut self) {
        if self.news.has_overlay() {
            self.news.escape();
        } else if self.sidebar_overlay() {
            self.state.toggle_sidebar();
        } else if let Some(search) = self.editing_search() {
            search.cancel();
        } else {
            self.news.escape();
        }
    }

    /// Handles a mouse click against the regions of the last frame.
    fn handle_click(&mut self, column: u16, row: u16) {
        let target = self.hits.target_at(column, row);
        if !matches!(target, Some(Target::Search(_) | Target::SearchSubmit(_))) {
            self.blur_search();
        }
        let Some(target) = target else {
            return;
        };
        debug!(?target, column, row, "click");

        match target {
            Target::ToggleSidebar => self.state.toggle_sidebar(),
            Target::ToggleTheme => self.toggle_theme(),
            Target::Route(route) => {
                if self.sidebar_overlay() {
                    self.state.sidebar_open = false;
                }
                self.navigate(route);
            }
            Target::Widget(widget) => self.state.focus_widget(widget),
            Target::Search(widget) => {
                self.state.focus_widget(widget);
                self.blur_search();
                match widget {
                    WidgetKind::Weather => self.weather.search.start_edit(),
                    WidgetKind::Finance => self.finance.search.start_edit(),
                    WidgetKind::News => {}
                }
            }
            Target::SearchSubmit(widget) => {
                self.state.focus_widget(widget);
                let request = match widget {
                    WidgetKind::Weather => self.weather.submit_search(),
                    WidgetKind::Finance => self.finance.submit_search(),
                    WidgetKind::News => None,
                };
                self.send_some(request);
            }
            Target::Preset(widget, index) => {
                self.state.focus_widget(widget);
                let request = match widget {
                    WidgetKind::Weather => self.weather.select_preset(index),
                    WidgetKind::Finance => self.finance.select_preset(index),
                    WidgetKind::News => None,
                };
                self.send_some(request);
            }
            Target::Category(category) => {
                self.state.focus_widget(WidgetKind::News);
                let request = self.news.select_category(category);
                self.send_some(request);
            }
            Target::Article(index) => {
                self.state.focus_widget(WidgetKind::News);
                self.news.open_detail(index);
            }
            Target::ArticleImage => {
                self.news.open_image();
            }
            Target::ReadMore => self.open_link(),
            Target::CloseOverlay => {
                self.news.escape();
            }
            Target::Backdrop => {}
        }
    }

    /// Renders the application UI to the given frame.
    ///
    /// Below the minimum terminal size only a "terminal too small" message
    /// is shown. Otherwise the header sits on top; on wide terminals the
    /// sidebar is a static column, on narrow ones an overlay.
    ///
    /// # Arguments
    ///
    /// * `frame` - The frame to render into.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;
        self.hits.clear();

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.render_terminal_too_small(frame, area);
            return;
        }

        let palette = Palette::for_mode(self.state.theme);
        frame.render_widget(Block::default().style(palette.base()), area);
        let buf = frame.buffer_mut();

        let [header_area, body] =
            Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(area);
        render_header(&self.state, &palette, header_area, buf, &mut self.hits);

        let narrow = is_narrow(area.width);
        let content = if narrow {
            body
        } else {
            let [sidebar_area, content] =
                Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                    .areas(body);
            render_sidebar(self.state.route, None, false, &palette, sidebar_area, buf, &mut self.hits);
            content
        };

        let grid_area = match self.state.route.heading() {
            Some(heading) => {
                let [heading_area, rest] =
                    Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(content);
                Paragraph::new(Span::styled(
                    heading,
                    Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center)
                .render(heading_area, buf);
                rest
            }
            None => content,
        };

        let widgets = self.state.route.widgets();
        let focused = self.state.focused_widget();
        let pulse = pulse_color(self.started.elapsed());
        let cells = grid_cells(grid_area, widgets.len(), grid_columns(area.width));
        for (widget, cell) in widgets.iter().copied().zip(cells) {
            self.hits.push(cell, Target::Widget(widget));
            let is_focused = focused == Some(widget);
            match widget {
                WidgetKind::Weather => {
                    render_weather(&self.weather, &palette, is_focused, cell, buf, &mut self.hits);
                }
                WidgetKind::News => {
                    render_news(&self.news, &palette, is_focused, cell, buf, &mut self.hits);
                }
                WidgetKind::Finance => render_finance(
                    &self.finance,
                    &palette,
                    is_focused,
                    pulse,
                    cell,
                    buf,
                    &mut self.hits,
                ),
            }
        }

        if narrow && self.state.sidebar_open {
            let sidebar_area = Rect {
                width: SIDEBAR_WIDTH.min(body.width),
                ..body
            };
            render_sidebar(
                self.state.route,
                Some(self.state.sidebar_cursor),
                true,
                &palette,
                sidebar_area,
                buf,
                &mut self.hits,
            );
        }

        if let Some(article) = self.news.detail_article() {
            render_article_detail(article, &palette, area, buf, &mut self.hits);
            if let Some(url) = article.image_url.as_deref().filter(|_| self.news.image_open) {
                render_image_overlay(url, &palette, area, buf, &mut self.hits);
            }
        }

        if self.state.help_visible {
            render_help_overlay(area, buf, &mut self.hits);
        }
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(&self, frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });

        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Runs the main application loop.
    ///
    /// Each turn draws a frame, feeds the load-more observer, applies the
    /// fetch outcomes that arrived, then waits up to 100ms for input. The
    /// function returns when the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use glance_protocol::Route;
    /// use glance_tui::{App, terminal};
    /// use tokio::sync::mpsc;
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let (request_tx, _request_rx) = mpsc::unbounded_channel();
    ///     let (_outcome_tx, outcome_rx) = mpsc::unbounded_channel();
    ///
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(Route::Dashboard, request_tx, outcome_rx);
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        use crossterm::event::Event;

        loop {
            terminal.draw(|frame| self.view(frame))?;
            self.state.mounted = true;
            self.observe_news_list();
            self.drain_outcomes();

            if let Some(event) = poll_event()? {
                let msg = match event {
                    Event::Key(key) if self.is_editing() => key_to_search_message(key),
                    _ => event_to_message(&event),
                };
                if let Some(msg) = msg {
                    self.update(msg);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::screen_text;
    use glance_protocol::sample::{sample_articles, sample_forecast, sample_price_points};
    use glance_protocol::{FetchFailure, NewsCategory};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use tempfile::TempDir;
    use tokio::sync::mpsc;

    struct Harness {
        app: App,
        requests: UnboundedReceiver<FetchRequest>,
        outcomes: UnboundedSender<FetchOutcome>,
    }

    impl Harness {
        fn new(route: Route) -> Self {
            let (request_tx, requests) = mpsc::unbounded_channel();
            let (outcomes, outcome_rx) = mpsc::unbounded_channel();
            Self {
                app: App::new(route, request_tx, outcome_rx),
                requests,
                outcomes,
            }
        }

        fn sent(&mut self) -> Vec<FetchRequest> {
            let mut sent = Vec::new();
            while let Ok(request) = self.requests.try_recv() {
                sent.push(request);
            }
            sent
        }

        fn draw(&mut self, width: u16, height: u16) -> String {
            let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
            terminal.draw(|frame| self.app.view(frame)).unwrap();
            screen_text(terminal.backend().buffer())
        }

        fn click(&mut self, target: Target) {
            let area = self.app.hits.area_of(target).unwrap();
            self.app.update(Message::ClickAt {
                column: area.x,
                row: area.y,
            });
        }

        /// Answers the latest headline request with `count` articles.
        fn answer_headlines(&mut self, count: usize) {
            let Some(FetchRequest::Headlines {
                generation,
                category,
                page,
            }) = self.sent().pop()
            else {
                panic!("no headline request pending");
            };
            self.app.apply(FetchOutcome::Headlines {
                generation,
                category,
                page,
                result: Ok(sample_articles(page, count)),
            });
        }
    }

    #[test]
    fn dashboard_mount_fetches_news_and_finance() {
        let mut h = Harness::new(Route::Dashboard);

        let sent = h.sent();
        assert_eq!(sent.len(), 2);
        assert!(matches!(
            sent[0],
            FetchRequest::Headlines {
                category: NewsCategory::General,
                page: 1,
                ..
            }
        ));
        assert!(matches!(&sent[1], FetchRequest::Intraday { symbol, .. } if symbol == "AAPL"));
        assert!(!h.app.should_quit);
    }

    #[test]
    fn weather_route_fetches_nothing_on_mount() {
        let mut h = Harness::new(Route::Weather);
        assert!(h.sent().is_empty());
    }

    #[test]
    fn app_quit_message_sets_should_quit() {
        let mut h = Harness::new(Route::Dashboard);
        h.app.update(Message::Quit);
        assert!(h.app.should_quit);
    }

    #[test]
    fn app_toggle_help_shows_and_hides() {
        let mut h = Harness::new(Route::Dashboard);

        h.app.update(Message::ToggleHelp);
        assert!(h.app.state.help_visible);

        h.app.update(Message::ToggleHelp);
        assert!(!h.app.state.help_visible);
    }

    #[test]
    fn app_help_blocks_other_actions() {
        let mut h = Harness::new(Route::Weather);

        h.app.update(Message::ToggleHelp);
        h.app.update(Message::NavigateRight);

        assert!(!h.app.state.help_visible);
        assert_eq!(h.app.weather.preset_cursor, 0);

        h.app.update(Message::ToggleHelp);
        h.app.update(Message::Escape);
        assert!(!h.app.state.help_visible);
        assert!(!h.app.should_quit);
    }

    #[test]
    fn app_quit_works_with_help_visible() {
        let mut h = Harness::new(Route::Dashboard);
        h.app.update(Message::ToggleHelp);
        h.app.update(Message::Quit);
        assert!(h.app.should_quit);
    }

    #[test]
    fn outcomes_arrive_through_channel() {
        let mut h = Harness::new(Route::Finance);
        let request = h.sent().remove(0);

        h.outcomes
            .send(FetchOutcome::Intraday {
                generation: request.generation(),
                symbol: "AAPL".into(),
                result: Ok(sample_price_points()),
            })
            .unwrap();
        h.app.drain_outcomes();

        assert_eq!(h.app.finance.points.len(), 10);
        assert!(!h.app.finance.loading);
    }

    #[test]
    fn stale_outcome_is_ignored() {
        let mut h = Harness::new(Route::Finance);
        let mount = h.sent().remove(0);
        h.app.update(Message::NavigateRight);
        h.app.update(Message::Select);
        assert_eq!(h.app.finance.symbol, "GOOGL");

        h.app.apply(FetchOutcome::Intraday {
            generation: mount.generation(),
            symbol: "AAPL".into(),
            result: Ok(sample_price_points()),
        });

        assert!(h.app.finance.points.is_empty());
        assert!(h.app.finance.loading);
    }

    #[test]
    fn outcome_for_unmounted_widget_is_dropped() {
        let mut h = Harness::new(Route::Weather);
        h.app.apply(FetchOutcome::Headlines {
            generation: h.app.news.generation(),
            category: NewsCategory::General,
            page: 1,
            result: Ok(sample_articles(1, 5)),
        });
        assert!(h.app.news.articles.is_empty());
    }

    #[test]
    fn navigation_remounts_widgets() {
        let mut h = Harness::new(Route::Dashboard);
        let sent = h.sent();
        h.app.apply(FetchOutcome::Intraday {
            generation: sent[1].generation(),
            symbol: "AAPL".into(),
            result: Ok(sample_price_points()),
        });
        assert!(!h.app.finance.points.is_empty());

        h.app.update(Message::GoTo {
            route: Route::Finance,
        });

        assert_eq!(h.app.state.route, Route::Finance);
        assert!(h.app.finance.points.is_empty());
        let sent = h.sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].generation() > 1);
    }

    #[test]
    fn weather_preset_keyboard_flow() {
        let mut h = Harness::new(Route::Weather);

        h.app.update(Message::NavigateRight);
        h.app.update(Message::Select);

        let sent = h.sent();
        assert!(matches!(&sent[..], [FetchRequest::Forecast { city, .. }] if city == "Lucknow"));

        h.app.apply(FetchOutcome::Forecast {
            generation: sent[0].generation(),
            city: "Lucknow".into(),
            result: Ok(sample_forecast()),
        });
        assert_eq!(h.app.weather.selected_city.as_deref(), Some("Lucknow"));
        assert_eq!(h.app.weather.highlighted_preset(), Some(1));
    }

    #[test]
    fn weather_invalid_city_message() {
        let mut h = Harness::new(Route::Weather);
        h.app.update(Message::StartSearch);
        for ch in "Atlantis".chars() {
            h.app.update(Message::SearchInput { ch });
        }
        h.app.update(Message::SearchSubmit);
        let request = h.sent().remove(0);

        h.app.apply(FetchOutcome::Forecast {
            generation: request.generation(),
            city: "Atlantis".into(),
            result: Err(FetchFailure::Missing),
        });

        let content = h.draw(80, 30);
        assert!(content.contains("Invalid city: Atlantis. Please try again."));
    }

    #[test]
    fn finance_search_upper_cases_and_submits() {
        let mut h = Harness::new(Route::Finance);
        h.sent();

        h.app.update(Message::StartSearch);
        assert!(h.app.is_editing());
        for ch in "xyz".chars() {
            h.app.update(Message::SearchInput { ch });
        }
        h.app.update(Message::SearchSubmit);

        assert_eq!(h.app.finance.symbol, "XYZ");
        assert!(!h.app.is_editing());
        assert!(matches!(&h.sent()[..], [FetchRequest::Intraday { symbol, .. }] if symbol == "XYZ"));
    }

    #[test]
    fn blank_search_does_nothing() {
        let mut h = Harness::new(Route::Finance);
        h.sent();

        h.app.update(Message::StartSearch);
        h.app.update(Message::SearchInput { ch: ' ' });
        h.app.update(Message::SearchSubmit);

        assert!(h.sent().is_empty());
        assert_eq!(h.app.finance.symbol, "AAPL");
    }

    #[test]
    fn escape_leaves_search_box() {
        let mut h = Harness::new(Route::Weather);
        h.app.update(Message::StartSearch);
        h.app.update(Message::Escape);
        assert!(!h.app.is_editing());
    }

    #[test]
    fn news_overlays_stack_and_unwind() {
        let mut h = Harness::new(Route::News);
        h.answer_headlines(5);

        h.app.update(Message::NavigateDown);
        h.app.update(Message::Select);
        assert_eq!(h.app.news.detail, Some(0));

        h.app.update(Message::Select);
        assert!(h.app.news.image_open);

        h.app.update(Message::Escape);
        assert!(!h.app.news.image_open);
        assert_eq!(h.app.news.detail, Some(0));

        h.app.update(Message::Back);
        assert_eq!(h.app.news.detail, None);
        assert_eq!(h.app.news.cursor, Some(0));

        h.app.update(Message::Escape);
        assert_eq!(h.app.news.cursor, None);
        assert!(!h.app.should_quit);
    }

    #[test]
    fn category_change_empties_list_first() {
        let mut h = Harness::new(Route::News);
        h.answer_headlines(5);

        h.app.update(Message::NavigateRight);

        assert!(h.app.news.articles.is_empty());
        assert_eq!(h.app.news.category, NewsCategory::Business);
        assert!(matches!(
            h.sent()[..],
            [FetchRequest::Headlines {
                category: NewsCategory::Business,
                page: 1,
                ..
            }]
        ));
    }

    #[test]
    fn reselecting_active_category_sends_nothing() {
        let mut h = Harness::new(Route::News);
        h.answer_headlines(5);
        h.draw(80, 30);

        h.click(Target::Category(NewsCategory::General));

        assert!(h.sent().is_empty());
        assert_eq!(h.app.news.articles.len(), 5);
    }

    #[test]
    fn reselecting_active_symbol_sends_nothing() {
        let mut h = Harness::new(Route::Finance);
        h.sent();
        h.draw(80, 30);

        h.click(Target::Preset(WidgetKind::Finance, 0));
        assert!(h.sent().is_empty());

        h.click(Target::Preset(WidgetKind::Finance, 1));
        assert!(matches!(&h.sent()[..], [FetchRequest::Intraday { symbol, .. }] if symbol == "GOOGL"));
    }

    #[test]
    fn last_headline_in_view_loads_next_page_once() {
        let mut h = Harness::new(Route::News);
        h.answer_headlines(2);

        h.draw(80, 30);
        h.app.observe_news_list();
        let sent = h.sent();
        assert!(matches!(sent[..], [FetchRequest::Headlines { page: 2, .. }]));

        // Still in view and still loading: no second request.
        h.draw(80, 30);
        h.app.observe_news_list();
        assert!(h.sent().is_empty());
    }

    #[test]
    fn appended_page_moves_the_observer() {
        let mut h = Harness::new(Route::News);
        h.answer_headlines(2);
        h.draw(80, 30);
        h.app.observe_news_list();
        let FetchRequest::Headlines { generation, .. } = h.sent().remove(0) else {
            panic!("expected a headline request");
        };

        h.app.apply(FetchOutcome::Headlines {
            generation,
            category: NewsCategory::General,
            page: 2,
            result: Ok(sample_articles(2, 2)),
        });

        assert_eq!(h.app.news.articles.len(), 4);
        assert_eq!(h.app.news.observer.target(), Some(3));
    }

    #[test]
    fn click_preset_fetches_city() {
        let mut h = Harness::new(Route::Weather);
        h.draw(80, 30);

        h.click(Target::Preset(WidgetKind::Weather, 2));

        assert!(matches!(&h.sent()[..], [FetchRequest::Forecast { city, .. }] if city == "Kolkata"));
    }

    #[test]
    fn click_sidebar_route_navigates() {
        let mut h = Harness::new(Route::Dashboard);
        h.sent();
        let content = h.draw(160, 40);
        assert!(content.contains("Navigation"));

        h.click(Target::Route(Route::News));

        assert_eq!(h.app.state.route, Route::News);
        assert_eq!(h.sent().len(), 1);
    }

    #[test]
    fn click_article_opens_detail_and_close_button_closes_it() {
        let mut h = Harness::new(Route::News);
        h.answer_headlines(3);
        h.draw(80, 30);

        h.click(Target::Article(1));
        assert_eq!(h.app.news.detail, Some(1));

        let content = h.draw(80, 30);
        assert!(content.contains("Read More"));
        h.click(Target::CloseOverlay);
        assert_eq!(h.app.news.detail, None);
    }

    #[test]
    fn click_image_then_close_returns_to_detail() {
        let mut h = Harness::new(Route::News);
        h.answer_headlines(3);
        h.draw(80, 30);
        h.click(Target::Article(0));
        h.draw(80, 30);

        h.click(Target::ArticleImage);
        assert!(h.app.news.image_open);

        h.draw(80, 30);
        h.click(Target::CloseOverlay);
        assert!(!h.app.news.image_open);
        assert_eq!(h.app.news.detail, Some(0));
    }

    #[test]
    fn click_outside_search_box_blurs_it() {
        let mut h = Harness::new(Route::Weather);
        h.draw(80, 30);
        h.click(Target::Search(WidgetKind::Weather));
        assert!(h.app.is_editing());

        h.click(Target::ToggleSidebar);
        assert!(!h.app.is_editing());
    }

    #[test]
    fn narrow_sidebar_is_an_overlay() {
        let mut h = Harness::new(Route::Dashboard);
        let content = h.draw(80, 30);
        assert!(!content.contains("Navigation"));

        h.app.update(Message::ToggleSidebar);
        let content = h.draw(80, 30);
        assert!(content.contains("Navigation"));

        h.app.update(Message::NavigateDown);
        h.app.update(Message::Select);
        assert_eq!(h.app.state.route, Route::Weather);
        assert!(!h.app.state.sidebar_open);
    }

    #[test]
    fn escape_closes_sidebar_overlay() {
        let mut h = Harness::new(Route::Dashboard);
        h.draw(80, 30);
        h.app.update(Message::ToggleSidebar);
        h.app.update(Message::Escape);
        assert!(!h.app.state.sidebar_open);
    }

    #[test]
    fn wide_dashboard_shows_every_widget() {
        let mut h = Harness::new(Route::Dashboard);
        let content = h.draw(160, 40);

        assert!(content.contains("5-Day Weather Forecast"));
        assert!(content.contains("Latest News"));
        assert!(content.contains("Finance: AAPL"));
        assert!(content.contains("Navigation"));
    }

    #[test]
    fn route_heading_is_shown() {
        let mut h = Harness::new(Route::News);
        let content = h.draw(80, 30);
        assert!(content.contains("News Dashboard"));
        assert!(content.contains("Latest News"));
        assert!(!content.contains("5-Day Weather Forecast"));
    }

    #[test]
    fn app_view_shows_too_small_message() {
        let mut h = Harness::new(Route::Dashboard);
        for (width, height) in [(80, 10), (40, 30)] {
            let content = h.draw(width, height);
            assert!(
                content.contains("Terminal too small"),
                "Buffer should contain 'Terminal too small' message at {width}x{height}"
            );
        }
        assert!(h.app.hits.is_empty());
    }

    #[test]
    fn help_overlay_renders_above_dashboard() {
        let mut h = Harness::new(Route::Dashboard);
        h.app.update(Message::ToggleHelp);
        let content = h.draw(100, 40);
        assert!(content.contains("Press any key to close"));
    }

    #[test]
    fn toggle_theme_persists_preference() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("glance").join("preferences.json");
        let (request_tx, _requests) = mpsc::unbounded_channel();
        let (_outcomes, outcome_rx) = mpsc::unbounded_channel();
        let mut app = App::new(Route::Weather, request_tx, outcome_rx)
            .with_theme(ThemeMode::Dark)
            .with_preferences_path(&path);

        app.update(Message::ToggleTheme);

        assert_eq!(app.state.theme, ThemeMode::Light);
        let saved = Preferences::load_from(&path).unwrap();
        assert_eq!(saved, Some(Preferences { theme: ThemeMode::Light }));
    }

    #[test]
    fn refresh_reissues_focused_widget_fetch() {
        let mut h = Harness::new(Route::Dashboard);
        h.sent();

        h.app.update(Message::FocusNext);
        assert_eq!(h.app.state.focused_widget(), Some(WidgetKind::News));
        h.app.update(Message::Refresh);

        assert!(matches!(h.sent()[..], [FetchRequest::Headlines { page: 1, .. }]));
    }
}
