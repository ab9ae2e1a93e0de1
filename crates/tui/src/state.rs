//! Application shell state.
//!
//! This module defines the state that outlives route changes: the current
//! route, the sidebar, the theme and the help overlay. Widget state lives in
//! the per-widget modules and is rebuilt on every navigation.

use glance_config::ThemeMode;
use glance_protocol::{Route, WidgetKind};

/// Header glyph of the theme toggle in dark mode.
pub const SUN: char = '\u{2600}'; // ☀
/// Header glyph of the theme toggle in light mode and before mount.
pub const MOON: char = '\u{263e}'; // ☾
/// Header glyph of the sidebar toggle while the sidebar is closed.
pub const MENU: char = '\u{2630}'; // ☰
/// Header glyph of the sidebar toggle while the sidebar is open.
pub const CLOSE: char = '\u{2715}'; // ✕

/// The application shell state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Current route.
    pub route: Route,
    /// Whether the sidebar is toggled open.
    pub sidebar_open: bool,
    /// Active theme.
    pub theme: ThemeMode,
    /// Whether the first frame has been drawn.
    pub mounted: bool,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// Index of the focused widget within the route's widgets.
    pub focus: usize,
    /// Sidebar entry under the keyboard cursor.
    pub sidebar_cursor: usize,
}

impl AppState {
    /// Creates the shell state for a start route and theme.
    ///
    /// # Examples
    ///
    /// ```
    /// use glance_config::ThemeMode;
    /// use glance_protocol::Route;
    /// use glance_tui::AppState;
    ///
    /// let state = AppState::new(Route::News, ThemeMode::Light);
    /// assert_eq!(state.sidebar_cursor, 2);
    /// assert!(!state.mounted);
    /// ```
    #[must_use]
    pub fn new(route: Route, theme: ThemeMode) -> Self {
        Self {
            route,
            theme,
            sidebar_cursor: route.index(),
            ..Self::default()
        }
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Toggles the sidebar.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
        self.sidebar_cursor = self.route.index();
    }

    /// Switches theme and returns the new one.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Moves to `route`, focusing its first widget.
    pub fn navigate(&mut self, route: Route) {
        self.route = route;
        self.focus = 0;
        self.sidebar_cursor = route.index();
    }

    /// Returns the focused widget.
    #[must_use]
    pub fn focused_widget(&self) -> Option<WidgetKind> {
        self.route.widgets().get(self.focus).copied()
    }

    /// Focuses `widget` if the route shows it.
    pub fn focus_widget(&mut self, widget: WidgetKind) {
        if let Some(index) = self.route.widgets().iter().position(|w| *w == widget) {
            self.focus = index;
        }
    }

    /// Moves focus to the next widget, wrapping around.
    pub fn focus_next(&mut self) {
        let count = self.route.widgets().len().max(1);
        self.focus = (self.focus + 1) % count;
    }

    /// Moves focus to the previous widget, wrapping around.
    pub fn focus_prev(&mut self) {
        let count = self.route.widgets().len().max(1);
        self.focus = (self.focus + count - 1) % count;
    }

    /// Moves the sidebar cursor, wrapping around.
    pub fn move_sidebar_cursor(&mut self, delta: isize) {
        let count = Route::ALL.len() as isize;
        self.sidebar_cursor = (self.sidebar_cursor as isize + delta).rem_euclid(count) as usize;
    }

    /// Returns the route under the sidebar cursor.
    #[must_use]
    pub fn sidebar_route(&self) -> Route {
        Route::ALL
            .get(self.sidebar_cursor)
            .copied()
            .unwrap_or_default()
    }

    /// Returns the glyph of the theme toggle.
    ///
    /// Before the first frame the theme is not known to be applied yet, so
    /// the toggle shows the fixed moon.
    #[must_use]
    pub fn theme_glyph(&self) -> char {
        if self.mounted && self.theme.is_dark() {
            SUN
        } else {
            MOON
        }
    }

    /// Returns the glyph of the sidebar toggle.
    #[must_use]
    pub fn sidebar_glyph(&self) -> char {
        if self.sidebar_open { CLOSE } else { MENU }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_has_correct_defaults() {
        let state = AppState::new(Route::Dashboard, ThemeMode::Dark);

        assert_eq!(state.route, Route::Dashboard);
        assert!(!state.sidebar_open);
        assert!(!state.help_visible);
        assert_eq!(state.focus, 0);
        assert_eq!(state.focused_widget(), Some(WidgetKind::Weather));
    }

    #[test]
    fn theme_glyph_is_moon_until_mounted() {
        let mut state = AppState::new(Route::Dashboard, ThemeMode::Dark);
        assert_eq!(state.theme_glyph(), MOON);

        state.mounted = true;
        assert_eq!(state.theme_glyph(), SUN);

        assert_eq!(state.toggle_theme(), ThemeMode::Light);
        assert_eq!(state.theme_glyph(), MOON);
    }

    #[test]
    fn sidebar_glyph_follows_toggle() {
        let mut state = AppState::default();
        assert_eq!(state.sidebar_glyph(), MENU);
        state.toggle_sidebar();
        assert_eq!(state.sidebar_glyph(), CLOSE);
    }

    #[test]
    fn focus_wraps_over_route_widgets() {
        let mut state = AppState::default();
        state.focus_prev();
        assert_eq!(state.focused_widget(), Some(WidgetKind::Finance));
        state.focus_next();
        assert_eq!(state.focused_widget(), Some(WidgetKind::Weather));

        state.navigate(Route::News);
        state.focus_next();
        assert_eq!(state.focused_widget(), Some(WidgetKind::News));
    }

    #[test]
    fn focus_widget_ignores_unmounted_widgets() {
        let mut state = AppState::new(Route::Finance, ThemeMode::Dark);
        state.focus_widget(WidgetKind::News);
        assert_eq!(state.focused_widget(), Some(WidgetKind::Finance));

        state.navigate(Route::Dashboard);
        state.focus_widget(WidgetKind::News);
        assert_eq!(state.focus, 1);
    }

    #[test]
    fn navigate_resets_focus_and_cursor() {
        let mut state = AppState::default();
        state.focus = 2;
        state.navigate(Route::Weather);

        assert_eq!(state.focus, 0);
        assert_eq!(state.sidebar_route(), Route::Weather);
    }

    #[test]
    fn sidebar_cursor_wraps() {
        let mut state = AppState::default();
        state.move_sidebar_cursor(-1);
        assert_eq!(state.sidebar_route(), Route::Finance);
        state.move_sidebar_cursor(1);
        assert_eq!(state.sidebar_route(), Route::Dashboard);
    }

    #[test]
    fn toggle_help_visibility() {
        let mut state = AppState::default();
        state.toggle_help();
        assert!(state.help_visible);
        state.toggle_help();
        assert!(!state.help_visible);
    }
}
