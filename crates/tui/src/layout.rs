//! Centralized layout measurements for the TUI.
//!
//! This module defines shared constants for layout dimensions used across
//! multiple rendering components, plus the grid and popup geometry helpers
//! built on them.

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the header bar in rows.
///
/// The header holds the sidebar toggle, the title and the theme toggle.
pub const HEADER_HEIGHT: u16 = 3;

/// Width of the navigation sidebar in columns.
pub const SIDEBAR_WIDTH: u16 = 22;

/// Rows taken by one article in the headline list.
///
/// Title, source line and a blank separator.
pub const ARTICLE_HEIGHT: u16 = 3;

/// Terminals at least this wide show the sidebar as a static column and lay
/// the dashboard out in two columns.
pub const WIDE_BREAKPOINT: u16 = 100;

/// Terminals at least this wide lay the dashboard out in three columns.
pub const EXTRA_WIDE_BREAKPOINT: u16 = 150;

/// Minimum terminal width for useful rendering.
///
/// A search box with its button and one row of preset buttons need this
/// much room.
pub const MIN_WIDTH: u16 = 60;

/// Minimum terminal height for useful rendering.
///
/// Below this height, we display a "terminal too small" message.
pub const MIN_HEIGHT: u16 = 16;

/// Returns whether the sidebar is an overlay at this terminal width.
#[must_use]
pub const fn is_narrow(width: u16) -> bool {
    width < WIDE_BREAKPOINT
}

/// Returns the number of dashboard columns for a terminal width.
///
/// # Examples
///
/// ```
/// use glance_tui::layout::grid_columns;
///
/// assert_eq!(grid_columns(80), 1);
/// assert_eq!(grid_columns(120), 2);
/// assert_eq!(grid_columns(200), 3);
/// ```
#[must_use]
pub const fn grid_columns(width: u16) -> usize {
    if width >= EXTRA_WIDE_BREAKPOINT {
        3
    } else if width >= WIDE_BREAKPOINT {
        2
    } else {
        1
    }
}

/// Splits `area` into `count` equally sized grid cells, row by row.
///
/// The last row may be partly empty; its cells keep the width of a full row.
#[must_use]
pub fn grid_cells(area: Rect, count: usize, columns: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let columns = columns.clamp(1, count);
    let rows = count.div_ceil(columns);

    let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(area);
    row_areas
        .iter()
        .flat_map(|row| {
            Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(*row)
                .to_vec()
        })
        .take(count)
        .collect()
}

/// Creates a centered rectangle within a given area.
///
/// If the requested dimensions exceed the available area, the rectangle
/// will be clamped to fit.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}
