//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

use crate::route::Route;

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application state to update the UI.
///
/// # Examples
///
/// ```
/// use glance_protocol::Message;
///
/// let msg = Message::NavigateRight;
/// assert!(matches!(msg, Message::NavigateRight));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move the highlight to the previous preset or category.
    NavigateLeft,
    /// Move the highlight to the next preset or category.
    NavigateRight,
    /// Move selection up within the focused panel.
    NavigateUp,
    /// Move selection down within the focused panel.
    NavigateDown,
    /// Activate the currently highlighted item.
    Select,
    /// Go back to the previous view.
    Back,
    /// Escape: close the topmost overlay or clear selection (contextual).
    Escape,
    /// Quit the application.
    Quit,
    /// Re-issue the fetch for the focused widget's current selection.
    Refresh,
    /// Toggle help overlay.
    ToggleHelp,
    /// Mouse click at coordinates (column, row).
    ClickAt {
        /// Column (x coordinate) of the click.
        column: u16,
        /// Row (y coordinate) of the click.
        row: u16,
    },
    /// Move keyboard focus to the next panel.
    FocusNext,
    /// Move keyboard focus to the previous panel.
    FocusPrev,

    // --- Shell messages ---
    /// Show or hide the sidebar.
    ToggleSidebar,
    /// Switch between the light and dark theme.
    ToggleTheme,
    /// Navigate to a route.
    GoTo {
        /// The destination route.
        route: Route,
    },
    /// Open the focused link (article or image) in the system browser.
    OpenLink,

    // --- Search box messages ---
    /// Start typing into the focused widget's search box.
    StartSearch,
    /// Input a character into the search box.
    SearchInput {
        /// The character that was input.
        ch: char,
    },
    /// Delete the last character of the search box.
    SearchBackspace,
    /// Submit the search box.
    SearchSubmit,
    /// Leave the search box without submitting.
    SearchCancel,
}

impl Message {
    /// Returns `true` if this message is a navigation action.
    ///
    /// # Examples
    ///
    /// ```
    /// use glance_protocol::Message;
    ///
    /// assert!(Message::NavigateLeft.is_navigation());
    /// assert!(Message::FocusNext.is_navigation());
    /// assert!(!Message::Select.is_navigation());
    /// ```
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NavigateLeft
                | Self::NavigateRight
                | Self::NavigateUp
                | Self::NavigateDown
                | Self::FocusNext
                | Self::FocusPrev
        )
    }

    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use glance_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Back.is_terminating());
    /// ```
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this message is a search box action.
    ///
    /// # Examples
    ///
    /// ```
    /// use glance_protocol::Message;
    ///
    /// assert!(Message::StartSearch.is_search());
    /// assert!(Message::SearchInput { ch: 'a' }.is_search());
    /// assert!(!Message::NavigateLeft.is_search());
    /// ```
    #[must_use]
    pub fn is_search(&self) -> bool {
        matches!(
            self,
            Self::StartSearch
                | Self::SearchInput { .. }
                | Self::SearchBackspace
                | Self::SearchSubmit
                | Self::SearchCancel
        )
    }
}
