//! Single-line search input shared by the weather and finance widgets.

/// How typed characters are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseRule {
    /// Keep characters as typed.
    #[default]
    AsTyped,
    /// Upper-case each character as it is typed.
    Upper,
}

/// A search box: its text and whether it has keyboard focus.
///
/// # Examples
///
/// ```
/// use glance_tui::search::SearchBox;
///
/// let mut search = SearchBox::upper_case();
/// search.start_edit();
/// for ch in "xyz".chars() {
///     search.input(ch);
/// }
/// assert_eq!(search.text(), "XYZ");
/// assert_eq!(search.submit().as_deref(), Some("XYZ"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBox {
    text: String,
    editing: bool,
    case: CaseRule,
}

impl SearchBox {
    /// Creates an empty box that keeps input as typed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty box that upper-cases input.
    #[must_use]
    pub fn upper_case() -> Self {
        Self {
            case: CaseRule::Upper,
            ..Self::default()
        }
    }

    /// Returns the current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether the box is taking keyboard input.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Gives the box keyboard focus.
    pub fn start_edit(&mut self) {
        self.editing = true;
    }

    /// Drops keyboard focus, keeping the text.
    pub fn cancel(&mut self) {
        self.editing = false;
    }

    /// Appends a typed character.
    pub fn input(&mut self, ch: char) {
        match self.case {
            CaseRule::AsTyped => self.text.push(ch),
            CaseRule::Upper => self.text.extend(ch.to_uppercase()),
        }
    }

    /// Removes the last character.
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Ends editing and returns the query, or `None` if the box is blank.
    pub fn submit(&mut self) -> Option<String> {
        self.editing = false;
        let query = self.text.trim();
        (!query.is_empty()).then(|| query.to_string())
    }
}
