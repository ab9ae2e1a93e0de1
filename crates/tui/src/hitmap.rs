//! Click targets recorded while rendering.
//!
//! Render functions push the screen region of every clickable element into a
//! [`HitMap`]. Mouse clicks are resolved against the map built by the last
//! frame, so hit-testing always matches what is on screen. Regions pushed
//! later sit on top of earlier ones.

use glance_protocol::{NewsCategory, Route, WidgetKind};
use ratatui::layout::{Position, Rect};

/// A clickable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The header's sidebar toggle.
    ToggleSidebar,
    /// The header's theme toggle.
    ToggleTheme,
    /// A sidebar navigation entry.
    Route(Route),
    /// Anywhere inside a widget frame.
    Widget(WidgetKind),
    /// A widget's search input.
    Search(WidgetKind),
    /// A widget's search button.
    SearchSubmit(WidgetKind),
    /// A preset button (city or symbol) by index.
    Preset(WidgetKind, usize),
    /// A headline category button.
    Category(NewsCategory),
    /// A headline in the list, by index into the loaded articles.
    Article(usize),
    /// The image line of the article overlay.
    ArticleImage,
    /// The `Read More` link of the article overlay.
    ReadMore,
    /// The close button of the topmost overlay.
    CloseOverlay,
    /// Overlay background; swallows clicks meant for what lies beneath.
    Backdrop,
}

/// Regions of the last rendered frame and what they do when clicked.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Target)>,
}

impl HitMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets every region; called at the start of each frame.
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Records a region. Empty regions are ignored.
    pub fn push(&mut self, area: Rect, target: Target) {
        if !area.is_empty() {
            self.regions.push((area, target));
        }
    }

    /// Returns the topmost target at a screen position.
    #[must_use]
    pub fn target_at(&self, column: u16, row: u16) -> Option<Target> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target)
    }

    /// Returns whether `target` was rendered in the last frame.
    #[must_use]
    pub fn contains(&self, target: Target) -> bool {
        self.regions.iter().any(|(_, t)| *t == target)
    }

    /// Returns the region recorded for `target`, if any.
    #[must_use]
    pub fn area_of(&self, target: Target) -> Option<Rect> {
        self.regions
            .iter()
            .rev()
            .find(|(_, t)| *t == target)
            .map(|(area, _)| *area)
    }

    /// Returns the number of recorded regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Returns `true` if nothing clickable was rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
