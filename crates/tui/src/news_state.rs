//! News widget state.
//!
//! Headlines load a page at a time. Page 1 replaces the list; later pages
//! are appended when the last rendered headline scrolls into view, which the
//! [`LastItemObserver`] reports.

use glance_protocol::{Article, FetchFailure, FetchRequest, Generation, NewsCategory};
use tracing::debug;

/// Shown while the list is empty and a page is loading.
pub const LOADING_TEXT: &str = "Loading news...";

/// Shown when the provider answered without articles.
pub const LOAD_FAILED: &str = "Failed to load news.";

/// Shown when the request or its decoding failed.
pub const FETCH_ERROR: &str = "Error fetching news.";

/// Watches the last headline of the list for the load-more trigger.
///
/// The observer is attached to one list index at a time. Attaching it to a
/// new index disconnects the old observation first. It fires when the
/// watched item goes from not visible to visible, and never while a page is
/// in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LastItemObserver {
    target: Option<usize>,
    visible: bool,
}

impl LastItemObserver {
    /// Watches `index`. Re-attaching to the same index keeps its state.
    pub fn attach(&mut self, index: usize) {
        if self.target != Some(index) {
            self.disconnect();
            self.target = Some(index);
        }
    }

    /// Stops watching.
    pub fn disconnect(&mut self) {
        self.target = None;
        self.visible = false;
    }

    /// Returns the watched index.
    #[must_use]
    pub fn target(&self) -> Option<usize> {
        self.target
    }

    /// Records whether the watched item is visible after a frame.
    ///
    /// Returns `true` when it just became visible and no page is in flight.
    pub fn observe(&mut self, visible: bool, in_flight: bool) -> bool {
        if self.target.is_none() {
            return false;
        }
        let crossed = visible && !self.visible;
        self.visible = visible;
        crossed && !in_flight
    }
}

/// State of the news widget.
#[derive(Debug, Clone, Default)]
pub struct NewsState {
    /// Active category.
    pub category: NewsCategory,
    /// Loaded headlines, in page order.
    pub articles: Vec<Article>,
    /// Last requested page, starting at 1.
    pub page: u32,
    /// Whether a page is in flight.
    pub loading: bool,
    /// Error of the latest request.
    pub error: Option<String>,
    /// Headline under the keyboard cursor.
    pub cursor: Option<usize>,
    /// Headline shown in the detail overlay.
    pub detail: Option<usize>,
    /// Whether the fullscreen image overlay is open above the detail.
    pub image_open: bool,
    /// Load-more trigger.
    pub observer: LastItemObserver,
    generation: Generation,
}

impl NewsState {
    /// Creates an empty widget. Call [`NewsState::mount`] to load headlines.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the widget for a fresh mount, dropping in-flight answers.
    pub fn reset(&mut self) {
        *self = Self {
            generation: self.generation + 1,
            ..Self::new()
        };
    }

    /// Loads the first page of general headlines.
    pub fn mount(&mut self) -> FetchRequest {
        self.load_category(NewsCategory::General)
    }

    /// Returns the generation of the latest request.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Switches category: the list is emptied and page 1 requested.
    ///
    /// Choosing the active category again does nothing.
    pub fn select_category(&mut self, category: NewsCategory) -> Option<FetchRequest> {
        (category != self.category).then(|| self.load_category(category))
    }

    fn load_category(&mut self, category: NewsCategory) -> FetchRequest {
        self.category = category;
        self.page = 1;
        self.articles.clear();
        self.cursor = None;
        self.detail = None;
        self.image_open = false;
        self.observer.disconnect();
        self.request()
    }

    /// Selects the category `delta` steps away, wrapping.
    pub fn cycle_category(&mut self, delta: isize) -> Option<FetchRequest> {
        let count = NewsCategory::ALL.len() as isize;
        let index = (self.category.index() as isize + delta).rem_euclid(count) as usize;
        self.select_category(NewsCategory::ALL[index])
    }

    /// Reloads the active category from page 1.
    pub fn refresh(&mut self) -> FetchRequest {
        self.load_category(self.category)
    }

    /// Requests the next page, unless one is already in flight.
    pub fn load_more(&mut self) -> Option<FetchRequest> {
        if self.loading {
            return None;
        }
        self.page += 1;
        Some(self.request())
    }

    /// Feeds the observer with the visibility of the last headline.
    pub fn observe_last(&mut self, visible: bool) -> Option<FetchRequest> {
        if self.observer.observe(visible, self.loading) {
            debug!(page = self.page + 1, "last headline in view, loading more");
            self.load_more()
        } else {
            None
        }
    }

    fn request(&mut self) -> FetchRequest {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        FetchRequest::Headlines {
            generation: self.generation,
            category: self.category,
            page: self.page,
        }
    }

    /// Applies a headline outcome.
    ///
    /// Returns `false` and changes nothing when `generation` is not the
    /// latest request.
    pub fn apply(
        &mut self,
        generation: Generation,
        page: u32,
        result: Result<Vec<Article>, FetchFailure>,
    ) -> bool {
        if generation != self.generation {
            debug!(generation, latest = self.generation, page, "dropping stale headlines");
            return false;
        }
        self.loading = false;
        match result {
            Ok(batch) => {
                if page <= 1 {
                    self.articles = batch;
                } else {
                    self.articles.extend(batch);
                }
                if let Some(last) = self.articles.len().checked_sub(1) {
                    self.observer.attach(last);
                }
            }
            Err(FetchFailure::Missing) => self.error = Some(LOAD_FAILED.to_string()),
            Err(FetchFailure::Transport) => self.error = Some(FETCH_ERROR.to_string()),
        }
        true
    }

    /// Returns the error to display. Errors only show over an empty list.
    #[must_use]
    pub fn visible_error(&self) -> Option<&str> {
        if self.articles.is_empty() {
            self.error.as_deref()
        } else {
            None
        }
    }

    /// Moves the keyboard cursor, clamped to the loaded headlines.
    pub fn move_cursor(&mut self, delta: isize) {
        let Some(last) = self.articles.len().checked_sub(1) else {
            self.cursor = None;
            return;
        };
        self.cursor = Some(match self.cursor {
            Some(current) => current.saturating_add_signed(delta).min(last),
            None => 0,
        });
    }

    /// Opens the detail overlay for the headline at `index`.
    pub fn open_detail(&mut self, index: usize) {
        if index < self.articles.len() {
            self.cursor = Some(index);
            self.detail = Some(index);
            self.image_open = false;
        }
    }

    /// Returns the headline in the detail overlay.
    #[must_use]
    pub fn detail_article(&self) -> Option<&Article> {
        self.articles.get(self.detail?)
    }

    /// Opens the image overlay if the detail headline has an image.
    pub fn open_image(&mut self) -> bool {
        let has_image = self
            .detail_article()
            .is_some_and(|article| article.image_url.is_some());
        self.image_open = has_image;
        has_image
    }

    /// Returns the URL the open-link action targets: the image when its
    /// overlay is open, else the detail headline.
    #[must_use]
    pub fn link_target(&self) -> Option<&str> {
        let article = self.detail_article()?;
        if self.image_open {
            article.image_url.as_deref()
        } else {
            Some(article.url.as_str()).filter(|url| !url.is_empty())
        }
    }

    /// Closes the topmost overlay, or clears the cursor when none is open.
    ///
    /// Returns `false` if there was nothing to close.
    pub fn escape(&mut self) -> bool {
        if self.image_open {
            self.image_open = false;
        } else if self.detail.is_some() {
            self.detail = None;
        } else if self.cursor.is_some() {
            self.cursor = None;
        } else {
            return false;
        }
        true
    }

    /// Returns whether an overlay is open.
    #[must_use]
    pub fn has_overlay(&self) -> bool {
        self.detail.is_some()
    }
}
