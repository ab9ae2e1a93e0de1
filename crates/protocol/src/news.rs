//! News headline types.
//!
//! This module defines the [`Article`] record and the fixed set of
//! [`NewsCategory`] values the news widget can browse.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// Number of articles requested per page.
pub const PAGE_SIZE: u32 = 5;

/// A headline category offered by the news widget.
///
/// # Examples
///
/// ```
/// use glance_protocol::NewsCategory;
///
/// let category: NewsCategory = "technology".parse().unwrap();
/// assert_eq!(category, NewsCategory::Technology);
/// assert_eq!(category.label(), "Technology");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewsCategory {
    /// General headlines.
    #[default]
    General,
    /// Business headlines.
    Business,
    /// Technology headlines.
    Technology,
    /// Sports headlines.
    Sports,
}

impl NewsCategory {
    /// All categories in display order.
    pub const ALL: [Self; 4] = [Self::General, Self::Business, Self::Technology, Self::Sports];

    /// Returns the provider query value for this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Business => "business",
            Self::Technology => "technology",
            Self::Sports => "sports",
        }
    }

    /// Returns the capitalized button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Business => "Business",
            Self::Technology => "Technology",
            Self::Sports => "Sports",
        }
    }

    /// Returns the position of this category in [`Self::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }
}

impl fmt::Display for NewsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NewsCategory {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| ProtocolError::UnknownCategory(s.to_string()))
    }
}

/// A news article as shown in the headline list and detail overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Headline.
    pub title: String,
    /// Short summary, if the provider supplied one.
    pub description: Option<String>,
    /// Link to the full article.
    pub url: String,
    /// Link to the lead image, if any.
    pub image_url: Option<String>,
    /// Publication timestamp as reported by the provider (RFC 3339).
    pub published_at: String,
    /// Name of the publishing outlet.
    pub source: String,
}

impl Article {
    /// Creates an article with only the fields every entry carries.
    ///
    /// # Examples
    ///
    /// ```
    /// use glance_protocol::Article;
    ///
    /// let article = Article::new("Rust 2.0 announced", "https://example.com/a", "Example News");
    /// assert!(article.image_url.is_none());
    /// ```
    #[must_use]
    pub fn new(title: impl Into<String>, url: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            url: url.into(),
            image_url: None,
            published_at: String::new(),
            source: source.into(),
        }
    }

    /// Parses the publication timestamp.
    ///
    /// Returns `None` when the provider sent an empty or malformed value.
    ///
    /// # Examples
    ///
    /// ```
    /// use glance_protocol::Article;
    ///
    /// let mut article = Article::new("t", "u", "s");
    /// article.published_at = "2024-01-05T12:30:00Z".to_string();
    /// assert!(article.published().is_some());
    /// ```
    #[must_use]
    pub fn published(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.published_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_roundtrips_through_str() {
        for category in NewsCategory::ALL {
            assert_eq!(category.as_str().parse::<NewsCategory>(), Ok(category));
        }
    }

    #[test]
    fn category_parse_is_case_insensitive() {
        assert_eq!("Sports".parse::<NewsCategory>(), Ok(NewsCategory::Sports));
        assert_eq!(" BUSINESS ".parse::<NewsCategory>(), Ok(NewsCategory::Business));
    }

    #[test]
    fn category_parse_rejects_unknown() {
        assert_eq!(
            "weather".parse::<NewsCategory>(),
            Err(ProtocolError::UnknownCategory("weather".to_string()))
        );
    }

    #[test]
    fn category_index_matches_all_order() {
        assert_eq!(NewsCategory::General.index(), 0);
        assert_eq!(NewsCategory::Sports.index(), 3);
    }

    #[test]
    fn category_serializes_snake_case() {
        let json = serde_json::to_string(&NewsCategory::Technology).expect("serialize");
        assert_eq!(json, r#""technology""#);
    }

    proptest::proptest! {
        #[test]
        fn category_parse_accepts_only_known_names(input in "\\PC{0,16}") {
            match input.parse::<NewsCategory>() {
                Ok(category) => {
                    proptest::prop_assert_eq!(category.as_str(), input.trim().to_ascii_lowercase());
                }
                Err(err) => {
                    proptest::prop_assert_eq!(err, ProtocolError::UnknownCategory(input.clone()));
                }
            }
        }
    }

    #[test]
    fn published_rejects_garbage() {
        let mut article = Article::new("t", "u", "s");
        article.published_at = "yesterday".to_string();
        assert!(article.published().is_none());
    }
}
