//! Headline decoding.

use glance_protocol::Article;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Top-level headlines document. `articles` is absent on errors.
#[derive(Debug, Deserialize)]
pub struct HeadlinesResponse {
    /// The requested page.
    pub articles: Option<Vec<WireArticle>>,
}

impl HeadlinesResponse {
    /// Converts the page into [`Article`]s.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] if the provider omitted `articles`.
    pub fn into_articles(self) -> Result<Vec<Article>> {
        self.articles
            .map(|page| page.into_iter().map(Article::from).collect())
            .ok_or(Error::MissingField { field: "articles" })
    }
}

/// An article as the provider encodes it. Every field may be `null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireArticle {
    /// Headline.
    pub title: Option<String>,
    /// Summary.
    pub description: Option<String>,
    /// Link to the article.
    pub url: Option<String>,
    /// Link to the lead image.
    pub url_to_image: Option<String>,
    /// RFC 3339 timestamp.
    pub published_at: Option<String>,
    /// Publishing outlet.
    #[serde(default)]
    pub source: WireSource,
}

/// Outlet of a [`WireArticle`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireSource {
    /// Display name.
    pub name: Option<String>,
}

impl From<WireArticle> for Article {
    fn from(wire: WireArticle) -> Self {
        Self {
            title: wire.title.unwrap_or_default(),
            description: wire.description.filter(|d| !d.trim().is_empty()),
            url: wire.url.unwrap_or_default(),
            image_url: wire.url_to_image.filter(|u| !u.trim().is_empty()),
            published_at: wire.published_at.unwrap_or_default(),
            source: wire.source.name.unwrap_or_default(),
        }
    }
}
