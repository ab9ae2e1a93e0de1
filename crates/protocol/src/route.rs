//! Dashboard routes.
//!
//! The dashboard has four top-level screens: the combined dashboard and one
//! dedicated screen per widget.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// A dashboard widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    /// 5-day weather forecast.
    Weather,
    /// Paginated headlines.
    News,
    /// Intraday stock chart.
    Finance,
}

/// A top-level screen of the dashboard.
///
/// # Examples
///
/// ```
/// use glance_protocol::{Route, WidgetKind};
///
/// assert_eq!(Route::Dashboard.widgets().len(), 3);
/// assert_eq!("/finance".parse::<Route>().unwrap(), Route::Finance);
/// assert_eq!(Route::Weather.heading(), Some("Weather Dashboard"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// All three widgets.
    #[default]
    Dashboard,
    /// Weather widget only.
    Weather,
    /// News widget only.
    News,
    /// Finance widget only.
    Finance,
}

impl Route {
    /// All routes in sidebar order.
    pub const ALL: [Self; 4] = [Self::Dashboard, Self::Weather, Self::News, Self::Finance];

    /// Returns the path of this route.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Weather => "/weather",
            Self::News => "/news",
            Self::Finance => "/finance",
        }
    }

    /// Returns the sidebar label of this route.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Weather => "Weather",
            Self::News => "News",
            Self::Finance => "Finance",
        }
    }

    /// Returns the page heading, if the route shows one.
    #[must_use]
    pub const fn heading(self) -> Option<&'static str> {
        match self {
            Self::Dashboard => None,
            Self::Weather => Some("Weather Dashboard"),
            Self::News => Some("News Dashboard"),
            Self::Finance => Some("Finance Dashboard"),
        }
    }

    /// Returns the widgets mounted on this route, in layout order.
    #[must_use]
    pub const fn widgets(self) -> &'static [WidgetKind] {
        match self {
            Self::Dashboard => &[WidgetKind::Weather, WidgetKind::News, WidgetKind::Finance],
            Self::Weather => &[WidgetKind::Weather],
            Self::News => &[WidgetKind::News],
            Self::Finance => &[WidgetKind::Finance],
        }
    }

    /// Returns the position of this route in [`Self::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|r| *r == self).unwrap_or(0)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('/').to_ascii_lowercase().as_str() {
            "" | "dashboard" | "home" => Ok(Self::Dashboard),
            "weather" => Ok(Self::Weather),
            "news" => Ok(Self::News),
            "finance" => Ok(Self::Finance),
            _ => Err(ProtocolError::UnknownRoute(s.to_string())),
        }
    }
}
