//! Session configuration.
//!
//! Everything the pipeline needs at construction time arrives in one
//! explicit object: the landing URL's query parameters, the visitor's
//! locale, the page size. No ambient globals.

use serde::{Deserialize, Serialize};

use crate::pagination::PAGE_SIZE;
use crate::types::filter::FilterState;
use crate::types::sort::{SortKey, SortOrder, SortState};

/// Site languages.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Armenian, the site default.
    #[default]
    Hy,
    En,
    Ru,
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::Hy => write!(f, "hy"),
            Locale::En => write!(f, "en"),
            Locale::Ru => write!(f, "ru"),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hy" => Ok(Locale::Hy),
            "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            _ => Err(format!("invalid locale: {}", s)),
        }
    }
}

/// Construction-time configuration for a listing session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Filter seeded from the landing URL.
    pub initial_filter: FilterState,
    pub initial_sort: SortState,
    pub locale: Locale,
    pub page_size: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_filter: FilterState::default(),
            initial_sort: SortState::default(),
            locale: Locale::default(),
            page_size: PAGE_SIZE,
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from a landing URL's query string.
    ///
    /// Recognizes `lang`, `sortBy`, and `sortOrder` alongside the filter
    /// keys; anything unrecognized is ignored. Filter parsing sees the
    /// whole string and picks out its own keys.
    pub fn from_query_str(query: &str) -> Self {
        let mut config = Self::new();
        config.initial_filter = FilterState::from_query_str(query);
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "lang" => {
                    if let Ok(locale) = value.parse::<Locale>() {
                        config.locale = locale;
                    }
                }
                "sortBy" => {
                    if let Ok(sort_key) = value.parse::<SortKey>() {
                        config.initial_sort.key = sort_key;
                    }
                }
                "sortOrder" => {
                    if let Ok(order) = value.parse::<SortOrder>() {
                        config.initial_sort.order = order;
                    }
                }
                _ => {}
            }
        }
        config
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.page_size, PAGE_SIZE);
        assert_eq!(config.locale, Locale::Hy);
        assert_eq!(config.initial_filter, FilterState::default());
    }

    #[test]
    fn test_from_query_str_seeds_everything() {
        let config =
            SessionConfig::from_query_str("propertyType=apartment&lang=ru&sortBy=price&sortOrder=asc");
        assert_eq!(config.locale, Locale::Ru);
        assert_eq!(config.initial_sort.key, SortKey::Price);
        assert_eq!(config.initial_sort.order, SortOrder::Asc);
        assert_eq!(config.initial_filter.property_type.as_deref(), Some("apartment"));
    }

    #[test]
    fn test_from_query_str_keeps_defaults_on_junk() {
        let config = SessionConfig::from_query_str("lang=de&sortBy=color");
        assert_eq!(config.locale, Locale::Hy);
        assert_eq!(config.initial_sort, SortState::default());
    }
}
