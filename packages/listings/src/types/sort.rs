//! Sort state for the listing pipeline.

use serde::{Deserialize, Serialize};

/// Field the visible listing is ordered by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Price,
    CreatedAt,
    Views,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Price => write!(f, "price"),
            SortKey::CreatedAt => write!(f, "created_at"),
            SortKey::Views => write!(f, "views"),
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(SortKey::Price),
            "created_at" => Ok(SortKey::CreatedAt),
            "views" => Ok(SortKey::Views),
            _ => Err(format!("invalid sort key: {}", s)),
        }
    }
}

/// Direction applied to the sort key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(format!("invalid sort order: {}", s)),
        }
    }
}

/// Active sort selection.
///
/// The exclusivity tier is pinned ahead of this: `SortOrder` only ever
/// applies within a tier, never to the exclusive-first placement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub order: SortOrder,
}

impl SortState {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }
}

impl Default for SortState {
    /// Newest listings first.
    fn default() -> Self {
        Self {
            key: SortKey::CreatedAt,
            order: SortOrder::Desc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_round_trip() {
        for key in [SortKey::Price, SortKey::CreatedAt, SortKey::Views] {
            let parsed: SortKey = key.to_string().parse().unwrap();
            assert_eq!(parsed, key);
        }
    }

    #[test]
    fn test_sort_order_rejects_unknown() {
        assert!("ascending".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_default_is_newest_first() {
        let state = SortState::default();
        assert_eq!(state.key, SortKey::CreatedAt);
        assert_eq!(state.order, SortOrder::Desc);
    }
}
