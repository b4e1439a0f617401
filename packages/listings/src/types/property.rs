//! Normalized property records.
//!
//! The wire shape (`RawProperty`) is whatever the admin panel produced.
//! Normalization happens exactly once, here, at the data-model boundary:
//! timestamps parse to instants, tour URLs trim to `Some` only when a
//! real tour exists, prices become decimals. The pipeline never touches
//! raw fields again.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use estate_client::RawProperty;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::CurrencyCode;

/// A property listing as the display layer sees it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: i64,
    pub title: Option<String>,
    pub property_type: Option<String>,
    pub listing_type: Option<String>,
    pub region: Option<String>,
    /// Exclusive listings always sort ahead of the rest.
    pub is_exclusive: bool,
    /// Administratively suppressed; must never reach display.
    pub is_hidden: bool,
    /// `Some` iff the record carries a non-blank 3D tour URL.
    pub url_3d: Option<String>,
    pub price: Option<Decimal>,
    pub currency: CurrencyCode,
    pub area: Option<f64>,
    pub rooms: Option<i32>,
    pub views: i64,
    pub created_at: Option<DateTime<Utc>>,
}

impl Property {
    /// Normalize a wire record.
    pub fn from_raw(raw: RawProperty) -> Self {
        Self {
            id: raw.id,
            title: raw.title,
            property_type: raw.property_type,
            listing_type: raw.listing_type,
            region: raw.region,
            is_exclusive: raw.is_exclusive.unwrap_or(false),
            is_hidden: raw.is_hidden.unwrap_or(false),
            url_3d: normalize_tour_url(raw.url_3d),
            price: raw.price.and_then(Decimal::from_f64),
            currency: raw
                .currency
                .as_deref()
                .and_then(|c| c.parse().ok())
                .unwrap_or_default(),
            area: raw.area,
            rooms: raw.rooms,
            views: raw.views.unwrap_or(0),
            created_at: raw.created_at.as_deref().and_then(parse_timestamp),
        }
    }

    /// Whether a 3D tour exists for this record.
    pub fn has_tour(&self) -> bool {
        self.url_3d.is_some()
    }
}

/// Blank and whitespace-only tour URLs are placeholders, not tours.
fn normalize_tour_url(url: Option<String>) -> Option<String> {
    url.and_then(|u| {
        let trimmed = u.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Parse the admin panel's timestamp formats: RFC 3339 or bare date.
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| Utc.from_utc_datetime(&ndt))
}
