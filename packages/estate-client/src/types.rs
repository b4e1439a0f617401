use serde::Deserialize;

/// A single property record as returned by the back-office API.
///
/// Everything except `id` is optional: records are entered by hand in the
/// admin panel and frequently arrive with fields missing. Normalization
/// (timestamp parsing, tour-URL trimming, currency defaults) is the
/// consumer's job, not the wire layer's.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProperty {
    pub id: i64,
    pub title: Option<String>,
    #[serde(rename = "propertyType")]
    pub property_type: Option<String>,
    #[serde(rename = "listingType")]
    pub listing_type: Option<String>,
    pub region: Option<String>,
    #[serde(rename = "isExclusive")]
    pub is_exclusive: Option<bool>,
    #[serde(rename = "isHidden")]
    pub is_hidden: Option<bool>,
    #[serde(rename = "url3d")]
    pub url_3d: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub area: Option<f64>,
    pub rooms: Option<i32>,
    pub views: Option<i64>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

/// Wrapper used by envelope-style endpoints: `{ "data": ... }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}
