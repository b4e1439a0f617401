//! The property source seam.
//!
//! The pipeline never talks HTTP directly; it fetches through this trait
//! so tests can script responses and control resolution order.

use async_trait::async_trait;
use estate_client::{EstateApiError, EstateClient, RawProperty};

/// Something that can answer a property query.
#[async_trait]
pub trait PropertySource: Send + Sync {
    /// Fetch raw records for the given flat query parameters.
    ///
    /// The source may return records unordered, partially filtered, or
    /// with extra hints applied; the pipeline re-derives filtering and
    /// ordering itself.
    async fn fetch(&self, params: &[(String, String)]) -> Result<Vec<RawProperty>, EstateApiError>;
}

/// Production source backed by the back-office REST client.
pub struct ApiPropertySource {
    client: EstateClient,
}

impl ApiPropertySource {
    pub fn new(client: EstateClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PropertySource for ApiPropertySource {
    async fn fetch(&self, params: &[(String, String)]) -> Result<Vec<RawProperty>, EstateApiError> {
        self.client.list_properties(params).await
    }
}
