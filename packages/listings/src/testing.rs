//! Testing utilities including mock collaborators.
//!
//! Useful for exercising the pipeline without a network. The property
//! source mock scripts responses in order and can gate individual
//! fetches behind a [`Notify`] so tests control resolution order,
//! which is how the stale-load guard gets exercised.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use estate_client::{EstateApiError, RawProperty};
use tokio::sync::Notify;

use crate::contact::{ContactNotifier, ContactRequest};
use crate::source::PropertySource;

type ScriptedFetch = (Result<Vec<RawProperty>, EstateApiError>, Option<Arc<Notify>>);

/// A scripted property source.
///
/// Responses are consumed in the order they were added; once the script
/// runs out, fetches resolve to an empty catalog. Clones share the
/// script and the call log, so a test can keep one handle for
/// assertions after handing the other to a session.
#[derive(Clone, Default)]
pub struct MockPropertySource {
    script: Arc<Mutex<VecDeque<ScriptedFetch>>>,
    calls: Arc<Mutex<Vec<Vec<(String, String)>>>>,
}

impl MockPropertySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful fetch result.
    pub fn with_properties(self, properties: Vec<RawProperty>) -> Self {
        self.script.lock().unwrap().push_back((Ok(properties), None));
        self
    }

    /// Queue a failed fetch.
    pub fn with_error(self, error: EstateApiError) -> Self {
        self.script.lock().unwrap().push_back((Err(error), None));
        self
    }

    /// Queue a fetch that holds until `gate` is notified.
    pub fn with_gated_properties(self, properties: Vec<RawProperty>, gate: Arc<Notify>) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back((Ok(properties), Some(gate)));
        self
    }

    /// Query-parameter sets received, in call order.
    pub fn calls(&self) -> Vec<Vec<(String, String)>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl PropertySource for MockPropertySource {
    async fn fetch(&self, params: &[(String, String)]) -> Result<Vec<RawProperty>, EstateApiError> {
        self.calls.lock().unwrap().push(params.to_vec());
        let scripted = self.script.lock().unwrap().pop_front();
        match scripted {
            Some((result, Some(gate))) => {
                gate.notified().await;
                result
            }
            Some((result, None)) => result,
            None => Ok(Vec::new()),
        }
    }
}

/// Records dispatched contact requests; optionally fails every dispatch.
#[derive(Clone, Default)]
pub struct MockContactNotifier {
    sent: Arc<Mutex<Vec<ContactRequest>>>,
    fail: Arc<Mutex<bool>>,
}

impl MockContactNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(self) -> Self {
        *self.fail.lock().unwrap() = true;
        self
    }

    pub fn sent(&self) -> Vec<ContactRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactNotifier for MockContactNotifier {
    async fn notify(
        &self,
        request: &ContactRequest,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if *self.fail.lock().unwrap() {
            return Err("smtp relay unreachable".into());
        }
        self.sent.lock().unwrap().push(request.clone());
        Ok(())
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// A bare wire record with only the id set.
pub fn raw_property(id: i64) -> RawProperty {
    RawProperty {
        id,
        title: None,
        property_type: None,
        listing_type: None,
        region: None,
        is_exclusive: None,
        is_hidden: None,
        url_3d: None,
        price: None,
        currency: None,
        area: None,
        rooms: None,
        views: None,
        created_at: None,
    }
}

/// The five-record mixed fixture: one hidden, one exclusive, one with a
/// blank tour URL, dated and priced for sort assertions.
pub fn sample_properties() -> Vec<RawProperty> {
    let mut hidden = raw_property(1);
    hidden.is_hidden = Some(true);
    hidden.price = Some(100.0);

    let mut exclusive = raw_property(2);
    exclusive.is_exclusive = Some(true);
    exclusive.price = Some(200.0);
    exclusive.created_at = Some("2024-01-01".to_string());

    let mut mid = raw_property(3);
    mid.price = Some(150.0);
    mid.created_at = Some("2024-03-01".to_string());

    let mut top = raw_property(4);
    top.price = Some(300.0);
    top.created_at = Some("2024-02-01".to_string());

    let mut blank_tour = raw_property(5);
    blank_tour.url_3d = Some("".to_string());
    blank_tour.price = Some(50.0);
    blank_tour.created_at = Some("2024-04-01".to_string());

    vec![hidden, exclusive, mid, top, blank_tour]
}
