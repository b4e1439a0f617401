//! Contact-form handling.
//!
//! The form validates here; the actual email transport is a collaborator
//! behind [`ContactNotifier`]. A dispatch failure surfaces to the caller
//! so the form can offer a retry.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Locale;

/// Contact-form validation and dispatch errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("a phone number or email address is required")]
    NoContactChannel,

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("message must not be empty")]
    EmptyMessage,

    #[error("notification dispatch failed: {0}")]
    Dispatch(String),
}

/// A visitor's inquiry, optionally about a specific property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub message: String,
    pub property_id: Option<i64>,
    /// Language the visitor was browsing in; replies go out in it.
    pub locale: Locale,
}

impl ContactRequest {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::EmptyName);
        }
        let has_phone = self.phone.as_deref().is_some_and(|p| !p.trim().is_empty());
        let has_email = self.email.as_deref().is_some_and(|e| !e.trim().is_empty());
        if !has_phone && !has_email {
            return Err(ContactError::NoContactChannel);
        }
        if let Some(email) = self.email.as_deref() {
            let email = email.trim();
            if !email.is_empty() && !is_plausible_email(email) {
                return Err(ContactError::InvalidEmail(email.to_string()));
            }
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::EmptyMessage);
        }
        Ok(())
    }
}

/// Local-part@domain with a dot somewhere in the domain.
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Delivers a contact request to the office (email transport lives
/// behind this seam).
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify(
        &self,
        request: &ContactRequest,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Validate and dispatch a contact request.
pub async fn submit_contact_request<N>(
    request: &ContactRequest,
    notifier: &N,
) -> Result<(), ContactError>
where
    N: ContactNotifier + ?Sized,
{
    request.validate()?;
    info!(property_id = ?request.property_id, locale = %request.locale, "Dispatching contact request");
    match notifier.notify(request).await {
        Ok(()) => Ok(()),
        Err(err) => {
            warn!(%err, "Contact notification failed");
            Err(ContactError::Dispatch(err.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ContactRequest {
        ContactRequest {
            name: "Anna".to_string(),
            phone: Some("+374 91 000000".to_string()),
            email: None,
            message: "Is the apartment still available?".to_string(),
            property_id: Some(42),
            locale: Locale::Hy,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert_eq!(request().validate(), Ok(()));
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut req = request();
        req.name = "   ".to_string();
        assert_eq!(req.validate(), Err(ContactError::EmptyName));
    }

    #[test]
    fn test_requires_some_contact_channel() {
        let mut req = request();
        req.phone = Some("".to_string());
        req.email = None;
        assert_eq!(req.validate(), Err(ContactError::NoContactChannel));
    }

    #[test]
    fn test_email_shape_checked_when_present() {
        let mut req = request();
        req.email = Some("not-an-address".to_string());
        assert!(matches!(req.validate(), Err(ContactError::InvalidEmail(_))));

        req.email = Some("anna@example.am".to_string());
        assert_eq!(req.validate(), Ok(()));
    }

    #[test]
    fn test_empty_message_rejected() {
        let mut req = request();
        req.message = "\n".to_string();
        assert_eq!(req.validate(), Err(ContactError::EmptyMessage));
    }
}
