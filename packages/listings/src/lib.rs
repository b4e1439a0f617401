//! Property Listing Pipeline
//!
//! The engine behind a multilingual real-estate site's listing page:
//! fetch raw records from the back-office catalog, apply visibility and
//! quick-view filtering, order with exclusive placements pinned first,
//! and expose a fixed-size page window to the display layer.
//!
//! # Design
//!
//! - The session owns the full filtered/sorted result set; every page is
//!   a pure slice of it, so pagination never refetches.
//! - Filter, sort, and toggle mutations each reset to page 1 and trigger
//!   exactly one reload; racing loads resolve via a monotone ticket so
//!   only the most recent one commits.
//! - Records normalize once at the data-model boundary (timestamps
//!   parsed, tour URLs trimmed); the pipeline never re-parses per
//!   comparison.
//!
//! # Usage
//!
//! ```rust,ignore
//! use estate_client::EstateClient;
//! use listings::{ApiPropertySource, ListingSession, SessionConfig};
//!
//! let config = SessionConfig::from_query_str("propertyType=apartment&lang=en");
//! let source = ApiPropertySource::new(EstateClient::new(base_url));
//! let session = ListingSession::open(config, source).await;
//!
//! let snapshot = session.snapshot();
//! render(&snapshot.displayed, snapshot.current_page, snapshot.total_pages);
//! ```
//!
//! # Modules
//!
//! - [`pipeline`] - the listing session, ordering, load state machine
//! - [`types`] - normalized records, filter and sort state
//! - [`pagination`] - fixed-window page math
//! - [`currency`] - exchange rates and price display
//! - [`contact`] - contact-form validation and dispatch seam
//! - [`config`] - explicit session configuration, URL-seeded
//! - [`testing`] - mock collaborators for tests

pub mod config;
pub mod contact;
pub mod currency;
pub mod pagination;
pub mod pipeline;
pub mod source;
pub mod testing;
pub mod types;

// Re-export core types at crate root
pub use config::{Locale, SessionConfig};
pub use contact::{submit_contact_request, ContactError, ContactNotifier, ContactRequest};
pub use currency::{format_price, CurrencyCode, ExchangeRates};
pub use pagination::PAGE_SIZE;
pub use pipeline::{ListingSession, ListingSnapshot, LoadPhase};
pub use source::{ApiPropertySource, PropertySource};
pub use types::{FilterDraft, FilterState, Property, SortKey, SortOrder, SortState};

// Re-export the wire layer for consumers that construct sources directly
pub use estate_client::{EstateApiError, EstateClient, RawProperty};
