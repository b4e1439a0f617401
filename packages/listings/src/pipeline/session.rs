//! The listing session: one visitor's view of the catalog.
//!
//! A session owns the applied filter, the sort selection, the quick-view
//! toggles, and the authoritative filtered/sorted result set. The
//! displayed page is always derived by slicing that set, so the window
//! invariant holds by construction and changing pages never fetches.
//!
//! Load lifecycle per session: `Idle → Loading → {Loaded, Failed}`, and
//! every filter/sort/toggle mutation re-enters `Loading`. Loads are not
//! cancelable mid-flight; instead each carries a ticket from a monotone
//! sequence and a resolution with a stale ticket is discarded, so only
//! the most recently triggered load ever commits.

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::{Mutex, MutexGuard};

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{Locale, SessionConfig};
use crate::pagination;
use crate::pipeline::order;
use crate::source::PropertySource;
use crate::types::filter::{FilterDraft, FilterState};
use crate::types::property::Property;
use crate::types::sort::{SortKey, SortOrder, SortState};

/// Load lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// Constructed, first load not yet triggered.
    Idle,
    Loading,
    Loaded,
    /// Fetch failed; distinct from a loaded-but-empty result.
    Failed,
}

/// What the display layer renders.
#[derive(Debug, Clone, Serialize)]
pub struct ListingSnapshot {
    pub displayed: Vec<Property>,
    pub total_count: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub is_loading: bool,
    pub has_error: bool,
}

struct SessionState {
    filter: FilterState,
    sort: SortState,
    show_exclusive_only: bool,
    show_3d_only: bool,
    current_page: usize,
    /// The full filtered/sorted result set; pages are slices of this.
    all: Vec<Property>,
    phase: LoadPhase,
}

pub struct ListingSession<S> {
    source: S,
    locale: Locale,
    page_size: usize,
    state: Mutex<SessionState>,
    load_seq: AtomicU64,
}

impl<S: PropertySource> ListingSession<S> {
    /// Construct an idle session. Most callers want [`ListingSession::open`].
    pub fn new(config: SessionConfig, source: S) -> Self {
        Self {
            source,
            locale: config.locale,
            page_size: config.page_size,
            state: Mutex::new(SessionState {
                filter: config.initial_filter,
                sort: config.initial_sort,
                show_exclusive_only: false,
                show_3d_only: false,
                current_page: 1,
                all: Vec::new(),
                phase: LoadPhase::Idle,
            }),
            load_seq: AtomicU64::new(0),
        }
    }

    /// Construct a session and run the mount-time load with the
    /// URL-seeded filter.
    pub async fn open(config: SessionConfig, source: S) -> Self {
        let session = Self::new(config, source);
        session.load().await;
        session
    }

    /// Fetch, filter, sort, and commit a fresh result set.
    ///
    /// Failures are absorbed: the session lands in `Failed` with an empty
    /// set and the caller retries by invoking `load` again. A resolution
    /// that is no longer the newest triggered load is discarded whole.
    pub async fn load(&self) {
        let ticket = self.load_seq.fetch_add(1, AtomicOrdering::SeqCst) + 1;
        let params = {
            let mut state = self.lock_state();
            state.phase = LoadPhase::Loading;
            let mut params = state.filter.to_query_pairs();
            // Sort hints for the source; ordering is still re-derived locally.
            params.push(("sortBy".to_string(), state.sort.key.to_string()));
            params.push(("sortOrder".to_string(), state.sort.order.to_string()));
            params
        };

        let outcome = self.source.fetch(&params).await;

        let mut state = self.lock_state();
        if ticket != self.load_seq.load(AtomicOrdering::SeqCst) {
            debug!(ticket, "Discarding stale property load");
            return;
        }

        match outcome {
            Ok(raw) => {
                let mut all: Vec<Property> = raw
                    .into_iter()
                    .map(Property::from_raw)
                    .filter(|p| !p.is_hidden)
                    .filter(|p| !state.show_exclusive_only || p.is_exclusive)
                    .filter(|p| !state.show_3d_only || p.has_tour())
                    .collect();
                let sort = state.sort;
                all.sort_by(|a, b| order::compare(a, b, sort));

                debug!(count = all.len(), "Committed property result set");
                state.all = all;
                state.current_page = 1;
                state.phase = LoadPhase::Loaded;
            }
            Err(err) => {
                warn!(%err, "Property load failed");
                state.all = Vec::new();
                state.current_page = 1;
                state.phase = LoadPhase::Failed;
            }
        }
    }

    // ========================================================================
    // Mutators: each resets to page 1 and triggers exactly one load
    // ========================================================================

    /// Replace the applied filter wholesale.
    pub async fn set_filter(&self, filter: FilterState) {
        {
            let mut state = self.lock_state();
            state.filter = filter;
            state.current_page = 1;
        }
        self.load().await;
    }

    /// Commit a two-phase filter draft.
    pub async fn apply_filters(&self, draft: FilterDraft) {
        self.set_filter(draft.apply()).await;
    }

    pub async fn set_sort(&self, key: SortKey, order: SortOrder) {
        {
            let mut state = self.lock_state();
            state.sort = SortState::new(key, order);
            state.current_page = 1;
        }
        self.load().await;
    }

    pub async fn toggle_exclusive_only(&self) {
        {
            let mut state = self.lock_state();
            state.show_exclusive_only = !state.show_exclusive_only;
            state.current_page = 1;
        }
        self.load().await;
    }

    pub async fn toggle_3d_only(&self) {
        {
            let mut state = self.lock_state();
            state.show_3d_only = !state.show_3d_only;
            state.current_page = 1;
        }
        self.load().await;
    }

    // ========================================================================
    // Pagination: pure re-slice, no fetch
    // ========================================================================

    /// Advance one page; no-op on the last page.
    pub fn go_to_next_page(&self) {
        let mut state = self.lock_state();
        if state.current_page * self.page_size >= state.all.len() {
            return;
        }
        state.current_page += 1;
    }

    /// Go back one page; no-op on page 1.
    pub fn go_to_previous_page(&self) {
        let mut state = self.lock_state();
        if state.current_page <= 1 {
            return;
        }
        state.current_page -= 1;
    }

    // ========================================================================
    // Read surface
    // ========================================================================

    /// The current page and its bookkeeping, for the display layer.
    pub fn snapshot(&self) -> ListingSnapshot {
        let state = self.lock_state();
        let displayed = pagination::page_slice(&state.all, state.current_page, self.page_size).to_vec();
        ListingSnapshot {
            displayed,
            total_count: state.all.len(),
            current_page: state.current_page,
            total_pages: pagination::total_pages(state.all.len(), self.page_size),
            is_loading: state.phase == LoadPhase::Loading,
            has_error: state.phase == LoadPhase::Failed,
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.lock_state().phase
    }

    /// The currently applied filter, e.g. to seed a [`FilterDraft`].
    pub fn applied_filter(&self) -> FilterState {
        self.lock_state().filter.clone()
    }

    pub fn sort_state(&self) -> SortState {
        self.lock_state().sort
    }

    pub fn is_exclusive_only(&self) -> bool {
        self.lock_state().show_exclusive_only
    }

    pub fn is_3d_only(&self) -> bool {
        self.lock_state().show_3d_only
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    // All mutations happen on the session's single logical thread; the
    // lock is never held across an await.
    fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap()
    }
}
