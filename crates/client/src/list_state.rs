//! Fetch state machine for one list screen.
//!
//! `Idle -> Loading -> Loaded | Errored`, `Errored -> Loading` on
//! retry. Every successful load replaces the whole item buffer; a
//! failed load keeps the previous buffer on screen (stale-while-error)
//! and records the message for the notification surface. In-flight
//! requests carry a monotonically increasing token so that a
//! later-issued fetch always wins over a slower earlier one.

use contracts::shared::page::{clamp_page, total_pages, Page, PageRequest};

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// Identifies one in-flight fetch. Tokens are never reused within a
/// controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Container-side list state; owns pagination and the item buffer,
/// delegates the actual fetching to the caller.
#[derive(Debug)]
pub struct ListController<T> {
    phase: LoadPhase,
    items: Vec<T>,
    total: u64,
    page: u32,
    page_size: u32,
    error: Option<String>,
    last_token: u64,
    inflight: Option<RequestToken>,
}

impl<T> ListController<T> {
    pub fn new(page_size: u32) -> Self {
        Self {
            phase: LoadPhase::Idle,
            items: Vec::new(),
            total: 0,
            page: 1,
            page_size: page_size.max(1),
            error: None,
            last_token: 0,
            inflight: None,
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.total, self.page_size)
    }

    /// Request describing the page this controller currently wants.
    pub fn request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }

    /// Start a fetch and return its token. Any previously in-flight
    /// fetch becomes stale.
    pub fn begin_load(&mut self) -> RequestToken {
        self.last_token += 1;
        let token = RequestToken(self.last_token);
        self.inflight = Some(token);
        self.phase = LoadPhase::Loading;
        token
    }

    /// Start the initial fetch, once. Guards against duplicate mount
    /// triggers; refreshes after the first load go through `begin_load`.
    pub fn ensure_initial_load(&mut self) -> Option<RequestToken> {
        if self.phase == LoadPhase::Idle {
            Some(self.begin_load())
        } else {
            None
        }
    }

    /// Settle a fetch. Returns `false` when the token is stale and the
    /// result was discarded.
    pub fn finish(&mut self, token: RequestToken, result: Result<Page<T>, ApiError>) -> bool {
        if self.inflight != Some(token) {
            return false;
        }
        self.inflight = None;
        match result {
            Ok(page) => {
                self.items = page.items;
                self.total = page.total;
                self.error = None;
                self.phase = LoadPhase::Loaded;
                // the cursor may point past the end after the total shrinks
                self.page = clamp_page(self.page, self.total_pages());
            }
            Err(err) => {
                // previous buffer stays on screen
                self.error = Some(err.to_string());
                self.phase = LoadPhase::Errored;
            }
        }
        true
    }

    /// Move the cursor; returns `true` when the page changed and a
    /// refetch is due.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        let target = clamp_page(page, self.total_pages());
        if target == self.page {
            return false;
        }
        self.page = target;
        true
    }

    pub fn first_page(&mut self) -> bool {
        self.go_to_page(1)
    }

    pub fn prev_page(&mut self) -> bool {
        self.go_to_page(self.page.saturating_sub(1))
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.page.saturating_add(1))
    }

    pub fn last_page(&mut self) -> bool {
        self.go_to_page(self.total_pages().max(1))
    }

    /// Change the page size and reset to the first page. Returns `true`
    /// when anything changed.
    pub fn set_page_size(&mut self, size: u32) -> bool {
        let size = size.max(1);
        if size == self.page_size && self.page == 1 {
            return false;
        }
        self.page_size = size;
        self.page = 1;
        true
    }
}
