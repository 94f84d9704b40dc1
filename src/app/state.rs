//! Application state container.
//!
//! This module defines [`AppState`], the single owner of everything the
//! listings screen shows: filter criteria, the current page of listings, the
//! subscription collection, the view mode and the detail selection. No other
//! component keeps a copy; the event handler mutates it in place.
//!
//! # State Components
//!
//! - **Filters**: Criteria encoded into every listings request
//! - **Listings**: Current page, replaced wholesale on each successful fetch
//! - **Subscriptions**: Saved searches, mutated only after server acknowledgment
//! - **View**: Grid, list or detail, plus the listing shown in detail
//! - **Fetch sequencing**: `loading` and the latest issued fetch number

use super::modes::ViewMode;
use crate::domain::{FilterCriteria, Listing, Subscription};

/// Central application state container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Current filter criteria.
    pub filters: FilterCriteria,

    /// Listings of the current page in server order.
    pub listings: Vec<Listing>,

    /// Saved-search subscriptions.
    pub subscriptions: Vec<Subscription>,

    /// Current view mode.
    pub view: ViewMode,

    /// Listing shown in detail view. `Some` only while `view` is detail.
    pub selected_listing: Option<Listing>,

    /// Listing requested by id that has not loaded yet. Only a response for
    /// this id may open detail view.
    pub pending_listing: Option<i64>,

    /// Contents of the subscription email input.
    pub subscription_email: String,

    /// `true` while the latest issued listings fetch has not resolved.
    pub loading: bool,

    /// Sequence number of the latest issued listings fetch (0 before the first).
    pub listings_seq: u64,

    /// When set, changing any non-pagination filter returns to page 1.
    pub reset_page_on_filter_change: bool,
}

impl AppState {
    /// Creates an empty state in grid view on page 1.
    ///
    /// # Example
    ///
    /// ```rust
    /// use listings_client::app::{AppState, ViewMode};
    ///
    /// let state = AppState::new();
    /// assert_eq!(state.view, ViewMode::Grid);
    /// assert_eq!(state.filters.page, 1);
    /// assert!(!state.loading);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the sequence number for a new listings fetch and marks the
    /// screen as loading.
    pub fn begin_listings_fetch(&mut self) -> u64 {
        self.listings_seq += 1;
        self.loading = true;
        self.listings_seq
    }

    /// Returns `true` if `seq` identifies the latest issued listings fetch.
    #[must_use]
    pub const fn is_latest_fetch(&self, seq: u64) -> bool {
        seq == self.listings_seq
    }

    /// Looks up a listing on the current page by id.
    #[must_use]
    pub fn listing(&self, id: i64) -> Option<&Listing> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    /// Takes the pending lookup if it is for `id`.
    pub fn take_pending_listing(&mut self, id: i64) -> bool {
        if self.pending_listing == Some(id) {
            self.pending_listing = None;
            true
        } else {
            false
        }
    }

    /// Enters detail view for `listing`, superseding any pending lookup.
    pub fn open_detail(&mut self, listing: Listing) {
        self.pending_listing = None;
        self.selected_listing = Some(listing);
        self.view = ViewMode::Detail;
    }

    /// Leaves detail view, always returning to grid.
    pub fn close_detail(&mut self) {
        self.pending_listing = None;
        self.selected_listing = None;
        self.view = ViewMode::Grid;
    }

    /// Removes the subscription with `id`. Returns `true` if one was removed.
    pub fn remove_subscription(&mut self, id: i64) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|sub| sub.id != id);
        self.subscriptions.len() != before
    }
}
