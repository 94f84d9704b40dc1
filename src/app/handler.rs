//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input,
//! history signals and worker completions, translating them into state changes
//! and action sequences. It is the only place [`AppState`] is mutated.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the front end, the history port or the worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` and `FilterCriteria` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Filters**: `SetFilter`, `ResetFilters`
//! - **Listings**: `FetchListings`, `NextPage`, `PrevPage`, `Init`
//! - **Subscriptions**: `FetchSubscriptions`, `SetSubscriptionEmail`,
//!   `Subscribe`, `DeleteSubscription`, `DeleteSubscriptionConfirmed`
//! - **View**: `OpenDetail`, `OpenListingById`, `CloseDetail`,
//!   `HistoryPopped`, `SetDisplayMode`
//! - **Worker**: `WorkerResponse` with typed completion variants
//!
//! # Example
//!
//! ```rust
//! use listings_client::app::{handle_event, Action, AppState, Event};
//!
//! let mut state = AppState::new();
//! let (changed, actions) = handle_event(&mut state, &Event::NextPage)?;
//! assert!(changed);
//! assert_eq!(state.filters.page, 2);
//! assert!(matches!(actions[0], Action::PostToWorker(_)));
//! # Ok::<(), listings_client::ListingsError>(())
//! ```

use crate::app::{Action, AppState, ViewMode};
use crate::domain::error::Result;
use crate::domain::{FilterUpdate, Listing, SubscriptionPayload};
use crate::infrastructure::{HistoryEntry, HistoryState};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Alert shown when a listings page fails to load.
pub const LISTINGS_ERROR_ALERT: &str = "Error loading listings. Please try again.";

/// Alert shown when a single listing fails to load.
pub const LISTING_ERROR_ALERT: &str = "Failed to load listing.";

/// Alert shown after a subscription was created.
pub const SUBSCRIBE_SUCCESS_ALERT: &str = "Successfully subscribed to notifications!";

/// Alert shown when a subscription could not be created.
pub const SUBSCRIBE_ERROR_ALERT: &str = "Failed to subscribe. Please try again.";

/// Question asked before deleting a subscription.
pub const UNSUBSCRIBE_CONFIRMATION: &str = "Are you sure you want to unsubscribe?";

/// Alert shown when a subscription could not be deleted.
pub const UNSUBSCRIBE_ERROR_ALERT: &str = "Failed to unsubscribe.";

/// Events triggered by user input, history navigation or worker completions.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes these sequentially, ensuring
/// deterministic state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Initial page load: fetches listings and subscriptions together.
    Init,

    /// Assigns one filter field. Does not fetch.
    SetFilter(FilterUpdate),
    /// Restores default filters and fetches page 1.
    ResetFilters,

    /// Fetches listings for the current filters.
    FetchListings,
    /// Advances one page and fetches.
    NextPage,
    /// Goes back one page and fetches; no-op on page 1.
    PrevPage,

    /// Refreshes subscriptions in the background (failures are only logged).
    FetchSubscriptions,
    /// Edits the subscription email input.
    SetSubscriptionEmail(String),
    /// Subscribes the email input to the current filters.
    Subscribe,
    /// Starts deleting a subscription; asks for confirmation first.
    DeleteSubscription {
        /// Subscription id.
        id: i64,
    },
    /// Deletes a subscription after the user confirmed.
    DeleteSubscriptionConfirmed {
        /// Subscription id.
        id: i64,
    },

    /// Shows a listing full-screen.
    OpenDetail(Listing),
    /// Shows a listing full-screen, loading it first if it is not on the
    /// current page.
    OpenListingById(i64),
    /// Leaves detail view.
    CloseDetail,
    /// The user navigated back; carries the state of the now-current entry.
    HistoryPopped(HistoryState),
    /// Toggles between grid and list.
    SetDisplayMode(ViewMode),

    /// Wraps a completion from the worker.
    WorkerResponse(WorkerResponse),
}

/// Issues a listings fetch for the current filters.
fn fetch_listings(state: &mut AppState) -> Action {
    let seq = state.begin_listings_fetch();
    let query = state.filters.build_query_params();
    tracing::debug!(seq, page = state.filters.page, query = %query.to_query_string(), "fetching listings");
    Action::PostToWorker(WorkerMessage::FetchListings { seq, query })
}

/// Enters detail view and records it in history.
fn open_detail(state: &mut AppState, listing: Listing) -> Vec<Action> {
    let id = listing.id;
    tracing::debug!(listing_id = id, "opening detail view");
    state.open_detail(listing);
    vec![
        Action::PushHistory(HistoryEntry::detail(id)),
        Action::ScrollToTop,
    ]
}

/// Leaves detail view and resets the location to the root path.
fn close_detail(state: &mut AppState) -> Vec<Action> {
    tracing::debug!("closing detail view");
    state.close_detail();
    vec![Action::PushHistory(HistoryEntry::root())]
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// A `(changed, actions)` pair: `changed` is `true` when visible state was
/// modified, `actions` are side effects to run in order.
///
/// # Errors
///
/// Returns [`ListingsError::InvalidFilter`](crate::ListingsError::InvalidFilter)
/// when a `SetFilter` would set `page` or `page_size` to zero; state is left
/// unchanged.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event for debugging.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Init => {
            let fetch = fetch_listings(state);
            Ok((true, vec![fetch, Action::PostToWorker(WorkerMessage::FetchSubscriptions)]))
        }

        Event::SetFilter(update) => {
            state.filters.apply(update.clone())?;
            if state.reset_page_on_filter_change && !update.is_pagination() {
                state.filters.page = 1;
            }
            Ok((true, vec![]))
        }
        Event::ResetFilters => {
            state.filters.reset();
            Ok((true, vec![fetch_listings(state)]))
        }

        Event::FetchListings => Ok((true, vec![fetch_listings(state)])),
        Event::NextPage => {
            state.filters.next_page();
            Ok((true, vec![fetch_listings(state)]))
        }
        Event::PrevPage => {
            if state.filters.prev_page() {
                Ok((true, vec![fetch_listings(state)]))
            } else {
                tracing::debug!("already on first page");
                Ok((false, vec![]))
            }
        }

        Event::FetchSubscriptions => Ok((
            false,
            vec![Action::PostToWorker(WorkerMessage::FetchSubscriptions)],
        )),
        Event::SetSubscriptionEmail(email) => {
            state.subscription_email.clone_from(email);
            Ok((true, vec![]))
        }
        Event::Subscribe => {
            if state.subscription_email.is_empty() {
                tracing::debug!("empty subscription email, skipping");
                return Ok((false, vec![]));
            }
            let payload = SubscriptionPayload::new(state.subscription_email.clone(), &state.filters);
            tracing::debug!(email = %payload.email, "creating subscription");
            Ok((
                false,
                vec![Action::PostToWorker(WorkerMessage::CreateSubscription { payload })],
            ))
        }
        Event::DeleteSubscription { id } => Ok((
            false,
            vec![Action::Confirm {
                message: UNSUBSCRIBE_CONFIRMATION.to_string(),
                on_confirm: Box::new(Event::DeleteSubscriptionConfirmed { id: *id }),
            }],
        )),
        Event::DeleteSubscriptionConfirmed { id } => {
            tracing::debug!(subscription_id = id, "deleting subscription");
            Ok((
                false,
                vec![Action::PostToWorker(WorkerMessage::DeleteSubscription { id: *id })],
            ))
        }

        Event::OpenDetail(listing) => Ok((true, open_detail(state, listing.clone()))),
        Event::OpenListingById(id) => {
            if let Some(listing) = state.listing(*id).cloned() {
                return Ok((true, open_detail(state, listing)));
            }
            tracing::debug!(listing_id = id, "listing not on current page, loading");
            state.pending_listing = Some(*id);
            Ok((
                false,
                vec![Action::PostToWorker(WorkerMessage::FetchListing { id: *id })],
            ))
        }
        Event::CloseDetail => Ok((true, close_detail(state))),
        Event::HistoryPopped(popped) => {
            state.pending_listing = None;
            if state.view == ViewMode::Detail {
                return Ok((true, close_detail(state)));
            }
            tracing::debug!(popped = ?popped, "history pop outside detail view ignored");
            Ok((false, vec![]))
        }
        Event::SetDisplayMode(mode) => {
            if !mode.is_collection() || state.view == ViewMode::Detail {
                tracing::debug!(requested = ?mode, current = ?state.view, "display mode change ignored");
                return Ok((false, vec![]));
            }
            let changed = state.view != *mode;
            state.view = *mode;
            Ok((changed, vec![]))
        }

        Event::WorkerResponse(response) => handle_worker_response(state, response),
    }
}

/// Applies a worker completion to state.
fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> Result<(bool, Vec<Action>)> {
    match response {
        WorkerResponse::ListingsLoaded { seq, listings } => {
            if !state.is_latest_fetch(*seq) {
                tracing::debug!(seq, latest = state.listings_seq, "discarding stale listings page");
                return Ok((false, vec![]));
            }
            state.loading = false;
            state.listings.clone_from(listings);
            Ok((true, vec![Action::ScrollToTop]))
        }
        WorkerResponse::ListingsFailed { seq, message } => {
            if !state.is_latest_fetch(*seq) {
                tracing::debug!(seq, latest = state.listings_seq, error = %message, "discarding stale listings failure");
                return Ok((false, vec![]));
            }
            tracing::error!(error = %message, "error fetching listings");
            state.loading = false;
            Ok((true, vec![Action::Alert(LISTINGS_ERROR_ALERT.to_string())]))
        }

        WorkerResponse::ListingLoaded { listing } => {
            if !state.take_pending_listing(listing.id) {
                tracing::debug!(
                    listing_id = listing.id,
                    pending = ?state.pending_listing,
                    "discarding superseded listing"
                );
                return Ok((false, vec![]));
            }
            Ok((true, open_detail(state, listing.clone())))
        }
        WorkerResponse::ListingFailed { id, message } => {
            if !state.take_pending_listing(*id) {
                tracing::debug!(listing_id = id, error = %message, "discarding superseded listing failure");
                return Ok((false, vec![]));
            }
            tracing::error!(listing_id = id, error = %message, "error fetching listing");
            Ok((false, vec![Action::Alert(LISTING_ERROR_ALERT.to_string())]))
        }

        WorkerResponse::SubscriptionsLoaded { subscriptions } => {
            state.subscriptions.clone_from(subscriptions);
            Ok((true, vec![]))
        }
        WorkerResponse::SubscriptionsFailed { message } => {
            tracing::warn!(error = %message, "error fetching subscriptions");
            Ok((false, vec![]))
        }

        WorkerResponse::SubscriptionCreated { subscription } => {
            tracing::debug!(subscription_id = subscription.id, "subscription created");
            state.subscriptions.push(subscription.clone());
            state.subscription_email.clear();
            Ok((true, vec![Action::Alert(SUBSCRIBE_SUCCESS_ALERT.to_string())]))
        }
        WorkerResponse::SubscribeFailed { message } => {
            tracing::error!(error = %message, "error subscribing");
            Ok((false, vec![Action::Alert(SUBSCRIBE_ERROR_ALERT.to_string())]))
        }

        WorkerResponse::SubscriptionDeleted { id } => {
            let removed = state.remove_subscription(*id);
            tracing::debug!(subscription_id = id, removed, "subscription deleted");
            Ok((removed, vec![]))
        }
        WorkerResponse::DeleteFailed { id, message } => {
            tracing::error!(subscription_id = id, error = %message, "error deleting subscription");
            Ok((false, vec![Action::Alert(UNSUBSCRIBE_ERROR_ALERT.to_string())]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Subscription;

    fn fetched_query(actions: &[Action]) -> (u64, String) {
        match actions {
            [Action::PostToWorker(WorkerMessage::FetchListings { seq, query })] => {
                (*seq, query.to_query_string())
            }
            other => panic!("expected a single listings fetch, got {other:?}"),
        }
    }

    fn subscription(id: i64) -> Subscription {
        Subscription {
            id,
            email: format!("user{id}@example.ro"),
            filters: serde_json::Map::new(),
            created_at: None,
        }
    }

    #[test]
    fn set_filter_does_not_fetch_or_reset_page() {
        let mut state = AppState::new();
        state.filters.page = 3;

        let (changed, actions) =
            handle_event(&mut state, &Event::SetFilter(FilterUpdate::County("Cluj".into()))).unwrap();

        assert!(changed);
        assert!(actions.is_empty());
        assert_eq!(state.filters.county, "Cluj");
        assert_eq!(state.filters.page, 3);
    }

    #[test]
    fn set_filter_resets_page_when_configured() {
        let mut state = AppState {
            reset_page_on_filter_change: true,
            ..AppState::new()
        };
        state.filters.page = 3;

        handle_event(&mut state, &Event::SetFilter(FilterUpdate::Search("casa".into()))).unwrap();
        assert_eq!(state.filters.page, 1);

        handle_event(&mut state, &Event::SetFilter(FilterUpdate::Page(5))).unwrap();
        assert_eq!(state.filters.page, 5);
    }

    #[test]
    fn invalid_page_is_an_error() {
        let mut state = AppState::new();
        assert!(handle_event(&mut state, &Event::SetFilter(FilterUpdate::Page(0))).is_err());
        assert_eq!(state.filters.page, 1);
    }

    #[test]
    fn reset_filters_fetches_first_page() {
        let mut state = AppState::new();
        state.filters.search = "teren".into();
        state.filters.page = 4;

        let (_, actions) = handle_event(&mut state, &Event::ResetFilters).unwrap();
        let (_, query) = fetched_query(&actions);

        assert_eq!(query, "page=1&page_size=12");
        assert!(state.loading);
    }

    #[test]
    fn next_page_three_times_issues_three_fetches() {
        let mut state = AppState::new();
        let mut seqs = Vec::new();

        for _ in 0..3 {
            let (_, actions) = handle_event(&mut state, &Event::NextPage).unwrap();
            seqs.push(fetched_query(&actions).0);
        }

        assert_eq!(state.filters.page, 4);
        assert_eq!(seqs, vec![1, 2, 3]);
    }

    #[test]
    fn prev_page_on_first_page_is_noop() {
        let mut state = AppState::new();
        let (changed, actions) = handle_event(&mut state, &Event::PrevPage).unwrap();

        assert!(!changed);
        assert!(actions.is_empty());
        assert_eq!(state.filters.page, 1);
        assert!(!state.loading);
    }

    #[test]
    fn latest_page_replaces_listings_and_scrolls() {
        let mut state = AppState::new();
        state.listings = vec![Listing::new(1)];
        let (_, actions) = handle_event(&mut state, &Event::FetchListings).unwrap();
        let (seq, _) = fetched_query(&actions);

        let loaded = WorkerResponse::ListingsLoaded {
            seq,
            listings: vec![Listing::new(5), Listing::new(3)],
        };
        let (changed, actions) = handle_event(&mut state, &Event::WorkerResponse(loaded)).unwrap();

        assert!(changed);
        assert_eq!(actions, vec![Action::ScrollToTop]);
        assert!(!state.loading);
        let ids: Vec<i64> = state.listings.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![5, 3]);
    }

    #[test]
    fn stale_page_is_discarded_and_loading_kept() {
        let mut state = AppState::new();
        handle_event(&mut state, &Event::NextPage).unwrap();
        handle_event(&mut state, &Event::NextPage).unwrap();

        let stale = WorkerResponse::ListingsLoaded {
            seq: 1,
            listings: vec![Listing::new(99)],
        };
        let (changed, actions) = handle_event(&mut state, &Event::WorkerResponse(stale)).unwrap();

        assert!(!changed);
        assert!(actions.is_empty());
        assert!(state.listings.is_empty());
        assert!(state.loading);
    }

    #[test]
    fn failed_fetch_keeps_listings_and_alerts() {
        let mut state = AppState::new();
        state.listings = vec![Listing::new(1)];
        handle_event(&mut state, &Event::FetchListings).unwrap();

        let failed = WorkerResponse::ListingsFailed {
            seq: state.listings_seq,
            message: "Failed to fetch listings (HTTP 500)".into(),
        };
        let (_, actions) = handle_event(&mut state, &Event::WorkerResponse(failed)).unwrap();

        assert!(!state.loading);
        assert_eq!(state.listings, vec![Listing::new(1)]);
        assert_eq!(actions, vec![Action::Alert(LISTINGS_ERROR_ALERT.to_string())]);
    }

    #[test]
    fn subscribe_with_empty_email_is_skipped() {
        let mut state = AppState::new();
        let (changed, actions) = handle_event(&mut state, &Event::Subscribe).unwrap();
        assert!(!changed);
        assert!(actions.is_empty());
    }

    #[test]
    fn subscribe_posts_mapped_payload() {
        let mut state = AppState::new();
        state.filters.status_active = true;
        state.filters.page = 6;
        handle_event(&mut state, &Event::SetSubscriptionEmail("a@b.ro".into())).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::Subscribe).unwrap();
        let [Action::PostToWorker(WorkerMessage::CreateSubscription { payload })] = actions.as_slice() else {
            panic!("expected a create request, got {actions:?}");
        };

        assert_eq!(payload.email, "a@b.ro");
        assert_eq!(payload.filters.auction_status.as_deref(), Some("Licitatie in desfasurare"));
        assert!(state.subscriptions.is_empty());
    }

    #[test]
    fn created_subscription_is_appended_and_input_cleared() {
        let mut state = AppState::new();
        state.subscriptions = vec![subscription(1)];
        state.subscription_email = "user2@example.ro".into();

        let created = WorkerResponse::SubscriptionCreated {
            subscription: subscription(2),
        };
        let (_, actions) = handle_event(&mut state, &Event::WorkerResponse(created)).unwrap();

        assert_eq!(state.subscriptions.len(), 2);
        assert_eq!(state.subscriptions[1].id, 2);
        assert!(state.subscription_email.is_empty());
        assert_eq!(actions, vec![Action::Alert(SUBSCRIBE_SUCCESS_ALERT.to_string())]);
    }

    #[test]
    fn failed_subscribe_keeps_collection_and_email() {
        let mut state = AppState::new();
        state.subscription_email = "a@b.ro".into();

        let failed = WorkerResponse::SubscribeFailed { message: "boom".into() };
        let (_, actions) = handle_event(&mut state, &Event::WorkerResponse(failed)).unwrap();

        assert!(state.subscriptions.is_empty());
        assert_eq!(state.subscription_email, "a@b.ro");
        assert_eq!(actions, vec![Action::Alert(SUBSCRIBE_ERROR_ALERT.to_string())]);
    }

    #[test]
    fn delete_asks_for_confirmation_first() {
        let mut state = AppState::new();
        state.subscriptions = vec![subscription(3)];

        let (_, actions) = handle_event(&mut state, &Event::DeleteSubscription { id: 3 }).unwrap();

        assert_eq!(
            actions,
            vec![Action::Confirm {
                message: UNSUBSCRIBE_CONFIRMATION.to_string(),
                on_confirm: Box::new(Event::DeleteSubscriptionConfirmed { id: 3 }),
            }]
        );
        assert_eq!(state.subscriptions.len(), 1);
    }

    #[test]
    fn deleted_subscription_is_removed_only_on_success() {
        let mut state = AppState::new();
        state.subscriptions = vec![subscription(3), subscription(4)];

        let failed = WorkerResponse::DeleteFailed { id: 3, message: "boom".into() };
        handle_event(&mut state, &Event::WorkerResponse(failed)).unwrap();
        assert_eq!(state.subscriptions.len(), 2);

        let deleted = WorkerResponse::SubscriptionDeleted { id: 3 };
        handle_event(&mut state, &Event::WorkerResponse(deleted)).unwrap();
        let ids: Vec<i64> = state.subscriptions.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![4]);
    }

    #[test]
    fn subscription_refresh_failure_is_silent() {
        let mut state = AppState::new();
        state.subscriptions = vec![subscription(1)];

        let failed = WorkerResponse::SubscriptionsFailed { message: "offline".into() };
        let (changed, actions) = handle_event(&mut state, &Event::WorkerResponse(failed)).unwrap();

        assert!(!changed);
        assert!(actions.is_empty());
        assert_eq!(state.subscriptions.len(), 1);
    }

    #[test]
    fn open_detail_pushes_history_and_scrolls() {
        let mut state = AppState::new();
        let listing = Listing::new(7).with_attribute("title", "Casa");

        let (_, actions) = handle_event(&mut state, &Event::OpenDetail(listing.clone())).unwrap();

        assert_eq!(state.view, ViewMode::Detail);
        assert_eq!(state.selected_listing, Some(listing));
        assert_eq!(
            actions,
            vec![Action::PushHistory(HistoryEntry::detail(7)), Action::ScrollToTop]
        );
    }

    #[test]
    fn open_then_close_detail_pushes_root() {
        let mut state = AppState::new();
        handle_event(&mut state, &Event::OpenDetail(Listing::new(7))).unwrap();

        let (changed, actions) = handle_event(&mut state, &Event::CloseDetail).unwrap();

        assert!(changed);
        assert_eq!(state.view, ViewMode::Grid);
        assert!(state.selected_listing.is_none());
        assert_eq!(actions, vec![Action::PushHistory(HistoryEntry::root())]);
    }

    #[test]
    fn late_listing_after_close_is_ignored() {
        let mut state = AppState::new();
        handle_event(&mut state, &Event::OpenListingById(8)).unwrap();
        handle_event(&mut state, &Event::CloseDetail).unwrap();

        let loaded = WorkerResponse::ListingLoaded { listing: Listing::new(8) };
        let (changed, actions) = handle_event(&mut state, &Event::WorkerResponse(loaded)).unwrap();

        assert!(!changed);
        assert!(actions.is_empty());
        assert_eq!(state.view, ViewMode::Grid);
        assert!(state.selected_listing.is_none());
    }

    #[test]
    fn late_listing_does_not_replace_newer_detail() {
        let mut state = AppState::new();
        handle_event(&mut state, &Event::OpenListingById(8)).unwrap();
        handle_event(&mut state, &Event::OpenDetail(Listing::new(9))).unwrap();

        let loaded = WorkerResponse::ListingLoaded { listing: Listing::new(8) };
        handle_event(&mut state, &Event::WorkerResponse(loaded)).unwrap();
        let failed = WorkerResponse::ListingFailed { id: 8, message: "gone".into() };
        let (_, actions) = handle_event(&mut state, &Event::WorkerResponse(failed)).unwrap();

        assert!(actions.is_empty());
        assert_eq!(state.selected_listing.as_ref().map(|l| l.id), Some(9));
    }

    #[test]
    fn only_latest_lookup_opens_detail() {
        let mut state = AppState::new();
        handle_event(&mut state, &Event::OpenListingById(8)).unwrap();
        handle_event(&mut state, &Event::OpenListingById(9)).unwrap();

        let stale = WorkerResponse::ListingLoaded { listing: Listing::new(8) };
        handle_event(&mut state, &Event::WorkerResponse(stale)).unwrap();
        assert_eq!(state.view, ViewMode::Grid);

        let current = WorkerResponse::ListingLoaded { listing: Listing::new(9) };
        let (changed, actions) = handle_event(&mut state, &Event::WorkerResponse(current)).unwrap();

        assert!(changed);
        assert_eq!(state.selected_listing.as_ref().map(|l| l.id), Some(9));
        assert_eq!(
            actions,
            vec![Action::PushHistory(HistoryEntry::detail(9)), Action::ScrollToTop]
        );
        assert!(state.pending_listing.is_none());
    }

    #[test]
    fn history_pop_closes_detail() {
        let mut state = AppState::new();
        handle_event(&mut state, &Event::OpenDetail(Listing::new(7))).unwrap();

        let (changed, actions) =
            handle_event(&mut state, &Event::HistoryPopped(HistoryState::default())).unwrap();

        assert!(changed);
        assert_eq!(state.view, ViewMode::Grid);
        assert!(state.selected_listing.is_none());
        assert_eq!(actions, vec![Action::PushHistory(HistoryEntry::root())]);
    }

    #[test]
    fn history_pop_never_reenters_detail() {
        let mut state = AppState::new();
        let popped = HistoryEntry::detail(7).state;

        let (changed, actions) = handle_event(&mut state, &Event::HistoryPopped(popped)).unwrap();

        assert!(!changed);
        assert!(actions.is_empty());
        assert_eq!(state.view, ViewMode::Grid);
    }

    #[test]
    fn open_by_id_uses_current_page_when_possible() {
        let mut state = AppState::new();
        state.listings = vec![Listing::new(2)];

        let (_, actions) = handle_event(&mut state, &Event::OpenListingById(2)).unwrap();
        assert_eq!(state.view, ViewMode::Detail);
        assert!(matches!(actions[0], Action::PushHistory(_)));

        state.close_detail();
        let (_, actions) = handle_event(&mut state, &Event::OpenListingById(8)).unwrap();
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::FetchListing { id: 8 })]
        );
        assert_eq!(state.view, ViewMode::Grid);
    }

    #[test]
    fn display_mode_toggles_between_grid_and_list_only() {
        let mut state = AppState::new();

        let (changed, _) = handle_event(&mut state, &Event::SetDisplayMode(ViewMode::List)).unwrap();
        assert!(changed);
        assert_eq!(state.view, ViewMode::List);

        let (changed, _) = handle_event(&mut state, &Event::SetDisplayMode(ViewMode::Detail)).unwrap();
        assert!(!changed);
        assert_eq!(state.view, ViewMode::List);
    }

    #[test]
    fn init_fetches_listings_and_subscriptions() {
        let mut state = AppState::new();
        let (_, actions) = handle_event(&mut state, &Event::Init).unwrap();

        assert_eq!(actions.len(), 2);
        assert!(matches!(
            actions[0],
            Action::PostToWorker(WorkerMessage::FetchListings { seq: 1, .. })
        ));
        assert_eq!(actions[1], Action::PostToWorker(WorkerMessage::FetchSubscriptions));
    }
}
