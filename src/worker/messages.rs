//! Worker message types for request/completion communication.
//!
//! This module defines the protocol between the application layer and the
//! worker that performs network I/O. The handler emits a [`WorkerMessage`]
//! inside an action; the worker answers every message with exactly one
//! [`WorkerResponse`], which re-enters the handler as an event.

use crate::domain::{Listing, QueryParams, Subscription, SubscriptionPayload};

/// Requests sent from the application layer to the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerMessage {
    /// Fetch one page of listings.
    FetchListings {
        /// Sequence number of this fetch; only the latest one is applied.
        seq: u64,
        /// Encoded filter criteria.
        query: QueryParams,
    },

    /// Fetch a single listing for the detail view.
    FetchListing {
        /// Listing id.
        id: i64,
    },

    /// Refresh the subscription collection.
    FetchSubscriptions,

    /// Create a subscription from a payload snapshot.
    CreateSubscription {
        /// Email and filter snapshot to send.
        payload: SubscriptionPayload,
    },

    /// Delete a subscription after the user confirmed.
    DeleteSubscription {
        /// Subscription id.
        id: i64,
    },
}

/// Completions sent from the worker back to the application layer.
///
/// Every request variant has a success and a failure completion so the
/// handler can always clear progress state.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerResponse {
    /// A listing page was loaded.
    ListingsLoaded {
        /// Sequence number of the originating fetch.
        seq: u64,
        /// Listings in server order.
        listings: Vec<Listing>,
    },

    /// A listing page could not be loaded.
    ListingsFailed {
        /// Sequence number of the originating fetch.
        seq: u64,
        /// Human-readable error message.
        message: String,
    },

    /// A single listing was loaded.
    ListingLoaded {
        /// The listing.
        listing: Listing,
    },

    /// A single listing could not be loaded.
    ListingFailed {
        /// Requested listing id.
        id: i64,
        /// Human-readable error message.
        message: String,
    },

    /// Subscriptions were loaded.
    SubscriptionsLoaded {
        /// Every subscription known to the server.
        subscriptions: Vec<Subscription>,
    },

    /// Subscriptions could not be loaded.
    SubscriptionsFailed {
        /// Human-readable error message.
        message: String,
    },

    /// The server acknowledged a new subscription.
    SubscriptionCreated {
        /// Subscription as stored by the server.
        subscription: Subscription,
    },

    /// Subscription creation failed.
    SubscribeFailed {
        /// Human-readable error message.
        message: String,
    },

    /// The server deleted a subscription.
    SubscriptionDeleted {
        /// Deleted subscription id.
        id: i64,
    },

    /// Subscription deletion failed.
    DeleteFailed {
        /// Subscription id that was not deleted.
        id: i64,
        /// Human-readable error message.
        message: String,
    },
}
