//! Worker implementation that executes API requests.
//!
//! The worker owns a shared handle to a [`ListingsBackend`] and turns each
//! [`WorkerMessage`] into a `'static` future resolving to a [`WorkerResponse`].
//! Errors never escape: every failure is folded into the matching failure
//! response, so the application layer always observes a completion.

use crate::api::ListingsBackend;
use crate::domain::error::Result;
use crate::worker::{WorkerMessage, WorkerResponse};
use std::sync::Arc;
use tracing::Instrument;

/// Executes worker messages against a backend.
#[derive(Debug)]
pub struct ApiWorker<B> {
    backend: Arc<B>,
}

impl<B> Clone for ApiWorker<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B: ListingsBackend + 'static> ApiWorker<B> {
    /// Creates a worker around a backend.
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Returns the shared backend handle.
    #[must_use]
    pub fn backend(&self) -> &Arc<B> {
        &self.backend
    }

    /// Helper for handling backend results with consistent logging.
    ///
    /// Standardizes error logging across all operations in the worker.
    fn handle_api_result<T, S, F>(operation: &str, result: Result<T>, on_success: S, on_failure: F) -> WorkerResponse
    where
        S: FnOnce(T) -> WorkerResponse,
        F: FnOnce(String) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "api operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::debug!(operation = operation, error = %e, "api operation failed");
                on_failure(e.to_string())
            }
        }
    }

    /// Processes a worker message and resolves to its completion.
    ///
    /// The returned future owns everything it needs, so callers can hold many
    /// of them in flight at once.
    pub async fn handle_message(self, message: WorkerMessage) -> WorkerResponse {
        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        self.dispatch(message).instrument(span).await
    }

    async fn dispatch(self, message: WorkerMessage) -> WorkerResponse {
        match message {
            WorkerMessage::FetchListings { seq, query } => Self::handle_api_result(
                "fetch listings",
                self.backend.fetch_listings(&query).await,
                |listings| {
                    tracing::debug!(seq, count = listings.len(), "listings page loaded");
                    WorkerResponse::ListingsLoaded { seq, listings }
                },
                |message| WorkerResponse::ListingsFailed { seq, message },
            ),

            WorkerMessage::FetchListing { id } => Self::handle_api_result(
                "fetch listing",
                self.backend.fetch_listing(id).await,
                |listing| WorkerResponse::ListingLoaded { listing },
                |message| WorkerResponse::ListingFailed { id, message },
            ),

            WorkerMessage::FetchSubscriptions => Self::handle_api_result(
                "fetch subscriptions",
                self.backend.fetch_subscriptions().await,
                |subscriptions| WorkerResponse::SubscriptionsLoaded { subscriptions },
                |message| WorkerResponse::SubscriptionsFailed { message },
            ),

            WorkerMessage::CreateSubscription { payload } => Self::handle_api_result(
                "create subscription",
                self.backend.create_subscription(&payload).await,
                |subscription| WorkerResponse::SubscriptionCreated { subscription },
                |message| WorkerResponse::SubscribeFailed { message },
            ),

            WorkerMessage::DeleteSubscription { id } => Self::handle_api_result(
                "delete subscription",
                self.backend.delete_subscription(id).await,
                |()| WorkerResponse::SubscriptionDeleted { id },
                |message| WorkerResponse::DeleteFailed { id, message },
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{ListingsError, FETCH_LISTINGS_FAILED};
    use crate::domain::{FilterCriteria, Listing, QueryParams, Subscription, SubscriptionPayload};
    use async_trait::async_trait;

    /// Backend whose every call fails with a 503.
    struct Unavailable;

    fn unavailable(context: &'static str) -> ListingsError {
        ListingsError::Status { context, status: 503 }
    }

    #[async_trait]
    impl ListingsBackend for Unavailable {
        async fn fetch_listings(&self, _query: &QueryParams) -> Result<Vec<Listing>> {
            Err(unavailable(FETCH_LISTINGS_FAILED))
        }
        async fn fetch_listing(&self, _id: i64) -> Result<Listing> {
            Err(unavailable("Failed to fetch listing"))
        }
        async fn fetch_subscriptions(&self) -> Result<Vec<Subscription>> {
            Err(unavailable("Failed to fetch subscriptions"))
        }
        async fn create_subscription(&self, _payload: &SubscriptionPayload) -> Result<Subscription> {
            Err(unavailable("Failed to subscribe"))
        }
        async fn delete_subscription(&self, _id: i64) -> Result<()> {
            Err(unavailable("Failed to delete subscription"))
        }
    }

    #[tokio::test]
    async fn failures_become_failure_completions() {
        let worker = ApiWorker::new(Unavailable);

        let response = worker
            .clone()
            .handle_message(WorkerMessage::FetchListings {
                seq: 4,
                query: FilterCriteria::default().build_query_params(),
            })
            .await;
        assert_eq!(
            response,
            WorkerResponse::ListingsFailed {
                seq: 4,
                message: "Failed to fetch listings (HTTP 503)".to_string(),
            }
        );

        let response = worker
            .handle_message(WorkerMessage::DeleteSubscription { id: 3 })
            .await;
        assert!(matches!(response, WorkerResponse::DeleteFailed { id: 3, .. }));
    }
}
