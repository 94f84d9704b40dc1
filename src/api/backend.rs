//! Listings API backend abstraction.
//!
//! This module defines the [`ListingsBackend`] trait that abstracts over the
//! remote listings service. The application never talks HTTP directly: the
//! worker calls these methods, so tests can substitute an in-memory backend.
//!
//! # Design Philosophy
//!
//! The trait is minimal and maps one method to one endpoint. Implementations
//! must treat any non-2xx status as an error and must not retry.

use crate::domain::error::Result;
use crate::domain::{Listing, QueryParams, Subscription, SubscriptionPayload};
use async_trait::async_trait;

/// Abstraction over the listings and subscriptions REST service.
///
/// # Implementations
///
/// - [`HttpBackend`](crate::api::HttpBackend): `reqwest` client against a base URL
///
/// # Examples
///
/// ```no_run
/// use listings_client::api::{HttpBackend, ListingsBackend};
/// use listings_client::domain::FilterCriteria;
/// use std::time::Duration;
///
/// # async fn run() -> listings_client::Result<()> {
/// let backend = HttpBackend::new("http://localhost:8000/", Duration::from_secs(30))?;
/// let listings = backend
///     .fetch_listings(&FilterCriteria::default().build_query_params())
///     .await?;
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait ListingsBackend: Send + Sync {
    /// `GET /listings/?{query}`: one page of listings in server order.
    ///
    /// # Errors
    ///
    /// Returns a network error if the request fails, the status is not 2xx or
    /// the body is not a listing array.
    async fn fetch_listings(&self, query: &QueryParams) -> Result<Vec<Listing>>;

    /// `GET /listings/{id}`: a single listing.
    ///
    /// # Errors
    ///
    /// Returns a network error if the request fails or the listing is unknown.
    async fn fetch_listing(&self, id: i64) -> Result<Listing>;

    /// `GET /subscriptions/`: every stored subscription.
    ///
    /// # Errors
    ///
    /// Returns a network error if the request fails or the status is not 2xx.
    async fn fetch_subscriptions(&self) -> Result<Vec<Subscription>>;

    /// `POST /subscriptions/`: creates a subscription and returns it with its id.
    ///
    /// # Errors
    ///
    /// Returns a network error if the request fails or the server rejects it.
    async fn create_subscription(&self, payload: &SubscriptionPayload) -> Result<Subscription>;

    /// `DELETE /subscriptions/{id}`. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns a network error if the request fails or the status is not 2xx.
    async fn delete_subscription(&self, id: i64) -> Result<()>;
}
